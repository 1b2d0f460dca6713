use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with --test)
///  - an empty, well-formed employee store
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing roomroster…");

    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    success(format!(
        "roomroster initialization completed (store: {})",
        cfg.data_file
    ));
    Ok(())
}
