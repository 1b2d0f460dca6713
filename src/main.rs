//! roomroster main entrypoint.

use roomroster::run;
use roomroster::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
