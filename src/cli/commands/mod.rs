pub mod add;
pub mod config;
pub mod dates;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod schedule;
pub mod serve;
