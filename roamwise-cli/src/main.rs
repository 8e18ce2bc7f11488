//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::{Builder, Env};
use log::LevelFilter;

fn main() {
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_env(Env::new().filter("ROAMWISE_LOG"))
        .format_timestamp_secs()
        .format_target(false)
        .init();

    if let Err(err) = roamwise_cli::run() {
        eprintln!("roamwise: {err}");
        std::process::exit(1);
    }
}
