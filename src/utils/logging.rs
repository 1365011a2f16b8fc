use std::fmt::Display;
use crate::models::Config;

const DEBUG_PREFIX: &str = "[DEBUG]";

/// Print a diagnostic line when `--debug` was given
pub fn log(config: &Config, message: impl Display) {
    if config.debug_mode {
        println!("{} {}", DEBUG_PREFIX, message);
    }
}
