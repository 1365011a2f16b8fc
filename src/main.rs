mod cli;
mod error;
mod font;
mod materializer;
mod models;
mod utils;

use std::env;
use cli::{get_help_message, parse_args, Command};
use error::Result;
use utils::log;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cwd = env::current_dir()?;

    let config = match parse_args(&args, &cwd)? {
        Command::Help => {
            println!("{}", get_help_message());
            return Ok(());
        }
        Command::Run(config) => config,
    };

    if config.debug_mode {
        println!("Debug mode enabled");
        println!("Project root: {}", config.project_root.display());
    }

    let reports = materializer::run(&config)?;
    log(&config, format!("Processed {} font mappings", reports.len()));

    Ok(())
}
