//! Data types shared across the crate

mod config;
mod font;

pub use config::Config;
pub use font::{CopyOutcome, FontMapping, MappingReport};
