//! Copying the bundled fonts into place

pub mod processor;

pub use processor::run;
