pub mod file;
pub mod naming;
pub mod logging;
#[cfg(test)]
pub mod test_dir;

pub use file::{ensure_directory_exists, copy_file};
pub use naming::is_bare_file_name;
pub use logging::log;
