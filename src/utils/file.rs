use std::fs;
use std::path::Path;
use crate::error::Result;
use crate::models::Config;
use crate::utils::logging::log;

/// Create a directory (and its parents) if it doesn't exist
pub fn ensure_directory_exists(dir: &Path, config: &Config) -> Result<()> {
    if !dir.exists() {
        log(
            config,
            format!("Directory {} does not exist. Creating it now.", dir.display()),
        );
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Copy a file's bytes to `dest`, replacing whatever is there
pub fn copy_file(src: &Path, dest: &Path, config: &Config) -> Result<u64> {
    let bytes = fs::copy(src, dest)?;
    log(
        config,
        format!("Copied {} bytes from {} to {}", bytes, src.display(), dest.display()),
    );
    Ok(bytes)
}
