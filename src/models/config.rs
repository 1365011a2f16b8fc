use std::path::{Path, PathBuf};

/// Name of the project folder that receives the renamed fonts
const FONTS_DIR_NAME: &str = "fonts";
/// Name of the dependency cache the fonts are taken from
const DEPS_DIR_NAME: &str = "node_modules";

/// Configuration for a materialization run
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// Directory the relative defaults are resolved against
    pub project_root: PathBuf,
    /// Destination directory for the copied fonts
    pub fonts_dir: PathBuf,
    /// Dependency root the mapping sources are relative to
    pub deps_root: PathBuf,
}

impl Config {
    /// Create a configuration with the default layout under `project_root`
    pub fn new(project_root: &Path, debug_mode: bool) -> Self {
        Self {
            debug_mode,
            project_root: project_root.to_path_buf(),
            fonts_dir: project_root.join(FONTS_DIR_NAME),
            deps_root: project_root.join(DEPS_DIR_NAME),
        }
    }
}
