use std::path::{Path, PathBuf};
use crate::error::{Error, Result};
use crate::models::Config;

/// What the command line asked for
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Print usage and exit
    Help,
    /// Copy the fonts with this configuration
    Run(Config),
}

/// Parse command line arguments (without the program name).
///
/// Relative paths are resolved against `cwd`, overrides against the
/// project root.
pub fn parse_args(args: &[String], cwd: &Path) -> Result<Command> {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return Ok(Command::Help);
    }

    let mut debug_mode = false;
    let mut project_root: Option<PathBuf> = None;
    let mut fonts_dir: Option<PathBuf> = None;
    let mut deps_root: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" => debug_mode = true,
            "--fonts-dir" => fonts_dir = Some(flag_value(&mut iter, arg)?),
            "--deps-root" => deps_root = Some(flag_value(&mut iter, arg)?),
            flag if flag.starts_with('-') => {
                return Err(Error::Config(format!("unknown option '{}'", flag)));
            }
            positional => {
                if project_root.is_some() {
                    return Err(Error::Config(format!(
                        "unexpected extra argument '{}'",
                        positional
                    )));
                }
                project_root = Some(PathBuf::from(positional));
            }
        }
    }

    let project_root = match project_root {
        Some(root) => cwd.join(root),
        None => cwd.to_path_buf(),
    };

    let mut config = Config::new(&project_root, debug_mode);
    if let Some(dir) = fonts_dir {
        config.fonts_dir = project_root.join(dir);
    }
    if let Some(dir) = deps_root {
        config.deps_root = project_root.join(dir);
    }

    Ok(Command::Run(config))
}

fn flag_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<PathBuf> {
    match iter.next() {
        Some(value) if !value.starts_with("--") => Ok(PathBuf::from(value)),
        _ => Err(Error::Config(format!("{} option requires a directory", flag))),
    }
}

/// Get the help message for command-line usage
pub fn get_help_message() -> String {
    r#"FontMat - Copy bundled web fonts into the project fonts folder

USAGE:
    FontMat [OPTIONS] [PROJECT_ROOT]

ARGS:
    <PROJECT_ROOT>    Project directory (defaults to the current directory)

OPTIONS:
    -h, --help               Show this help message
    --debug                  Enable debug output
    --fonts-dir <DIR>        Destination directory (default: <PROJECT_ROOT>/fonts)
    --deps-root <DIR>        Dependency root (default: <PROJECT_ROOT>/node_modules)

Each font is copied from the dependency root into the fonts directory under
its bundled name. Missing or unreadable fonts are reported and skipped.
"#.to_string()
}
