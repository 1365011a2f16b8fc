use std::io::{self, Write};
use crate::error::{Error, Result};
use crate::font::{validate_mappings, FONTS};
use crate::models::{Config, CopyOutcome, FontMapping, MappingReport};
use crate::utils::{copy_file, ensure_directory_exists, log};

/// Copy the bundled fonts into the configured fonts directory,
/// printing one status line per font to stdout
pub fn run(config: &Config) -> Result<Vec<MappingReport>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    materialize(config, FONTS, &mut out)
}

/// Copy every mapping in order, writing status lines to `out`.
///
/// Only table validation, directory creation and writes to `out` can fail.
/// A missing or uncopyable font is recorded in its report and the loop
/// moves on to the next one.
pub fn materialize<W: Write>(
    config: &Config,
    mappings: &[FontMapping],
    out: &mut W,
) -> Result<Vec<MappingReport>> {
    validate_mappings(mappings)?;

    log(config, format!("Fonts directory: {}", config.fonts_dir.display()));
    log(config, format!("Dependency root: {}", config.deps_root.display()));

    ensure_directory_exists(&config.fonts_dir, config)?;

    writeln!(out, "Copying fonts from node_modules...")?;

    let mut reports = Vec::with_capacity(mappings.len());
    for mapping in mappings {
        let outcome = copy_mapping(mapping, config);
        let report = MappingReport { mapping: *mapping, outcome };
        writeln!(out, "{}", report)?;
        reports.push(report);
    }

    log(config, summarize(&reports));
    writeln!(out, "Fonts ready.")?;

    Ok(reports)
}

fn copy_mapping(mapping: &FontMapping, config: &Config) -> CopyOutcome {
    let src_path = config.deps_root.join(mapping.source);
    let dest_path = config.fonts_dir.join(mapping.destination);

    log(
        config,
        format!("{} -> {}", src_path.display(), dest_path.display()),
    );

    if !src_path.exists() {
        return CopyOutcome::MissingSource;
    }

    match copy_file(&src_path, &dest_path, config) {
        Ok(_) => CopyOutcome::Copied,
        Err(e) => CopyOutcome::Failed(io_message(e)),
    }
}

// Keep the bare OS message in the status line, without the "IO error:" prefix
fn io_message(err: Error) -> String {
    match err {
        Error::Io(e) => e.to_string(),
        other => other.to_string(),
    }
}

fn summarize(reports: &[MappingReport]) -> String {
    let copied = reports.iter().filter(|r| r.outcome.is_copied()).count();
    let missing = reports
        .iter()
        .filter(|r| r.outcome == CopyOutcome::MissingSource)
        .count();
    let failed = reports.len() - copied - missing;
    format!("{} copied, {} missing, {} failed", copied, missing, failed)
}
