use std::fmt;

/// One font file to copy: where it lives in the dependency root and
/// the name it gets in the fonts directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMapping {
    /// Path relative to the dependency root
    pub source: &'static str,
    /// Bare file name inside the fonts directory
    pub destination: &'static str,
}

impl FontMapping {
    pub const fn new(source: &'static str, destination: &'static str) -> Self {
        Self { source, destination }
    }
}

/// Result of processing a single mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Bytes were copied to the destination
    Copied,
    /// Source path did not exist when checked
    MissingSource,
    /// The copy itself failed; holds the error message
    Failed(String),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied)
    }
}

/// A mapping paired with what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingReport {
    pub mapping: FontMapping,
    pub outcome: CopyOutcome,
}

impl fmt::Display for MappingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            CopyOutcome::Copied => write!(f, "  ✓ {}", self.mapping.destination),
            CopyOutcome::MissingSource => write!(
                f,
                "  ✗ {} (source not found: {})",
                self.mapping.destination, self.mapping.source
            ),
            CopyOutcome::Failed(reason) => {
                write!(f, "  ✗ {} ({})", self.mapping.destination, reason)
            }
        }
    }
}
