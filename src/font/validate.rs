use std::collections::HashSet;
use lazy_static::lazy_static;
use regex::Regex;
use crate::error::{Error, Result};
use crate::models::FontMapping;
use crate::utils::is_bare_file_name;

lazy_static! {
    /// `@fontsource/<package>/files/<package>-latin-<weight>-normal.woff2`
    static ref SOURCE_PATTERN: Regex =
        Regex::new(r"^@fontsource/([a-z0-9-]+)/files/([a-z0-9-]+)-latin-\d{3}-normal\.woff2$").unwrap();
}

/// Check the invariants of a mapping table before anything is copied
pub fn validate_mappings(mappings: &[FontMapping]) -> Result<()> {
    let mut seen = HashSet::new();

    for mapping in mappings {
        if !is_bare_file_name(mapping.destination) {
            return Err(Error::Mapping(format!(
                "destination '{}' must be a plain file name",
                mapping.destination
            )));
        }

        if !seen.insert(mapping.destination) {
            return Err(Error::Mapping(format!(
                "destination '{}' is listed more than once",
                mapping.destination
            )));
        }

        check_source(mapping)?;
    }

    Ok(())
}

/// Sources must sit inside a fontsource package under the dependency root
fn check_source(mapping: &FontMapping) -> Result<()> {
    let caps = SOURCE_PATTERN.captures(mapping.source).ok_or_else(|| {
        Error::Mapping(format!("unexpected source layout '{}'", mapping.source))
    })?;

    // regex has no backreferences, so compare the two package names here
    if caps[1] != caps[2] {
        return Err(Error::Mapping(format!(
            "source '{}' mixes packages '{}' and '{}'",
            mapping.source, &caps[1], &caps[2]
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FONTS;

    fn expect_mapping_error(mappings: &[FontMapping], needle: &str) {
        match validate_mappings(mappings) {
            Err(Error::Mapping(msg)) => assert!(msg.contains(needle), "unexpected message: {}", msg),
            other => panic!("expected mapping error, got {:?}", other),
        }
    }

    #[test]
    fn bundled_table_is_valid() {
        validate_mappings(FONTS).unwrap();
        assert_eq!(FONTS.len(), 9);
    }

    #[test]
    fn duplicate_destination_is_rejected() {
        let table = [
            FontMapping::new(
                "@fontsource/space-mono/files/space-mono-latin-400-normal.woff2",
                "SpaceMono-Regular.woff2",
            ),
            FontMapping::new(
                "@fontsource/space-mono/files/space-mono-latin-400-normal.woff2",
                "SpaceMono-Regular.woff2",
            ),
        ];
        expect_mapping_error(&table, "more than once");
    }

    #[test]
    fn destination_with_directory_is_rejected() {
        let table = [FontMapping::new(
            "@fontsource/space-mono/files/space-mono-latin-400-normal.woff2",
            "mono/SpaceMono-Regular.woff2",
        )];
        expect_mapping_error(&table, "plain file name");
    }

    #[test]
    fn destination_names_are_not_tied_to_source_weight() {
        let table = [FontMapping::new(
            "@fontsource/space-mono/files/space-mono-latin-700-normal.woff2",
            "SpaceMono.woff2",
        )];
        validate_mappings(&table).unwrap();
    }

    #[test]
    fn escaping_source_is_rejected() {
        let table = [FontMapping::new(
            "../@fontsource/space-mono/files/space-mono-latin-400-normal.woff2",
            "SpaceMono-Regular.woff2",
        )];
        expect_mapping_error(&table, "unexpected source layout");
    }

    #[test]
    fn mixed_packages_are_rejected() {
        let table = [FontMapping::new(
            "@fontsource/space-mono/files/jetbrains-mono-latin-400-normal.woff2",
            "SpaceMono-Regular.woff2",
        )];
        expect_mapping_error(&table, "mixes packages");
    }

    #[test]
    fn foreign_source_layout_is_rejected() {
        let table = [FontMapping::new("fonts/SpaceMono.ttf", "SpaceMono-Regular.woff2")];
        expect_mapping_error(&table, "unexpected source layout");
    }
}
