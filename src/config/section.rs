//! Shared section plumbing.
//!
//! Each top-level config block (`rules`, `github`) implements [`SectionConfig`]
//! and is parsed through [`parse_section`], which supplies the default when
//! the block is absent.

use super::document::{ConfigDocument, ConfigSection, EntryValue, ParseNode};
use super::ConfigError;

/// A top-level KDL block with its own typed configuration.
pub(super) trait SectionConfig: Default + std::fmt::Debug {
    /// KDL section name (e.g., `"rules"`, `"github"`).
    const SECTION: &'static str;

    /// Build the typed config from the section's children.
    fn from_section(section: &ConfigSection<'_>) -> Result<Self, ConfigError>;
}

/// Parse a section into its config type; `T::default()` when absent.
pub(super) fn parse_section<T: SectionConfig>(doc: &ConfigDocument) -> Result<T, ConfigError> {
    match doc.section(T::SECTION) {
        Some(section) => T::from_section(&section),
        None => Ok(T::default()),
    }
}

/// Require a node to carry exactly one string entry and no children block.
pub(super) fn single_string<'a>(
    node: &ParseNode<'a>,
    section: &str,
) -> Result<&'a str, ConfigError> {
    let line = node.line();
    let name = node.name();

    if node.has_children() {
        return Err(ConfigError::ParseError(format!(
            "line {line}: {section} node \"{name}\" must not have a children block"
        )));
    }

    match node.values().as_slice() {
        [EntryValue::String(s)] => Ok(*s),
        [] => Err(ConfigError::ParseError(format!(
            "line {line}: {section} node \"{name}\" requires a value"
        ))),
        [_] => Err(ConfigError::ParseError(format!(
            "line {line}: {section} node \"{name}\" must have a quoted string value"
        ))),
        _ => Err(ConfigError::ParseError(format!(
            "line {line}: {section} node \"{name}\" has multiple values; \
             use separate nodes instead"
        ))),
    }
}

/// Test-only: parse raw KDL source as the children of `T::SECTION`.
#[cfg(test)]
pub(super) fn parse_from_source<T: SectionConfig>(source: &str) -> Result<T, ConfigError> {
    let wrapped = format!("{} {{\n{source}\n}}", T::SECTION);
    let doc = ConfigDocument::parse(&wrapped)?;
    parse_section(&doc)
}
