//! Config document abstraction layer.
//!
//! `ConfigDocument`, `ConfigSection`, and `ParseNode` wrap the `kdl` crate
//! types so the rest of the config module never touches KDL directly.

/// Parsed KDL document paired with its source text.
pub(super) struct ConfigDocument {
    doc: kdl::KdlDocument,
    source: String,
}

/// Single KDL node with source context for line-number reporting.
pub(super) struct ParseNode<'a> {
    node: &'a kdl::KdlNode,
    source: &'a str,
}

/// Scalar value of a node entry, reduced to what the config understands.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum EntryValue<'a> {
    String(&'a str),
    Integer(i128),
    Other,
}

impl ConfigDocument {
    /// Parse a KDL source string into a document.
    pub(super) fn parse(source: &str) -> Result<Self, super::ConfigError> {
        let doc: kdl::KdlDocument = source
            .parse()
            .map_err(|e: kdl::KdlError| super::ConfigError::ParseError(e.to_string()))?;
        Ok(Self {
            doc,
            source: source.to_string(),
        })
    }

    /// Get a named top-level section's children as a borrowed `ConfigSection`.
    ///
    /// `section("rules")` returns the contents of the first `rules { … }` block;
    /// repeated sections are rejected before this is called.
    pub(super) fn section(&self, name: &str) -> Option<ConfigSection<'_>> {
        self.doc
            .get(name)
            .and_then(|n| n.children())
            .map(|doc| ConfigSection {
                doc,
                source: &self.source,
            })
    }

    /// Top-level nodes, in document order.
    pub(super) fn top_level_nodes(&self) -> Vec<ParseNode<'_>> {
        self.doc
            .nodes()
            .iter()
            .map(|node| ParseNode {
                node,
                source: &self.source,
            })
            .collect()
    }
}

/// Borrowed view into a KDL section (children block of a top-level node).
pub(super) struct ConfigSection<'a> {
    doc: &'a kdl::KdlDocument,
    source: &'a str,
}

impl<'a> ConfigSection<'a> {
    /// Iterate over all child nodes, in document order.
    pub(super) fn nodes(&self) -> Vec<ParseNode<'a>> {
        self.doc
            .nodes()
            .iter()
            .map(|node| ParseNode {
                node,
                source: self.source,
            })
            .collect()
    }
}

impl<'a> ParseNode<'a> {
    /// The node's identifier (e.g. `"pull_request.*"`, `"api-base-url"`).
    pub(super) fn name(&self) -> &'a str {
        self.node.name().value()
    }

    /// All entries of this node, reduced to [`EntryValue`].
    pub(super) fn values(&self) -> Vec<EntryValue<'a>> {
        self.node
            .entries()
            .iter()
            .map(|e| {
                let value = e.value();
                if let Some(s) = value.as_string() {
                    EntryValue::String(s)
                } else if let Some(i) = value.as_integer() {
                    EntryValue::Integer(i)
                } else {
                    EntryValue::Other
                }
            })
            .collect()
    }

    /// Whether this node has a children block `{ … }`.
    pub(super) fn has_children(&self) -> bool {
        self.node.children().is_some()
    }

    /// 1-based line number of this node in the original source.
    pub(super) fn line(&self) -> usize {
        let offset = self.node.span().offset();
        self.source[..offset.min(self.source.len())]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_lookup_and_lines() {
        let doc = ConfigDocument::parse("rules {\n    ping \"a.ts\"\n    issue \"b.ts\"\n}\n").unwrap();
        let section = doc.section("rules").unwrap();
        let nodes = section.nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].name(), "ping");
        assert_eq!(nodes[0].line(), 2);
        assert_eq!(nodes[1].line(), 3);
        assert_eq!(nodes[1].values(), vec![EntryValue::String("b.ts")]);
    }

    #[test]
    fn missing_section_is_none() {
        let doc = ConfigDocument::parse("github {\n}\n").unwrap();
        assert!(doc.section("rules").is_none());
    }

    #[test]
    fn integer_and_other_values() {
        let doc = ConfigDocument::parse("github {\n    id 42 #true\n}\n").unwrap();
        let nodes = doc.section("github").unwrap().nodes();
        assert_eq!(
            nodes[0].values(),
            vec![EntryValue::Integer(42), EntryValue::Other]
        );
    }

    #[test]
    fn top_level_nodes_in_order() {
        let doc = ConfigDocument::parse("github {\n}\nrules \"x\"\n").unwrap();
        let nodes = doc.top_level_nodes();
        let names: Vec<(&str, usize, bool)> = nodes
            .iter()
            .map(|n| (n.name(), n.line(), n.has_children()))
            .collect();
        assert_eq!(names, vec![("github", 1, true), ("rules", 2, false)]);
    }
}
