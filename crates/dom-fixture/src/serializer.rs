//! Markup renderer
//!
//! Renders a subtree back into indented markup text for inspection and
//! golden-output comparison. Output is a pure function of the subtree and
//! the indent unit; attributes appear in map-insertion order.

use crate::arena::{Direction, DomArena};
use crate::document::Document;
use crate::error::{DomError, Result};
use crate::types::{DomNode, NodeId};

/// Fixture tree serializer
#[derive(Debug, Clone)]
pub struct DomSerializer {
    indent_unit: String,
}

impl DomSerializer {
    /// Serializer with a two-space indent unit
    pub fn new() -> Self {
        Self::with_indent("  ")
    }

    /// Serializer with a custom indent unit. An empty unit collapses the
    /// output onto a single line with no separators.
    pub fn with_indent(indent_unit: impl Into<String>) -> Self {
        Self {
            indent_unit: indent_unit.into(),
        }
    }

    /// Render `node_id` (an element) and its descendants
    pub fn render(&self, arena: &DomArena, node_id: NodeId) -> Result<String> {
        let node = arena.get(node_id)?;
        if !node.is_element() {
            return Err(DomError::InvalidNodeType {
                expected: "element".to_string(),
                actual: format!("{:?}", node.kind),
            });
        }

        let lines = self.render_lines(arena, node_id)?;
        let separator = if self.indent_unit.is_empty() { "" } else { "\n" };
        Ok(lines.join(separator))
    }

    /// Render a document's root element
    pub fn render_document(&self, document: &Document) -> Result<String> {
        self.render(document.arena(), document.document_element())
    }

    /// Lines of one element's rendering, unindented; the caller prefixes
    /// each line with one indent unit per nesting level.
    fn render_lines(&self, arena: &DomArena, node_id: NodeId) -> Result<Vec<String>> {
        let node = arena.get(node_id)?;
        let open = format!("<{}{}>", node.local_name, render_attrs(node));

        if arena.first_element_child(node_id)?.is_none() {
            // leaf element: one line, text content of the first child if any
            let text = match node.first_child {
                Some(child) => arena.get(child)?.text_content().to_string(),
                None => String::new(),
            };
            return Ok(vec![format!("{}{}</{}>", open, text, node.local_name)]);
        }

        let mut lines = vec![open];
        for child_id in arena.siblings_from(node.first_child, Direction::Forward) {
            let child = arena.get(child_id)?;
            let child_lines = if child.is_element() {
                self.render_lines(arena, child_id)?
            } else {
                // non-element child: bare line holding its text content
                vec![child.text_content().to_string()]
            };
            for line in child_lines {
                lines.push(format!("{}{}", self.indent_unit, line));
            }
        }
        lines.push(format!("</{}>", node.local_name));
        Ok(lines)
    }
}

impl Default for DomSerializer {
    fn default() -> Self {
        Self::new()
    }
}

/// Attribute list in insertion order: one leading space when non-empty,
/// double quotes inside values rewritten to single quotes to keep the
/// output well-formed
fn render_attrs(node: &DomNode) -> String {
    if node.attributes.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = node
        .attributes
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value.replace('"', "'")))
        .collect();
    format!(" {}", rendered.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{element, text};

    fn scenario_document() -> Document {
        let mut arena = DomArena::new();
        let head = element("HEAD", &[]).build(&mut arena, &[]).unwrap();
        let div1 = element("DIV", &[]).build(&mut arena, &[]).unwrap();
        let span = element("SPAN", &[("class", "foo")])
            .build(&mut arena, &[])
            .unwrap();
        let div2 = element("DIV", &[]).build(&mut arena, &[span]).unwrap();
        let body = element("BODY", &[])
            .build(&mut arena, &[div1, div2])
            .unwrap();
        Document::new(arena, &[head, body]).unwrap()
    }

    #[test]
    fn test_golden_two_space_render() {
        let doc = scenario_document();
        let output = DomSerializer::with_indent("  ")
            .render_document(&doc)
            .unwrap();

        let expected = concat!(
            "<html>\n",
            "  <head></head>\n",
            "  <body>\n",
            "    <div></div>\n",
            "    <div>\n",
            "      <span class=\"foo\"></span>\n",
            "    </div>\n",
            "  </body>\n",
            "</html>",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_indent_collapses_to_one_line() {
        let doc = scenario_document();
        let output = DomSerializer::with_indent("").render_document(&doc).unwrap();

        assert_eq!(
            output,
            "<html><head></head><body><div></div><div><span class=\"foo\"></span></div></body></html>"
        );
    }

    #[test]
    fn test_leaf_element_renders_first_child_text() {
        let mut arena = DomArena::new();
        let hello = text(&mut arena, "hello");
        let p = element("P", &[]).build(&mut arena, &[hello]).unwrap();

        let output = DomSerializer::new().render(&arena, p).unwrap();
        assert_eq!(output, "<p>hello</p>");
    }

    #[test]
    fn test_text_child_renders_as_bare_indented_line() {
        let mut arena = DomArena::new();
        let lead = text(&mut arena, "lead");
        let em = element("EM", &[]).build(&mut arena, &[]).unwrap();
        let div = element("DIV", &[]).build(&mut arena, &[lead, em]).unwrap();

        let output = DomSerializer::with_indent("  ").render(&arena, div).unwrap();
        assert_eq!(output, "<div>\n  lead\n  <em></em>\n</div>");
    }

    #[test]
    fn test_attributes_in_insertion_order_with_quote_rewriting() {
        let mut arena = DomArena::new();
        let a = element("A", &[("title", "say \"hi\""), ("href", "#")])
            .build(&mut arena, &[])
            .unwrap();

        let output = DomSerializer::new().render(&arena, a).unwrap();
        assert_eq!(output, "<a title=\"say 'hi'\" href=\"#\"></a>");
    }

    #[test]
    fn test_render_rejects_non_element() {
        let mut arena = DomArena::new();
        let leaf = text(&mut arena, "just text");

        let err = DomSerializer::new().render(&arena, leaf).unwrap_err();
        assert!(matches!(err, DomError::InvalidNodeType { .. }));
    }

    #[test]
    fn test_render_is_repeatable() {
        let doc = scenario_document();
        let serializer = DomSerializer::new();
        let first = serializer.render_document(&doc).unwrap();
        let second = serializer.render_document(&doc).unwrap();
        assert_eq!(first, second);
    }
}
