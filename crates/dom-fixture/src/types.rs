//! Core node types for the fixture tree
//!
//! Key design principles:
//! 1. Use u32 handles into the arena instead of pointers
//! 2. Optional handles for parent/sibling/child relations (no Rc cycles)
//! 3. Insertion-ordered attribute map for deterministic serialization

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Node identifier (index into arena)
pub type NodeId = u32;

/// Node type discriminator, numbered like the DOM constants a selector
/// engine keys on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Text = 3,
    Document = 9,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(NodeType::Element),
            3 => Some(NodeType::Text),
            9 => Some(NodeType::Document),
            _ => None,
        }
    }
}

/// Node name reported by text-bearing leaves.
pub const TEXT_NODE_NAME: &str = "#text";

/// Node name reported by the document container.
pub const DOCUMENT_NODE_NAME: &str = "#document";

/// A single node in the fixture tree.
///
/// Relations are optional arena handles rather than owning references.
/// Shape (parent/sibling/child wiring) is fixed at construction; only the
/// attribute values may change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    pub kind: NodeType,

    /// Uppercase-normalized qualified name (`#text` for text nodes)
    pub node_name: String,
    /// Lowercased local part of the qualified name
    pub local_name: String,
    /// Namespace prefix, when the qualified name was written `prefix:local`
    pub prefix: Option<String>,
    /// Text content for text nodes; empty for elements
    pub node_value: String,

    /// Attribute mapping. Keys unique, insertion order preserved; that
    /// order is also the serialization order.
    pub attributes: IndexMap<String, String>,

    // Relation handles
    pub parent: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    pub first_child: Option<NodeId>,
}

impl DomNode {
    /// Create a detached element from a qualified tag name and attribute list
    pub(crate) fn element(tag: &str, attrs: &[(&str, &str)]) -> Self {
        let lower = tag.to_lowercase();
        let (prefix, local_name) = match lower.split_once(':') {
            Some((p, l)) if !p.is_empty() && !l.is_empty() => {
                (Some(p.to_string()), l.to_string())
            }
            _ => (None, lower.clone()),
        };

        let mut attributes = IndexMap::with_capacity(attrs.len());
        for (key, value) in attrs {
            attributes.insert((*key).to_string(), (*value).to_string());
        }

        Self {
            kind: NodeType::Element,
            node_name: tag.to_uppercase(),
            local_name,
            prefix,
            node_value: String::new(),
            attributes,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
        }
    }

    /// Create a detached text-bearing leaf
    pub(crate) fn text(content: &str) -> Self {
        Self {
            kind: NodeType::Text,
            node_name: TEXT_NODE_NAME.to_string(),
            local_name: TEXT_NODE_NAME.to_string(),
            prefix: None,
            node_value: content.to_string(),
            attributes: IndexMap::new(),
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
        }
    }

    /// Check if node is an element
    pub fn is_element(&self) -> bool {
        self.kind == NodeType::Element
    }

    /// Check if node is text
    pub fn is_text(&self) -> bool {
        self.kind == NodeType::Text
    }

    /// Get tag name for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        if self.is_element() {
            Some(&self.node_name)
        } else {
            None
        }
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Set an attribute value. Direct map write, no validation.
    ///
    /// Writing `id` here does not re-register the node in the document's
    /// identifier index; the index is only written during construction.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Remove an attribute, returning the previous value if any.
    /// The remaining attributes keep their insertion order.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// The `class` attribute value, or "" when absent
    pub fn class_name(&self) -> &str {
        self.attr("class").unwrap_or("")
    }

    /// The `id` attribute value, or "" when absent
    pub fn id(&self) -> &str {
        self.attr("id").unwrap_or("")
    }

    /// Whole-token class test: `token` must appear as a complete
    /// whitespace-delimited entry in the class value, not as a substring.
    pub fn has_class_token(&self, token: &str) -> bool {
        self.class_name().split_whitespace().any(|t| t == token)
    }

    /// Text content of this node (empty for elements)
    pub fn text_content(&self) -> &str {
        &self.node_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_normalization() {
        let node = DomNode::element("div", &[]);
        assert_eq!(node.node_name, "DIV");
        assert_eq!(node.local_name, "div");
        assert_eq!(node.prefix, None);
        assert_eq!(node.tag_name(), Some("DIV"));
    }

    #[test]
    fn test_prefixed_name_decomposition() {
        let node = DomNode::element("svg:circle", &[]);
        assert_eq!(node.node_name, "SVG:CIRCLE");
        assert_eq!(node.local_name, "circle");
        assert_eq!(node.prefix.as_deref(), Some("svg"));

        // degenerate forms keep the whole name as the local name
        let node = DomNode::element(":div", &[]);
        assert_eq!(node.local_name, ":div");
        assert_eq!(node.prefix, None);
    }

    #[test]
    fn test_attr_roundtrip() {
        let mut node = DomNode::element("INPUT", &[("type", "text")]);
        assert_eq!(node.attr("type"), Some("text"));
        assert_eq!(node.attr("value"), None);

        node.set_attr("value", "hello");
        assert_eq!(node.attr("value"), Some("hello"));

        assert_eq!(node.remove_attr("type"), Some("text".to_string()));
        assert_eq!(node.remove_attr("type"), None);
    }

    #[test]
    fn test_class_and_id_defaults() {
        let node = DomNode::element("DIV", &[]);
        assert_eq!(node.class_name(), "");
        assert_eq!(node.id(), "");

        let node = DomNode::element("DIV", &[("class", "a b"), ("id", "x")]);
        assert_eq!(node.class_name(), "a b");
        assert_eq!(node.id(), "x");
    }

    #[test]
    fn test_whole_token_class_match() {
        let node = DomNode::element("SPAN", &[("class", "foobar baz")]);
        assert!(!node.has_class_token("foo"));
        assert!(node.has_class_token("foobar"));
        assert!(node.has_class_token("baz"));

        let empty = DomNode::element("SPAN", &[]);
        assert!(!empty.has_class_token("foo"));
        assert!(!empty.has_class_token(""));
    }

    #[test]
    fn test_node_type_discriminators() {
        assert_eq!(NodeType::Element as u8, 1);
        assert_eq!(NodeType::Text as u8, 3);
        assert_eq!(NodeType::Document as u8, 9);

        assert_eq!(NodeType::from_u8(1), Some(NodeType::Element));
        assert_eq!(NodeType::from_u8(9), Some(NodeType::Document));
        assert_eq!(NodeType::from_u8(2), None);
    }

    #[test]
    fn test_text_node() {
        let node = DomNode::text("hello");
        assert!(node.is_text());
        assert!(!node.is_element());
        assert_eq!(node.node_name, TEXT_NODE_NAME);
        assert_eq!(node.tag_name(), None);
        assert_eq!(node.text_content(), "hello");
    }
}
