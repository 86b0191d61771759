//! Declarative tree construction
//!
//! [`element`] stages a tag name and attribute list; the returned builder
//! wires any number of already-built children under a fresh element,
//! preserving call-site order exactly. Builders are reusable: one staged
//! factory can stamp out any number of elements.

use crate::arena::DomArena;
use crate::error::Result;
use crate::types::NodeId;

/// Staged element factory
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: String,
    attrs: Vec<(String, String)>,
}

/// Stage an element factory from a tag name and attribute list
pub fn element(tag: &str, attrs: &[(&str, &str)]) -> ElementBuilder {
    ElementBuilder {
        tag: tag.to_string(),
        attrs: attrs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
    }
}

/// Build a text-bearing leaf
pub fn text(arena: &mut DomArena, content: &str) -> NodeId {
    arena.new_text(content)
}

impl ElementBuilder {
    /// Build one element in `arena` with the given ordered children
    pub fn build(&self, arena: &mut DomArena, children: &[NodeId]) -> Result<NodeId> {
        let attrs: Vec<(&str, &str)> = self
            .attrs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        arena.new_element(&self.tag, &attrs, children)
    }
}
