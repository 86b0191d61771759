//! Document container
//!
//! Owns the arena and exposes the document-level surface a selector engine
//! consumes: the `#document` sentinel, the synthetic root element, the
//! identifier index, and tree-wide queries.

use crate::arena::DomArena;
use crate::error::Result;
use crate::types::{NodeId, NodeType, DOCUMENT_NODE_NAME};

/// The tree's root container.
///
/// Construction synthesizes a single `html` root element wrapping the given
/// top-level children. The identifier index accumulated during element
/// construction travels with the arena and is owned by the document from
/// then on.
#[derive(Debug)]
pub struct Document {
    arena: DomArena,
    document_element: NodeId,

    /// Inert compatibility field expected by consumers
    pub content_type: String,
    /// Inert compatibility field expected by consumers
    pub compat_mode: String,
}

impl Document {
    /// Wrap `children` in a synthetic root element and take ownership of
    /// the arena they were built in
    pub fn new(mut arena: DomArena, children: &[NodeId]) -> Result<Self> {
        let document_element = arena.new_element("HTML", &[], children)?;
        Ok(Self {
            arena,
            document_element,
            content_type: "text/html".to_string(),
            compat_mode: "BackCompat".to_string(),
        })
    }

    /// Numeric node-type discriminator for the document container
    pub fn node_type(&self) -> NodeType {
        NodeType::Document
    }

    /// Sentinel node name for the document container
    pub fn node_name(&self) -> &'static str {
        DOCUMENT_NODE_NAME
    }

    /// The synthetic root element
    pub fn document_element(&self) -> NodeId {
        self.document_element
    }

    /// The document's only child is its root element
    pub fn first_child(&self) -> NodeId {
        self.document_element
    }

    /// The root is always an element
    pub fn first_element_child(&self) -> NodeId {
        self.document_element
    }

    /// Shared arena access, for node reads and traversal
    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    /// Mutable arena access, for attribute mutation
    pub fn arena_mut(&mut self) -> &mut DomArena {
        &mut self.arena
    }

    /// Create a detached element with an uppercase-normalized name and no
    /// attributes
    pub fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        self.arena.new_element(tag, &[], &[])
    }

    /// Namespaced tag-name lookup over the whole tree. The namespace is
    /// accepted but does not filter; see
    /// [`DomArena::elements_by_tag_name_ns`].
    pub fn elements_by_tag_name_ns(&self, namespace: &str, name: &str) -> Vec<NodeId> {
        self.arena
            .elements_by_tag_name_ns(self.document_element, namespace, name)
    }

    /// Tag-name lookup over the whole tree, wildcard namespace
    pub fn elements_by_tag_name(&self, name: &str) -> Vec<NodeId> {
        self.arena.elements_by_tag_name(self.document_element, name)
    }

    /// Whole-token class lookup over the whole tree
    pub fn elements_by_class_name(&self, token: &str) -> Vec<NodeId> {
        self.arena
            .elements_by_class_name(self.document_element, token)
    }

    /// O(1) lookup through the identifier index; `None` when no element is
    /// registered under `id`
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.arena.element_by_id(id)
    }
}
