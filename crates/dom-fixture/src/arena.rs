//! Arena-based fixture tree storage
//!
//! All nodes live in a single `Vec` and refer to each other through
//! `NodeId` handles. This arena eliminates:
//! - Rc/Arc cycles through parent back-references
//! - ad-hoc recursive accessor chains (sibling filters are iterator adapters)
//! - use-after-free risk, while keeping O(1) navigation
//!
//! The arena also carries the identifier index that the owning [`Document`]
//! takes over: elements constructed with an `id` attribute are registered
//! here, last registration wins.
//!
//! [`Document`]: crate::document::Document

use crate::error::{DomError, Result};
use crate::types::{DomNode, NodeId};
use ahash::AHashMap;

/// Arena allocator for fixture tree nodes
#[derive(Debug)]
pub struct DomArena {
    /// All nodes stored sequentially
    nodes: Vec<DomNode>,

    /// id attribute → NodeId (the document identifier index)
    ids: AHashMap<String, NodeId>,
}

/// Walk direction along a sibling chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl DomArena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            ids: AHashMap::new(),
        }
    }

    /// Create arena with specific capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ids: AHashMap::with_capacity(capacity),
        }
    }

    /// Total number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear arena (reuse allocation)
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.ids.clear();
    }

    /// Get node by ID (immutable)
    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable)
    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Construct an element and wire the given children under it.
    ///
    /// One pass over `children`: each child's parent is set to the new
    /// element, adjacent children are linked as prev/next siblings, and the
    /// first child is recorded. Child order in the tree equals argument
    /// order exactly; no reordering, deduplication, or attribute
    /// normalization happens. An `id` attribute registers the element in
    /// the identifier index, overwriting any prior entry for the same id.
    pub fn new_element(
        &mut self,
        tag: &str,
        attrs: &[(&str, &str)],
        children: &[NodeId],
    ) -> Result<NodeId> {
        // verify child handles before any wiring
        for &child in children {
            self.get(child)?;
        }

        let node_id = self.nodes.len() as NodeId;
        let node = DomNode::element(tag, attrs);
        if let Some(id) = node.attr("id") {
            self.ids.insert(id.to_string(), node_id);
        }
        self.nodes.push(node);

        let mut prev: Option<NodeId> = None;
        for &child in children {
            let node = &mut self.nodes[child as usize];
            node.parent = Some(node_id);
            node.prev_sibling = prev;
            node.next_sibling = None;
            if let Some(p) = prev {
                self.nodes[p as usize].next_sibling = Some(child);
            }
            prev = Some(child);
        }
        self.nodes[node_id as usize].first_child = children.first().copied();

        Ok(node_id)
    }

    /// Construct a text-bearing leaf
    pub fn new_text(&mut self, content: &str) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        self.nodes.push(DomNode::text(content));
        node_id
    }

    fn is_element(&self, node_id: NodeId) -> bool {
        self.nodes
            .get(node_id as usize)
            .is_some_and(|n| n.is_element())
    }

    /// Raw sibling-chain iterator, starting at `start` inclusive.
    ///
    /// The element-only accessors are this iterator plus a node-kind
    /// filter; there is no other traversal code path.
    pub fn siblings_from(&self, start: Option<NodeId>, direction: Direction) -> Siblings<'_> {
        Siblings {
            arena: self,
            next: start,
            direction,
        }
    }

    /// First child that is an element, skipping text-bearing leaves
    pub fn first_element_child(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        let first = self.get(node_id)?.first_child;
        Ok(self
            .siblings_from(first, Direction::Forward)
            .find(|&n| self.is_element(n)))
    }

    /// Next sibling that is an element
    pub fn next_element_sibling(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        let next = self.get(node_id)?.next_sibling;
        Ok(self
            .siblings_from(next, Direction::Forward)
            .find(|&n| self.is_element(n)))
    }

    /// Previous sibling that is an element
    pub fn previous_element_sibling(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        let prev = self.get(node_id)?.prev_sibling;
        Ok(self
            .siblings_from(prev, Direction::Backward)
            .find(|&n| self.is_element(n)))
    }

    /// Parent handle of a node
    pub fn parent(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(node_id)?.parent)
    }

    /// Parent, when the parent is an element
    pub fn parent_element(&self, node_id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.get(node_id)?.parent.filter(|&p| self.is_element(p)))
    }

    /// Document-order (pre-order, depth-first, left-to-right) iterator over
    /// the subtree rooted at `scope`, including `scope` itself.
    ///
    /// An invalid handle yields an empty iterator.
    pub fn descendants(&self, scope: NodeId) -> Descendants<'_> {
        Descendants {
            arena: self,
            scope,
            next: self.nodes.get(scope as usize).map(|_| scope),
        }
    }

    /// Pre-order successor of `node_id` within the subtree rooted at `scope`
    fn next_in_document_order(&self, node_id: NodeId, scope: NodeId) -> Option<NodeId> {
        if let Some(child) = self.nodes.get(node_id as usize)?.first_child {
            return Some(child);
        }
        let mut current = node_id;
        while current != scope {
            let node = self.nodes.get(current as usize)?;
            if let Some(sibling) = node.next_sibling {
                return Some(sibling);
            }
            current = node.parent?;
        }
        None
    }

    /// All elements under `scope` (inclusive) whose qualified node name
    /// equals `name`, in document order.
    ///
    /// The `namespace` argument is accepted for interface parity but does
    /// not filter matches; every namespace behaves as the wildcard. Node
    /// names are stored uppercase-normalized, so the comparison is exact
    /// and case-sensitive.
    pub fn elements_by_tag_name_ns(
        &self,
        scope: NodeId,
        namespace: &str,
        name: &str,
    ) -> Vec<NodeId> {
        let _ = namespace;
        self.descendants(scope)
            .filter(|&n| {
                let node = &self.nodes[n as usize];
                node.is_element() && node.node_name == name
            })
            .collect()
    }

    /// Tag-name lookup with the wildcard namespace
    pub fn elements_by_tag_name(&self, scope: NodeId, name: &str) -> Vec<NodeId> {
        self.elements_by_tag_name_ns(scope, "*", name)
    }

    /// All elements under `scope` (inclusive) carrying `token` as a
    /// complete whitespace-delimited class entry, in document order
    pub fn elements_by_class_name(&self, scope: NodeId, token: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .filter(|&n| {
                let node = &self.nodes[n as usize];
                node.is_element() && node.has_class_token(token)
            })
            .collect()
    }

    /// O(1) lookup through the identifier index; `None` when no element is
    /// registered under `id`
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Bulk element-children list. Deliberately unimplemented: consumers
    /// must traverse the sibling chain instead of depending on a
    /// materialized child list.
    pub fn children(&self, _node_id: NodeId) -> Result<Vec<NodeId>> {
        Err(DomError::NotImplemented("children"))
    }

    /// Bulk child-node list. Deliberately unimplemented.
    pub fn child_nodes(&self, _node_id: NodeId) -> Result<Vec<NodeId>> {
        Err(DomError::NotImplemented("childNodes"))
    }

    /// Child element count. Deliberately unimplemented.
    pub fn child_element_count(&self, _node_id: NodeId) -> Result<usize> {
        Err(DomError::NotImplemented("childElementCount"))
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a raw sibling chain
#[derive(Debug, Clone)]
pub struct Siblings<'a> {
    arena: &'a DomArena,
    next: Option<NodeId>,
    direction: Direction,
}

impl<'a> Iterator for Siblings<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        let node = self.arena.nodes.get(current as usize)?;
        self.next = match self.direction {
            Direction::Forward => node.next_sibling,
            Direction::Backward => node.prev_sibling,
        };
        Some(current)
    }
}

/// Pre-order subtree iterator. Yields the scope node first, then walks
/// first-child/next-sibling links, climbing back up at chain ends.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    arena: &'a DomArena,
    scope: NodeId,
    next: Option<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.arena.next_in_document_order(current, self.scope);
        Some(current)
    }
}
