//! Minimal programmatic DOM fixture
//!
//! A self-contained hierarchical document model that mimics the structured
//! document surface a selector-matching engine traverses, without pulling in
//! a browser-grade implementation. Trees are always built programmatically;
//! there is no markup parser. Tree shape is fixed at construction, and only
//! attribute values may change afterwards.
//!
//! ## Core design
//!
//! ```text
//! builder → DomArena (owned nodes, NodeId handles) → Document
//!                          ↓
//!           queries / serializer walk handles read-only
//! ```
//!
//! Bulk children accessors are deliberately unimplemented and fail fast;
//! consumers navigate through first-child and sibling links, with
//! element-only filters layered on the raw chain.

pub mod arena;
pub mod builder;
pub mod document;
pub mod error;
pub mod serializer;
pub mod types;

pub use arena::{Descendants, Direction, DomArena, Siblings};
pub use builder::{element, text, ElementBuilder};
pub use document::Document;
pub use error::{DomError, Result};
pub use serializer::DomSerializer;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_render_roundtrip() {
        let mut arena = DomArena::new();
        let item = element("LI", &[("class", "item")]);
        let first = item.build(&mut arena, &[]).unwrap();
        let second = item.build(&mut arena, &[]).unwrap();
        let list = element("UL", &[("id", "list")])
            .build(&mut arena, &[first, second])
            .unwrap();
        let doc = Document::new(arena, &[list]).unwrap();

        assert_eq!(doc.element_by_id("list"), Some(list));
        assert_eq!(doc.elements_by_class_name("item"), vec![first, second]);

        let output = DomSerializer::new().render_document(&doc).unwrap();
        assert_eq!(
            output,
            concat!(
                "<html>\n",
                "  <ul id=\"list\">\n",
                "    <li class=\"item\"></li>\n",
                "    <li class=\"item\"></li>\n",
                "  </ul>\n",
                "</html>",
            )
        );
    }
}
