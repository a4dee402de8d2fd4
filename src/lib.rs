//! Checkbox-driven show/hide toggling for rendered HTML listings.
//!
//! Parses a page into a mutable DOM, finds elements by class the way a
//! browser does (a bulk selector engine with a token-scanning fallback),
//! and rewrites inline `display` styles so collapsible groups track the
//! state of their controlling checkbox.

mod document;
mod dom_tree;
mod element;
mod errors;
mod finder;
mod matcher;
mod property;
mod selection;
mod serializing;
mod toggle;

pub use crate::document::Document;
pub use crate::dom_tree::{Node, NodeData, NodeId, NodeRef};
pub use crate::errors::Error;
pub use crate::selection::{Selection, Selections};
pub use crate::serializing::SerializableNodeRef;
pub use crate::toggle::Display;
