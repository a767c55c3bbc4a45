//! Core of a collapsible JSON tree viewer.
//!
//! [`render`] turns any [`serde_json::Value`] into a [`NodeView`] display
//! tree: composites become collapsible groups with direct-child counts,
//! primitives become formatted leaves, and an active search term marks
//! matching nodes. The host owns the [`ExpansionState`] and threads it
//! through each event; [`ExpansionState::toggle`] returns the replacement
//! state rather than mutating anything.
//!
//! The editing side is one-directional: [`commit`] validates raw text and,
//! only on success, swaps in a new root held by [`DocumentState`]. The
//! viewer never writes back into edit text. [`serialize`] and
//! [`clipboard::copy_value`] export the current root as canonical
//! 2-space-indented JSON.
//!
//! ```
//! use json_tree_view::{commit, render, DocumentState, ExpansionState, Path};
//!
//! let doc = DocumentState::new();
//! let root = commit(&doc, r#"{"folder1": {"file1.txt": "Content of file 1"}}"#).unwrap();
//!
//! let mut expansion = ExpansionState::new();
//! expansion = expansion.toggle(&Path::root());
//!
//! let view = render(&root, Path::root(), &expansion, "file1");
//! assert_eq!(view.header(), "{1}");
//! ```

pub mod clipboard;
pub mod editor;
pub mod error;
pub mod path;
pub mod search;
pub mod state;
pub mod tree;
pub mod types;

pub use editor::{commit, parse, serialize};
pub use error::{ClipboardError, ParseError};
pub use path::{Path, Segment};
pub use search::{is_match, search, SearchOptions};
pub use state::{DocumentState, ExpansionState};
pub use tree::{display_label, format_primitive, render};
pub use types::{
    CompositeKind, MatchKind, NodeBody, NodeView, Primitive, PrimitiveKind, SearchResponse,
    SearchResult,
};
