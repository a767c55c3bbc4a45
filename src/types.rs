use serde::Serialize;

use crate::path::Path;

/// Leaf value category, used by hosts to pick per-type presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Null,
    Boolean,
    Number,
    String,
}

/// A formatted leaf: display text plus its kind. String text carries literal
/// surrounding quotes; null renders as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Primitive {
    pub text: String,
    pub kind: PrimitiveKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompositeKind {
    Object,
    Array,
}

/// One rendered node. The shape mirrors the underlying value: composites
/// carry their direct children (empty while collapsed), leaves carry a
/// formatted [`Primitive`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub path: Path,
    /// `"root"` for the root node, otherwise the final path segment.
    pub label: String,
    /// True when the active search term matches this node's path text or,
    /// for leaves, its value text.
    pub matched: bool,
    #[serde(flatten)]
    pub body: NodeBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum NodeBody {
    Leaf(Primitive),
    Composite {
        kind: CompositeKind,
        /// Direct children of the underlying value, independent of expansion.
        child_count: usize,
        expanded: bool,
        /// Rendered children when expanded, empty when collapsed.
        children: Vec<NodeView>,
    },
}

impl NodeView {
    pub fn is_composite(&self) -> bool {
        matches!(self.body, NodeBody::Composite { .. })
    }

    /// Header text shown next to the label: `{n}` / `[n]` for composites
    /// (direct child count), the formatted value text for leaves.
    pub fn header(&self) -> String {
        match &self.body {
            NodeBody::Leaf(primitive) => primitive.text.clone(),
            NodeBody::Composite {
                kind: CompositeKind::Object,
                child_count,
                ..
            } => format!("{{{child_count}}}"),
            NodeBody::Composite {
                kind: CompositeKind::Array,
                child_count,
                ..
            } => format!("[{child_count}]"),
        }
    }

    /// One-line preview: `{…} 3 keys`, `[] 0 items`, or the leaf text
    /// truncated to `limit` characters.
    pub fn preview(&self, limit: usize) -> String {
        match &self.body {
            NodeBody::Leaf(primitive) => crate::tree::truncate(&primitive.text, limit),
            NodeBody::Composite {
                kind: CompositeKind::Object,
                child_count,
                ..
            } => {
                if *child_count == 0 {
                    format!("{{}} {child_count} keys")
                } else {
                    format!("{{…}} {child_count} keys")
                }
            }
            NodeBody::Composite {
                kind: CompositeKind::Array,
                child_count,
                ..
            } => {
                if *child_count == 0 {
                    format!("[] {child_count} items")
                } else {
                    format!("[…] {child_count} items")
                }
            }
        }
    }
}

/// What part of a node matched a document-wide search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Key,
    Value,
    Path,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub path: Path,
    pub kind: MatchKind,
    /// The actual matched text (key, value text, or path display form).
    pub match_text: String,
    /// Additional context if any, e.g. the enclosing key for a value match.
    pub context: Option<String>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total_count: usize,
    pub has_more: bool,
}
