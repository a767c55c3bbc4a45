use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// One step from a node to a direct child: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(k) => f.write_str(k),
            Segment::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Address of a node within a JSON document.
///
/// Identity is structural: two paths are equal iff their segment sequences
/// are equal, so an object key that happens to contain `.` or `/` can never
/// collide with a different logical address. The joined string forms
/// ([`Path::to_string`], [`Path::pointer`]) are for display and JSON Pointer
/// resolution only, never for identity.
///
/// A path is only meaningful relative to the document it was derived from;
/// after the root is replaced it silently addresses whatever node now
/// occupies the same position, if any.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The address of the document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Child address under an object key.
    pub fn key(&self, key: impl Into<String>) -> Path {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.into()));
        Path { segments }
    }

    /// Child address under an array index.
    pub fn index(&self, index: usize) -> Path {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Path { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The final segment, or `None` for the root.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Follow the path down from `root`. Returns `None` if any segment does
    /// not address an existing child, including a `Key` segment applied to an
    /// array or an `Index` segment applied to an object.
    pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        let mut current = root;
        for segment in &self.segments {
            current = match (segment, current) {
                (Segment::Key(k), Value::Object(map)) => map.get(k)?,
                (Segment::Index(i), Value::Array(arr)) => arr.get(*i)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// RFC 6901 JSON Pointer form: `""` for the root, otherwise `/`-prefixed
    /// tokens with `~` and `/` escaped as `~0` and `~1`.
    pub fn pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Key(k) => out.push_str(&escape_pointer_token(k)),
                Segment::Index(i) => out.push_str(&i.to_string()),
            }
        }
        out
    }
}

/// Display form used for labels and path search: `root`, then `.`-joined
/// segments (`root.folder1.0`). Display only — see the type docs.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for segment in &self.segments {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

// JSON Pointer token escape (~0, ~1)
fn escape_pointer_token(raw: &str) -> String {
    raw.replace('~', "~0").replace('/', "~1")
}
