use serde_json::Value;

use crate::path::Path;
use crate::search::is_match;
use crate::state::ExpansionState;
use crate::types::{CompositeKind, NodeBody, NodeView, Primitive, PrimitiveKind};

/// Render `value` as a display tree.
///
/// Pure: the output depends only on the arguments. The shape mirrors the
/// value (object → keyed group, array → indexed group, primitive → leaf).
/// Collapsed subtrees are not descended into, so rendering cost is
/// proportional to the visible portion of the document. Match flags come
/// from [`is_match`], evaluated independently at every rendered node;
/// matches hidden inside collapsed subtrees are found by the separate
/// [`crate::search::search`] pass.
///
/// `path` must be the address of `value` within the document the top-level
/// call started from; pass [`Path::root`] when rendering the whole document.
pub fn render(value: &Value, path: Path, expansion: &ExpansionState, term: &str) -> NodeView {
    let label = display_label(&path);
    let matched = is_match(&path, value, term);
    match value {
        Value::Object(map) => {
            let expanded = expansion.is_expanded(&path);
            let children = if expanded {
                map.iter()
                    .map(|(key, child)| render(child, path.key(key), expansion, term))
                    .collect()
            } else {
                Vec::new()
            };
            NodeView {
                label,
                matched,
                body: NodeBody::Composite {
                    kind: CompositeKind::Object,
                    child_count: map.len(),
                    expanded,
                    children,
                },
                path,
            }
        }
        Value::Array(arr) => {
            let expanded = expansion.is_expanded(&path);
            let children = if expanded {
                arr.iter()
                    .enumerate()
                    .map(|(index, child)| render(child, path.index(index), expansion, term))
                    .collect()
            } else {
                Vec::new()
            };
            NodeView {
                label,
                matched,
                body: NodeBody::Composite {
                    kind: CompositeKind::Array,
                    child_count: arr.len(),
                    expanded,
                    children,
                },
                path,
            }
        }
        Value::String(s) => leaf(path, label, matched, quoted(s), PrimitiveKind::String),
        Value::Number(n) => leaf(path, label, matched, n.to_string(), PrimitiveKind::Number),
        Value::Bool(b) => leaf(path, label, matched, b.to_string(), PrimitiveKind::Boolean),
        Value::Null => leaf(path, label, matched, "null".into(), PrimitiveKind::Null),
    }
}

fn leaf(path: Path, label: String, matched: bool, text: String, kind: PrimitiveKind) -> NodeView {
    NodeView {
        path,
        label,
        matched,
        body: NodeBody::Leaf(Primitive { text, kind }),
    }
}

fn quoted(s: &str) -> String {
    format!("\"{s}\"")
}

/// Label shown next to a node: `"root"` for the root path, otherwise the
/// final segment (object key or array index). Presentation only; never used
/// for addressing.
pub fn display_label(path: &Path) -> String {
    match path.last() {
        None => "root".to_string(),
        Some(segment) => segment.to_string(),
    }
}

/// Display form of a leaf value, or `None` for objects and arrays, which
/// have no primitive form.
pub fn format_primitive(value: &Value) -> Option<Primitive> {
    let primitive = match value {
        Value::Null => Primitive {
            text: "null".into(),
            kind: PrimitiveKind::Null,
        },
        Value::Bool(b) => Primitive {
            text: b.to_string(),
            kind: PrimitiveKind::Boolean,
        },
        Value::Number(n) => Primitive {
            text: n.to_string(),
            kind: PrimitiveKind::Number,
        },
        Value::String(s) => Primitive {
            text: quoted(s),
            kind: PrimitiveKind::String,
        },
        Value::Object(_) | Value::Array(_) => return None,
    };
    Some(primitive)
}

/// Shorten `s` to at most `max` characters, appending `…` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…", &s[..cut]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Segment;
    use serde_json::json;

    fn child<'a>(view: &'a NodeView, label: &str) -> &'a NodeView {
        match &view.body {
            NodeBody::Composite { children, .. } => children
                .iter()
                .find(|c| c.label == label)
                .unwrap_or_else(|| panic!("no child labelled {label}")),
            NodeBody::Leaf(_) => panic!("leaf has no children"),
        }
    }

    #[test]
    fn shape_mirrors_the_value() {
        let doc = json!({"name": "demo", "tags": ["a", "b"], "count": 2});
        let expansion = ExpansionState::with_expanded([
            Path::root(),
            Path::root().key("tags"),
        ]);
        let view = render(&doc, Path::root(), &expansion, "");

        assert_eq!(view.label, "root");
        assert_eq!(view.header(), "{3}");
        assert!(matches!(child(&view, "name").body, NodeBody::Leaf(_)));
        let tags = child(&view, "tags");
        assert_eq!(tags.header(), "[2]");
        assert_eq!(child(tags, "0").header(), "\"a\"");
        assert_eq!(child(tags, "1").path.last(), Some(&Segment::Index(1)));
    }

    #[test]
    fn collapsed_composites_have_no_rendered_children() {
        let doc = json!({"inner": {"deep": [1, 2, 3]}});
        let view = render(&doc, Path::root(), &ExpansionState::new(), "");
        match &view.body {
            NodeBody::Composite {
                expanded,
                children,
                child_count,
                ..
            } => {
                assert!(!expanded);
                assert!(children.is_empty());
                // direct child count is reported even while collapsed
                assert_eq!(*child_count, 1);
            }
            NodeBody::Leaf(_) => panic!("root object rendered as leaf"),
        }
    }

    #[test]
    fn child_count_is_direct_not_recursive() {
        let doc = json!({"a": {"b": {"c": 1, "d": 2}}, "e": [10, 20, 30]});
        let expansion = ExpansionState::with_expanded([Path::root()]);
        let view = render(&doc, Path::root(), &expansion, "");
        assert_eq!(view.header(), "{2}");
        assert_eq!(child(&view, "a").header(), "{1}");
        assert_eq!(child(&view, "e").header(), "[3]");
    }

    #[test]
    fn empty_containers_render_zero_counts() {
        let doc = json!({"obj": {}, "arr": []});
        let expansion = ExpansionState::with_expanded([Path::root()]);
        let view = render(&doc, Path::root(), &expansion, "");
        assert_eq!(child(&view, "obj").header(), "{0}");
        assert_eq!(child(&view, "arr").header(), "[0]");
    }

    #[test]
    fn primitives_format_by_kind() {
        assert_eq!(
            format_primitive(&json!("hi")),
            Some(Primitive {
                text: "\"hi\"".into(),
                kind: PrimitiveKind::String
            })
        );
        assert_eq!(
            format_primitive(&json!(3.5)),
            Some(Primitive {
                text: "3.5".into(),
                kind: PrimitiveKind::Number
            })
        );
        assert_eq!(
            format_primitive(&json!(true)),
            Some(Primitive {
                text: "true".into(),
                kind: PrimitiveKind::Boolean
            })
        );
        assert_eq!(
            format_primitive(&Value::Null),
            Some(Primitive {
                text: "null".into(),
                kind: PrimitiveKind::Null
            })
        );
        assert_eq!(format_primitive(&json!({})), None);
        assert_eq!(format_primitive(&json!([])), None);
    }

    #[test]
    fn display_label_is_root_or_final_segment() {
        assert_eq!(display_label(&Path::root()), "root");
        assert_eq!(display_label(&Path::root().key("folder1")), "folder1");
        assert_eq!(display_label(&Path::root().key("a").index(4)), "4");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc…");
        assert_eq!(truncate("héllo wörld", 4), "héll…");
    }

    #[test]
    fn preview_matches_viewer_style() {
        let doc = json!({"obj": {"k": 1}, "arr": [], "s": "a very long string value"});
        let expansion = ExpansionState::with_expanded([Path::root()]);
        let view = render(&doc, Path::root(), &expansion, "");
        assert_eq!(child(&view, "obj").preview(120), "{…} 1 keys");
        assert_eq!(child(&view, "arr").preview(120), "[] 0 items");
        assert_eq!(child(&view, "s").preview(8), "\"a very …");
    }
}
