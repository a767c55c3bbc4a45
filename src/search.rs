use regex::Regex;
use serde_json::Value;

use crate::path::Path;
use crate::types::{MatchKind, SearchResponse, SearchResult};

/// Render-time match predicate.
///
/// True iff `term` is non-empty and either the path's display text or, for
/// leaves, the value's display text contains it as a case-insensitive
/// substring. Composites are checked on path text only. An empty term never
/// matches anything.
pub fn is_match(path: &Path, value: &Value, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let needle = term.to_lowercase();
    if path.to_string().to_lowercase().contains(&needle) {
        return true;
    }
    match value {
        Value::String(s) => s.to_lowercase().contains(&needle),
        Value::Number(n) => n.to_string().to_lowercase().contains(&needle),
        Value::Bool(b) => b.to_string().contains(&needle),
        Value::Null => "null".contains(&needle),
        Value::Object(_) | Value::Array(_) => false,
    }
}

/// What the document-wide [`search`] looks at and how it compares text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Match against object keys.
    pub keys: bool,
    /// Match against primitive values (strings, numbers, booleans).
    pub values: bool,
    /// Match against path display text.
    pub paths: bool,
    pub case_sensitive: bool,
    pub whole_word: bool,
    /// Treat the query as a regular expression. An invalid pattern falls
    /// back to plain substring search.
    pub regex: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            keys: true,
            values: true,
            paths: true,
            case_sensitive: false,
            whole_word: false,
            regex: false,
        }
    }
}

/// Traverse the whole document, collapsed subtrees included, and collect
/// matches. Results come back in depth-first document order, paged by
/// `offset`/`limit`; `total_count` always reflects the full match count.
pub fn search(
    root: &Value,
    query: &str,
    options: SearchOptions,
    offset: usize,
    limit: usize,
) -> SearchResponse {
    if query.trim().is_empty() {
        return SearchResponse {
            results: vec![],
            total_count: 0,
            has_more: false,
        };
    }

    let re = if options.regex {
        Regex::new(query).ok()
    } else {
        None
    };
    let needle = if options.case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };

    let mut collected = Vec::new();
    search_recursive(root, &Path::root(), &needle, re.as_ref(), options, &mut collected);
    log::debug!("search for {query:?} found {} matches", collected.len());

    let total_count = collected.len();
    let results: Vec<SearchResult> = collected.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + limit < total_count;
    SearchResponse {
        results,
        total_count,
        has_more,
    }
}

fn search_recursive(
    value: &Value,
    path: &Path,
    query: &str,
    re: Option<&Regex>,
    options: SearchOptions,
    results: &mut Vec<SearchResult>,
) {
    if options.paths {
        let text = path.to_string();
        if text_matches(&normalize(&text, options), query, re, options.whole_word) {
            results.push(SearchResult {
                path: path.clone(),
                kind: MatchKind::Path,
                match_text: text,
                context: None,
            });
        }
    }

    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = path.key(key);
                if options.keys
                    && text_matches(&normalize(key, options), query, re, options.whole_word)
                {
                    results.push(SearchResult {
                        path: child_path.clone(),
                        kind: MatchKind::Key,
                        match_text: key.clone(),
                        context: None,
                    });
                }
                if options.values {
                    if let Some(text) = primitive_text(child) {
                        if text_matches(&normalize(&text, options), query, re, options.whole_word)
                        {
                            results.push(SearchResult {
                                path: child_path.clone(),
                                kind: MatchKind::Value,
                                match_text: text,
                                context: Some(format!("in key: {key}")),
                            });
                        }
                    }
                }
                if child.is_object() || child.is_array() {
                    search_recursive(child, &child_path, query, re, options, results);
                }
            }
        }
        Value::Array(arr) => {
            for (index, item) in arr.iter().enumerate() {
                let child_path = path.index(index);
                if options.values {
                    if let Some(text) = primitive_text(item) {
                        if text_matches(&normalize(&text, options), query, re, options.whole_word)
                        {
                            results.push(SearchResult {
                                path: child_path.clone(),
                                kind: MatchKind::Value,
                                match_text: text,
                                context: Some(format!("at index: {index}")),
                            });
                        }
                    }
                }
                if item.is_object() || item.is_array() {
                    search_recursive(item, &child_path, query, re, options, results);
                }
            }
        }
        _ => {}
    }
}

// Searchable text of a primitive child; nulls and composites yield nothing.
fn primitive_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn normalize(text: &str, options: SearchOptions) -> String {
    if options.case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

// text and query must already be case-normalized for the non-regex modes
fn text_matches(text: &str, query: &str, re: Option<&Regex>, whole_word: bool) -> bool {
    if let Some(re) = re {
        re.is_match(text)
    } else if whole_word {
        text.split(|c: char| !c.is_alphanumeric())
            .any(|word| word == query)
    } else {
        text.contains(query)
    }
}
