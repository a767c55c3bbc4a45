use thiserror::Error;

/// Raw edit text is not valid JSON. The current document root is left
/// untouched; the host surfaces the message next to the editor and the user
/// retries.
#[derive(Debug, Error)]
#[error("invalid JSON: {0}")]
pub struct ParseError(#[from] serde_json::Error);

impl ParseError {
    /// 1-based line of the failure in the source text.
    pub fn line(&self) -> usize {
        self.0.line()
    }

    /// 1-based column of the failure in the source text.
    pub fn column(&self) -> usize {
        self.0.column()
    }
}

/// Clipboard access failed. Non-fatal and retryable; nothing in the viewer
/// changes when this happens.
#[derive(Debug, Error)]
#[error("clipboard: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_reports_position() {
        let err: ParseError = serde_json::from_str::<serde_json::Value>("{\n  \"a\": nope\n}")
            .unwrap_err()
            .into();
        assert_eq!(err.line(), 2);
        assert!(err.to_string().starts_with("invalid JSON:"));
    }
}
