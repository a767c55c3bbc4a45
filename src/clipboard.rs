use arboard::Clipboard;
use serde_json::Value;

use crate::editor;
use crate::error::ClipboardError;

/// Serialize `value` (canonical 2-space form) and place it on the system
/// clipboard. Copying here rather than in a UI layer avoids round-tripping
/// large documents through the host just to copy them again.
///
/// To export a subtree instead of the whole document, resolve it first:
/// `path.resolve(&root).map(copy_value)`.
pub fn copy_value(value: &Value) -> Result<(), ClipboardError> {
    let serialized = editor::serialize(value);
    log::debug!("copying {} bytes of JSON to the clipboard", serialized.len());
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(serialized)?;
    Ok(())
}

/// Read the clipboard as UTF-8 text, for hosts that let users import JSON
/// by pasting. Validation is not done here; route the text through
/// [`crate::editor::commit`] so a parse failure reports as a [`crate::ParseError`]
/// and leaves the current document alone.
pub fn read_text() -> Result<String, ClipboardError> {
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
