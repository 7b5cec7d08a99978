use arboard::Clipboard;

/// Copy `text` to the system clipboard, verbatim. Called once per
/// successful extraction; fire-and-forget at the call site (failures are
/// logged, never fatal).
pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    tracing::debug!(chars = text.len(), "copied extraction to clipboard");
    Ok(())
}
