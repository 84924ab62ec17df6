use serde::Serialize;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to serialize to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders `value` as indented JSON. The whole document is built before
/// anything is written so a failure never leaves partial output behind.
pub fn render_json<T, W>(value: &T, mut writer: W) -> Result<(), ReportError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let mut document = serde_json::to_string_pretty(value)?;
    document.push('\n');
    writer.write_all(document.as_bytes())?;
    writer.flush()?;
    Ok(())
}
