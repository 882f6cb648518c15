use anyhow::Result;
use std::io::Write;

/// Writes the message as is, without a trailing newline.
pub fn emit(mut out: impl Write, message: &str) -> Result<()> {
    out.write_all(message.as_bytes())?;
    out.flush()?;

    Ok(())
}
