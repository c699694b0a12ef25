//! Output formatting for the CLI subcommands.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Prints `value` as pretty-printed JSON on stdout.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    debug!("Writing JSON report to stdout");
    write_json(std::io::stdout().lock(), value)
}
