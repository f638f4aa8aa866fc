//! Text and JSON rendering of listings.
//!
//! JSON output is the serde form of the records and matches `ip -j`. Text
//! output mimics `ip link` / `ip addr`, with `details` adding the `-d` line.

mod address;
mod link;

use std::io::Write;

use crate::error::Result;

/// Output format options.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Show extra details (`ip -d`).
    pub details: bool,
    /// Pretty print (for JSON).
    pub pretty: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// Trait for records that can be printed.
pub trait Printable {
    /// Print as plain text.
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()>;

    /// Convert to JSON value.
    fn to_json(&self) -> Result<serde_json::Value>;

    /// Print in the specified format.
    fn print<W: Write>(&self, w: &mut W, format: OutputFormat, opts: &OutputOptions) -> Result<()> {
        match format {
            OutputFormat::Text => self.print_text(w, opts)?,
            OutputFormat::Json => write_json(w, &self.to_json()?, opts)?,
        }
        Ok(())
    }
}

/// Print a whole listing. JSON output is a single array, as `ip -j` prints.
pub fn print_all<T: Printable, W: Write>(
    items: &[T],
    w: &mut W,
    format: OutputFormat,
    opts: &OutputOptions,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for item in items {
                item.print_text(w, opts)?;
            }
        }
        OutputFormat::Json => {
            let values = items
                .iter()
                .map(Printable::to_json)
                .collect::<Result<Vec<_>>>()?;
            write_json(w, &serde_json::Value::Array(values), opts)?;
        }
    }
    Ok(())
}

fn write_json<W: Write>(w: &mut W, value: &serde_json::Value, opts: &OutputOptions) -> Result<()> {
    if opts.pretty {
        serde_json::to_writer_pretty(&mut *w, value)?;
    } else {
        serde_json::to_writer(&mut *w, value)?;
    }
    writeln!(w)?;
    Ok(())
}

/// Format a lifetime the way `ip` does.
pub(crate) fn format_lifetime(secs: u32) -> String {
    if secs == u32::MAX {
        "forever".to_string()
    } else {
        format!("{}sec", secs)
    }
}
