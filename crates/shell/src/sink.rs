//! Notice sink writing one line per notice to the operator's terminal.

use std::io::{self, Write};

use clap::ValueEnum;
use stockroom_inventory::{Notice, NoticeSink};

/// How notices and the alert log are printed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes notices as they happen.
///
/// `NoticeSink::notify` cannot fail, so the first write error is kept and
/// handed back through [`LineSink::finish`].
pub struct LineSink<'a, W: Write> {
    out: &'a mut W,
    format: OutputFormat,
    error: Option<io::Error>,
}

impl<'a, W: Write> LineSink<'a, W> {
    pub fn new(out: &'a mut W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }

    fn write(&mut self, notice: &Notice) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{notice}"),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *self.out, notice)?;
                writeln!(self.out)
            }
        }
    }
}

impl<W: Write> NoticeSink for LineSink<'_, W> {
    fn notify(&mut self, notice: Notice) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write(&notice) {
            self.error = Some(err);
        }
    }
}
