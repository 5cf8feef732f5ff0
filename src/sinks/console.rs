//! Console sink implementation

use crate::core::{FormattedRecord, Result, Sink};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Colored console sink.
///
/// One instance is meant to be shared by every logger of a process; writes
/// are serialized by an internal lock so lines never interleave.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
    use_colors: bool,
}

impl ConsoleSink {
    /// Console sink on standard output with colors enabled
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout(), true)
    }

    /// Console sink over an arbitrary writer
    ///
    /// # Example
    ///
    /// ```
    /// use logger_facade::sinks::ConsoleSink;
    ///
    /// let sink = ConsoleSink::with_writer(std::io::stderr(), false);
    /// assert!(!sink.use_colors());
    /// ```
    pub fn with_writer(writer: impl Write + Send + 'static, use_colors: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            use_colors,
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn use_colors(&self) -> bool {
        self.use_colors
    }

    fn render(&self, record: &FormattedRecord) -> String {
        match (&record.color_range, self.use_colors) {
            (Some(range), true) => {
                let line = &record.line;
                format!(
                    "{}{}{}",
                    &line[..range.start],
                    line[range.clone()].color(record.level.color_code()),
                    &line[range.end..]
                )
            }
            _ => record.line.clone(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: &FormattedRecord) -> Result<()> {
        let output = self.render(record);
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", output)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
