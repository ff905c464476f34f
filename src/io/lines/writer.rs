use std::io::{self, Write};

use super::{LineSeparator, Platform};

/// Writes lines to an underlying [`Write`], following each with the terminator of a
/// [`LineSeparator`].
///
/// # Examples
/// ```
/// # use linesep::io::lines::{LineSeparator, LineWriter};
/// let mut writer = LineWriter::new(Vec::new(), LineSeparator::CRLF);
/// writer.write_line("a").unwrap();
/// writer.write_line("b").unwrap();
/// assert_eq!(writer.into_inner(), b"a\r\nb\r\n");
/// ```
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    inner: W,
    terminator: &'static str,
}

impl<W: Write> LineWriter<W> {
    /// Creates a LineWriter, resolving [`LineSeparator::PlatformDefault`] with
    /// [`Platform::host`].
    pub const fn new(inner: W, separator: LineSeparator) -> LineWriter<W> {
        LineWriter::with_platform(inner, separator, Platform::host())
    }

    pub const fn with_platform(
        inner: W,
        separator: LineSeparator,
        platform: Platform,
    ) -> LineWriter<W> {
        LineWriter {
            inner,
            terminator: separator.as_str(platform),
        }
    }

    /// Returns the terminator written after each line.
    pub const fn terminator(&self) -> &'static str {
        self.terminator
    }

    /// Writes `line` followed by the terminator.
    ///
    /// `line` is written as-is, so a line containing the terminator will be read back as more
    /// than one line.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.new_line()
    }

    /// Writes only the terminator.
    pub fn new_line(&mut self) -> io::Result<()> {
        self.inner.write_all(self.terminator.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
