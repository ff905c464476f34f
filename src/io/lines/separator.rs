use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;

use super::Platform;
use crate::io::ReadError;
use crate::io::source::CharSource;

const LF: char = '\n';
const CR: char = '\r';

/// The convention used to terminate lines in a stream of text.
///
/// Each variant determines both how a line is recognized when reading (see
/// [`LineSeparator::read_line`]) and which terminator is written after it (see
/// [`LineSeparator::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum LineSeparator {
    /// A single line feed, `"\n"`.
    LF,
    /// A carriage return followed by a line feed, `"\r\n"`.
    CRLF,
    /// A single carriage return, `"\r"`.
    CR,
    /// Either a line feed or a carriage return on read, the platform's own terminator on write.
    ///
    /// When reading, a `"\r\n"` pair is *not* treated as a single terminator: the carriage return
    /// ends the line and the line feed then ends an empty one. Reading CRLF input with this
    /// variant therefore produces an extra empty line after each line.
    PlatformDefault,
}

/// What stopped the scanning of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Terminator {
    LF,
    CR,
    CRLF,
    /// The stream ended before any terminator was found.
    EndOfStream,
    /// The stream ended directly after a carriage return, which has been kept as content. Only
    /// produced by [`LineSeparator::CRLF`].
    EndAfterCR,
}

impl Terminator {
    /// Returns true if the stream has been exhausted, with or without a dangling carriage return.
    pub const fn is_end(&self) -> bool {
        matches!(self, Terminator::EndOfStream | Terminator::EndAfterCR)
    }
}

/// A single line read from a source, along with the [`Terminator`] that ended it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    pub content: String,
    pub terminator: Terminator,
}

impl Line {
    /// Returns true if this line carries no content and was ended by the end of the stream,
    /// meaning there were no more lines to read.
    ///
    /// A final non-empty line without a terminator is still a line and isn't exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.content.is_empty() && self.terminator.is_end()
    }
}

impl LineSeparator {
    /// Returns the terminator written after each line for this separator, resolving
    /// [`LineSeparator::PlatformDefault`] with the provided `platform`.
    pub const fn as_str(self, platform: Platform) -> &'static str {
        match self {
            LineSeparator::LF => "\n",
            LineSeparator::CRLF => "\r\n",
            LineSeparator::CR => "\r",
            LineSeparator::PlatformDefault => platform.line_separator(),
        }
    }

    /// Reads the next line from `source` and returns it along with what terminated it.
    ///
    /// The terminator is consumed but never included in the content, except for the dangling
    /// carriage return described on [`Terminator::EndAfterCR`].
    ///
    /// # Errors
    /// Propagates any [`ReadError`] from the source. Characters read before the error are lost.
    ///
    /// # Examples
    /// ```
    /// # use linesep::io::lines::{LineSeparator, Terminator};
    /// # use linesep::io::source::StrSource;
    /// let mut source = StrSource::new("a\rb\r\nc");
    /// let line = LineSeparator::CRLF.read_line(&mut source).unwrap();
    /// assert_eq!(line.content, "a\rb");
    /// assert_eq!(line.terminator, Terminator::CRLF);
    /// ```
    pub fn read_line<S: CharSource + ?Sized>(self, source: &mut S) -> Result<Line, ReadError> {
        let mut content = String::new();
        let terminator = self.read_line_into(source, &mut content)?;
        Ok(Line { content, terminator })
    }

    /// Reads the next line from `source`, appending its content to `buf`. Behaves the same as
    /// [`LineSeparator::read_line`], but allows the buffer to be reused.
    ///
    /// # Errors
    /// Propagates any [`ReadError`] from the source. Content appended before the error is left in
    /// `buf`.
    pub fn read_line_into<S: CharSource + ?Sized>(
        self,
        source: &mut S,
        buf: &mut String,
    ) -> Result<Terminator, ReadError> {
        match self {
            LineSeparator::LF => read_until(source, buf, |c| c == LF),
            LineSeparator::CR => read_until(source, buf, |c| c == CR),
            LineSeparator::PlatformDefault => read_until(source, buf, |c| c == LF || c == CR),
            LineSeparator::CRLF => read_until_crlf(source, buf),
        }
    }
}

fn read_until<S, F>(
    source: &mut S,
    buf: &mut String,
    is_terminator: F,
) -> Result<Terminator, ReadError>
where
    S: CharSource + ?Sized,
    F: Fn(char) -> bool,
{
    while let Some(c) = source.read_char()? {
        if is_terminator(c) {
            return Ok(if c == LF { Terminator::LF } else { Terminator::CR });
        }
        buf.push(c);
    }
    Ok(Terminator::EndOfStream)
}

fn read_until_crlf<S: CharSource + ?Sized>(
    source: &mut S,
    buf: &mut String,
) -> Result<Terminator, ReadError> {
    while let Some(c) = source.read_char()? {
        if c != CR {
            buf.push(c);
            continue;
        }

        // A lone CR is content, and so is whatever follows it, even another CR.
        match source.read_char()? {
            Some(LF) => return Ok(Terminator::CRLF),
            Some(next) => {
                buf.push(CR);
                buf.push(next);
            },
            None => {
                buf.push(CR);
                return Ok(Terminator::EndAfterCR);
            },
        }
    }
    Ok(Terminator::EndOfStream)
}

impl Display for LineSeparator {
    /// Writes the terminator for this separator, resolving
    /// [`LineSeparator::PlatformDefault`] with [`Platform::host`].
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str(Platform::host()))
    }
}
