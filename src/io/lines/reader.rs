use std::iter::FusedIterator;

use super::{LineSeparator, detect};
use crate::io::source::CharSource;
use crate::io::{DetectError, ReadError};

/// Reads lines from a [`CharSource`], using a fixed [`LineSeparator`].
///
/// By default, a terminator directly before the end of the stream doesn't start another line, so
/// `"a\nb\n"` is read as `["a", "b"]`. See [`LineReader::with_terminating_empty_line`] to change
/// this.
///
/// # Examples
/// ```
/// # use linesep::io::lines::LineReader;
/// # use linesep::io::source::StrSource;
/// let reader = LineReader::detect(StrSource::new("one\r\ntwo\r\n")).unwrap();
/// let lines: Result<Vec<String>, _> = reader.collect();
/// assert_eq!(lines.unwrap(), ["one", "two"]);
/// ```
#[derive(Debug)]
pub struct LineReader<S: CharSource> {
    source: S,
    separator: LineSeparator,
    terminating_empty_line: bool,
    after_terminator: bool,
    done: bool,
}

impl<S: CharSource> LineReader<S> {
    pub const fn new(source: S, separator: LineSeparator) -> LineReader<S> {
        LineReader {
            source,
            separator,
            terminating_empty_line: false,
            after_terminator: false,
            done: false,
        }
    }

    /// Creates a LineReader using the separator detected from the start of `source`. Detection
    /// doesn't consume anything, so the first line read is the first line of the source.
    ///
    /// # Errors
    /// Returns an error if detection fails, see [`detect_with_limit`](super::detect_with_limit).
    pub fn detect(mut source: S) -> Result<LineReader<S>, DetectError> {
        let separator = detect(&mut source)?;
        Ok(LineReader::new(source, separator))
    }

    /// Sets whether a terminator at the very end of the stream is followed by one last, empty
    /// line. Disabled by default.
    pub fn with_terminating_empty_line(mut self, enabled: bool) -> LineReader<S> {
        self.terminating_empty_line = enabled;
        self
    }

    pub const fn separator(&self) -> LineSeparator {
        self.separator
    }

    /// Reads the next line, without its terminator. Returns [`None`] once there are no lines
    /// left, after which it always returns [`None`].
    ///
    /// # Errors
    /// Propagates any [`ReadError`] from the source. The reader is exhausted after an error.
    pub fn read_line(&mut self) -> Result<Option<String>, ReadError> {
        if self.done {
            return Ok(None);
        }

        let mut content = String::new();
        let terminator = match self.separator.read_line_into(&mut self.source, &mut content) {
            Ok(terminator) => terminator,
            Err(e) => {
                self.done = true;
                return Err(e);
            },
        };

        if terminator.is_end() {
            self.done = true;
            if content.is_empty() {
                return Ok((self.terminating_empty_line && self.after_terminator).then(String::new));
            }
        }

        self.after_terminator = !terminator.is_end();
        Ok(Some(content))
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: CharSource> Iterator for LineReader<S> {
    type Item = Result<String, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

impl<S: CharSource> FusedIterator for LineReader<S> {}
