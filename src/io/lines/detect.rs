use std::num::NonZeroUsize;

use super::LineSeparator;
use crate::io::source::CharSource;
use crate::io::{DetectError, InvalidLimitError, ReadError, UnsupportedCapabilityError};

/// The default number of characters sampled by [`detect`].
pub const DETECT_LIMIT: usize = 8000;

/// Counts of each terminator found while sampling a stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sample {
    pub lf: usize,
    pub crlf: usize,
    pub cr: usize,
}

impl Sample {
    /// Reads up to `limit` characters from `source`, counting the terminators found.
    ///
    /// A carriage return followed by a line feed is counted once as CRLF. A carriage return
    /// followed by anything else is counted as CR, and the following character is examined again,
    /// so `"\r\r\n"` counts as one CR and one CRLF. No character past `limit` is ever read, even
    /// to check what follows a trailing carriage return.
    ///
    /// # Errors
    /// Propagates any [`ReadError`] from the source.
    pub fn scan<S: CharSource + ?Sized>(source: &mut S, limit: usize) -> Result<Sample, ReadError> {
        let mut sample = Sample::default();
        let mut examined = 0_usize;
        let mut pending: Option<char> = None;

        loop {
            let c = match pending.take() {
                Some(c) => c,
                None if examined >= limit => break,
                None => match source.read_char()? {
                    Some(c) => {
                        examined += 1;
                        c
                    },
                    None => break,
                },
            };

            match c {
                '\n' => sample.lf += 1,
                '\r' if examined >= limit => {
                    sample.cr += 1;
                    break;
                },
                '\r' => match source.read_char()? {
                    Some('\n') => {
                        examined += 1;
                        sample.crlf += 1;
                    },
                    Some(next) => {
                        examined += 1;
                        sample.cr += 1;
                        pending = Some(next);
                    },
                    None => {
                        sample.cr += 1;
                        break;
                    },
                },
                _ => {},
            }
        }

        Ok(sample)
    }

    /// Returns the most frequent separator in this sample.
    ///
    /// If all counts are equal (including when no terminator was found at all),
    /// [`LineSeparator::PlatformDefault`] is returned. Otherwise ties between the highest counts
    /// are broken in the order LF, CRLF, CR.
    pub fn separator(&self) -> LineSeparator {
        let max = self.lf.max(self.crlf).max(self.cr);
        let min = self.lf.min(self.crlf).min(self.cr);

        if max == min {
            LineSeparator::PlatformDefault
        } else if max == self.lf {
            LineSeparator::LF
        } else if max == self.crlf {
            LineSeparator::CRLF
        } else {
            LineSeparator::CR
        }
    }
}

/// Attempts to detect the [`LineSeparator`] used by `source`, sampling up to [`DETECT_LIMIT`]
/// characters. See [`detect_with_limit`].
///
/// # Errors
/// See [`detect_with_limit`].
pub fn detect<S: CharSource + ?Sized>(source: &mut S) -> Result<LineSeparator, DetectError> {
    detect_with_limit(source, DETECT_LIMIT)
}

/// Attempts to detect the [`LineSeparator`] used by `source`, sampling up to `limit` characters.
///
/// The source is marked before sampling and reset afterwards, so that the next read starts from
/// the same position as before detection. The result is decided by [`Sample::separator`], with
/// [`LineSeparator::PlatformDefault`] returned when the sample is inconclusive.
///
/// # Errors
/// - [`InvalidLimitError`] if `limit` is zero, before anything is read.
/// - [`UnsupportedCapabilityError`] if `source` isn't [`Markable`](crate::io::source::Markable).
/// - Any read error from the source, or [`MarkInvalidatedError`](crate::io::MarkInvalidatedError)
///   if the source couldn't be reset. When both happen, the read error is returned.
///
/// # Examples
/// ```
/// # use linesep::io::lines::{LineSeparator, detect};
/// # use linesep::io::source::StrSource;
/// let mut source = StrSource::new("a\r\nb\r\nc\n");
/// assert_eq!(detect(&mut source).unwrap(), LineSeparator::CRLF);
/// assert_eq!(source.remaining(), "a\r\nb\r\nc\n");
/// ```
pub fn detect_with_limit<S: CharSource + ?Sized>(
    source: &mut S,
    limit: usize,
) -> Result<LineSeparator, DetectError> {
    let read_limit = NonZeroUsize::new(limit).ok_or(InvalidLimitError(limit))?;
    let markable = source.as_markable().ok_or(UnsupportedCapabilityError)?;

    markable.mark(read_limit);
    let scanned = Sample::scan(markable, limit);
    let reset = markable.reset();
    let sample = scanned?;
    reset?;

    let separator = sample.separator();
    log::trace!(
        "sampled lf={} crlf={} cr={} within {} chars, detected {:?}",
        sample.lf,
        sample.crlf,
        sample.cr,
        limit,
        separator
    );
    Ok(separator)
}
