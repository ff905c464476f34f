use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind};
use std::num::NonZeroUsize;
use std::str;

use super::{CharSource, Markable};
use crate::io::{MalformedInputError, MarkInvalidatedError, ReadError, StreamError};

/// A markable [`CharSource`] that decodes UTF-8 from a buffered byte stream.
///
/// Characters read after a call to [`mark`](Markable::mark) are retained (up to the mark's limit)
/// so that [`reset`](Markable::reset) can replay them. Once more characters than the limit are
/// read, the retained characters are discarded and the mark is invalidated.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use linesep::io::source::{CharSource, ReaderSource};
/// let mut source = ReaderSource::new(Cursor::new("é!"));
/// assert_eq!(source.read_char().ok(), Some(Some('é')));
/// assert_eq!(source.read_char().ok(), Some(Some('!')));
/// assert_eq!(source.read_char().ok(), Some(None));
/// ```
#[derive(Debug)]
pub struct ReaderSource<R: BufRead> {
    inner: R,
    replay: VecDeque<char>,
    mark: Option<ReaderMark>,
}

#[derive(Debug)]
struct ReaderMark {
    limit: usize,
    chars: Vec<char>,
    valid: bool,
}

// Retained characters are allocated lazily beyond this.
const MARK_PREALLOC: usize = 1024;

impl<R: BufRead> ReaderSource<R> {
    pub const fn new(inner: R) -> ReaderSource<R> {
        ReaderSource {
            inner,
            replay: VecDeque::new(),
            mark: None,
        }
    }

    pub const fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Consumes the source, returning the underlying reader. Any characters that have been reset
    /// but not read again are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn next_byte(&mut self) -> Result<Option<u8>, StreamError> {
        let byte = loop {
            match self.inner.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(StreamError(e)),
            }
        };
        if byte.is_some() {
            self.inner.consume(1);
        }
        Ok(byte)
    }

    fn decode_next(&mut self) -> Result<Option<char>, ReadError> {
        let Some(first) = self.next_byte()? else {
            return Ok(None);
        };
        let width = utf8_width(first).ok_or(MalformedInputError)?;

        let mut raw = [first, 0, 0, 0];
        for slot in &mut raw[1..width] {
            *slot = self.next_byte()?.ok_or(MalformedInputError)?;
        }

        match str::from_utf8(&raw[..width]).ok().and_then(|s| s.chars().next()) {
            Some(c) => Ok(Some(c)),
            None => Err(MalformedInputError.into()),
        }
    }
}

const fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

impl<R: BufRead> CharSource for ReaderSource<R> {
    fn read_char(&mut self) -> Result<Option<char>, ReadError> {
        let next = match self.replay.pop_front() {
            Some(c) => Some(c),
            None => self.decode_next()?,
        };

        if let (Some(c), Some(mark)) = (next, &mut self.mark)
            && mark.valid
        {
            if mark.chars.len() < mark.limit {
                mark.chars.push(c);
            } else {
                mark.valid = false;
                mark.chars = Vec::new();
            }
        }
        Ok(next)
    }

    fn as_markable(&mut self) -> Option<&mut dyn Markable> {
        Some(self)
    }
}

impl<R: BufRead> Markable for ReaderSource<R> {
    fn mark(&mut self, read_limit: NonZeroUsize) {
        let limit = read_limit.get();
        self.mark = Some(ReaderMark {
            limit,
            chars: Vec::with_capacity(limit.min(MARK_PREALLOC)),
            valid: true,
        });
    }

    fn reset(&mut self) -> Result<(), MarkInvalidatedError> {
        match &mut self.mark {
            Some(mark) if mark.valid => {
                // Anything still queued from an earlier reset lies after the mark.
                for c in mark.chars.drain(..).rev() {
                    self.replay.push_front(c);
                }
                Ok(())
            },
            _ => Err(MarkInvalidatedError),
        }
    }
}
