use std::num::NonZeroUsize;

use super::{CharSource, Markable};
use crate::io::{MarkInvalidatedError, ReadError};

/// A markable [`CharSource`] over a borrowed string slice.
///
/// # Examples
/// ```
/// # use linesep::io::source::{CharSource, StrSource};
/// let mut source = StrSource::new("ab");
/// assert_eq!(source.read_char().ok(), Some(Some('a')));
/// assert_eq!(source.remaining(), "b");
/// ```
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    text: &'a str,
    pos: usize,
    mark: Option<StrMark>,
}

#[derive(Debug, Clone, Copy)]
struct StrMark {
    pos: usize,
    limit: usize,
    read: usize,
}

impl<'a> StrSource<'a> {
    pub const fn new(text: &'a str) -> StrSource<'a> {
        StrSource {
            text,
            pos: 0,
            mark: None,
        }
    }

    /// Returns the part of the string that hasn't been read yet.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }
}

impl CharSource for StrSource<'_> {
    fn read_char(&mut self) -> Result<Option<char>, ReadError> {
        let Some(c) = self.remaining().chars().next() else {
            return Ok(None);
        };
        self.pos += c.len_utf8();

        if let Some(mark) = &mut self.mark {
            mark.read = mark.read.saturating_add(1);
        }
        Ok(Some(c))
    }

    fn as_markable(&mut self) -> Option<&mut dyn Markable> {
        Some(self)
    }
}

impl Markable for StrSource<'_> {
    fn mark(&mut self, read_limit: NonZeroUsize) {
        self.mark = Some(StrMark {
            pos: self.pos,
            limit: read_limit.get(),
            read: 0,
        });
    }

    fn reset(&mut self) -> Result<(), MarkInvalidatedError> {
        match &mut self.mark {
            Some(mark) if mark.read <= mark.limit => {
                self.pos = mark.pos;
                mark.read = 0;
                Ok(())
            },
            _ => Err(MarkInvalidatedError),
        }
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(value: &'a str) -> Self {
        StrSource::new(value)
    }
}
