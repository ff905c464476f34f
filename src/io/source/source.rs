use std::num::NonZeroUsize;
use std::str::Chars;

use crate::io::{MarkInvalidatedError, ReadError};

/// A source of characters that is consumed one [`char`] at a time.
pub trait CharSource {
    /// Reads the next character, returning [`None`] once the end of the stream is reached.
    ///
    /// Sources are expected to keep returning [`None`] after the first time they do so.
    fn read_char(&mut self) -> Result<Option<char>, ReadError>;

    /// Returns this source as a [`Markable`] one, if it supports mark/reset. The default
    /// implementation returns [`None`].
    fn as_markable(&mut self) -> Option<&mut dyn Markable> {
        None
    }
}

/// A [`CharSource`] capable of saving its position and returning to it later, within a bounded
/// number of characters.
pub trait Markable: CharSource {
    /// Saves the current position, replacing any previous mark. The mark remains valid while no
    /// more than `read_limit` characters are read after it.
    fn mark(&mut self, read_limit: NonZeroUsize);

    /// Returns to the marked position. The mark is kept, so the source may be reset to the same
    /// position again.
    ///
    /// # Errors
    /// Returns [`MarkInvalidatedError`] if no mark has been set, or if more than `read_limit`
    /// characters have been read since it was.
    fn reset(&mut self) -> Result<(), MarkInvalidatedError>;
}

impl<S: CharSource + ?Sized> CharSource for &mut S {
    fn read_char(&mut self) -> Result<Option<char>, ReadError> {
        (**self).read_char()
    }

    fn as_markable(&mut self) -> Option<&mut dyn Markable> {
        (**self).as_markable()
    }
}

impl CharSource for Chars<'_> {
    fn read_char(&mut self) -> Result<Option<char>, ReadError> {
        Ok(self.next())
    }
}
