//! Pull-based character sources and the optional mark/reset capability.
//!
//! Any type implementing [`CharSource`] can be scanned for lines. Detection additionally needs to
//! rewind after sampling, which only [`Markable`] sources can do. Sources advertise this through
//! [`CharSource::as_markable`] rather than a supertrait bound, so that a caller holding a plain
//! source gets an error instead of a compile failure.
//!
//! Provided sources:
//! - [`StrSource`] for borrowed string slices.
//! - [`ReaderSource`] for any [`BufRead`](std::io::BufRead), decoding UTF-8.
//! - [`Chars`](std::str::Chars), which is not markable.

mod reader_source;
mod source;
mod str_source;
mod tests;

pub use reader_source::*;
pub use source::*;
pub use str_source::*;
