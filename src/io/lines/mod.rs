//! Line separators, and reading and writing text line by line.
//!
//! A [`LineSeparator`] is either declared up front or detected from a sample of the input with
//! [`detect`]. Detection requires a [`Markable`](crate::io::source::Markable) source so that
//! reading can continue from where it started:
//!
//! ```
//! # use linesep::io::lines::{LineSeparator, detect};
//! # use linesep::io::source::StrSource;
//! let mut source = StrSource::new("first\rsecond\r");
//! let separator = detect(&mut source).unwrap();
//! assert_eq!(separator, LineSeparator::CR);
//! assert_eq!(separator.read_line(&mut source).unwrap().content, "first");
//! ```

mod detect;
mod path;
mod platform;
mod reader;
mod separator;
mod writer;

pub use detect::*;
#[cfg(all(feature = "fs", target_os = "linux"))]
pub use path::*;
pub use platform::*;
pub use reader::*;
pub use separator::*;
pub use writer::*;
