//! Character-oriented input and line handling.
//!
//! The [`source`] module defines what it means to pull characters from somewhere, and which
//! sources can rewind. The [`lines`] module builds line scanning, separator detection and
//! line-oriented reading/writing on top of that.

pub mod lines;
pub mod source;

mod error;

pub use error::*;
