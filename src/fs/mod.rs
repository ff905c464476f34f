//! A minimal, read-only file handle built directly on `libc`.
//!
//! This only covers what's needed to sample files for their line separator: opening an existing
//! file for reading, reading from it via [`std::io::Read`] and closing it with error reporting.
#![cfg(target_os = "linux")]

mod error;
mod file;
mod panic;
mod syscall;
mod tests;

pub use error::*;
pub use file::*;
pub(crate) use panic::*;
pub(crate) use syscall::*;
