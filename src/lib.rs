//! This crate detects which line separator a text stream uses, and reads and writes text line by
//! line with a chosen separator.
//!
//! # Purpose
//! Text arrives with `"\n"`, `"\r\n"` or (rarely, these days) `"\r"` line endings, and frequently
//! there is no way to know which ahead of time. Rather than splitting on whatever `\n` happens to
//! be there, this crate samples the start of a stream, picks the most common separator and then
//! reads lines exactly as that separator defines them.
//!
//! # Method
//! Input is modelled as a [`CharSource`](io::source::CharSource): something that hands out one
//! [`char`] at a time. Detection needs to rewind after sampling, which is an optional capability
//! ([`Markable`](io::source::Markable)) that sources opt into. Sources that can't rewind produce an
//! error from [`detect`](io::lines::detect) rather than silently consuming input.
//!
//! Reading a line with a given [`LineSeparator`](io::lines::LineSeparator) is a small state
//! machine per variant. The variants aren't entirely symmetric: under `CRLF` a lone carriage
//! return is content, whereas `PlatformDefault` ends a line at either character and will split
//! a `"\r\n"` pair in two. These are kept as observable behaviour, not smoothed over.
//!
//! # Error Handling
//! Errors are strongly typed, using enums of small structs (often ZSTs) that implement
//! [`Error`](std::error::Error), so that callers can match on exactly what went wrong. Conditions
//! that can only arise from corruption, such as a bad file descriptor, panic instead.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers. Everything else is built on
//! [`std::io`]. Derive macros are used for errors because they remove a lot of very repetitive
//! code, and `log` is used to trace detection decisions.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "fs")]
pub mod fs;
pub mod io;
