#![cfg(all(feature = "fs", target_os = "linux"))]

use std::io::BufReader;
use std::path::Path;

use derive_more::{Display, Error, From, IsVariant, TryInto};

use super::{LineSeparator, detect};
use crate::fs::{CloseError, File, OpenError};
use crate::io::DetectError;
use crate::io::source::ReaderSource;

#[derive(Debug, Display, From, Error, TryInto, IsVariant)]
pub enum DetectFileError {
    Open(OpenError),
    Detect(DetectError),
    Close(CloseError),
}

/// Attempts to detect the [`LineSeparator`] used by the UTF-8 file at `file_path`, by sampling the
/// start of it with [`detect`]. The file is closed before returning.
///
/// # Errors
/// Returns an error if the file can't be opened, read or closed.
pub fn detect_path<P: AsRef<Path>>(file_path: P) -> Result<LineSeparator, DetectFileError> {
    let file_path = file_path.as_ref();
    log::debug!("detecting line separator of {}", file_path.display());

    let mut source = ReaderSource::new(BufReader::new(File::open(file_path)?));
    let detected = detect(&mut source);

    let closed = source.into_inner().into_inner().close();

    let separator = detected?;
    closed?;
    Ok(separator)
}
