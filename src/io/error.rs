use std::io;

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error)]
#[display("error while reading from stream: {_0}")]
pub struct StreamError(#[error(source)] pub io::Error);

#[derive(Debug, Display, Clone, Error)]
#[display("stream contains a malformed or truncated UTF-8 sequence")]
pub struct MalformedInputError;

#[derive(Debug, Display, Clone, Error)]
#[display("mark is not set or has been invalidated by reading past its limit")]
pub struct MarkInvalidatedError;

#[derive(Debug, Display, Clone, Error)]
#[display("source does not support mark/reset")]
pub struct UnsupportedCapabilityError;

#[derive(Debug, Display, Clone, Error)]
#[display("invalid lookahead limit {_0} (greater than 0 expected)")]
pub struct InvalidLimitError(#[error(not(source))] pub usize);

#[derive(Debug, Display, From, Error, TryInto, IsVariant)]
pub enum ReadError {
    Stream(StreamError),
    MalformedInput(MalformedInputError),
}

#[derive(Debug, Display, From, Error, TryInto, IsVariant)]
pub enum DetectError {
    Stream(StreamError),
    MalformedInput(MalformedInputError),
    MarkInvalidated(MarkInvalidatedError),
    UnsupportedCapability(UnsupportedCapabilityError),
    InvalidLimit(InvalidLimitError),
}

impl From<ReadError> for DetectError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Stream(e) => e.into(),
            ReadError::MalformedInput(e) => e.into(),
        }
    }
}
