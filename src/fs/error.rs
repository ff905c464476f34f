use derive_more::{Display, Error, From, IsVariant, TryInto};
use libc::c_int;

#[derive(Debug, Display, Clone, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Clone, Error)]
#[display("file metadata would overflow capacity")]
pub struct MetadataOverflowError;

#[derive(Debug, Display, Clone, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Error)]
#[display("permission denied for the file or a directory in its path")]
pub struct AccessError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, Error)]
#[display("path refers to a directory")]
pub struct IsDirectoryError;

#[derive(Debug, Display, Clone, Error)]
#[display("path contains an interior nul byte")]
pub struct InteriorNulError;

#[derive(Debug, Display, Clone, Error)]
#[display("unexpected OS error with code: {_0}")]
pub struct UnexpectedError(#[error(not(source))] pub c_int);

#[derive(Debug, Display, Clone, From, Error, TryInto, IsVariant)]
pub enum OpenError {
    Access(AccessError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    Interrupt(InterruptError),
    InteriorNul(InteriorNulError),
    IsDirectory(IsDirectoryError),
    MetadataOverflow(MetadataOverflowError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    PathLength(PathLengthError),
    Other(UnexpectedError),
}

#[derive(Debug, Display, Clone, From, Error, TryInto, IsVariant)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    StorageExhausted(StorageExhaustedError),
}
