use std::ffi::CString;
use std::fmt::{self, Debug, Formatter};
use std::io::{self, Read};
use std::mem::{self, MaybeUninit};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{O_CLOEXEC, O_RDONLY, c_int};

use super::{
    AccessError, BadAddrPanic, BadFdPanic, CloseError, ExcessiveLinksError, FileCountError,
    IOError, InteriorNulError, InterruptError, IsDirectoryError, MetadataOverflowError,
    MissingComponentError, NonDirComponentError, OOMError, OpenError, Panic, PathLengthError,
    StorageExhaustedError, UnexpectedError, UnexpectedErrorPanic, err_no,
};

/// A file opened for reading only.
///
/// The file is closed when dropped, ignoring any error other than a corrupted descriptor. Use
/// [`File::close`] to observe errors.
pub struct File {
    fd: c_int,
}

impl File {
    /// Opens the existing file at `file_path` for reading.
    ///
    /// # Errors
    /// Returns an [`OpenError`] describing why the file couldn't be opened, including
    /// [`IsDirectoryError`] when `file_path` refers to a directory.
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<File, OpenError> {
        let pathname = CString::new(file_path.as_ref().as_os_str().as_bytes())
            .map_err(|_| InteriorNulError)?;

        // SAFETY: pathname is a valid nul-terminated string that outlives the call.
        let fd = unsafe { libc::open(pathname.as_ptr(), O_RDONLY | O_CLOEXEC) };
        if fd == -1 {
            match err_no() {
                libc::EACCES | libc::EPERM => Err(AccessError)?,
                libc::EFAULT => BadAddrPanic.panic(),
                libc::EINTR => Err(InterruptError)?,
                libc::EISDIR => Err(IsDirectoryError)?,
                libc::ELOOP => Err(ExcessiveLinksError)?,
                libc::EMFILE | libc::ENFILE => Err(FileCountError)?,
                libc::ENAMETOOLONG => Err(PathLengthError)?,
                libc::ENOENT => Err(MissingComponentError)?,
                libc::ENOMEM => Err(OOMError)?,
                libc::ENOTDIR => Err(NonDirComponentError)?,
                libc::EOVERFLOW => Err(MetadataOverflowError)?,
                e => Err(UnexpectedError(e))?,
            }
        }

        let file = File { fd };
        // Opening a directory read-only succeeds, so it has to be rejected here instead.
        if file.is_dir()? {
            Err(IsDirectoryError)?
        }
        Ok(file)
    }

    fn is_dir(&self) -> Result<bool, OpenError> {
        let mut raw_meta: MaybeUninit<libc::stat> = MaybeUninit::uninit();
        // SAFETY: raw_meta is only read after fstat reports success.
        if unsafe { libc::fstat(self.fd, raw_meta.as_mut_ptr()) } == -1 {
            match err_no() {
                libc::EBADF => BadFdPanic.panic(),
                libc::EFAULT => BadAddrPanic.panic(),
                libc::ENOMEM => Err(OOMError)?,
                libc::EOVERFLOW => Err(MetadataOverflowError)?,
                e => Err(UnexpectedError(e))?,
            }
        }
        // SAFETY: fstat either initializes raw_meta or returns an error, handled above.
        let raw = unsafe { raw_meta.assume_init() };

        Ok(raw.st_mode & libc::S_IFMT == libc::S_IFDIR)
    }

    /// Closes the file, reporting any error that occurs.
    ///
    /// # Errors
    /// Returns a [`CloseError`] if the OS reports an error while closing. The descriptor is
    /// invalidated regardless.
    pub fn close(self) -> Result<(), CloseError> {
        let fd = self.fd;
        // The descriptor is closed below and mustn't be closed again on drop.
        mem::forget(self);

        // SAFETY: close invalidates the descriptor regardless of the outcome, and self has been
        // consumed so it can't be used again.
        if unsafe { libc::close(fd) } == -1 {
            match err_no() {
                libc::EBADF => BadFdPanic.panic(),
                libc::EINTR => Err(InterruptError)?,
                libc::EIO => Err(IOError)?,
                libc::ENOSPC | libc::EDQUOT => Err(StorageExhaustedError)?,
                e => UnexpectedErrorPanic(e).panic(),
            }
        }
        Ok(())
    }
}

impl Read for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        match unsafe { libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(io::Error::from_raw_os_error(err_no())),
            count => Ok(count as usize),
        }
    }
}

impl Drop for File {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.fd) } == -1
            && err_no() == libc::EBADF
            // Panic only if we aren't already, to prevent aborting an existing unwind.
            && !std::thread::panicking()
        {
            BadFdPanic.panic()
        }
    }
}

impl Debug for File {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "File({})", self.fd)
    }
}
