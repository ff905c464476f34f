/// The line conventions of a target platform, used to resolve
/// [`LineSeparator::PlatformDefault`](super::LineSeparator::PlatformDefault) when writing.
///
/// This is passed explicitly wherever a terminator is emitted, so output doesn't depend on the
/// platform the code happens to run on unless [`Platform::host`] is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    line_separator: &'static str,
}

impl Platform {
    pub const UNIX: Platform = Platform::new("\n");
    pub const WINDOWS: Platform = Platform::new("\r\n");

    pub const fn new(line_separator: &'static str) -> Platform {
        Platform { line_separator }
    }

    /// Returns the platform this crate was compiled for.
    pub const fn host() -> Platform {
        if cfg!(windows) {
            Platform::WINDOWS
        } else {
            Platform::UNIX
        }
    }

    pub const fn line_separator(&self) -> &'static str {
        self.line_separator
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::host()
    }
}
