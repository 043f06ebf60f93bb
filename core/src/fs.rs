use embedded_io::ErrorType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    /// Create the file if needed and truncate it.
    Write,
}

pub trait File: embedded_io::Read + embedded_io::Write {
    /// Size when opened. Only a hint, reads go until EOF.
    fn size(&self) -> usize;
}

/// Path based access to files, backed by `std::fs` on the host and by
/// in-memory doubles in tests.
pub trait Filesystem: ErrorType {
    type File: File;

    fn open_file(&self, path: &str, mode: Mode) -> Result<Self::File, Self::Error>;
    fn exists(&self, path: &str) -> Result<bool, Self::Error>;
}
