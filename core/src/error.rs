use core::fmt;

/// Error type for header generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The input path does not exist. Checked before anything is opened.
    InputNotFound,
    /// Opening or reading the input failed.
    Read(embedded_io::ErrorKind),
    /// Opening, writing or flushing the output failed.
    Write(embedded_io::ErrorKind),
}

impl GenerateError {
    pub(crate) fn read(error: impl embedded_io::Error) -> Self {
        GenerateError::Read(error.kind())
    }

    pub(crate) fn write(error: impl embedded_io::Error) -> Self {
        GenerateError::Write(error.kind())
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InputNotFound => f.write_str("input file not found"),
            GenerateError::Read(kind) => write!(f, "failed to read input: {kind:?}"),
            GenerateError::Write(kind) => write!(f, "failed to write output: {kind:?}"),
        }
    }
}

impl core::error::Error for GenerateError {}

impl embedded_io::Error for GenerateError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            GenerateError::InputNotFound => embedded_io::ErrorKind::NotFound,
            GenerateError::Read(kind) | GenerateError::Write(kind) => *kind,
        }
    }
}
