use std::fs;
use std::path::{Path, PathBuf};

use bin2h_core::fs::Mode;
use embedded_io::ErrorType;
use log::{debug, warn};

pub struct StdFilesystem {
    base_path: PathBuf,
}

impl StdFilesystem {
    pub fn new_with_base_path(base_path: PathBuf) -> Self {
        debug!("Using StdFilesystem with base path: {:?}", base_path);
        StdFilesystem { base_path }
    }
}

impl ErrorType for StdFilesystem {
    type Error = embedded_io::ErrorKind;
}

type Result<T> = core::result::Result<T, embedded_io::ErrorKind>;

/// Logs the OS error text, which the core only sees as an `ErrorKind`.
fn io_error_kind(action: &str, path: &Path, error: std::io::Error) -> embedded_io::ErrorKind {
    warn!("Failed to {action} {}: {error}", path.display());
    embedded_io::Error::kind(&error)
}

impl bin2h_core::fs::Filesystem for StdFilesystem {
    type File = StdFile;

    fn open_file(&self, path: &str, mode: Mode) -> Result<StdFile> {
        let path = self.base_path.join(path);
        let mut options = fs::OpenOptions::new();
        match mode {
            Mode::Read => options.read(true),
            // Parent directories are left to the caller.
            Mode::Write => options.write(true).create(true).truncate(true),
        };
        let file = options
            .open(&path)
            .map_err(|e| io_error_kind("open", &path, e))?;
        StdFile::new(file).map_err(|e| io_error_kind("stat", &path, e))
    }

    fn exists(&self, path: &str) -> Result<bool> {
        let path = self.base_path.join(path);
        path.try_exists().map_err(|e| io_error_kind("look up", &path, e))
    }
}

pub struct StdFile {
    file: fs::File,
    size: usize,
}

impl StdFile {
    pub fn new(file: fs::File) -> std::io::Result<Self> {
        let size = file.metadata()?.len() as usize;
        Ok(StdFile { file, size })
    }
}

impl bin2h_core::fs::File for StdFile {
    fn size(&self) -> usize {
        self.size
    }
}

impl ErrorType for StdFile {
    type Error = std::io::Error;
}

impl embedded_io::Read for StdFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        use std::io::Read;
        self.file.read(buf)
    }
}

impl embedded_io::Write for StdFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        use std::io::Write;
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        use std::io::Write;
        self.file.flush()
    }
}
