use alloc::vec::Vec;

use log::{debug, info};

use crate::error::GenerateError;
use crate::fs::{File, Filesystem, Mode};
use crate::header::{self, HeaderSpec};

type Result<T> = core::result::Result<T, GenerateError>;

const READ_CHUNK: usize = 4096;

/// Converts `input_path` into a C header at `output_path` declaring
/// `array_name` and `array_name_size`. Returns the number of input bytes.
///
/// The input is checked and read completely before the output is opened,
/// so a missing or unreadable input never creates or truncates the output.
pub fn generate<FS: Filesystem>(
    fs: &FS,
    input_path: &str,
    output_path: &str,
    array_name: &str,
) -> Result<usize> {
    if !fs.exists(input_path).map_err(GenerateError::read)? {
        return Err(GenerateError::InputNotFound);
    }

    let data = {
        let mut input = fs
            .open_file(input_path, Mode::Read)
            .map_err(GenerateError::read)?;
        read_to_end(&mut input)?
    };
    debug!("Read {} bytes from {}", data.len(), input_path);

    let spec = HeaderSpec::new(input_path, array_name);
    let mut output = fs
        .open_file(output_path, Mode::Write)
        .map_err(GenerateError::write)?;
    let written =
        header::write_header(&mut output, &spec, &data).map_err(GenerateError::write)?;
    info!(
        "Wrote {} ({} bytes) for {} input bytes",
        output_path,
        written,
        data.len()
    );

    Ok(data.len())
}

/// Reads until EOF. The reported size is only a capacity hint, it can be
/// wrong (procfs reports 0) or stale if the file grows.
fn read_to_end(input: &mut impl File) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(input.size());
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        match input.read(&mut chunk).map_err(GenerateError::read)? {
            0 => return Ok(data),
            n => data.extend_from_slice(&chunk[..n]),
        }
    }
}
