use std::process::ExitCode;

use argh::FromArgs;
use bin2h_core::{GenerateError, generate};
use log::{error, info};

use crate::std_fs::StdFilesystem;

mod std_fs;

const INPUT_PATH: &str = "espeon/gbborder.jpg";
const OUTPUT_PATH: &str = "espeon/gbborder.h";
const ARRAY_NAME: &str = "gb_border";

#[derive(FromArgs)]
/// Convert espeon/gbborder.jpg into the espeon/gbborder.h C header
struct Args {
    /// log every step
    #[argh(switch, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let fs = StdFilesystem::new_with_base_path(".".into());
    match run(&fs, INPUT_PATH, OUTPUT_PATH, ARRAY_NAME) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            println!("{message}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the conversion and turns the outcome into the line shown to the
/// user on failure.
fn run(
    fs: &StdFilesystem,
    input_path: &str,
    output_path: &str,
    array_name: &str,
) -> Result<(), String> {
    match generate(fs, input_path, output_path, array_name) {
        Ok(len) => {
            info!("Converted {len} bytes from {input_path}");
            println!("Successfully generated {output_path}");
            Ok(())
        }
        Err(GenerateError::InputNotFound) => {
            error!("Input {input_path} does not exist");
            Err(format!("Error: {input_path} not found"))
        }
        Err(GenerateError::Read(kind)) => {
            error!("Reading {input_path} failed: {kind:?}");
            Err(format!("Error: failed to read input {input_path}: {kind:?}"))
        }
        Err(GenerateError::Write(kind)) => {
            error!("Writing {output_path} failed: {kind:?}");
            Err(format!("Error: failed to write output {output_path}: {kind:?}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(input: Option<&[u8]>) -> (tempfile::TempDir, StdFilesystem) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("espeon")).unwrap();
        if let Some(input) = input {
            std::fs::write(dir.path().join(INPUT_PATH), input).unwrap();
        }
        let fs = StdFilesystem::new_with_base_path(dir.path().to_path_buf());
        (dir, fs)
    }

    #[test]
    fn test_generates_border_header() {
        let jpeg = [0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
        let (dir, fs) = setup(Some(&jpeg[..]));
        run(&fs, INPUT_PATH, OUTPUT_PATH, ARRAY_NAME).unwrap();

        let header = std::fs::read_to_string(dir.path().join(OUTPUT_PATH)).unwrap();
        assert_eq!(
            header,
            "// Auto-generated header file from espeon/gbborder.jpg\n\
             #ifndef __GB_BORDER_H__\n\
             #define __GB_BORDER_H__\n\
             \n\
             #include <stdint.h>\n\
             \n\
             const uint32_t gb_border_size = 10;\n\
             \n\
             const uint8_t gb_border[] = {\n    \
             0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10, 0x4a, 0x46, 0x49, 0x46\n\
             };\n\
             \n\
             #endif // __GB_BORDER_H__\n"
        );
    }

    #[test]
    fn test_missing_input() {
        let (dir, fs) = setup(None);
        let message = run(&fs, INPUT_PATH, OUTPUT_PATH, ARRAY_NAME).unwrap_err();
        assert_eq!(message, "Error: espeon/gbborder.jpg not found");
        assert!(!dir.path().join(OUTPUT_PATH).exists());
    }

    #[test]
    fn test_missing_output_directory() {
        let (_dir, fs) = setup(Some(&b"data"[..]));
        let message = run(&fs, INPUT_PATH, "build/gbborder.h", ARRAY_NAME).unwrap_err();
        assert_eq!(message, "Error: failed to write output build/gbborder.h: NotFound");
    }

    #[test]
    fn test_unreadable_input_names_path() {
        let (dir, fs) = setup(None);
        // A directory passes the existence check but cannot be read as a file.
        std::fs::create_dir(dir.path().join(INPUT_PATH)).unwrap();
        let message = run(&fs, INPUT_PATH, OUTPUT_PATH, ARRAY_NAME).unwrap_err();
        assert!(
            message.starts_with("Error: failed to read input espeon/gbborder.jpg: "),
            "{message}"
        );
        assert!(!dir.path().join(OUTPUT_PATH).exists());
    }

    #[test]
    fn test_rerun_is_identical() {
        let input: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
        let (dir, fs) = setup(Some(input.as_slice()));
        run(&fs, INPUT_PATH, OUTPUT_PATH, ARRAY_NAME).unwrap();
        let first = std::fs::read(dir.path().join(OUTPUT_PATH)).unwrap();
        run(&fs, INPUT_PATH, OUTPUT_PATH, ARRAY_NAME).unwrap();
        assert_eq!(std::fs::read(dir.path().join(OUTPUT_PATH)).unwrap(), first);
        assert!(
            String::from_utf8(first)
                .unwrap()
                .contains("const uint32_t gb_border_size = 1000;\n")
        );
    }
}
