// Layout of a generated header:
//
// // Auto-generated header file from <source>
// #ifndef __<NAME>_H__
// #define __<NAME>_H__
//
// #include <stdint.h>
//
// const uint32_t <name>_size = <len>;
//
// const uint8_t <name>[] = {
//     0x00, 0x01, ... 16 values per row,
//     0x10, 0x11
// };
//
// #endif // __<NAME>_H__

use alloc::string::String;
use core::fmt::Write as _;

pub const BYTES_PER_ROW: usize = 16;
pub const INDENT: &str = "    ";

/// Names used while rendering a header.
#[derive(Debug, Clone, Copy)]
pub struct HeaderSpec<'a> {
    /// Shown in the leading comment only.
    pub source: &'a str,
    /// Used verbatim for the array and `<name>_size`. Must be a valid C
    /// identifier, this is not checked.
    pub array_name: &'a str,
}

impl<'a> HeaderSpec<'a> {
    pub fn new(source: &'a str, array_name: &'a str) -> Self {
        HeaderSpec { source, array_name }
    }

    pub fn guard(&self) -> String {
        let mut guard = String::with_capacity(self.array_name.len() + 6);
        guard.push_str("__");
        guard.push_str(&self.array_name.to_ascii_uppercase());
        guard.push_str("_H__");
        guard
    }
}

/// Rough output length, each byte takes six characters ("0xNN, ").
fn estimated_len(spec: &HeaderSpec, len: usize) -> usize {
    256 + spec.source.len() + 4 * spec.array_name.len() + len * 6 + len / BYTES_PER_ROW * 8
}

pub fn render(spec: &HeaderSpec, data: &[u8]) -> String {
    let guard = spec.guard();
    let name = spec.array_name;
    let mut out = String::with_capacity(estimated_len(spec, data.len()));

    // Writing into a String cannot fail.
    let _ = writeln!(out, "// Auto-generated header file from {}", spec.source);
    let _ = writeln!(out, "#ifndef {guard}");
    let _ = writeln!(out, "#define {guard}\n");
    out.push_str("#include <stdint.h>\n\n");
    let _ = writeln!(out, "const uint32_t {name}_size = {};\n", data.len());
    let _ = writeln!(out, "const uint8_t {name}[] = {{");

    let rows = data.len().div_ceil(BYTES_PER_ROW);
    for (row, chunk) in data.chunks(BYTES_PER_ROW).enumerate() {
        out.push_str(INDENT);
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{byte:02x}");
        }
        if row + 1 < rows {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("};\n\n");
    let _ = writeln!(out, "#endif // {guard}");
    out
}

/// Renders the header and writes it out in one go. Returns the number of
/// bytes written.
pub fn write_header<W: embedded_io::Write>(
    out: &mut W,
    spec: &HeaderSpec,
    data: &[u8],
) -> Result<usize, W::Error> {
    let text = render(spec, data);
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(text.len())
}
