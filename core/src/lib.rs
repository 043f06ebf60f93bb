#![no_std]

pub mod error;
pub mod fs;
pub mod generate;
pub mod header;

extern crate alloc;

pub use error::GenerateError;
pub use generate::generate;
pub use header::{HeaderSpec, render, write_header};
