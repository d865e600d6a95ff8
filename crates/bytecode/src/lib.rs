//! Container types for EVM bytecode in the object format (EOF).
//!
//! An object-format container wraps executable code together with its data
//! and table sections behind a fixed prefix and a declarative section
//! header. Only containers whose shape validates are handed to the
//! interpreter; the decoded headers expose the byte offsets the interpreter
//! needs to locate each region.
//!
//! Validation is structural only. Nothing here executes code, inspects
//! opcodes or interprets table contents.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub mod eof;

pub use eof::{
    eof_version, is_eof, read_valid_eof1_header, read_valid_eof2_header, validate_eof,
    validate_eof1, validate_eof2, Eof1Header, Eof2Header, EofValidationError, EOF_FORMAT,
    EOF_MAGIC, EOF_PREFIX_BYTES, KIND_CODE, KIND_DATA, KIND_TABLE, KIND_TERMINATOR,
};
