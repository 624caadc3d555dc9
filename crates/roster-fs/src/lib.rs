//! Filesystem primitives for Roster
//!
//! Provides the safe I/O operations the catalog is persisted through:
//! atomic whole-file replacement, tolerant reads, and locked appends.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{append_line, read_text, read_text_optional, write_atomic, write_text};
