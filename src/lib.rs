//! strip-gremlins - invisible character cleaning library
//!
//! Replaces irregular space characters with U+0020 and removes zero-width,
//! control and separator characters, either from a stream or from files in place.

pub mod cleaner;
pub mod error;
pub mod files;
pub mod gremlins;

pub use cleaner::{clean, tally, Tally};
pub use error::{CleanError, Result};
pub use files::{clean_stream, process_file, process_files, Outcome, Summary};
pub use gremlins::{classify, is_gremlin, Gremlin};
