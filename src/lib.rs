//! untag - strip HTML tags from files in place
//!
//! Reads a file, removes every tag-like `<...>` span with a naive
//! non-greedy match and writes the plain text back to the same path.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::UntagError;
