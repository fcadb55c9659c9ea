//! Application layer - Use cases and orchestration

pub mod strip_files;

pub use strip_files::{strip_file, strip_files, StripFileChange, StripOptions, StripReport};
