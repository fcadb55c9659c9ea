//! Infrastructure layer - External I/O and environment

pub mod config;
pub mod repository;

pub use config::Settings;
pub use repository::FileSystemRepository;
