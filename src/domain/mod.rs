//! Domain layer - Pure text transforms

pub mod stripper;

pub use stripper::{strip_tags, StripResult};
