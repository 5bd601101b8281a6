//! Cross-cutting helpers: configuration reading and error types.

pub mod config;
pub mod errors;

pub use config::{ConfigReader, MapConfig};
pub use errors::TargetError;
