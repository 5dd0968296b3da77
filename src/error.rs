//! Startup errors
//!
//! The simulation itself never fails. Only the collaborators that read data
//! from disk before the first tick (settings, sprite manifest) can.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("sprite manifest lists no meteor variants")]
    NoMeteorVariants,
    #[error("sprite `{name}` has an empty size ({width}x{height})")]
    InvalidSprite { name: String, width: u32, height: u32 },
    #[error("tick rate must be positive")]
    InvalidTickRate,
    #[error("play field must have a positive size, got {width}x{height}")]
    InvalidPlayField { width: f64, height: f64 },
}
