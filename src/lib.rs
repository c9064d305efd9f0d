mod hierarchy;
pub use hierarchy::*;
pub mod bank;
pub mod index;
pub mod names;
pub mod records;
pub mod sample;

use thiserror::Error;

/// Error reading part of a sampler disk image.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] binrw::Error),
}
