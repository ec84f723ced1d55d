//! Error types for single-file conversion attempts.

use std::process::ExitStatus;

use thiserror::Error;

/// Everything that can go wrong while converting one file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The native decoder could not read the source file.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// ffmpeg could not be spawned at all.
    #[error("ffmpeg not found")]
    FfmpegMissing,

    /// ffmpeg ran but reported failure.
    #[error("ffmpeg exited with {status}")]
    FfmpegFailed { status: ExitStatus },

    /// Reading the source or writing the destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
