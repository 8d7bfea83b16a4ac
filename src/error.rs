//! Error types for the `framepick` crate.
//!
//! [`FramepickError`] is returned by every fallible operation. Variants are
//! split between fatal errors (the source could not be opened, the output
//! could not be written) and per-frame errors that the extraction routine
//! skips over.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `framepick` operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FramepickError {
    /// The video source could not be opened or holds no decodable video.
    #[error("Failed to open video source at {path}: {reason}")]
    SourceOpen {
        /// Path that was passed to [`crate::MediaFile::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// A video frame could not be decoded.
    #[error("Failed to decode video frame: {0}")]
    VideoDecodeError(String),

    /// The requested frame number is at or past the known frame count.
    #[error("Frame {frame_number} is out of range (video has {total_frames} frames)")]
    FrameOutOfRange {
        /// The frame number that was requested.
        frame_number: u64,
        /// The total number of frames in the video.
        total_frames: u64,
    },

    /// JPEG quality outside `0..=100`.
    #[error("JPEG quality must be between 0 and 100, got {0}")]
    InvalidQuality(u8),

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),

    /// An I/O error occurred while creating the output directory or files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// The JPEG encoder rejected a frame.
    #[error("Image encoding error: {0}")]
    ImageError(#[from] ImageError),
}

impl FramepickError {
    /// Returns `true` for errors confined to a single frame position.
    ///
    /// The extraction routine skips these and carries on with the next
    /// position; everything else aborts the run.
    pub fn is_frame_local(&self) -> bool {
        matches!(
            self,
            FramepickError::VideoDecodeError(_)
                | FramepickError::FrameOutOfRange { .. }
                | FramepickError::FfmpegError(_)
        )
    }
}

impl From<FfmpegError> for FramepickError {
    fn from(error: FfmpegError) -> Self {
        FramepickError::FfmpegError(error.to_string())
    }
}
