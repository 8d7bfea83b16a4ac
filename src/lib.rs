//! # framepick
//!
//! Pick still frames out of a video and save them as JPEG files.
//!
//! `framepick` opens a video through FFmpeg (via the
//! [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate), selects
//! frame positions, either evenly spaced over the whole video or an explicit
//! list, decodes each one and writes it as `frame_001.jpg`, `frame_002.jpg`,
//! ... with a chosen JPEG quality.
//!
//! ## Quick Start
//!
//! ```no_run
//! use framepick::{ExtractOptions, FramepickError};
//!
//! // Ten evenly spaced frames at quality 95.
//! let paths = framepick::extract_frames("input.mp4", "frames", &ExtractOptions::new())?;
//!
//! // Specific frames; the frame count is ignored.
//! let options = ExtractOptions::new().with_indices(vec![0, 250, 500]).with_quality(80);
//! let paths = framepick::extract_frames("input.mp4", "picked", &options)?;
//! # Ok::<(), FramepickError>(())
//! ```
//!
//! ## Behaviour
//!
//! - Frames that cannot be decoded (for example an index past the end) are
//!   skipped. Output files are numbered by how many frames have been
//!   written, so the sequence never has gaps.
//! - A video that cannot be opened fails with
//!   [`FramepickError::SourceOpen`] before anything is created on disk.
//! - A video whose frame count is unknown yields no frames unless explicit
//!   indices are given.
//! - Errors writing the output directory or files are returned, never
//!   swallowed.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

mod conversion;
pub mod error;
pub mod export;
pub mod extract;
pub mod ffmpeg;
pub mod media;
pub mod metadata;
pub mod options;
pub mod progress;
pub mod sampling;
pub mod source;

pub use error::FramepickError;
pub use export::{frame_file_name, save_jpeg};
pub use extract::{extract_frames, extract_from_source};
pub use ffmpeg::{FfmpegLogLevel, set_ffmpeg_log_level};
pub use media::MediaFile;
pub use metadata::VideoMetadata;
pub use options::{DEFAULT_FRAME_COUNT, DEFAULT_QUALITY, ExtractOptions, MAX_QUALITY};
pub use progress::{ProgressCallback, ProgressInfo};
pub use sampling::evenly_spaced_indices;
pub use source::FrameSource;
