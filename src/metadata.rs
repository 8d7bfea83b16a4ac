//! Video stream metadata.
//!
//! Read once when a [`MediaFile`](crate::MediaFile) is opened and cached for
//! the lifetime of the handle.

use std::time::Duration;

/// Metadata for the video stream frames are read from.
///
/// # Example
///
/// ```no_run
/// use framepick::MediaFile;
///
/// let video = MediaFile::open("input.mp4").unwrap();
/// let metadata = video.metadata();
/// println!(
///     "{}x{} @ {:.2} fps, {} frames",
///     metadata.width, metadata.height, metadata.frames_per_second, metadata.frame_count,
/// );
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct VideoMetadata {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Average frames per second; 0.0 when the container does not say.
    pub frames_per_second: f64,
    /// Total number of frames; 0 when it cannot be determined.
    ///
    /// Taken from the stream header when present, otherwise estimated from
    /// duration and frame rate.
    pub frame_count: u64,
    /// Container duration.
    pub duration: Duration,
    /// Presentation time of the stream's first frame.
    ///
    /// Zero for most MP4/MKV files; MPEG-TS streams typically start around
    /// 1.4 s. Frame numbers are counted from here.
    pub start_time: Duration,
    /// Codec name (e.g. `"h264"`, `"vp9"`).
    pub codec: String,
    /// Index of the stream inside the container.
    pub stream_index: usize,
}
