//! FFmpeg-backed [`FrameSource`].
//!
//! [`MediaFile`] opens a container, locates its best video stream and
//! caches that stream's metadata. Frames are read by seeking to the nearest
//! keyframe at or before the target and decoding forward. The demuxer is
//! closed when the `MediaFile` is dropped.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{
    Rational,
    codec::context::Context as CodecContext,
    format::{Pixel, context::Input},
    frame::Video as VideoFrame,
    media::Type,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::{DynamicImage, RgbImage};

use crate::{
    conversion::{
        estimate_frame_count, frame_number_to_seek_timestamp, pts_to_frame_number,
        pts_to_microseconds, rgb_frame_to_buffer,
    },
    error::FramepickError,
    metadata::VideoMetadata,
    source::FrameSource,
};

/// An opened video file.
///
/// # Example
///
/// ```no_run
/// use framepick::{FrameSource, FramepickError, MediaFile};
///
/// let mut video = MediaFile::open("input.mp4")?;
/// let frame = video.read_frame(0)?;
/// frame.save("first_frame.png")?;
/// # Ok::<(), FramepickError>(())
/// ```
pub struct MediaFile {
    input_context: Input,
    metadata: VideoMetadata,
    file_path: PathBuf,
    /// First presentation timestamp of the video stream, in its time base.
    start_pts: i64,
}

impl Debug for MediaFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MediaFile")
            .field("metadata", &self.metadata)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl MediaFile {
    /// Open a video file.
    ///
    /// Initializes FFmpeg (idempotent), opens the container and reads the
    /// best video stream's parameters.
    ///
    /// # Errors
    ///
    /// Returns [`FramepickError::SourceOpen`] if the file cannot be opened,
    /// is not a recognisable container, or has no decodable video stream.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FramepickError> {
        let path = path.as_ref();
        let file_path = path.to_path_buf();
        let open_error = |reason: String| FramepickError::SourceOpen {
            path: file_path.clone(),
            reason,
        };

        log::debug!("Opening video source: {}", path.display());

        ffmpeg_next::init()
            .map_err(|error| open_error(format!("FFmpeg initialisation failed: {error}")))?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| open_error(error.to_string()))?;

        let stream = input_context
            .streams()
            .best(Type::Video)
            .ok_or_else(|| open_error(FramepickError::NoVideoStream.to_string()))?;
        let stream_index = stream.index();
        let time_base = stream.time_base();
        // MPEG-TS and friends rarely start at 0; frame 0 is presented here.
        let start_pts = match stream.start_time() {
            ffmpeg_next::ffi::AV_NOPTS_VALUE => 0,
            start => start,
        };

        let decoder_context = CodecContext::from_parameters(stream.parameters())
            .map_err(|error| open_error(format!("Failed to read video codec parameters: {error}")))?;
        let video_decoder = decoder_context
            .decoder()
            .video()
            .map_err(|error| open_error(format!("Failed to create video decoder: {error}")))?;

        let duration = container_duration(&input_context);
        let frames_per_second = rational_to_f64(stream.avg_frame_rate())
            .or_else(|| rational_to_f64(stream.rate()))
            .unwrap_or(0.0);

        let declared_frames = stream.frames();
        let frame_count = if declared_frames > 0 {
            declared_frames as u64
        } else {
            estimate_frame_count(duration, frames_per_second)
        };
        let start_microseconds = pts_to_microseconds(start_pts, time_base);
        let start_time = Duration::from_micros(start_microseconds.max(0) as u64);

        let codec = video_decoder
            .codec()
            .map(|codec| codec.name().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        let metadata = VideoMetadata {
            width: video_decoder.width(),
            height: video_decoder.height(),
            frames_per_second,
            frame_count,
            duration,
            start_time,
            codec,
            stream_index,
        };

        log::info!(
            "Opened video source: {} ({}x{}, {:.2} fps, codec={}, {} frames, starts at {:.3}s)",
            file_path.display(),
            metadata.width,
            metadata.height,
            metadata.frames_per_second,
            metadata.codec,
            metadata.frame_count,
            metadata.start_time.as_secs_f64(),
        );

        Ok(Self {
            input_context,
            metadata,
            file_path,
            start_pts,
        })
    }

    /// Cached metadata of the video stream.
    pub fn metadata(&self) -> &VideoMetadata {
        &self.metadata
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl FrameSource for MediaFile {
    fn frame_count(&self) -> u64 {
        self.metadata.frame_count
    }

    /// Decode a single frame by number (0-indexed).
    ///
    /// Frame numbers count from the stream's first timestamp, so containers
    /// whose timeline does not start at zero seek to the same frame as ones
    /// that do. When the frame rate is unknown, frames cannot be mapped from
    /// timestamps, so decoding restarts at the beginning and frames are
    /// counted instead.
    fn read_frame(&mut self, frame_number: u64) -> Result<DynamicImage, FramepickError> {
        let total_frames = self.metadata.frame_count;
        if total_frames > 0 && frame_number >= total_frames {
            return Err(FramepickError::FrameOutOfRange {
                frame_number,
                total_frames,
            });
        }

        let stream_index = self.metadata.stream_index;
        let frames_per_second = self.metadata.frames_per_second;
        let start_pts = self.start_pts;
        let counting = frames_per_second <= 0.0;

        let stream = self
            .input_context
            .stream(stream_index)
            .ok_or(FramepickError::NoVideoStream)?;
        let time_base = stream.time_base();
        let decoder_context = CodecContext::from_parameters(stream.parameters())?;
        let mut decoder = decoder_context.decoder().video()?;

        let width = decoder.width();
        let height = decoder.height();
        let mut scaler = ScalingContext::get(
            decoder.format(),
            width,
            height,
            Pixel::RGB24,
            width,
            height,
            ScalingFlags::BILINEAR,
        )?;

        let start_microseconds = pts_to_microseconds(start_pts, time_base);
        let seek_timestamp = if counting {
            start_microseconds
        } else {
            frame_number_to_seek_timestamp(frame_number, frames_per_second, start_microseconds)
        };
        self.input_context.seek(seek_timestamp, ..seek_timestamp)?;

        let mut decoded_frame = VideoFrame::empty();
        let mut rgb_frame = VideoFrame::empty();
        let mut ordinal = 0_u64;

        for (stream, packet) in self.input_context.packets() {
            if stream.index() != stream_index {
                continue;
            }

            decoder.send_packet(&packet)?;

            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                let current = decoded_frame_number(
                    &decoded_frame,
                    ordinal,
                    counting,
                    start_pts,
                    time_base,
                    frames_per_second,
                );
                ordinal += 1;

                // A seek may land just past the target; take the first
                // frame at or after it.
                if current >= frame_number {
                    scaler.run(&decoded_frame, &mut rgb_frame)?;
                    return rgb_frame_to_image(&rgb_frame, width, height);
                }
            }
        }

        decoder.send_eof()?;
        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            let current = decoded_frame_number(
                &decoded_frame,
                ordinal,
                counting,
                start_pts,
                time_base,
                frames_per_second,
            );
            ordinal += 1;

            if current >= frame_number {
                scaler.run(&decoded_frame, &mut rgb_frame)?;
                return rgb_frame_to_image(&rgb_frame, width, height);
            }
        }

        Err(FramepickError::VideoDecodeError(format!(
            "Could not locate frame {frame_number} in the video stream"
        )))
    }
}

fn decoded_frame_number(
    frame: &VideoFrame,
    ordinal: u64,
    counting: bool,
    start_pts: i64,
    time_base: Rational,
    frames_per_second: f64,
) -> u64 {
    if counting {
        return ordinal;
    }
    let pts = frame.timestamp().or_else(|| frame.pts()).unwrap_or(start_pts);
    pts_to_frame_number(pts, start_pts, time_base, frames_per_second)
}

fn rgb_frame_to_image(
    rgb_frame: &VideoFrame,
    width: u32,
    height: u32,
) -> Result<DynamicImage, FramepickError> {
    let buffer = rgb_frame_to_buffer(rgb_frame, width, height);
    let rgb_image = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        FramepickError::VideoDecodeError(
            "Failed to construct RGB image from decoded frame data".to_string(),
        )
    })?;
    Ok(DynamicImage::ImageRgb8(rgb_image))
}

fn rational_to_f64(rational: Rational) -> Option<f64> {
    if rational.numerator() > 0 && rational.denominator() > 0 {
        Some(f64::from(rational.numerator()) / f64::from(rational.denominator()))
    } else {
        None
    }
}

fn container_duration(input_context: &Input) -> Duration {
    let microseconds = input_context.duration();
    if microseconds > 0 {
        Duration::from_micros(microseconds as u64)
    } else {
        Duration::ZERO
    }
}
