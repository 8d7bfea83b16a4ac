//! Frame-number, timestamp and pixel-buffer conversions.
//!
//! Shared by the FFmpeg source; none of these are part of the public API.

use std::time::Duration;

use ffmpeg_next::{Rational, frame::Video as VideoFrame};

/// Bytes per pixel of the RGB24 frames handed to the JPEG encoder.
const RGB_BYTES_PER_PIXEL: usize = 3;

/// Copy an RGB24 frame's first plane into a tightly packed buffer.
///
/// FFmpeg rows are often padded (stride > width × 3); the padding is
/// dropped so the result fits [`image::RgbImage::from_raw`].
pub(crate) fn rgb_frame_to_buffer(video_frame: &VideoFrame, width: u32, height: u32) -> Vec<u8> {
    let stride = video_frame.stride(0);
    let row_length = width as usize * RGB_BYTES_PER_PIXEL;
    let rows = height as usize;
    let data = video_frame.data(0);

    if stride == row_length {
        return data[..row_length * rows].to_vec();
    }

    let mut buffer = Vec::with_capacity(row_length * rows);
    for row in data.chunks(stride).take(rows) {
        buffer.extend_from_slice(&row[..row_length]);
    }
    buffer
}

/// Seek target for `frame_number`, in AV_TIME_BASE units (microseconds).
///
/// Container-level seeks (`stream_index = -1`) are expressed in
/// AV_TIME_BASE on the container's absolute timeline, so the stream's start
/// offset (see [`pts_to_microseconds`]) is added to the frame's own time.
pub(crate) fn frame_number_to_seek_timestamp(
    frame_number: u64,
    frames_per_second: f64,
    start_microseconds: i64,
) -> i64 {
    if frames_per_second <= 0.0 {
        return start_microseconds;
    }
    let seconds = frame_number as f64 / frames_per_second;
    start_microseconds.saturating_add((seconds * 1_000_000.0) as i64)
}

/// Rescale a PTS value from the stream's time base to AV_TIME_BASE.
pub(crate) fn pts_to_microseconds(pts: i64, time_base: Rational) -> i64 {
    (pts_to_seconds(pts, time_base) * 1_000_000.0).round() as i64
}

/// Rescale a PTS value from the stream's time base to seconds.
pub(crate) fn pts_to_seconds(pts: i64, time_base: Rational) -> f64 {
    if time_base.denominator() == 0 {
        return 0.0;
    }
    pts as f64 * f64::from(time_base.numerator()) / f64::from(time_base.denominator())
}

/// Map a PTS value to the frame number it presents.
///
/// `start_pts` is the stream's first timestamp; frame 0 is presented there,
/// not at PTS 0. Rounded rather than truncated so a timestamp a hair below
/// the exact frame boundary still lands on the intended frame. Timestamps
/// before the start (pre-roll) map to frame 0.
pub(crate) fn pts_to_frame_number(
    pts: i64,
    start_pts: i64,
    time_base: Rational,
    frames_per_second: f64,
) -> u64 {
    let frame = pts_to_seconds(pts.saturating_sub(start_pts), time_base) * frames_per_second;
    if frame <= 0.0 { 0 } else { frame.round() as u64 }
}

/// Estimate a frame count from duration and frame rate.
///
/// Rounded to match [`pts_to_frame_number`]; 5.005 s at 29.97 fps is 150
/// frames, not 149.
pub(crate) fn estimate_frame_count(duration: Duration, frames_per_second: f64) -> u64 {
    if frames_per_second <= 0.0 {
        return 0;
    }
    (duration.as_secs_f64() * frames_per_second).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_timestamp_in_microseconds() {
        assert_eq!(frame_number_to_seek_timestamp(0, 25.0, 0), 0);
        assert_eq!(frame_number_to_seek_timestamp(25, 25.0, 0), 1_000_000);
        assert_eq!(frame_number_to_seek_timestamp(50, 25.0, 0), 2_000_000);
    }

    #[test]
    fn seek_timestamp_includes_stream_start() {
        // MPEG-TS streams usually start 1.4 s into the container timeline.
        let start = pts_to_microseconds(126_000, Rational::new(1, 90_000));
        assert_eq!(start, 1_400_000);
        assert_eq!(frame_number_to_seek_timestamp(0, 30.0, start), 1_400_000);
        assert_eq!(frame_number_to_seek_timestamp(15, 30.0, start), 1_900_000);
    }

    #[test]
    fn seek_timestamp_without_frame_rate() {
        assert_eq!(frame_number_to_seek_timestamp(10, 0.0, 0), 0);
        assert_eq!(frame_number_to_seek_timestamp(10, 0.0, 2_000_000), 2_000_000);
    }

    #[test]
    fn pts_round_trips_through_frame_numbers() {
        // 1/12800 is a common MP4 video time base; 512 ticks per frame at 25 fps.
        let time_base = Rational::new(1, 12_800);
        assert_eq!(pts_to_frame_number(0, 0, time_base, 25.0), 0);
        assert_eq!(pts_to_frame_number(512, 0, time_base, 25.0), 1);
        assert_eq!(pts_to_frame_number(511, 0, time_base, 25.0), 1);
        assert_eq!(pts_to_frame_number(51_200, 0, time_base, 25.0), 100);
    }

    #[test]
    fn pts_is_measured_from_stream_start() {
        // 30 fps in a 1/90000 time base: 3000 ticks per frame, first frame at 1.4 s.
        let time_base = Rational::new(1, 90_000);
        let start = 126_000;
        assert_eq!(pts_to_frame_number(start, start, time_base, 30.0), 0);
        assert_eq!(pts_to_frame_number(start + 3_000, start, time_base, 30.0), 1);
        assert_eq!(pts_to_frame_number(start + 45_000, start, time_base, 30.0), 15);
    }

    #[test]
    fn pts_before_start_maps_to_first_frame() {
        let time_base = Rational::new(1, 1_000);
        assert_eq!(pts_to_frame_number(-80, 0, time_base, 25.0), 0);
        assert_eq!(pts_to_frame_number(1_000, 1_400, time_base, 25.0), 0);
    }

    #[test]
    fn frame_count_estimate_rounds() {
        let duration = Duration::from_secs_f64(5.005);
        assert_eq!(estimate_frame_count(duration, 29.97), 150);
        assert_eq!(estimate_frame_count(Duration::from_secs(5), 30.0), 150);
        assert_eq!(estimate_frame_count(Duration::from_secs(5), 0.0), 0);
    }

    #[test]
    fn zero_denominator_time_base() {
        assert_eq!(pts_to_seconds(1_000, Rational::new(1, 0)), 0.0);
    }
}
