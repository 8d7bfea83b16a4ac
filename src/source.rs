//! The decoding seam between frame selection and FFmpeg.

use image::DynamicImage;

use crate::error::FramepickError;

/// Something frames can be read from by index.
///
/// [`MediaFile`](crate::MediaFile) is the FFmpeg-backed implementation;
/// [`extract_from_source`](crate::extract_from_source) accepts any other.
pub trait FrameSource {
    /// Total number of frames, or 0 if unknown.
    fn frame_count(&self) -> u64;

    /// Seek to `frame_number` and decode that frame.
    ///
    /// # Errors
    ///
    /// Fails when the frame cannot be reached or decoded. Callers treat
    /// errors for which [`FramepickError::is_frame_local`] holds as a
    /// missing frame rather than a failed run.
    fn read_frame(&mut self, frame_number: u64) -> Result<DynamicImage, FramepickError>;
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn frame_count(&self) -> u64 {
        (**self).frame_count()
    }

    fn read_frame(&mut self, frame_number: u64) -> Result<DynamicImage, FramepickError> {
        (**self).read_frame(frame_number)
    }
}
