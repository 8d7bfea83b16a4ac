//! Extraction options.
//!
//! [`ExtractOptions`] is a builder carrying everything the extraction
//! routine needs besides the two paths: how many frames to sample, which
//! JPEG quality to encode with, an optional explicit index list, and a
//! progress callback.
//!
//! # Example
//!
//! ```
//! use framepick::ExtractOptions;
//!
//! let sampled = ExtractOptions::new().with_frame_count(5).with_quality(80);
//! assert_eq!(sampled.frame_indices(100), vec![0, 20, 40, 60, 80]);
//!
//! let explicit = ExtractOptions::new().with_indices(vec![3, 3, 900]);
//! assert_eq!(explicit.frame_indices(100), vec![3, 3, 900]);
//! ```

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::{
    error::FramepickError,
    progress::{NoOpProgress, ProgressCallback},
    sampling::evenly_spaced_indices,
};

/// Number of evenly spaced frames sampled when nothing else is configured.
pub const DEFAULT_FRAME_COUNT: u32 = 10;

/// JPEG quality used when nothing else is configured.
pub const DEFAULT_QUALITY: u8 = 95;

/// Highest accepted JPEG quality.
pub const MAX_QUALITY: u8 = 100;

/// Configuration for [`extract_frames`](crate::extract_frames).
#[derive(Clone)]
#[must_use]
pub struct ExtractOptions {
    /// Evenly spaced frames to sample. Ignored when `indices` is set.
    pub(crate) frame_count: u32,
    /// JPEG quality, `0..=100`.
    pub(crate) quality: u8,
    /// Explicit frame numbers, used verbatim.
    pub(crate) indices: Option<Vec<u64>>,
    pub(crate) progress: Arc<dyn ProgressCallback>,
}

impl Debug for ExtractOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ExtractOptions")
            .field("frame_count", &self.frame_count)
            .field("quality", &self.quality)
            .field("indices", &self.indices)
            .finish_non_exhaustive()
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractOptions {
    /// Defaults: [`DEFAULT_FRAME_COUNT`] frames at [`DEFAULT_QUALITY`], no
    /// explicit indices, no progress callback.
    pub fn new() -> Self {
        Self {
            frame_count: DEFAULT_FRAME_COUNT,
            quality: DEFAULT_QUALITY,
            indices: None,
            progress: Arc::new(NoOpProgress),
        }
    }

    /// Set how many evenly spaced frames to sample.
    ///
    /// A count of zero selects nothing.
    pub fn with_frame_count(mut self, frame_count: u32) -> Self {
        self.frame_count = frame_count;
        self
    }

    /// Set the JPEG quality. Values above [`MAX_QUALITY`] are rejected when
    /// extraction starts.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Extract exactly these frame numbers, in this order.
    ///
    /// Overrides the frame count. Indices are not bounds-checked up front;
    /// positions the decoder cannot reach are skipped during extraction.
    pub fn with_indices(mut self, indices: Vec<u64>) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Attach a progress callback.
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = callback;
        self
    }

    /// Configured frame count.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Configured JPEG quality.
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Explicit indices, if any.
    pub fn indices(&self) -> Option<&[u64]> {
        self.indices.as_deref()
    }

    /// Resolve the frame numbers to visit for a video of `total_frames`.
    pub fn frame_indices(&self, total_frames: u64) -> Vec<u64> {
        match &self.indices {
            Some(indices) => indices.clone(),
            None => evenly_spaced_indices(total_frames, self.frame_count),
        }
    }

    /// Check the options before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`FramepickError::InvalidQuality`] if the quality is above
    /// [`MAX_QUALITY`].
    pub fn validate(&self) -> Result<(), FramepickError> {
        if self.quality > MAX_QUALITY {
            return Err(FramepickError::InvalidQuality(self.quality));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ExtractOptions::new();
        assert_eq!(options.frame_count(), 10);
        assert_eq!(options.quality(), 95);
        assert!(options.indices().is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn debug_hides_callback() {
        let debug = format!("{:?}", ExtractOptions::new());
        assert!(debug.contains("ExtractOptions"));
        assert!(debug.contains("quality: 95"));
        assert!(debug.contains(".."));
    }

    #[test]
    fn explicit_indices_ignore_frame_count() {
        let options = ExtractOptions::new()
            .with_frame_count(2)
            .with_indices(vec![0, 50, 100]);
        assert_eq!(options.frame_indices(100), vec![0, 50, 100]);
        assert_eq!(options.frame_indices(0), vec![0, 50, 100]);
    }

    #[test]
    fn empty_explicit_indices_select_nothing() {
        let options = ExtractOptions::new().with_indices(Vec::new());
        assert!(options.frame_indices(100).is_empty());
    }

    #[test]
    fn sampled_indices_follow_frame_count() {
        let options = ExtractOptions::new().with_frame_count(4);
        assert_eq!(options.frame_indices(8), vec![0, 2, 4, 6]);
        assert!(options.frame_indices(0).is_empty());
    }

    #[test]
    fn quality_bounds() {
        assert!(ExtractOptions::new().with_quality(0).validate().is_ok());
        assert!(ExtractOptions::new().with_quality(100).validate().is_ok());

        let error = ExtractOptions::new().with_quality(101).validate().unwrap_err();
        assert!(matches!(error, FramepickError::InvalidQuality(101)));
    }
}
