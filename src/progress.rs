//! Progress reporting for frame extraction.
//!
//! Attach a [`ProgressCallback`] to [`ExtractOptions`](crate::ExtractOptions)
//! to be told after each frame position has been handled, whether or not
//! the frame could be decoded.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use framepick::{ExtractOptions, FramepickError, ProgressCallback, ProgressInfo};
//!
//! struct PrintProgress;
//!
//! impl ProgressCallback for PrintProgress {
//!     fn on_progress(&self, info: &ProgressInfo) {
//!         println!("{}/{} positions, {} written", info.current, info.total, info.written);
//!     }
//! }
//!
//! let options = ExtractOptions::new().with_progress(Arc::new(PrintProgress));
//! let paths = framepick::extract_frames("input.mp4", "frames", &options)?;
//! # Ok::<(), FramepickError>(())
//! ```

use std::time::Duration;

/// A snapshot of extraction progress.
#[derive(Debug, Clone)]
pub struct ProgressInfo {
    /// Positions handled so far, including skipped ones.
    pub current: u64,
    /// Number of positions selected for this run.
    pub total: u64,
    /// Frames successfully written so far.
    pub written: u64,
    /// Frame number of the position just handled.
    pub frame_number: u64,
    /// Wall-clock time elapsed since the run started.
    pub elapsed: Duration,
}

impl ProgressInfo {
    /// Completion percentage (0.0 – 100.0). A run with no positions is
    /// reported as complete.
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            100.0
        } else {
            (self.current as f64 / self.total as f64 * 100.0) as f32
        }
    }
}

/// Trait for receiving progress updates during extraction.
///
/// Callbacks observe the run but cannot halt it.
pub trait ProgressCallback: Send + Sync {
    /// Called once per handled frame position.
    fn on_progress(&self, info: &ProgressInfo);
}

/// Discards all notifications. Used when no callback is configured.
pub(crate) struct NoOpProgress;

impl ProgressCallback for NoOpProgress {
    fn on_progress(&self, _info: &ProgressInfo) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(current: u64, total: u64) -> ProgressInfo {
        ProgressInfo {
            current,
            total,
            written: current,
            frame_number: 0,
            elapsed: Duration::ZERO,
        }
    }

    #[test]
    fn percentage_halfway() {
        assert!((info(5, 10).percentage() - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn percentage_of_empty_run() {
        assert!((info(0, 0).percentage() - 100.0).abs() < f32::EPSILON);
    }
}
