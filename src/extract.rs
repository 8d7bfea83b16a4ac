//! The frame extraction routine.
//!
//! [`extract_frames`] opens a video, picks frame positions, and writes each
//! decodable one to `frame_NNN.jpg` in the output directory. Extraction is
//! best-effort: positions that cannot be decoded are skipped, and the
//! remaining files are numbered without gaps.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use crate::{
    error::FramepickError,
    export::{frame_file_name, save_jpeg},
    media::MediaFile,
    options::ExtractOptions,
    progress::{ProgressCallback, ProgressInfo},
    source::FrameSource,
};

/// Extract frames from the video at `video_path` into `output_dir`.
///
/// Returns the written paths in processing order. The list is shorter than
/// the selected positions when some could not be decoded, and empty when
/// the frame count is unknown and no explicit indices were given.
///
/// # Errors
///
/// - [`FramepickError::InvalidQuality`] if the options are invalid.
/// - [`FramepickError::SourceOpen`] if the video cannot be opened. Nothing
///   is created on disk in that case.
/// - [`FramepickError::IoError`] / [`FramepickError::ImageError`] if the
///   output directory or a frame file cannot be written.
///
/// # Example
///
/// ```no_run
/// use framepick::{ExtractOptions, FramepickError};
///
/// let options = ExtractOptions::new().with_frame_count(5).with_quality(90);
/// for path in framepick::extract_frames("input.mp4", "frames", &options)? {
///     println!("{}", path.display());
/// }
/// # Ok::<(), FramepickError>(())
/// ```
pub fn extract_frames<P, Q>(
    video_path: P,
    output_dir: Q,
    options: &ExtractOptions,
) -> Result<Vec<PathBuf>, FramepickError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    options.validate()?;
    let source = MediaFile::open(video_path)?;
    extract_into(source, output_dir.as_ref(), options)
}

/// Extract frames from an already opened [`FrameSource`].
///
/// The source is consumed and dropped before this returns, whether or not
/// extraction succeeded. Pass `&mut source` to keep it.
///
/// # Errors
///
/// Same as [`extract_frames`], minus the open failure.
pub fn extract_from_source<S, Q>(
    source: S,
    output_dir: Q,
    options: &ExtractOptions,
) -> Result<Vec<PathBuf>, FramepickError>
where
    S: FrameSource,
    Q: AsRef<Path>,
{
    options.validate()?;
    extract_into(source, output_dir.as_ref(), options)
}

/// Extraction loop shared by both entry points; `options` are already valid.
fn extract_into<S: FrameSource>(
    mut source: S,
    output_dir: &Path,
    options: &ExtractOptions,
) -> Result<Vec<PathBuf>, FramepickError> {
    let total_frames = source.frame_count();
    let frame_numbers = options.frame_indices(total_frames);
    log::debug!(
        "Selected {} frame position(s) from {} total frame(s): {:?}",
        frame_numbers.len(),
        total_frames,
        frame_numbers,
    );

    fs::create_dir_all(output_dir)?;

    let started = Instant::now();
    let total = frame_numbers.len() as u64;
    let mut written = Vec::with_capacity(frame_numbers.len());

    for (handled, &frame_number) in frame_numbers.iter().enumerate() {
        match source.read_frame(frame_number) {
            Ok(image) => {
                let path = output_dir.join(frame_file_name(written.len() + 1));
                save_jpeg(&image, &path, options.quality)?;
                log::debug!("Saved frame {frame_number} -> {}", path.display());
                written.push(path);
            }
            Err(error) if error.is_frame_local() => {
                log::warn!("Skipping frame {frame_number}: {error}");
            }
            Err(error) => return Err(error),
        }

        options.progress.on_progress(&ProgressInfo {
            current: handled as u64 + 1,
            total,
            written: written.len() as u64,
            frame_number,
            elapsed: started.elapsed(),
        });
    }

    log::info!(
        "Extracted {} of {} frame(s) into {}",
        written.len(),
        total,
        output_dir.display(),
    );

    Ok(written)
}
