//! JPEG output.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{DynamicImage, codecs::jpeg::JpegEncoder};

use crate::error::FramepickError;

/// File name of the `position`-th written frame (1-based).
///
/// Zero-padded to three digits; larger positions keep all their digits.
///
/// ```
/// assert_eq!(framepick::frame_file_name(7), "frame_007.jpg");
/// assert_eq!(framepick::frame_file_name(1234), "frame_1234.jpg");
/// ```
pub fn frame_file_name(position: usize) -> String {
    format!("frame_{position:03}.jpg")
}

/// Encode `image` as a JPEG at `path`, replacing any existing file.
///
/// `quality` is handed to the encoder unchanged; it treats 0 as its lowest
/// setting.
///
/// # Errors
///
/// Returns [`FramepickError::IoError`] if the file cannot be created or
/// flushed and [`FramepickError::ImageError`] if encoding fails.
pub fn save_jpeg(image: &DynamicImage, path: &Path, quality: u8) -> Result<(), FramepickError> {
    let mut writer = BufWriter::new(File::create(path)?);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    // JPEG has no alpha channel and no 16-bit samples.
    image.to_rgb8().write_with_encoder(encoder)?;
    writer.flush()?;
    Ok(())
}
