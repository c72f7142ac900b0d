use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, ImageFormat, load_from_memory, load_from_memory_with_format};

/// Decode image file contents.
///
/// The file extension is used as a format hint. When the hint is missing or
/// does not match the contents the format is guessed from the magic bytes.
pub fn decode_image(bytes: &[u8], file_name: &str) -> anyhow::Result<DynamicImage> {
    let hint = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageFormat::from_extension);

    let decoded = match hint {
        Some(format) => load_from_memory_with_format(bytes, format).or_else(|e| {
            log::debug!("{file_name} is not a valid {format:?} ({e}), guessing its format");
            load_from_memory(bytes)
        }),
        None => load_from_memory(bytes),
    };
    decoded.with_context(|| format!("Could not decode texture {file_name}"))
}
