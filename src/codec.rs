use std::fs;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbImage};

use crate::error::FaceframeError;

/// Extensions accepted for input images.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check a file extension against [`SUPPORTED_EXTENSIONS`], case-insensitively.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Decode raw bytes into a [`DynamicImage`]. Content validation beyond what
/// the decoder itself enforces is intentionally absent.
pub fn decode_image(input: &[u8]) -> Result<DynamicImage, FaceframeError> {
    image::load_from_memory(input).map_err(|e| FaceframeError::Decode(e.to_string()))
}

/// Read and decode an image file, gated on the supported extensions.
pub fn load_image(path: &Path) -> Result<DynamicImage, FaceframeError> {
    if !is_supported(path) {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string();
        return Err(FaceframeError::UnsupportedExtension(ext));
    }
    let bytes = fs::read(path).map_err(|e| FaceframeError::Decode(e.to_string()))?;
    decode_image(&bytes)
}

/// Encode an RGB image as PNG bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, FaceframeError> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| FaceframeError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Output file name for an annotated image: `<input stem>_faces.png`.
pub fn annotated_file_name(input: &Path) -> String {
    match input.file_stem().and_then(|s| s.to_str()) {
        Some(stem) => format!("{stem}_faces.png"),
        None => "faces.png".to_string(),
    }
}
