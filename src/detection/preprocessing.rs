use image::{DynamicImage, GrayImage};

/// Convert image to grayscale for the detector.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}
