#![allow(dead_code)]

use image::{DynamicImage, GrayImage, ImageBuffer, Rgb};

use faceframe::SeetaDetector;
use faceframe::detection::{DetectionParams, FaceDetector};
use faceframe::models::FaceBox;

/// Creates a width x height image filled with a single RGB color.
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |_, _| Rgb(rgb));
    DynamicImage::ImageRgb8(img)
}

/// Creates a deterministic gradient image with no facial features.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        ])
    });
    DynamicImage::ImageRgb8(img)
}

/// Detector stub returning a fixed set of boxes regardless of input.
pub struct FixedDetector(pub Vec<FaceBox>);

impl FaceDetector for FixedDetector {
    fn detect(&self, _gray: &GrayImage, _params: &DetectionParams) -> Vec<FaceBox> {
        self.0.clone()
    }
}

/// Shorthand for building a box when the score does not matter.
pub fn face_box(x: i32, y: i32, width: u32, height: u32) -> FaceBox {
    FaceBox {
        x,
        y,
        width,
        height,
        score: 10.0,
    }
}

/// Load the SeetaFace backend for detector-backed tests, honoring the same
/// search order as the application. `None` means the model asset is absent
/// and the test should skip with a note.
pub fn seeta_detector() -> Option<SeetaDetector> {
    SeetaDetector::discover().ok()
}
