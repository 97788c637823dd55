pub mod detector;
pub mod preprocessing;
pub mod seeta;

use std::sync::Arc;

use image::{DynamicImage, RgbImage};
use log::debug;

pub use detector::{DetectionParams, FaceDetector, MIN_NEIGHBORS_RANGE, SCALE_FACTOR_RANGE};
pub use seeta::SeetaDetector;

use crate::annotate;
use crate::error::FaceframeError;
use crate::models::{Color, DetectionOutcome, FaceBox};

/// Main detection pipeline orchestrator: grayscale conversion, the detection
/// backend, and rectangle annotation.
pub struct DetectionPipeline {
    detector: Arc<dyn FaceDetector>,
    /// Tuning parameters for the detection pass.
    pub params: DetectionParams,
}

impl DetectionPipeline {
    /// Build a pipeline around a detection backend with default parameters.
    pub fn new(detector: Arc<dyn FaceDetector>) -> Self {
        Self {
            detector,
            params: DetectionParams::default(),
        }
    }

    /// Replace the tuning parameters, rejecting out-of-range values.
    pub fn with_params(mut self, params: DetectionParams) -> Result<Self, FaceframeError> {
        self.params = params.validated()?;
        Ok(self)
    }

    /// Run detection on an image: grayscale conversion, then the backend.
    pub fn detect(&self, img: &DynamicImage) -> Vec<FaceBox> {
        debug!("converting {}x{} image to grayscale", img.width(), img.height());
        let gray = preprocessing::to_grayscale(img);

        debug!(
            "running face detection (scale factor {}, min neighbors {})",
            self.params.scale_factor, self.params.min_neighbors
        );
        let faces = self.detector.detect(&gray, &self.params);
        debug!("detected {} face(s)", faces.len());
        faces
    }

    /// Draw the face outlines onto an RGB copy of the image.
    pub fn annotate(
        &self,
        img: &DynamicImage,
        faces: &[FaceBox],
        color: Color,
        thickness: u32,
    ) -> RgbImage {
        let mut annotated = img.to_rgb8();
        annotate::draw_face_boxes(&mut annotated, faces, color, thickness);
        annotated
    }

    /// Full pass: detect faces, then produce the annotated image.
    pub fn run(&self, img: &DynamicImage, color: Color, thickness: u32) -> DetectionOutcome {
        let faces = self.detect(img);
        let annotated = self.annotate(img, &faces, color, thickness);
        DetectionOutcome { faces, annotated }
    }
}
