use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::GrayImage;
use log::debug;

use super::detector::{DetectionParams, FaceDetector};
use crate::error::FaceframeError;
use crate::models::FaceBox;

/// File name of the pretrained SeetaFace frontal-face model.
pub const MODEL_FILE_NAME: &str = "seeta_fd_frontal_v1.0.bin";

/// Environment variable pointing at the model file.
pub const MODEL_ENV_VAR: &str = "FACEFRAME_MODEL";

/// Face detector backed by the `rustface` crate (SeetaFace engine).
///
/// The model is parsed once on construction. Each `detect` call builds a
/// fresh rustface detector around a clone of the model, so detection works
/// through `&self` and the detector can be shared across runs.
pub struct SeetaDetector {
    model: rustface::Model,
}

impl SeetaDetector {
    /// Load the model from an explicit file path.
    pub fn from_file(path: &Path) -> Result<Self, FaceframeError> {
        let file = File::open(path).map_err(|e| FaceframeError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let model =
            rustface::read_model(BufReader::new(file)).map_err(|e| FaceframeError::ModelLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self { model })
    }

    /// Resolve the model location and load it. Search order: the
    /// `FACEFRAME_MODEL` environment variable, then
    /// `models/seeta_fd_frontal_v1.0.bin` under the working directory, then
    /// the same file next to the executable.
    pub fn discover() -> Result<Self, FaceframeError> {
        let candidates = Self::candidate_paths();
        for path in &candidates {
            if path.is_file() {
                debug!("loading face model from {}", path.display());
                return Self::from_file(path);
            }
        }
        Err(FaceframeError::ModelNotFound(candidates))
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(path) = env::var(MODEL_ENV_VAR) {
            candidates.push(PathBuf::from(path));
        }
        candidates.push(PathBuf::from("models").join(MODEL_FILE_NAME));
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join(MODEL_FILE_NAME));
            }
        }
        candidates
    }
}

/// rustface wants the per-step pyramid shrink factor in (0.0, 1.0); the
/// widget-facing scale factor is its reciprocal. The 1.01..=2.0 widget range
/// maps onto rustface's usable 0.99..=0.5 window.
fn pyramid_scale(scale_factor: f32) -> f32 {
    (1.0 / scale_factor).clamp(0.5, 0.99)
}

impl FaceDetector for SeetaDetector {
    fn detect(&self, gray: &GrayImage, params: &DetectionParams) -> Vec<FaceBox> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        // rustface rejects face sizes below 20px and non-positive thresholds.
        detector.set_min_face_size(params.min_face_size.max(20));
        detector.set_score_thresh(f64::from(params.min_neighbors.max(1)));
        detector.set_pyramid_scale_factor(pyramid_scale(params.scale_factor));
        detector.set_slide_window_step(4, 4);

        let image = rustface::ImageData::new(gray.as_raw(), gray.width(), gray.height());
        let faces = detector.detect(&image);
        debug!("rustface returned {} candidate box(es)", faces.len());

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceBox {
                    x: bbox.x(),
                    y: bbox.y(),
                    width: bbox.width(),
                    height: bbox.height(),
                    score: face.score(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pyramid_scale_covers_the_widget_range() {
        // 1/1.01 is just above the rustface ceiling and clamps onto it.
        assert!((pyramid_scale(1.01) - 0.99).abs() < 1e-6);
        assert!((pyramid_scale(2.0) - 0.5).abs() < f32::EPSILON);

        let default = pyramid_scale(1.1);
        assert!(default > 0.90 && default < 0.92);
    }

    #[test]
    fn pyramid_scale_is_monotonically_decreasing() {
        let mut last = pyramid_scale(1.01);
        for step in 1..=10 {
            let scale = pyramid_scale(1.01 + step as f32 * 0.099);
            assert!(scale <= last);
            last = scale;
        }
    }
}
