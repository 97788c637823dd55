use std::ops::RangeInclusive;

use image::GrayImage;

use crate::error::FaceframeError;
use crate::models::FaceBox;

/// Legal range for the multiscale scale factor.
pub const SCALE_FACTOR_RANGE: RangeInclusive<f32> = 1.01..=2.0;

/// Legal range for the min-neighbors suppression knob.
pub const MIN_NEIGHBORS_RANGE: RangeInclusive<u32> = 1..=15;

/// Tuning parameters for one detection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionParams {
    /// Per-step image reduction applied during multiscale scanning. Smaller
    /// values increase precision and cost.
    pub scale_factor: f32,
    /// Minimum number of overlapping raw detections required before a
    /// candidate region is kept.
    pub min_neighbors: u32,
    /// Smallest face considered, in pixels.
    pub min_face_size: u32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 5,
            min_face_size: 30,
        }
    }
}

impl DetectionParams {
    /// Validate against the widget ranges.
    pub fn validated(self) -> Result<Self, FaceframeError> {
        if !SCALE_FACTOR_RANGE.contains(&self.scale_factor) {
            return Err(FaceframeError::ScaleFactorOutOfRange {
                value: self.scale_factor,
                min: *SCALE_FACTOR_RANGE.start(),
                max: *SCALE_FACTOR_RANGE.end(),
            });
        }
        if !MIN_NEIGHBORS_RANGE.contains(&self.min_neighbors) {
            return Err(FaceframeError::MinNeighborsOutOfRange {
                value: self.min_neighbors,
                min: *MIN_NEIGHBORS_RANGE.start(),
                max: *MIN_NEIGHBORS_RANGE.end(),
            });
        }
        Ok(self)
    }
}

/// Pluggable face detection backend.
pub trait FaceDetector: Send + Sync {
    /// Detect faces in a grayscale image. Box order and overlap behavior
    /// follow the backend; nothing is merged on top of it.
    fn detect(&self, gray: &GrayImage, params: &DetectionParams) -> Vec<FaceBox>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(DetectionParams::default().validated().is_ok());
    }

    #[test]
    fn range_endpoints_are_accepted() {
        let params = DetectionParams {
            scale_factor: 1.01,
            min_neighbors: 1,
            ..Default::default()
        };
        assert!(params.validated().is_ok());

        let params = DetectionParams {
            scale_factor: 2.0,
            min_neighbors: 15,
            ..Default::default()
        };
        assert!(params.validated().is_ok());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let params = DetectionParams {
            scale_factor: 1.0,
            ..Default::default()
        };
        assert!(params.validated().is_err());

        let params = DetectionParams {
            scale_factor: 2.5,
            ..Default::default()
        };
        assert!(params.validated().is_err());

        let params = DetectionParams {
            min_neighbors: 0,
            ..Default::default()
        };
        assert!(params.validated().is_err());

        let params = DetectionParams {
            min_neighbors: 16,
            ..Default::default()
        };
        assert!(params.validated().is_err());
    }
}
