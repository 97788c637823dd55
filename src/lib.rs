pub mod annotate;
pub mod codec;
pub mod detection;
pub mod error;
pub mod models;

pub use detection::{DetectionParams, DetectionPipeline, FaceDetector, SeetaDetector};
pub use error::FaceframeError;
pub use models::{Color, DetectionOutcome, FaceBox};

#[cfg(feature = "gui")]
pub mod gui;
