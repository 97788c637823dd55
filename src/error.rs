use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceframeError {
    #[error("failed to read face model {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("no face model found; searched {0:?} (set FACEFRAME_MODEL or pass --model)")]
    ModelNotFound(Vec<PathBuf>),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("unsupported image extension {0:?}: expected jpg, jpeg or png")]
    UnsupportedExtension(String),

    #[error("invalid hex color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    #[error("scale factor must be within {min}..={max}, got {value}")]
    ScaleFactorOutOfRange { value: f32, min: f32, max: f32 },

    #[error("min neighbors must be within {min}..={max}, got {value}")]
    MinNeighborsOutOfRange { value: u32, min: u32, max: u32 },
}
