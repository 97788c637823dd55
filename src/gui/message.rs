use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::image::Handle;

use super::state::RunKey;
use crate::models::{Color, FaceBox};

/// A finished detect-and-annotate pass, kept for display, re-annotation and
/// saving.
#[derive(Debug, Clone)]
pub struct DetectionPayload {
    pub key: RunKey,
    pub color: Color,
    pub faces: Vec<FaceBox>,
    pub annotated: Handle,
    pub png: Arc<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    PickImage,
    ImagePicked(Option<PathBuf>),
    ScaleFactorChanged(f32),
    MinNeighborsChanged(u32),
    HexInputChanged(String),
    SwatchPicked(Color),
    DetectionFinished {
        run: u64,
        payload: Result<DetectionPayload, String>,
    },
    SaveRequested,
    SaveLocationPicked(Option<PathBuf>),
}
