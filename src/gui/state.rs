use std::path::PathBuf;
use std::sync::Arc;

use iced::Theme;
use iced::widget::image::Handle;
use image::DynamicImage;

use super::message::DetectionPayload;
use crate::detection::{DetectionParams, FaceDetector, SeetaDetector};
use crate::error::FaceframeError;
use crate::models::Color;

/// Outline thickness used by the GUI (the CLI exposes it as a flag).
pub const OUTLINE_THICKNESS: u32 = 2;

/// A loaded source image plus its display handle.
pub struct SourceImage {
    pub path: PathBuf,
    pub image: Arc<DynamicImage>,
    pub handle: Handle,
    /// Bumped for every newly picked file; part of the detection cache key.
    pub generation: u64,
}

impl SourceImage {
    pub fn new(path: PathBuf, image: DynamicImage, generation: u64) -> Self {
        let rgba = image.to_rgba8();
        let handle = Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw());
        Self {
            path,
            image: Arc::new(image),
            handle,
            generation,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("(image)")
            .to_string()
    }
}

/// Cache key for skipping recomputation when detection inputs are unchanged.
/// A hit with a different color only re-annotates the cached boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunKey {
    pub generation: u64,
    pub params: DetectionParams,
}

pub struct AppState {
    /// The loaded detection backend; `None` means the model could not be
    /// resolved and the app is unusable beyond the error banner.
    pub detector: Option<Arc<dyn FaceDetector>>,
    pub model_error: Option<String>,
    pub source: Option<SourceImage>,
    pub params: DetectionParams,
    pub hex_input: String,
    pub color: Color,
    pub color_error: Option<String>,
    pub result: Option<DetectionPayload>,
    pub processing: bool,
    pub error: Option<String>,
    pub status: Option<String>,
    run_counter: u64,
    generation_counter: u64,
}

impl AppState {
    pub fn new(model_override: Option<PathBuf>) -> Self {
        let (detector, model_error) = match load_detector(model_override) {
            Ok(detector) => (
                Some(Arc::new(detector) as Arc<dyn FaceDetector>),
                None,
            ),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            detector,
            model_error,
            source: None,
            params: DetectionParams::default(),
            hex_input: Color::GREEN.to_hex(),
            color: Color::GREEN,
            color_error: None,
            result: None,
            processing: false,
            error: None,
            status: None,
            run_counter: 0,
            generation_counter: 0,
        }
    }

    pub fn title(&self) -> String {
        "Faceframe - Frontal Face Detection".to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Current in-flight run id; completions for older runs are dropped.
    pub fn current_run(&self) -> u64 {
        self.run_counter
    }

    pub fn start_run(&mut self) -> u64 {
        self.run_counter += 1;
        self.processing = true;
        self.run_counter
    }

    pub fn next_generation(&mut self) -> u64 {
        self.generation_counter += 1;
        self.generation_counter
    }
}

fn load_detector(model_override: Option<PathBuf>) -> Result<SeetaDetector, FaceframeError> {
    match model_override {
        Some(path) => SeetaDetector::from_file(&path),
        None => SeetaDetector::discover(),
    }
}
