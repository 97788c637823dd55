use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::image::Handle;
use iced::widget::{
    button, column, container, image as image_widget, row, scrollable, slider, text, text_input,
};
use iced::{Element, Length, Task};
use image::DynamicImage;
use log::debug;
use rfd::AsyncFileDialog;

use super::message::{DetectionPayload, Message};
use super::state::{AppState, OUTLINE_THICKNESS, RunKey, SourceImage};
use crate::detection::{
    DetectionPipeline, FaceDetector, MIN_NEIGHBORS_RANGE, SCALE_FACTOR_RANGE, seeta,
};
use crate::models::{Color, FaceBox};
use crate::{annotate, codec};

const ERROR_COLOR: iced::Color = iced::Color {
    r: 1.0,
    g: 0.42,
    b: 0.42,
    a: 1.0,
};

const SWATCHES: [Color; 5] = [
    Color::GREEN,
    Color { r: 255, g: 0, b: 0 },
    Color { r: 0, g: 0, b: 255 },
    Color { r: 255, g: 255, b: 0 },
    Color { r: 255, g: 255, b: 255 },
];

/// Launch the GUI. `model_override` takes precedence over the default model
/// search order.
pub fn run(model_override: Option<PathBuf>) -> iced::Result {
    iced::application(AppState::title, update, view)
        .theme(AppState::theme)
        .window_size((1100.0, 760.0))
        .run_with(move || (AppState::new(model_override), Task::none()))
}

fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::PickImage => Task::perform(pick_image(), Message::ImagePicked),
        Message::ImagePicked(None) => Task::none(),
        Message::ImagePicked(Some(path)) => {
            state.status = None;
            match codec::load_image(&path) {
                Ok(img) => {
                    state.error = None;
                    let generation = state.next_generation();
                    state.source = Some(SourceImage::new(path, img, generation));
                    state.result = None;
                    maybe_detect(state)
                }
                Err(e) => {
                    state.error = Some(e.to_string());
                    Task::none()
                }
            }
        }
        Message::ScaleFactorChanged(value) => {
            state.params.scale_factor = value;
            maybe_detect(state)
        }
        Message::MinNeighborsChanged(value) => {
            state.params.min_neighbors = value;
            maybe_detect(state)
        }
        Message::HexInputChanged(input) => {
            state.hex_input = input;
            match Color::from_hex(&state.hex_input) {
                Ok(color) => {
                    state.color_error = None;
                    state.color = color;
                    maybe_detect(state)
                }
                Err(e) => {
                    // Keep the last valid color; the typed error shows inline.
                    state.color_error = Some(e.to_string());
                    Task::none()
                }
            }
        }
        Message::SwatchPicked(color) => {
            state.color = color;
            state.hex_input = color.to_hex();
            state.color_error = None;
            maybe_detect(state)
        }
        Message::DetectionFinished { run, payload } => {
            if run != state.current_run() {
                // A newer interaction superseded this run.
                return Task::none();
            }
            state.processing = false;
            match payload {
                Ok(payload) => {
                    state.error = None;
                    state.result = Some(payload);
                }
                Err(e) => state.error = Some(e),
            }
            Task::none()
        }
        Message::SaveRequested => {
            if state.result.is_none() {
                return Task::none();
            }
            let name = state
                .source
                .as_ref()
                .map(|s| codec::annotated_file_name(&s.path))
                .unwrap_or_else(|| "faces.png".to_string());
            Task::perform(pick_save_location(name), Message::SaveLocationPicked)
        }
        Message::SaveLocationPicked(None) => Task::none(),
        Message::SaveLocationPicked(Some(path)) => {
            let Some(result) = &state.result else {
                return Task::none();
            };
            match std::fs::write(&path, result.png.as_slice()) {
                Ok(()) => state.status = Some(format!("Saved {}", path.display())),
                Err(e) => {
                    state.error = Some(format!("failed to save {}: {e}", path.display()));
                }
            }
            Task::none()
        }
    }
}

/// Kick off a detection run unless the cached result already covers the
/// current inputs. A parameter-identical run with a new color re-annotates
/// the cached boxes without re-running the detector.
fn maybe_detect(state: &mut AppState) -> Task<Message> {
    let Some(detector) = state.detector.clone() else {
        return Task::none();
    };
    let Some(source) = &state.source else {
        return Task::none();
    };

    let key = RunKey {
        generation: source.generation,
        params: state.params,
    };
    let color = state.color;

    if let Some(result) = &state.result {
        if result.key == key && result.color == color {
            return Task::none();
        }
        if result.key == key {
            let faces = result.faces.clone();
            let image = source.image.clone();
            let run = state.start_run();
            debug!("re-annotating cached run with color {color}");
            return Task::perform(annotate_task(image, key, faces, color), move |payload| {
                Message::DetectionFinished { run, payload }
            });
        }
    }

    let image = source.image.clone();
    let run = state.start_run();
    debug!("starting detection run {run}");
    Task::perform(detect_task(detector, image, key, color), move |payload| {
        Message::DetectionFinished { run, payload }
    })
}

async fn detect_task(
    detector: Arc<dyn FaceDetector>,
    image: Arc<DynamicImage>,
    key: RunKey,
    color: Color,
) -> Result<DetectionPayload, String> {
    let mut pipeline = DetectionPipeline::new(detector);
    pipeline.params = key.params;
    let faces = pipeline.detect(&image);
    build_payload(&image, key, faces, color)
}

async fn annotate_task(
    image: Arc<DynamicImage>,
    key: RunKey,
    faces: Vec<FaceBox>,
    color: Color,
) -> Result<DetectionPayload, String> {
    build_payload(&image, key, faces, color)
}

fn build_payload(
    image: &DynamicImage,
    key: RunKey,
    faces: Vec<FaceBox>,
    color: Color,
) -> Result<DetectionPayload, String> {
    let mut annotated = image.to_rgb8();
    annotate::draw_face_boxes(&mut annotated, &faces, color, OUTLINE_THICKNESS);
    let png = codec::encode_png(&annotated).map_err(|e| e.to_string())?;
    let handle = rgb_handle(&annotated);
    Ok(DetectionPayload {
        key,
        color,
        faces,
        annotated: handle,
        png: Arc::new(png),
    })
}

fn rgb_handle(img: &image::RgbImage) -> Handle {
    let rgba = DynamicImage::ImageRgb8(img.clone()).to_rgba8();
    Handle::from_rgba(rgba.width(), rgba.height(), rgba.into_raw())
}

async fn pick_image() -> Option<PathBuf> {
    AsyncFileDialog::new()
        .add_filter("Images", &codec::SUPPORTED_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

async fn pick_save_location(file_name: String) -> Option<PathBuf> {
    AsyncFileDialog::new()
        .set_file_name(file_name)
        .add_filter("PNG image", &["png"])
        .save_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

fn view(state: &AppState) -> Element<'_, Message> {
    row![
        container(sidebar(state)).width(300).padding(16),
        container(scrollable(content(state)))
            .width(Length::Fill)
            .padding(16),
    ]
    .into()
}

fn sidebar(state: &AppState) -> Element<'_, Message> {
    let mut controls = column![text("Parameters & Controls").size(22)].spacing(12);

    let mut pick = button("Upload image...");
    if state.detector.is_some() {
        pick = pick.on_press(Message::PickImage);
    }
    controls = controls.push(pick);

    if let Some(source) = &state.source {
        controls = controls.push(text(source.file_name()).size(14));
    }

    controls = controls.push(text(format!(
        "Scale factor: {:.2}",
        state.params.scale_factor
    )));
    controls = controls.push(
        slider(
            SCALE_FACTOR_RANGE,
            state.params.scale_factor,
            Message::ScaleFactorChanged,
        )
        .step(0.01),
    );

    controls = controls.push(text(format!(
        "Min neighbors: {}",
        state.params.min_neighbors
    )));
    controls = controls.push(slider(
        MIN_NEIGHBORS_RANGE,
        state.params.min_neighbors,
        Message::MinNeighborsChanged,
    ));

    controls = controls.push(text("Outline color (#RRGGBB)"));
    controls = controls.push(text_input("#00FF00", &state.hex_input).on_input(Message::HexInputChanged));
    if let Some(err) = &state.color_error {
        controls = controls.push(text(err.clone()).size(13).color(ERROR_COLOR));
    }
    controls = controls.push(row(SWATCHES.iter().map(|&c| swatch(c))).spacing(8));

    let mut save = button("Save annotated PNG");
    if state.result.is_some() {
        save = save.on_press(Message::SaveRequested);
    }
    controls = controls.push(save);

    if let Some(status) = &state.status {
        controls = controls.push(text(status.clone()).size(13));
    }
    if let Some(err) = &state.error {
        controls = controls.push(text(err.clone()).size(13).color(ERROR_COLOR));
    }

    controls.into()
}

fn swatch(color: Color) -> Element<'static, Message> {
    let fill = iced::Color::from_rgb8(color.r, color.g, color.b);
    button(text(""))
        .width(24)
        .height(24)
        .style(move |_theme, _status| button::Style {
            background: Some(iced::Background::Color(fill)),
            ..button::Style::default()
        })
        .on_press(Message::SwatchPicked(color))
        .into()
}

fn content(state: &AppState) -> Element<'_, Message> {
    if let Some(err) = &state.model_error {
        return column![
            text("Face model unavailable").size(26).color(ERROR_COLOR),
            text(err.clone()),
            text(format!(
                "Place {} under ./models, set {}, or pass --model.",
                seeta::MODEL_FILE_NAME,
                seeta::MODEL_ENV_VAR,
            )),
        ]
        .spacing(10)
        .into();
    }

    let Some(source) = &state.source else {
        return instructions();
    };

    let mut col = column![
        text("Original").size(20),
        image_widget(source.handle.clone()).width(Length::Fill),
    ]
    .spacing(10);

    if state.processing {
        col = col.push(text("Processing..."));
    }

    if let Some(result) = &state.result {
        let banner = if result.faces.is_empty() {
            text("No faces detected. Try adjusting the detection parameters.".to_string())
        } else {
            text(format!("{} face(s) detected!", result.faces.len()))
        };
        col = col
            .push(text("Detection result").size(20))
            .push(banner)
            .push(image_widget(result.annotated.clone()).width(Length::Fill));
    }

    col.into()
}

fn instructions() -> Element<'static, Message> {
    column![
        text("Frontal face detection").size(26),
        text("1. Upload an image (jpg, jpeg or png) containing faces."),
        text("2. Adjust the scale factor and min neighbors to tune detection."),
        text("3. Pick the rectangle outline color."),
        text("4. Save the annotated result as a PNG."),
        text("Upload an image to get started."),
    ]
    .spacing(8)
    .into()
}
