use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use faceframe::codec;
use faceframe::{Color, DetectionParams, DetectionPipeline, SeetaDetector};

#[derive(Parser)]
#[command(name = "faceframe")]
#[command(about = "Detect frontal faces in images and outline them")]
struct Cli {
    /// Path to input image file (jpg, jpeg or png); launches the GUI when omitted
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Path to the SeetaFace frontal model (overrides FACEFRAME_MODEL and the default locations)
    #[arg(long, value_name = "FILE")]
    model: Option<PathBuf>,

    /// Per-step image reduction for multiscale scanning (1.01..=2.0)
    #[arg(long, default_value_t = 1.1)]
    scale_factor: f32,

    /// Overlapping detections required to keep a candidate (1..=15)
    #[arg(long, default_value_t = 5)]
    min_neighbors: u32,

    /// Outline color as a #RRGGBB hex string
    #[arg(long, default_value = "#00FF00")]
    color: String,

    /// Outline thickness in pixels
    #[arg(long, default_value_t = 2)]
    thickness: u32,

    /// Output path for the annotated PNG (defaults to <stem>_faces.png next to the input)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let Some(image_path) = args.image_path else {
        return run_gui(args.model);
    };

    let detector = match &args.model {
        Some(path) => SeetaDetector::from_file(path)?,
        None => SeetaDetector::discover()?,
    };

    if args.verbose {
        println!("Loading image: {:?}", image_path);
    }
    let img = codec::load_image(&image_path)?;
    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    let params = DetectionParams {
        scale_factor: args.scale_factor,
        min_neighbors: args.min_neighbors,
        ..DetectionParams::default()
    };
    let color = Color::from_hex(&args.color)?;

    let pipeline = DetectionPipeline::new(Arc::new(detector)).with_params(params)?;
    let outcome = pipeline.run(&img, color, args.thickness);

    println!("\n=== Face Detection Results ===");
    println!("Total faces detected: {}", outcome.faces.len());

    if outcome.faces.is_empty() {
        println!("No faces detected. Try adjusting --scale-factor or --min-neighbors.");
    } else {
        println!("\nDetected faces:");
        for (i, face) in outcome.faces.iter().enumerate() {
            println!(
                "  Face {} at ({}, {}) - {}x{} (score: {:.2})",
                i + 1,
                face.x,
                face.y,
                face.width,
                face.height,
                face.score
            );
        }
    }

    let output = args
        .output
        .unwrap_or_else(|| image_path.with_file_name(codec::annotated_file_name(&image_path)));
    let png = codec::encode_png(&outcome.annotated)?;
    std::fs::write(&output, png)?;
    println!("\nAnnotated image written to {:?}", output);

    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(model: Option<PathBuf>) -> anyhow::Result<()> {
    faceframe::gui::run(model).map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}

#[cfg(not(feature = "gui"))]
fn run_gui(_model: Option<PathBuf>) -> anyhow::Result<()> {
    anyhow::bail!("no image path given and this build has no GUI (enable the `gui` feature)")
}
