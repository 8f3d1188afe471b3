use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use pointviz::options::{MAX_POINT_COUNT, MAX_RADIUS, MIN_POINT_COUNT, MIN_RADIUS};
use pointviz::{
    ColorPreset, Command, Config, Controller, Domain, Frame, ImageFormat, RenderSurface, Style,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

mod script;
mod writer;

use script::parse_script;
use writer::FrameWriter;

/// pointviz - Random Point Visualizer
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "pointviz")]
#[command(about = "Generate random 2D points and render them as a scatter image")]
struct Cli {
    /// Output image path (.png or .jpg)
    #[arg(short, long, value_name = "OUTPUT", default_value = "points.png")]
    output: PathBuf,

    /// Output encoding (defaults to the output file's extension, then PNG)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Number of points to generate
    #[arg(short = 'n', long, default_value = "30", allow_negative_numbers = true)]
    count: i64,

    /// Lower bound of the x range
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    x_min: f64,

    /// Upper bound of the x range
    #[arg(long, default_value = "100.0", allow_negative_numbers = true)]
    x_max: f64,

    /// Lower bound of the y range
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    y_min: f64,

    /// Upper bound of the y range
    #[arg(long, default_value = "100.0", allow_negative_numbers = true)]
    y_max: f64,

    /// Point radius in pixels
    #[arg(short, long, default_value = "3.0")]
    radius: f32,

    /// Point color
    #[arg(short, long, value_enum, default_value = "blue")]
    color: ColorArg,

    /// Canvas width in pixels
    #[arg(long, default_value = "600")]
    width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value = "400")]
    height: f32,

    /// Margin kept free of points on every side, in pixels
    #[arg(long, default_value = "20")]
    padding: f32,

    /// Seed for the random source (random if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Replay a command script instead of generating once
    /// Each drawn frame is written as <stem>-<n>.<ext>
    #[arg(long, value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Export the draw commands of every frame as JSON
    #[arg(long, value_name = "JSON_PATH")]
    export_json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ColorArg {
    /// Steel blue
    Blue,
    /// Tomato red
    Red,
    /// Sea green
    Green,
    /// Blue violet
    Purple,
}

impl From<ColorArg> for ColorPreset {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Blue => ColorPreset::Blue,
            ColorArg::Red => ColorPreset::Red,
            ColorArg::Green => ColorPreset::Green,
            ColorArg::Purple => ColorPreset::Purple,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Png,
    Jpeg,
}

impl From<FormatArg> for ImageFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Png => ImageFormat::Png,
            FormatArg::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Build the starting configuration from the command line
fn build_config(args: &Cli) -> Result<Config> {
    let count = pointviz::generator::checked_count(args.count)?;
    if !(MIN_POINT_COUNT..=MAX_POINT_COUNT).contains(&count) {
        warn!(
            "Point count {} is outside the usual {}..={} range",
            count, MIN_POINT_COUNT, MAX_POINT_COUNT
        );
    }
    if !(MIN_RADIUS..=MAX_RADIUS).contains(&args.radius) {
        warn!(
            "Radius {} is outside the usual {}..={} range",
            args.radius, MIN_RADIUS, MAX_RADIUS
        );
    }

    let config = Config::new()
        .count(count)
        .domain(Domain::new(args.x_min, args.x_max, args.y_min, args.y_max)?)
        .style(Style::new(args.radius, ColorPreset::from(args.color))?)
        .surface(RenderSurface::new(args.width, args.height, args.padding)?)
        .build()?;
    Ok(config)
}

fn resolve_format(args: &Cli) -> ImageFormat {
    args.format
        .map(ImageFormat::from)
        .or_else(|| ImageFormat::from_path(&args.output))
        .unwrap_or_default()
}

/// Run every script command, reporting rejected ones and carrying on
fn run_script(
    path: &Path,
    controller: &mut Controller<StdRng>,
    writer: &mut FrameWriter,
) -> Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let (commands, issues) = parse_script(&source);

    for issue in &issues {
        warn!(
            "{}:{}: skipping '{}': {:#}",
            path.display(),
            issue.line,
            issue.text,
            issue.error
        );
    }
    debug!("Parsed {} commands from {}", commands.len(), path.display());

    for (line, command) in commands {
        match controller.dispatch(command, writer) {
            Ok(_) => {}
            Err(e) if e.is_rejected_update() => {
                // Already logged by the controller; point at the script line
                warn!("{}:{}: command rejected", path.display(), line);
            }
            Err(e) => return Err(e).with_context(|| format!("{}:{}", path.display(), line)),
        }
    }
    Ok(())
}

fn export_frames(path: &Path, frames: &[Frame]) -> Result<()> {
    let json = serde_frames(frames)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write JSON export {}", path.display()))?;
    info!("Exported {} frame(s) to {}", frames.len(), path.display());
    Ok(())
}

fn serde_frames(frames: &[Frame]) -> Result<String> {
    serde_json::to_string_pretty(frames).context("Failed to serialize frames")
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing subscriber with environment filter
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let start_time = Instant::now();

    let config = build_config(&args)?;
    let format = resolve_format(&args);
    let rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    debug!("Starting configuration: {:?}", config);

    let mut controller = Controller::new(config, rng);
    let mut writer = FrameWriter::new(&args.output, format, args.script.is_some())
        .keep_frames(args.export_json.is_some());

    match &args.script {
        Some(script) => run_script(script, &mut controller, &mut writer)?,
        None => {
            controller.dispatch(Command::Generate, &mut writer)?;
        }
    }

    if let Some(json_path) = &args.export_json {
        export_frames(json_path, writer.frames())?;
    }

    info!(
        "Done: {} frame(s) written in {:?}",
        writer.written().len(),
        start_time.elapsed()
    );
    Ok(())
}
