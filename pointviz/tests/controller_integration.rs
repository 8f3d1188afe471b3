//! End-to-end tests for the configure → generate → map → render cycle.
//!
//! These drive a `Controller` through the same command sequences an interactive
//! session produces and check what reaches the canvas.

use approx::assert_relative_eq;
use pointviz::controller::{Command, Controller, Frame};
use pointviz::error::VizError;
use pointviz::options::Config;
use pointviz::render::{BitmapCanvas, Canvas, ImageFormat};
use pointviz::types::{ColorPreset, Domain, RenderSurface, Rgb, Style};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Canvas that remembers every frame it was asked to draw
#[derive(Default)]
struct RecordingCanvas {
    frames: Vec<Frame>,
}

impl Canvas for RecordingCanvas {
    fn draw(&mut self, frame: &Frame) -> pointviz::VizResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn controller(seed: u64) -> Controller<StdRng> {
    Controller::new(Config::default(), StdRng::seed_from_u64(seed))
}

#[test]
fn test_session_draws_only_on_visible_changes() {
    let mut controller = controller(1);
    let mut canvas = RecordingCanvas::default();

    let drawn = [
        controller.dispatch(Command::SetCount(40), &mut canvas).unwrap(),
        controller.dispatch(Command::SetRadius(2.0), &mut canvas).unwrap(),
        controller.dispatch(Command::Generate, &mut canvas).unwrap(),
        controller.dispatch(ColorPreset::Red.into(), &mut canvas).unwrap(),
        controller.dispatch(Command::Redraw, &mut canvas).unwrap(),
    ];

    assert_eq!(drawn, [false, false, true, true, true]);
    assert_eq!(canvas.frames.len(), 3);
    assert!(canvas.frames.iter().all(|f| f.commands.len() == 40));

    // Color change redraws the same positions
    let positions = |frame: &Frame| -> Vec<(f32, f32)> {
        frame.commands.iter().map(|c| (c.x, c.y)).collect()
    };
    assert_eq!(positions(&canvas.frames[0]), positions(&canvas.frames[1]));
    assert_eq!(canvas.frames[1].commands[0].color, Rgb::new(255, 99, 71));
}

#[test]
fn test_rejected_command_draws_nothing_and_keeps_state() {
    let mut controller = controller(2);
    let mut canvas = RecordingCanvas::default();
    controller.dispatch(Command::Generate, &mut canvas).unwrap();
    let config_before = controller.config().clone();

    let result = controller.dispatch(
        Command::SetDomain {
            min_x: 10.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 1.0,
        },
        &mut canvas,
    );
    assert!(matches!(result, Err(VizError::InvalidDomain { .. })));
    assert_eq!(controller.config(), &config_before);
    assert_eq!(canvas.frames.len(), 1);

    // The session carries on with the last valid configuration
    controller.dispatch(Command::Generate, &mut canvas).unwrap();
    assert_eq!(canvas.frames.len(), 2);
}

#[test]
fn test_identically_seeded_sessions_render_identically() {
    let script = [
        Command::SetCount(25),
        Command::SetDomain {
            min_x: -1.0,
            max_x: 1.0,
            min_y: -1.0,
            max_y: 1.0,
        },
        Command::Generate,
        Command::Generate,
    ];

    let run = |seed| {
        let mut controller = controller(seed);
        let mut canvas = RecordingCanvas::default();
        for command in script.clone() {
            controller.dispatch(command, &mut canvas).unwrap();
        }
        canvas.frames
    };

    assert_eq!(run(77), run(77));
    assert_ne!(run(77), run(78));
}

#[test]
fn test_all_glyph_centers_fall_inside_padded_area() {
    let config = Config::new()
        .count(200)
        .domain(Domain::new(-30.0, 70.0, 1e3, 2e3).unwrap())
        .surface(RenderSurface::new(320.0, 240.0, 12.0).unwrap())
        .style(Style::new(4.0, ColorPreset::Purple).unwrap())
        .build()
        .unwrap();
    let mut controller = Controller::new(config, StdRng::seed_from_u64(3));

    let frame = controller.apply(Command::Generate).unwrap().unwrap();
    for command in &frame.commands {
        let (cx, cy) = command.center();
        assert!((12.0..=308.0).contains(&cx), "x centre {cx} outside");
        assert!((12.0..=228.0).contains(&cy), "y centre {cy} outside");
        assert_relative_eq!(command.radius, 4.0);
    }
}

#[test]
fn test_bitmap_canvas_writes_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scatter.png");

    let mut controller = controller(4);
    let mut canvas = BitmapCanvas::new(ImageFormat::Png);
    assert!(controller.dispatch(Command::Generate, &mut canvas).unwrap());
    canvas.save(&path).unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (600, 400));

    // Every point centre is painted in the point color
    let frame = controller.frame();
    let blue = ColorPreset::Blue.rgb();
    for command in &frame.commands {
        let (cx, cy) = command.center();
        let pixel = img.get_pixel(cx.round() as u32, cy.round() as u32).0;
        assert_eq!(pixel, [blue.r, blue.g, blue.b]);
    }
}

#[test]
fn test_frame_json_export_lists_every_command() {
    let mut controller = controller(5);
    controller.apply(Command::SetCount(3)).unwrap();
    let frame = controller.apply(Command::Generate).unwrap().unwrap();

    let json: serde_json::Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
    assert_eq!(json["commands"].as_array().unwrap().len(), 3);
    assert_eq!(json["surface"]["padding"], 20.0);
}
