use serde::Serialize;
use tracing::error;

use crate::error::Result;
use crate::mapper::CoordinateMapper;
use crate::types::{Domain, Point, RenderSurface, Rgb, Style};

/// Canvas background color
pub const BACKGROUND: Rgb = Rgb::new(248, 249, 250);

/// Canvas border color
pub const BORDER: Rgb = Rgb::new(200, 200, 200);

/// Canvas border stroke width in pixels
pub const BORDER_WIDTH: u32 = 2;

/// A single point glyph ready to draw.
///
/// `x`/`y` are the top-left corner of the glyph's bounding square; the glyph's
/// centre is at `(x + radius, y + radius)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
}

impl DrawCommand {
    /// Centre of the glyph, for centre-origin primitives
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.radius, self.y + self.radius)
    }
}

/// Everything a canvas needs to draw one generate/render cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub surface: RenderSurface,
    pub background: Rgb,
    pub border: Rgb,
    pub border_width: u32,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Frame with the default background and border
    pub fn new(surface: RenderSurface, commands: Vec<DrawCommand>) -> Self {
        Self {
            surface,
            background: BACKGROUND,
            border: BORDER,
            border_width: BORDER_WIDTH,
            commands,
        }
    }

    /// Serialize the frame (surface, decoration and draw commands) as pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Map every point to a draw command using one shared transform.
///
/// A zero-extent domain here means validation was bypassed upstream. Debug builds
/// treat that as a bug and panic; release builds log it and draw nothing.
pub fn draw_commands(
    points: &[Point],
    domain: &Domain,
    surface: &RenderSurface,
    style: &Style,
) -> Vec<DrawCommand> {
    let mapper = match CoordinateMapper::new(domain, surface) {
        Ok(mapper) => mapper,
        Err(e) => {
            if cfg!(debug_assertions) {
                panic!("unvalidated domain reached the mapper: {e}");
            }
            error!("Skipping render: {e}");
            return Vec::new();
        }
    };

    let radius = style.radius();
    let color = style.color();
    points
        .iter()
        .map(|&point| {
            let pos = mapper.to_canvas(point, radius);
            DrawCommand {
                x: pos.x,
                y: pos.y,
                radius,
                color,
            }
        })
        .collect()
}
