//! Domain-space to canvas-space coordinate mapping.
//!
//! Canvas y grows downwards while domain y grows upwards, so the y axis is flipped.
//! Both axes are inset by the surface padding:
//!
//! ```text
//! px = padding + (x - min_x) * (width  - 2 * padding) / (max_x - min_x)
//! py = padding + (max_y - y) * (height - 2 * padding) / (max_y - min_y)
//! ```
//!
//! [`CoordinateMapper::to_canvas`] additionally subtracts the glyph radius from both
//! results, returning the top-left corner of a point glyph centred on the mapped
//! position. Corner-origin primitives draw at that position directly; centre-origin
//! primitives must add the radius back.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VizError};
use crate::types::{Axis, Domain, Point, RenderSurface};

/// A position on the render surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPos {
    pub x: f32,
    pub y: f32,
}

impl CanvasPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Shift by `dx`, `dy`
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Precomputed linear transform from one domain onto one surface.
///
/// Building the mapper once and reusing it for every point of a batch avoids
/// recomputing the scale factors per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    min_x: f64,
    max_y: f64,
    scale_x: f64,
    scale_y: f64,
    padding: f64,
}

impl CoordinateMapper {
    /// Build the transform for `domain` onto `surface`.
    ///
    /// The domain is not re-validated beyond what the arithmetic needs.
    ///
    /// # Errors
    /// Returns [`VizError::DegenerateDomain`] when either axis has zero (or negative)
    /// extent, which can only happen for a domain created with `Domain::new_unchecked`.
    pub fn new(domain: &Domain, surface: &RenderSurface) -> Result<Self> {
        let width = domain.width();
        let height = domain.height();

        // `!(x > 0)` also catches NaN extents
        if !(width > 0.0) {
            return Err(VizError::degenerate_domain(Axis::X));
        }
        if !(height > 0.0) {
            return Err(VizError::degenerate_domain(Axis::Y));
        }

        Ok(Self {
            min_x: domain.min_x(),
            max_y: domain.max_y(),
            scale_x: f64::from(surface.drawable_width()) / width,
            scale_y: f64::from(surface.drawable_height()) / height,
            padding: f64::from(surface.padding()),
        })
    }

    /// Pixels per domain unit along x
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Pixels per domain unit along y
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Where `point` lands on the surface, without any glyph offset
    pub fn center(&self, point: Point) -> CanvasPos {
        let px = self.padding + (point.x - self.min_x) * self.scale_x;
        let py = self.padding + (self.max_y - point.y) * self.scale_y;
        CanvasPos::new(px as f32, py as f32)
    }

    /// Top-left corner of a glyph of the given radius centred on `point`
    pub fn to_canvas(&self, point: Point, radius: f32) -> CanvasPos {
        self.center(point).offset(-radius, -radius)
    }
}

/// One-shot form of [`CoordinateMapper::to_canvas`].
///
/// # Example
///
/// ```rust
/// use pointviz::mapper::to_canvas;
/// use pointviz::types::{Domain, Point, RenderSurface};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let domain = Domain::new(0.0, 100.0, 0.0, 100.0)?;
/// let surface = RenderSurface::new(600.0, 400.0, 20.0)?;
/// let pos = to_canvas(Point::new(50.0, 50.0), &domain, &surface, 3.0)?;
/// assert!((pos.x - 297.0).abs() < 1e-3);
/// assert!((pos.y - 197.0).abs() < 1e-3);
/// # Ok(())
/// # }
/// ```
pub fn to_canvas(
    point: Point,
    domain: &Domain,
    surface: &RenderSurface,
    radius: f32,
) -> Result<CanvasPos> {
    Ok(CoordinateMapper::new(domain, surface)?.to_canvas(point, radius))
}
