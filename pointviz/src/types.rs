//! Core value types: points, the generation domain, the render surface and point style.
//!
//! `Domain`, `RenderSurface` and `Style` keep their fields private so that the only
//! way to obtain one is through a validating constructor (or, for `Domain`, the
//! explicitly named `new_unchecked` escape hatch).

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{Result, VizError};

/// An ordered collection of generated points for one generate cycle
pub type PointSet = Vec<Point>;

/// Axis identifier used in error reporting
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// A point in domain space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Rectangular coordinate range in which points are generated.
///
/// Bounds are half-open: generated x values fall in `[min_x, max_x)` and y values
/// in `[min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Domain {
    /// Create a validated domain.
    ///
    /// # Errors
    /// Returns [`VizError::InvalidDomain`] when `min_x >= max_x`, `min_y >= max_y`,
    /// or when any bound or extent is not finite.
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self> {
        let domain = Self::new_unchecked(min_x, max_x, min_y, max_y);
        domain.validate()?;
        Ok(domain)
    }

    /// Create a domain without checking its bounds.
    ///
    /// Consumers that receive such a domain re-check what they depend on: the
    /// generator fails with `InvalidDomain` and the mapper with `DegenerateDomain`.
    pub const fn new_unchecked(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Check the `min < max` invariant on both axes
    pub fn validate(&self) -> Result<()> {
        let finite = [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.width().is_finite()
            && self.height().is_finite();

        if finite && self.min_x < self.max_x && self.min_y < self.max_y {
            Ok(())
        } else {
            Err(VizError::invalid_domain(
                self.min_x, self.max_x, self.min_y, self.max_y,
            ))
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Extent of the x axis
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent of the y axis
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The four corners, counter-clockwise from `(min_x, min_y)`
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.min_x, self.min_y),
            Point::new(self.max_x, self.min_y),
            Point::new(self.max_x, self.max_y),
            Point::new(self.min_x, self.max_y),
        ]
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::new_unchecked(0.0, 100.0, 0.0, 100.0)
    }
}

/// Pixel-space drawing rectangle with a fixed margin on every side
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderSurface {
    width: f32,
    height: f32,
    padding: f32,
}

impl RenderSurface {
    /// Create a validated surface.
    ///
    /// # Errors
    /// Returns [`VizError::InvalidSurface`] unless all values are finite, padding is
    /// non-negative, and both `width` and `height` exceed `2 * padding`.
    pub fn new(width: f32, height: f32, padding: f32) -> Result<Self> {
        let finite = width.is_finite() && height.is_finite() && padding.is_finite();
        if !finite || padding < 0.0 || width <= 2.0 * padding || height <= 2.0 * padding {
            return Err(VizError::invalid_surface(width, height, padding));
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Width left for points once padding is removed from both sides
    pub fn drawable_width(&self) -> f32 {
        self.width - 2.0 * self.padding
    }

    /// Height left for points once padding is removed from both sides
    pub fn drawable_height(&self) -> f32 {
        self.height - 2.0 * self.padding
    }

    /// Whole-pixel dimensions for bitmap backends
    ///
    /// Sides beyond `u32::MAX` saturate; the bitmap renderer rejects frames that
    /// large before allocating.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width.round() as u32, self.height.round() as u32)
    }
}

impl Default for RenderSurface {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 20.0,
        }
    }
}

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Named point colors offered by the color buttons
#[derive(Display, EnumString, EnumIter, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorPreset {
    /// Steel blue
    #[default]
    Blue,
    /// Tomato
    Red,
    /// Medium sea green
    Green,
    /// Blue violet
    Purple,
}

impl ColorPreset {
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Blue => Rgb::new(70, 130, 255),
            Self::Red => Rgb::new(255, 99, 71),
            Self::Green => Rgb::new(60, 179, 113),
            Self::Purple => Rgb::new(138, 43, 226),
        }
    }
}

impl From<ColorPreset> for Rgb {
    fn from(preset: ColorPreset) -> Self {
        preset.rgb()
    }
}

/// Radius and color applied uniformly to every point in a render pass
///
/// # Example
///
/// ```rust
/// use pointviz::types::{ColorPreset, Style};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let style = Style::builder()
///     .radius(4.5)
///     .color(ColorPreset::Purple)
///     .build()?;
/// assert_eq!(style.diameter(), 9.0);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Debug, Clone, Copy, PartialEq, Serialize)]
#[builder(default, build_fn(validate = "Self::validate", error = "VizError"))]
pub struct Style {
    /// Point radius in pixels
    #[builder(default = "DEFAULT_RADIUS")]
    radius: f32,

    /// Point fill color
    #[builder(setter(into), default = "ColorPreset::Blue.rgb()")]
    color: Rgb,
}

/// Radius of a 6 px point
pub const DEFAULT_RADIUS: f32 = 3.0;

impl Default for Style {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            color: ColorPreset::Blue.rgb(),
        }
    }
}

impl Style {
    /// Create a validated style
    pub fn new(radius: f32, color: impl Into<Rgb>) -> Result<Self> {
        check_radius(radius)?;
        Ok(Self {
            radius,
            color: color.into(),
        })
    }

    /// Create a new builder for Style
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Copy of this style with a different radius
    pub fn with_radius(self, radius: f32) -> Result<Self> {
        Self::new(radius, self.color)
    }

    /// Copy of this style with a different color
    pub fn with_color(self, color: impl Into<Rgb>) -> Self {
        Self {
            color: color.into(),
            ..self
        }
    }
}

impl StyleBuilder {
    fn validate(&self) -> Result<()> {
        match self.radius {
            Some(radius) => check_radius(radius),
            None => Ok(()),
        }
    }
}

fn check_radius(radius: f32) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(VizError::invalid_style(format!(
            "radius must be a positive number, got {radius}"
        )))
    }
}
