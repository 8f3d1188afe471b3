use derive_builder::Builder;

use crate::error::VizError;
use crate::types::{Domain, RenderSurface, Style};

/// Number of points generated when nothing else is configured
pub const DEFAULT_POINT_COUNT: usize = 30;

/// Lower bound of the point count slider
pub const MIN_POINT_COUNT: usize = 5;

/// Upper bound of the point count slider
pub const MAX_POINT_COUNT: usize = 200;

/// Smallest radius offered by the size slider (2 px points)
pub const MIN_RADIUS: f32 = 1.0;

/// Largest radius offered by the size slider (15 px points)
pub const MAX_RADIUS: f32 = 7.5;

/// Everything a generate/render cycle reads
///
/// Owned by the [`Controller`](crate::controller::Controller) and handed by reference
/// to the generator and mapper; nothing else holds on to it.
///
/// # Example
///
/// ```rust
/// use pointviz::options::Config;
/// use pointviz::types::{Domain, RenderSurface};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::new()
///     .count(120)
///     .domain(Domain::new(-1.0, 1.0, -1.0, 1.0)?)
///     .surface(RenderSurface::new(800.0, 800.0, 32.0)?)
///     .build()?;
/// assert_eq!(config.count, 120);
/// # Ok(())
/// # }
/// ```
#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(default, build_fn(validate = "Self::validate", error = "VizError"))]
pub struct Config {
    /// Number of points per generate cycle
    #[builder(default = "DEFAULT_POINT_COUNT")]
    pub count: usize,

    /// Generation domain
    #[builder(default)]
    pub domain: Domain,

    /// Point radius and color
    #[builder(default)]
    pub style: Style,

    /// Pixel surface the points are mapped onto
    #[builder(default)]
    pub surface: RenderSurface,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_POINT_COUNT,
            domain: Domain::default(),
            style: Style::default(),
            surface: RenderSurface::default(),
        }
    }
}

impl Config {
    /// Create a new builder for Config
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), VizError> {
        // Domains may arrive through `Domain::new_unchecked`
        if let Some(domain) = &self.domain {
            domain.validate()?;
        }
        Ok(())
    }
}
