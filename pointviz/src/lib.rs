//! # pointviz
//!
//! A library for generating random 2D point scatters and mapping them onto a pixel
//! canvas.
//!
//! ## Overview
//!
//! Points are drawn uniformly from a rectangular [`Domain`] using an injected random
//! source, then mapped to canvas pixels with a padded, y-flipped linear transform.
//! A [`Controller`] ties the two together: interface events arrive as [`Command`]
//! values and successful commands yield [`Frame`]s of draw commands for a [`Canvas`].
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use pointviz::{BitmapCanvas, Command, Config, Controller, ImageFormat};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new().count(80).build()?;
//! let mut controller = Controller::new(config, StdRng::seed_from_u64(42));
//! let mut canvas = BitmapCanvas::new(ImageFormat::Png);
//!
//! controller.dispatch(Command::Generate, &mut canvas)?;
//! canvas.save(std::path::Path::new("scatter.png"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `types`: Points, domains, render surfaces, colors and point style
//! - `generator`: Uniform random point generation
//! - `mapper`: Domain-to-canvas coordinate transform
//! - `options`: Top-level configuration using the builder pattern
//! - `controller`: Commands, frames and the generate/render cycle
//! - `render`: The canvas abstraction and a Plotters bitmap implementation
//! - `error`: The crate-wide error type

pub mod controller;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod options;
pub mod render;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use controller::{Command, Controller, DrawCommand, Frame};
pub use error::{Result as VizResult, VizError};
pub use generator::generate;
pub use mapper::{CanvasPos, CoordinateMapper, to_canvas};
pub use options::{Config, ConfigBuilder};
pub use render::{BitmapCanvas, Canvas, ImageFormat, PlotBytes};
pub use types::{ColorPreset, Domain, Point, PointSet, RenderSurface, Rgb, Style};
