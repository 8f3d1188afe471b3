pub mod bitmap;

pub use bitmap::{BitmapCanvas, render_frame};

use std::path::Path;
use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::controller::Frame;
use crate::error::Result;

/// Encoded image bytes
pub type PlotBytes = Vec<u8>;

/// A drawing surface that consumes frames
///
/// The controller never draws anything itself; it hands each [`Frame`] to a canvas.
/// Implement this for whatever actually puts pixels somewhere (a window, a file,
/// a test recorder).
pub trait Canvas {
    /// Draw a complete frame, replacing whatever was drawn before
    fn draw(&mut self, frame: &Frame) -> Result<()>;
}

/// Output encoding for bitmap frames
#[derive(Display, EnumString, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ImageFormat {
    #[default]
    Png,
    #[strum(to_string = "jpeg", serialize = "jpg")]
    Jpeg,
}

impl ImageFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| Self::from_str(ext).ok())
    }

    /// Preferred file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}
