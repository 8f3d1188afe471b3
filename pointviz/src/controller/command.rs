use crate::types::{ColorPreset, Rgb};

/// A user action forwarded from the interface layer.
///
/// Commands carry already-parsed values; turning text into numbers is the job of
/// whatever produced the command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the generation domain (applies from the next `Generate`)
    SetDomain {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    /// Replace the point count (applies from the next `Generate`)
    SetCount(i64),

    /// Replace the point radius (applies from the next frame)
    SetRadius(f32),

    /// Replace the point color and redraw the current points
    SetColor(Rgb),

    /// Discard the current points, generate a new set and draw it
    Generate,

    /// Draw the current points again without regenerating
    Redraw,
}

impl Command {
    /// Whether this command produces a frame when it succeeds
    pub fn redraws(&self) -> bool {
        matches!(self, Self::SetColor(_) | Self::Generate | Self::Redraw)
    }

    /// Returns a human-readable description of the command for logging.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SetDomain { .. } => "Set coordinate ranges",
            Self::SetCount(_) => "Set number of points",
            Self::SetRadius(_) => "Set point size",
            Self::SetColor(_) => "Set point color",
            Self::Generate => "Generate new points",
            Self::Redraw => "Redraw points",
        }
    }
}

impl From<ColorPreset> for Command {
    fn from(preset: ColorPreset) -> Self {
        Self::SetColor(preset.rgb())
    }
}
