//! Error types for point generation, mapping and rendering.
//!
//! This module defines `VizError`, the single error type returned by every fallible
//! operation in the crate. It uses `thiserror` for convenient error construction.

use std::error::Error as StdError;
use thiserror::Error;

use crate::types::Axis;

/// Custom error type for pointviz operations.
///
/// Configuration updates that fail with one of these errors never mutate the
/// controller's configuration, so callers can surface the error as a notice and
/// carry on with the last valid state.
#[derive(Debug, Error)]
pub enum VizError {
    /// Domain bounds are inverted, equal or not finite
    #[error(
        "Invalid domain: x range [{min_x}, {max_x}) and y range [{min_y}, {max_y}) must be finite with min < max"
    )]
    InvalidDomain {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    /// A zero (or negative) extent axis reached the coordinate mapper
    #[error("Degenerate domain: {axis} axis has no extent")]
    DegenerateDomain { axis: Axis },

    /// Negative point count
    #[error("Invalid point count {count}: must be zero or greater")]
    InvalidCount { count: i64 },

    /// Point radius that cannot be drawn
    #[error("Invalid style: {message}")]
    InvalidStyle { message: String },

    /// Render surface too small for its padding
    #[error(
        "Invalid surface {width}x{height} with padding {padding}: both sides must exceed twice the padding"
    )]
    InvalidSurface { width: f32, height: f32, padding: f32 },

    /// Builder or option validation failures
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Drawing or image encoding failures
    #[error("Render error: {message}")]
    Render { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File system errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context (for wrapping other errors)
    #[error("{message}")]
    Other {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl VizError {
    /// Create an InvalidDomain error from the offending bounds
    pub fn invalid_domain(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self::InvalidDomain {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Create a DegenerateDomain error for one axis
    pub fn degenerate_domain(axis: Axis) -> Self {
        Self::DegenerateDomain { axis }
    }

    /// Create an InvalidCount error
    pub fn invalid_count(count: i64) -> Self {
        Self::InvalidCount { count }
    }

    /// Create an InvalidStyle error with a message
    pub fn invalid_style(message: impl Into<String>) -> Self {
        Self::InvalidStyle {
            message: message.into(),
        }
    }

    /// Create an InvalidSurface error
    pub fn invalid_surface(width: f32, height: f32, padding: f32) -> Self {
        Self::InvalidSurface {
            width,
            height,
            padding,
        }
    }

    /// Create a Config error with a message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a Render error with a message
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// True for errors raised while validating a configuration update.
    ///
    /// These are the errors a shell reports as a non-fatal notice.
    pub fn is_rejected_update(&self) -> bool {
        matches!(
            self,
            Self::InvalidDomain { .. }
                | Self::InvalidCount { .. }
                | Self::InvalidStyle { .. }
                | Self::InvalidSurface { .. }
                | Self::Config { .. }
        )
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        match self {
            Self::InvalidStyle { message } => Self::InvalidStyle {
                message: format!("{}: {}", context.into(), message),
            },
            Self::Config { message } => Self::Config {
                message: format!("{}: {}", context.into(), message),
            },
            Self::Render { message } => Self::Render {
                message: format!("{}: {}", context.into(), message),
            },
            Self::Serialization(e) => Self::Other {
                message: format!("{}: {}", context.into(), e),
                source: Some(Box::new(e)),
            },
            Self::Io(e) => Self::Other {
                message: format!("{}: {}", context.into(), e),
                source: Some(Box::new(e)),
            },
            Self::Other { message, source } => Self::Other {
                message: format!("{}: {}", context.into(), message),
                source,
            },
            // Structured variants keep their fields as-is
            other => other,
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for VizError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::config(err.to_string())
    }
}

// Type alias for Result using VizError
pub type Result<T> = std::result::Result<T, VizError>;
