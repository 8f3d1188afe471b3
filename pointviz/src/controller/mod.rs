//! Orchestration of the configure → generate → map → render cycle.
//!
//! The [`Controller`] is the only owner of mutable state: the configuration, the
//! injected random source and the current point set. Interface events reach it as
//! [`Command`] values; successful commands that change what is on screen produce a
//! [`Frame`] of draw commands for a [`Canvas`].

pub mod command;
pub mod frame;

pub use command::Command;
pub use frame::{BACKGROUND, BORDER, BORDER_WIDTH, DrawCommand, Frame, draw_commands};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::generator::{checked_count, generate};
use crate::options::Config;
use crate::render::Canvas;
use crate::types::{Domain, Point, PointSet};

/// Holds the configuration and turns commands into frames
///
/// # Example
///
/// ```rust
/// use pointviz::controller::{Command, Controller};
/// use pointviz::options::Config;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut controller = Controller::new(Config::default(), StdRng::seed_from_u64(1));
/// controller.apply(Command::SetCount(12))?;
/// let frame = controller.apply(Command::Generate)?.expect("generate always draws");
/// assert_eq!(frame.commands.len(), 12);
/// # Ok(())
/// # }
/// ```
pub struct Controller<R: Rng> {
    config: Config,
    rng: R,
    points: PointSet,
    generation: u64,
}

impl<R: Rng> Controller<R> {
    /// Create a controller with no points generated yet
    pub fn new(config: Config, rng: R) -> Self {
        Self {
            config,
            rng,
            points: PointSet::new(),
            generation: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The point set from the most recent `Generate`
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of successful `Generate` commands so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one command.
    ///
    /// Returns the frame to draw for commands that change the picture, `None`
    /// otherwise. On error the configuration and point set are left exactly as
    /// they were.
    pub fn apply(&mut self, command: Command) -> Result<Option<Frame>> {
        debug!("{}: {:?}", command.description(), command);

        let result = self.apply_inner(command);
        if let Err(ref e) = result {
            if e.is_rejected_update() {
                warn!("Rejected update, keeping previous configuration: {e}");
            }
        }
        result
    }

    /// Apply a command and hand any resulting frame to `canvas`.
    ///
    /// Returns whether the canvas was drawn.
    pub fn dispatch<C: Canvas + ?Sized>(
        &mut self,
        command: Command,
        canvas: &mut C,
    ) -> Result<bool> {
        match self.apply(command)? {
            Some(frame) => {
                canvas.draw(&frame)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Build a frame for the current points and style without changing anything
    pub fn frame(&self) -> Frame {
        let commands = draw_commands(
            &self.points,
            &self.config.domain,
            &self.config.surface,
            &self.config.style,
        );
        Frame::new(self.config.surface, commands)
    }

    fn apply_inner(&mut self, command: Command) -> Result<Option<Frame>> {
        match command {
            Command::SetDomain {
                min_x,
                max_x,
                min_y,
                max_y,
            } => {
                self.config.domain = Domain::new(min_x, max_x, min_y, max_y)?;
                Ok(None)
            }
            Command::SetCount(count) => {
                self.config.count = checked_count(count)?;
                Ok(None)
            }
            Command::SetRadius(radius) => {
                self.config.style = self.config.style.with_radius(radius)?;
                Ok(None)
            }
            Command::SetColor(color) => {
                self.config.style = self.config.style.with_color(color);
                Ok(Some(self.frame()))
            }
            Command::Generate => {
                self.regenerate()?;
                Ok(Some(self.frame()))
            }
            Command::Redraw => Ok(Some(self.frame())),
        }
    }

    fn regenerate(&mut self) -> Result<()> {
        let start = std::time::Instant::now();
        let points = generate(&self.config.domain, self.config.count, &mut self.rng)?;
        self.points = points;
        self.generation += 1;

        info!(
            "Generated {} points (cycle {}) in {:?}",
            self.points.len(),
            self.generation,
            start.elapsed()
        );
        Ok(())
    }
}

impl<R: Rng> std::fmt::Debug for Controller<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("config", &self.config)
            .field("points", &self.points.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
