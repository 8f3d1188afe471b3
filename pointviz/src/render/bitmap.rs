use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use plotters::prelude::*;
use tracing::debug;

use crate::controller::Frame;
use crate::error::{Result, VizError};
use crate::render::{Canvas, ImageFormat, PlotBytes};
use crate::types::Rgb;

/// JPEG quality used for encoded frames
const JPEG_QUALITY: u8 = 85;

/// Largest RGB buffer a frame may allocate (1 GiB)
const MAX_BUFFER_BYTES: usize = 1 << 30;

/// Byte length of the RGB buffer for a `width` x `height` frame
fn buffer_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .filter(|&len| len <= MAX_BUFFER_BYTES)
        .ok_or_else(|| {
            VizError::render(format!("{width}x{height} frame is too large to render"))
        })
}

fn to_plotters(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Render a frame to an encoded image using the Plotters bitmap backend
///
/// This function handles the complete rendering pipeline:
/// 1. Fills the background and strokes the border
/// 2. Draws one filled circle per draw command, centred at corner + radius
/// 3. Encodes the RGB buffer to PNG or JPEG
pub fn render_frame(frame: &Frame, format: ImageFormat) -> Result<PlotBytes> {
    let (width, height) = frame.surface.pixel_size();
    let len = buffer_len(width, height)?;

    let draw_start = std::time::Instant::now();
    // RGB buffer (3 bytes per pixel); neither output format needs alpha
    let mut pixel_buffer = vec![255u8; len];

    {
        let backend = BitMapBackend::with_buffer(&mut pixel_buffer, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&to_plotters(frame.background))
            .map_err(|e| VizError::render(format!("failed to fill background: {e}")))?;

        if frame.border_width > 0 {
            let corners = [(0, 0), (width as i32 - 1, height as i32 - 1)];
            let style = to_plotters(frame.border).stroke_width(frame.border_width);
            root.draw(&Rectangle::new(corners, style))
                .map_err(|e| VizError::render(format!("failed to draw border: {e}")))?;
        }

        for command in &frame.commands {
            let (cx, cy) = command.center();
            let radius = command.radius.round().max(1.0) as u32;
            let glyph = Circle::new(
                (cx.round() as i32, cy.round() as i32),
                radius,
                to_plotters(command.color).filled(),
            );
            root.draw(&glyph)
                .map_err(|e| VizError::render(format!("failed to draw point: {e}")))?;
        }

        root.present()
            .map_err(|e| VizError::render(format!("failed to present plotters buffer: {e}")))?;
    } // End Plotters scope - pixel_buffer is released

    debug!(
        "Drew {} points on {}x{} in {:?}",
        frame.commands.len(),
        width,
        height,
        draw_start.elapsed()
    );

    let img: RgbImage = image::ImageBuffer::from_vec(width, height, pixel_buffer)
        .ok_or_else(|| VizError::render("plot image buffer had unexpected size"))?;

    let encode_start = std::time::Instant::now();
    let mut encoded = Vec::with_capacity(len / 6);
    match format {
        ImageFormat::Png => PngEncoder::new(&mut encoded)
            .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| VizError::render(format!("failed to PNG encode frame: {e}")))?,
        ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY)
            .encode(img.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| VizError::render(format!("failed to JPEG encode frame: {e}")))?,
    }
    debug!(
        "Encoded {} frame ({} bytes) in {:?}",
        format,
        encoded.len(),
        encode_start.elapsed()
    );

    Ok(encoded)
}

/// In-memory canvas that keeps the most recently drawn frame as an encoded image
#[derive(Debug, Default)]
pub struct BitmapCanvas {
    format: ImageFormat,
    latest: Option<PlotBytes>,
    frames_drawn: usize,
}

impl BitmapCanvas {
    pub fn new(format: ImageFormat) -> Self {
        Self {
            format,
            latest: None,
            frames_drawn: 0,
        }
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Encoded bytes of the last frame, if any frame has been drawn
    pub fn latest(&self) -> Option<&[u8]> {
        self.latest.as_deref()
    }

    /// Take the last frame's bytes, leaving the canvas empty
    pub fn take_latest(&mut self) -> Option<PlotBytes> {
        self.latest.take()
    }

    pub fn frames_drawn(&self) -> usize {
        self.frames_drawn
    }

    /// Write the last frame to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self
            .latest
            .as_deref()
            .ok_or_else(|| VizError::render("no frame has been drawn yet"))?;
        std::fs::write(path, bytes)
            .map_err(|e| VizError::from(e).with_context(path.display().to_string()))
    }
}

impl Canvas for BitmapCanvas {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.latest = Some(render_frame(frame, self.format)?);
        self.frames_drawn += 1;
        Ok(())
    }
}
