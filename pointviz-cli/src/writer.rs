use std::path::{Path, PathBuf};

use pointviz::render::render_frame;
use pointviz::{Canvas, Frame, ImageFormat, VizError, VizResult};
use tracing::info;

/// Canvas that encodes every frame and writes it to disk.
///
/// With `numbered` set, frame `n` goes to `<stem>-<n>.<ext>` next to the base path;
/// otherwise each frame overwrites the base path. Drawn frames are only kept in
/// memory after [`FrameWriter::keep_frames`].
pub struct FrameWriter {
    base: PathBuf,
    format: ImageFormat,
    numbered: bool,
    keep_frames: bool,
    written: Vec<PathBuf>,
    frames: Vec<Frame>,
}

impl FrameWriter {
    pub fn new(base: impl Into<PathBuf>, format: ImageFormat, numbered: bool) -> Self {
        Self {
            base: base.into(),
            format,
            numbered,
            keep_frames: false,
            written: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Also keep a copy of every drawn frame, for JSON export
    pub fn keep_frames(mut self, keep: bool) -> Self {
        self.keep_frames = keep;
        self
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Frames drawn so far, in order; empty unless frames are kept
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    fn next_path(&self) -> PathBuf {
        if !self.numbered {
            return self.base.clone();
        }
        let stem = self
            .base
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("frame");
        let file_name = format!("{}-{}.{}", stem, self.written.len() + 1, self.format.extension());
        match self.base.parent() {
            Some(parent) => parent.join(file_name),
            None => Path::new(&file_name).to_path_buf(),
        }
    }
}

impl Canvas for FrameWriter {
    fn draw(&mut self, frame: &Frame) -> VizResult<()> {
        let path = self.next_path();
        let bytes = render_frame(frame, self.format)?;
        std::fs::write(&path, &bytes)
            .map_err(|e| VizError::from(e).with_context(path.display().to_string()))?;

        info!(
            "Wrote {} points to {} ({} bytes)",
            frame.commands.len(),
            path.display(),
            bytes.len()
        );
        self.written.push(path);
        if self.keep_frames {
            self.frames.push(frame.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pointviz::{Command, Config, Controller};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_numbered_frames_get_sequential_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer =
            FrameWriter::new(dir.path().join("scatter.png"), ImageFormat::Png, true)
                .keep_frames(true);
        let mut controller = Controller::new(Config::default(), StdRng::seed_from_u64(1));

        controller.dispatch(Command::Generate, &mut writer).unwrap();
        controller.dispatch(Command::Redraw, &mut writer).unwrap();

        let names: Vec<_> = writer
            .written()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["scatter-1.png", "scatter-2.png"]);
        assert!(writer.written().iter().all(|p| p.exists()));
        assert_eq!(writer.frames().len(), 2);
    }

    #[test]
    fn test_single_output_overwrites_base_path() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("out.jpg");
        let mut writer = FrameWriter::new(&base, ImageFormat::Jpeg, false);
        let mut controller = Controller::new(Config::default(), StdRng::seed_from_u64(2));

        controller.dispatch(Command::Generate, &mut writer).unwrap();
        controller.dispatch(Command::Generate, &mut writer).unwrap();

        assert_eq!(writer.written(), [base.clone(), base.clone()]);
        assert!(base.exists());
        assert!(writer.frames().is_empty());
    }
}
