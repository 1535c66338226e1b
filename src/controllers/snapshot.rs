use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::render;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use std::path::Path;
use std::time::Instant;

const SNAPSHOT_WIDTH: u32 = 800;
const SNAPSHOT_HEIGHT: u32 = 600;

/// Renders a single frame of the home view and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let viewport = Viewport::home();

        println!("Rendering Mandelbrot set...");
        println!("Image size: {}x{}", SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT);
        println!("Max iterations: {}", viewport.max_iterations);

        let start = Instant::now();
        let buffer = render(viewport, SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT)?;
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        self.buffer = Some(buffer);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(buffer) = &self.buffer else {
            return Ok(());
        };

        if let Some(parent) = filepath.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.presenter.present(buffer, filepath)?;

        Ok(())
    }
}
