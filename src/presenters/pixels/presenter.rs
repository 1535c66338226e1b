use crate::core::data::pixel_buffer::PixelBuffer;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

/// Blits rendered frames into a `pixels` framebuffer.
///
/// The core's buffers are RGBA with opaque alpha, matching the framebuffer
/// format, so presenting is a straight byte copy.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        Ok(Self {
            pixels,
            width: size.width,
            height: size.height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.width = width;
        self.height = height;

        Ok(())
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn present(&mut self, buffer: &PixelBuffer) -> Result<(), pixels::Error> {
        if buffer.width() != self.width || buffer.height() != self.height {
            // stale frame from before a resize; skip it, the next redraw
            // will carry the right dimensions
            return Ok(());
        }

        self.pixels.frame_mut().copy_from_slice(buffer.buffer());
        self.pixels.render()
    }
}
