mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::snapshot::SnapshotController;
pub use crate::controllers::viewport::{ScrollDirection, ViewportController, ZOOM_STEP};
pub use crate::core::actions::ports::colour_map::ColourMap;
pub use crate::core::actions::render::{InvalidConfiguration, RenderError, render, render_with};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration::IterationResult;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{BASE_SPAN, Viewport};
pub use crate::core::mandelbrot::algorithm::escape_time;
pub use crate::core::mandelbrot::colour_maps::hsl_gradient::{HslGradient, hsl_to_rgb};
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui::RunGuiCommand;
