use crate::controllers::viewport::ViewportController;
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

pub struct RunGuiCommand {}

impl Default for RunGuiCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RunGuiCommand {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn execute(&self) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");

        // the pixels surface borrows the window for the lifetime of the
        // event loop, which never returns control; leaking is the simplest
        // way to satisfy that borrow
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelzoom")
                .with_inner_size(LogicalSize::new(800.0, 600.0))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let presenter =
            PixelsPresenter::new(window).expect("Failed to create pixels surface");
        let controller = ViewportController::new(Viewport::home());
        let app = GuiApp::new(controller, presenter);

        app.run(event_loop, window).expect("Event loop error");
    }
}
