use crate::controllers::viewport::{ScrollDirection, ViewportController};
use crate::core::actions::render::render;
use crate::presenters::pixels::presenter::PixelsPresenter;
use winit::event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;

/// Event-loop state for the interactive explorer.
///
/// Wires raw pointer events into the [`ViewportController`] and redraws
/// synchronously on the event-loop thread, which naturally serializes
/// render requests. A failed render keeps the last good frame on screen.
pub struct GuiApp {
    controller: ViewportController,
    presenter: PixelsPresenter,
    cursor_x: f64,
    cursor_y: f64,
}

impl GuiApp {
    #[must_use]
    pub fn new(controller: ViewportController, presenter: PixelsPresenter) -> Self {
        Self {
            controller,
            presenter,
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }

    pub fn run(
        mut self,
        event_loop: EventLoop<()>,
        window: &'static Window,
    ) -> Result<(), winit::error::EventLoopError> {
        event_loop.run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            let Event::WindowEvent { event, .. } = event else {
                return;
            };

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => {
                    if let Err(err) = self.presenter.resize(size.width, size.height) {
                        eprintln!("resize failed: {}", err);
                        elwt.exit();
                        return;
                    }
                    window.request_redraw();
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if let Some(direction) = scroll_direction(delta) {
                        self.controller.zoom_at(
                            self.cursor_x,
                            self.cursor_y,
                            self.presenter.width(),
                            self.presenter.height(),
                            direction,
                        );
                        window.request_redraw();
                    }
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => {
                        self.controller.begin_drag(self.cursor_x, self.cursor_y);
                    }
                    ElementState::Released => self.controller.end_drag(),
                },
                WindowEvent::CursorMoved { position, .. } => {
                    self.cursor_x = position.x;
                    self.cursor_y = position.y;

                    if self.controller.is_dragging() {
                        self.controller.drag_to(
                            position.x,
                            position.y,
                            self.presenter.width(),
                            self.presenter.height(),
                        );
                        window.request_redraw();
                    }
                }
                WindowEvent::RedrawRequested => self.redraw(),
                _ => {}
            }
        })
    }

    fn redraw(&mut self) {
        let width = self.presenter.width();
        let height = self.presenter.height();

        match render(self.controller.viewport(), width, height) {
            Ok(buffer) => {
                if let Err(err) = self.presenter.present(&buffer) {
                    eprintln!("present failed: {}", err);
                }
            }
            // leave the last good frame visible
            Err(err) => eprintln!("render skipped: {}", err),
        }
    }
}

/// Collapses a wheel delta to a zoom direction; `None` for pure horizontal
/// scroll.
fn scroll_direction(delta: MouseScrollDelta) -> Option<ScrollDirection> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if y > 0.0 {
        Some(ScrollDirection::In)
    } else if y < 0.0 {
        Some(ScrollDirection::Out)
    } else {
        None
    }
}
