use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_plane::pixel_to_plane;

/// Zoom factor applied per scroll step.
pub const ZOOM_STEP: f64 = 1.1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollDirection {
    In,
    Out,
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum DragState {
    Idle,
    Dragging { last_x: f64, last_y: f64 },
}

/// Owns the mutable pan/zoom state on behalf of the shell.
///
/// The evaluator never sees mutation: it receives `Copy` snapshots via
/// [`viewport`](Self::viewport). Zoom and pan keep `zoom` strictly positive,
/// so every snapshot handed out satisfies the render preconditions as long
/// as the iteration budget stays at least 1.
#[derive(Debug)]
pub struct ViewportController {
    viewport: Viewport,
    drag: DragState,
}

impl ViewportController {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            drag: DragState::Idle,
        }
    }

    /// Snapshot of the current viewport, to be passed into the evaluator.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) {
        self.viewport.max_iterations = max_iterations;
    }

    pub fn reset(&mut self) {
        self.viewport = Viewport::home();
        self.drag = DragState::Idle;
    }

    /// Zooms by one step, keeping the plane point under the cursor fixed.
    ///
    /// The anchor is captured before the zoom changes, then the center is
    /// recomputed so the same point sits under the cursor afterwards.
    pub fn zoom_at(
        &mut self,
        cursor_x: f64,
        cursor_y: f64,
        width: u32,
        height: u32,
        direction: ScrollDirection,
    ) {
        let anchor = pixel_to_plane(cursor_x, cursor_y, width, height, &self.viewport);

        match direction {
            ScrollDirection::In => self.viewport.zoom *= ZOOM_STEP,
            ScrollDirection::Out => self.viewport.zoom /= ZOOM_STEP,
        }

        self.viewport.center.real =
            anchor.real - (cursor_x - f64::from(width) / 2.0) * self.viewport.scale_x(width);
        self.viewport.center.imag =
            anchor.imag - (cursor_y - f64::from(height) / 2.0) * self.viewport.scale_y(height);
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.drag = DragState::Dragging { last_x: x, last_y: y };
    }

    /// Pans by the pixel delta since the last drag event.
    ///
    /// Dragging right/down moves the visible window left/up, so the center
    /// translates against the pointer delta. No-op while idle.
    pub fn drag_to(&mut self, x: f64, y: f64, width: u32, height: u32) {
        let DragState::Dragging { last_x, last_y } = self.drag else {
            return;
        };

        self.viewport.center.real -= (x - last_x) * self.viewport.scale_x(width);
        self.viewport.center.imag -= (y - last_y) * self.viewport.scale_y(height);
        self.drag = DragState::Dragging { last_x: x, last_y: y };
    }

    pub fn end_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }
}
