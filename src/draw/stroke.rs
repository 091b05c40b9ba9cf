use crate::draw::line::line_points;
use crate::draw::model::{Brush, Color, Point};

/// Capability for writing brush stamps into a raster surface.
///
/// Implementations own bounds handling; stamps that fall partly or fully
/// outside the surface are clipped or ignored, never an error.
pub trait BrushSurface {
    /// Writes a `size` x `size` square of `color` with its top-left corner
    /// at `top_left`.
    fn paint_brush(&mut self, top_left: Point, color: Color, size: u32);
}

/// One sampled pointer event, already mapped to canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release,
    /// The pointer left the surface without a release being observed.
    /// Behaves exactly like `Release`.
    Cancel,
}

/// Where the in-progress stroke stands.
///
/// While `Drawing`, `last` is the most recent point handed to the brush, so
/// the next segment continues the visible stroke without a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing {
        last: Point,
    },
}

impl StrokeState {
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

/// Advances the stroke state machine by one pointer event, painting through
/// `surface` as a side effect.
///
/// A press paints a single dab at the press point, so a tap leaves a mark
/// even when no move ever follows. A press while already drawing starts a
/// new stroke without flushing a closing segment. Move, release, and cancel
/// events with no stroke in progress are tolerated no-ops; the host input
/// system may deliver them out of order.
pub fn handle_pointer<S: BrushSurface>(
    state: StrokeState,
    event: PointerEvent,
    brush: Brush,
    surface: &mut S,
) -> StrokeState {
    match (state, event) {
        (_, PointerEvent::Press(point)) => {
            surface.paint_brush(point, brush.color, brush.size);
            StrokeState::Drawing { last: point }
        }
        (StrokeState::Drawing { last }, PointerEvent::Move(point)) => {
            for step in line_points(last, point) {
                surface.paint_brush(step, brush.color, brush.size);
            }
            StrokeState::Drawing { last: point }
        }
        (StrokeState::Drawing { .. }, PointerEvent::Release | PointerEvent::Cancel) => {
            StrokeState::Idle
        }
        (StrokeState::Idle, _) => StrokeState::Idle,
    }
}

/// Stroke state plus the active brush, one per drawing surface.
///
/// The brush is read at each event, never captured by the stroke, so color
/// and size edits apply from the next stamp onward and never retroactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokePen {
    state: StrokeState,
    brush: Brush,
}

impl StrokePen {
    pub fn new(brush: Brush) -> Self {
        Self {
            state: StrokeState::Idle,
            brush,
        }
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn set_color(&mut self, color: Color) {
        self.brush.color = color;
    }

    pub fn set_size(&mut self, size: u32) {
        self.brush.size = size.max(1);
    }

    pub fn handle<S: BrushSurface>(&mut self, event: PointerEvent, surface: &mut S) {
        self.state = handle_pointer(self.state, event, self.brush, surface);
    }
}
