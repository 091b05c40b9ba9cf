pub mod canvas;
pub mod clipboard;
pub mod codec;
pub mod export;
pub mod line;
pub mod model;
pub mod stroke;

pub use canvas::Canvas;
pub use line::{line_points, LinePoints};
pub use model::{Brush, Color, Point};
pub use stroke::{handle_pointer, BrushSurface, PointerEvent, StrokePen, StrokeState};
