//! The drawing core: a two-layer raster surface, the tool/gesture state
//! machine that paints on it, and the pointer-coordinate mapping between
//! host event space and surface space.

pub mod input;
pub mod mapper;
pub mod model;
pub mod palette;
pub mod raster;
pub mod surface;

pub use input::Whiteboard;
pub use mapper::{map_pointer, DisplayRect};
pub use model::{Color, Point, StrokeStyle, Tool, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
pub use surface::{Shape, Surface};

/// Intrinsic raster dimensions of the drawing surface. The on-screen
/// element may be displayed at any size; the backing raster never changes.
pub const SURFACE_WIDTH: u32 = 800;
pub const SURFACE_HEIGHT: u32 = 600;

/// Background fill of the committed layer; also what the eraser paints.
pub const SURFACE_BACKGROUND: Color = Color::WHITE;
