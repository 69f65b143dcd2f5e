//! Conversion from host event space to surface space.
//!
//! The canvas is displayed stretched to whatever space the panel gives it,
//! so the on-screen rectangle rarely matches the backing raster's intrinsic
//! size. Mapping applies independent X and Y scale factors; skipping it
//! would displace every stroke whenever displayed size differs from
//! intrinsic size.

use crate::whiteboard::model::Point;

/// The on-screen rectangle the surface is currently displayed in, in the
/// host's event coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map an event-space position to surface space.
///
/// Pure and deterministic. Returns `None` when the mapping cannot be
/// trusted: a degenerate display rectangle (the element is not laid out
/// yet) or any non-finite input. Callers skip the pointer event entirely
/// in that case.
pub fn map_pointer(
    event_x: f32,
    event_y: f32,
    display: DisplayRect,
    intrinsic: (u32, u32),
) -> Option<Point> {
    if !event_x.is_finite()
        || !event_y.is_finite()
        || !display.left.is_finite()
        || !display.top.is_finite()
        || !display.width.is_finite()
        || !display.height.is_finite()
    {
        return None;
    }
    if display.width <= 0.0 || display.height <= 0.0 || intrinsic.0 == 0 || intrinsic.1 == 0 {
        return None;
    }

    let scale_x = intrinsic.0 as f32 / display.width;
    let scale_y = intrinsic.1 as f32 / display.height;
    let point = Point::new(
        (event_x - display.left) * scale_x,
        (event_y - display.top) * scale_y,
    );
    if !point.x.is_finite() || !point.y.is_finite() {
        return None;
    }
    Some(point)
}
