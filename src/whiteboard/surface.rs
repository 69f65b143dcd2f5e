use crate::whiteboard::model::{Color, Point};
use crate::whiteboard::raster;

/// A drawing operation the surface knows how to rasterize. Surface-space
/// points; rounding to pixels happens here, at the raster boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Segment { start: Point, end: Point },
    RectOutline { start: Point, end: Point },
    EllipseOutline { start: Point, end: Point },
}

/// The two-layer raster store: `committed` holds all finalized ink over an
/// opaque background fill, `preview` is a transparent scratch layer that
/// carries the rubber-banded outline of an in-progress shape gesture and
/// nothing else.
///
/// Both layers are packed RGBA, equally sized, allocated once and never
/// resized. Nothing outside this type touches the pixel buffers.
pub struct Surface {
    width: u32,
    height: u32,
    background: Color,
    committed: Vec<u8>,
    preview: Vec<u8>,
}

impl Surface {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let len = (width as usize) * (height as usize) * 4;
        let mut committed = vec![0u8; len];
        raster::fill(&mut committed, background);
        Self {
            width,
            height,
            background,
            committed,
            preview: vec![0u8; len],
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn paint_committed(&mut self, shape: Shape, color: Color, stroke_width: u32) {
        paint(&mut self.committed, self.width, self.height, shape, color, stroke_width);
    }

    pub fn paint_preview(&mut self, shape: Shape, color: Color, stroke_width: u32) {
        paint(&mut self.preview, self.width, self.height, shape, color, stroke_width);
    }

    /// Reset the preview layer to fully transparent. Idempotent; called on
    /// every pointer-move of a shape gesture before the redraw.
    pub fn clear_preview(&mut self) {
        raster::fill(&mut self.preview, Color::TRANSPARENT);
    }

    pub fn committed_rgba(&self) -> &[u8] {
        &self.committed
    }

    pub fn preview_rgba(&self) -> &[u8] {
        &self.preview
    }

    pub fn preview_is_clear(&self) -> bool {
        self.preview.chunks_exact(4).all(|px| px[3] == 0)
    }
}

fn paint(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    shape: Shape,
    color: Color,
    stroke_width: u32,
) {
    let stroke_width = stroke_width.max(1);
    match shape {
        Shape::Segment { start, end } => {
            raster::draw_segment(
                start.rounded(),
                end.rounded(),
                color,
                stroke_width,
                pixels,
                width,
                height,
            );
        }
        Shape::RectOutline { start, end } => {
            raster::draw_rect_outline(
                start.rounded(),
                end.rounded(),
                color,
                stroke_width,
                pixels,
                width,
                height,
            );
        }
        Shape::EllipseOutline { start, end } => {
            raster::draw_ellipse_outline(
                start.rounded(),
                end.rounded(),
                color,
                stroke_width,
                pixels,
                width,
                height,
            );
        }
    }
}
