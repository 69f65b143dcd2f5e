//! Tool selection, stroke style, and the single-gesture state machine that
//! turns pointer events into surface paint operations.

use crate::whiteboard::model::{Color, Point, StrokeStyle, Tool};
use crate::whiteboard::surface::{Shape, Surface};

/// One pointer-down → pointer-up (or pointer-leave) cycle. The style for
/// freehand tools is resolved once, when the gesture starts; shape tools
/// ignore it and re-read the live style on every redraw.
#[derive(Debug, Clone, Copy)]
struct Gesture {
    tool: Tool,
    start: Point,
    last: Point,
    freehand_stroke: Option<(Color, u32)>,
}

/// The drawing core: owns the two-layer surface plus the current tool,
/// stroke style, and gesture slot. One instance per drawing view.
///
/// Every event handler is a silent no-op when it arrives out of sequence
/// (a move/up/leave with no active gesture, a down while one is active),
/// so the host can forward raw pointer traffic without filtering.
pub struct Whiteboard {
    surface: Surface,
    tool: Tool,
    style: StrokeStyle,
    gesture: Option<Gesture>,
}

impl Whiteboard {
    pub fn new(width: u32, height: u32, background: Color, style: StrokeStyle) -> Self {
        Self {
            surface: Surface::new(width, height, background),
            tool: Tool::Pencil,
            style,
            gesture: None,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// The width slider clamps to the palette range before calling this.
    pub fn set_width(&mut self, width: u32) {
        self.style.width = width;
    }

    pub fn pointer_down(&mut self, point: Point) {
        if self.gesture.is_some() {
            return;
        }
        let tool = self.tool;
        let freehand_stroke = tool.is_freehand().then(|| {
            let color = if tool == Tool::Eraser {
                self.surface.background()
            } else {
                self.style.color
            };
            (color, tool.effective_width(self.style.width))
        });
        // No ink yet: freehand tools stroke from here on the first move,
        // shape tools only rubber-band once the pointer travels.
        self.gesture = Some(Gesture {
            tool,
            start: point,
            last: point,
            freehand_stroke,
        });
    }

    pub fn pointer_move(&mut self, point: Point) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        if let Some((color, width)) = gesture.freehand_stroke {
            self.surface.paint_committed(
                Shape::Segment {
                    start: gesture.last,
                    end: point,
                },
                color,
                width,
            );
        } else if let Some(shape) = shape_outline(gesture.tool, gesture.start, point) {
            // Full clear-and-redraw: the outline may have shrunk since the
            // last move and stale pixels must not survive.
            self.surface.clear_preview();
            self.surface
                .paint_preview(shape, self.style.color, self.style.width);
        }
        gesture.last = point;
    }

    pub fn pointer_up(&mut self, point: Point) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        if gesture.freehand_stroke.is_some() {
            // Already committed incrementally.
            return;
        }
        self.surface.clear_preview();
        if let Some(shape) = shape_outline(gesture.tool, gesture.start, point) {
            self.surface
                .paint_committed(shape, self.style.color, self.style.width);
        }
    }

    /// The pointer escaping the surface finalizes the gesture exactly like
    /// a release; discarding it would leave a stuck drawing state.
    pub fn pointer_leave(&mut self, point: Point) {
        self.pointer_up(point);
    }
}

fn shape_outline(tool: Tool, start: Point, end: Point) -> Option<Shape> {
    match tool {
        Tool::Line => Some(Shape::Segment { start, end }),
        Tool::Rect => Some(Shape::RectOutline { start, end }),
        Tool::Ellipse => Some(Shape::EllipseOutline { start, end }),
        Tool::Pencil | Tool::Brush | Tool::Eraser | Tool::Text => None,
    }
}
