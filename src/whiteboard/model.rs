/// A point in surface space, i.e. the coordinate system of the backing
/// raster, independent of how large the canvas is displayed on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Nearest pixel coordinate. Rasterization is the only consumer.
    pub fn rounded(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Parse an opaque `#RRGGBB` string (the settings-file format).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pencil,
    Brush,
    Line,
    Rect,
    Ellipse,
    Eraser,
    Text,
}

impl Tool {
    /// Freehand tools stroke the committed layer incrementally as the
    /// pointer moves and never touch the preview layer.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Pencil | Tool::Brush | Tool::Eraser)
    }

    /// Shape tools rubber-band on the preview layer and commit exactly
    /// once when the gesture ends.
    pub fn is_shape(self) -> bool {
        matches!(self, Tool::Line | Tool::Rect | Tool::Ellipse)
    }

    /// How the configured stroke width is interpreted: the brush paints
    /// three times as wide, every other tool uses it as-is.
    pub fn effective_width(self, configured: u32) -> u32 {
        match self {
            Tool::Brush => configured.saturating_mul(3),
            _ => configured,
        }
    }
}

/// Stroke width range offered by the width slider.
pub const MIN_STROKE_WIDTH: u32 = 1;
pub const MAX_STROKE_WIDTH: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: u32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: MIN_STROKE_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parse_round_trips_palette_style_strings() {
        let color = Color::from_hex("#FF8000").expect("valid hex");
        assert_eq!(color, Color::rgb(255, 128, 0));
        assert_eq!(color.to_hex(), "#FF8000");
        assert_eq!(Color::from_hex("#87cefa"), Some(Color::rgb(135, 206, 250)));
    }

    #[test]
    fn hex_parse_rejects_malformed_strings() {
        assert_eq!(Color::from_hex("800080"), None);
        assert_eq!(Color::from_hex("#80008"), None);
        assert_eq!(Color::from_hex("#80008G"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn brush_triples_configured_width() {
        assert_eq!(Tool::Brush.effective_width(2), 6);
        assert_eq!(Tool::Pencil.effective_width(2), 2);
        assert_eq!(Tool::Eraser.effective_width(5), 5);
        assert_eq!(Tool::Line.effective_width(10), 10);
    }

    #[test]
    fn tool_classification_is_exhaustive() {
        for tool in [
            Tool::Pencil,
            Tool::Brush,
            Tool::Line,
            Tool::Rect,
            Tool::Ellipse,
            Tool::Eraser,
            Tool::Text,
        ] {
            // Text is neither: selectable, but draws nothing.
            assert!(!(tool.is_freehand() && tool.is_shape()));
        }
        assert!(!Tool::Text.is_freehand());
        assert!(!Tool::Text.is_shape());
    }

    #[test]
    fn point_rounds_to_nearest_pixel() {
        assert_eq!(Point::new(10.4, 10.6).rounded(), (10, 11));
        assert_eq!(Point::new(-0.4, 0.5).rounded(), (0, 1));
    }
}
