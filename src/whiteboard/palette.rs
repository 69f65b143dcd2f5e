use crate::whiteboard::model::Color;

/// Swatches per row in the palette grid.
pub const PALETTE_COLUMNS: usize = 14;

/// The fixed color list, in presentation order. Several entries repeat
/// (purple, gray, red); the duplicates are part of the layout and must not
/// be collapsed, since selection is by swatch position.
pub const PALETTE: [Color; 28] = [
    Color::rgb(0x80, 0x00, 0x80), // #800080
    Color::rgb(0x00, 0x00, 0x00), // #000000
    Color::rgb(0x80, 0x80, 0x80), // #808080
    Color::rgb(0x80, 0x80, 0x80), // #808080
    Color::rgb(0xFF, 0x00, 0x00), // #FF0000
    Color::rgb(0xFF, 0x00, 0x00), // #FF0000
    Color::rgb(0xFF, 0x80, 0x00), // #FF8000
    Color::rgb(0xFF, 0xFF, 0x00), // #FFFF00
    Color::rgb(0x00, 0xFF, 0x00), // #00FF00
    Color::rgb(0x00, 0x80, 0x00), // #008000
    Color::rgb(0x00, 0xFF, 0xFF), // #00FFFF
    Color::rgb(0x00, 0x00, 0xFF), // #0000FF
    Color::rgb(0x00, 0x00, 0x80), // #000080
    Color::rgb(0x80, 0x00, 0x80), // #800080
    Color::rgb(0xFF, 0xFF, 0xFF), // #FFFFFF
    Color::rgb(0xC0, 0xC0, 0xC0), // #C0C0C0
    Color::rgb(0x80, 0x80, 0x80), // #808080
    Color::rgb(0x80, 0x40, 0x00), // #804000
    Color::rgb(0xFF, 0xC0, 0xCB), // #FFC0CB
    Color::rgb(0xFF, 0xB6, 0xC1), // #FFB6C1
    Color::rgb(0xFF, 0xE4, 0xC4), // #FFE4C4
    Color::rgb(0xFF, 0xFD, 0xD0), // #FFFDD0
    Color::rgb(0x98, 0xFB, 0x98), // #98FB98
    Color::rgb(0x90, 0xEE, 0x90), // #90EE90
    Color::rgb(0x87, 0xCE, 0xFA), // #87CEFA
    Color::rgb(0xB0, 0xC4, 0xDE), // #B0C4DE
    Color::rgb(0xE6, 0xE6, 0xFA), // #E6E6FA
    Color::rgb(0xDD, 0xA0, 0xDD), // #DDA0DD
];
