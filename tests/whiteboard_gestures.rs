//! End-to-end gesture scenarios through the public library API, driven the
//! way a host panel drives the core: raw event coordinates mapped into
//! surface space, then fed to the pointer handlers.

use macxp::whiteboard::mapper::{map_pointer, DisplayRect};
use macxp::whiteboard::model::{Color, Point, StrokeStyle, Tool};
use macxp::whiteboard::Whiteboard;

const BACKGROUND: Color = Color::WHITE;

fn board(tool: Tool) -> Whiteboard {
    let mut board = Whiteboard::new(320, 240, BACKGROUND, StrokeStyle::default());
    board.select_tool(tool);
    board
}

fn committed_pixel(board: &Whiteboard, x: u32, y: u32) -> [u8; 4] {
    let (w, _) = board.surface().size();
    let idx = ((y * w + x) * 4) as usize;
    let px = &board.surface().committed_rgba()[idx..idx + 4];
    [px[0], px[1], px[2], px[3]]
}

fn preview_pixel(board: &Whiteboard, x: u32, y: u32) -> [u8; 4] {
    let (w, _) = board.surface().size();
    let idx = ((y * w + x) * 4) as usize;
    let px = &board.surface().preview_rgba()[idx..idx + 4];
    [px[0], px[1], px[2], px[3]]
}

fn committed_ink(board: &Whiteboard) -> usize {
    board
        .surface()
        .committed_rgba()
        .chunks_exact(4)
        .filter(|px| **px != BACKGROUND.to_rgba_array())
        .count()
}

#[test]
fn rectangle_gesture_previews_then_commits() {
    let mut board = board(Tool::Rect);
    board.pointer_down(Point::new(10.0, 10.0));
    board.pointer_move(Point::new(110.0, 60.0));

    // rubber-banded outline on the preview layer only
    assert_eq!(preview_pixel(&board, 10, 10), [0, 0, 0, 255]);
    assert_eq!(preview_pixel(&board, 110, 60), [0, 0, 0, 255]);
    assert_eq!(committed_ink(&board), 0);

    board.pointer_up(Point::new(110.0, 60.0));

    assert!(board.surface().preview_is_clear());
    assert_eq!(committed_pixel(&board, 10, 10), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 110, 10), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 10, 60), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 110, 60), [0, 0, 0, 255]);
    // outline only, no fill
    assert_eq!(committed_pixel(&board, 60, 35), BACKGROUND.to_rgba_array());
}

#[test]
fn eraser_lays_a_background_stroke_over_ink() {
    let mut board = board(Tool::Brush);
    board.set_width(4);
    board.pointer_down(Point::new(30.0, 50.0));
    board.pointer_move(Point::new(120.0, 50.0));
    board.pointer_up(Point::new(120.0, 50.0));
    assert_eq!(committed_pixel(&board, 80, 50), [0, 0, 0, 255]);

    board.select_tool(Tool::Eraser);
    board.set_width(5);
    board.pointer_down(Point::new(50.0, 50.0));
    board.pointer_move(Point::new(80.0, 50.0));
    board.pointer_up(Point::new(80.0, 50.0));

    for x in 50..=80 {
        assert_eq!(committed_pixel(&board, x, 50), BACKGROUND.to_rgba_array());
    }
    assert_eq!(committed_pixel(&board, 40, 50), [0, 0, 0, 255]);
}

#[test]
fn pointer_leave_commits_the_active_line() {
    let mut board = board(Tool::Line);
    board.pointer_down(Point::new(0.0, 0.0));
    board.pointer_move(Point::new(150.0, 150.0));
    board.pointer_leave(Point::new(200.0, 200.0));

    assert!(board.surface().preview_is_clear());
    assert!(!board.gesture_active());
    assert_eq!(committed_pixel(&board, 0, 0), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 100, 100), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 200, 200), [0, 0, 0, 255]);
}

#[test]
fn stray_moves_and_ups_change_nothing() {
    let mut board = board(Tool::Pencil);
    let committed_before = board.surface().committed_rgba().to_vec();

    for step in 0..5 {
        board.pointer_move(Point::new(step as f32 * 10.0, 40.0));
    }
    board.pointer_up(Point::new(60.0, 60.0));
    board.pointer_leave(Point::new(70.0, 70.0));

    assert_eq!(board.surface().committed_rgba(), &committed_before[..]);
    assert!(board.surface().preview_is_clear());
}

#[test]
fn negative_extent_rectangle_spans_the_opposite_corner() {
    let mut board = board(Tool::Rect);
    board.pointer_down(Point::new(100.0, 100.0));
    board.pointer_move(Point::new(40.0, 40.0));
    board.pointer_up(Point::new(40.0, 40.0));

    assert_eq!(committed_pixel(&board, 40, 40), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 100, 40), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 40, 100), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 100, 100), [0, 0, 0, 255]);
}

#[test]
fn scaled_display_rect_still_lands_strokes_on_surface_pixels() {
    // the surface shown at half size, offset inside the window
    let display = DisplayRect {
        left: 60.0,
        top: 40.0,
        width: 160.0,
        height: 120.0,
    };
    let mut board = board(Tool::Pencil);
    let intrinsic = board.surface().size();

    // event coordinates for surface points (100,100) and (200,100)
    let down = map_pointer(60.0 + 50.0, 40.0 + 50.0, display, intrinsic).unwrap();
    let to = map_pointer(60.0 + 100.0, 40.0 + 50.0, display, intrinsic).unwrap();
    board.pointer_down(down);
    board.pointer_move(to);
    board.pointer_up(to);

    assert_eq!(committed_pixel(&board, 100, 100), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 150, 100), [0, 0, 0, 255]);
    assert_eq!(committed_pixel(&board, 200, 100), [0, 0, 0, 255]);
    // nothing at the raw event coordinates themselves
    assert_eq!(committed_pixel(&board, 110, 90), BACKGROUND.to_rgba_array());
}

#[test]
fn shape_gesture_sequence_keeps_preview_transient() {
    let mut board = board(Tool::Ellipse);
    board.pointer_down(Point::new(50.0, 50.0));
    for step in 1..=8 {
        board.pointer_move(Point::new(50.0 + step as f32 * 10.0, 50.0 + step as f32 * 5.0));
        assert_eq!(committed_ink(&board), 0, "committed before release");
    }
    board.pointer_up(Point::new(130.0, 90.0));
    assert!(board.surface().preview_is_clear());
    assert!(committed_ink(&board) > 0);
}
