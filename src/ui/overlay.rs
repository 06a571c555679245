use crate::constants::{BORDER_THICKNESS, GRID_LINE_THICKNESS, WINDOW_COUNT_FONT_SIZE};
use crate::ui::surface::Surface;
use egui::{pos2, Color32, Pos2, Rect};

/// Draws the window counter at the centre of the window.
pub fn draw_window_count(surface: &mut dyn Surface, count: u32) {
    let center = (surface.size() / 2.0).to_pos2();
    surface.text(
        center,
        &count.to_string(),
        WINDOW_COUNT_FONT_SIZE,
        Color32::YELLOW,
    );
}

/// Draws a border along the inside edge of the window.
pub fn draw_border(surface: &mut dyn Surface) {
    let rect = Rect::from_min_size(Pos2::ZERO, surface.size());
    surface.rect_outline(rect, BORDER_THICKNESS, Color32::WHITE);
}

/// Draws grid lines every `spacing` pixels, starting at the origin.
pub fn draw_grid(surface: &mut dyn Surface, spacing: u32) {
    if spacing == 0 {
        return;
    }
    let size = surface.size();
    let step = spacing as f32;

    let mut y = 0.0;
    while y <= size.y {
        surface.line(
            pos2(0.0, y),
            pos2(size.x, y),
            GRID_LINE_THICKNESS,
            Color32::GREEN,
        );
        y += step;
    }

    let mut x = 0.0;
    while x <= size.x {
        surface.line(
            pos2(x, 0.0),
            pos2(x, size.y),
            GRID_LINE_THICKNESS,
            Color32::GREEN,
        );
        x += step;
    }
}

/// Marks the mouse position.
pub fn draw_cursor(surface: &mut dyn Surface, position: Pos2, radius: f32) {
    surface.circle(position, radius, Color32::RED);
}
