// src/ui.rs

pub mod joystick_info;
pub mod overlay;
pub mod surface;

use crate::joystick::JoystickSnapshot;
use crate::logging::LineSink;
use crate::scroll_log::ScrollLog;
use egui::emath::TSTransform;
use egui::Pos2;
use surface::Surface;

/// Everything drawn in one frame.
pub struct Scene<'a, S: LineSink> {
    pub log: &'a ScrollLog<S>,
    pub window_count: u32,
    pub cursor: Pos2,
    pub cursor_radius: f32,
    pub grid_spacing: u32,
    /// Present when the joystick panel is shown.
    pub joysticks: Option<(Pos2, &'a [JoystickSnapshot])>,
}

/// Draws the scene back to front.
pub fn draw_scene<S: LineSink>(surface: &mut dyn Surface, scene: &Scene<'_, S>) {
    scene.log.render(surface, TSTransform::IDENTITY);
    overlay::draw_window_count(surface, scene.window_count);
    overlay::draw_border(surface);
    overlay::draw_grid(surface, scene.grid_spacing);
    overlay::draw_cursor(surface, scene.cursor, scene.cursor_radius);

    if let Some((origin, joysticks)) = scene.joysticks {
        joystick_info::draw_joystick_info(surface, origin, joysticks);
    }
}
