use crate::constants::{JOYSTICK_FONT_SIZE, LINE_SPACING};
use crate::joystick::JoystickSnapshot;
use crate::ui::surface::Surface;
use egui::{Color32, Pos2};

/// Text lines describing every connected joystick.
pub fn info_lines(joysticks: &[JoystickSnapshot]) -> Vec<String> {
    if joysticks.is_empty() {
        return vec!["No joystick connected".to_string()];
    }

    let mut lines = Vec::new();
    for joystick in joysticks {
        lines.push(format!("Joystick {}: {}", joystick.id, joystick.name));
        for (axis, value) in &joystick.axes {
            lines.push(format!("  {}: {:+.2}", axis.name(), value));
        }
        let pressed = if joystick.pressed.is_empty() {
            "none".to_string()
        } else {
            joystick
                .pressed
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        lines.push(format!("  buttons: {}", pressed));
    }
    lines
}

pub fn draw_joystick_info(surface: &mut dyn Surface, origin: Pos2, joysticks: &[JoystickSnapshot]) {
    let line_height = JOYSTICK_FONT_SIZE * LINE_SPACING;
    for (i, line) in info_lines(joysticks).iter().enumerate() {
        let pos = origin + egui::vec2(0.0, i as f32 * line_height);
        surface.text(pos, line, JOYSTICK_FONT_SIZE, Color32::LIGHT_BLUE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_names::JoystickAxis;

    #[test]
    fn placeholder_without_joysticks() {
        assert_eq!(info_lines(&[]), vec!["No joystick connected".to_string()]);
    }

    #[test]
    fn describes_axes_and_buttons() {
        let snapshot = JoystickSnapshot {
            id: 0,
            name: "Pad".to_string(),
            axes: vec![(JoystickAxis::X, 0.5), (JoystickAxis::PovY, -1.0)],
            pressed: vec![0, 9],
        };
        assert_eq!(
            info_lines(&[snapshot]),
            vec![
                "Joystick 0: Pad".to_string(),
                "  X: +0.50".to_string(),
                "  PovY: -1.00".to_string(),
                "  buttons: 0, 9".to_string(),
            ]
        );
    }
}
