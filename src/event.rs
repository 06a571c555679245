// src/event.rs

use crate::event_names::{EventKind, JoystickAxis, Key, MouseButton};

/// Modifier keys held when a key event fired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub system: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.control || self.alt || self.system)
    }

    /// Held modifiers joined with `+`, e.g. `shift+control`.
    pub fn describe(&self) -> String {
        [
            (self.shift, "shift"),
            (self.control, "control"),
            (self.alt, "alt"),
            (self.system, "system"),
        ]
        .iter()
        .filter(|(held, _)| *held)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join("+")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wheel {
    Vertical,
    Horizontal,
}

impl Wheel {
    pub fn name(self) -> &'static str {
        match self {
            Wheel::Vertical => "VerticalWheel",
            Wheel::Horizontal => "HorizontalWheel",
        }
    }
}

/// One input or window event, normalized away from the platform backends.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Closed,
    Resized { width: u32, height: u32 },
    LostFocus,
    GainedFocus,
    TextEntered { ch: char },
    KeyPressed { key: Key, modifiers: Modifiers },
    KeyReleased { key: Key, modifiers: Modifiers },
    MouseWheelScrolled { wheel: Wheel, delta: f32, x: i32, y: i32 },
    MouseButtonPressed { button: MouseButton, x: i32, y: i32 },
    MouseButtonReleased { button: MouseButton, x: i32, y: i32 },
    MouseMoved { x: i32, y: i32 },
    MouseEntered,
    MouseLeft,
    JoystickButtonPressed { joystick: usize, button: u32 },
    JoystickButtonReleased { joystick: usize, button: u32 },
    JoystickMoved { joystick: usize, axis: JoystickAxis, position: f32 },
    JoystickConnected { joystick: usize },
    JoystickDisconnected { joystick: usize },
    TouchBegan { finger: u64, x: i32, y: i32 },
    TouchMoved { finger: u64, x: i32, y: i32 },
    TouchEnded { finger: u64, x: i32, y: i32 },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Closed => EventKind::Closed,
            Event::Resized { .. } => EventKind::Resized,
            Event::LostFocus => EventKind::LostFocus,
            Event::GainedFocus => EventKind::GainedFocus,
            Event::TextEntered { .. } => EventKind::TextEntered,
            Event::KeyPressed { .. } => EventKind::KeyPressed,
            Event::KeyReleased { .. } => EventKind::KeyReleased,
            Event::MouseWheelScrolled { .. } => EventKind::MouseWheelScrolled,
            Event::MouseButtonPressed { .. } => EventKind::MouseButtonPressed,
            Event::MouseButtonReleased { .. } => EventKind::MouseButtonReleased,
            Event::MouseMoved { .. } => EventKind::MouseMoved,
            Event::MouseEntered => EventKind::MouseEntered,
            Event::MouseLeft => EventKind::MouseLeft,
            Event::JoystickButtonPressed { .. } => EventKind::JoystickButtonPressed,
            Event::JoystickButtonReleased { .. } => EventKind::JoystickButtonReleased,
            Event::JoystickMoved { .. } => EventKind::JoystickMoved,
            Event::JoystickConnected { .. } => EventKind::JoystickConnected,
            Event::JoystickDisconnected { .. } => EventKind::JoystickDisconnected,
            Event::TouchBegan { .. } => EventKind::TouchBegan,
            Event::TouchMoved { .. } => EventKind::TouchMoved,
            Event::TouchEnded { .. } => EventKind::TouchEnded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_describe_held_keys() {
        assert_eq!(Modifiers::default().describe(), "");
        assert!(Modifiers::default().is_empty());

        let held = Modifiers {
            shift: true,
            alt: true,
            ..Default::default()
        };
        assert_eq!(held.describe(), "shift+alt");
        assert!(!held.is_empty());
    }

    #[test]
    fn kinds_match_variants() {
        assert_eq!(
            Event::Resized {
                width: 1,
                height: 2
            }
            .kind(),
            EventKind::Resized
        );
        assert_eq!(Event::MouseMoved { x: 0, y: 0 }.kind(), EventKind::MouseMoved);
        assert_eq!(
            Event::JoystickConnected { joystick: 0 }.kind(),
            EventKind::JoystickConnected
        );
    }
}
