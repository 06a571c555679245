// src/joystick.rs

//! Joystick support backed by gilrs.

use crate::event::Event;
use crate::event_names::JoystickAxis;
use gilrs::{Axis, Button, EventType, Gilrs};

pub fn axis_from_gilrs(axis: Axis) -> JoystickAxis {
    match axis {
        Axis::LeftStickX => JoystickAxis::X,
        Axis::LeftStickY => JoystickAxis::Y,
        Axis::LeftZ => JoystickAxis::Z,
        Axis::RightZ => JoystickAxis::R,
        Axis::RightStickX => JoystickAxis::U,
        Axis::RightStickY => JoystickAxis::V,
        Axis::DPadX => JoystickAxis::PovX,
        Axis::DPadY => JoystickAxis::PovY,
        _ => JoystickAxis::Unknown,
    }
}

const AXES: [Axis; 8] = [
    Axis::LeftStickX,
    Axis::LeftStickY,
    Axis::LeftZ,
    Axis::RightZ,
    Axis::RightStickX,
    Axis::RightStickY,
    Axis::DPadX,
    Axis::DPadY,
];

/// Buttons in index order; a button's index is its position here.
const BUTTONS: [Button; 19] = [
    Button::South,
    Button::East,
    Button::North,
    Button::West,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::LeftTrigger2,
    Button::RightTrigger2,
    Button::Select,
    Button::Start,
    Button::Mode,
    Button::LeftThumb,
    Button::RightThumb,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
    Button::C,
    Button::Z,
];

/// Numeric index reported for a gamepad button.
pub fn joystick_button_index(button: Button) -> Option<u32> {
    BUTTONS
        .iter()
        .position(|candidate| *candidate == button)
        .map(|index| index as u32)
}

/// Converts one gilrs event for gamepad `joystick`.
pub fn translate(joystick: usize, event: &EventType) -> Option<Event> {
    match event {
        EventType::Connected => Some(Event::JoystickConnected { joystick }),
        EventType::Disconnected => Some(Event::JoystickDisconnected { joystick }),
        EventType::ButtonPressed(button, _) => joystick_button_index(*button)
            .map(|button| Event::JoystickButtonPressed { joystick, button }),
        EventType::ButtonReleased(button, _) => joystick_button_index(*button)
            .map(|button| Event::JoystickButtonReleased { joystick, button }),
        EventType::AxisChanged(axis, position, _) => Some(Event::JoystickMoved {
            joystick,
            axis: axis_from_gilrs(*axis),
            position: *position,
        }),
        _ => None,
    }
}

/// What the info panel shows for one gamepad.
#[derive(Debug, Clone, PartialEq)]
pub struct JoystickSnapshot {
    pub id: usize,
    pub name: String,
    pub axes: Vec<(JoystickAxis, f32)>,
    pub pressed: Vec<u32>,
}

/// Owns the gamepad backend. Without a backend it yields nothing.
pub struct JoystickHub {
    gilrs: Option<Gilrs>,
}

impl JoystickHub {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(gilrs::Error::NotImplemented(gilrs)) => {
                log::warn!("Joysticks are not supported on this platform");
                Some(gilrs)
            }
            Err(e) => {
                log::warn!("Failed to initialize joystick support: {}", e);
                None
            }
        };
        Self { gilrs }
    }

    pub fn is_available(&self) -> bool {
        self.gilrs.is_some()
    }

    /// Drains pending gamepad events.
    pub fn poll(&mut self) -> Vec<Event> {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return Vec::new();
        };

        let mut events = Vec::new();
        while let Some(gilrs::Event { id, event, .. }) = gilrs.next_event() {
            if let Some(event) = translate(usize::from(id), &event) {
                events.push(event);
            }
        }
        events
    }

    pub fn snapshots(&self) -> Vec<JoystickSnapshot> {
        let Some(gilrs) = self.gilrs.as_ref() else {
            return Vec::new();
        };

        gilrs
            .gamepads()
            .filter(|(_, gamepad)| gamepad.is_connected())
            .map(|(id, gamepad)| JoystickSnapshot {
                id: usize::from(id),
                name: gamepad.name().to_string(),
                axes: AXES
                    .iter()
                    .map(|axis| (axis_from_gilrs(*axis), gamepad.value(*axis)))
                    .collect(),
                pressed: BUTTONS
                    .iter()
                    .enumerate()
                    .filter(|(_, button)| gamepad.is_pressed(**button))
                    .map(|(index, _)| index as u32)
                    .collect(),
            })
            .collect()
    }
}

impl Default for JoystickHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_map_onto_the_eight_named_axes() {
        let mapped: Vec<JoystickAxis> = AXES.iter().map(|a| axis_from_gilrs(*a)).collect();
        assert_eq!(mapped, JoystickAxis::ALL.to_vec());
        assert_eq!(axis_from_gilrs(Axis::Unknown), JoystickAxis::Unknown);
    }

    #[test]
    fn button_indices_follow_table_order() {
        assert_eq!(joystick_button_index(Button::South), Some(0));
        assert_eq!(joystick_button_index(Button::Start), Some(9));
        assert_eq!(joystick_button_index(Button::Z), Some(18));
        assert_eq!(joystick_button_index(Button::Unknown), None);
    }

    #[test]
    fn connection_events_translate() {
        assert_eq!(
            translate(2, &EventType::Connected),
            Some(Event::JoystickConnected { joystick: 2 })
        );
        assert_eq!(
            translate(2, &EventType::Disconnected),
            Some(Event::JoystickDisconnected { joystick: 2 })
        );
        assert_eq!(translate(2, &EventType::Dropped), None);
    }
}
