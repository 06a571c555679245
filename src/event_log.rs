// src/event_log.rs

use crate::event::Event;
use crate::event_names::EventKind;

/// Turns events into log messages.
///
/// Remembers only the previous event's kind, to log a run of consecutive
/// mouse moves once.
#[derive(Debug)]
pub struct EventRecorder {
    last_kind: EventKind,
}

impl Default for EventRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRecorder {
    pub fn new() -> Self {
        Self {
            last_kind: EventKind::Unknown,
        }
    }

    /// Returns the message for `event`, or `None` if it continues a run of
    /// mouse moves.
    pub fn record(&mut self, event: &Event) -> Option<String> {
        let kind = event.kind();
        let suppressed = kind == EventKind::MouseMoved && self.last_kind == EventKind::MouseMoved;
        self.last_kind = kind;

        if suppressed {
            None
        } else {
            Some(describe(event))
        }
    }
}

/// Single-line description of an event, prefixed with its kind name.
pub fn describe(event: &Event) -> String {
    let kind = event.kind().name();
    match event {
        Event::Closed
        | Event::LostFocus
        | Event::GainedFocus
        | Event::MouseEntered
        | Event::MouseLeft => kind.to_string(),
        Event::Resized { width, height } => pair!(kind, width, height),
        Event::TextEntered { ch } => {
            format!("{}: {:?} (U+{:04X})", kind, ch, u32::from(*ch))
        }
        Event::KeyPressed { key, modifiers } | Event::KeyReleased { key, modifiers } => {
            let verb = if matches!(event, Event::KeyPressed { .. }) {
                "was pressed"
            } else {
                "was released"
            };
            if modifiers.is_empty() {
                format!("{}: {} {}", kind, key.name(), verb)
            } else {
                format!(
                    "{}: {} {} [{}]",
                    kind,
                    key.name(),
                    verb,
                    modifiers.describe()
                )
            }
        }
        Event::MouseWheelScrolled { wheel, delta, x, y } => format!(
            "{}: {} delta = {} at ({}; {})",
            kind,
            wheel.name(),
            delta,
            x,
            y
        ),
        Event::MouseButtonPressed { button, x, y }
        | Event::MouseButtonReleased { button, x, y } => {
            format!("{}: {} at ({}; {})", kind, button.name(), x, y)
        }
        Event::MouseMoved { x, y } => pair!(kind, x, y),
        Event::JoystickButtonPressed { joystick, button }
        | Event::JoystickButtonReleased { joystick, button } => {
            format!("{}: joystick {} button {}", kind, joystick, button)
        }
        Event::JoystickMoved {
            joystick,
            axis,
            position,
        } => format!(
            "{}: joystick {} {} = {:.2}",
            kind,
            joystick,
            axis.name(),
            position
        ),
        Event::JoystickConnected { joystick } | Event::JoystickDisconnected { joystick } => {
            format!("{}: joystick {}", kind, joystick)
        }
        Event::TouchBegan { finger, x, y }
        | Event::TouchMoved { finger, x, y }
        | Event::TouchEnded { finger, x, y } => {
            format!("{}: finger {} at ({}; {})", kind, finger, x, y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Modifiers, Wheel};
    use crate::event_names::{JoystickAxis, Key, MouseButton};

    fn moved(x: i32, y: i32) -> Event {
        Event::MouseMoved { x, y }
    }

    fn key(key: Key) -> Event {
        Event::KeyPressed {
            key,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn consecutive_moves_log_once() {
        let mut recorder = EventRecorder::new();
        let logged: Vec<String> = [moved(1, 1), moved(2, 2), moved(3, 3)]
            .iter()
            .filter_map(|e| recorder.record(e))
            .collect();
        assert_eq!(logged, vec!["MouseMoved: (1; 1)".to_string()]);
    }

    #[test]
    fn interrupted_runs_log_each_move() {
        let mut recorder = EventRecorder::new();
        let logged: Vec<String> = [moved(1, 1), key(Key::A), moved(5, 6)]
            .iter()
            .filter_map(|e| recorder.record(e))
            .collect();
        assert_eq!(
            logged,
            vec![
                "MouseMoved: (1; 1)".to_string(),
                "KeyPressed: A was pressed".to_string(),
                "MouseMoved: (5; 6)".to_string(),
            ]
        );
    }

    #[test]
    fn resize_logs_one_message_with_both_dimensions() {
        let mut recorder = EventRecorder::new();
        let message = recorder
            .record(&Event::Resized {
                width: 1024,
                height: 768,
            })
            .unwrap();
        assert_eq!(message, "Resized: (1024; 768)");
    }

    #[test]
    fn other_kinds_are_never_suppressed() {
        let mut recorder = EventRecorder::new();
        assert!(recorder.record(&Event::GainedFocus).is_some());
        assert!(recorder.record(&Event::GainedFocus).is_some());
        let joystick = Event::JoystickMoved {
            joystick: 0,
            axis: JoystickAxis::X,
            position: 0.5,
        };
        assert!(recorder.record(&joystick).is_some());
        assert!(recorder.record(&joystick).is_some());
    }

    #[test]
    fn descriptions() {
        assert_eq!(describe(&Event::Closed), "Closed");
        assert_eq!(
            describe(&Event::KeyReleased {
                key: Key::C,
                modifiers: Modifiers {
                    shift: true,
                    ..Default::default()
                },
            }),
            "KeyReleased: C was released [shift]"
        );
        assert_eq!(
            describe(&Event::MouseButtonPressed {
                button: MouseButton::Right,
                x: 10,
                y: 20
            }),
            "MouseButtonPressed: Right at (10; 20)"
        );
        assert_eq!(
            describe(&Event::MouseWheelScrolled {
                wheel: Wheel::Vertical,
                delta: -1.0,
                x: 3,
                y: 4
            }),
            "MouseWheelScrolled: VerticalWheel delta = -1 at (3; 4)"
        );
        assert_eq!(
            describe(&Event::TextEntered { ch: 'a' }),
            "TextEntered: 'a' (U+0061)"
        );
        assert_eq!(
            describe(&Event::JoystickMoved {
                joystick: 1,
                axis: JoystickAxis::PovX,
                position: -1.0
            }),
            "JoystickMoved: joystick 1 PovX = -1.00"
        );
        assert_eq!(
            describe(&Event::JoystickButtonPressed {
                joystick: 0,
                button: 3
            }),
            "JoystickButtonPressed: joystick 0 button 3"
        );
    }
}
