// src/input.rs

//! Translation of winit window events into harness [`Event`]s.

use crate::event::{Event, Modifiers, Wheel};
use crate::event_names::{Key, MouseButton};
use crate::utils::to_pixel;
use winit::event::{ElementState, MouseScrollDelta, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

/// Maps a physical key code to a harness key.
pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,
        KeyCode::Digit0 => Key::Num0,
        KeyCode::Digit1 => Key::Num1,
        KeyCode::Digit2 => Key::Num2,
        KeyCode::Digit3 => Key::Num3,
        KeyCode::Digit4 => Key::Num4,
        KeyCode::Digit5 => Key::Num5,
        KeyCode::Digit6 => Key::Num6,
        KeyCode::Digit7 => Key::Num7,
        KeyCode::Digit8 => Key::Num8,
        KeyCode::Digit9 => Key::Num9,
        KeyCode::Escape => Key::Escape,
        KeyCode::ControlLeft => Key::LControl,
        KeyCode::ShiftLeft => Key::LShift,
        KeyCode::AltLeft => Key::LAlt,
        KeyCode::SuperLeft => Key::LSystem,
        KeyCode::ControlRight => Key::RControl,
        KeyCode::ShiftRight => Key::RShift,
        KeyCode::AltRight => Key::RAlt,
        KeyCode::SuperRight => Key::RSystem,
        KeyCode::ContextMenu => Key::Menu,
        KeyCode::BracketLeft => Key::LBracket,
        KeyCode::BracketRight => Key::RBracket,
        KeyCode::Semicolon => Key::SemiColon,
        KeyCode::Comma => Key::Comma,
        KeyCode::Period => Key::Period,
        KeyCode::Quote => Key::Quote,
        KeyCode::Slash => Key::Slash,
        KeyCode::Backslash => Key::BackSlash,
        KeyCode::Backquote => Key::Tilde,
        KeyCode::Equal => Key::Equal,
        KeyCode::Minus => Key::Dash,
        KeyCode::Space => Key::Space,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Return,
        KeyCode::Backspace => Key::BackSpace,
        KeyCode::Tab => Key::Tab,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::End => Key::End,
        KeyCode::Home => Key::Home,
        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        KeyCode::NumpadAdd => Key::Add,
        KeyCode::NumpadSubtract => Key::Subtract,
        KeyCode::NumpadMultiply => Key::Multiply,
        KeyCode::NumpadDivide => Key::Divide,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::Numpad0 => Key::Numpad0,
        KeyCode::Numpad1 => Key::Numpad1,
        KeyCode::Numpad2 => Key::Numpad2,
        KeyCode::Numpad3 => Key::Numpad3,
        KeyCode::Numpad4 => Key::Numpad4,
        KeyCode::Numpad5 => Key::Numpad5,
        KeyCode::Numpad6 => Key::Numpad6,
        KeyCode::Numpad7 => Key::Numpad7,
        KeyCode::Numpad8 => Key::Numpad8,
        KeyCode::Numpad9 => Key::Numpad9,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::F13 => Key::F13,
        KeyCode::F14 => Key::F14,
        KeyCode::F15 => Key::F15,
        KeyCode::Pause => Key::Pause,
        _ => Key::Unknown,
    }
}

pub fn button_from_winit(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::XButton1,
        winit::event::MouseButton::Forward => MouseButton::XButton2,
        winit::event::MouseButton::Other(_) => MouseButton::Unknown,
    }
}

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Modifiers {
            shift: state.shift_key(),
            control: state.control_key(),
            alt: state.alt_key(),
            system: state.super_key(),
        }
    }
}

/// Converts window events, tracking the cursor position and modifier keys
/// that winit reports separately.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: (i32, i32),
    modifiers: Modifiers,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in window pixels.
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Forgets the cursor position; a new window has not reported one yet.
    pub fn reset_cursor(&mut self) {
        self.cursor = (0, 0);
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Vec<Event> {
        match event {
            WindowEvent::CloseRequested => vec![Event::Closed],
            WindowEvent::Resized(size) => vec![Event::Resized {
                width: size.width,
                height: size.height,
            }],
            WindowEvent::Focused(true) => vec![Event::GainedFocus],
            WindowEvent::Focused(false) => vec![Event::LostFocus],
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers_changed(modifiers.state());
                Vec::new()
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.key(event.physical_key, event.state, event.text.as_deref())
            }
            WindowEvent::CursorMoved { position, .. } => {
                vec![self.cursor_moved(position.x, position.y)]
            }
            WindowEvent::CursorEntered { .. } => vec![Event::MouseEntered],
            WindowEvent::CursorLeft { .. } => vec![Event::MouseLeft],
            WindowEvent::MouseWheel { delta, .. } => self.wheel(*delta),
            WindowEvent::MouseInput { state, button, .. } => vec![self.button(*button, *state)],
            WindowEvent::Touch(touch) => vec![Self::touch(
                touch.phase,
                touch.id,
                touch.location.x,
                touch.location.y,
            )],
            _ => Vec::new(),
        }
    }

    pub fn modifiers_changed(&mut self, state: ModifiersState) {
        self.modifiers = state.into();
    }

    /// A key press followed by one `TextEntered` per produced character.
    pub fn key(&self, key: PhysicalKey, state: ElementState, text: Option<&str>) -> Vec<Event> {
        let key = match key {
            PhysicalKey::Code(code) => key_from_code(code),
            PhysicalKey::Unidentified(_) => Key::Unknown,
        };
        let modifiers = self.modifiers;

        match state {
            ElementState::Pressed => {
                let mut events = vec![Event::KeyPressed { key, modifiers }];
                if let Some(text) = text {
                    events.extend(text.chars().map(|ch| Event::TextEntered { ch }));
                }
                events
            }
            ElementState::Released => vec![Event::KeyReleased { key, modifiers }],
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Event {
        self.cursor = (to_pixel(x), to_pixel(y));
        Event::MouseMoved {
            x: self.cursor.0,
            y: self.cursor.1,
        }
    }

    /// One event per non-zero axis; pixel deltas are reported unscaled.
    pub fn wheel(&self, delta: MouseScrollDelta) -> Vec<Event> {
        let (horizontal, vertical) = match delta {
            MouseScrollDelta::LineDelta(x, y) => (x, y),
            MouseScrollDelta::PixelDelta(position) => (position.x as f32, position.y as f32),
        };
        let (x, y) = self.cursor;

        [(Wheel::Vertical, vertical), (Wheel::Horizontal, horizontal)]
            .into_iter()
            .filter(|(_, delta)| *delta != 0.0)
            .map(|(wheel, delta)| Event::MouseWheelScrolled { wheel, delta, x, y })
            .collect()
    }

    pub fn button(&self, button: winit::event::MouseButton, state: ElementState) -> Event {
        let button = button_from_winit(button);
        let (x, y) = self.cursor;
        match state {
            ElementState::Pressed => Event::MouseButtonPressed { button, x, y },
            ElementState::Released => Event::MouseButtonReleased { button, x, y },
        }
    }

    pub fn touch(phase: TouchPhase, finger: u64, x: f64, y: f64) -> Event {
        let (x, y) = (to_pixel(x), to_pixel(y));
        match phase {
            TouchPhase::Started => Event::TouchBegan { finger, x, y },
            TouchPhase::Moved => Event::TouchMoved { finger, x, y },
            TouchPhase::Ended | TouchPhase::Cancelled => Event::TouchEnded { finger, x, y },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_names::Named;
    use winit::dpi::PhysicalSize;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn letter_and_digit_codes() {
        assert_eq!(key_from_code(KeyCode::KeyA), Key::A);
        assert_eq!(key_from_code(KeyCode::KeyZ), Key::Z);
        assert_eq!(key_from_code(KeyCode::Digit5), Key::Num5);
        assert_eq!(key_from_code(KeyCode::Numpad5), Key::Numpad5);
        assert_eq!(key_from_code(KeyCode::Backquote), Key::Tilde);
        assert_eq!(key_from_code(KeyCode::F16), Key::Unknown);
    }

    #[test]
    fn mapped_codes_are_distinct() {
        let codes = [
            KeyCode::ShiftLeft,
            KeyCode::ShiftRight,
            KeyCode::ControlLeft,
            KeyCode::ControlRight,
            KeyCode::AltLeft,
            KeyCode::AltRight,
            KeyCode::SuperLeft,
            KeyCode::SuperRight,
        ];
        let mut ordinals: Vec<usize> = codes.iter().map(|c| key_from_code(*c).ordinal()).collect();
        ordinals.sort_unstable();
        ordinals.dedup();
        assert_eq!(ordinals.len(), codes.len());
    }

    #[test]
    fn mouse_buttons() {
        use winit::event::MouseButton as W;
        assert_eq!(button_from_winit(W::Left), MouseButton::Left);
        assert_eq!(button_from_winit(W::Back), MouseButton::XButton1);
        assert_eq!(button_from_winit(W::Forward), MouseButton::XButton2);
        assert_eq!(button_from_winit(W::Other(9)), MouseButton::Unknown);
    }

    #[test]
    fn key_press_emits_text_after_the_key() {
        let translator = InputTranslator::new();
        let events = translator.key(
            PhysicalKey::Code(KeyCode::KeyA),
            ElementState::Pressed,
            Some("a"),
        );
        assert_eq!(
            events,
            vec![
                Event::KeyPressed {
                    key: Key::A,
                    modifiers: Modifiers::default()
                },
                Event::TextEntered { ch: 'a' },
            ]
        );
    }

    #[test]
    fn key_release_carries_current_modifiers() {
        let mut translator = InputTranslator::new();
        translator.modifiers_changed(ModifiersState::SHIFT);
        let events = translator.key(
            PhysicalKey::Code(KeyCode::KeyC),
            ElementState::Released,
            None,
        );
        assert_eq!(
            events,
            vec![Event::KeyReleased {
                key: Key::C,
                modifiers: Modifiers {
                    shift: true,
                    ..Default::default()
                }
            }]
        );
    }

    #[test]
    fn unidentified_keys_are_unknown() {
        let translator = InputTranslator::new();
        let events = translator.key(
            PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            ElementState::Pressed,
            None,
        );
        assert_eq!(
            events,
            vec![Event::KeyPressed {
                key: Key::Unknown,
                modifiers: Modifiers::default()
            }]
        );
    }

    #[test]
    fn buttons_and_wheel_use_last_cursor_position() {
        let mut translator = InputTranslator::new();
        translator.cursor_moved(120.4, 80.6);
        assert_eq!(translator.cursor(), (120, 81));

        assert_eq!(
            translator.button(winit::event::MouseButton::Right, ElementState::Pressed),
            Event::MouseButtonPressed {
                button: MouseButton::Right,
                x: 120,
                y: 81
            }
        );

        let events = translator.wheel(MouseScrollDelta::LineDelta(0.0, -1.0));
        assert_eq!(
            events,
            vec![Event::MouseWheelScrolled {
                wheel: Wheel::Vertical,
                delta: -1.0,
                x: 120,
                y: 81
            }]
        );
    }

    #[test]
    fn reset_cursor_forgets_the_old_window_position() {
        let mut translator = InputTranslator::new();
        translator.modifiers_changed(ModifiersState::SHIFT);
        translator.cursor_moved(300.0, 200.0);
        translator.reset_cursor();

        assert_eq!(translator.cursor(), (0, 0));
        assert_eq!(
            translator.button(winit::event::MouseButton::Left, ElementState::Pressed),
            Event::MouseButtonPressed {
                button: MouseButton::Left,
                x: 0,
                y: 0
            }
        );
        let events = translator.key(
            PhysicalKey::Code(KeyCode::KeyA),
            ElementState::Released,
            None,
        );
        assert!(matches!(
            events[0],
            Event::KeyReleased { modifiers, .. } if modifiers.shift
        ));
    }

    #[test]
    fn diagonal_scroll_reports_both_wheels() {
        let translator = InputTranslator::new();
        let events = translator.wheel(MouseScrollDelta::LineDelta(2.0, 1.0));
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[1],
            Event::MouseWheelScrolled {
                wheel: Wheel::Horizontal,
                ..
            }
        ));
    }

    #[test]
    fn window_events() {
        let mut translator = InputTranslator::new();
        assert_eq!(
            translator.translate(&WindowEvent::Resized(PhysicalSize::new(640, 480))),
            vec![Event::Resized {
                width: 640,
                height: 480
            }]
        );
        assert_eq!(
            translator.translate(&WindowEvent::Focused(false)),
            vec![Event::LostFocus]
        );
        assert_eq!(
            translator.translate(&WindowEvent::CloseRequested),
            vec![Event::Closed]
        );
    }

    #[test]
    fn cancelled_touch_ends() {
        assert_eq!(
            InputTranslator::touch(TouchPhase::Cancelled, 3, 1.0, 2.0),
            Event::TouchEnded {
                finger: 3,
                x: 1,
                y: 2
            }
        );
    }
}
