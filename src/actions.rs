// src/actions.rs

use crate::event::Modifiers;
use crate::event_names::Key;

/// Window-management actions bound to key releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    GoFullscreen,
    GoWindowed,
    ToggleGrab,
    /// Cursor to a fixed point relative to the window.
    CursorToWindowPoint,
    /// Cursor to a fixed point on the desktop.
    CursorToDesktopPoint,
    ReportWindowPosition,
    MoveWindow,
    ReportDesktopSize,
    ReportWindowSize,
    ResizeWindow,
    ToggleJoystickInfo,
}

/// Maps a released key to its action.
pub fn action_for(key: Key, modifiers: Modifiers) -> Option<Action> {
    let action = match key {
        Key::Escape => Action::Quit,
        Key::F => Action::GoFullscreen,
        Key::N => Action::GoWindowed,
        Key::G => Action::ToggleGrab,
        Key::P => Action::CursorToWindowPoint,
        Key::Q => Action::CursorToDesktopPoint,
        Key::A if modifiers.shift => Action::MoveWindow,
        Key::A => Action::ReportWindowPosition,
        Key::B => Action::ReportDesktopSize,
        Key::C if modifiers.shift => Action::ResizeWindow,
        Key::C => Action::ReportWindowSize,
        Key::J => Action::ToggleJoystickInfo,
        _ => return None,
    };
    Some(action)
}

/// Keybinding reference printed at startup.
pub const HELP: &[(&str, &str)] = &[
    ("Escape", "quit"),
    ("F", "fullscreen"),
    ("N", "windowed"),
    ("G", "toggle cursor grab"),
    ("P", "cursor to (100; 100) in the window"),
    ("Q", "cursor to (100; 100) on the desktop"),
    ("A", "report window position (Shift: move window)"),
    ("B", "report desktop size"),
    ("C", "report window size (Shift: resize to 400x600)"),
    ("J", "toggle joystick info"),
];
