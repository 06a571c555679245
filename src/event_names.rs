// src/event_names.rs

//! Human-readable names for keys, mouse buttons, joystick axes and event
//! kinds. Each enumeration is backed by a static table indexed by ordinal.

use crate::errors::{HarnessError, HarnessResult};
use std::collections::HashSet;

/// Name returned for the sentinel and for any ordinal outside a table.
pub const UNKNOWN: &str = "Unknown";

pub const KEY_COUNT: usize = 101;
pub const MOUSE_BUTTON_COUNT: usize = 5;
pub const JOYSTICK_AXIS_COUNT: usize = 8;

/// A closed enumeration with a static name table.
pub trait Named: Copy {
    const COUNT: usize;
    const TABLE: &'static [&'static str];

    fn ordinal(self) -> usize;
}

/// Resolves a value to its name; the sentinel resolves to [`UNKNOWN`].
pub fn name_of<T: Named>(value: T) -> &'static str {
    name_at_ordinal::<T>(value.ordinal())
}

/// Resolves a raw ordinal. Out-of-range ordinals resolve to [`UNKNOWN`].
pub fn name_at_ordinal<T: Named>(ordinal: usize) -> &'static str {
    T::TABLE.get(ordinal).copied().unwrap_or(UNKNOWN)
}

named_enum! {
    /// Keyboard keys.
    pub enum Key {
        A, B, C, D, E, F, G, H, I, J, K, L, M,
        N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
        Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,
        Escape,
        LControl, LShift, LAlt, LSystem,
        RControl, RShift, RAlt, RSystem,
        Menu,
        LBracket, RBracket, SemiColon, Comma, Period, Quote, Slash, BackSlash,
        Tilde, Equal, Dash, Space, Return, BackSpace, Tab,
        PageUp, PageDown, End, Home, Insert, Delete,
        Add, Subtract, Multiply, Divide,
        Left, Right, Up, Down,
        Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
        Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
        F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15,
        Pause,
    }
}

named_enum! {
    /// Mouse buttons.
    pub enum MouseButton {
        Left, Right, Middle, XButton1, XButton2,
    }
}

named_enum! {
    /// Joystick axes.
    pub enum JoystickAxis {
        X, Y, Z, R, U, V, PovX, PovY,
    }
}

named_enum! {
    /// Discriminant of every event the harness produces.
    pub enum EventKind {
        Closed,
        Resized,
        LostFocus,
        GainedFocus,
        TextEntered,
        KeyPressed,
        KeyReleased,
        MouseWheelScrolled,
        MouseButtonPressed,
        MouseButtonReleased,
        MouseMoved,
        MouseEntered,
        MouseLeft,
        JoystickButtonPressed,
        JoystickButtonReleased,
        JoystickMoved,
        JoystickConnected,
        JoystickDisconnected,
        TouchBegan,
        TouchMoved,
        TouchEnded,
    }
}

const _: () = assert!(Key::ALL.len() == KEY_COUNT);
const _: () = assert!(MouseButton::ALL.len() == MOUSE_BUTTON_COUNT);
const _: () = assert!(JoystickAxis::ALL.len() == JOYSTICK_AXIS_COUNT);

/// Startup consistency check over every name table.
///
/// Catches a table drifting out of step with its enumeration: wrong length,
/// empty or duplicate entries, or an entry shadowing the sentinel.
pub fn verify_tables() -> HarnessResult<()> {
    verify::<Key>("Key", Some(KEY_COUNT))?;
    verify::<MouseButton>("MouseButton", Some(MOUSE_BUTTON_COUNT))?;
    verify::<JoystickAxis>("JoystickAxis", Some(JOYSTICK_AXIS_COUNT))?;
    verify::<EventKind>("EventKind", None)?;
    Ok(())
}

fn verify<T: Named>(table: &'static str, expected: Option<usize>) -> HarnessResult<()> {
    check_table(table, T::TABLE, T::COUNT, expected)
}

fn check_table(
    table: &'static str,
    names: &[&str],
    count: usize,
    expected: Option<usize>,
) -> HarnessResult<()> {
    if let Some(expected) = expected {
        if count != expected {
            return Err(HarnessError::name_table(
                table,
                format!("enumeration has {} values, expected {}", count, expected),
            ));
        }
    }
    if names.len() != count {
        return Err(HarnessError::name_table(
            table,
            format!("{} names for {} values", names.len(), count),
        ));
    }

    let mut seen = HashSet::with_capacity(names.len());
    for (ordinal, name) in names.iter().enumerate() {
        if name.is_empty() || *name == UNKNOWN {
            return Err(HarnessError::name_table(
                table,
                format!("invalid name {:?} at ordinal {}", name, ordinal),
            ));
        }
        if !seen.insert(*name) {
            return Err(HarnessError::name_table(
                table,
                format!("duplicate name {:?}", name),
            ));
        }
    }
    log::debug!("name table {} verified ({} entries)", table, count);
    Ok(())
}
