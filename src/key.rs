//! Keyboard keys and mouse buttons.

use std::{fmt, str::FromStr};

use miette::Report;
use winit::keyboard::KeyCode;

/// Physical key on the keyboard.
///
/// Keys are addressed by position, so a German keyboard might report [`Key::Z`] for the key labeled "Y".
/// Use [`crate::Window::characters`] to get the actual typed text.
///
/// Every key has a case-insensitive name that can be parsed:
///
/// | Name | Key |
/// | --- | --- |
/// | `"a"` ... `"z"` | Character keys |
/// | `"0"` ... `"9"` | Number keys on the main keyboard |
/// | `"kp_0"` ... `"kp_9"` | Number keys on the key pad |
/// | `"f1"` ... `"f24"` | Function keys |
/// | `"enter"`, `"kp_enter"` | Main and key pad enter |
/// | `"lctrl"`, `"rctrl"`, `"lshift"`, `"rshift"`, `"lalt"`, `"ralt"` | Modifiers |
/// | `"left"`, `"right"`, `"up"`, `"down"` | Arrow keys |
///
/// The other names are `"escape"`, `"space"`, `"backspace"`, `"tab"`, `"slash"`, `"backslash"`, `"komma"`, `"minus"`, `"period"`, `"kp_period"`, `"kp_plus"`, `"kp_minus"`, `"kp_divide"`, `"kp_multiply"`, `"semicolon"`, `"leftbracket"`, `"rightbracket"`, `"pageup"`, `"pagedown"`, `"capslock"`, `"printscreen"`, `"scrolllock"`, `"pause"`, `"insert"`, `"delete"`, `"home"` and `"end"`.
///
/// # Example
///
/// ```
/// use pixdraw::Key;
///
/// assert_eq!("KP_5".parse::<Key>().unwrap(), Key::Kp5);
/// assert_eq!(Key::LeftControl.name(), "lctrl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(clippy::exhaustive_enums)]
pub enum Key {
    /// Character key `a`.
    A,
    /// Character key `b`.
    B,
    /// Character key `c`.
    C,
    /// Character key `d`.
    D,
    /// Character key `e`.
    E,
    /// Character key `f`.
    F,
    /// Character key `g`.
    G,
    /// Character key `h`.
    H,
    /// Character key `i`.
    I,
    /// Character key `j`.
    J,
    /// Character key `k`.
    K,
    /// Character key `l`.
    L,
    /// Character key `m`.
    M,
    /// Character key `n`.
    N,
    /// Character key `o`.
    O,
    /// Character key `p`.
    P,
    /// Character key `q`.
    Q,
    /// Character key `r`.
    R,
    /// Character key `s`.
    S,
    /// Character key `t`.
    T,
    /// Character key `u`.
    U,
    /// Character key `v`.
    V,
    /// Character key `w`.
    W,
    /// Character key `x`.
    X,
    /// Character key `y`.
    Y,
    /// Character key `z`.
    Z,
    /// Number key `0` on the main keyboard.
    Num0,
    /// Number key `1` on the main keyboard.
    Num1,
    /// Number key `2` on the main keyboard.
    Num2,
    /// Number key `3` on the main keyboard.
    Num3,
    /// Number key `4` on the main keyboard.
    Num4,
    /// Number key `5` on the main keyboard.
    Num5,
    /// Number key `6` on the main keyboard.
    Num6,
    /// Number key `7` on the main keyboard.
    Num7,
    /// Number key `8` on the main keyboard.
    Num8,
    /// Number key `9` on the main keyboard.
    Num9,
    /// Number key `0` on the key pad.
    Kp0,
    /// Number key `1` on the key pad.
    Kp1,
    /// Number key `2` on the key pad.
    Kp2,
    /// Number key `3` on the key pad.
    Kp3,
    /// Number key `4` on the key pad.
    Kp4,
    /// Number key `5` on the key pad.
    Kp5,
    /// Number key `6` on the key pad.
    Kp6,
    /// Number key `7` on the key pad.
    Kp7,
    /// Number key `8` on the key pad.
    Kp8,
    /// Number key `9` on the key pad.
    Kp9,
    /// Function key `F1`.
    F1,
    /// Function key `F2`.
    F2,
    /// Function key `F3`.
    F3,
    /// Function key `F4`.
    F4,
    /// Function key `F5`.
    F5,
    /// Function key `F6`.
    F6,
    /// Function key `F7`.
    F7,
    /// Function key `F8`.
    F8,
    /// Function key `F9`.
    F9,
    /// Function key `F10`.
    F10,
    /// Function key `F11`.
    F11,
    /// Function key `F12`.
    F12,
    /// Function key `F13`.
    F13,
    /// Function key `F14`.
    F14,
    /// Function key `F15`.
    F15,
    /// Function key `F16`.
    F16,
    /// Function key `F17`.
    F17,
    /// Function key `F18`.
    F18,
    /// Function key `F19`.
    F19,
    /// Function key `F20`.
    F20,
    /// Function key `F21`.
    F21,
    /// Function key `F22`.
    F22,
    /// Function key `F23`.
    F23,
    /// Function key `F24`.
    F24,
    Enter,
    KpEnter,
    LeftControl,
    RightControl,
    LeftShift,
    RightShift,
    LeftAlt,
    RightAlt,
    Left,
    Right,
    Up,
    Down,
    Escape,
    Space,
    Backspace,
    Tab,
    Slash,
    Backslash,
    Comma,
    Minus,
    Period,
    KpPeriod,
    KpPlus,
    KpMinus,
    KpDivide,
    KpMultiply,
    Semicolon,
    LeftBracket,
    RightBracket,
    PageUp,
    PageDown,
    CapsLock,
    PrintScreen,
    ScrollLock,
    Pause,
    Insert,
    Delete,
    Home,
    End,
}

/// Canonical name of every key.
const NAMES: &[(Key, &str)] = &[
    (Key::A, "a"),
    (Key::B, "b"),
    (Key::C, "c"),
    (Key::D, "d"),
    (Key::E, "e"),
    (Key::F, "f"),
    (Key::G, "g"),
    (Key::H, "h"),
    (Key::I, "i"),
    (Key::J, "j"),
    (Key::K, "k"),
    (Key::L, "l"),
    (Key::M, "m"),
    (Key::N, "n"),
    (Key::O, "o"),
    (Key::P, "p"),
    (Key::Q, "q"),
    (Key::R, "r"),
    (Key::S, "s"),
    (Key::T, "t"),
    (Key::U, "u"),
    (Key::V, "v"),
    (Key::W, "w"),
    (Key::X, "x"),
    (Key::Y, "y"),
    (Key::Z, "z"),
    (Key::Num0, "0"),
    (Key::Num1, "1"),
    (Key::Num2, "2"),
    (Key::Num3, "3"),
    (Key::Num4, "4"),
    (Key::Num5, "5"),
    (Key::Num6, "6"),
    (Key::Num7, "7"),
    (Key::Num8, "8"),
    (Key::Num9, "9"),
    (Key::Kp0, "kp_0"),
    (Key::Kp1, "kp_1"),
    (Key::Kp2, "kp_2"),
    (Key::Kp3, "kp_3"),
    (Key::Kp4, "kp_4"),
    (Key::Kp5, "kp_5"),
    (Key::Kp6, "kp_6"),
    (Key::Kp7, "kp_7"),
    (Key::Kp8, "kp_8"),
    (Key::Kp9, "kp_9"),
    (Key::F1, "f1"),
    (Key::F2, "f2"),
    (Key::F3, "f3"),
    (Key::F4, "f4"),
    (Key::F5, "f5"),
    (Key::F6, "f6"),
    (Key::F7, "f7"),
    (Key::F8, "f8"),
    (Key::F9, "f9"),
    (Key::F10, "f10"),
    (Key::F11, "f11"),
    (Key::F12, "f12"),
    (Key::F13, "f13"),
    (Key::F14, "f14"),
    (Key::F15, "f15"),
    (Key::F16, "f16"),
    (Key::F17, "f17"),
    (Key::F18, "f18"),
    (Key::F19, "f19"),
    (Key::F20, "f20"),
    (Key::F21, "f21"),
    (Key::F22, "f22"),
    (Key::F23, "f23"),
    (Key::F24, "f24"),
    (Key::Enter, "enter"),
    (Key::KpEnter, "kp_enter"),
    (Key::LeftControl, "lctrl"),
    (Key::RightControl, "rctrl"),
    (Key::LeftShift, "lshift"),
    (Key::RightShift, "rshift"),
    (Key::LeftAlt, "lalt"),
    (Key::RightAlt, "ralt"),
    (Key::Left, "left"),
    (Key::Right, "right"),
    (Key::Up, "up"),
    (Key::Down, "down"),
    (Key::Escape, "escape"),
    (Key::Space, "space"),
    (Key::Backspace, "backspace"),
    (Key::Tab, "tab"),
    (Key::Slash, "slash"),
    (Key::Backslash, "backslash"),
    (Key::Comma, "komma"),
    (Key::Minus, "minus"),
    (Key::Period, "period"),
    (Key::KpPeriod, "kp_period"),
    (Key::KpPlus, "kp_plus"),
    (Key::KpMinus, "kp_minus"),
    (Key::KpDivide, "kp_divide"),
    (Key::KpMultiply, "kp_multiply"),
    (Key::Semicolon, "semicolon"),
    (Key::LeftBracket, "leftbracket"),
    (Key::RightBracket, "rightbracket"),
    (Key::PageUp, "pageup"),
    (Key::PageDown, "pagedown"),
    (Key::CapsLock, "capslock"),
    (Key::PrintScreen, "printscreen"),
    (Key::ScrollLock, "scrolllock"),
    (Key::Pause, "pause"),
    (Key::Insert, "insert"),
    (Key::Delete, "delete"),
    (Key::Home, "home"),
    (Key::End, "end"),
];

/// Extra names that are also accepted when parsing.
const ALIASES: &[(Key, &str)] = &[
    (Key::Enter, "return"),
    (Key::Escape, "esc"),
    (Key::Comma, "comma"),
];

impl Key {
    /// Every key, in the order they are declared.
    #[inline]
    pub fn all() -> impl Iterator<Item = Self> {
        NAMES.iter().map(|(key, _)| *key)
    }

    /// Canonical lowercase name of the key.
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find_map(|(key, name)| (*key == self).then_some(*name))
            // Every variant is in the table
            .unwrap_or_default()
    }

    /// Map a physical winit key, `None` for keys that have no name.
    #[must_use]
    pub(crate) const fn from_key_code(key_code: KeyCode) -> Option<Self> {
        let key = match key_code {
            KeyCode::KeyA => Self::A,
            KeyCode::KeyB => Self::B,
            KeyCode::KeyC => Self::C,
            KeyCode::KeyD => Self::D,
            KeyCode::KeyE => Self::E,
            KeyCode::KeyF => Self::F,
            KeyCode::KeyG => Self::G,
            KeyCode::KeyH => Self::H,
            KeyCode::KeyI => Self::I,
            KeyCode::KeyJ => Self::J,
            KeyCode::KeyK => Self::K,
            KeyCode::KeyL => Self::L,
            KeyCode::KeyM => Self::M,
            KeyCode::KeyN => Self::N,
            KeyCode::KeyO => Self::O,
            KeyCode::KeyP => Self::P,
            KeyCode::KeyQ => Self::Q,
            KeyCode::KeyR => Self::R,
            KeyCode::KeyS => Self::S,
            KeyCode::KeyT => Self::T,
            KeyCode::KeyU => Self::U,
            KeyCode::KeyV => Self::V,
            KeyCode::KeyW => Self::W,
            KeyCode::KeyX => Self::X,
            KeyCode::KeyY => Self::Y,
            KeyCode::KeyZ => Self::Z,
            KeyCode::Digit0 => Self::Num0,
            KeyCode::Digit1 => Self::Num1,
            KeyCode::Digit2 => Self::Num2,
            KeyCode::Digit3 => Self::Num3,
            KeyCode::Digit4 => Self::Num4,
            KeyCode::Digit5 => Self::Num5,
            KeyCode::Digit6 => Self::Num6,
            KeyCode::Digit7 => Self::Num7,
            KeyCode::Digit8 => Self::Num8,
            KeyCode::Digit9 => Self::Num9,
            KeyCode::Numpad0 => Self::Kp0,
            KeyCode::Numpad1 => Self::Kp1,
            KeyCode::Numpad2 => Self::Kp2,
            KeyCode::Numpad3 => Self::Kp3,
            KeyCode::Numpad4 => Self::Kp4,
            KeyCode::Numpad5 => Self::Kp5,
            KeyCode::Numpad6 => Self::Kp6,
            KeyCode::Numpad7 => Self::Kp7,
            KeyCode::Numpad8 => Self::Kp8,
            KeyCode::Numpad9 => Self::Kp9,
            KeyCode::F1 => Self::F1,
            KeyCode::F2 => Self::F2,
            KeyCode::F3 => Self::F3,
            KeyCode::F4 => Self::F4,
            KeyCode::F5 => Self::F5,
            KeyCode::F6 => Self::F6,
            KeyCode::F7 => Self::F7,
            KeyCode::F8 => Self::F8,
            KeyCode::F9 => Self::F9,
            KeyCode::F10 => Self::F10,
            KeyCode::F11 => Self::F11,
            KeyCode::F12 => Self::F12,
            KeyCode::F13 => Self::F13,
            KeyCode::F14 => Self::F14,
            KeyCode::F15 => Self::F15,
            KeyCode::F16 => Self::F16,
            KeyCode::F17 => Self::F17,
            KeyCode::F18 => Self::F18,
            KeyCode::F19 => Self::F19,
            KeyCode::F20 => Self::F20,
            KeyCode::F21 => Self::F21,
            KeyCode::F22 => Self::F22,
            KeyCode::F23 => Self::F23,
            KeyCode::F24 => Self::F24,
            KeyCode::Enter => Self::Enter,
            KeyCode::NumpadEnter => Self::KpEnter,
            KeyCode::ControlLeft => Self::LeftControl,
            KeyCode::ControlRight => Self::RightControl,
            KeyCode::ShiftLeft => Self::LeftShift,
            KeyCode::ShiftRight => Self::RightShift,
            KeyCode::AltLeft => Self::LeftAlt,
            KeyCode::AltRight => Self::RightAlt,
            KeyCode::ArrowLeft => Self::Left,
            KeyCode::ArrowRight => Self::Right,
            KeyCode::ArrowUp => Self::Up,
            KeyCode::ArrowDown => Self::Down,
            KeyCode::Escape => Self::Escape,
            KeyCode::Space => Self::Space,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Tab => Self::Tab,
            KeyCode::Slash => Self::Slash,
            KeyCode::Backslash => Self::Backslash,
            KeyCode::Comma => Self::Comma,
            KeyCode::Minus => Self::Minus,
            KeyCode::Period => Self::Period,
            KeyCode::NumpadDecimal => Self::KpPeriod,
            KeyCode::NumpadAdd => Self::KpPlus,
            KeyCode::NumpadSubtract => Self::KpMinus,
            KeyCode::NumpadDivide => Self::KpDivide,
            KeyCode::NumpadMultiply => Self::KpMultiply,
            KeyCode::Semicolon => Self::Semicolon,
            KeyCode::BracketLeft => Self::LeftBracket,
            KeyCode::BracketRight => Self::RightBracket,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::CapsLock => Self::CapsLock,
            KeyCode::PrintScreen => Self::PrintScreen,
            KeyCode::ScrollLock => Self::ScrollLock,
            KeyCode::Pause => Self::Pause,
            KeyCode::Insert => Self::Insert,
            KeyCode::Delete => Self::Delete,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            _ => return None,
        };

        Some(key)
    }
}

impl FromStr for Key {
    type Err = Report;

    #[inline]
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        NAMES
            .iter()
            .chain(ALIASES)
            .find_map(|(key, key_name)| key_name.eq_ignore_ascii_case(name).then_some(*key))
            .ok_or_else(|| miette::miette!("Unknown key name '{name}'"))
    }
}

impl fmt::Display for Key {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::exhaustive_enums)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

impl MouseButton {
    /// Map a winit mouse button, `None` for the extra buttons.
    #[must_use]
    pub(crate) const fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            winit::event::MouseButton::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// Mouse click that happened during the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs)]
pub struct MouseClick {
    /// Horizontal position on the canvas in pixels.
    pub x: i32,
    /// Vertical position on the canvas in pixels.
    pub y: i32,
    /// Button that was pressed.
    pub button: MouseButton,
}

#[cfg(test)]
mod tests {
    use winit::keyboard::KeyCode;

    use super::Key;

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("a".parse::<Key>().unwrap(), Key::A);
        assert_eq!("A".parse::<Key>().unwrap(), Key::A);
        assert_eq!("F12".parse::<Key>().unwrap(), Key::F12);
        assert_eq!("kp_enter".parse::<Key>().unwrap(), Key::KpEnter);
        assert_eq!("Escape".parse::<Key>().unwrap(), Key::Escape);
        assert_eq!("komma".parse::<Key>().unwrap(), Key::Comma);
        assert_eq!("comma".parse::<Key>().unwrap(), Key::Comma);
    }

    #[test]
    fn unknown_name_is_error() {
        assert!("hyper".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn names_round_trip() {
        for key in Key::all() {
            assert_eq!(key.name().parse::<Key>().unwrap(), key);
        }

        assert_eq!(Key::all().count(), 109);
    }

    #[test]
    fn winit_mapping() {
        assert_eq!(Key::from_key_code(KeyCode::KeyQ), Some(Key::Q));
        assert_eq!(Key::from_key_code(KeyCode::Numpad7), Some(Key::Kp7));
        assert_eq!(Key::from_key_code(KeyCode::Digit7), Some(Key::Num7));
        assert_eq!(Key::from_key_code(KeyCode::ControlRight), Some(Key::RightControl));
        assert_eq!(Key::from_key_code(KeyCode::F35), None);
    }
}
