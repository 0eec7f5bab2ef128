//! Pointer and keyboard input.

use crate::geometry::Point;

/// Pointer sample for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: Point,
    pub down: bool,
}

impl PointerState {
    pub fn new(x: f64, y: f64, down: bool) -> Self {
        PointerState {
            position: Point::new(x, y),
            down,
        }
    }
}

/// Logical key identity, independent of keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Main-row digit `0`–`9`.
    Digit(u8),
    Minus,
    Equal,
    /// Numeric keypad digit `0`–`9`.
    Numpad(u8),
    ArrowLeft,
    ArrowDown,
    ArrowRight,
    ArrowUp,
    Other,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code` value (`"Digit1"`, `"Numpad4"`, ...).
    pub fn from_code(code: &str) -> Self {
        if let Some(d) = code.strip_prefix("Digit") {
            return digit(d).map_or(Key::Other, Key::Digit);
        }
        if let Some(d) = code.strip_prefix("Numpad") {
            return digit(d).map_or(Key::Other, Key::Numpad);
        }
        match code {
            "Minus" => Key::Minus,
            "Equal" => Key::Equal,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowDown" => Key::ArrowDown,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            _ => Key::Other,
        }
    }
}

fn digit(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}

/// Which keys fret and which keys pluck.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    /// Key → fret offset (1–12).
    pub frets: Vec<(Key, u8)>,
    /// Key → string index (0 is the lowest string).
    pub plucks: Vec<(Key, usize)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut frets: Vec<(Key, u8)> = (1..=9).map(|d| (Key::Digit(d), d)).collect();
        frets.push((Key::Digit(0), 10));
        frets.push((Key::Minus, 11));
        frets.push((Key::Equal, 12));

        KeyMap {
            frets,
            plucks: vec![
                (Key::ArrowLeft, 0),
                (Key::ArrowDown, 1),
                (Key::ArrowRight, 2),
                (Key::Numpad(4), 3),
                (Key::Numpad(5), 4),
                (Key::Numpad(6), 5),
            ],
        }
    }
}

impl KeyMap {
    pub fn fret_for(&self, key: Key) -> Option<u8> {
        self.frets.iter().find(|(k, _)| *k == key).map(|(_, f)| *f)
    }

    pub fn string_for(&self, key: Key) -> Option<usize> {
        self.plucks.iter().find(|(k, _)| *k == key).map(|(_, s)| *s)
    }
}
