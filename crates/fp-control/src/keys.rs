//! Sensor key enumeration and input-event injection
//!
//! The sensor HAL identifies navigation gestures by an abstract key id; the
//! driver translates each id to the virtual input device's key-code space
//! and injects the transition as one input frame.

use platform::input::{KeyCode, KeyReporter};

use crate::error::CtlError;

/// Abstract key identifiers the sensor HAL reports.
///
/// The numeric values are stable across the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum SensorKey {
    /// Home gesture
    Home = 1,
    /// Menu gesture
    Menu = 2,
    /// Back gesture
    Back = 3,
    /// Programmable key 19
    F19 = 4,
    /// Programmable key 20
    F20 = 5,
    /// Programmable key 21
    F21 = 6,
    /// Enter / confirm
    Enter = 7,
    /// Swipe up
    Up = 8,
    /// Swipe left
    Left = 9,
    /// Swipe right
    Right = 10,
    /// Swipe down
    Down = 11,
    /// System wakeup
    Wakeup = 12,
}

impl SensorKey {
    /// Decode a raw identifier; `None` for anything outside the closed set.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            1 => Some(Self::Home),
            2 => Some(Self::Menu),
            3 => Some(Self::Back),
            4 => Some(Self::F19),
            5 => Some(Self::F20),
            6 => Some(Self::F21),
            7 => Some(Self::Enter),
            8 => Some(Self::Up),
            9 => Some(Self::Left),
            10 => Some(Self::Right),
            11 => Some(Self::Down),
            12 => Some(Self::Wakeup),
            _ => None,
        }
    }

    /// Input key code this sensor key maps to.
    pub fn key_code(self) -> KeyCode {
        match self {
            Self::Home => KeyCode::F3, // key mode
            Self::Menu => KeyCode::Menu,
            Self::Back => KeyCode::Back,
            Self::F19 => KeyCode::F19,
            Self::F20 => KeyCode::F20,
            Self::F21 => KeyCode::F21,
            Self::Enter => KeyCode::Enter,
            Self::Up => KeyCode::Up,
            Self::Left => KeyCode::Left,
            Self::Right => KeyCode::Right,
            Self::Down => KeyCode::Down,
            Self::Wakeup => KeyCode::Wakeup,
        }
    }
}

/// Wire size of a key event: `{key: u32, value: u32}`, little-endian.
pub const KEY_EVENT_SIZE: usize = 8;

/// One key transition crossing the caller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Raw sensor key identifier.
    pub key: u32,
    /// `true` = press, `false` = release.
    pub pressed: bool,
}

impl KeyEvent {
    /// Decode from the fixed wire form. Any nonzero value is a press.
    pub fn from_bytes(raw: &[u8; KEY_EVENT_SIZE]) -> Self {
        let [k0, k1, k2, k3, v0, v1, v2, v3] = *raw;
        Self {
            key: u32::from_le_bytes([k0, k1, k2, k3]),
            pressed: u32::from_le_bytes([v0, v1, v2, v3]) != 0,
        }
    }

    /// Encode to the fixed wire form.
    pub fn to_bytes(self) -> [u8; KEY_EVENT_SIZE] {
        let k = self.key.to_le_bytes();
        let v = u32::from(self.pressed).to_le_bytes();
        [k[0], k[1], k[2], k[3], v[0], v[1], v[2], v[3]]
    }
}

/// Translate and inject one key transition as a single input frame.
///
/// Unmapped identifiers degrade to [`KeyCode::Unknown`], observable but
/// inert, never an error. Two identical calls emit two events.
pub fn report_key<R: KeyReporter>(input: &mut R, event: &KeyEvent) -> Result<(), CtlError> {
    let code = match SensorKey::from_raw(event.key) {
        Some(key) => key.key_code(),
        None => KeyCode::Unknown,
    };
    input.report_key(code, event.pressed).map_err(|_err| CtlError::Io)?;
    input.sync().map_err(|_err| CtlError::Io)
}
