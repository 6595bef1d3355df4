//! Pin-state controller abstraction
//!
//! Models a pinctrl-style consumer: named hardware pin configurations are
//! resolved once into opaque state handles and later applied as atomic
//! "select" transactions. The control core never sees individual pins, only
//! named states.

use embedded_hal::digital::OutputPin;

/// Error raised by pin-state lookup and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinctrlError {
    /// The named state is missing from the hardware description
    StateNotFound,
    /// The hardware transaction failed
    Io,
}

impl core::fmt::Display for PinctrlError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StateNotFound => write!(f, "named pin state not found"),
            Self::Io => write!(f, "pin-state hardware transaction failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PinctrlError {}

/// Pin-state controller.
///
/// Implementations own a pin-controller handle already acquired from the
/// platform/bus discovery layer; resolving that handle from a hardware
/// description is outside this trait.
pub trait PinControl {
    /// Opaque hardware configuration handle for one named state.
    type State: Clone;

    /// Resolve a named pin state to its configuration handle.
    fn lookup_state(&mut self, name: &str) -> Result<Self::State, PinctrlError>;

    /// Apply a previously resolved state as one atomic hardware transaction.
    ///
    /// Synchronous; a failure is returned to the caller, never swallowed.
    fn select_state(&mut self, state: &Self::State) -> Result<(), PinctrlError>;
}

/// The canonical state names a fingerprint-sensor pin controller exposes.
pub mod state_names {
    /// Sensor supply enabled.
    pub const POWER_ON: &str = "power_on";
    /// Sensor supply disabled.
    pub const POWER_OFF: &str = "power_off";
    /// Reset line asserted (active low).
    pub const RESET_LOW: &str = "reset_low";
    /// Reset line released.
    pub const RESET_HIGH: &str = "reset_high";
}

/// Pin level driven by one [`GpioPinctrl`] state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioState {
    /// Drive the power pin high.
    PowerOn,
    /// Drive the power pin low.
    PowerOff,
    /// Drive the reset pin low.
    ResetLow,
    /// Drive the reset pin high.
    ResetHigh,
}

/// Raw-GPIO fallback pin controller.
///
/// Boards without a pin-controller block wire the sensor's supply switch and
/// reset line to two plain GPIOs; this adapter exposes them through
/// [`PinControl`] under the canonical state names so the control core is
/// indifferent to which variant the board uses.
pub struct GpioPinctrl<PWR, RST> {
    power: PWR,
    reset: RST,
}

impl<PWR: OutputPin, RST: OutputPin> GpioPinctrl<PWR, RST> {
    /// Wrap a power-switch pin and a reset pin.
    pub fn new(power: PWR, reset: RST) -> Self {
        Self { power, reset }
    }

    /// Release the underlying pins.
    pub fn into_parts(self) -> (PWR, RST) {
        (self.power, self.reset)
    }
}

impl<PWR: OutputPin, RST: OutputPin> PinControl for GpioPinctrl<PWR, RST> {
    type State = GpioState;

    fn lookup_state(&mut self, name: &str) -> Result<GpioState, PinctrlError> {
        match name {
            state_names::POWER_ON => Ok(GpioState::PowerOn),
            state_names::POWER_OFF => Ok(GpioState::PowerOff),
            state_names::RESET_LOW => Ok(GpioState::ResetLow),
            state_names::RESET_HIGH => Ok(GpioState::ResetHigh),
            _ => Err(PinctrlError::StateNotFound),
        }
    }

    fn select_state(&mut self, state: &GpioState) -> Result<(), PinctrlError> {
        match state {
            GpioState::PowerOn => self.power.set_high().map_err(|_| PinctrlError::Io),
            GpioState::PowerOff => self.power.set_low().map_err(|_| PinctrlError::Io),
            GpioState::ResetLow => self.reset.set_low().map_err(|_| PinctrlError::Io),
            GpioState::ResetHigh => self.reset.set_high().map_err(|_| PinctrlError::Io),
        }
    }
}
