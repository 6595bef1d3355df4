//! Power/reset sequencer
//!
//! Built on the pin facade. The reset pulse timing is a hard requirement of
//! the sensor (minimum assert width and minimum recovery time); the holds
//! below must not be shortened.

use embassy_time::Timer;
use platform::pinctrl::PinControl;

use crate::error::CtlError;
use crate::pins::{PinFacade, PinStateId};

/// Hold between releasing and asserting reset, milliseconds.
pub const RESET_PRE_ASSERT_MS: u64 = 1;

/// Minimum reset assert width, milliseconds.
pub const RESET_ASSERT_MS: u64 = 20;

impl<P: PinControl> PinFacade<P> {
    /// Switch the sensor supply.
    ///
    /// A single hardware transaction; no debounce, no retry.
    pub fn power(&mut self, on: bool) -> Result<(), CtlError> {
        let id = if on {
            PinStateId::PowerOn
        } else {
            PinStateId::PowerOff
        };
        self.select(id)
    }

    /// Drive the reset pulse: release, hold, assert, hold, release.
    ///
    /// Intermediate failures are logged and do not abort; the sequence
    /// always runs to completion so the line ends in the ready state. The
    /// final selection's result is returned; callers may choose to ignore
    /// it.
    pub async fn reset(&mut self) -> Result<(), CtlError> {
        if self.select(PinStateId::ResetHigh).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("reset: release step failed, continuing");
        }
        Timer::after_millis(RESET_PRE_ASSERT_MS).await;
        if self.select(PinStateId::ResetLow).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("reset: assert step failed, continuing");
        }
        Timer::after_millis(RESET_ASSERT_MS).await;
        self.select(PinStateId::ResetHigh)
    }
}
