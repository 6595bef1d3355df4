//! Pin controller facade
//!
//! Wraps the four named pin configurations the sensor needs and exposes
//! atomic "select state" operations over them. The table is resolved once at
//! startup, all-or-nothing: a partial table is never retained.

use platform::pinctrl::{PinControl, PinctrlError};

use crate::error::CtlError;

/// Symbolic pin states of the sensor's supply switch and reset line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinStateId {
    /// Sensor supply enabled
    PowerOn,
    /// Sensor supply disabled
    PowerOff,
    /// Reset asserted
    ResetLow,
    /// Reset released
    ResetHigh,
}

impl PinStateId {
    /// Number of states in the table.
    pub const COUNT: usize = 4;

    /// All states, in resolution order.
    pub const ALL: [PinStateId; PinStateId::COUNT] = [
        PinStateId::PowerOn,
        PinStateId::PowerOff,
        PinStateId::ResetLow,
        PinStateId::ResetHigh,
    ];

    /// Name of the state in the hardware description.
    pub fn name(self) -> &'static str {
        use platform::pinctrl::state_names;
        match self {
            PinStateId::PowerOn => state_names::POWER_ON,
            PinStateId::PowerOff => state_names::POWER_OFF,
            PinStateId::ResetLow => state_names::RESET_LOW,
            PinStateId::ResetHigh => state_names::RESET_HIGH,
        }
    }
}

/// Resolved pin-state table plus the controller handle that applies it.
pub struct PinFacade<P: PinControl> {
    ctrl: P,
    power_on: P::State,
    power_off: P::State,
    reset_low: P::State,
    reset_high: P::State,
}

impl<P: PinControl> PinFacade<P> {
    /// Resolve all four named states from an acquired controller handle.
    ///
    /// All-or-nothing: the first unresolvable name fails the whole facade
    /// and nothing is retained.
    pub fn resolve(mut ctrl: P) -> Result<Self, CtlError> {
        let power_on = lookup(&mut ctrl, PinStateId::PowerOn)?;
        let power_off = lookup(&mut ctrl, PinStateId::PowerOff)?;
        let reset_low = lookup(&mut ctrl, PinStateId::ResetLow)?;
        let reset_high = lookup(&mut ctrl, PinStateId::ResetHigh)?;
        Ok(Self {
            ctrl,
            power_on,
            power_off,
            reset_low,
            reset_high,
        })
    }

    /// Apply one pin state as a single hardware transaction.
    ///
    /// A failure is returned to the caller; multi-step sequences may choose
    /// to continue past it (see the reset pulse).
    pub fn select(&mut self, id: PinStateId) -> Result<(), CtlError> {
        let state = match id {
            PinStateId::PowerOn => &self.power_on,
            PinStateId::PowerOff => &self.power_off,
            PinStateId::ResetLow => &self.reset_low,
            PinStateId::ResetHigh => &self.reset_high,
        };
        self.ctrl.select_state(state).map_err(|err| {
            #[cfg(feature = "defmt")]
            defmt::error!("select {} failed", id.name());
            map_pin_err(err)
        })
    }
}

fn lookup<P: PinControl>(ctrl: &mut P, id: PinStateId) -> Result<P::State, CtlError> {
    ctrl.lookup_state(id.name()).map_err(|err| {
        #[cfg(feature = "defmt")]
        defmt::error!("can't find {} pin state", id.name());
        map_pin_err(err)
    })
}

fn map_pin_err(err: PinctrlError) -> CtlError {
    match err {
        PinctrlError::StateNotFound => CtlError::NotFound,
        PinctrlError::Io => CtlError::Io,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::mocks::MockPinctrl;

    #[test]
    fn resolve_looks_up_all_four_states() {
        let pinctrl = MockPinctrl::new();
        let log = pinctrl.clone();
        let facade = PinFacade::resolve(pinctrl);
        assert!(facade.is_ok());
        assert_eq!(
            log.lookups(),
            vec!["power_on", "power_off", "reset_low", "reset_high"]
        );
    }

    #[test]
    fn any_missing_state_fails_the_whole_table() {
        for id in PinStateId::ALL {
            let pinctrl = MockPinctrl::new();
            pinctrl.mark_missing(id.name());
            let facade = PinFacade::resolve(pinctrl.clone());
            assert!(
                matches!(facade, Err(CtlError::NotFound)),
                "missing {} must fail resolve",
                id.name()
            );
        }
    }

    #[test]
    fn select_applies_the_named_state() {
        let pinctrl = MockPinctrl::new();
        let log = pinctrl.clone();
        let mut facade = PinFacade::resolve(pinctrl).expect("resolve");
        facade.select(PinStateId::ResetHigh).expect("select");
        assert_eq!(log.selections(), vec!["reset_high"]);
    }

    #[test]
    fn select_surfaces_hardware_failures() {
        let pinctrl = MockPinctrl::new();
        pinctrl.fail_select("power_off");
        let mut facade = PinFacade::resolve(pinctrl).expect("resolve");
        assert_eq!(facade.select(PinStateId::PowerOff), Err(CtlError::Io));
    }
}
