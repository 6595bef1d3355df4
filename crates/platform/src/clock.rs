//! Peripheral clock gating

/// Clock-control collaborator for the sensor's transport peripheral.
///
/// The control core only gates the clock on and off; clock tree setup
/// belongs to the transport driver that owns the peripheral.
pub trait ClockGate {
    /// Error type
    type Error: core::fmt::Debug;

    /// Enable or disable the peripheral clock.
    fn set_enabled(&mut self, on: bool) -> Result<(), Self::Error>;
}
