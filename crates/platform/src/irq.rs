//! Interrupt line abstraction
//!
//! A single wake-capable edge interrupt line. The driver requests the line
//! once with a fixed configuration, then toggles it enabled/disabled around
//! edge handling; `disable_nosync` is safe to call from the handler path
//! (it does not wait for a running handler to finish).

/// External interrupt trigger configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptMode {
    /// Trigger on rising edge
    RisingEdge,
    /// Trigger on falling edge
    FallingEdge,
    /// Trigger on both edges
    BothEdges,
}

/// Full request configuration for an interrupt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IrqConfig {
    /// Edge that fires the handler.
    pub trigger: InterruptMode,
    /// Keep the line masked until the handler finishes.
    pub oneshot: bool,
    /// The line may wake the system from suspend.
    pub wake: bool,
}

/// A requestable, maskable interrupt line.
pub trait InterruptLine {
    /// Error type
    type Error: core::fmt::Debug;

    /// Register the line with `config`. A successful request leaves the
    /// line enabled.
    fn request(&mut self, config: IrqConfig) -> Result<(), Self::Error>;

    /// Disable and unregister the line. Safe to call when never requested.
    fn free(&mut self);

    /// Unmask the line.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Mask the line without waiting for a running handler to finish.
    ///
    /// Must not block; callable from the handler path.
    fn disable_nosync(&mut self);

    /// Whether the line is currently unmasked.
    fn is_enabled(&self) -> bool;

    /// Wait for the next falling edge.
    fn wait_for_falling_edge(&mut self) -> impl core::future::Future<Output = ()>;
}
