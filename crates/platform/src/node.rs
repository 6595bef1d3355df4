//! Addressable device node abstraction
//!
//! The driver registers itself as a single named node a privileged caller can
//! open and issue commands against. The same node is the publication point
//! for device-state-change notifications ("KEY=value" environment strings),
//! which external listeners subscribe to asynchronously.

/// A registrable device node with change-event publication.
pub trait DeviceNode {
    /// Error type
    type Error: core::fmt::Debug;

    /// Register the node so it becomes externally addressable.
    fn register(&mut self) -> Result<(), Self::Error>;

    /// Unregister the node. Safe to call when never registered.
    fn unregister(&mut self);

    /// Publish a state-change notification with a `KEY=value` payload.
    ///
    /// Takes `&self`: the interrupt event worker and the screen monitor
    /// publish concurrently, so implementations carry their own
    /// synchronization.
    fn publish(&self, env: &str) -> Result<(), Self::Error>;
}
