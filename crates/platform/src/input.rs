//! Virtual key-input device abstraction

/// Key codes the virtual input device can emit.
///
/// This is the *output* code space; the driver maps its own sensor key
/// enumeration onto it, with [`KeyCode::Unknown`] as the sink for unmapped
/// identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// F3 (navigation-bar key mode)
    F3,
    /// Menu key
    Menu,
    /// Back key
    Back,
    /// F19
    F19,
    /// F20
    F20,
    /// F21
    F21,
    /// Enter key
    Enter,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// System wakeup key
    Wakeup,
    /// Unmapped identifier: observable but inert
    Unknown,
}

/// Virtual input device for key events.
pub trait KeyReporter {
    /// Error type
    type Error: core::fmt::Debug;

    /// Allocate and register the device with its supported key set.
    fn register(&mut self) -> Result<(), Self::Error>;

    /// Unregister the device. Safe to call when never registered.
    fn unregister(&mut self);

    /// Report one key transition (`pressed` = press, else release).
    fn report_key(&mut self, code: KeyCode, pressed: bool) -> Result<(), Self::Error>;

    /// Flush reported transitions so they become visible as one input frame.
    fn sync(&mut self) -> Result<(), Self::Error>;
}
