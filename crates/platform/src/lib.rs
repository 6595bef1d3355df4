//! Hardware abstraction layer for the fingerprint-sensor control driver
//!
//! This crate provides trait-based abstractions for every piece of hardware
//! the control core touches, enabling development and testing without a
//! physical sensor.
//!
//! # Architecture Layers
//!
//! ```text
//! Control core (fp-control crate)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Hardware Layer (SoC HAL + board glue)
//! ```
//!
//! # Abstractions
//!
//! - [`PinControl`] - named pin-state lookup and selection (pinctrl consumer)
//! - [`InterruptLine`] - wake-capable edge interrupt line
//! - [`KeyReporter`] - virtual key-input device
//! - [`DeviceNode`] - addressable device node with change-event publication
//! - [`ClockGate`] - peripheral clock gating collaborator
//! - [`DisplayStateSource`] - display on/off event capability
//!
//! # Features
//!
//! - `std`: expose the mock implementations to downstream test suites
//! - `defmt`: enable defmt logging derives
//!
//! # Example
//!
//! ```no_run
//! use platform::{PinControl, PinctrlError};
//!
//! fn ready<P: PinControl>(pinctrl: &mut P) -> Result<P::State, PinctrlError> {
//!     pinctrl.lookup_state("reset_high")
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // single-consumer driver traits, Send bounds not needed

#[cfg(feature = "std")]
extern crate std;

pub mod clock;
pub mod display;
pub mod input;
pub mod irq;
pub mod mocks;
pub mod node;
pub mod pinctrl;

// Re-export main traits
pub use clock::ClockGate;
pub use display::{BlankLevel, BlankNotifier, DisplayState, DisplayStateSource, SuspendHooks};
pub use input::{KeyCode, KeyReporter};
pub use irq::{InterruptLine, InterruptMode, IrqConfig};
pub use node::DeviceNode;
pub use pinctrl::{GpioPinctrl, PinControl, PinctrlError};
