//! Device control core for a fingerprint-sensor peripheral
//!
//! Manages the sensor's power/reset pin sequencing, turns its hardware
//! interrupt line into externally observable events, and exposes a closed
//! command table a privileged caller drives the device through.
//!
//! # Architecture
//!
//! ```text
//! hardware edge → IrqBridge → work queue → event worker → device node
//! caller command → FpDevice::ioctl → sequencer / clock gate / key reporting
//! ```
//!
//! The SPI transport that moves sensor image data, the discovery layer that
//! resolves hardware resources, and the display-blank integration are
//! external collaborators behind the `platform` traits; this crate holds the
//! state machines and ordering rules between them.
//!
//! # Modules
//!
//! - [`pins`] - pin controller facade (all-or-nothing state table)
//! - [`sequencer`] - power switch and the timed reset pulse
//! - [`irq_bridge`] - edge interrupt → deferred-work pipeline
//! - [`keys`] - sensor key enumeration and input-event injection
//! - [`events`] - device-state-change notifications and workers
//! - [`dispatch`] - the command table
//! - [`device`] - one explicitly constructed device instance
//! - [`lifecycle`] - ordered startup and failure-tolerant teardown

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

pub mod device;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod irq_bridge;
pub mod keys;
pub mod lifecycle;
pub mod pins;
pub mod sequencer;

pub use device::FpDevice;
pub use dispatch::{opcode, version_buffer, PayloadXfer, SliceXfer, XferFault};
pub use error::CtlError;
pub use events::StateChange;
pub use irq_bridge::{IrqBridge, LineState, WorkItem, WorkQueue, WORK_QUEUE_DEPTH};
pub use keys::{KeyEvent, SensorKey, KEY_EVENT_SIZE};
pub use lifecycle::{shutdown, start, FpStack};
pub use pins::{PinFacade, PinStateId};

/// Driver version string; the trailing date stamp is updated by the release
/// script.
pub const DRIVER_VERSION: &str = "v0.10.1-20250618";

/// Fixed length of the version transfer buffer, terminator included.
pub const VERSION_BUF_LEN: usize = 32;
