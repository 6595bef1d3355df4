//! Device instance
//!
//! One explicitly constructed handle per hardware instance, passed to every
//! operation. The instance owns the resolved pin table, the virtual input
//! device, the device node, and the clock gate for its registered lifetime;
//! the interrupt half is split into [`IrqBridge`](crate::irq_bridge::IrqBridge)
//! by the lifecycle manager so the edge path runs concurrently with command
//! dispatch.

use platform::clock::ClockGate;
use platform::input::KeyReporter;
use platform::node::DeviceNode;
use platform::pinctrl::PinControl;

use crate::error::CtlError;
use crate::keys::{self, KeyEvent};
use crate::pins::PinFacade;

/// One fingerprint-sensor device instance.
pub struct FpDevice<P: PinControl, R: KeyReporter, N: DeviceNode, C: ClockGate> {
    pins: PinFacade<P>,
    input: R,
    node: N,
    clock: C,
    open_count: u32,
    initialized: bool,
    power_on: bool,
}

impl<P: PinControl, R: KeyReporter, N: DeviceNode, C: ClockGate> FpDevice<P, R, N, C> {
    /// Assemble an instance from its resolved parts.
    pub fn new(pins: PinFacade<P>, input: R, node: N, clock: C) -> Self {
        Self {
            pins,
            input,
            node,
            clock,
            open_count: 0,
            initialized: false,
            power_on: false,
        }
    }

    /// A caller opened the device node.
    pub fn open(&mut self) {
        self.open_count = self.open_count.saturating_add(1);
    }

    /// A caller released the device node.
    pub fn release(&mut self) {
        self.open_count = self.open_count.saturating_sub(1);
    }

    /// Live open references.
    pub fn open_count(&self) -> u32 {
        self.open_count
    }

    /// Whether startup completed.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether the last supply switch left the sensor powered.
    pub fn is_power_on(&self) -> bool {
        self.power_on
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    pub(crate) fn input_mut(&mut self) -> &mut R {
        &mut self.input
    }

    pub(crate) fn node_mut(&mut self) -> &mut N {
        &mut self.node
    }

    pub(crate) fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Switch the sensor supply and track the power flag.
    pub fn power(&mut self, on: bool) -> Result<(), CtlError> {
        let result = self.pins.power(on);
        if result.is_ok() {
            self.power_on = on;
        }
        result
    }

    /// Run the reset pulse.
    pub async fn reset(&mut self) -> Result<(), CtlError> {
        self.pins.reset().await
    }

    /// Inject one key event through the virtual input device.
    pub fn report_key(&mut self, event: &KeyEvent) -> Result<(), CtlError> {
        keys::report_key(&mut self.input, event)
    }
}
