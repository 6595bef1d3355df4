//! Lifecycle manager
//!
//! Ordered startup and the mirrored, failure-tolerant teardown for one
//! device instance. Startup aborts on the first required failure; steps that
//! already completed stay acquired, because the unload path runs
//! [`shutdown`] regardless of how far startup got. Every teardown step checks
//! its resource is present before acting, so teardown is safe after a
//! partial startup.

use platform::clock::ClockGate;
use platform::input::KeyReporter;
use platform::irq::InterruptLine;
use platform::node::DeviceNode;
use platform::pinctrl::PinControl;

use crate::device::FpDevice;
use crate::error::CtlError;
use crate::irq_bridge::{IrqBridge, WorkQueue, WorkReceiver};
use crate::pins::PinFacade;

/// A started driver stack, split so the interrupt path, the event worker,
/// and the command dispatcher can each run on their own execution context.
pub struct FpStack<'q, P, L, R, N, C>
where
    P: PinControl,
    L: InterruptLine,
    R: KeyReporter,
    N: DeviceNode,
    C: ClockGate,
{
    /// Command-dispatch half; owns pins, input device, node, clock gate.
    pub device: FpDevice<P, R, N, C>,
    /// Interrupt half; feed [`IrqBridge::run`] to the interrupt-context task.
    pub bridge: IrqBridge<'q, L>,
    /// Deferred-work consumer endpoint for
    /// [`event_worker`](crate::events::event_worker).
    pub events: WorkReceiver<'q>,
}

/// Bring the driver up.
///
/// Order: resolve pins → arm interrupt → register input device → power on
/// (best-effort, logged) → register device node → mark initialized. The one
/// rollback exception: a node-registration failure unregisters the input
/// device before returning, since the unload path never runs when load
/// fails.
pub fn start<'q, P, L, R, N, C>(
    queue: &'q WorkQueue,
    pinctrl: P,
    line: L,
    input: R,
    node: N,
    clock: C,
) -> Result<FpStack<'q, P, L, R, N, C>, CtlError>
where
    P: PinControl,
    L: InterruptLine,
    R: KeyReporter,
    N: DeviceNode,
    C: ClockGate,
{
    // Pin-state table, all-or-nothing.
    let pins = PinFacade::resolve(pinctrl)?;

    // Wake-capable edge interrupt.
    let mut bridge = IrqBridge::new(line, queue.sender());
    bridge.arm()?;

    // Virtual input device with its supported key set.
    let mut device = FpDevice::new(pins, input, node, clock);
    device.input_mut().register().map_err(|_err| {
        #[cfg(feature = "defmt")]
        defmt::error!("input device registration failed");
        CtlError::NoMemory
    })?;

    // Best-effort: a supply failure is logged, not fatal.
    if device.power(true).is_err() {
        #[cfg(feature = "defmt")]
        defmt::warn!("power-on failed, continuing");
    }

    // Become externally addressable.
    if device.node_mut().register().is_err() {
        #[cfg(feature = "defmt")]
        defmt::error!("device node registration failed");
        device.input_mut().unregister();
        return Err(CtlError::Busy);
    }

    device.mark_initialized();
    #[cfg(feature = "defmt")]
    defmt::info!("fingerprint device control driver registered");

    Ok(FpStack {
        device,
        bridge,
        events: queue.receiver(),
    })
}

/// Tear the stack down in reverse-acquisition order.
pub fn shutdown<P, L, R, N, C>(stack: FpStack<'_, P, L, R, N, C>)
where
    P: PinControl,
    L: InterruptLine,
    R: KeyReporter,
    N: DeviceNode,
    C: ClockGate,
{
    let FpStack {
        mut device,
        mut bridge,
        events: _,
    } = stack;

    device.input_mut().unregister();
    bridge.free();
    // the pin-state handles are released when the device (and its facade)
    // drops at the end of this scope
    device.node_mut().unregister();

    #[cfg(feature = "defmt")]
    defmt::info!("fingerprint device control driver released");
}
