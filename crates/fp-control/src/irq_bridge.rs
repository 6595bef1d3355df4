//! Interrupt bridge
//!
//! Turns the sensor's hardware edge interrupt into deferred work. The
//! handler path is fully non-blocking: it masks the line, enqueues one work
//! item, and unmasks the line before returning. Masking trades a small
//! window of missed edges for bounded handler latency; the deferred item is
//! consumed on a separate execution context (see [`crate::events`]).

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use platform::irq::{InterruptLine, InterruptMode, IrqConfig};

use crate::error::CtlError;

/// Depth of the deferred-work queue.
///
/// Edges arrive no faster than the worker drains in practice; a full queue
/// drops the new item rather than blocking the handler.
pub const WORK_QUEUE_DEPTH: usize = 4;

/// Deferred work scheduled by the interrupt handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WorkItem {
    /// The sensor pulled its interrupt line low: finger activity.
    SensorEvent,
}

/// The bounded queue between the interrupt path and the event worker.
pub type WorkQueue = Channel<CriticalSectionRawMutex, WorkItem, WORK_QUEUE_DEPTH>;

/// Producer endpoint (interrupt side).
pub type WorkSender<'q> = Sender<'q, CriticalSectionRawMutex, WorkItem, WORK_QUEUE_DEPTH>;

/// Consumer endpoint (worker side).
pub type WorkReceiver<'q> = Receiver<'q, CriticalSectionRawMutex, WorkItem, WORK_QUEUE_DEPTH>;

/// Arming state of the interrupt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineState {
    /// Line not requested, or torn down.
    Disarmed,
    /// Line enabled, waiting for an edge.
    Armed,
    /// Edge being handled; line masked.
    Firing,
}

/// Bridges the hardware edge interrupt to the deferred-work queue.
pub struct IrqBridge<'q, L: InterruptLine> {
    line: L,
    state: LineState,
    tx: WorkSender<'q>,
    dropped: u32,
}

impl<'q, L: InterruptLine> IrqBridge<'q, L> {
    /// Wrap an unrequested line and the queue's producer endpoint.
    pub fn new(line: L, tx: WorkSender<'q>) -> Self {
        Self {
            line,
            state: LineState::Disarmed,
            tx,
            dropped: 0,
        }
    }

    /// Request the line (falling edge, one-shot, wake-capable) and arm it.
    pub fn arm(&mut self) -> Result<(), CtlError> {
        self.line
            .request(IrqConfig {
                trigger: InterruptMode::FallingEdge,
                oneshot: true,
                wake: true,
            })
            .map_err(|_err| {
                #[cfg(feature = "defmt")]
                defmt::error!("interrupt request failed");
                CtlError::Busy
            })?;
        self.state = LineState::Armed;
        Ok(())
    }

    /// Current arming state.
    pub fn state(&self) -> LineState {
        self.state
    }

    /// Whether the hardware line is unmasked.
    pub fn line_enabled(&self) -> bool {
        self.line.is_enabled()
    }

    /// Work items dropped on a full queue since arming.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    /// Wait for the next edge and run the handler path once.
    pub async fn wait_edge(&mut self) {
        self.line.wait_for_falling_edge().await;
        self.handle_edge();
    }

    /// The armed loop; feed this to the interrupt-context task.
    pub async fn run(&mut self) -> ! {
        loop {
            self.wait_edge().await;
        }
    }

    /// Handler path: mask, enqueue, unmask. Must not block.
    fn handle_edge(&mut self) {
        if self.state != LineState::Armed {
            return;
        }
        self.line.disable_nosync();
        self.state = LineState::Firing;
        if self.tx.try_send(WorkItem::SensorEvent).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("work queue full, sensor event dropped");
        }
        if self.line.enable().is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("interrupt re-enable failed");
        }
        self.state = LineState::Armed;
    }

    /// Mask the line and leave the armed loop.
    pub fn disarm(&mut self) {
        if self.state != LineState::Disarmed {
            self.line.disable_nosync();
            self.state = LineState::Disarmed;
        }
    }

    /// Disarm and unregister the line. Safe after a partial startup.
    pub fn free(&mut self) {
        self.disarm();
        self.line.free();
    }
}
