//! Device-state-change notifications and the workers that publish them
//!
//! Two producers feed the device node's listeners: the deferred-work
//! consumer (sensor interrupts) and the screen monitor (display on/off
//! transitions). Neither touches hardware; both run on contexts that may
//! block.

use heapless::String;
use platform::display::{DisplayState, DisplayStateSource};
use platform::node::DeviceNode;

use crate::error::CtlError;
use crate::irq_bridge::{WorkItem, WorkReceiver};

/// Max length of a notification payload.
pub const ENV_LEN: usize = 32;

/// Device-state changes published to node listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateChange {
    /// Finger activity on the sensor.
    FingerDetected,
    /// The display turned on.
    ScreenOn,
    /// The display turned off.
    ScreenOff,
}

impl StateChange {
    /// Notification key.
    pub fn key(self) -> &'static str {
        match self {
            Self::FingerDetected => "SPI_STATE",
            Self::ScreenOn | Self::ScreenOff => "SCREEN_STATUS",
        }
    }

    /// Notification value.
    pub fn value(self) -> &'static str {
        match self {
            Self::FingerDetected => "finger",
            Self::ScreenOn => "ON",
            Self::ScreenOff => "OFF",
        }
    }

    /// `KEY=value` payload as published on the device node.
    pub fn env(self) -> String<ENV_LEN> {
        let mut env = String::new();
        let _ = env.push_str(self.key());
        let _ = env.push('=');
        let _ = env.push_str(self.value());
        env
    }
}

/// Publish one state change on the node.
pub fn publish<N: DeviceNode>(node: &N, change: StateChange) -> Result<(), CtlError> {
    node.publish(change.env().as_str()).map_err(|_err| {
        #[cfg(feature = "defmt")]
        defmt::warn!("notification publish failed");
        CtlError::Io
    })
}

/// Consume one deferred work item and publish its notification.
pub async fn process_one<N: DeviceNode>(rx: &WorkReceiver<'_>, node: &N) {
    match rx.receive().await {
        WorkItem::SensorEvent => {
            let _ = publish(node, StateChange::FingerDetected);
        }
    }
}

/// Deferred-work consumer loop; feed this to a worker-context task.
pub async fn event_worker<N: DeviceNode>(rx: WorkReceiver<'_>, node: &N) -> ! {
    loop {
        process_one(&rx, node).await;
    }
}

/// Forward one display-state change to the node's listeners.
pub async fn forward_one<S: DisplayStateSource, N: DeviceNode>(source: &mut S, node: &N) {
    let change = match source.next_change().await {
        DisplayState::On => StateChange::ScreenOn,
        DisplayState::Off => StateChange::ScreenOff,
    };
    let _ = publish(node, change);
}

/// Screen monitor loop; republishes display transitions.
pub async fn screen_monitor<S: DisplayStateSource, N: DeviceNode>(source: &mut S, node: &N) -> ! {
    loop {
        forward_one(source, node).await;
    }
}
