//! Display-state event capability
//!
//! The control core only needs to know when the display turns on or off so
//! it can re-publish the transition to its listeners. Different platforms
//! deliver that signal differently (a blank/unblank notifier chain on some,
//! explicit suspend/resume hooks on others), so both delivery flavors
//! implement one [`DisplayStateSource`] capability and the core depends on
//! nothing else.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Depth of the pending display-state queues.
///
/// Display transitions are rare; a shallow queue is plenty, and a full queue
/// drops the oldest-unconsumed semantics in favor of dropping the new event
/// (same policy as the interrupt work queue).
const STATE_QUEUE_DEPTH: usize = 4;

/// Display power state as seen by event listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Display is on (unblank / late resume)
    On,
    /// Display is off (powerdown / early suspend)
    Off,
}

/// Raw blank level reported by a display-blank notifier chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlankLevel {
    /// Display fully on
    Unblank,
    /// Blanked, sync signals still running
    Normal,
    /// Vertical sync suspended
    VsyncSuspend,
    /// Horizontal sync suspended
    HsyncSuspend,
    /// Display powered down
    Powerdown,
}

/// Source of display on/off transitions.
pub trait DisplayStateSource {
    /// Wait for the next display-state change.
    fn next_change(&mut self) -> impl core::future::Future<Output = DisplayState>;
}

/// Display-blank notifier flavor of [`DisplayStateSource`].
///
/// The platform's blank notifier chain calls [`BlankNotifier::notify`] with
/// every blank-level transition; only `Unblank` and `Powerdown` are
/// forwarded, the intermediate sync-suspend levels are ignored.
pub struct BlankNotifier {
    queue: Channel<CriticalSectionRawMutex, DisplayState, STATE_QUEUE_DEPTH>,
}

impl BlankNotifier {
    /// Create an idle notifier.
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
        }
    }

    /// Notifier-chain callback. Returns `true` if the level produced a
    /// forwarded state change (`false`: ignored level or full queue).
    pub fn notify(&self, level: BlankLevel) -> bool {
        let state = match level {
            BlankLevel::Unblank => DisplayState::On,
            BlankLevel::Powerdown => DisplayState::Off,
            // other notifier levels, ignore
            BlankLevel::Normal | BlankLevel::VsyncSuspend | BlankLevel::HsyncSuspend => {
                return false;
            }
        };
        self.queue.try_send(state).is_ok()
    }
}

impl Default for BlankNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayStateSource for BlankNotifier {
    async fn next_change(&mut self) -> DisplayState {
        self.queue.receive().await
    }
}

/// Early-suspend flavor of [`DisplayStateSource`].
///
/// Platforms without a blank notifier chain call [`SuspendHooks::suspend`] /
/// [`SuspendHooks::resume`] directly from their power-management hooks.
pub struct SuspendHooks {
    queue: Channel<CriticalSectionRawMutex, DisplayState, STATE_QUEUE_DEPTH>,
}

impl SuspendHooks {
    /// Create an idle hook pair.
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
        }
    }

    /// Early-suspend hook: the display is going dark.
    pub fn suspend(&self) {
        let _ = self.queue.try_send(DisplayState::Off);
    }

    /// Late-resume hook: the display is back on.
    pub fn resume(&self) {
        let _ = self.queue.try_send(DisplayState::On);
    }
}

impl Default for SuspendHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayStateSource for SuspendHooks {
    async fn next_change(&mut self) -> DisplayState {
        self.queue.receive().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unblank_forwards_on() {
        let notifier = BlankNotifier::new();
        assert!(notifier.notify(BlankLevel::Unblank));
        assert_eq!(notifier.queue.try_receive().ok(), Some(DisplayState::On));
    }

    #[test]
    fn powerdown_forwards_off() {
        let notifier = BlankNotifier::new();
        assert!(notifier.notify(BlankLevel::Powerdown));
        assert_eq!(notifier.queue.try_receive().ok(), Some(DisplayState::Off));
    }

    #[test]
    fn intermediate_levels_are_ignored() {
        let notifier = BlankNotifier::new();
        assert!(!notifier.notify(BlankLevel::Normal));
        assert!(!notifier.notify(BlankLevel::VsyncSuspend));
        assert!(!notifier.notify(BlankLevel::HsyncSuspend));
        assert!(notifier.queue.try_receive().is_err());
    }

    #[test]
    fn full_queue_drops_new_events() {
        let notifier = BlankNotifier::new();
        for _ in 0..STATE_QUEUE_DEPTH {
            assert!(notifier.notify(BlankLevel::Unblank));
        }
        assert!(!notifier.notify(BlankLevel::Unblank));
    }

    #[test]
    fn suspend_hooks_map_to_states() {
        let hooks = SuspendHooks::new();
        hooks.suspend();
        hooks.resume();
        assert_eq!(hooks.queue.try_receive().ok(), Some(DisplayState::Off));
        assert_eq!(hooks.queue.try_receive().ok(), Some(DisplayState::On));
    }
}
