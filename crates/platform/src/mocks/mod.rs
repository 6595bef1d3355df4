//! Mock implementations for testing
//!
//! Mock implementations of all platform traits for use in unit and
//! integration tests. Each mock shares its recording state across clones
//! (the interrupt line pairs with a [`MockIrqTrigger`] handle instead), so a
//! test keeps a handle for verification after moving the mock into the code
//! under test.

#![cfg(any(test, feature = "std"))]
// Recording mutexes are only poisoned if an assertion fires while held;
// unwrapping keeps the mock call sites readable.
#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use std::string::{String, ToString};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use std::vec::Vec;

use crate::clock::ClockGate;
use crate::input::{KeyCode, KeyReporter};
use crate::irq::{InterruptLine, IrqConfig};
use crate::node::DeviceNode;
use crate::pinctrl::{PinControl, PinctrlError};

/// Error type shared by all mocks; injected via the `fail_*` knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

// ---------------------------------------------------------------------------
// MockPinctrl
// ---------------------------------------------------------------------------

#[derive(Default)]
struct PinctrlInner {
    missing: Vec<String>,
    failing: Vec<String>,
    lookups: Vec<String>,
    selections: Vec<(String, Instant)>,
}

/// Mock pin-state controller.
///
/// States are their own names; selections are recorded with a host
/// timestamp so tests can verify the reset pulse holds.
#[derive(Clone, Default)]
pub struct MockPinctrl {
    inner: Arc<Mutex<PinctrlInner>>,
}

impl MockPinctrl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `name` unresolvable.
    pub fn mark_missing(&self, name: &str) {
        self.inner.lock().unwrap().missing.push(name.to_string());
    }

    /// Make every selection of `name` fail with an I/O error.
    pub fn fail_select(&self, name: &str) {
        self.inner.lock().unwrap().failing.push(name.to_string());
    }

    /// Names looked up, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.inner.lock().unwrap().lookups.clone()
    }

    /// State names selected, in order (failed selections included).
    pub fn selections(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .selections
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Host timestamps of each selection, in order.
    pub fn selection_times(&self) -> Vec<Instant> {
        self.inner
            .lock()
            .unwrap()
            .selections
            .iter()
            .map(|(_, at)| *at)
            .collect()
    }
}

impl PinControl for MockPinctrl {
    type State = String;

    fn lookup_state(&mut self, name: &str) -> Result<String, PinctrlError> {
        let mut inner = self.inner.lock().unwrap();
        inner.lookups.push(name.to_string());
        if inner.missing.iter().any(|missing| missing == name) {
            return Err(PinctrlError::StateNotFound);
        }
        Ok(name.to_string())
    }

    fn select_state(&mut self, state: &String) -> Result<(), PinctrlError> {
        let mut inner = self.inner.lock().unwrap();
        inner.selections.push((state.clone(), Instant::now()));
        if inner.failing.iter().any(|failing| failing == state) {
            return Err(PinctrlError::Io);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MockIrqLine
// ---------------------------------------------------------------------------

struct LineShared {
    edge: Signal<CriticalSectionRawMutex, ()>,
    enabled: AtomicBool,
    freed: AtomicBool,
    fail_request: AtomicBool,
    requested: Mutex<Option<IrqConfig>>,
    disables: AtomicU32,
    enables: AtomicU32,
}

impl Default for LineShared {
    fn default() -> Self {
        Self {
            edge: Signal::new(),
            enabled: AtomicBool::new(false),
            freed: AtomicBool::new(false),
            fail_request: AtomicBool::new(false),
            requested: Mutex::new(None),
            disables: AtomicU32::new(0),
            enables: AtomicU32::new(0),
        }
    }
}

/// Mock interrupt line. Edges are injected through the paired
/// [`MockIrqTrigger`], which also exposes the line's observable state.
#[derive(Default)]
pub struct MockIrqLine {
    shared: Arc<LineShared>,
}

/// Verification/injection handle for a [`MockIrqLine`].
#[derive(Clone)]
pub struct MockIrqTrigger {
    shared: Arc<LineShared>,
}

impl MockIrqLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Obtain the paired trigger/verification handle.
    pub fn trigger(&self) -> MockIrqTrigger {
        MockIrqTrigger {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Make the next `request` call fail.
    pub fn fail_request(&self) {
        self.shared.fail_request.store(true, Ordering::SeqCst);
    }
}

impl MockIrqTrigger {
    /// Inject one hardware edge.
    pub fn fire(&self) {
        self.shared.edge.signal(());
    }

    pub fn is_enabled(&self) -> bool {
        self.shared.enabled.load(Ordering::SeqCst)
    }

    pub fn is_freed(&self) -> bool {
        self.shared.freed.load(Ordering::SeqCst)
    }

    /// Configuration of the last successful request, if any.
    pub fn config(&self) -> Option<IrqConfig> {
        *self.shared.requested.lock().unwrap()
    }

    pub fn disable_count(&self) -> u32 {
        self.shared.disables.load(Ordering::SeqCst)
    }

    pub fn enable_count(&self) -> u32 {
        self.shared.enables.load(Ordering::SeqCst)
    }
}

impl InterruptLine for MockIrqLine {
    type Error = MockError;

    fn request(&mut self, config: IrqConfig) -> Result<(), MockError> {
        if self.shared.fail_request.swap(false, Ordering::SeqCst) {
            return Err(MockError);
        }
        *self.shared.requested.lock().unwrap() = Some(config);
        self.shared.freed.store(false, Ordering::SeqCst);
        self.shared.enabled.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn free(&mut self) {
        self.shared.enabled.store(false, Ordering::SeqCst);
        self.shared.freed.store(true, Ordering::SeqCst);
        *self.shared.requested.lock().unwrap() = None;
    }

    fn enable(&mut self) -> Result<(), MockError> {
        self.shared.enables.fetch_add(1, Ordering::SeqCst);
        self.shared.enabled.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn disable_nosync(&mut self) {
        self.shared.disables.fetch_add(1, Ordering::SeqCst);
        self.shared.enabled.store(false, Ordering::SeqCst);
    }

    fn is_enabled(&self) -> bool {
        self.shared.enabled.load(Ordering::SeqCst)
    }

    async fn wait_for_falling_edge(&mut self) {
        self.shared.edge.wait().await;
    }
}

// ---------------------------------------------------------------------------
// MockKeyReporter
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ReporterInner {
    registered: bool,
    fail_register: bool,
    reports: Vec<(KeyCode, bool)>,
    syncs: usize,
    unregisters: usize,
}

/// Mock virtual input device; records reported key transitions.
#[derive(Clone, Default)]
pub struct MockKeyReporter {
    inner: Arc<Mutex<ReporterInner>>,
}

impl MockKeyReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `register` call fail.
    pub fn fail_register(&self) {
        self.inner.lock().unwrap().fail_register = true;
    }

    pub fn is_registered(&self) -> bool {
        self.inner.lock().unwrap().registered
    }

    /// Reported `(code, pressed)` transitions, in order.
    pub fn reports(&self) -> Vec<(KeyCode, bool)> {
        self.inner.lock().unwrap().reports.clone()
    }

    pub fn sync_count(&self) -> usize {
        self.inner.lock().unwrap().syncs
    }

    pub fn unregister_count(&self) -> usize {
        self.inner.lock().unwrap().unregisters
    }
}

impl KeyReporter for MockKeyReporter {
    type Error = MockError;

    fn register(&mut self) -> Result<(), MockError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_register {
            inner.fail_register = false;
            return Err(MockError);
        }
        inner.registered = true;
        Ok(())
    }

    fn unregister(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.registered = false;
        inner.unregisters = inner.unregisters.saturating_add(1);
    }

    fn report_key(&mut self, code: KeyCode, pressed: bool) -> Result<(), MockError> {
        self.inner.lock().unwrap().reports.push((code, pressed));
        Ok(())
    }

    fn sync(&mut self) -> Result<(), MockError> {
        let mut inner = self.inner.lock().unwrap();
        inner.syncs = inner.syncs.saturating_add(1);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MockNode
// ---------------------------------------------------------------------------

#[derive(Default)]
struct NodeInner {
    registered: AtomicBool,
    fail_register: AtomicBool,
    unregisters: AtomicU32,
    events: Mutex<Vec<String>>,
}

/// Mock device node; records published `KEY=value` notifications.
#[derive(Clone, Default)]
pub struct MockNode {
    inner: Arc<NodeInner>,
}

impl MockNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `register` call fail.
    pub fn fail_register(&self) {
        self.inner.fail_register.store(true, Ordering::SeqCst);
    }

    pub fn is_registered(&self) -> bool {
        self.inner.registered.load(Ordering::SeqCst)
    }

    pub fn unregister_count(&self) -> u32 {
        self.inner.unregisters.load(Ordering::SeqCst)
    }

    /// Published notifications, in order.
    pub fn events(&self) -> Vec<String> {
        self.inner.events.lock().unwrap().clone()
    }
}

impl DeviceNode for MockNode {
    type Error = MockError;

    fn register(&mut self) -> Result<(), MockError> {
        if self.inner.fail_register.swap(false, Ordering::SeqCst) {
            return Err(MockError);
        }
        self.inner.registered.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn unregister(&mut self) {
        self.inner.registered.store(false, Ordering::SeqCst);
        self.inner.unregisters.fetch_add(1, Ordering::SeqCst);
    }

    fn publish(&self, env: &str) -> Result<(), MockError> {
        self.inner.events.lock().unwrap().push(env.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MockClockGate
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ClockInner {
    enabled: bool,
    fail_next: bool,
    transitions: Vec<bool>,
}

/// Mock peripheral clock gate; records every transition request.
#[derive(Clone, Default)]
pub struct MockClockGate {
    inner: Arc<Mutex<ClockInner>>,
}

impl MockClockGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `set_enabled` call fail.
    pub fn fail_next(&self) {
        self.inner.lock().unwrap().fail_next = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.lock().unwrap().enabled
    }

    /// Requested transitions, in order.
    pub fn transitions(&self) -> Vec<bool> {
        self.inner.lock().unwrap().transitions.clone()
    }
}

impl ClockGate for MockClockGate {
    type Error = MockError;

    fn set_enabled(&mut self, on: bool) -> Result<(), MockError> {
        let mut inner = self.inner.lock().unwrap();
        inner.transitions.push(on);
        if inner.fail_next {
            inner.fail_next = false;
            return Err(MockError);
        }
        inner.enabled = on;
        Ok(())
    }
}
