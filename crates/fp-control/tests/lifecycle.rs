//! Lifecycle ordering: strictly ordered startup with abort-on-failure, and
//! the mirrored teardown that tolerates a partial startup.

use fp_control::irq_bridge::WorkQueue;
use fp_control::{lifecycle, CtlError};
use platform::irq::InterruptMode;
use platform::mocks::{MockClockGate, MockIrqLine, MockKeyReporter, MockNode, MockPinctrl};

#[test]
fn successful_start_acquires_everything_in_order() {
    let queue = WorkQueue::new();
    let pinctrl = MockPinctrl::new();
    let line = MockIrqLine::new();
    let trigger = line.trigger();
    let reporter = MockKeyReporter::new();
    let node = MockNode::new();

    let stack = lifecycle::start(
        &queue,
        pinctrl.clone(),
        line,
        reporter.clone(),
        node.clone(),
        MockClockGate::new(),
    )
    .expect("start");

    // pin table fully resolved
    assert_eq!(
        pinctrl.lookups(),
        vec!["power_on", "power_off", "reset_low", "reset_high"]
    );
    // wake-capable falling-edge one-shot interrupt armed
    let config = trigger.config().expect("line requested");
    assert_eq!(config.trigger, InterruptMode::FallingEdge);
    assert!(config.oneshot);
    assert!(config.wake);
    assert!(trigger.is_enabled());
    // input device and node registered, supply on, instance initialized
    assert!(reporter.is_registered());
    assert!(node.is_registered());
    assert_eq!(pinctrl.selections(), vec!["power_on"]);
    assert!(stack.device.is_initialized());
    assert!(stack.device.is_power_on());
}

#[test]
fn missing_pin_state_aborts_before_any_acquisition() {
    let queue = WorkQueue::new();
    let pinctrl = MockPinctrl::new();
    pinctrl.mark_missing("reset_low");
    let line = MockIrqLine::new();
    let trigger = line.trigger();
    let reporter = MockKeyReporter::new();
    let node = MockNode::new();

    let result = lifecycle::start(
        &queue,
        pinctrl,
        line,
        reporter.clone(),
        node.clone(),
        MockClockGate::new(),
    );

    assert!(matches!(result, Err(CtlError::NotFound)));
    assert!(trigger.config().is_none(), "interrupt never requested");
    assert!(!reporter.is_registered());
    assert!(!node.is_registered());
}

#[test]
fn failed_interrupt_request_aborts_startup() {
    let queue = WorkQueue::new();
    let line = MockIrqLine::new();
    line.fail_request();
    let reporter = MockKeyReporter::new();
    let node = MockNode::new();

    let result = lifecycle::start(
        &queue,
        MockPinctrl::new(),
        line,
        reporter.clone(),
        node.clone(),
        MockClockGate::new(),
    );

    assert!(matches!(result, Err(CtlError::Busy)));
    assert!(!reporter.is_registered());
    assert!(!node.is_registered());
}

#[test]
fn failed_input_registration_aborts_startup() {
    let queue = WorkQueue::new();
    let reporter = MockKeyReporter::new();
    reporter.fail_register();
    let node = MockNode::new();

    let result = lifecycle::start(
        &queue,
        MockPinctrl::new(),
        MockIrqLine::new(),
        reporter,
        node.clone(),
        MockClockGate::new(),
    );

    assert!(matches!(result, Err(CtlError::NoMemory)));
    assert!(!node.is_registered());
}

#[test]
fn power_on_failure_is_not_fatal() {
    let queue = WorkQueue::new();
    let pinctrl = MockPinctrl::new();
    pinctrl.fail_select("power_on");
    let node = MockNode::new();

    let stack = lifecycle::start(
        &queue,
        pinctrl,
        MockIrqLine::new(),
        MockKeyReporter::new(),
        node.clone(),
        MockClockGate::new(),
    )
    .expect("best-effort power-on must not abort startup");

    assert!(node.is_registered());
    assert!(stack.device.is_initialized());
    assert!(!stack.device.is_power_on());
}

#[test]
fn failed_node_registration_rolls_back_the_input_device() {
    let queue = WorkQueue::new();
    let reporter = MockKeyReporter::new();
    let node = MockNode::new();
    node.fail_register();

    let result = lifecycle::start(
        &queue,
        MockPinctrl::new(),
        MockIrqLine::new(),
        reporter.clone(),
        node.clone(),
        MockClockGate::new(),
    );

    assert!(matches!(result, Err(CtlError::Busy)));
    assert!(!reporter.is_registered());
    assert_eq!(reporter.unregister_count(), 1);
    assert!(!node.is_registered());
}

#[test]
fn shutdown_releases_in_reverse_order() {
    let queue = WorkQueue::new();
    let line = MockIrqLine::new();
    let trigger = line.trigger();
    let reporter = MockKeyReporter::new();
    let node = MockNode::new();

    let stack = lifecycle::start(
        &queue,
        MockPinctrl::new(),
        line,
        reporter.clone(),
        node.clone(),
        MockClockGate::new(),
    )
    .expect("start");

    lifecycle::shutdown(stack);

    assert!(!reporter.is_registered());
    assert_eq!(reporter.unregister_count(), 1);
    assert!(trigger.is_freed());
    assert!(!trigger.is_enabled());
    assert!(!node.is_registered());
    assert_eq!(node.unregister_count(), 1);
}
