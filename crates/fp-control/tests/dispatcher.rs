//! Command-dispatcher scenarios.
//!
//! The table is closed: every listed opcode behaves per its contract and an
//! unrecognized opcode is invalid-argument with zero side effects.

use fp_control::{
    opcode, CtlError, FpDevice, KeyEvent, PinFacade, SensorKey, SliceXfer, VERSION_BUF_LEN,
};
use platform::input::KeyCode;
use platform::mocks::{MockClockGate, MockKeyReporter, MockNode, MockPinctrl};

struct Harness {
    device: FpDevice<MockPinctrl, MockKeyReporter, MockNode, MockClockGate>,
    pinctrl: MockPinctrl,
    reporter: MockKeyReporter,
    node: MockNode,
    clock: MockClockGate,
}

fn harness() -> Harness {
    let pinctrl = MockPinctrl::new();
    let reporter = MockKeyReporter::new();
    let node = MockNode::new();
    let clock = MockClockGate::new();
    let pins = PinFacade::resolve(pinctrl.clone()).expect("resolve");
    let device = FpDevice::new(pins, reporter.clone(), node.clone(), clock.clone());
    Harness {
        device,
        pinctrl,
        reporter,
        node,
        clock,
    }
}

#[tokio::test]
async fn report_key_event_injects_enter_press() {
    let mut h = harness();
    h.device.open();

    let mut payload = KeyEvent {
        key: SensorKey::Enter as u32,
        pressed: true,
    }
    .to_bytes();
    let mut xfer = SliceXfer::new(&mut payload);
    h.device
        .ioctl(opcode::REPORT_KEY_EVENT, &mut xfer)
        .await
        .expect("dispatch");

    assert_eq!(h.reporter.reports(), vec![(KeyCode::Enter, true)]);
    assert_eq!(h.reporter.sync_count(), 1);
}

#[tokio::test]
async fn report_key_event_fault_has_no_side_effect() {
    let mut h = harness();

    let mut short = [0u8; 2];
    let mut xfer = SliceXfer::new(&mut short);
    assert_eq!(
        h.device.ioctl(opcode::REPORT_KEY_EVENT, &mut xfer).await,
        Err(CtlError::Fault)
    );
    assert!(h.reporter.reports().is_empty());
    assert_eq!(h.reporter.sync_count(), 0);
}

#[tokio::test]
async fn reset_device_runs_the_pulse() {
    let mut h = harness();
    h.device.open();

    let mut none = [0u8; 0];
    let mut xfer = SliceXfer::new(&mut none);
    h.device
        .ioctl(opcode::RESET_DEVICE, &mut xfer)
        .await
        .expect("dispatch");

    assert_eq!(
        h.pinctrl.selections(),
        vec!["reset_high", "reset_low", "reset_high"]
    );
}

#[tokio::test]
async fn reset_device_swallows_pulse_errors() {
    let mut h = harness();
    h.pinctrl.fail_select("reset_high");

    let mut none = [0u8; 0];
    let mut xfer = SliceXfer::new(&mut none);
    // The pulse's own error is logged, not surfaced to the caller.
    h.device
        .ioctl(opcode::RESET_DEVICE, &mut xfer)
        .await
        .expect("dispatch");
    assert_eq!(h.pinctrl.selections().len(), 3);
}

#[tokio::test]
async fn spi_clk_opcodes_delegate_to_the_gate() {
    let mut h = harness();
    let mut none = [0u8; 0];
    let mut xfer = SliceXfer::new(&mut none);

    h.device
        .ioctl(opcode::ENABLE_SPI_CLK, &mut xfer)
        .await
        .expect("enable");
    assert!(h.clock.is_enabled());
    h.device
        .ioctl(opcode::DISABLE_SPI_CLK, &mut xfer)
        .await
        .expect("disable");
    assert!(!h.clock.is_enabled());
    assert_eq!(h.clock.transitions(), vec![true, false]);
}

#[tokio::test]
async fn clock_gate_failure_is_surfaced() {
    let mut h = harness();
    h.clock.fail_next();
    let mut none = [0u8; 0];
    let mut xfer = SliceXfer::new(&mut none);
    assert_eq!(
        h.device.ioctl(opcode::ENABLE_SPI_CLK, &mut xfer).await,
        Err(CtlError::Io)
    );
}

#[tokio::test]
async fn reserved_and_stub_opcodes_return_success_without_effect() {
    let mut h = harness();
    let mut none = [0u8; 0];

    for op in [
        opcode::INIT_DRIVER,
        opcode::DEINIT_DRIVER,
        opcode::ENABLE_IRQ,
        opcode::DISABLE_IRQ,
        opcode::REQUEST_IRQ,
        opcode::ENABLE_POWER,
        opcode::DISABLE_POWER,
        opcode::SYNC_CONFIG,
    ] {
        let mut xfer = SliceXfer::new(&mut none);
        h.device
            .ioctl(op, &mut xfer)
            .await
            .unwrap_or_else(|err| panic!("opcode {op} must succeed, got {err:?}"));
    }

    assert!(h.pinctrl.selections().is_empty());
    assert!(h.reporter.reports().is_empty());
    assert!(h.node.events().is_empty());
    assert!(h.clock.transitions().is_empty());
}

#[tokio::test]
async fn get_version_returns_a_stable_null_terminated_string() {
    let mut h = harness();

    let mut first = [0xFFu8; VERSION_BUF_LEN];
    let mut xfer = SliceXfer::new(&mut first);
    h.device
        .ioctl(opcode::GET_VERSION, &mut xfer)
        .await
        .expect("dispatch");

    let terminator = first
        .iter()
        .position(|&b| b == 0)
        .expect("null terminator within the buffer");
    assert!(terminator > 0, "version string must be non-empty");
    assert_eq!(&first[..terminator], fp_control::DRIVER_VERSION.as_bytes());

    let mut second = [0u8; VERSION_BUF_LEN];
    let mut xfer = SliceXfer::new(&mut second);
    h.device
        .ioctl(opcode::GET_VERSION, &mut xfer)
        .await
        .expect("dispatch");
    assert_eq!(first, second, "identical across repeated calls");
}

#[tokio::test]
async fn unknown_opcode_is_invalid_argument_with_zero_side_effects() {
    let mut h = harness();
    let mut none = [0u8; 0];
    let mut xfer = SliceXfer::new(&mut none);

    assert_eq!(
        h.device.ioctl(0xDEAD_BEEF, &mut xfer).await,
        Err(CtlError::InvalidArgument)
    );

    assert!(h.pinctrl.selections().is_empty());
    assert!(h.reporter.reports().is_empty());
    assert!(h.node.events().is_empty());
    assert!(h.clock.transitions().is_empty());
}
