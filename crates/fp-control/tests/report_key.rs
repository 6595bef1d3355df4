//! Tests for key-event reporting.
//!
//! Every mapped sensor key produces exactly one input event per call; an
//! unmapped identifier produces exactly one Unknown-code event, not zero,
//! not an error.

use fp_control::keys::{report_key, KeyEvent, SensorKey};
use platform::input::KeyCode;
use platform::mocks::MockKeyReporter;

#[test]
fn every_mapped_key_emits_one_event() {
    let table = [
        (SensorKey::Home, KeyCode::F3),
        (SensorKey::Menu, KeyCode::Menu),
        (SensorKey::Back, KeyCode::Back),
        (SensorKey::F19, KeyCode::F19),
        (SensorKey::F20, KeyCode::F20),
        (SensorKey::F21, KeyCode::F21),
        (SensorKey::Enter, KeyCode::Enter),
        (SensorKey::Up, KeyCode::Up),
        (SensorKey::Left, KeyCode::Left),
        (SensorKey::Right, KeyCode::Right),
        (SensorKey::Down, KeyCode::Down),
        (SensorKey::Wakeup, KeyCode::Wakeup),
    ];

    for (key, expected) in table {
        let mut reporter = MockKeyReporter::new();
        let event = KeyEvent {
            key: key as u32,
            pressed: true,
        };
        report_key(&mut reporter, &event).expect("report");
        assert_eq!(reporter.reports(), vec![(expected, true)]);
        assert_eq!(reporter.sync_count(), 1, "one input frame per call");
    }
}

#[test]
fn unmapped_identifier_emits_one_unknown_event() {
    let mut reporter = MockKeyReporter::new();
    let event = KeyEvent {
        key: 0xDEAD,
        pressed: true,
    };
    report_key(&mut reporter, &event).expect("unmapped ids are not an error");
    assert_eq!(reporter.reports(), vec![(KeyCode::Unknown, true)]);
}

#[test]
fn release_transitions_carry_value_false() {
    let mut reporter = MockKeyReporter::new();
    let event = KeyEvent {
        key: SensorKey::Enter as u32,
        pressed: false,
    };
    report_key(&mut reporter, &event).expect("report");
    assert_eq!(reporter.reports(), vec![(KeyCode::Enter, false)]);
}

#[test]
fn identical_calls_emit_two_events() {
    let mut reporter = MockKeyReporter::new();
    let event = KeyEvent {
        key: SensorKey::Enter as u32,
        pressed: true,
    };
    report_key(&mut reporter, &event).expect("first");
    report_key(&mut reporter, &event).expect("second");
    assert_eq!(
        reporter.reports(),
        vec![(KeyCode::Enter, true), (KeyCode::Enter, true)]
    );
    assert_eq!(reporter.sync_count(), 2);
}
