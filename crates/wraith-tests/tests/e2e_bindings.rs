//! End-to-End Binding Tests
//!
//! Bind lines flow from the file through a scripted binding host and back
//! out in canonical token form.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wraith-tests --test e2e_bindings
//! ```

use pretty_assertions::assert_eq;

use wraith_config::keys::KEY_LEFTARROW;
use wraith_config::{ActionBinding, ControlDevice};
use wraith_tests::{ConfigFixture, RecordingHost};

/// Every recognized bind line reaches the host, quotes stripped, in file
/// order.
#[test]
fn bind_lines_are_dispatched_in_order() {
    let fixture = ConfigFixture::with_body(
        "bind 'w' +forward\n\
         bind space +use\n\
         bind mouse1 +fire\n\
         bind \"wheelup\" +map\n\
         bind righttrigger +fire\n",
    );

    let (host, calls) = RecordingHost::new();
    let mut store = fixture.store_with(host);
    let report = store.load_or_default();
    assert_eq!(report.load.bind_lines, 5);

    let calls = calls.borrow();
    let controls: Vec<&str> = calls.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(
        controls,
        vec!["w", "space", "mouse1", "wheelup", "righttrigger"]
    );
    assert!(calls.iter().all(|(_, action)| action.starts_with('+')));
}

/// Bound controls come back out as canonical tokens, grouped by action in
/// save order.
#[test]
fn bindings_save_in_canonical_token_form() {
    let fixture = ConfigFixture::with_body(
        "bind 'w' +forward\n\
         bind space +use\n\
         bind mouse1 +fire\n\
         bind wheelup +map\n\
         bind righttrigger +fire\n",
    );

    let (host, _calls) = RecordingHost::new();
    let mut store = fixture.store_with(host);
    store.load_or_default();

    let body = fixture.read();
    let bind_lines: Vec<&str> = body
        .lines()
        .filter(|line| line.starts_with("bind "))
        .collect();
    assert_eq!(
        bind_lines,
        vec![
            "bind mouse1 +fire",
            "bind righttrigger +fire",
            "bind 'w' +forward",
            "bind wheelup +map",
            "bind space +use",
        ]
    );
}

/// The keyboard "left" alias wins over the mouse button of the same idea;
/// mouse buttons use their own token vocabulary.
#[test]
fn device_vocabularies_do_not_collide() {
    let fixture = ConfigFixture::with_body("bind left +left\nbind mouse3 +fire\n");

    let (host, _calls) = RecordingHost::new();
    let mut store = fixture.store_with(host);
    store.load_or_default();

    let bindings = store.bindings();
    let left = find_action(&bindings, "+left");
    assert_eq!(left.get(ControlDevice::Keyboard), Some(KEY_LEFTARROW));
    assert_eq!(left.get(ControlDevice::Mouse), None);

    let fire = find_action(&bindings, "+fire");
    assert_eq!(fire.get(ControlDevice::Mouse), Some(2));

    let body = fixture.read();
    assert!(body.contains("bind left +left\n"));
    assert!(body.contains("bind mouse3 +fire\n"));
}

/// Binding the "-" control clears the keyboard slot, and the cleared
/// binding writes no line.
#[test]
fn dash_unbinds_a_keyboard_control() {
    let fixture = ConfigFixture::with_body("bind 'w' +forward\nbind - +forward\n");

    let (host, _calls) = RecordingHost::new();
    let mut store = fixture.store_with(host);
    store.load_or_default();

    let bindings = store.bindings();
    let forward = find_action(&bindings, "+forward");
    assert_eq!(forward.get(ControlDevice::Keyboard), None);
    assert!(!fixture.read().contains("+forward"));
}

/// Saved bind lines reload into an identical binding table.
#[test]
fn bindings_roundtrip_through_the_file() {
    let fixture = ConfigFixture::with_body(
        "bind 'q' +use\n\
         bind ctrl +fire\n\
         bind mouse2 +map\n\
         bind gamepad4 +run\n",
    );

    let (host, _calls) = RecordingHost::new();
    let mut store = fixture.store_with(host);
    store.load_or_default();
    let first = store.bindings();

    let (host, _calls) = RecordingHost::new();
    let mut store = fixture.store_with(host);
    store.load_or_default();
    assert_eq!(first, store.bindings());
}

fn find_action<'a>(bindings: &'a [ActionBinding], action: &str) -> &'a ActionBinding {
    bindings
        .iter()
        .find(|b| b.action == action)
        .unwrap_or_else(|| panic!("no `{action}` binding"))
}
