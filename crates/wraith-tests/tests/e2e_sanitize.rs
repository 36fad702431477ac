//! End-to-End Sanitization Tests
//!
//! An out-of-range settings file goes in; a corrected file the engine can
//! run with comes out, with machine-readable correction notes.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wraith-tests --test e2e_sanitize
//! ```

use pretty_assertions::assert_eq;

use wraith_tests::{ConfigFixture, OUT_OF_RANGE_BODY};

/// Every correction category lands on disk after one startup.
#[test]
fn out_of_range_file_is_corrected_on_disk() {
    let fixture = ConfigFixture::with_body(OUT_OF_RANGE_BODY);

    let mut store = fixture.store();
    let report = store.load_or_default();
    assert!(report.load.is_clean());
    assert!(report.sanitize.changed());
    assert!(report.saved);

    let body = fixture.read();
    assert!(body.contains("pm_alwaysrun off\n"));
    assert!(body.contains("m_sensitivity 128\n"));
    assert!(body.contains("gp_deadzone_left 100%\n"));
    assert!(body.contains("r_gamma 2.0\n"));
    assert!(body.contains("r_detail high\n"));
    assert!(body.contains("vid_scalefilter \"nearest\"\n"));
    assert!(body.contains("r_lowpixelwidth 16\n"));
    assert!(body.contains("vid_screenwidth desktop\n"));
    assert!(body.contains("vid_screenheight desktop\n"));
    assert!(body.contains("vid_windowwidth 640\n"));
    assert!(body.contains("vid_windowheight 480\n"));

    // Full view plus widescreen hand-back: the hud may stay hidden and the
    // held flag is re-asserted in the file.
    assert!(body.contains("r_viewsize 8\n"));
    assert!(body.contains("r_hud off\n"));
    assert!(body.contains("vid_widescreen on\n"));
    assert!(store.widescreen_requested());
}

/// Derived engine values track the corrected settings.
#[test]
fn derived_values_follow_the_corrections() {
    let fixture = ConfigFixture::with_body(OUT_OF_RANGE_BODY);

    let mut store = fixture.store();
    store.load_or_default();

    let derived = store.derived();
    // Volumes default to 100% -> 15 mixer steps.
    assert_eq!(derived.music_volume, 15);
    assert_eq!(derived.sfx_volume, 15);
    // Gamma clamped to 2.00, the top of the curve table.
    assert_eq!(derived.gamma_index, 30);
    // Deadzone clamped to 100% of the axis range.
    assert_eq!(derived.gamepad_deadzone_left, 32767);
}

/// Correction notes serialize with their stable codes.
#[test]
fn correction_notes_carry_stable_codes() {
    let fixture = ConfigFixture::with_body(OUT_OF_RANGE_BODY);

    let mut store = fixture.store();
    let report = store.load_or_default();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["load"]["outcome"], "loaded");
    assert_eq!(json["saved"], true);

    let notes = json["sanitize"]["notes"].as_array().unwrap();
    let codes: Vec<&str> = notes.iter().filter_map(|n| n["code"].as_str()).collect();
    assert!(codes.contains(&"S001"), "boolean reset note: {codes:?}");
    assert!(codes.contains(&"S002"), "clamp note: {codes:?}");
    assert!(codes.contains(&"S003"), "enum reset note: {codes:?}");
    assert!(codes.contains(&"S005"), "geometry note: {codes:?}");
}

/// The corrected file is a fixed point: the next startup changes nothing.
#[test]
fn corrections_converge_in_one_pass() {
    let fixture = ConfigFixture::with_body(OUT_OF_RANGE_BODY);

    let mut store = fixture.store();
    store.load_or_default();
    let corrected = fixture.read();

    let mut store = fixture.store();
    let report = store.load_or_default();
    assert!(report.load.is_clean());
    assert!(!report.sanitize.changed());
    assert_eq!(fixture.read(), corrected);
}
