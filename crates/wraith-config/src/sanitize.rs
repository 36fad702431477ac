//! Post-load sanitization.
//!
//! Every load is followed by one sanitize pass before the store is saved
//! back, so the file on disk always holds values the engine can run with.
//! Corrections are collected in a [`SanitizeReport`]; the pass itself never
//! fails.

use crate::alias::AliasSet;
use crate::error::{NoteCode, SanitizeReport};
use crate::registry::{SettingKind, REGISTRY};
use crate::store::SettingsStore;
use serde::Serialize;

/// Base render resolution the low-detail and screen floors derive from.
pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 400;

/// Width of the original low-res mode; the window floor.
const ORIGINAL_WIDTH: i32 = 320;

const GAMEPAD_AXIS_MAX: f32 = 32767.0;
const SENSITIVITY_OFFSET: f32 = 0.2;
const SENSITIVITY_FACTOR: f32 = 4.0;
const SENSITIVITY_MAX: i32 = 128;

/// Gamma correction curve levels, 0.50 to 2.00 in 0.05 steps.
pub static GAMMA_LEVELS: [f32; 31] = [
    0.50, 0.55, 0.60, 0.65, 0.70, 0.75, 0.80, 0.85, 0.90, 0.95, 1.00, 1.05, 1.10, 1.15, 1.20,
    1.25, 1.30, 1.35, 1.40, 1.45, 1.50, 1.55, 1.60, 1.65, 1.70, 1.75, 1.80, 1.85, 1.90, 1.95,
    2.00,
];

const DEFAULT_GAMMA: f32 = 0.75;

/// Values the engine consumes directly, recomputed from the persisted
/// settings on every sanitize pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DerivedSettings {
    /// Mixer music volume, 0 to 15.
    pub music_volume: i32,
    /// Mixer effects volume, 0 to 15.
    pub sfx_volume: i32,
    /// Index into [`GAMMA_LEVELS`].
    pub gamma_index: usize,
    /// Left stick deadzone in raw axis units.
    pub gamepad_deadzone_left: i16,
    /// Right stick deadzone in raw axis units.
    pub gamepad_deadzone_right: i16,
    /// Turn-speed multiplier; 0.0 disables the stick.
    pub gamepad_sensitivity: f32,
}

/// Integer range clamps, `(name, min, max)`.
const INT_CLAMPS: &[(&str, i32, i32)] = &[
    ("annex", 0, 1),
    ("campaign", 0, 3),
    ("gp_sensitivity", 0, SENSITIVITY_MAX),
    ("m_sensitivity", 0, 128),
    ("pm_walkbob", 0, 100),
    ("r_maxdecals", 0, 32768),
    ("r_viewsize", 0, 8),
    ("runcount", 0, 32768),
    ("s_channels", 8, 64),
    ("s_musicvolume", 0, 100),
    ("s_sfxvolume", 0, 100),
    ("savegame", 0, 5),
    ("skilllevel", 0, 4),
    ("vid_motionblur", 0, 100),
];

/// Float range clamps, `(name, min, max)`.
const FLOAT_CLAMPS: &[(&str, f32, f32)] = &[
    ("gp_deadzone_left", 0.0, 100.0),
    ("gp_deadzone_right", 0.0, 100.0),
    ("r_gamma", 0.50, 2.00),
];

const SCALE_DRIVERS: &[&str] = &["opengl", "vulkan", "software"];
const SCALE_FILTERS: &[&str] = &["nearest", "linear"];
const MAX_DISPLAYS: i32 = 8;
const MAX_VIEWSIZE: i32 = 8;

/// Runs every correction rule and recomputes the derived values.
pub fn sanitize(store: &mut SettingsStore) -> SanitizeReport {
    let mut report = SanitizeReport::default();
    sanitize_booleans(store, &mut report);
    sanitize_ranges(store, &mut report);
    sanitize_enums(store, &mut report);
    sanitize_geometry(store, &mut report);
    sanitize_cross_field(store, &mut report);
    update_derived(store, &mut report);
    report
}

fn sanitize_booleans(store: &mut SettingsStore, report: &mut SanitizeReport) {
    for descriptor in REGISTRY {
        if descriptor.set != AliasSet::Bool || descriptor.kind != SettingKind::Int {
            continue;
        }
        let Some(value) = store.int(descriptor.name) else {
            continue;
        };
        if value != 0 && value != 1 {
            let default = descriptor.default_value().as_int().unwrap_or_default();
            store.set_int(descriptor.name, default);
            report.note(
                descriptor.name,
                NoteCode::BoolReset,
                format!("reset {value} to {}", if default == 1 { "on" } else { "off" }),
            );
        }
    }
}

fn sanitize_ranges(store: &mut SettingsStore, report: &mut SanitizeReport) {
    for &(name, min, max) in INT_CLAMPS {
        let Some(value) = store.int(name) else {
            continue;
        };
        let clamped = value.clamp(min, max);
        if clamped != value {
            store.set_int(name, clamped);
            report.note(name, NoteCode::Clamp, format!("clamped {value} to {clamped}"));
        }
    }
    for &(name, min, max) in FLOAT_CLAMPS {
        let Some(value) = store.float(name) else {
            continue;
        };
        let clamped = value.clamp(min, max);
        if clamped != value {
            store.set_float(name, clamped);
            report.note(name, NoteCode::Clamp, format!("clamped {value} to {clamped}"));
        }
    }
}

fn sanitize_enums(store: &mut SettingsStore, report: &mut SanitizeReport) {
    if let Some(detail) = store.int("r_detail") {
        if detail != 0 && detail != 1 {
            store.set_int("r_detail", 1);
            report.note("r_detail", NoteCode::EnumReset, format!("reset {detail} to high"));
        }
    }

    if let Some(display) = store.int("vid_display") {
        if !(1..=MAX_DISPLAYS).contains(&display) {
            store.set_int("vid_display", 1);
            report.note(
                "vid_display",
                NoteCode::EnumReset,
                format!("display {display} does not exist, reset to 1"),
            );
        }
    }

    sanitize_string_enum(store, report, "vid_scaledriver", SCALE_DRIVERS, "opengl");
    sanitize_string_enum(store, report, "vid_scalefilter", SCALE_FILTERS, "nearest");
}

fn sanitize_string_enum(
    store: &mut SettingsStore,
    report: &mut SanitizeReport,
    name: &'static str,
    allowed: &[&str],
    default: &str,
) {
    let Some(value) = store.string(name) else {
        return;
    };
    if !allowed.iter().any(|a| a.eq_ignore_ascii_case(&value)) {
        store.set_string(name, default);
        report.note(
            name,
            NoteCode::EnumReset,
            format!("\"{value}\" is not recognized, reset to \"{default}\""),
        );
    }
}

/// One low-detail pixel dimension: clamped, then stepped down until it
/// divides the base dimension evenly.
fn sanitize_pixel_dimension(
    store: &mut SettingsStore,
    report: &mut SanitizeReport,
    name: &'static str,
    base: i32,
) {
    let Some(value) = store.int(name) else {
        return;
    };
    let mut fixed = value.clamp(2, base);
    while base % fixed != 0 {
        fixed -= 1;
    }
    if fixed != value {
        store.set_int(name, fixed);
        report.note(
            name,
            NoteCode::Geometry,
            format!("adjusted {value} to {fixed} to divide {base}"),
        );
    }
}

fn sanitize_geometry(store: &mut SettingsStore, report: &mut SanitizeReport) {
    sanitize_pixel_dimension(store, report, "r_lowpixelwidth", SCREEN_WIDTH);
    sanitize_pixel_dimension(store, report, "r_lowpixelheight", SCREEN_HEIGHT);

    // A fullscreen resolution below the render floor cannot display the
    // frame; fall back to the desktop resolution.
    let width = store.int("vid_screenwidth").unwrap_or_default();
    let height = store.int("vid_screenheight").unwrap_or_default();
    if (width != 0 || height != 0) && (width < SCREEN_WIDTH || height < SCREEN_WIDTH * 3 / 4) {
        store.set_int("vid_screenwidth", 0);
        store.set_int("vid_screenheight", 0);
        report.note(
            "vid_screenwidth",
            NoteCode::Geometry,
            format!(
                "{width}x{height} is below {SCREEN_WIDTH}x{}, reset to desktop",
                SCREEN_WIDTH * 3 / 4
            ),
        );
    }

    let window_width = store.int("vid_windowwidth").unwrap_or_default();
    let mut window_height = store.int("vid_windowheight").unwrap_or_default();
    if window_width < ORIGINAL_WIDTH || window_height < ORIGINAL_WIDTH * 3 / 4 {
        window_height = 480;
        store.set_int("vid_windowheight", window_height);
        report.note(
            "vid_windowheight",
            NoteCode::Geometry,
            format!("window below {ORIGINAL_WIDTH}x{}, reset height to 480", ORIGINAL_WIDTH * 3 / 4),
        );
    }
    // The window is always 4:3.
    let fixed_width = window_height * 4 / 3;
    if fixed_width != window_width {
        store.set_int("vid_windowwidth", fixed_width);
        report.note(
            "vid_windowwidth",
            NoteCode::Geometry,
            format!("adjusted {window_width} to {fixed_width} for 4:3"),
        );
    }
}

fn sanitize_cross_field(store: &mut SettingsStore, report: &mut SanitizeReport) {
    let widescreen = store.int("vid_widescreen").unwrap_or_default();
    let viewsize = store.int("r_viewsize").unwrap_or_default();

    // The widescreen hand-back is routine bookkeeping on every startup,
    // not a correction, so it leaves no note.
    if widescreen == 1 || viewsize == MAX_VIEWSIZE {
        store.request_widescreen();
        if widescreen == 1 {
            store.set_int("vid_widescreen", 0);
        }
    } else if store.int("r_hud") == Some(0) {
        store.set_int("r_hud", 1);
        report.note(
            "r_hud",
            NoteCode::CrossField,
            "forced on while the view window is small",
        );
    }
}

fn update_derived(store: &mut SettingsStore, report: &mut SanitizeReport) {
    let music = store.int("s_musicvolume").unwrap_or_default();
    let sfx = store.int("s_sfxvolume").unwrap_or_default();
    let gamma = store.float("r_gamma").unwrap_or(DEFAULT_GAMMA);
    let dz_left = store.float("gp_deadzone_left").unwrap_or_default();
    let dz_right = store.float("gp_deadzone_right").unwrap_or_default();
    let sensitivity = store.int("gp_sensitivity").unwrap_or_default();

    let gamma_index = match GAMMA_LEVELS.iter().position(|&g| g == gamma) {
        Some(index) => index,
        None => {
            report.note(
                "r_gamma",
                NoteCode::Derived,
                format!("{gamma} matches no gamma level, using the default curve"),
            );
            GAMMA_LEVELS
                .iter()
                .position(|&g| g == DEFAULT_GAMMA)
                .unwrap_or_default()
        }
    };

    store.set_derived(DerivedSettings {
        music_volume: (music * 15 + 50) / 100,
        sfx_volume: (sfx * 15 + 50) / 100,
        gamma_index,
        gamepad_deadzone_left: (dz_left / 100.0 * GAMEPAD_AXIS_MAX) as i16,
        gamepad_deadzone_right: (dz_right / 100.0 * GAMEPAD_AXIS_MAX) as i16,
        gamepad_sensitivity: if sensitivity == 0 {
            0.0
        } else {
            SENSITIVITY_OFFSET + sensitivity as f32 / SENSITIVITY_MAX as f32 * SENSITIVITY_FACTOR
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::ControlTable;
    use crate::error::NoteCode;

    fn test_store() -> SettingsStore {
        SettingsStore::new("wraith.cfg", Box::new(ControlTable::new()))
    }

    #[test]
    fn defaults_pass_without_corrections() {
        let mut store = test_store();
        let report = sanitize(&mut store);
        assert!(!report.changed(), "unexpected notes: {:?}", report.notes);
    }

    #[test]
    fn out_of_range_booleans_reset_to_defaults() {
        let mut store = test_store();
        store.set_int("am_grid", 5);
        store.set_int("pm_centerweapon", -1);
        let report = sanitize(&mut store);
        assert_eq!(store.int("am_grid"), Some(0));
        assert_eq!(store.int("pm_centerweapon"), Some(1));
        assert_eq!(
            report.notes.iter().filter(|n| n.code == NoteCode::BoolReset).count(),
            2
        );
    }

    #[test]
    fn numeric_ranges_clamp() {
        let mut store = test_store();
        store.set_int("m_sensitivity", 500);
        store.set_int("s_channels", 1);
        store.set_float("gp_deadzone_left", 260.5);
        sanitize(&mut store);
        assert_eq!(store.int("m_sensitivity"), Some(128));
        assert_eq!(store.int("s_channels"), Some(8));
        assert_eq!(store.float("gp_deadzone_left"), Some(100.0));
    }

    #[test]
    fn string_enums_reset_but_keep_case_variants() {
        let mut store = test_store();
        store.set_string("vid_scalefilter", "blurry");
        store.set_string("vid_scaledriver", "VULKAN");
        let report = sanitize(&mut store);
        assert_eq!(store.string("vid_scalefilter").as_deref(), Some("nearest"));
        assert_eq!(store.string("vid_scaledriver").as_deref(), Some("VULKAN"));
        assert_eq!(
            report.notes.iter().filter(|n| n.code == NoteCode::EnumReset).count(),
            1
        );
    }

    #[test]
    fn volume_percentages_rescale() {
        let mut store = test_store();
        store.set_int("s_musicvolume", 50);
        store.set_int("s_sfxvolume", 3);
        sanitize(&mut store);
        assert_eq!(store.derived().music_volume, 8);
        assert_eq!(store.derived().sfx_volume, 0);

        store.set_int("s_musicvolume", 100);
        sanitize(&mut store);
        assert_eq!(store.derived().music_volume, 15);
    }

    #[test]
    fn gamma_off_grid_falls_back_to_default_curve() {
        let mut store = test_store();
        store.set_float("r_gamma", 0.77);
        let report = sanitize(&mut store);
        // The stored value survives; only the derived index falls back.
        assert_eq!(store.float("r_gamma"), Some(0.77));
        assert_eq!(store.derived().gamma_index, 5);
        assert!(report.notes.iter().any(|n| n.code == NoteCode::Derived));

        store.set_float("r_gamma", 1.50);
        sanitize(&mut store);
        assert_eq!(store.derived().gamma_index, 20);
    }

    #[test]
    fn gamma_clamps_before_lookup() {
        let mut store = test_store();
        store.set_float("r_gamma", 9.0);
        sanitize(&mut store);
        assert_eq!(store.float("r_gamma"), Some(2.0));
        assert_eq!(store.derived().gamma_index, 30);
    }

    #[test]
    fn pixel_dimensions_step_down_to_divisors() {
        let mut store = test_store();
        store.set_int("r_lowpixelwidth", 17);
        store.set_int("r_lowpixelheight", 9000);
        sanitize(&mut store);
        assert_eq!(store.int("r_lowpixelwidth"), Some(16));
        assert_eq!(store.int("r_lowpixelheight"), Some(400));
    }

    #[test]
    fn small_fullscreen_resolution_resets_to_desktop() {
        let mut store = test_store();
        store.set_int("vid_screenwidth", 640);
        store.set_int("vid_screenheight", 400);
        sanitize(&mut store);
        assert_eq!(store.int("vid_screenwidth"), Some(0));
        assert_eq!(store.int("vid_screenheight"), Some(0));

        store.set_int("vid_screenwidth", 800);
        store.set_int("vid_screenheight", 600);
        sanitize(&mut store);
        assert_eq!(store.int("vid_screenwidth"), Some(800));
    }

    #[test]
    fn window_geometry_stays_four_by_three() {
        let mut store = test_store();
        store.set_int("vid_windowwidth", 100);
        store.set_int("vid_windowheight", 100);
        sanitize(&mut store);
        assert_eq!(store.int("vid_windowheight"), Some(480));
        assert_eq!(store.int("vid_windowwidth"), Some(640));

        store.set_int("vid_windowheight", 720);
        store.set_int("vid_windowwidth", 1280);
        sanitize(&mut store);
        assert_eq!(store.int("vid_windowwidth"), Some(960));
    }

    #[test]
    fn widescreen_is_held_for_hand_back_without_a_note() {
        let mut store = test_store();
        store.set_int("vid_widescreen", 1);
        let report = sanitize(&mut store);
        assert_eq!(store.int("vid_widescreen"), Some(0));
        assert!(store.widescreen_requested());
        assert!(!report.changed());
    }

    #[test]
    fn small_view_forces_the_hud_on() {
        let mut store = test_store();
        store.set_int("r_hud", 0);
        store.set_int("r_viewsize", 4);
        sanitize(&mut store);
        assert_eq!(store.int("r_hud"), Some(1));

        // At maximum view size the HUD choice is the player's.
        store.set_int("r_hud", 0);
        store.set_int("r_viewsize", 8);
        sanitize(&mut store);
        assert_eq!(store.int("r_hud"), Some(0));
        assert!(store.widescreen_requested());
    }

    #[test]
    fn gamepad_derivations() {
        let mut store = test_store();
        store.set_float("gp_deadzone_left", 24.0);
        store.set_int("gp_sensitivity", 0);
        sanitize(&mut store);
        assert_eq!(store.derived().gamepad_deadzone_left, 7864);
        assert_eq!(store.derived().gamepad_sensitivity, 0.0);

        store.set_int("gp_sensitivity", 128);
        sanitize(&mut store);
        assert!((store.derived().gamepad_sensitivity - 4.2).abs() < 1e-6);
    }
}
