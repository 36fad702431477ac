//! Fuzz the tolerant loader: arbitrary bytes must never panic the
//! parser, and whatever survives a sanitize+save pass must read back as
//! a clean, already-sanitized file.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wraith_config::{sanitize, ControlTable, SettingsStore};

fuzz_target!(|data: &[u8]| {
    let Ok(dir) = tempfile::tempdir() else { return };
    let path = dir.path().join("wraith.cfg");
    if std::fs::write(&path, data).is_err() {
        return;
    }

    let mut store = SettingsStore::new(&path, Box::new(ControlTable::new()));
    if store.load().is_err() {
        return;
    }
    sanitize(&mut store);
    if store.save().is_err() {
        return;
    }

    let mut reread = SettingsStore::new(&path, Box::new(ControlTable::new()));
    let Ok(report) = reread.load() else { return };
    assert!(report.is_clean(), "saved file has suspect lines");
    assert!(
        !sanitize(&mut reread).changed(),
        "saved file still needed corrections"
    );
});
