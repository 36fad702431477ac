//! Wraith End-to-End Test Infrastructure
//!
//! This crate drives full settings file lifecycles against real files:
//! load, sanitize, save, and reload, plus bind-line traffic through a
//! scripted binding host.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wraith-tests
//! ```

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use wraith_config::{ActionBinding, BindingHost, ControlDevice, ControlTable, SettingsStore};

/// A settings file in a private temp directory.
pub struct ConfigFixture {
    root: TempDir,
    pub path: PathBuf,
}

impl ConfigFixture {
    /// Creates a fixture with no file on disk yet.
    pub fn empty() -> Self {
        let root = TempDir::new().expect("failed to create temp dir");
        let path = root.path().join("wraith.cfg");
        Self { root, path }
    }

    /// Creates a fixture seeded with `body`.
    pub fn with_body(body: &str) -> Self {
        let fixture = Self::empty();
        fs::write(&fixture.path, body).expect("failed to write settings file");
        fixture
    }

    pub fn dir(&self) -> &Path {
        self.root.path()
    }

    /// Opens a store with default engine bindings over this fixture's file.
    pub fn store(&self) -> SettingsStore {
        SettingsStore::new(&self.path, Box::new(ControlTable::new()))
    }

    /// Opens a store with the given host over this fixture's file.
    pub fn store_with(&self, host: Box<dyn BindingHost>) -> SettingsStore {
        SettingsStore::new(&self.path, host)
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("failed to read settings file")
    }
}

/// A file body where every sanitizer concern has something to correct.
pub const OUT_OF_RANGE_BODY: &str = "\
pm_alwaysrun 3
m_sensitivity 9999
gp_deadzone_left 250.0
r_gamma 9.0
r_detail 5
vid_scalefilter \"cubic\"
r_lowpixelwidth 17
vid_screenwidth 640
vid_screenheight 400
vid_windowwidth 100
vid_windowheight 100
r_viewsize 8
r_hud off
";

/// A file body exercising the loader's tolerance: unknown names, a bare
/// name with no value, a bind line missing its action, CRLF endings, and
/// a stray control byte after a value.
pub const WILD_BODY: &str = "\
r_gamma 1.10\r
r_ghosts 1\r
r_detail high\x07\r
vid_vsync\r
bind 'q' +use\r
bind mouse2\r
s_musicvolume 40%\r
";

/// BindingHost double that records every bind call while delegating to a
/// real control table, so saved bind lines stay realistic.
pub struct RecordingHost {
    calls: Rc<RefCell<Vec<(String, String)>>>,
    table: ControlTable,
}

impl RecordingHost {
    /// Returns the boxed host and a shared view of the recorded calls.
    #[allow(clippy::type_complexity)]
    pub fn new() -> (Box<dyn BindingHost>, Rc<RefCell<Vec<(String, String)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let host = RecordingHost {
            calls: Rc::clone(&calls),
            table: ControlTable::empty(),
        };
        (Box::new(host), calls)
    }
}

impl BindingHost for RecordingHost {
    fn bind(&mut self, control: &str, action: &str) {
        self.calls
            .borrow_mut()
            .push((control.to_string(), action.to_string()));
        self.table.bind(control, action);
    }

    fn control_token(&self, device: ControlDevice, value: i32) -> Option<String> {
        self.table.control_token(device, value)
    }

    fn bindings(&self) -> Vec<ActionBinding> {
        self.table.bindings()
    }
}
