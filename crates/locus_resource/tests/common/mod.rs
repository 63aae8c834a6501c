//! Shared scratch-directory helpers for integration tests.

#![allow(dead_code, reason = "each test binary uses a subset of the helpers")]

use std::path::Path;
use tempfile::TempDir;

/// A temporary directory with fixture helpers, removed on drop.
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("locus-test-")
            .tempdir()
            .expect("create scratch dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` as a key string.
    pub fn key(&self, relative: &str) -> String {
        self.path().join(relative).to_string_lossy().into_owned()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write fixture file");
    }

    pub fn mkdir(&self, relative: &str) {
        std::fs::create_dir_all(self.path().join(relative)).expect("create fixture dir");
    }
}

/// The download-list fixture:
///
/// ```text
/// downloadList/
/// ├── a
/// ├── layer1/
/// │   ├── b
/// │   └── c
/// └── layer1-1/
/// ```
pub fn download_list() -> ScratchDir {
    let dir = ScratchDir::new();
    dir.write("downloadList/a", "a");
    dir.write("downloadList/layer1/b", "b");
    dir.write("downloadList/layer1/c", "c");
    dir.mkdir("downloadList/layer1-1");
    dir
}
