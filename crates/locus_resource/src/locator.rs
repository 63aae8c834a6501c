//! Key resolution for file-backed resources.
//!
//! A [`FileLocator`] turns the logical key passed to
//! [`Resource::get`](crate::Resource::get) into the path that is actually read
//! or written. Locators are injected at construction and may be shared by any
//! number of resources.
//!
//! | Locator | Resolution |
//! |---------|------------|
//! | [`RawFileLocator`] | The key itself |
//! | [`BaseDirFileLocator`] | `base/key` (absolute keys unchanged) |
//! | `Fn(&str) -> PathBuf` | Whatever the closure returns |

use std::path::{Path, PathBuf};

/// Strategy that maps a logical key to the path used for I/O.
///
/// Resolution never fails and never touches the filesystem. It is a pure
/// path transformation; missing files are reported by the resource
/// performing the I/O.
///
/// # Example
///
/// ```
/// use locus_resource::{FileLocator, RawFileLocator};
/// use std::path::{Path, PathBuf};
///
/// let raw = RawFileLocator;
/// assert_eq!(raw.resolve("data/a.txt"), Path::new("data/a.txt"));
///
/// let upper = |key: &str| PathBuf::from(key.to_uppercase());
/// assert_eq!(upper.resolve("a.txt"), Path::new("A.TXT"));
/// ```
pub trait FileLocator: Send + Sync {
    /// Resolves `key` to a concrete path.
    fn resolve(&self, key: &str) -> PathBuf;
}

impl<F> FileLocator for F
where
    F: Fn(&str) -> PathBuf + Send + Sync,
{
    fn resolve(&self, key: &str) -> PathBuf {
        self(key)
    }
}

/// Identity locator: the resolved path is the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawFileLocator;

impl FileLocator for RawFileLocator {
    fn resolve(&self, key: &str) -> PathBuf {
        PathBuf::from(key)
    }
}

/// Resolves keys relative to a fixed base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirFileLocator {
    base: PathBuf,
}

impl BaseDirFileLocator {
    /// Creates a locator rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The base directory.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl FileLocator for BaseDirFileLocator {
    fn resolve(&self, key: &str) -> PathBuf {
        // `Path::join` already keeps absolute keys as-is.
        self.base.join(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::ffi::OsStr;
    use std::sync::Arc;

    proptest! {
        #[test]
        fn raw_locator_is_identity(key in any::<String>()) {
            let resolved = RawFileLocator.resolve(&key);
            prop_assert_eq!(resolved.as_os_str(), OsStr::new(&key));
        }
    }

    #[test]
    fn raw_locator_special_keys() {
        for key in ["", " ", "../up", "a//b", "你好/世界.txt", "with space/$HOME"] {
            assert_eq!(RawFileLocator.resolve(key).as_os_str(), OsStr::new(key));
        }
    }

    #[test]
    fn base_dir_joins_relative_keys() {
        let locator = BaseDirFileLocator::new("/srv/data");
        assert_eq!(locator.resolve("a/b.txt"), Path::new("/srv/data/a/b.txt"));
        assert_eq!(locator.resolve("/etc/hosts"), Path::new("/etc/hosts"));
        assert_eq!(locator.base(), Path::new("/srv/data"));
    }

    #[test]
    fn closure_locator() {
        let locator = |key: &str| PathBuf::from(format!("{key}.json"));
        assert_eq!(locator.resolve("config"), Path::new("config.json"));
    }

    #[test]
    fn locators_share_behind_arc() {
        let shared: Arc<dyn FileLocator> = Arc::new(RawFileLocator);
        let other = Arc::clone(&shared);
        assert_eq!(shared.resolve("k"), other.resolve("k"));
    }

    #[test]
    fn resolution_ignores_filesystem_state() {
        let dir = tempfile::tempdir().unwrap();
        let locator = BaseDirFileLocator::new(dir.path());
        let before = locator.resolve("later.txt");

        std::fs::write(dir.path().join("later.txt"), "x").unwrap();
        assert_eq!(locator.resolve("later.txt"), before);

        drop(dir);
        assert_eq!(locator.resolve("later.txt"), before);
    }
}
