//! File-backed text resources.

use crate::error::ResourceError;
use crate::locator::FileLocator;
use crate::resource::{MutableResource, Resource};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Reads `path` as UTF-8 text, classifying the failure modes.
async fn read_text(path: &Path) -> Result<String, ResourceError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ResourceError::from_read(path, err))
}

/// Read-only access to text files.
///
/// [`get`](Resource::get) resolves the key and returns the whole file decoded
/// as UTF-8. There is no `set`; see [`FileResource`] for the writable variant.
#[derive(Clone)]
pub struct ReadOnlyFileResource {
    locator: Arc<dyn FileLocator>,
}

impl core::fmt::Debug for ReadOnlyFileResource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReadOnlyFileResource").finish_non_exhaustive()
    }
}

impl ReadOnlyFileResource {
    /// Creates a resource resolving keys through `locator`.
    pub fn new(locator: Arc<dyn FileLocator>) -> Self {
        Self { locator }
    }

    /// The locator used to resolve keys.
    #[must_use]
    pub fn locator(&self) -> &Arc<dyn FileLocator> {
        &self.locator
    }
}

#[async_trait]
impl Resource for ReadOnlyFileResource {
    type Value = String;

    /// # Errors
    ///
    /// - [`ResourceError::NotFound`] if the resolved path does not exist
    /// - [`ResourceError::IsADirectory`] if it is a directory
    /// - [`ResourceError::Io`] for any other failure, including invalid UTF-8
    async fn get(&self, key: &str) -> Result<String, ResourceError> {
        let path = self.locator.resolve(key);
        tracing::debug!(key, path = %path.display(), "reading file resource");
        read_text(&path).await
    }
}

/// Read/write access to text files.
///
/// [`set`](MutableResource::set) creates the file if needed and replaces its
/// content entirely. Missing parent directories are an error unless
/// [`with_create_dirs`](Self::with_create_dirs) is enabled.
///
/// # Example
///
/// ```no_run
/// use locus_resource::{FileResource, MutableResource, RawFileLocator, Resource};
/// use std::sync::Arc;
///
/// # async fn run() -> Result<(), locus_resource::ResourceError> {
/// let resource = FileResource::new(Arc::new(RawFileLocator)).with_create_dirs(true);
/// resource.set("out/notes.txt", "hello".to_string()).await?;
/// assert_eq!(resource.get("out/notes.txt").await?, "hello");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FileResource {
    locator: Arc<dyn FileLocator>,
    create_dirs: bool,
}

impl core::fmt::Debug for FileResource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FileResource")
            .field("create_dirs", &self.create_dirs)
            .finish_non_exhaustive()
    }
}

impl FileResource {
    /// Creates a resource resolving keys through `locator`.
    pub fn new(locator: Arc<dyn FileLocator>) -> Self {
        Self {
            locator,
            create_dirs: false,
        }
    }

    /// Whether [`set`](MutableResource::set) creates missing parent directories.
    #[must_use]
    pub fn with_create_dirs(mut self, enabled: bool) -> Self {
        self.create_dirs = enabled;
        self
    }

    /// Returns `true` if missing parent directories are created on write.
    #[must_use]
    pub fn creates_dirs(&self) -> bool {
        self.create_dirs
    }

    /// The locator used to resolve keys.
    #[must_use]
    pub fn locator(&self) -> &Arc<dyn FileLocator> {
        &self.locator
    }
}

#[async_trait]
impl Resource for FileResource {
    type Value = String;

    /// Same contract as [`ReadOnlyFileResource`]'s `get`.
    async fn get(&self, key: &str) -> Result<String, ResourceError> {
        let path = self.locator.resolve(key);
        tracing::debug!(key, path = %path.display(), "reading file resource");
        read_text(&path).await
    }
}

#[async_trait]
impl MutableResource for FileResource {
    /// # Errors
    ///
    /// Any write failure is reported as [`ResourceError::Io`].
    async fn set(&self, key: &str, value: String) -> Result<(), ResourceError> {
        let path = self.locator.resolve(key);
        tracing::debug!(key, path = %path.display(), bytes = value.len(), "writing file resource");

        if self.create_dirs
            && let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| ResourceError::io(parent, err))?;
        }

        tokio::fs::write(&path, value)
            .await
            .map_err(|err| ResourceError::io(&path, err))
    }
}
