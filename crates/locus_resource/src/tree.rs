//! Recursive directory listings.
//!
//! [`FileTreeResource`] lists the regular files below a directory as paths
//! relative to that directory. Traversal is depth-first: a subdirectory's
//! files appear contiguously at the subdirectory's position among its
//! siblings, and siblings are visited in file-name order.
//!
//! # Outcomes
//!
//! | Resolved root | Result |
//! |---------------|--------|
//! | missing | `Ok(None)` |
//! | directory | `Ok(Some(paths))`, possibly empty |
//! | anything else | [`ResourceError::NotADirectory`] |
//!
//! # Depth limit
//!
//! Files directly inside the root are always listed. A subdirectory at level
//! `d` (direct children of the root are level 1) is descended into only when
//! `d < max_depth`. Limits `0` and `1` therefore both list the root's own
//! files and nothing below.

use crate::error::ResourceError;
use crate::locator::FileLocator;
use crate::resource::Resource;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directory-listing resource.
///
/// # Example
///
/// ```no_run
/// use locus_resource::{FileTreeResource, RawFileLocator, Resource};
/// use std::sync::Arc;
///
/// # async fn run() -> Result<(), locus_resource::ResourceError> {
/// let tree = FileTreeResource::with_max_depth(Arc::new(RawFileLocator), 2);
/// match tree.get("assets").await? {
///     Some(files) => println!("{} files", files.len()),
///     None => println!("no such directory"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FileTreeResource {
    locator: Arc<dyn FileLocator>,
    max_depth: Option<usize>,
}

impl core::fmt::Debug for FileTreeResource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FileTreeResource")
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

/// What a directory entry turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
    /// Symlinked directory; listed as nothing and never descended.
    LinkedDir,
    Other,
}

#[derive(Debug)]
struct Entry {
    relative: String,
    path: PathBuf,
    kind: EntryKind,
}

/// One directory on the traversal stack.
struct Frame {
    entries: std::vec::IntoIter<Entry>,
    level: usize,
}

impl FileTreeResource {
    /// Creates a resource that descends without limit.
    pub fn new(locator: Arc<dyn FileLocator>) -> Self {
        Self {
            locator,
            max_depth: None,
        }
    }

    /// Creates a resource with a depth limit.
    ///
    /// Files directly inside the root are always listed. A subdirectory at
    /// level `d` below the root is descended only when `d < max_depth`, so
    /// `0` and `1` both restrict the listing to the root's own files.
    pub fn with_max_depth(locator: Arc<dyn FileLocator>, max_depth: usize) -> Self {
        Self {
            locator,
            max_depth: Some(max_depth),
        }
    }

    /// The configured depth limit, `None` when unbounded.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// The locator used to resolve keys.
    #[must_use]
    pub fn locator(&self) -> &Arc<dyn FileLocator> {
        &self.locator
    }

    fn descends_into(&self, level: usize) -> bool {
        self.max_depth.is_none_or(|limit| level < limit)
    }

    /// Lists the files below `root`, which must be an existing directory.
    async fn walk(&self, root: &Path) -> Result<Vec<String>, ResourceError> {
        let mut files = Vec::new();
        let mut stack = vec![Frame {
            entries: read_entries(root, "").await?.into_iter(),
            level: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.entries.next() else {
                stack.pop();
                continue;
            };
            let level = frame.level + 1;

            match entry.kind {
                EntryKind::File => files.push(entry.relative),
                EntryKind::Dir if self.descends_into(level) => {
                    tracing::trace!(dir = %entry.path.display(), level, "descending");
                    let entries = read_entries(&entry.path, &entry.relative).await?;
                    stack.push(Frame {
                        entries: entries.into_iter(),
                        level,
                    });
                }
                EntryKind::Dir | EntryKind::LinkedDir | EntryKind::Other => {}
            }
        }

        Ok(files)
    }
}

#[async_trait]
impl Resource for FileTreeResource {
    /// `None` when the resolved root does not exist.
    type Value = Option<Vec<String>>;

    /// # Errors
    ///
    /// - [`ResourceError::NotADirectory`] if the resolved root is not a directory
    /// - [`ResourceError::Io`] if the root or a directory below it cannot be read
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, ResourceError> {
        let root = self.locator.resolve(key);
        tracing::debug!(key, path = %root.display(), max_depth = ?self.max_depth, "listing file tree");

        let metadata = match tokio::fs::metadata(&root).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) if err.kind() == io::ErrorKind::NotADirectory => {
                return Err(ResourceError::NotADirectory { path: root });
            }
            Err(err) => return Err(ResourceError::io(root, err)),
        };

        if !metadata.is_dir() {
            return Err(ResourceError::NotADirectory { path: root });
        }

        self.walk(&root).await.map(Some)
    }
}

/// Reads and classifies the entries of `dir`, sorted by file name.
///
/// `prefix` is the relative path of `dir` below the listing root.
async fn read_entries(dir: &Path, prefix: &str) -> Result<Vec<Entry>, ResourceError> {
    let mut reader = tokio::fs::read_dir(dir)
        .await
        .map_err(|err| ResourceError::io(dir, err))?;

    let mut named = Vec::new();
    while let Some(dir_entry) = reader
        .next_entry()
        .await
        .map_err(|err| ResourceError::io(dir, err))?
    {
        let path = dir_entry.path();
        let file_type = dir_entry
            .file_type()
            .await
            .map_err(|err| ResourceError::io(&path, err))?;

        let kind = if file_type.is_file() {
            EntryKind::File
        } else if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_symlink() {
            // Follow the link once to classify it; dangling links are skipped.
            match tokio::fs::metadata(&path).await {
                Ok(target) if target.is_file() => EntryKind::File,
                Ok(target) if target.is_dir() => EntryKind::LinkedDir,
                Ok(_) | Err(_) => EntryKind::Other,
            }
        } else {
            EntryKind::Other
        };

        named.push((dir_entry.file_name(), path, kind));
    }

    named.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(named
        .into_iter()
        .map(|(name, path, kind)| {
            let name = match name.to_str() {
                Some(name) => name.to_owned(),
                None => {
                    tracing::warn!(path = %path.display(), "non UTF-8 file name, listing it lossily");
                    name.to_string_lossy().into_owned()
                }
            };
            let relative = if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            };
            Entry {
                relative,
                path,
                kind,
            }
        })
        .collect())
}
