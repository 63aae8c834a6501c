//! Error types for resource access.

use std::io;
use std::path::{Path, PathBuf};

/// Coarse classification of a [`ResourceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The resolved path does not exist.
    NotFound,
    /// A file was required but a directory was found.
    IsADirectory,
    /// A directory was required but something else was found.
    NotADirectory,
    /// The operation is not offered by this resource variant.
    Unsupported,
    /// Any other storage failure.
    Io,
}

impl ErrorKind {
    /// POSIX-style code for this kind (`ENOENT`, `ENOTDIR`, ...).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "ENOENT",
            Self::IsADirectory => "EISDIR",
            Self::NotADirectory => "ENOTDIR",
            Self::Unsupported => "ENOTSUP",
            Self::Io => "EIO",
        }
    }
}

/// Errors returned by [`Resource::get`](crate::Resource::get) and
/// [`MutableResource::set`](crate::MutableResource::set).
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// The resolved path does not exist.
    #[error("no such file: {}", .path.display())]
    NotFound {
        /// The resolved path.
        path: PathBuf,
    },

    /// The resolved path is a directory where file content was expected.
    #[error("is a directory: {}", .path.display())]
    IsADirectory {
        /// The resolved path.
        path: PathBuf,
    },

    /// The resolved path is not a directory where a listing was requested.
    #[error("not a directory: {}", .path.display())]
    NotADirectory {
        /// The resolved path.
        path: PathBuf,
    },

    /// The resource variant does not offer this operation.
    #[error("{resource} does not support {operation}")]
    Unsupported {
        /// Short name of the resource variant.
        resource: &'static str,
        /// The rejected operation.
        operation: &'static str,
    },

    /// Underlying storage failure.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// The resolved path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

impl ResourceError {
    /// Creates an [`Io`](Self::Io) error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an [`Unsupported`](Self::Unsupported) error.
    pub fn unsupported(resource: &'static str, operation: &'static str) -> Self {
        Self::Unsupported {
            resource,
            operation,
        }
    }

    /// Maps an error from reading `path` as a file.
    pub(crate) fn from_read(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::IsADirectory => Self::IsADirectory {
                path: path.to_path_buf(),
            },
            _ => Self::io(path, source),
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::IsADirectory { .. } => ErrorKind::IsADirectory,
            Self::NotADirectory { .. } => ErrorKind::NotADirectory,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// POSIX-style code for this error, see [`ErrorKind::code`].
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The resolved path involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path }
            | Self::IsADirectory { path }
            | Self::NotADirectory { path }
            | Self::Io { path, .. } => Some(path),
            Self::Unsupported { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_errors_map_to_kinds() {
        let path = Path::new("/tmp/x");

        let err = ResourceError::from_read(path, io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), "ENOENT");

        let err = ResourceError::from_read(path, io::Error::from(io::ErrorKind::IsADirectory));
        assert_eq!(err.kind(), ErrorKind::IsADirectory);

        let err = ResourceError::from_read(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.path(), Some(path));
    }

    #[test]
    fn unsupported_has_no_path() {
        let err = ResourceError::unsupported("ReadOnlyFileResource", "set");
        assert_eq!(err.code(), "ENOTSUP");
        assert!(err.path().is_none());
        assert_eq!(err.to_string(), "ReadOnlyFileResource does not support set");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = ResourceError::io("/nope", io::Error::other("disk on fire"));
        let source = std::error::Error::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "disk on fire");
    }
}
