//! Runtime dispatch over the resource variants.
//!
//! The concrete types encode mutability statically: only [`StaticResource`]
//! and [`FileResource`] implement [`MutableResource`]. When the variant is
//! chosen at runtime (from configuration, say), [`AnyResource`] wraps it and
//! checks [`Access`] at the call instead.

use crate::error::ResourceError;
use crate::file::{FileResource, ReadOnlyFileResource};
use crate::resource::{MutableResource, Resource};
use crate::static_resource::StaticResource;
use crate::tree::FileTreeResource;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Value read from an [`AnyResource`].
///
/// Serializes untagged: text as a JSON string, a listing as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Text content of a file or static value.
    Text(String),
    /// Relative file paths from a tree listing.
    Listing(Vec<String>),
}

impl Content {
    /// Returns the text, if this is [`Content::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Listing(_) => None,
        }
    }

    /// Returns the listing, if this is [`Content::Listing`].
    #[must_use]
    pub fn as_listing(&self) -> Option<&[String]> {
        match self {
            Self::Listing(files) => Some(files),
            Self::Text(_) => None,
        }
    }
}

/// Whether a resource accepts writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Only `get` is offered.
    ReadOnly,
    /// Both `get` and `set` are offered.
    ReadWrite,
}

/// Any of the built-in resource variants.
#[derive(Debug)]
pub enum AnyResource {
    /// In-memory text.
    Static(StaticResource<String>),
    /// Read-only text file.
    ReadOnlyFile(ReadOnlyFileResource),
    /// Read/write text file.
    File(FileResource),
    /// Directory listing.
    FileTree(FileTreeResource),
}

impl AnyResource {
    /// Short name of the wrapped variant.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Static(_) => "StaticResource",
            Self::ReadOnlyFile(_) => "ReadOnlyFileResource",
            Self::File(_) => "FileResource",
            Self::FileTree(_) => "FileTreeResource",
        }
    }

    /// Whether the wrapped variant accepts [`set`](Self::set).
    #[must_use]
    pub fn access(&self) -> Access {
        match self {
            Self::Static(_) | Self::File(_) => Access::ReadWrite,
            Self::ReadOnlyFile(_) | Self::FileTree(_) => Access::ReadOnly,
        }
    }

    /// Writes `value` under `key`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Unsupported`] for read-only variants, without touching
    /// storage. Otherwise whatever the wrapped variant reports.
    pub async fn set(&self, key: &str, value: String) -> Result<(), ResourceError> {
        match self {
            Self::Static(resource) => resource.set(key, value).await,
            Self::File(resource) => resource.set(key, value).await,
            Self::ReadOnlyFile(_) | Self::FileTree(_) => {
                Err(ResourceError::unsupported(self.name(), "set"))
            }
        }
    }
}

#[async_trait]
impl Resource for AnyResource {
    /// `None` only for a tree listing whose root does not exist.
    type Value = Option<Content>;

    async fn get(&self, key: &str) -> Result<Option<Content>, ResourceError> {
        match self {
            Self::Static(resource) => resource.get(key).await.map(|text| Some(Content::Text(text))),
            Self::ReadOnlyFile(resource) => {
                resource.get(key).await.map(|text| Some(Content::Text(text)))
            }
            Self::File(resource) => resource.get(key).await.map(|text| Some(Content::Text(text))),
            Self::FileTree(resource) => Ok(resource.get(key).await?.map(Content::Listing)),
        }
    }
}

impl From<StaticResource<String>> for AnyResource {
    fn from(resource: StaticResource<String>) -> Self {
        Self::Static(resource)
    }
}

impl From<ReadOnlyFileResource> for AnyResource {
    fn from(resource: ReadOnlyFileResource) -> Self {
        Self::ReadOnlyFile(resource)
    }
}

impl From<FileResource> for AnyResource {
    fn from(resource: FileResource) -> Self {
        Self::File(resource)
    }
}

impl From<FileTreeResource> for AnyResource {
    fn from(resource: FileTreeResource) -> Self {
        Self::FileTree(resource)
    }
}
