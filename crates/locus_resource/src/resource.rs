//! The [`Resource`] and [`MutableResource`] capabilities.

use crate::error::ResourceError;
use async_trait::async_trait;
use std::sync::Arc;

/// Read access to a named piece of content.
///
/// `key` is a logical name. File-backed variants resolve it through their
/// [`FileLocator`](crate::FileLocator); [`StaticResource`](crate::StaticResource)
/// ignores it.
///
/// Implementations perform no caching or locking. Concurrent calls against the
/// same storage see whatever the storage provides.
///
/// # Example
///
/// ```
/// use locus_resource::{Resource, ResourceError};
/// use async_trait::async_trait;
///
/// struct Greeting;
///
/// #[async_trait]
/// impl Resource for Greeting {
///     type Value = String;
///
///     async fn get(&self, key: &str) -> Result<String, ResourceError> {
///         Ok(format!("hello, {key}"))
///     }
/// }
/// ```
#[async_trait]
pub trait Resource: Send + Sync {
    /// The value produced by [`get`](Self::get).
    type Value: Send;

    /// Reads the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Self::Value, ResourceError>;
}

/// Write access, offered only by variants that can store values.
///
/// Read-only variants do not implement this trait, so calling `set` on them
/// does not compile. Use [`AnyResource`](crate::AnyResource) when the variant
/// is only known at runtime.
///
/// ```
/// # use locus_resource::{FileResource, MutableResource, RawFileLocator, StaticResource};
/// # use std::sync::Arc;
/// fn writable<R: MutableResource>(_: &R) {}
///
/// writable(&FileResource::new(Arc::new(RawFileLocator)));
/// writable(&StaticResource::new(String::new()));
/// ```
///
/// Asking the same of a read-only file fails to compile:
///
/// ```compile_fail
/// # use locus_resource::{MutableResource, RawFileLocator, ReadOnlyFileResource};
/// # use std::sync::Arc;
/// fn writable<R: MutableResource>(_: &R) {}
///
/// writable(&ReadOnlyFileResource::new(Arc::new(RawFileLocator))); // Compile error!
/// ```
///
/// And of a directory listing:
///
/// ```compile_fail
/// # use locus_resource::{FileTreeResource, MutableResource, RawFileLocator};
/// # use std::sync::Arc;
/// fn writable<R: MutableResource>(_: &R) {}
///
/// writable(&FileTreeResource::new(Arc::new(RawFileLocator))); // Compile error!
/// ```
#[async_trait]
pub trait MutableResource: Resource {
    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: Self::Value) -> Result<(), ResourceError>;
}

#[async_trait]
impl<R: Resource + ?Sized> Resource for Arc<R> {
    type Value = R::Value;

    async fn get(&self, key: &str) -> Result<Self::Value, ResourceError> {
        (**self).get(key).await
    }
}

#[async_trait]
impl<R: MutableResource + ?Sized> MutableResource for Arc<R> {
    async fn set(&self, key: &str, value: Self::Value) -> Result<(), ResourceError> {
        (**self).set(key, value).await
    }
}
