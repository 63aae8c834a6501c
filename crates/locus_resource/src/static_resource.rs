//! In-memory resource holding a single value.

use crate::error::ResourceError;
use crate::resource::{MutableResource, Resource};
use async_trait::async_trait;
use parking_lot::RwLock;

/// A resource backed by one in-memory value.
///
/// The key passed to [`get`](Resource::get) and [`set`](MutableResource::set)
/// is ignored. Every holder of the same instance observes the latest `set`.
///
/// # Example
///
/// ```
/// use locus_resource::{MutableResource, Resource, StaticResource};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let resource = StaticResource::new(String::from("hello"));
/// assert_eq!(resource.get("").await?, "hello");
///
/// resource.set("", String::from("marko polo")).await?;
/// assert_eq!(resource.get("ignored").await?, "marko polo");
/// # Ok::<(), locus_resource::ResourceError>(())
/// # }).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct StaticResource<T> {
    value: RwLock<T>,
}

impl<T> StaticResource<T> {
    /// Creates a resource holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Consumes the resource, returning the held value.
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

#[async_trait]
impl<T> Resource for StaticResource<T>
where
    T: Clone + Send + Sync,
{
    type Value = T;

    async fn get(&self, _key: &str) -> Result<T, ResourceError> {
        Ok(self.value.read().clone())
    }
}

#[async_trait]
impl<T> MutableResource for StaticResource<T>
where
    T: Clone + Send + Sync,
{
    async fn set(&self, _key: &str, value: T) -> Result<(), ResourceError> {
        *self.value.write() = value;
        Ok(())
    }
}
