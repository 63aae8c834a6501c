//! Uniform get/set access to named content.
//!
//! A caller holds a resource and reads (or writes) it by key without caring
//! whether the content is an in-memory value, a file, or a directory listing.
//!
//! # Variants
//!
//! | Type | `get` returns | `set` |
//! |------|---------------|-------|
//! | [`StaticResource<T>`] | the held `T`, key ignored | replaces the value |
//! | [`ReadOnlyFileResource`] | file text | not offered |
//! | [`FileResource`] | file text | create-or-truncate write |
//! | [`FileTreeResource`] | `Option<Vec<String>>` of relative paths | not offered |
//!
//! `set` lives on the separate [`MutableResource`] capability, so calling it on
//! a read-only variant is a compile error. [`AnyResource`] wraps any variant for
//! runtime dispatch and reports [`ResourceError::Unsupported`] instead.
//!
//! # Locators
//!
//! File-backed variants resolve keys through an injected [`FileLocator`]
//! before doing I/O. See the [`locator`] module.
//!
//! # Example
//!
//! ```no_run
//! use locus_resource::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), ResourceError> {
//! let locator: Arc<dyn FileLocator> = Arc::new(BaseDirFileLocator::new("/srv/site"));
//!
//! let page = FileResource::new(Arc::clone(&locator));
//! page.set("index.html", "<h1>hi</h1>".to_string()).await?;
//!
//! let assets = FileTreeResource::with_max_depth(locator, 2);
//! if let Some(files) = assets.get("static").await? {
//!     for file in files {
//!         tracing::info!(%file, "asset");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod any;
mod error;
mod file;
pub mod locator;
mod resource;
mod static_resource;
mod tree;

pub use any::{Access, AnyResource, Content};
pub use error::{ErrorKind, ResourceError};
pub use file::{FileResource, ReadOnlyFileResource};
pub use locator::{BaseDirFileLocator, FileLocator, RawFileLocator};
pub use resource::{MutableResource, Resource};
pub use static_resource::StaticResource;
pub use tree::FileTreeResource;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::{
        Access, AnyResource, BaseDirFileLocator, Content, ErrorKind, FileLocator, FileResource,
        FileTreeResource, MutableResource, RawFileLocator, ReadOnlyFileResource, Resource,
        ResourceError, StaticResource,
    };
}
