//! Uniform async access to named content: static values, files on disk and
//! recursive directory listings.
//!

pub use locus_resource;
pub use locus_tracing;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use locus_resource::prelude::*;
    pub use locus_tracing::{TracingConfig, TracingFormat, TracingSetup};
}
