//! Smoke test for the facade re-exports.

use locus::prelude::*;
use std::sync::Arc;

#[tokio::test]
async fn prelude_covers_a_logged_round_trip() {
    let config = TracingSetup::new()
        .with_level(tracing::Level::DEBUG)
        .with_format(TracingFormat::Compact)
        .init();
    assert_eq!(config.format, TracingFormat::Compact);

    let resource = AnyResource::from(StaticResource::new("hello".to_string()));
    resource.set("", "world".to_string()).await.unwrap();
    assert_eq!(
        resource.get("").await.unwrap(),
        Some(Content::Text("world".to_string()))
    );

    let tree = FileTreeResource::new(Arc::new(RawFileLocator));
    let missing = std::env::temp_dir().join("locus-prelude-does-not-exist");
    assert_eq!(tree.get(&missing.to_string_lossy()).await.unwrap(), None);
}
