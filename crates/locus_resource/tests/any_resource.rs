//! Integration tests for runtime dispatch through `AnyResource`.

mod common;

use common::download_list;
use locus_resource::prelude::*;
use std::sync::Arc;

#[tokio::test]
async fn dispatches_to_each_variant() {
    let dir = download_list();
    let locator: Arc<dyn FileLocator> = Arc::new(BaseDirFileLocator::new(dir.path()));

    let file = AnyResource::from(FileResource::new(Arc::clone(&locator)));
    file.set("downloadList/a", "updated".to_string()).await.unwrap();

    let read_only = AnyResource::from(ReadOnlyFileResource::new(Arc::clone(&locator)));
    let content = read_only.get("downloadList/a").await.unwrap();
    assert_eq!(content, Some(Content::Text("updated".to_string())));

    let tree = AnyResource::from(FileTreeResource::new(Arc::clone(&locator)));
    let listing = tree.get("downloadList/layer1").await.unwrap();
    assert_eq!(
        listing,
        Some(Content::Listing(vec!["b".to_string(), "c".to_string()]))
    );
    assert_eq!(tree.get("downloadList/not-exist").await.unwrap(), None);
}

#[tokio::test]
async fn read_only_variants_reject_set_and_leave_storage_alone() {
    let dir = download_list();
    let locator: Arc<dyn FileLocator> = Arc::new(BaseDirFileLocator::new(dir.path()));
    let read_only = AnyResource::from(ReadOnlyFileResource::new(locator));

    let err = read_only
        .set("downloadList/a", "clobbered".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("downloadList/a")).unwrap(),
        "a"
    );
}

#[tokio::test]
async fn errors_pass_through_unchanged() {
    let dir = download_list();
    let tree = AnyResource::from(FileTreeResource::new(Arc::new(RawFileLocator)));
    let err = tree.get(&dir.key("downloadList/a")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotADirectory);
}
