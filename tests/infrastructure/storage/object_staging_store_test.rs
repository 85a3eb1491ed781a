use bytes::Bytes;

use clausewise::application::ports::{StagingStore, StagingStoreError};
use clausewise::domain::StoragePath;
use clausewise::infrastructure::storage::ObjectStagingStore;

use crate::helpers::user;

#[tokio::test]
async fn given_stored_file_when_fetching_then_bytes_match_until_deleted() {
    let store = ObjectStagingStore::in_memory();
    let path = StoragePath::new(&user("alice"), "lease.pdf");

    let size = store
        .store(&path, Bytes::from_static(b"%PDF-1.7 body"))
        .await
        .unwrap();
    assert_eq!(size, 13);
    assert_eq!(store.fetch(&path).await.unwrap(), b"%PDF-1.7 body");

    store.delete(&path).await.unwrap();

    assert!(matches!(
        store.fetch(&path).await,
        Err(StagingStoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_local_directory_when_storing_then_file_lands_under_owner_prefix() {
    let dir = std::env::temp_dir().join(format!("clausewise-staging-{}", uuid::Uuid::new_v4()));
    let store = ObjectStagingStore::local(dir.clone()).unwrap();
    let path = StoragePath::from_raw("alice/1_notes.txt");

    store
        .store(&path, Bytes::from_static(b"plain text"))
        .await
        .unwrap();

    assert_eq!(
        std::fs::read(dir.join("alice").join("1_notes.txt")).unwrap(),
        b"plain text"
    );
    store.delete(&path).await.unwrap();
    assert!(!dir.join("alice").join("1_notes.txt").exists());

    let _ = std::fs::remove_dir_all(dir);
}
