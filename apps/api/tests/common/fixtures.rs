//! Test fixtures for API integration tests
//!
//! Provides reusable store contents.

#![allow(dead_code)]

use super::mocks::SharedStore;

/// Store with two singers and no albums
pub async fn store_with_singers() -> SharedStore {
    let store = SharedStore::new();
    store.insert_singer(1, "Singer 1").await;
    store.insert_singer(2, "Singer 2").await;
    store
}

/// Store with two singers; singer 1 has albums 1 and 3, singer 2 has album 2.
/// Albums are inserted out of id order.
pub async fn store_with_albums() -> SharedStore {
    let store = store_with_singers().await;
    store.insert_album(3, "Album 3", 1).await;
    store.insert_album(1, "Album 1", 1).await;
    store.insert_album(2, "Album 2", 2).await;
    store
}
