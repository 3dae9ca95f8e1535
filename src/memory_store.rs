//! In-process `ItemStore` implementations used by the test suite.

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::Item;
use crate::store::ItemStore;

/// Vec-backed store that keeps insertion order, like a fresh collection scan.
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, item: Item) -> Result<()> {
        self.items.write().await.push(item);
        Ok(())
    }

    async fn delete_one(&self, name: &str) -> Result<u64> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.name == name) {
            Some(idx) => {
                items.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_one(&self, name: &str, replacement: Item) -> Result<u64> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                *item = replacement;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|item| item.name == name).cloned().collect())
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

/// Store whose every call fails, as if the connection dropped.
pub struct FailingItemStore;

#[async_trait]
impl ItemStore for FailingItemStore {
    async fn insert(&self, _item: Item) -> Result<()> {
        Err(anyhow!("connection closed"))
    }

    async fn delete_one(&self, _name: &str) -> Result<u64> {
        Err(anyhow!("connection closed"))
    }

    async fn update_one(&self, _name: &str, _replacement: Item) -> Result<u64> {
        Err(anyhow!("connection closed"))
    }

    async fn find_by_name(&self, _name: &str) -> Result<Vec<Item>> {
        Err(anyhow!("connection closed"))
    }

    async fn find_all(&self) -> Result<Vec<Item>> {
        Err(anyhow!("connection closed"))
    }

    async fn ping(&self) -> Result<()> {
        Err(anyhow!("connection closed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_one_removes_single_duplicate() {
        let store = MemoryItemStore::new();
        store.insert(Item::new("dup", "first")).await.unwrap();
        store.insert(Item::new("dup", "second")).await.unwrap();

        assert_eq!(store.delete_one("dup").await.unwrap(), 1);
        assert_eq!(store.find_by_name("dup").await.unwrap().len(), 1);
        assert_eq!(store.delete_one("missing").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_one_replaces_fields() {
        let store = MemoryItemStore::new();
        store.insert(Item::new("old", "before")).await.unwrap();

        let matched = store
            .update_one("old", Item::new("new", "after"))
            .await
            .unwrap();

        assert_eq!(matched, 1);
        assert!(store.find_by_name("old").await.unwrap().is_empty());
        assert_eq!(
            store.find_by_name("new").await.unwrap(),
            vec![Item::new("new", "after")]
        );
    }
}
