//! In-process document store
//!
//! Same semantics as the PostgreSQL store; used by tests and local runs without a database.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::document::{Document, DocumentStore, matches_filter, upsert_key};
use crate::error::StoreResult;

/// A document plus the key of the upsert that wrote it (`None` for inserts)
struct Stored {
    upsert_key: Option<String>,
    body: Document,
}

#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Stored>>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

impl DocumentStore for MemoryDocumentStore {
    async fn find(&self, collection: &str, filter: &Document) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|stored| matches_filter(filter, &stored.body))
                    .map(|stored| stored.body.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn upsert(
        &self,
        collection: &str,
        filter: &Document,
        document: &Document,
    ) -> StoreResult<()> {
        let key = upsert_key(filter)?;

        // The write lock covers both the lookup and the write
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        match documents
            .iter_mut()
            .find(|stored| stored.upsert_key.as_deref() == Some(key.as_str()))
        {
            Some(stored) => stored.body = document.clone(),
            None => documents.push(Stored {
                upsert_key: Some(key),
                body: document.clone(),
            }),
        }

        Ok(())
    }

    async fn insert(&self, collection: &str, document: &Document) -> StoreResult<()> {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(Stored {
                upsert_key: None,
                body: document.clone(),
            });

        Ok(())
    }
}
