//! Documents, the store trait and named collections

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// A stored document: a JSON object. Filters use the same type.
pub type Document = Map<String, Value>;

/// Document store trait
///
/// Implementations must be safe for concurrent use; an upsert must be atomic
/// with respect to its filter (never two documents for one filter).
#[trait_variant::make(DocumentStore: Send)]
pub trait LocalDocumentStore {
    /// Every document of `collection` whose fields equal all fields of `filter`,
    /// in insertion order
    async fn find(&self, collection: &str, filter: &Document) -> StoreResult<Vec<Document>>;

    /// Replace the document a previous upsert stored under the same `filter`,
    /// or add it when there is none.
    ///
    /// Upserts are keyed by [`upsert_key`], not by content: a document added
    /// through [`insert`](LocalDocumentStore::insert) is never replaced, even when
    /// it happens to match `filter`.
    async fn upsert(
        &self,
        collection: &str,
        filter: &Document,
        document: &Document,
    ) -> StoreResult<()>;

    /// Insert a new document unconditionally
    async fn insert(&self, collection: &str, document: &Document) -> StoreResult<()>;
}

/// Whether `document` satisfies every equality in `filter`
pub fn matches_filter(filter: &Document, document: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

/// Canonical key of an upsert filter. `serde_json` maps are key-sorted, so
/// equal filters give equal keys.
pub fn upsert_key(filter: &Document) -> StoreResult<String> {
    Ok(serde_json::to_string(filter)?)
}

/// Serialize a value into a document
pub fn to_document<T: Serialize>(value: &T) -> StoreResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(document) => Ok(document),
        _ => Err(StoreError::NotAnObject),
    }
}

/// Deserialize a document into a value
pub fn from_document<T: DeserializeOwned>(document: Document) -> StoreResult<T> {
    Ok(serde_json::from_value(Value::Object(document))?)
}

/// Handle on one named collection of a shared store
pub struct Collection<S> {
    store: Arc<S>,
    name: &'static str,
}

impl<S> Clone for Collection<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            name: self.name,
        }
    }
}

impl<S> Collection<S>
where
    S: DocumentStore + Send + Sync,
{
    pub fn new(store: Arc<S>, name: &'static str) -> Self {
        Self { store, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn find(&self, filter: &Document) -> StoreResult<Vec<Document>> {
        self.store.find(self.name, filter).await
    }

    /// Find and deserialize every matching document
    pub async fn find_as<T: DeserializeOwned>(&self, filter: &Document) -> StoreResult<Vec<T>> {
        self.find(filter)
            .await?
            .into_iter()
            .map(from_document)
            .collect()
    }

    /// Upsert keyed by `filter`. The stored document always carries the filter's fields.
    pub async fn upsert(&self, filter: &Document, document: &Document) -> StoreResult<()> {
        if filter.is_empty() {
            return Err(StoreError::EmptyFilter);
        }

        let mut document = document.clone();
        for (key, value) in filter {
            document.insert(key.clone(), value.clone());
        }

        self.store.upsert(self.name, filter, &document).await
    }

    pub async fn insert(&self, document: &Document) -> StoreResult<()> {
        self.store.insert(self.name, document).await
    }
}
