//! Document Store Repository Implementations

use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::sync::Arc;
use store::{Collection, Document, DocumentStore, to_document};

use crate::domain::entities::{SessionRecord, User, WorkEntry};
use crate::domain::repository::{SessionRepository, UserRepository, WorkRepository};
use crate::domain::value_objects::DateRange;
use crate::error::WorkhourResult;

const SESSIONS: &str = "sessions";
const WORK: &str = "work";
const USERS: &str = "users";

/// Session, work and user repository over one shared document store
pub struct DocumentRepository<S> {
    sessions: Collection<S>,
    work: Collection<S>,
    users: Collection<S>,
}

impl<S> Clone for DocumentRepository<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            work: self.work.clone(),
            users: self.users.clone(),
        }
    }
}

impl<S> DocumentRepository<S>
where
    S: DocumentStore + Send + Sync,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            sessions: Collection::new(store.clone(), SESSIONS),
            work: Collection::new(store.clone(), WORK),
            users: Collection::new(store, USERS),
        }
    }

    /// Accounts are provisioned outside the service; tests seed them here.
    /// Keyed by `userId`, so seeding an existing user replaces it.
    #[cfg(test)]
    pub(crate) async fn create_user(&self, user: &User) -> WorkhourResult<()> {
        self.users
            .upsert(&filter("userId", &user.user_id), &to_document(user)?)
            .await?;
        Ok(())
    }
}

/// Single-field equality filter
fn filter(field: &str, value: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(field.to_string(), Value::String(value.to_string()));
    filter
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl<S> SessionRepository for DocumentRepository<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn upsert_session(
        &self,
        session_id: &str,
        cookie: &BTreeMap<String, String>,
    ) -> WorkhourResult<()> {
        let mut document = Document::new();
        document.insert("cookie".to_string(), json!(cookie));

        self.sessions
            .upsert(&filter("sessionId", session_id), &document)
            .await?;

        Ok(())
    }

    async fn find_session(&self, session_id: &str) -> WorkhourResult<Option<SessionRecord>> {
        let records: Vec<SessionRecord> = self
            .sessions
            .find_as(&filter("sessionId", session_id))
            .await?;

        Ok(records.into_iter().next())
    }
}

// ============================================================================
// Work Repository Implementation
// ============================================================================

impl<S> WorkRepository for DocumentRepository<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn record_work(&self, entry: &WorkEntry) -> WorkhourResult<()> {
        self.work.insert(&to_document(entry)?).await?;
        Ok(())
    }

    async fn query_work(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> WorkhourResult<Vec<WorkEntry>> {
        let mut entries: Vec<WorkEntry> = self.work.find_as(&filter("userId", user_id)).await?;

        entries.retain(|entry| range.contains(entry.date));
        entries.sort_by_key(|entry| (entry.date, entry.recorded_at_ms));

        Ok(entries)
    }

    async fn all_work(&self) -> WorkhourResult<Vec<WorkEntry>> {
        Ok(self.work.find_as(&Document::new()).await?)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl<S> UserRepository for DocumentRepository<S>
where
    S: DocumentStore + Send + Sync,
{
    async fn find_by_credentials(&self, pre_token: &str) -> WorkhourResult<Option<User>> {
        let users: Vec<User> = self.users.find_as(&filter("preToken", pre_token)).await?;
        Ok(users.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use store::MemoryDocumentStore;

    fn repo() -> (Arc<MemoryDocumentStore>, DocumentRepository<MemoryDocumentStore>) {
        let store = Arc::new(MemoryDocumentStore::new());
        (store.clone(), DocumentRepository::new(store))
    }

    fn entry(user_id: &str, day: u32, recorded_at_ms: i64) -> WorkEntry {
        WorkEntry {
            user_id: user_id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            hours: 1.0,
            note: None,
            recorded_at_ms,
        }
    }

    #[tokio::test]
    async fn test_upsert_session_replaces_cookie_map() {
        let (store, repo) = repo();

        let first = BTreeMap::from([("SESSIONID".to_string(), "abc".to_string())]);
        let second = BTreeMap::from([
            ("SESSIONID".to_string(), "abc".to_string()),
            ("theme".to_string(), "dark".to_string()),
        ]);

        repo.upsert_session("abc", &first).await.unwrap();
        repo.upsert_session("abc", &second).await.unwrap();

        assert_eq!(store.count(SESSIONS).await, 1);
        let record = repo.find_session("abc").await.unwrap().unwrap();
        assert_eq!(record.session_id, "abc");
        assert_eq!(record.cookie, second);
        assert!(repo.find_session("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_query_work_filters_and_sorts() {
        let (_, repo) = repo();

        repo.record_work(&entry("u1", 10, 3)).await.unwrap();
        repo.record_work(&entry("u1", 2, 2)).await.unwrap();
        repo.record_work(&entry("u1", 2, 1)).await.unwrap();
        repo.record_work(&entry("u2", 5, 4)).await.unwrap();

        let all = repo.query_work("u1", &DateRange::unbounded()).await.unwrap();
        let order: Vec<_> = all.iter().map(|e| e.recorded_at_ms).collect();
        assert_eq!(order, vec![1, 2, 3]);

        let range = DateRange::new(None, NaiveDate::from_ymd_opt(2024, 3, 5)).unwrap();
        assert_eq!(repo.query_work("u1", &range).await.unwrap().len(), 2);

        assert_eq!(repo.all_work().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_find_by_credentials() {
        let (_, repo) = repo();
        let user = User {
            user_id: "u1".to_string(),
            email: "a@example.com".to_string(),
            pre_token: "digest".to_string(),
            name: None,
        };

        repo.create_user(&user).await.unwrap();
        repo.create_user(&user).await.unwrap();

        assert_eq!(repo.find_by_credentials("digest").await.unwrap(), Some(user));
        assert!(repo.find_by_credentials("nope").await.unwrap().is_none());
    }
}
