use super::form::{RecordForm, Submission};
use crate::session::{SessionController, SessionTicket};
use qadmin_core::api::{ApiError, QaApi, should_force_logout};
use qadmin_core::error::{QadminError, Result};
use qadmin_core::record::{CreateQaRecord, QaRecord, UpdateQaRecord, filtered_view};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Client-side cache of the remote record list.
///
/// `RecordCollectionManager` is responsible for:
/// - Replacing the cache on refresh
/// - Reconciling it locally after create/update/delete instead of re-fetching
/// - Filtering it by the current search term
/// - Ending the session when the service answers 401
///
/// No lock is held across a remote call. Concurrent operations race and the
/// last write to the cache wins.
pub struct RecordCollectionManager {
    api: Arc<dyn QaApi>,
    session: Arc<SessionController>,
    /// Ordered as returned by the last list fetch, ids unique
    records: RwLock<Vec<QaRecord>>,
    search_term: RwLock<String>,
}

impl RecordCollectionManager {
    pub fn new(api: Arc<dyn QaApi>, session: Arc<SessionController>) -> Self {
        Self {
            api,
            session,
            records: RwLock::new(Vec::new()),
            search_term: RwLock::new(String::new()),
        }
    }

    /// Snapshot of the whole cache.
    pub async fn records(&self) -> Vec<QaRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    pub async fn search_term(&self) -> String {
        self.search_term.read().await.clone()
    }

    pub async fn set_search_term(&self, term: impl Into<String>) {
        *self.search_term.write().await = term.into();
    }

    /// The cache filtered by the current search term.
    pub async fn filtered(&self) -> Vec<QaRecord> {
        let term = self.search_term.read().await.clone();
        self.filtered_by(&term).await
    }

    /// The cache filtered by `term`, leaving the stored term alone.
    pub async fn filtered_by(&self, term: &str) -> Vec<QaRecord> {
        let records = self.records.read().await;
        filtered_view(&records, term).into_iter().cloned().collect()
    }

    /// Replaces the cache with the service's current list.
    pub async fn refresh(&self) -> Result<()> {
        let ticket = self.session.ticket().await?;
        let fetched = match self.api.list_all(&ticket.credentials).await {
            Ok(records) => records,
            Err(e) => return Err(self.interpret(&ticket, e).await),
        };

        let count = fetched.len();
        if self.apply(&ticket, |records| *records = fetched).await {
            tracing::info!("[Records] Loaded {} records", count);
        }
        Ok(())
    }

    /// Fetches one record for editing; the cache is not touched.
    ///
    /// A record deleted meanwhile comes back as an error with
    /// `is_not_found() == true`.
    pub async fn get_one(&self, id: &str) -> Result<QaRecord> {
        let ticket = self.session.ticket().await?;
        match self.api.get_one(id, &ticket.credentials).await {
            Ok(record) => Ok(record),
            Err(e) => Err(self.interpret(&ticket, e).await),
        }
    }

    /// Creates a record remotely and appends the server's copy to the cache.
    pub async fn create(&self, data: CreateQaRecord) -> Result<QaRecord> {
        data.validate()?;
        let ticket = self.session.ticket().await?;
        let created = match self.api.create(&data, &ticket.credentials).await {
            Ok(record) => record,
            Err(e) => return Err(self.interpret(&ticket, e).await),
        };

        tracing::info!("[Records] Created record '{}'", created.id);
        let record = created.clone();
        self.apply(&ticket, |records| upsert(records, record, false)).await;
        Ok(created)
    }

    /// Updates a record remotely and replaces the cached entry in place.
    pub async fn update(&self, data: UpdateQaRecord) -> Result<QaRecord> {
        data.validate()?;
        let ticket = self.session.ticket().await?;
        let updated = match self.api.update(&data, &ticket.credentials).await {
            Ok(record) => record,
            Err(e) => return Err(self.interpret(&ticket, e).await),
        };

        tracing::info!("[Records] Updated record '{}'", updated.id);
        let record = updated.clone();
        self.apply(&ticket, |records| upsert(records, record, true)).await;
        Ok(updated)
    }

    /// Submits a form: create when it has no id, update otherwise.
    pub async fn save(&self, form: &RecordForm) -> Result<QaRecord> {
        match form.submission()? {
            Submission::Create(data) => self.create(data).await,
            Submission::Update(data) => self.update(data).await,
        }
    }

    /// Deletes a record remotely, then drops it from the cache without re-fetching.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let ticket = self.session.ticket().await?;
        if let Err(e) = self.api.delete_one(id, &ticket.credentials).await {
            return Err(self.interpret(&ticket, e).await);
        }

        self.apply(&ticket, |records| {
            remove(records, id);
        })
        .await;
        tracing::info!("[Records] Deleted record '{}'", id);
        Ok(())
    }

    /// Removes the cached record with `id`. Returns whether one was removed.
    pub async fn remove_local(&self, id: &str) -> bool {
        remove(&mut *self.records.write().await, id)
    }

    /// Empties the cache and the search term.
    pub async fn clear(&self) {
        self.records.write().await.clear();
        self.search_term.write().await.clear();
    }

    /// Runs `f` on the cache if `ticket` still belongs to the live session.
    ///
    /// The epoch is compared while the cache write lock is held, so a logout
    /// that bumps the epoch and then clears the cache cannot be overwritten by
    /// a result from before it.
    async fn apply<F>(&self, ticket: &SessionTicket, f: F) -> bool
    where
        F: FnOnce(&mut Vec<QaRecord>),
    {
        let mut records = self.records.write().await;
        if !self.session.is_current(ticket).await {
            tracing::debug!("[Records] Discarding result from a previous session");
            return false;
        }
        f(&mut records);
        true
    }

    /// Applies the failure policy to an API error.
    async fn interpret(&self, ticket: &SessionTicket, error: ApiError) -> QadminError {
        if should_force_logout(&error) {
            match self.session.expire(ticket).await {
                Ok(true) => return QadminError::SessionExpired(error),
                // A 401 for credentials that are no longer current says
                // nothing about the live session.
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!("[Records] Failed to clear stored credentials: {}", e);
                    return QadminError::SessionExpired(error);
                }
            }
        }
        tracing::warn!("[Records] {}", error);
        QadminError::Api(error)
    }
}

/// Puts `record` into the cache keeping ids unique.
///
/// An entry with the same id is replaced in place; otherwise the record is
/// appended.
fn upsert(records: &mut Vec<QaRecord>, record: QaRecord, expect_existing: bool) {
    match records.iter().position(|existing| existing.id == record.id) {
        Some(index) => records[index] = record,
        None => {
            if expect_existing {
                tracing::debug!("[Records] Updated record '{}' not cached, appending", record.id);
            }
            records.push(record);
        }
    }
}

fn remove(records: &mut Vec<QaRecord>, id: &str) -> bool {
    let before = records.len();
    records.retain(|record| record.id != id);
    records.len() != before
}
