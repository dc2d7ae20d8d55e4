use super::ApiError;
use crate::auth::Credentials;
use crate::record::{CreateQaRecord, QaRecord, UpdateQaRecord};

/// Stateless access to the remote Q&A service.
///
/// Every call is authenticated with the given credentials; implementations
/// keep no session of their own. Failures are normalized into `ApiError`
/// (see its docs for the transport/service split).
#[async_trait::async_trait]
pub trait QaApi: Send + Sync {
    /// Fetches every record, in service order.
    async fn list_all(&self, credentials: &Credentials) -> Result<Vec<QaRecord>, ApiError>;

    /// Fetches a single record. An absent record is a service failure with status 404.
    async fn get_one(&self, id: &str, credentials: &Credentials) -> Result<QaRecord, ApiError>;

    /// Creates a record and returns it with its server-assigned id.
    async fn create(
        &self,
        data: &CreateQaRecord,
        credentials: &Credentials,
    ) -> Result<QaRecord, ApiError>;

    /// Updates the record identified by `data.id`.
    async fn update(
        &self,
        data: &UpdateQaRecord,
        credentials: &Credentials,
    ) -> Result<QaRecord, ApiError>;

    /// Deletes a record. Succeeds without reading the response body.
    async fn delete_one(&self, id: &str, credentials: &Credentials) -> Result<(), ApiError>;
}
