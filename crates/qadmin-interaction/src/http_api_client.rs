//! HttpQaApiClient - REST implementation of `QaApi` for the Q&A webhook.
//!
//! Wire contract:
//!
//! | op     | method | path         | body            |
//! |--------|--------|--------------|-----------------|
//! | list   | GET    | `/`          | -               |
//! | get    | GET    | `/?id=<id>`  | -               |
//! | create | POST   | `/`          | CreateQaRecord  |
//! | update | PATCH  | `/`          | UpdateQaRecord  |
//! | delete | GET    | `/?id=<id>`  | -               |
//!
//! Delete really is a GET identical to get-one; the webhook deletes as a side
//! effect. Changing the verb breaks compatibility with the deployed workflow.

use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use qadmin_core::api::{ApiError, QaApi};
use qadmin_core::auth::Credentials;
use qadmin_core::config::ClientConfig;
use qadmin_core::error::QadminError;
use qadmin_core::record::{CreateQaRecord, QaRecord, UpdateQaRecord, records_from_value};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn action(self) -> &'static str {
        match self {
            Operation::List => "fetch QA records",
            Operation::Get => "fetch QA record",
            Operation::Create => "create QA record",
            Operation::Update => "update QA record",
            Operation::Delete => "delete QA record",
        }
    }

    fn in_progress(self) -> &'static str {
        match self {
            Operation::List => "fetching QA records",
            Operation::Get => "fetching QA record",
            Operation::Create => "creating QA record",
            Operation::Update => "updating QA record",
            Operation::Delete => "deleting QA record",
        }
    }

    fn network_error(self) -> ApiError {
        ApiError::transport(format!("Network error while {}", self.in_progress()))
    }
}

/// `QaApi` over HTTP with Basic auth.
#[derive(Clone)]
pub struct HttpQaApiClient {
    client: Client,
    base_url: String,
}

impl HttpQaApiClient {
    /// Creates a client for the given webhook root, without a request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client on top of a preconfigured `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Builds the client from the `[client]` config section.
    pub fn from_config(config: &ClientConfig) -> Result<Self, QadminError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| QadminError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config.base_url.as_str()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/?id={}", self.base_url, urlencoding::encode(id))
    }

    /// Every request carries Basic auth and a JSON content type, bodyless GETs included.
    fn request(&self, method: Method, url: String, credentials: &Credentials) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, credentials.basic_auth_header())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
    }

    async fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("[QaApi] Failed to {}: {}", operation.action(), e);
            operation.network_error()
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = format!(
                "Failed to {}: {} {}",
                operation.action(),
                status.as_u16(),
                reason_phrase(&response)
            );
            tracing::debug!("[QaApi] {}", message);
            return Err(ApiError::service(status.as_u16(), message.trim_end()));
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        operation: Operation,
        response: Response,
    ) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            tracing::warn!("[QaApi] Unreadable response while {}: {}", operation.in_progress(), e);
            operation.network_error()
        })
    }
}

/// The reason phrase the server sent, falling back to the canonical one.
///
/// hyper only records the phrase when it differs from the canonical reason.
fn reason_phrase(response: &Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

#[async_trait]
impl QaApi for HttpQaApiClient {
    async fn list_all(&self, credentials: &Credentials) -> Result<Vec<QaRecord>, ApiError> {
        let operation = Operation::List;
        let request = self.request(Method::GET, self.collection_url(), credentials);
        let response = self.send(operation, request).await?;
        let body: serde_json::Value = Self::decode(operation, response).await?;

        if !body.is_array() {
            tracing::warn!("[QaApi] List response is not an array, treating as empty");
        }
        let records = records_from_value(body);
        tracing::debug!("[QaApi] Fetched {} records", records.len());
        Ok(records)
    }

    async fn get_one(&self, id: &str, credentials: &Credentials) -> Result<QaRecord, ApiError> {
        let operation = Operation::Get;
        let request = self.request(Method::GET, self.record_url(id), credentials);
        let response = self.send(operation, request).await?;
        Self::decode(operation, response).await
    }

    async fn create(
        &self,
        data: &CreateQaRecord,
        credentials: &Credentials,
    ) -> Result<QaRecord, ApiError> {
        let operation = Operation::Create;
        let request = self
            .request(Method::POST, self.collection_url(), credentials)
            .json(data);
        let response = self.send(operation, request).await?;
        Self::decode(operation, response).await
    }

    async fn update(
        &self,
        data: &UpdateQaRecord,
        credentials: &Credentials,
    ) -> Result<QaRecord, ApiError> {
        let operation = Operation::Update;
        let request = self
            .request(Method::PATCH, self.collection_url(), credentials)
            .json(data);
        let response = self.send(operation, request).await?;
        Self::decode(operation, response).await
    }

    async fn delete_one(&self, id: &str, credentials: &Credentials) -> Result<(), ApiError> {
        let operation = Operation::Delete;
        let request = self.request(Method::GET, self.record_url(id), credentials);
        self.send(operation, request).await?;
        Ok(())
    }
}
