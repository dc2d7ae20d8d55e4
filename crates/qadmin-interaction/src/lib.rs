//! Remote I/O for qadmin.

pub mod http_api_client;

pub use http_api_client::HttpQaApiClient;
