//! Thin client for the remote learning-platform API. Every endpoint is an
//! opaque JSON request/response with bearer-token authorization; failures
//! carry the HTTP status for the caller to map to a message.
//!
//! There is no retry or backoff here: a failed call is retried only by the
//! user re-invoking the action. A caller that goes away simply drops the
//! future; a response landing after that is never observed.

mod client;
pub mod error;
pub mod http;
pub mod payload;

pub use client::api::ApiClient;
pub use client::base::{ApiUrl, BaseClient, Config, SecureClient};
pub use error::Error;
pub use http::ReqwestHttpClient as HttpClient;
pub use http::{ApiRequest, BaseHttpClient};
