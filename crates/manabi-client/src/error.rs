use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("received invalid json data")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error("not signed in")]
    NotAuthenticated,
}

#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("transport error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("request failed ({0}): {1}")]
    Status(StatusCode, String),
}
