use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GraphQL error entry as returned in the `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlError {
    pub message: String,
    /// AppSync puts its error classification here, e.g. `UnauthorizedException`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<serde_json::Value>,
}

#[derive(Debug, Error)]
pub enum GraphqlClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} with body: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GraphQL errors: {}", join_messages(.errors))]
    GraphqlErrors { errors: Vec<GraphqlError> },

    #[error("GraphQL response carried no data")]
    MissingData,

    #[error("invalid client configuration: {0}")]
    Config(String),
}

fn join_messages(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
