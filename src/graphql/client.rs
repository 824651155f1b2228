use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graphql::error::{GraphqlClientError, GraphqlError};
use crate::pagination::{UserPage, UserPageSource};

pub const LIST_USERS_QUERY: &str = r#"
  query ListUsers($limit: Int, $nextToken: String) {
    listUsers(limit: $limit, nextToken: $nextToken) {
      items {
        userId
        firstname
        lastname
        picture
      }
      nextToken
    }
  }
"#;

const LIST_USERS_OPERATION: &str = "ListUsers";
const API_KEY_HEADER: &str = "x-api-key";
const MAX_ERROR_BODY: usize = 4096;

/// Request body of a GraphQL POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
    pub operation_name: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphqlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// Returns the data, treating any reported error as a failure.
    pub fn into_data(self) -> Result<T, GraphqlClientError> {
        if !self.errors.is_empty() {
            return Err(GraphqlClientError::GraphqlErrors {
                errors: self.errors,
            });
        }
        self.data.ok_or(GraphqlClientError::MissingData)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListUsersVariables<'a> {
    limit: u32,
    next_token: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListUsersData {
    list_users: UserPage,
}

/// Client for the AppSync users API, authenticated with an API key.
#[derive(Debug, Clone)]
pub struct UsersApiClient {
    endpoint: String,
    http: reqwest::Client,
}

impl UsersApiClient {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, GraphqlClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| GraphqlClientError::Config("API key is not a valid header value".into()))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub async fn execute<V, T>(
        &self,
        request: &GraphqlRequest<'_, V>,
    ) -> Result<GraphqlResponse<T>, GraphqlClientError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(request)?;
        debug!("Sending {} to {}", request.operation_name, self.endpoint);

        let response = self.http.post(&self.endpoint).body(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(GraphqlClientError::HttpStatus {
                status,
                body: truncate_body(&bytes),
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl UserPageSource for UsersApiClient {
    async fn list_users(
        &self,
        limit: u32,
        next_token: Option<&str>,
    ) -> Result<UserPage, GraphqlClientError> {
        let request = GraphqlRequest {
            query: LIST_USERS_QUERY,
            variables: ListUsersVariables { limit, next_token },
            operation_name: LIST_USERS_OPERATION,
        };

        let data: ListUsersData = self.execute(&request).await?.into_data()?;
        Ok(data.list_users)
    }
}

fn truncate_body(bytes: &[u8]) -> String {
    let mut body = String::from_utf8_lossy(bytes).to_string();
    if body.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push('…');
    }
    body
}
