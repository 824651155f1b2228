//! Client for the public random-user API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::common::errors::Error;
use crate::common::UserRecord;

/// Something that can produce one freshly generated user.
#[async_trait]
pub trait RandomUserSource: Send + Sync {
    async fn fetch_user(&self) -> Result<UserRecord, Error>;
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    results: Vec<ApiUser>,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    login: Login,
    name: Name,
    picture: Picture,
}

#[derive(Debug, Deserialize)]
struct Login {
    uuid: String,
}

#[derive(Debug, Deserialize)]
struct Name {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct Picture {
    large: String,
}

impl From<ApiUser> for UserRecord {
    fn from(value: ApiUser) -> Self {
        Self {
            user_id: value.login.uuid,
            firstname: value.name.first,
            lastname: value.name.last,
            picture: value.picture.large,
        }
    }
}

/// Extracts the first entry of a random-user API body.
pub fn parse_user(body: &[u8]) -> Result<UserRecord, Error> {
    let response: ApiResponse = serde_json::from_slice(body)?;
    response
        .results
        .into_iter()
        .next()
        .map(UserRecord::from)
        .ok_or(Error::NoResults)
}

#[derive(Debug, Clone)]
pub struct RandomUserClient {
    http: reqwest::Client,
    url: String,
}

impl RandomUserClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, url))
    }

    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl RandomUserSource for RandomUserClient {
    async fn fetch_user(&self) -> Result<UserRecord, Error> {
        info!("Requesting random user from {}", self.url);
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Random user payload: {} bytes", body.len());

        parse_user(&body)
    }
}
