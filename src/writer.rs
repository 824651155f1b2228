//! The scheduled "add a guest user" job.

use serde::Serialize;
use tracing::{error, info};

use crate::common::errors::Error;
use crate::common::UserRecord;
use crate::random_user::RandomUserSource;
use crate::store::UserStore;

pub const SUCCESS_BODY: &str = "success!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub body: String,
}

impl Response {
    pub fn success() -> Self {
        Self {
            body: SUCCESS_BODY.into(),
        }
    }
}

/// Fetches one random user and upserts it.
pub async fn add_user(
    source: &dyn RandomUserSource,
    store: &dyn UserStore,
) -> Result<UserRecord, Error> {
    let user = source.fetch_user().await?;
    info!("Fetched user {}", user.user_id);

    if let Some(previous) = store.put_user(&user).await? {
        info!("Overwrote existing user {}", previous.user_id);
    }

    Ok(user)
}

#[tracing::instrument(skip_all)]
pub async fn process_event(
    source: &dyn RandomUserSource,
    store: &dyn UserStore,
) -> Result<Response, Error> {
    match add_user(source, store).await {
        Ok(user) => {
            info!("Stored user {}", user.user_id);
            Ok(Response::success())
        }
        Err(err) => {
            error!("Failed to add user: {}", err);
            Err(err)
        }
    }
}
