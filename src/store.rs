//! Persistence of guest users.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use tracing::{info, warn};

use crate::common::errors::Error;
use crate::common::UserRecord;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts `user`, replacing any record with the same `userId`.
    /// Returns the replaced record when there was one and it could be read
    /// back; the write itself has succeeded whenever this returns `Ok`.
    async fn put_user(&self, user: &UserRecord) -> Result<Option<UserRecord>, Error>;
}

#[derive(Debug, Clone)]
pub struct DynamoUserStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoUserStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl UserStore for DynamoUserStore {
    async fn put_user(&self, user: &UserRecord) -> Result<Option<UserRecord>, Error> {
        info!("Putting user {} into {}", user.user_id, self.table_name);
        let item: HashMap<String, AttributeValue> = user.clone().into();

        let output = self
            .client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|err| Error::storage(&user.user_id, err))?;

        let previous = output
            .attributes
            .filter(|attributes| !attributes.is_empty())
            .and_then(|attributes| match UserRecord::try_from(attributes) {
                Ok(previous) => Some(previous),
                Err(err) => {
                    warn!("Replaced item for {} could not be read: {}", user.user_id, err);
                    None
                }
            });

        Ok(previous)
    }
}
