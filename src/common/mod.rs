use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod errors;

use crate::common::errors::Error;

pub const TABLE_NAME_DEFAULT: &str = "guest-users-table";
pub const RANDOM_USER_URL_DEFAULT: &str = "https://randomuser.me/api/";
pub const PAGE_SIZE_DEFAULT: u32 = 5;

const USER_ID: &str = "userId";
const FIRSTNAME: &str = "firstname";
const LASTNAME: &str = "lastname";
const PICTURE: &str = "picture";

/// A stored guest user. Field names match both the table attributes and the
/// `User` type of the GraphQL schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub user_id: String,
    pub firstname: String,
    pub lastname: String,
    pub picture: String,
}

impl From<UserRecord> for HashMap<String, AttributeValue> {
    fn from(value: UserRecord) -> Self {
        HashMap::from([
            (USER_ID.into(), AttributeValue::S(value.user_id)),
            (FIRSTNAME.into(), AttributeValue::S(value.firstname)),
            (LASTNAME.into(), AttributeValue::S(value.lastname)),
            (PICTURE.into(), AttributeValue::S(value.picture)),
        ])
    }
}

impl TryFrom<HashMap<String, AttributeValue>> for UserRecord {
    type Error = Error;

    fn try_from(mut value: HashMap<String, AttributeValue>) -> Result<Self, Self::Error> {
        let mut take = |name: &'static str| match value.remove(name) {
            Some(AttributeValue::S(val)) => Ok(val),
            _ => Err(Error::MalformedItem(name)),
        };

        Ok(Self {
            user_id: take(USER_ID)?,
            firstname: take(FIRSTNAME)?,
            lastname: take(LASTNAME)?,
            picture: take(PICTURE)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            user_id: "u1".into(),
            firstname: "A".into(),
            lastname: "B".into(),
            picture: "http://x/p.png".into(),
        }
    }

    #[test]
    fn item_is_keyed_by_user_id() {
        let item: HashMap<String, AttributeValue> = record().into();

        assert_eq!(item.len(), 4);
        assert_eq!(item.get("userId"), Some(&AttributeValue::S("u1".into())));
        assert_eq!(item.get("picture"), Some(&AttributeValue::S("http://x/p.png".into())));
    }

    #[test]
    fn item_with_wrong_attribute_type_is_rejected() {
        let mut item: HashMap<String, AttributeValue> = record().into();
        item.insert("lastname".into(), AttributeValue::N("7".into()));

        let err = UserRecord::try_from(item).unwrap_err();
        assert!(matches!(err, Error::MalformedItem("lastname")));
    }

    #[test]
    fn graphql_shape_uses_camel_case_key() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "userId": "u1",
                "firstname": "A",
                "lastname": "B",
                "picture": "http://x/p.png"
            })
        );
    }
}
