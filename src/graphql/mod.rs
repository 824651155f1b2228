//! Minimal GraphQL-over-HTTP client for the users API.
//!
//! Only the `listUsers` query is needed, so operations are plain request
//! structs rather than generated code.

mod client;
mod error;

pub use client::{GraphqlRequest, GraphqlResponse, UsersApiClient, LIST_USERS_QUERY};
pub use error::{GraphqlClientError, GraphqlError};
