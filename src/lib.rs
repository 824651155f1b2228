pub mod common;
pub mod graphql;
pub mod pagination;
pub mod random_user;
pub mod store;
pub mod view;
pub mod writer;
