use std::str::FromStr;
use std::time::Duration;

use crate::common::errors::Error;
use crate::common::{PAGE_SIZE_DEFAULT, RANDOM_USER_URL_DEFAULT, TABLE_NAME_DEFAULT};

const HTTP_TIMEOUT_SECS_DEFAULT: u64 = 30;

/// Settings of the scheduled `add-user` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterConfig {
    pub table_name: String,
    pub random_user_url: String,
    pub http_timeout: Duration,
}

impl WriterConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        // The CDK stack exported the table as TABLENAME.
        let table_name = lookup("TABLE_NAME")
            .or_else(|| lookup("TABLENAME"))
            .unwrap_or(TABLE_NAME_DEFAULT.into());
        let random_user_url = lookup("RANDOM_USER_URL").unwrap_or(RANDOM_USER_URL_DEFAULT.into());
        let http_timeout = Duration::from_secs(parse_or(
            &lookup,
            "HTTP_TIMEOUT_SECS",
            HTTP_TIMEOUT_SECS_DEFAULT,
        )?);

        Ok(Self {
            table_name,
            random_user_url,
            http_timeout,
        })
    }
}

/// Settings of the `browse-users` terminal client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub graphql_url: String,
    pub api_key: String,
    pub page_size: u32,
    pub http_timeout: Duration,
}

impl BrowserConfig {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let graphql_url = required(&lookup, "GRAPHQL_URL")?;
        let api_key = required(&lookup, "GRAPHQL_API_KEY")?;
        let page_size = parse_or(&lookup, "PAGE_SIZE", PAGE_SIZE_DEFAULT)?;
        if page_size == 0 {
            return Err(Error::Config("PAGE_SIZE must be at least 1".into()));
        }
        let http_timeout = Duration::from_secs(parse_or(
            &lookup,
            "HTTP_TIMEOUT_SECS",
            HTTP_TIMEOUT_SECS_DEFAULT,
        )?);

        Ok(Self {
            graphql_url,
            api_key,
            page_size,
            http_timeout,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, Error> {
    match lookup(name) {
        Some(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(Error::Config(format!("{name} is not set"))),
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, Error> {
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("{name} has an invalid value: {raw}"))),
        None => Ok(default),
    }
}
