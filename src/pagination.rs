//! Page-by-page navigation over `listUsers`.
//!
//! Cursors are remembered per page as they are discovered, so any page that
//! has been reached once can be fetched again: `page_tokens[i]` is the cursor
//! that fetches page `i + 1`, and `page_tokens[0]` is always `None`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::common::UserRecord;
use crate::graphql::GraphqlClientError;

/// One block of users plus the cursor of the block after it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    #[serde(default)]
    pub items: Vec<UserRecord>,
    #[serde(default)]
    pub next_token: Option<String>,
}

#[async_trait]
pub trait UserPageSource: Send + Sync {
    async fn list_users(
        &self,
        limit: u32,
        next_token: Option<&str>,
    ) -> Result<UserPage, GraphqlClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    page_tokens: Vec<Option<String>>,
    current_page_index: usize,
    has_more_pages: bool,
    current_items: Vec<UserRecord>,
}

impl PageState {
    fn new() -> Self {
        Self {
            page_tokens: vec![None],
            current_page_index: 1,
            has_more_pages: true,
            current_items: Vec::new(),
        }
    }

    pub fn page_tokens(&self) -> &[Option<String>] {
        &self.page_tokens
    }

    /// 1-based index of the displayed page.
    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    /// `false` once the server has answered the newest page without a
    /// continuation cursor. Never becomes `true` again.
    pub fn has_more_pages(&self) -> bool {
        self.has_more_pages
    }

    pub fn current_items(&self) -> &[UserRecord] {
        &self.current_items
    }

    /// Pages that can be navigated to, including one discovered but not yet
    /// visited.
    pub fn total_known_pages(&self) -> usize {
        self.page_tokens.len()
    }
}

pub struct Paginator<S> {
    source: S,
    page_size: u32,
    state: PageState,
}

impl<S: UserPageSource> Paginator<S> {
    /// Fetches page 1 and returns a paginator positioned on it.
    pub async fn load(source: S, page_size: u32) -> Result<Self, GraphqlClientError> {
        let mut paginator = Self {
            source,
            page_size,
            state: PageState::new(),
        };
        paginator.show(1).await?;
        Ok(paginator)
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    /// Moves one page forward. Returns `false` without fetching when no
    /// cursor for the following page is known.
    pub async fn next_page(&mut self) -> Result<bool, GraphqlClientError> {
        self.show(self.state.current_page_index + 1).await
    }

    /// Moves one page back. Returns `false` on the first page.
    pub async fn previous_page(&mut self) -> Result<bool, GraphqlClientError> {
        if self.state.current_page_index <= 1 {
            return Ok(false);
        }
        self.show(self.state.current_page_index - 1).await
    }

    /// Shows an already discovered page. Returns `false` for pages outside
    /// `1..=total_known_pages()`.
    pub async fn jump_to(&mut self, page: usize) -> Result<bool, GraphqlClientError> {
        if page == 0 {
            return Ok(false);
        }
        self.show(page).await
    }

    async fn show(&mut self, page: usize) -> Result<bool, GraphqlClientError> {
        let Some(token) = self.state.page_tokens.get(page - 1).cloned() else {
            debug!("No cursor known for page {}", page);
            return Ok(false);
        };

        let fetched = self
            .source
            .list_users(self.page_size, token.as_deref())
            .await?;

        let is_newest = page == self.state.page_tokens.len();
        if is_newest && self.state.has_more_pages {
            match fetched.next_token.filter(|token| !token.is_empty()) {
                Some(next) => self.state.page_tokens.push(Some(next)),
                None => {
                    info!("Page {} is the last page", page);
                    self.state.has_more_pages = false;
                }
            }
        }

        self.state.current_items = fetched.items;
        self.state.current_page_index = page;
        Ok(true)
    }
}
