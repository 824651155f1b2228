//! Terminal rendering of a page of users and parsing of navigation input.

use std::fmt::Write;

use crate::pagination::PageState;

pub const HEADING: &str = "User Profile List";
pub const USAGE: &str = "commands: n(ext), p(rev), <page number>, q(uit)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Jump(usize),
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Previous),
            "q" | "quit" | "exit" => Some(Self::Quit),
            other => other.parse().ok().map(Self::Jump),
        }
    }
}

pub fn render_page(state: &PageState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADING}");
    let _ = writeln!(out, "{}", "=".repeat(HEADING.len()));

    if state.current_items().is_empty() {
        let _ = writeln!(out, "(no users)");
    }
    for user in state.current_items() {
        let _ = writeln!(out, "- {} {}  {}", user.firstname, user.lastname, user.picture);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", render_controls(state));
    out
}

/// `< prev | page 2 of 3+ | next >`, with unavailable directions dimmed to `-`.
pub fn render_controls(state: &PageState) -> String {
    let current = state.current_page_index();
    let total = state.total_known_pages();
    let prev = if current > 1 { "< prev" } else { "- prev" };
    let next = if current < total { "next >" } else { "next -" };
    let more = if state.has_more_pages() { "+" } else { "" };

    format!("{prev} | page {current} of {total}{more} | {next}")
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::common::UserRecord;
    use crate::graphql::GraphqlClientError;
    use crate::pagination::{Paginator, UserPage, UserPageSource};

    struct TwoPages;

    #[async_trait]
    impl UserPageSource for TwoPages {
        async fn list_users(
            &self,
            _limit: u32,
            next_token: Option<&str>,
        ) -> Result<UserPage, GraphqlClientError> {
            let (id, next_token) = match next_token {
                None => ("1", Some("t2".to_string())),
                Some(_) => ("2", None),
            };
            Ok(UserPage {
                items: vec![UserRecord {
                    user_id: id.into(),
                    firstname: "Ada".into(),
                    lastname: format!("No{id}"),
                    picture: format!("http://x/{id}.png"),
                }],
                next_token,
            })
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("n"), Some(Command::Next));
        assert_eq!(Command::parse(" Next\n"), Some(Command::Next));
        assert_eq!(Command::parse("prev"), Some(Command::Previous));
        assert_eq!(Command::parse("3"), Some(Command::Jump(3)));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("-1"), None);
        assert_eq!(Command::parse("jump"), None);
    }

    #[tokio::test]
    async fn renders_cards_and_controls() {
        let mut paginator = Paginator::load(TwoPages, 5).await.unwrap();

        let first = render_page(paginator.state());
        assert!(first.starts_with("User Profile List\n"));
        assert!(first.contains("- Ada No1  http://x/1.png"));
        assert!(first.ends_with("- prev | page 1 of 2+ | next >\n"));

        paginator.next_page().await.unwrap();
        assert_eq!(
            render_controls(paginator.state()),
            "< prev | page 2 of 2 | next -"
        );
    }
}
