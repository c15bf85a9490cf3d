//! Chat identity types for core messages and channel lookups.

use serde::{Deserialize, Serialize};

/// Kind of chat, as far as the bot cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Chat (channel, group or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
    pub title: Option<String>,
    pub username: Option<String>,
}

impl Chat {
    /// Private chat with a user; the chat id equals the user id on Telegram.
    pub fn private(id: i64) -> Self {
        Self {
            id,
            kind: ChatKind::Private,
            title: None,
            username: None,
        }
    }

    pub fn is_channel(&self) -> bool {
        self.kind == ChatKind::Channel
    }

    pub fn is_private(&self) -> bool {
        self.kind == ChatKind::Private
    }

    /// Title for user-facing text: title, then @username, then the numeric id.
    pub fn display_title(&self) -> String {
        match (&self.title, &self.username) {
            (Some(title), _) => title.clone(),
            (None, Some(username)) => format!("@{}", username),
            (None, None) => self.id.to_string(),
        }
    }
}

/// Reference to a chat as an admin types it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatRef {
    /// Public username, always stored with the leading `@`.
    Username(String),
    Id(i64),
}

impl ChatRef {
    /// Parses `@name`, `name`, `t.me/name`, `https://t.me/name[/post]` or a numeric chat id.
    ///
    /// Returns None for blank input, invite links and anything that cannot be a username.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if let Ok(id) = input.parse::<i64>() {
            return Some(ChatRef::Id(id));
        }

        let without_scheme = input
            .strip_prefix("https://")
            .or_else(|| input.strip_prefix("http://"))
            .unwrap_or(input);
        let name = match without_scheme
            .strip_prefix("t.me/")
            .or_else(|| without_scheme.strip_prefix("telegram.me/"))
        {
            Some(path) => path.split(['/', '?', '#']).next().unwrap_or_default(),
            None => without_scheme.strip_prefix('@').unwrap_or(without_scheme),
        };

        is_valid_username(name).then(|| ChatRef::Username(format!("@{}", name)))
    }
}

impl std::fmt::Display for ChatRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRef::Username(name) => f.write_str(name),
            ChatRef::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Telegram usernames: a letter first, then letters, digits or underscores, at most 32 chars.
fn is_valid_username(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    name.len() <= 32 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
