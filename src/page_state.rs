//! UI state carried in the query string of the list page.
//!
//! Form actions answer with `303 See Other`; the redirect location holds
//! the one-shot notice and the set of posts still in edit mode.

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use url::form_urlencoded::Serializer;

/// Style of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

impl Level {
    /// Anything but "error" is a success.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("error") => Level::Error,
            _ => Level::Success,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
        }
    }
}

/// A one-shot notification shown on top of the list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Ids of the posts rendered in edit mode.
///
/// Each post enters and leaves edit mode on its own,
/// several posts may be edited at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSet(BTreeSet<i32>);

impl EditSet {
    /// Parses a comma-separated id list, skipping anything that is not an id.
    pub fn parse(param: &str) -> Self {
        Self(
            param
                .split(',')
                .filter_map(|id| id.trim().parse().ok())
                .collect(),
        )
    }

    pub fn contains(&self, id: i32) -> bool {
        self.0.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A copy with `id` in edit mode.
    pub fn with(&self, id: i32) -> Self {
        let mut ids = self.0.clone();
        ids.insert(id);
        Self(ids)
    }

    /// A copy with `id` back in display mode.
    pub fn without(&self, id: i32) -> Self {
        let mut ids = self.0.clone();
        ids.remove(&id);
        Self(ids)
    }
}

impl Display for EditSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut ids = self.0.iter();
        if let Some(first) = ids.next() {
            write!(f, "{}", first)?;
            for id in ids {
                write!(f, ",{}", id)?;
            }
        }
        Ok(())
    }
}

/// Builds a link to the list page.
pub fn page_link(notice: Option<&Notice>, editing: &EditSet) -> String {
    let mut query = Serializer::new(String::new());
    if let Some(notice) = notice {
        query.append_pair("notice", &notice.message);
        query.append_pair("level", notice.level.as_str());
    }
    if !editing.is_empty() {
        query.append_pair("editing", &editing.to_string());
    }
    match query.finish() {
        query if query.is_empty() => "/".to_string(),
        query => format!("/?{}", query),
    }
}

/// Builds the target of a form action, keeping the edit set.
pub fn action_link(path: &str, editing: &EditSet) -> String {
    if editing.is_empty() {
        return path.to_string();
    }
    let mut query = Serializer::new(String::new());
    query.append_pair("editing", &editing.to_string());
    format!("{}?{}", path, query.finish())
}
