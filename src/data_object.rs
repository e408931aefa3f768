use crate::err::{ActionError, TITLE_REQUIRED};
use serde::{Deserialize, Serialize};

// fields submitted by the creation form, or posted as json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPostData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

// fields submitted by the edit form, or put as json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub published: bool,
}

/// Returns the trimmed title, or a validation error if nothing is left.
pub fn require_title(title: &str) -> Result<String, ActionError> {
    match title.trim() {
        "" => Err(ActionError::Validation(TITLE_REQUIRED)),
        title => Ok(title.to_string()),
    }
}

/// Blank content is stored as NULL.
pub fn normalize_content(content: Option<String>) -> Option<String> {
    content.filter(|content| !content.trim().is_empty())
}
