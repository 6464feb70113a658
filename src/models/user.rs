//! User record as returned by the GitHub user listing.

use serde::{Deserialize, Serialize};

/// Placeholder rendered when a record carries no `type`.
pub const MISSING_TYPE_LABEL: &str = "N/A";

/// One entry of the user listing.
///
/// Only the fields needed for sorting and display are kept; anything else
/// in the payload (`avatar_url`, `site_admin`, ...) is ignored on parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Account name. Unique within a page, compared case-insensitively.
    pub login: String,
    /// Numeric account id.
    pub id: u64,
    /// Account classification (`User`, `Organization`, ...). May be absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl UserRecord {
    /// Build a record. Mostly useful in tests and fixtures.
    pub fn new(login: impl Into<String>, id: u64, kind: Option<&str>) -> Self {
        Self {
            login: login.into(),
            id,
            kind: kind.map(str::to_string),
        }
    }

    /// Case-folded login used as the sort key.
    pub fn sort_login(&self) -> String {
        self.login.to_lowercase()
    }

    /// Type used as the sort key; absent sorts as the empty string.
    pub fn type_key(&self) -> &str {
        self.kind.as_deref().unwrap_or("")
    }

    /// Type as displayed, with a placeholder when absent.
    pub fn type_label(&self) -> &str {
        self.kind.as_deref().unwrap_or(MISSING_TYPE_LABEL)
    }
}
