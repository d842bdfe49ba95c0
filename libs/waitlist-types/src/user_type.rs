use std::fmt;

use serde::{Deserialize, Serialize};

/// Category a person picks when joining the waitlist.
///
/// The API stores the label as free text; this enum only describes the
/// choices the signup form offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Developer,
    Business,
    Other,
}

impl UserType {
    /// Every choice the form offers, in display order.
    pub const ALL: [UserType; 3] = [UserType::Developer, UserType::Business, UserType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Developer => "developer",
            UserType::Business => "business",
            UserType::Other => "other",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
