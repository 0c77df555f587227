//! Student identity.

use crate::naming::identifier::decode_name;

/// A student on the roster.
///
/// Names are stored with real spaces; the `~` marker used in roster files and
/// canonical identifiers is decoded on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub first: String,
    pub last: String,
    pub nickname: String,
}

impl Student {
    /// Create a student, decoding any space markers in the name fields.
    pub fn new(first: &str, last: &str, nickname: &str) -> Self {
        Self {
            first: decode_name(first),
            last: decode_name(last),
            nickname: decode_name(nickname),
        }
    }

    /// Create a student with no separate nickname.
    pub fn without_nickname(first: &str, last: &str) -> Self {
        Self::new(first, last, first)
    }

    /// Human-readable name, including the nickname when it differs
    /// from the first name.
    pub fn display_name(&self) -> String {
        if self.nickname == self.first {
            format!("{} {}", self.first, self.last)
        } else {
            format!("{} ({}) {}", self.first, self.nickname, self.last)
        }
    }
}
