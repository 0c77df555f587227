//! Roster file parsing.
//!
//! One student per line, `first [(nickname)] last`. A `~` stands in for a
//! space inside a single name field. Blank lines and lines starting with `#`
//! are ignored.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::roster::{Roster, Student};

/// Comment marker for roster lines.
const COMMENT: char = '#';

/// Load a roster from a file.
pub fn load_roster(path: &Path) -> Result<Roster> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound(path.to_path_buf())
        } else {
            Error::Io(e)
        }
    })?;
    parse_roster(&content)
}

/// Parse roster file content.
pub fn parse_roster(content: &str) -> Result<Roster> {
    let mut roster = Roster::default();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT) {
            continue;
        }

        let mut tokens: Vec<&str> = trimmed.split_whitespace().collect();

        // Optional nickname between first and last name, in parentheses.
        let mut nickname = None;
        if tokens.len() == 3 {
            let middle = tokens[1];
            if !middle.starts_with('(') || !middle.ends_with(')') {
                return Err(Error::RosterParse(format!(
                    "invalid nickname specification: {}",
                    trimmed
                )));
            }
            nickname = Some(middle[1..middle.len() - 1].to_string());
            tokens.remove(1);
        }

        if tokens.len() != 2 {
            return Err(Error::RosterParse(format!(
                "wrong number of tokens for student: {}",
                trimmed
            )));
        }

        let nickname = nickname.unwrap_or_else(|| tokens[0].to_string());
        let occurrence = roster.insert(Student::new(tokens[0], tokens[1], &nickname));
        tracing::debug!(
            "Roster entry: {} {} (occurrence {})",
            tokens[0],
            tokens[1],
            occurrence
        );
    }

    Ok(roster)
}
