//! Matching submission folder names to students.
//!
//! A fresh Moodle folder starts with the student's name as whitespace-separated
//! tokens, but the boundary between first and last name is not marked. The
//! resolver tries every contiguous split against the roster, shortest first
//! name first, and takes the first split that lands on an existing, not yet
//! assigned roster entry.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::naming::identifier::{self, ParsedIdentifier};
use crate::roster::{Roster, Student};

/// A resolved student plus the occurrence number distinguishing duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub student: Student,
    pub occurrence: usize,
}

impl Resolution {
    /// Canonical folder identifier for this resolution.
    pub fn identifier(&self) -> String {
        identifier::render(&self.student.last, &self.student.first, self.occurrence)
    }
}

/// Which folder each (student, occurrence) pair owns.
///
/// Assignment is write-once: a second folder resolving to an already assigned
/// pair is a duplicate submission, reported as a fatal error. Owned by the
/// orchestrator so the resolver itself stays free of mutable state.
#[derive(Debug, Default)]
pub struct AssignmentTable {
    assigned: HashMap<(String, String, usize), String>,
}

impl AssignmentTable {
    pub fn is_assigned(&self, last: &str, first: &str, occurrence: usize) -> bool {
        self.assigned
            .contains_key(&(last.to_string(), first.to_string(), occurrence))
    }

    /// Record that a resolution owns the given folder.
    pub fn assign(&mut self, resolution: &Resolution, folder: &str) -> Result<()> {
        let key = (
            resolution.student.last.clone(),
            resolution.student.first.clone(),
            resolution.occurrence,
        );
        if let Some(existing) = self.assigned.get(&key) {
            return Err(Error::DuplicateSubmission {
                student: resolution.student.display_name(),
                assigned: existing.clone(),
                folder: folder.to_string(),
            });
        }
        self.assigned.insert(key, folder.to_string());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Resolve the name tokens of a fresh submission folder.
///
/// With no roster, the first token is taken as the first name and the rest as
/// the last name. With a roster, every split of the tokens into a first-name
/// prefix and last-name suffix is tried in order; for each split, occurrences
/// are probed upward, skipping entries that already own a folder. Failing
/// every split is fatal so that no folder gets silently mis-attributed.
pub fn resolve_submission(
    tokens: &[&str],
    folder: &str,
    roster: Option<&Roster>,
    table: &AssignmentTable,
) -> Result<Resolution> {
    let roster = match roster {
        Some(roster) => roster,
        None => {
            let first = tokens.first().copied().unwrap_or_default();
            let last = tokens.get(1..).unwrap_or(&[]).join(" ");
            return Ok(Resolution {
                student: Student::without_nickname(first, &last),
                occurrence: 0,
            });
        }
    };

    for split in 1..tokens.len() {
        let first = tokens[..split].join(" ");
        let last = tokens[split..].join(" ");
        for (occurrence, student) in roster.get(&last, &first).iter().enumerate() {
            if table.is_assigned(&student.last, &student.first, occurrence) {
                continue;
            }
            tracing::debug!("Folder '{}' belongs to {}", folder, student.display_name());
            return Ok(Resolution {
                student: student.clone(),
                occurrence,
            });
        }
    }

    Err(Error::NoMatchingStudent(folder.to_string()))
}

/// Resolve a folder whose name is already a canonical identifier.
///
/// The identifier is parsed directly; the roster, when present, must contain a
/// matching entry at the parsed occurrence.
pub fn resolve_canonical(
    parsed: &ParsedIdentifier,
    folder: &str,
    roster: Option<&Roster>,
) -> Result<Resolution> {
    let roster = match roster {
        Some(roster) => roster,
        None => {
            return Ok(Resolution {
                student: Student::without_nickname(&parsed.first, &parsed.last),
                occurrence: parsed.occurrence,
            });
        }
    };

    match roster.get(&parsed.last, &parsed.first).get(parsed.occurrence) {
        Some(student) => Ok(Resolution {
            student: student.clone(),
            occurrence: parsed.occurrence,
        }),
        None => Err(Error::NoMatchingStudent(folder.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::parse_roster;

    fn tokens(name: &str) -> Vec<&str> {
        name.split_whitespace().collect()
    }

    #[test]
    fn test_resolve_without_roster_synthesizes() {
        let table = AssignmentTable::default();
        let r = resolve_submission(&tokens("John Q Public"), "f", None, &table).unwrap();
        assert_eq!(r.student.first, "John");
        assert_eq!(r.student.last, "Q Public");
        assert_eq!(r.occurrence, 0);
        assert_eq!(r.identifier(), "Q~Public__John");
    }

    #[test]
    fn test_resolve_simple_split() {
        let roster = parse_roster("Alice Smith\nAlice Jones\n").unwrap();
        let table = AssignmentTable::default();
        let smith =
            resolve_submission(&tokens("Alice Smith"), "f1", Some(&roster), &table).unwrap();
        let jones =
            resolve_submission(&tokens("Alice Jones"), "f2", Some(&roster), &table).unwrap();
        assert_eq!(smith.identifier(), "Smith__Alice");
        assert_eq!(jones.identifier(), "Jones__Alice");
    }

    #[test]
    fn test_resolve_multiword_last_name() {
        let roster = parse_roster("Cole Spencer~Evans\n").unwrap();
        let table = AssignmentTable::default();
        let r = resolve_submission(&tokens("Cole Spencer Evans"), "f", Some(&roster), &table)
            .unwrap();
        assert_eq!(r.student.last, "Spencer Evans");
    }

    #[test]
    fn test_shorter_first_name_split_wins() {
        // Both splits of "Cole Spencer Evans" exist on the roster; the split
        // with the one-token first name is tried first and wins.
        let roster = parse_roster("Cole Spencer~Evans\nCole~Spencer Evans\n").unwrap();
        let table = AssignmentTable::default();
        let r = resolve_submission(&tokens("Cole Spencer Evans"), "f", Some(&roster), &table)
            .unwrap();
        assert_eq!(r.student.first, "Cole");
        assert_eq!(r.student.last, "Spencer Evans");
    }

    #[test]
    fn test_duplicate_students_get_increasing_occurrences() {
        let roster = parse_roster("Bob Evans\nBob Evans\n").unwrap();
        let mut table = AssignmentTable::default();

        let first = resolve_submission(&tokens("Bob Evans"), "f1", Some(&roster), &table).unwrap();
        assert_eq!(first.occurrence, 0);
        table.assign(&first, "f1").unwrap();

        let second = resolve_submission(&tokens("Bob Evans"), "f2", Some(&roster), &table).unwrap();
        assert_eq!(second.occurrence, 1);
        table.assign(&second, "f2").unwrap();

        // Both duplicates used up: a third folder fails resolution.
        let third = resolve_submission(&tokens("Bob Evans"), "f3", Some(&roster), &table);
        assert!(matches!(third, Err(Error::NoMatchingStudent(_))));
    }

    #[test]
    fn test_unknown_name_fails() {
        let roster = parse_roster("Alice Smith\n").unwrap();
        let table = AssignmentTable::default();
        let err =
            resolve_submission(&tokens("Carol White"), "Carol White_1_x", Some(&roster), &table)
                .unwrap_err();
        assert!(matches!(err, Error::NoMatchingStudent(name) if name == "Carol White_1_x"));
    }

    #[test]
    fn test_assignment_is_write_once() {
        let roster = parse_roster("Alice Smith\n").unwrap();
        let mut table = AssignmentTable::default();
        let r = resolve_submission(&tokens("Alice Smith"), "f1", Some(&roster), &table).unwrap();
        table.assign(&r, "f1").unwrap();
        let err = table.assign(&r, "f2").unwrap_err();
        assert!(matches!(err, Error::DuplicateSubmission { .. }));
    }

    #[test]
    fn test_resolve_canonical_against_roster() {
        let roster = parse_roster("Bob Evans\nBob Evans\n").unwrap();
        let parsed = crate::naming::identifier::parse("Evans__Bob1").unwrap();
        let r = resolve_canonical(&parsed, "Evans__Bob1", Some(&roster)).unwrap();
        assert_eq!(r.occurrence, 1);
        assert_eq!(r.identifier(), "Evans__Bob1");
    }

    #[test]
    fn test_resolve_canonical_unknown_student_fails() {
        let roster = parse_roster("Alice Smith\n").unwrap();
        let parsed = crate::naming::identifier::parse("Jones__Carol").unwrap();
        assert!(resolve_canonical(&parsed, "Jones__Carol", Some(&roster)).is_err());
    }

    #[test]
    fn test_resolve_canonical_without_roster_synthesizes() {
        let parsed = crate::naming::identifier::parse("Q~Public__John2").unwrap();
        let r = resolve_canonical(&parsed, "Q~Public__John2", None).unwrap();
        assert_eq!(r.student.last, "Q Public");
        assert_eq!(r.occurrence, 2);
    }
}
