//! Student roster.
//!
//! Provides:
//! - The student identity type
//! - Roster file parsing
//! - Lookup by (last, first) name with explicit occurrence numbers

pub mod loader;
pub mod student;

pub use loader::{load_roster, parse_roster};
pub use student::Student;

use std::collections::HashMap;

/// A roster of known students.
///
/// Students sharing the same rendered (last, first) name are stored in one
/// bucket; a student's occurrence number is its position in that bucket, in
/// roster-file order. This replaces suffix-probed string keys with an explicit
/// counter.
#[derive(Debug, Default)]
pub struct Roster {
    entries: HashMap<(String, String), Vec<Student>>,
    count: usize,
}

impl Roster {
    /// Add a student, returning the occurrence number it was given.
    pub fn insert(&mut self, student: Student) -> usize {
        let key = (student.last.clone(), student.first.clone());
        let bucket = self.entries.entry(key).or_default();
        bucket.push(student);
        self.count += 1;
        bucket.len() - 1
    }

    /// All students rendering to the given (last, first) name, in occurrence
    /// order. Empty when the name is unknown.
    pub fn get(&self, last: &str, first: &str) -> &[Student] {
        self.entries
            .get(&(last.to_string(), first.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of students on the roster.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
