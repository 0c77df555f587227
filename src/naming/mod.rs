//! Canonical naming engine.
//!
//! Provides:
//! - Identifier rendering and parsing (`Last__FirstN` folder names)
//! - Resolution of ambiguous name token sequences against the roster
//! - Minimal unique stems for shortened filenames

pub mod identifier;
pub mod prefix;
pub mod resolver;

pub use identifier::{parse, render, ParsedIdentifier};
pub use prefix::compute_short_stems;
pub use resolver::{resolve_canonical, resolve_submission, AssignmentTable, Resolution};
