//! Commit types for commit-msg-lint.
//!
//! This crate provides the value types the linter works on:
//! - [`Commit`]: A commit as read from the commit graph
//! - [`ParsedMessage`]: A commit message split into title, body and footer

mod commit;
mod message;

pub use commit::Commit;
pub use message::{ParsedMessage, parse_message};
