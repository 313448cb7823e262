//! Core library for commit-msg-lint.
//!
//! This crate evaluates rules against commit messages and orchestrates
//! validation of commit ranges and push-hook ref updates.

mod engine;
mod error;
mod filter;
mod hook;
mod report;
mod validator;

pub use engine::{RuleViolation, evaluate, scope_text};
pub use error::{CoreError, CoreResult};
pub use filter::{SkipFilter, SkipReason};
pub use hook::{RefUpdate, read_ref_updates};
pub use report::{CommitFailure, ValidationFailure};
pub use validator::Validator;
