//! Git abstraction layer for commit-msg-lint.
//!
//! This crate provides:
//! - The [`CommitGraph`] accessor trait and its git2 and in-memory backends
//! - Commit range resolution ([`RangeResolver`])

mod error;
mod graph;
mod memory;
mod range;
mod repository;

pub use error::{GitError, GitResult};
pub use graph::{CommitGraph, ZERO_OID, is_zero_oid};
pub use memory::MemoryGraph;
pub use range::{CommitRange, RangeResolver};
pub use repository::Repository;
