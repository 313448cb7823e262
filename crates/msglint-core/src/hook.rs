//! Pre-push hook input.
//!
//! Git feeds the hook one line per ref being pushed:
//! `<local ref> <local oid> <remote ref> <remote oid>`.

use std::io::BufRead;

use msglint_git::is_zero_oid;

use crate::{CoreError, CoreResult};

/// Fields a usable input line must have.
const MIN_FIELDS: usize = 4;

/// One ref being pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefUpdate {
    /// Local ref name, e.g. `refs/heads/feature`.
    pub local_ref: String,
    /// Commit the local ref points at; zero when deleting.
    pub local_oid: String,
    /// Remote ref name.
    pub remote_ref: String,
    /// Commit the remote ref points at; zero when creating.
    pub remote_oid: String,
}

impl RefUpdate {
    /// Parses one input line. Blank lines and lines with fewer than four
    /// fields yield `None`; extra fields are ignored.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            return None;
        }

        Some(Self {
            local_ref: fields[0].to_string(),
            local_oid: fields[1].to_string(),
            remote_ref: fields[2].to_string(),
            remote_oid: fields[3].to_string(),
        })
    }

    /// The push deletes the remote ref.
    pub fn is_delete(&self) -> bool {
        is_zero_oid(&self.local_oid)
    }

    /// The push creates the remote ref.
    pub fn is_new_branch(&self) -> bool {
        is_zero_oid(&self.remote_oid)
    }
}

/// Reads every usable ref update from hook input.
///
/// # Errors
///
/// Returns [`CoreError::Input`] if the stream cannot be read or is not UTF-8.
pub fn read_ref_updates(reader: impl BufRead) -> CoreResult<Vec<RefUpdate>> {
    let mut updates = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(CoreError::Input)?;
        if let Some(update) = RefUpdate::parse_line(&line) {
            updates.push(update);
        }
    }
    Ok(updates)
}
