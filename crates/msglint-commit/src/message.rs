//! Commit message sectioning.

use serde::{Deserialize, Serialize};

/// A commit message split into blank-line-delimited sections.
///
/// - `title`: the first section
/// - `footer`: the last section, when there are at least two
/// - `body`: every section between title and footer, joined by a blank line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// The normalized message: CRLF collapsed to LF, trailing newlines removed.
    pub raw: String,

    /// The first section.
    pub title: String,

    /// The middle sections joined by `"\n\n"`.
    pub body: String,

    /// The last section.
    pub footer: String,
}

impl ParsedMessage {
    /// Parses a raw commit message. Never fails.
    #[must_use]
    pub fn parse(message: &str) -> Self {
        let raw = message.replace("\r\n", "\n").trim_end_matches('\n').to_string();
        let mut sections = split_sections(&raw);

        let mut parsed = Self {
            raw,
            ..Self::default()
        };

        match sections.len() {
            0 => {}
            1 => parsed.title = sections.remove(0),
            _ => {
                parsed.footer = sections.pop().unwrap_or_default();
                parsed.title = sections.remove(0);
                parsed.body = sections.join("\n\n");
            }
        }

        parsed
    }

    /// Returns true if the message has no content at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
    }
}

/// Parses a raw commit message into sections.
#[must_use]
pub fn parse_message(message: &str) -> ParsedMessage {
    ParsedMessage::parse(message)
}

/// Splits a normalized message on runs of whitespace-only lines.
fn split_sections(message: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in message.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(current.join("\n"));
                current.clear();
            }
            continue;
        }
        current.push(line);
    }

    if !current.is_empty() {
        sections.push(current.join("\n"));
    }

    sections
}
