//! # Error Taxonomy
//!
//! Three failure classes cover the whole crate:
//!
//! - [`Error::Syntax`]: the input SQL is malformed. Carries the byte offset
//!   of the offending token or character; [`Error::syntax_at`] renders the
//!   line and column from the source text.
//! - [`Error::Structure`]: a tree manipulation would violate single
//!   ownership (attaching an owned node, removing a required child, cycles).
//!   The tree is left untouched when one of these is returned.
//! - [`Error::Config`]: an operation needs configuration the caller never
//!   supplied, e.g. re-parsing a fragment into an arena that carries no
//!   parser options.
//!
//! Everything is surfaced through `eyre::Result`; callers that need to react
//! to a specific class can `downcast_ref::<Error>()`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{message} at position {position}")]
    Syntax { message: String, position: usize },

    #[error("structure error: {0}")]
    Structure(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Builds a syntax error whose message embeds line and column computed
    /// from the source text, matching what the offending position points at.
    pub fn syntax_at(message: impl fmt::Display, source: &str, position: usize) -> Self {
        let (line, column) = line_column(source, position);
        Error::Syntax {
            message: format!("{} (line {}, column {})", message, line, column),
            position,
        }
    }

    pub fn syntax(message: impl Into<String>, position: usize) -> Self {
        Error::Syntax {
            message: message.into(),
            position,
        }
    }

    pub fn structure(message: impl Into<String>) -> Self {
        Error::Structure(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }

    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// 1-based line and column for a byte offset. Columns count characters,
/// not bytes, so multibyte input reports sensibly.
fn line_column(source: &str, position: usize) -> (usize, usize) {
    let clamped = position.min(source.len());
    let before = &source[..clamped];
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(nl) => before[nl + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_at_reports_line_and_column() {
        let source = "select 1\nfrom @@\nwhere true";
        let position = source.find("@@").unwrap();
        let err = Error::syntax_at("unexpected operator", source, position);
        match err {
            Error::Syntax { message, position: p } => {
                assert!(message.contains("line 2"), "got: {message}");
                assert!(message.contains("column 6"), "got: {message}");
                assert_eq!(p, position);
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn column_counts_characters_not_bytes() {
        let source = "sélect x";
        let (line, column) = line_column(source, source.find('x').unwrap());
        assert_eq!((line, column), (1, 8));
    }

    #[test]
    fn position_accessor_only_set_for_syntax() {
        assert_eq!(Error::syntax("boom", 3).position(), Some(3));
        assert_eq!(Error::structure("boom").position(), None);
    }
}
