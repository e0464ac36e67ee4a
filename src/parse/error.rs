//! Error types for CODEOWNERS line parsing.

use std::num::ParseIntError;
use thiserror::Error;

/// An error that occurred while parsing a CODEOWNERS line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not have the shape of a section header. The caller
    /// should try its other line-type parsers; this is not fatal for the
    /// overall file parse.
    #[error("line is not a section header")]
    NoMatch,

    /// The header's approvals group is present but its digits do not
    /// convert to a valid approval count.
    #[error("failed to parse approvals from section as integer")]
    MalformedApprovals(#[source] ParseIntError),

    /// The header's trailing owners text failed the owner-list grammar.
    #[error("failed to parse section owners")]
    SectionOwners(#[source] Box<ParseError>),

    /// An owner token was not recognized by any configured matcher.
    #[error("unrecognized owner {token:?}")]
    UnknownOwner {
        /// The raw token that no matcher accepted.
        token: String,
    },

    /// A rule line has no path pattern.
    #[error("rule line has no pattern")]
    MissingPattern,
}

impl ParseError {
    /// Creates an unknown owner error for the given token.
    pub fn unknown_owner(token: impl Into<String>) -> Self {
        Self::UnknownOwner {
            token: token.into(),
        }
    }

    /// Wraps an owner-list error as a section owners failure.
    pub fn section_owners(inner: ParseError) -> Self {
        Self::SectionOwners(Box::new(inner))
    }

    /// Returns true if this is the non-fatal "not a section header"
    /// condition.
    pub fn is_no_match(&self) -> bool {
        matches!(self, ParseError::NoMatch)
    }
}
