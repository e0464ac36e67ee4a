//! Parsers for GitLab-flavored CODEOWNERS lines.
//!
//! This module parses the two line types that carry ownership data:
//! plain rules (pattern + owners) and GitLab section headers. It also
//! applies section defaults to rules via [`Section::apply_defaults`].
//!
//! # Example
//!
//! ```rust
//! use gitlab_codeowners::parse::{parse_rule, parse_section, ParseOptions};
//!
//! let options = ParseOptions::default();
//!
//! let section = parse_section("^[Documentation] @docs-lead", &options).unwrap();
//! assert!(section.optional);
//!
//! // A rule with no owners of its own inherits the section's defaults.
//! let rule = parse_rule("/docs/", &options).unwrap();
//! let rule = section.apply_defaults(rule);
//! assert!(rule.optional);
//! assert_eq!(rule.owners, section.owners);
//! ```

mod ast;
mod error;
mod lexer;
mod matcher;
mod rule;
mod section;

// Re-export public types
pub use ast::{Owner, OwnerKind, Rule, Section};
pub use error::ParseError;
pub use matcher::{
    EmailMatcher, OwnerMatcher, ParseOptions, TeamMatcher, UsernameMatcher,
    default_owner_matchers,
};
pub use rule::parse_rule;
pub use section::parse_section;

// Re-export the shared owner-list grammar for callers with custom line types
pub use lexer::parse_owner_list;
