//! GitLab CODEOWNERS Sections
//!
//! A library for parsing GitLab-flavored CODEOWNERS section headers and
//! applying section defaults to ownership rules.
//!
//! GitLab extends the CODEOWNERS format with named sections that carry
//! defaults for the rules inside them: an optional (non-blocking) flag,
//! a required approval count, and a default owner list. This crate
//! parses those header lines and implements the defaulting policy; the
//! caller drives line-by-line iteration and assembles the full rule set.
//!
//! # Quick Start
//!
//! ```rust
//! use gitlab_codeowners::parse::{parse_rule, parse_section, ParseOptions, ParseError};
//!
//! let options = ParseOptions::default();
//!
//! let section = parse_section("[Database][2] @dba-team @people/gitlab-team", &options)
//!     .expect("valid section header");
//! assert_eq!(section.name, "Database");
//! assert_eq!(section.approvals, 2);
//!
//! // NoMatch means "not a section header"; try the line as a rule.
//! match parse_section("model/db/ @backend", &options) {
//!     Err(ParseError::NoMatch) => {
//!         let rule = parse_rule("model/db/ @backend", &options).unwrap();
//!         let rule = section.apply_defaults(rule);
//!         assert_eq!(rule.owners.len(), 1); // the rule's own owner wins
//!     }
//!     other => panic!("expected NoMatch, got {other:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! - [`parse`]: line parsers, owner classification, and section defaulting

pub mod parse;

// Re-export commonly used types at the crate root
pub use parse::{
    Owner, OwnerKind, ParseError, ParseOptions, Rule, Section, parse_rule, parse_section,
};
