//! Parser for GitLab section header lines and section defaulting.
//!
//! Sections group rules and carry defaults (optional status, approval
//! count, default owners) that are applied to the rules lexically inside
//! them. Header parsing lives here; the line-by-line iteration that
//! decides which rules belong to which section is the caller's concern.

use log::{debug, trace};

use super::ast::{Rule, Section};
use super::error::ParseError;
use super::lexer::{is_blank, parse_owner_list, section_header};
use super::matcher::ParseOptions;

/// Parses a section header line into a [`Section`].
///
/// Fails with [`ParseError::NoMatch`] when the line is not a section
/// header at all (the caller should try its other line types), with
/// [`ParseError::MalformedApprovals`] when the approvals group does not
/// convert to an integer, and with [`ParseError::SectionOwners`] when the
/// trailing default-owner list fails to parse.
///
/// ```
/// use gitlab_codeowners::parse::{parse_section, ParseOptions};
///
/// let options = ParseOptions::default();
/// let section = parse_section("[Database][2] @dba-team", &options).unwrap();
/// assert_eq!(section.name, "Database");
/// assert_eq!(section.approvals, 2);
/// assert_eq!(section.owners.len(), 1);
/// ```
pub fn parse_section(line: &str, options: &ParseOptions) -> Result<Section, ParseError> {
    trace!("trying line as section header: {line:?}");
    let (_, header) = section_header(line).map_err(|_| ParseError::NoMatch)?;

    // The grammar captures approvals as an optional digit run; the format
    // default of 1 is applied only when the group is entirely absent, so
    // an explicit "[0]" stays 0.
    let approvals = match header.approvals {
        Some(digits) => digits
            .parse::<u32>()
            .map_err(ParseError::MalformedApprovals)?,
        None => 1,
    };

    let owners = if is_blank(header.owners_text) {
        Vec::new()
    } else {
        parse_owner_list(header.owners_text, options).map_err(ParseError::section_owners)?
    };

    let section = Section {
        optional: header.optional,
        name: header.name.to_string(),
        approvals,
        owners,
    };
    debug!(
        "parsed section {:?} (optional={}, approvals={}, {} default owner(s))",
        section.name,
        section.optional,
        section.approvals,
        section.owners.len()
    );

    Ok(section)
}

impl Section {
    /// Applies this section's defaults to a rule, returning the updated
    /// rule.
    ///
    /// The section's optional flag always carries over (rule lines have
    /// no optional syntax of their own). The section's default owners
    /// apply only when the rule has none: owners written on the rule
    /// line always win, per GitLab's documentation.
    ///
    /// <https://docs.gitlab.com/ee/user/project/codeowners/#use-default-owners-and-optional-sections-together>
    pub fn apply_defaults(&self, mut rule: Rule) -> Rule {
        rule.optional = self.optional;
        if rule.owners.is_empty() && !self.owners.is_empty() {
            rule.owners = self.owners.clone();
        }
        rule
    }
}
