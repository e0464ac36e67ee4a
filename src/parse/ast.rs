//! Data structures for GitLab CODEOWNERS content.
//!
//! This module defines the types produced by the parsers: owners,
//! ownership rules, and sections.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The kind of a CODEOWNERS owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    /// A GitLab user (e.g., "@username").
    Username,
    /// A GitLab group or subgroup (e.g., "@group/subgroup").
    Team,
    /// An email address.
    Email,
}

/// An owner referenced by a rule or section.
///
/// The value is stored without the leading '@' for usernames and teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// The owner identifier (e.g., "username", "group/subgroup", "dev@example.com").
    pub value: String,
    /// The kind of owner this value refers to.
    #[serde(rename = "type")]
    pub kind: OwnerKind,
}

impl Owner {
    /// Creates a username owner.
    pub fn username(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: OwnerKind::Username,
        }
    }

    /// Creates a team owner.
    pub fn team(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: OwnerKind::Team,
        }
    }

    /// Creates an email owner.
    pub fn email(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: OwnerKind::Email,
        }
    }
}

impl Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OwnerKind::Username | OwnerKind::Team => write!(f, "@{}", self.value),
            OwnerKind::Email => f.write_str(&self.value),
        }
    }
}

/// A single ownership rule: a path pattern and the owners responsible
/// for files matching it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The raw path pattern text (e.g., "*.rs", "/docs/").
    pub pattern: String,
    /// The owners for this rule, in the order they appear on the line.
    ///
    /// May be empty: a rule under a section can rely entirely on the
    /// section's default owners.
    #[serde(default)]
    pub owners: Vec<Owner>,
    /// Whether approval for this rule is non-blocking.
    ///
    /// Rule lines carry no optional syntax of their own; this is set by
    /// the section the rule belongs to.
    #[serde(default)]
    pub optional: bool,
}

impl Rule {
    /// Creates a rule with the given pattern and owners.
    pub fn new(pattern: impl Into<String>, owners: Vec<Owner>) -> Self {
        Self {
            pattern: pattern.into(),
            owners,
            optional: false,
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)?;
        for owner in &self.owners {
            write!(f, " {}", owner)?;
        }
        Ok(())
    }
}

fn default_approvals() -> u32 {
    1
}

/// A GitLab CODEOWNERS section.
///
/// Format:
///
/// ```text
///   ^ = optional, marks the section's rules as non-blocking
///   [2] = optional number of approvals
///   @default-owner = optional default owners for the section
///   -------
///   ^[Section Name][2] @default-owner
/// ```
///
/// See GitLab's documentation:
/// <https://docs.gitlab.com/ee/user/project/codeowners/#organize-code-owners-by-putting-them-into-sections>
///
/// Rules under a section inherit defaults from it, see
/// [`Section::apply_defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Whether rules in this section are non-blocking. Defaults to
    /// false; indicated by a '^' prefix on the header line.
    #[serde(default)]
    pub optional: bool,
    /// The name of the section. Never empty and never contains '[',
    /// ']', or a newline.
    pub name: String,
    /// The number of approvals required to satisfy the section.
    /// Defaults to 1 when the header carries no approvals group.
    #[serde(default = "default_approvals")]
    pub approvals: u32,
    /// The default owners for rules in this section, in the order they
    /// appear on the header line. Empty when none are given.
    #[serde(default)]
    pub owners: Vec<Owner>,
}

impl Section {
    /// Creates a section with the given name and the format defaults
    /// (blocking, one approval, no default owners).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            optional: false,
            name: name.into(),
            approvals: 1,
            owners: Vec::new(),
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional {
            f.write_str("^")?;
        }
        write!(f, "[{}]", self.name)?;
        if self.approvals != 1 {
            write!(f, "[{}]", self.approvals)?;
        }
        for owner in &self.owners {
            write!(f, " {}", owner)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_username_creation() {
        let owner = Owner::username("octocat");
        assert_eq!(owner.value, "octocat");
        assert_eq!(owner.kind, OwnerKind::Username);
    }

    #[test]
    fn owner_team_creation() {
        let owner = Owner::team("people/gitlab-team");
        assert_eq!(owner.value, "people/gitlab-team");
        assert_eq!(owner.kind, OwnerKind::Team);
    }

    #[test]
    fn owner_email_creation() {
        let owner = Owner::email("dev@example.com");
        assert_eq!(owner.value, "dev@example.com");
        assert_eq!(owner.kind, OwnerKind::Email);
    }

    #[test]
    fn owner_display() {
        assert_eq!(Owner::username("user").to_string(), "@user");
        assert_eq!(Owner::team("org/team").to_string(), "@org/team");
        assert_eq!(Owner::email("dev@example.com").to_string(), "dev@example.com");
    }

    #[test]
    fn rule_display() {
        let rule = Rule::new(
            "*.rs",
            vec![Owner::username("alice"), Owner::team("org/team")],
        );
        assert_eq!(rule.to_string(), "*.rs @alice @org/team");
    }

    #[test]
    fn rule_display_without_owners() {
        let rule = Rule::new("/docs/", Vec::new());
        assert_eq!(rule.to_string(), "/docs/");
    }

    #[test]
    fn section_new_uses_format_defaults() {
        let section = Section::new("Docs");
        assert!(!section.optional);
        assert_eq!(section.name, "Docs");
        assert_eq!(section.approvals, 1);
        assert!(section.owners.is_empty());
    }

    #[test]
    fn section_display() {
        let mut section = Section::new("Database");
        section.approvals = 2;
        section.owners = vec![Owner::username("dba")];
        assert_eq!(section.to_string(), "[Database][2] @dba");
    }

    #[test]
    fn section_display_optional_elides_default_approvals() {
        let mut section = Section::new("Optional Section");
        section.optional = true;
        assert_eq!(section.to_string(), "^[Optional Section]");
    }

    #[test]
    fn owner_serializes_with_type_tag() {
        let json = serde_json::to_string(&Owner::team("people/gitlab-team")).unwrap();
        assert_eq!(json, r#"{"value":"people/gitlab-team","type":"team"}"#);
    }

    #[test]
    fn section_deserialize_defaults_approvals_to_one() {
        let section: Section = serde_json::from_str(r#"{"name":"Docs"}"#).unwrap();
        assert_eq!(section.approvals, 1);
        assert!(!section.optional);
        assert!(section.owners.is_empty());
    }

    #[test]
    fn section_round_trips_through_json() {
        let mut section = Section::new("Database");
        section.optional = true;
        section.approvals = 3;
        section.owners = vec![Owner::username("dba"), Owner::email("db@example.com")];

        let json = serde_json::to_string(&section).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, section);
    }
}
