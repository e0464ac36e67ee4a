//! Owner classification for CODEOWNERS tokens.
//!
//! Classification runs through a configurable ordered set of matchers so
//! callers can extend or replace the recognized owner forms. The default
//! set recognizes GitLab teams, usernames, and email addresses.

use super::ast::Owner;

/// Recognizes a raw owner token as a classified [`Owner`].
///
/// Matchers are tried in order; the first one to return `Some` wins.
pub trait OwnerMatcher: Send + Sync {
    /// Attempts to classify `token`, returning `None` if this matcher
    /// does not recognize it.
    fn match_owner(&self, token: &str) -> Option<Owner>;
}

/// Matches GitLab teams of the form "@group/subgroup".
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamMatcher;

impl OwnerMatcher for TeamMatcher {
    fn match_owner(&self, token: &str) -> Option<Owner> {
        let stripped = token.strip_prefix('@')?;
        let slash_pos = stripped.find('/')?;
        let (group, subgroup) = (&stripped[..slash_pos], &stripped[slash_pos + 1..]);
        if group.is_empty() || subgroup.is_empty() {
            return None;
        }
        Some(Owner::team(stripped))
    }
}

/// Matches GitLab usernames of the form "@username".
#[derive(Debug, Clone, Copy, Default)]
pub struct UsernameMatcher;

impl OwnerMatcher for UsernameMatcher {
    fn match_owner(&self, token: &str) -> Option<Owner> {
        let stripped = token.strip_prefix('@')?;
        if stripped.is_empty() || stripped.contains('/') {
            return None;
        }
        Some(Owner::username(stripped))
    }
}

/// Matches email address owners (e.g., "dev@example.com").
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailMatcher;

impl OwnerMatcher for EmailMatcher {
    fn match_owner(&self, token: &str) -> Option<Owner> {
        let at_pos = token.find('@')?;
        let (local, domain) = (&token[..at_pos], &token[at_pos + 1..]);
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return None;
        }
        Some(Owner::email(token))
    }
}

/// Returns the default matcher set: teams, then usernames, then emails.
///
/// Teams run before usernames so that "@group/subgroup" is never read as
/// a username containing a slash.
pub fn default_owner_matchers() -> Vec<Box<dyn OwnerMatcher>> {
    vec![
        Box::new(TeamMatcher),
        Box::new(UsernameMatcher),
        Box::new(EmailMatcher),
    ]
}

/// Configuration options shared by the line parsers.
pub struct ParseOptions {
    /// The ordered owner matchers used to classify owner tokens.
    pub owner_matchers: Vec<Box<dyn OwnerMatcher>>,
}

impl ParseOptions {
    /// Creates parse options with the default owner matchers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the owner matcher set.
    pub fn with_owner_matchers(mut self, matchers: Vec<Box<dyn OwnerMatcher>>) -> Self {
        self.owner_matchers = matchers;
        self
    }

    /// Classifies a single token against the configured matchers.
    pub fn classify(&self, token: &str) -> Option<Owner> {
        self.owner_matchers
            .iter()
            .find_map(|matcher| matcher.match_owner(token))
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            owner_matchers: default_owner_matchers(),
        }
    }
}

impl std::fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseOptions")
            .field("owner_matchers", &self.owner_matchers.len())
            .finish()
    }
}
