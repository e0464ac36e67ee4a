//! Parser for plain rule lines (pattern + owners).

use log::trace;

use super::ast::Rule;
use super::error::ParseError;
use super::lexer::{parse_owner_list, rule_pattern};
use super::matcher::ParseOptions;

/// Parses a rule line into a [`Rule`].
///
/// A rule line is a path pattern followed by a whitespace-separated owner
/// list. The owner list may be empty: a rule inside a section can rely on
/// the section's default owners (see
/// [`Section::apply_defaults`](super::ast::Section::apply_defaults)).
///
/// Fails with [`ParseError::MissingPattern`] on blank and comment-only
/// lines, and with [`ParseError::UnknownOwner`] when an owner token is
/// not recognized by any configured matcher.
pub fn parse_rule(line: &str, options: &ParseOptions) -> Result<Rule, ParseError> {
    let (owners_text, pattern) = rule_pattern(line).map_err(|_| ParseError::MissingPattern)?;
    let owners = parse_owner_list(owners_text, options)?;
    trace!("parsed rule: pattern={pattern:?}, {} owner(s)", owners.len());

    Ok(Rule::new(pattern, owners))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ast::Owner;

    #[test]
    fn parse_rule_single_owner() {
        let rule = parse_rule("*.rs @rustacean", &ParseOptions::default()).unwrap();
        assert_eq!(rule.pattern, "*.rs");
        assert_eq!(rule.owners, vec![Owner::username("rustacean")]);
        assert!(!rule.optional);
    }

    #[test]
    fn parse_rule_multiple_owners() {
        let rule = parse_rule(
            "/src/ @dev @people/gitlab-team dev@example.com",
            &ParseOptions::default(),
        )
        .unwrap();
        assert_eq!(rule.pattern, "/src/");
        assert_eq!(
            rule.owners,
            vec![
                Owner::username("dev"),
                Owner::team("people/gitlab-team"),
                Owner::email("dev@example.com"),
            ]
        );
    }

    #[test]
    fn parse_rule_without_owners() {
        // Legal under a section: the section's default owners apply.
        let rule = parse_rule("/docs/", &ParseOptions::default()).unwrap();
        assert_eq!(rule.pattern, "/docs/");
        assert!(rule.owners.is_empty());
    }

    #[test]
    fn parse_rule_with_trailing_comment() {
        let rule = parse_rule("*.js @frontend # JavaScript files", &ParseOptions::default())
            .unwrap();
        assert_eq!(rule.pattern, "*.js");
        assert_eq!(rule.owners, vec![Owner::username("frontend")]);
    }

    #[test]
    fn parse_rule_blank_line_fails() {
        let error = parse_rule("   ", &ParseOptions::default()).unwrap_err();
        assert_eq!(error, ParseError::MissingPattern);
    }

    #[test]
    fn parse_rule_comment_line_fails() {
        let error = parse_rule("# just a comment", &ParseOptions::default()).unwrap_err();
        assert_eq!(error, ParseError::MissingPattern);
    }

    #[test]
    fn parse_rule_unknown_owner_fails() {
        let error = parse_rule("*.rs garbage", &ParseOptions::default()).unwrap_err();
        assert_eq!(error, ParseError::unknown_owner("garbage"));
    }
}
