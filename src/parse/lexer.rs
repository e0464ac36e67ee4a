//! Token parsers for CODEOWNERS lines.
//!
//! This module contains the nom-based grammar for section header lines
//! and the owner-list parsing shared by the rule and section parsers.

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::{char, digit1, space0},
    combinator::{opt, rest},
    sequence::{delimited, preceded},
};

use super::ast::Owner;
use super::error::ParseError;
use super::matcher::ParseOptions;

/// Characters allowed in a section name.
///
/// The grammar is intentionally non-recursive: names can never contain
/// brackets, so nested bracket groups are not section headers.
fn is_section_name_char(c: char) -> bool {
    c != '[' && c != ']' && c != '\n'
}

/// Characters that can appear in a rule pattern (non-whitespace, non-comment).
fn is_pattern_char(c: char) -> bool {
    !c.is_whitespace() && c != '#'
}

/// Checks if a piece of text is blank (empty or only whitespace).
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// The raw fields of a section header line, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader<'a> {
    /// True when the line carried a leading '^'.
    pub optional: bool,
    /// The section name between the first bracket pair.
    pub name: &'a str,
    /// The digits of the approvals group, if one was present.
    pub approvals: Option<&'a str>,
    /// The remainder of the line after the header, untrimmed.
    pub owners_text: &'a str,
}

/// Parses a section header line into its raw fields.
///
/// Grammar: `[^]'['<name>']'['['<digits>']']? ' '? <owners-text>`, matched
/// against the full line. The owners text is everything after the header
/// and may be empty.
pub fn section_header(input: &str) -> IResult<&str, SectionHeader<'_>> {
    (
        opt(char('^')),
        delimited(char('['), take_while1(is_section_name_char), char(']')),
        opt(delimited(char('['), digit1, char(']'))),
        opt(char(' ')),
        rest,
    )
        .map(|(caret, name, approvals, _, owners_text)| SectionHeader {
            optional: caret.is_some(),
            name,
            approvals,
            owners_text,
        })
        .parse(input)
}

/// Parses the pattern token at the start of a rule line, returning the
/// remainder of the line (the owners text).
pub fn rule_pattern(input: &str) -> IResult<&str, &str> {
    preceded(space0, take_while1(is_pattern_char)).parse(input)
}

/// Splits owners text into raw tokens. A token starting with '#' begins
/// a trailing comment and ends the list.
fn owner_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .take_while(|token| !token.starts_with('#'))
}

/// Parses a whitespace-separated owner list, classifying each token with
/// the configured matchers.
///
/// This is the single owner-list grammar: both rule lines and section
/// headers feed their trailing text through it, so the two line types
/// cannot drift apart in what they accept.
pub fn parse_owner_list(text: &str, options: &ParseOptions) -> Result<Vec<Owner>, ParseError> {
    let mut owners = Vec::new();
    for token in owner_tokens(text) {
        match options.classify(token) {
            Some(owner) => owners.push(owner),
            None => return Err(ParseError::unknown_owner(token)),
        }
    }
    Ok(owners)
}
