//! Keyword-sequence matching.
//!
//! A [`KeywordPattern`] matches a query that starts with its first keyword and
//! contains the remaining keywords in order, capturing the text that follows
//! each one. Every keyword sequence the minifier can try is known up front, so
//! each family's patterns are compiled once into a [`FamilyPatterns`] table.

use crate::classify::StatementFamily;
use crate::combination::Combinations;
use crate::error::PeekResult;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Text following one keyword, up to the next keyword or the end of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture<'a> {
    pub keyword: &'a str,
    pub value: &'a str,
}

/// A compiled `KW1 ... KW2 ... KWn ...` matcher.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    keywords: Vec<String>,
    regex: Regex,
}

impl KeywordPattern {
    /// Compile a pattern for the given keyword sequence.
    ///
    /// Keywords are matched literally and case-insensitively, and are reported
    /// upper-cased in captures. Every keyword after the first must be preceded
    /// by whitespace, and the last one must also be followed by whitespace.
    /// Segments between keywords are as short as possible; the final segment
    /// runs to the end of the query.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> PeekResult<Self> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().to_ascii_uppercase())
            .collect();

        let mut source = String::from(r"^\s*");
        for (i, keyword) in keywords.iter().enumerate() {
            if i > 0 {
                source.push_str(r"(.*?)\s");
            }
            source.push_str(&regex::escape(keyword));
        }
        if !keywords.is_empty() {
            source.push_str(r"\s");
        }
        source.push_str("(.*)$");

        let regex = RegexBuilder::new(&source)
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()?;

        Ok(Self { keywords, regex })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Match against `query`, returning one capture per keyword.
    ///
    /// Each value is trimmed at both ends, so the whitespace that separates a
    /// keyword from its value (including line breaks) is not carried into the
    /// summary. Whitespace inside a value is kept as written.
    pub fn captures<'a>(&'a self, query: &'a str) -> Option<Vec<Capture<'a>>> {
        let caps = self.regex.captures(query)?;
        let captures = self
            .keywords
            .iter()
            .enumerate()
            .map(|(i, keyword)| Capture {
                keyword: keyword.as_str(),
                value: caps.get(i + 1).map_or("", |m| m.as_str().trim()),
            })
            .collect();
        Some(captures)
    }

    pub fn is_match(&self, query: &str) -> bool {
        self.regex.is_match(query)
    }
}

/// The compiled patterns of one statement family, in the order they are tried.
///
/// Patterns with more optional clauses come first; among patterns of equal
/// length, clause order follows the family vocabulary. The last pattern holds
/// only the mandatory keywords.
#[derive(Debug)]
pub struct FamilyPatterns {
    family: StatementFamily,
    patterns: Vec<KeywordPattern>,
}

struct PatternTable {
    select: FamilyPatterns,
    delete: FamilyPatterns,
    update: FamilyPatterns,
    insert: FamilyPatterns,
}

static TABLE: LazyLock<PatternTable> = LazyLock::new(|| PatternTable {
    select: FamilyPatterns::compile(StatementFamily::Select),
    delete: FamilyPatterns::compile(StatementFamily::Delete),
    update: FamilyPatterns::compile(StatementFamily::Update),
    insert: FamilyPatterns::compile(StatementFamily::Insert),
});

impl FamilyPatterns {
    /// The shared table for `family`, compiled on first use.
    pub fn for_family(family: StatementFamily) -> &'static FamilyPatterns {
        match family {
            StatementFamily::Select => &TABLE.select,
            StatementFamily::Delete => &TABLE.delete,
            StatementFamily::Update => &TABLE.update,
            StatementFamily::Insert => &TABLE.insert,
        }
    }

    /// Compile every keyword sequence of `family`.
    ///
    /// A sequence that fails to compile is logged and left out.
    pub fn compile(family: StatementFamily) -> Self {
        let vocabulary = family.vocabulary();
        let mandatory = vocabulary.mandatory();
        let optional = vocabulary.optional();

        let mut sequences: Vec<Vec<&str>> = Vec::new();
        for count in (1..=optional.len()).rev() {
            for combination in Combinations::new(optional, count) {
                sequences.push(mandatory.iter().chain(combination).copied().collect());
            }
        }
        sequences.push(mandatory.to_vec());

        let patterns = sequences
            .iter()
            .filter_map(|keywords| match KeywordPattern::new(keywords.as_slice()) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!(
                        target: "sqlpeek.minify",
                        family = ?family,
                        keywords = ?keywords,
                        error = %e,
                        "failed to compile keyword pattern"
                    );
                    None
                }
            })
            .collect();

        Self { family, patterns }
    }

    pub fn family(&self) -> StatementFamily {
        self.family
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeywordPattern> {
        self.patterns.iter()
    }

    /// The first pattern that matches `query`, with its captures.
    pub fn first_match<'a>(
        &'a self,
        query: &'a str,
    ) -> Option<(&'a KeywordPattern, Vec<Capture<'a>>)> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.captures(query).map(|caps| (pattern, caps)))
    }
}
