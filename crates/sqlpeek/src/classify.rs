//! Statement family detection.

use serde::{Deserialize, Serialize};

/// The statement families the minifier knows how to summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementFamily {
    Select,
    Delete,
    Update,
    Insert,
}

/// Ordered keywords of a statement family.
///
/// The first `required` keywords appear in every statement of the family;
/// the remaining ones are optional clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    pub keywords: &'static [&'static str],
    pub required: usize,
}

impl Vocabulary {
    /// Keywords every statement of the family contains.
    pub fn mandatory(&self) -> &'static [&'static str] {
        &self.keywords[..self.required]
    }

    /// Clause keywords that may or may not be present.
    pub fn optional(&self) -> &'static [&'static str] {
        &self.keywords[self.required..]
    }
}

const SELECT: Vocabulary = Vocabulary {
    keywords: &["SELECT", "FROM", "WHERE", "HAVING", "ORDER BY", "LIMIT"],
    required: 2,
};

const DELETE: Vocabulary = Vocabulary {
    keywords: &["DELETE", "FROM", "WHERE", "ORDER BY", "LIMIT"],
    required: 2,
};

const UPDATE: Vocabulary = Vocabulary {
    keywords: &["UPDATE", "SET", "WHERE", "ORDER BY", "LIMIT"],
    required: 2,
};

const INSERT: Vocabulary = Vocabulary {
    keywords: &["INSERT", "INTO", "VALUE", "VALUES"],
    required: 2,
};

impl StatementFamily {
    /// Detection order; the first family whose keyword occurs anywhere wins.
    pub const ALL: [StatementFamily; 4] = [
        StatementFamily::Select,
        StatementFamily::Delete,
        StatementFamily::Update,
        StatementFamily::Insert,
    ];

    /// Classify a query by case-insensitive keyword presence.
    ///
    /// This is a substring test, not a parse: `INSERT ... SELECT` is a
    /// select-like statement, and a column named `updated_at` makes an
    /// otherwise unknown statement update-like.
    pub fn detect(query: &str) -> Option<Self> {
        let upper = query.to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|family| upper.contains(family.keyword()))
    }

    /// The leading keyword that identifies this family.
    pub fn keyword(self) -> &'static str {
        self.vocabulary().keywords[0]
    }

    pub fn vocabulary(self) -> Vocabulary {
        match self {
            StatementFamily::Select => SELECT,
            StatementFamily::Delete => DELETE,
            StatementFamily::Update => UPDATE,
            StatementFamily::Insert => INSERT,
        }
    }
}
