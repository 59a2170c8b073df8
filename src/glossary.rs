// Glossary text format:
//
//   term
//   definition line
//   definition line
//   (blank line)
//   term
//   ...
//
// The first non-blank line of a record is the term, the following non-blank
// lines are joined into its definition. Each definition line is prefixed with
// a single space, so a stored definition always starts with " " unless empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::GlossaryError;

pub mod linker;
pub mod parser;
pub mod renderer;
pub mod tokenizer;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawGlossary")]
pub struct Glossary {
    terms: Vec<String>,                   // ordered by codepoint
    definitions: BTreeMap<String, String>, // term -> definition
}

impl Glossary {
    pub fn new() -> Self {
        Glossary {
            terms: Vec::new(),
            definitions: BTreeMap::new(),
        }
    }

    /// Adds a record. An existing term keeps its position and gets the new
    /// definition; the replaced definition is returned.
    pub fn insert(&mut self, term: String, definition: String) -> Option<String> {
        if let Err(index) = self.terms.binary_search(&term) {
            self.terms.insert(index, term.clone());
        }
        self.definitions.insert(term, definition)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn definition(&self, term: &str) -> Result<&str, GlossaryError> {
        self.definitions
            .get(term)
            .map(|d| d.as_str())
            .ok_or_else(|| GlossaryError::NotFound {
                term: term.to_owned(),
            })
    }

    pub fn contains(&self, term: &str) -> bool {
        self.definitions.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `(term, definition)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        // BTreeMap key order is the codepoint order of `terms`
        self.definitions
            .iter()
            .map(|(term, definition)| (term.as_str(), definition.as_str()))
    }
}

// Unchecked shape of a serialized glossary
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGlossary {
    terms: Vec<String>,
    definitions: BTreeMap<String, String>,
}

impl TryFrom<RawGlossary> for Glossary {
    type Error = GlossaryError;

    fn try_from(raw: RawGlossary) -> Result<Self, Self::Error> {
        let mut terms = raw.terms;
        terms.sort();
        terms.dedup();

        if let Some(term) = terms.iter().find(|t| !raw.definitions.contains_key(*t)) {
            return Err(GlossaryError::NotFound { term: term.clone() });
        }
        if let Some(term) = raw
            .definitions
            .keys()
            .find(|t| terms.binary_search(t).is_err())
        {
            return Err(GlossaryError::Unlisted { term: term.clone() });
        }

        Ok(Glossary {
            terms,
            definitions: raw.definitions,
        })
    }
}
