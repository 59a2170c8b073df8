use tracing::debug;

use super::{
    renderer::document_name,
    tokenizer::{tokenize, DEFAULT_SEPARATORS},
    Glossary,
};
use crate::error::GlossaryError;

pub fn hyperlink(term: &str) -> String {
    format!("<a href=\"{}\">{}</a>", document_name(term), term)
}

/// Replaces every whole-token occurrence of `term` in `definition` with a
/// hyperlink to the term's page. Separators and other tokens are copied as is.
pub fn link_definition(definition: &str, term: &str) -> String {
    let mut linked = String::with_capacity(definition.len());

    for token in tokenize(definition, &DEFAULT_SEPARATORS) {
        if !token.is_separator && token.text == term {
            linked.push_str(&hyperlink(term));
        } else {
            linked.push_str(token.text);
        }
    }

    linked
}

/// Builds a new glossary whose definitions link every known term, itself
/// included. Terms are applied in ascending order, each on the output of the
/// previous one.
pub fn link_terms(glossary: &Glossary) -> Result<Glossary, GlossaryError> {
    let mut linked = Glossary::new();

    for term in glossary.terms() {
        let mut definition = glossary.definition(term)?.to_owned();

        for other in glossary.terms() {
            definition = link_definition(&definition, other);
        }

        debug!(term = %term, "linked definition");

        linked.insert(term.clone(), definition);
    }

    Ok(linked)
}

