use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::error::GlossaryError;

// , space tab ; .
pub static DEFAULT_SEPARATORS: Lazy<HashSet<char>> =
    Lazy::new(|| [',', ' ', '\t', ';', '.'].into_iter().collect());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub is_separator: bool,
}

/// Returns the maximal run starting at `position` (a byte offset) whose
/// characters are either all separators or all non-separators.
pub fn next_token<'a>(
    text: &'a str,
    position: usize,
    separators: &HashSet<char>,
) -> Result<&'a str, GlossaryError> {
    next_token_with_class(text, position, separators).map(|token| token.text)
}

fn next_token_with_class<'a>(
    text: &'a str,
    position: usize,
    separators: &HashSet<char>,
) -> Result<Token<'a>, GlossaryError> {
    if position >= text.len() || !text.is_char_boundary(position) {
        return Err(GlossaryError::InvalidArgument {
            position,
            len: text.len(),
        });
    }

    let rest = &text[position..];

    let is_separator = rest
        .chars()
        .next()
        .is_some_and(|c| separators.contains(&c));

    let end = rest
        .char_indices()
        .find(|(_, c)| separators.contains(c) != is_separator)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    Ok(Token {
        text: &rest[..end],
        is_separator,
    })
}

pub struct Tokens<'a, 's> {
    text: &'a str,
    position: usize,
    separators: &'s HashSet<char>,
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }

        let token = next_token_with_class(self.text, self.position, self.separators)
            .expect("position advances by whole tokens, so it stays on a char boundary");
        self.position += token.text.len();
        Some(token)
    }
}

/// Splits `text` into consecutive tokens. Concatenating them gives `text` back.
pub fn tokenize<'a, 's>(text: &'a str, separators: &'s HashSet<char>) -> Tokens<'a, 's> {
    Tokens {
        text,
        position: 0,
        separators,
    }
}
