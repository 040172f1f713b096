//! Word tokenization.

use crate::CollaboratorResult;
use unicode_segmentation::UnicodeSegmentation;

/// Coarse class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
    /// Currency sign such as `$` or `€`. Counted as a word.
    Currency,
    Punctuation,
    Space,
}

/// A token borrowed from the tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Counted as a word by [`Tokenizer::count_words`].
    pub fn is_countable(&self) -> bool {
        !matches!(self.kind, TokenKind::Space | TokenKind::Punctuation)
    }
}

/// Splits text into typed tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> CollaboratorResult<Vec<Token<'a>>>;

    /// Number of tokens that are neither whitespace nor punctuation.
    fn count_words(&self, text: &str) -> CollaboratorResult<usize> {
        Ok(self
            .tokenize(text)?
            .iter()
            .filter(|token| token.is_countable())
            .count())
    }
}

/// Unicode currency symbols (general category Sc).
fn is_currency_symbol(c: char) -> bool {
    matches!(
        c,
        '$' | '\u{a2}'..='\u{a5}'
            | '\u{58f}'
            | '\u{60b}'
            | '\u{7fe}'..='\u{7ff}'
            | '\u{9f2}'..='\u{9f3}'
            | '\u{9fb}'
            | '\u{af1}'
            | '\u{bf9}'
            | '\u{e3f}'
            | '\u{17db}'
            | '\u{20a0}'..='\u{20c0}'
            | '\u{a838}'
            | '\u{fdfc}'
            | '\u{fe69}'
            | '\u{ff04}'
            | '\u{ffe0}'..='\u{ffe1}'
            | '\u{ffe5}'..='\u{ffe6}'
    )
}

/// Tokenizer over Unicode word boundaries (UAX #29).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

impl UnicodeTokenizer {
    pub fn new() -> Self {
        UnicodeTokenizer
    }

    fn classify(piece: &str) -> TokenKind {
        if piece.chars().all(char::is_whitespace) {
            TokenKind::Space
        } else if piece.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
            if piece.chars().any(char::is_numeric) {
                TokenKind::Number
            } else {
                TokenKind::Punctuation
            }
        } else if piece.chars().any(char::is_alphanumeric) {
            TokenKind::Word
        } else if piece.chars().all(is_currency_symbol) {
            TokenKind::Currency
        } else {
            TokenKind::Punctuation
        }
    }
}

impl Tokenizer for UnicodeTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> CollaboratorResult<Vec<Token<'a>>> {
        Ok(text
            .split_word_bounds()
            .map(|piece| Token {
                text: piece,
                kind: Self::classify(piece),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_and_numbers_only() {
        let tokenizer = UnicodeTokenizer::new();
        assert_eq!(
            tokenizer
                .count_words("The deficit is $1,200 million, or 3.5 per cent.")
                .unwrap(),
            10
        );
    }

    #[test]
    fn currency_signs_are_words() {
        let tokens = UnicodeTokenizer::new().tokenize("€5 or £3").unwrap();
        let kinds: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Space)
            .map(|t| (t.text, t.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("€", TokenKind::Currency),
                ("5", TokenKind::Number),
                ("or", TokenKind::Word),
                ("£", TokenKind::Currency),
                ("3", TokenKind::Number),
            ]
        );
    }

    #[test]
    fn classifies_tokens() {
        let tokens = UnicodeTokenizer::new().tokenize("GDP rose 4%.").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| (t.text, t.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ("GDP", TokenKind::Word),
                (" ", TokenKind::Space),
                ("rose", TokenKind::Word),
                (" ", TokenKind::Space),
                ("4", TokenKind::Number),
                ("%", TokenKind::Punctuation),
                (".", TokenKind::Punctuation),
            ]
        );
    }

    #[test]
    fn empty_text_has_no_words() {
        assert_eq!(UnicodeTokenizer::new().count_words("  ... ").unwrap(), 0);
    }
}
