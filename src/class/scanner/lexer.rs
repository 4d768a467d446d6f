//! A small scanner for the fixed token grammar the structural parsers need.
//!
//! Only two token shapes exist: words (identifier characters plus the angle
//! and square brackets that make up type expressions such as `List<String>` or
//! `int[]`) and single punctuation characters. Whitespace separates tokens and
//! is never emitted.

use crate::class::types::Modifier;

/// Words that start a statement and therefore never name a member type
const STATEMENT_KEYWORDS: &[&str] = &[
    "return", "else", "new", "throw", "case", "break", "continue", "assert", "yield",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punct(char),
}

/// A token borrowed from the scanned text, with its byte span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    /// True for the word `word` exactly
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.text == word
    }

    /// True for the punctuation character `c`
    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }

    /// A word made only of identifier characters
    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Word && self.text.chars().all(is_identifier_char)
    }

    /// The explicit access modifier this token spells, if any
    pub fn modifier(&self) -> Option<Modifier> {
        match self.kind {
            TokenKind::Word => Modifier::from_token(self.text),
            TokenKind::Punct(_) => None,
        }
    }

    /// A word that can stand in type position of a member declaration
    pub fn is_member_type(&self) -> bool {
        self.kind == TokenKind::Word
            && self.modifier().is_none()
            && !STATEMENT_KEYWORDS.contains(&self.text)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_char(c: char) -> bool {
    is_identifier_char(c) || matches!(c, '<' | '>' | '[' | ']')
}

/// Split `text` into words and punctuation.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        if !is_word_char(c) {
            let end = start + c.len_utf8();
            tokens.push(Token {
                kind: TokenKind::Punct(c),
                text: &text[start..end],
                start,
                end,
            });
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(idx, next)) = chars.peek() {
            if !is_word_char(next) {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }

        tokens.push(Token {
            kind: TokenKind::Word,
            text: &text[start..end],
            start,
            end,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn type_expressions_are_single_words() {
        let tokens = tokenize("private List<String> names; int[] xs;");
        assert_eq!(
            texts(&tokens),
            vec!["private", "List<String>", "names", ";", "int[]", "xs", ";"]
        );
        assert!(tokens[2].is_identifier());
        assert!(!tokens[1].is_identifier());
    }

    #[test]
    fn spans_point_back_into_source() {
        let source = "void run(int a) {";
        for token in tokenize(source) {
            assert_eq!(&source[token.start..token.end], token.text);
        }
    }

    #[test]
    fn modifiers_and_keywords_are_not_member_types() {
        let tokens = tokenize("public return else String");
        assert_eq!(tokens[0].modifier(), Some(Modifier::Public));
        assert!(!tokens[0].is_member_type());
        assert!(!tokens[1].is_member_type());
        assert!(!tokens[2].is_member_type());
        assert!(tokens[3].is_member_type());
    }

    #[test]
    fn jump_and_assert_keywords_are_not_member_types() {
        for token in tokenize("break continue assert yield") {
            assert!(!token.is_member_type(), "{}", token.text);
        }
    }
}
