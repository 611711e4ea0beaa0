use logos::Logos;

/// Represents a lexical token in the source input.
///
/// The token grammar is deliberately tiny: parentheses are always isolated
/// single-character tokens, and any other run of non-whitespace,
/// non-parenthesis characters is an opaque atom. Together with skipped
/// whitespace this covers every possible input byte, so lexing never fails.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other lexeme, such as `42`, `3.5`, `+` or `sqrt`. Classification
    /// into number or symbol happens in the parser, not here.
    #[regex(r"[^ \t\r\n\x0B\f()]+", |lex| lex.slice().to_string())]
    Atom(String),
    /// Whitespace between tokens, vertical tab included.
    #[regex(r"[ \t\r\n\x0B\f]+", logos::skip)]
    Ignored,
}

/// Tokenizes a source string.
///
/// Pure and total: every input produces a (possibly empty) token sequence
/// and token order follows source order.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The ordered sequence of tokens.
///
/// # Example
/// ```
/// use lisplet::interpreter::lexer::{Token, tokenize};
///
/// assert_eq!(tokenize("(+ 1 2)"),
///            vec![Token::LParen,
///                 Token::Atom("+".to_string()),
///                 Token::Atom("1".to_string()),
///                 Token::Atom("2".to_string()),
///                 Token::RParen]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    // The token patterns cover the whole input alphabet, so the lexer never
    // yields an error item and `flatten` drops nothing.
    Token::lexer(source).flatten().collect()
}
