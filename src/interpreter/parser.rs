use std::iter::Peekable;

use crate::{
    ast::{Expr, Number},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one expression from a token slice.
///
/// This is the entry point for parsing. It reads a single expression from
/// the front of the slice; tokens after the first complete expression are
/// left unconsumed, matching the line-oriented read loop where one line
/// holds one expression.
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer.
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// - `UnexpectedEof` if the tokens run out mid-expression (or are empty).
/// - `UnexpectedCloseParen` if the slice starts with `)`.
///
/// # Example
/// ```
/// use lisplet::{
///     ast::{Expr, Number},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let expr = parse(&tokenize("(+ 1 2)")).unwrap();
/// assert_eq!(expr,
///            Expr::List(vec![Expr::Symbol("+".to_string()),
///                            Expr::Number(Number::Integer(1)),
///                            Expr::Number(Number::Integer(2))]));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    parse_expression(&mut tokens.iter().peekable())
}

/// Parses one expression from a token cursor.
///
/// Recursive descent: a `(` opens a list which collects sub-expressions
/// until the matching `)`, a bare `)` is an error, and anything else is an
/// atom. The empty list `()` is legal and parses to an empty `List`.
///
/// # Parameters
/// - `tokens`: Cursor over the token stream, advanced past the expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// - `UnexpectedEof` when the cursor is exhausted mid-expression.
/// - `UnexpectedCloseParen` when `)` appears in expression position.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        None => Err(ParseError::UnexpectedEof),

        Some(Token::LParen) => {
            let mut elements = Vec::new();

            loop {
                match tokens.peek() {
                    None => return Err(ParseError::UnexpectedEof),
                    Some(Token::RParen) => {
                        tokens.next();
                        return Ok(Expr::List(elements));
                    },
                    Some(_) => elements.push(parse_expression(tokens)?),
                }
            }
        },

        Some(Token::RParen) => Err(ParseError::UnexpectedCloseParen),

        Some(Token::Atom(lexeme)) => Ok(atom(lexeme)),

        // The lexer never emits whitespace tokens, but a hand-built stream
        // may contain them; they separate expressions and carry no content.
        Some(Token::Ignored) => parse_expression(tokens),
    }
}

/// Classifies a single atom lexeme.
///
/// Integer parse first, then float parse, then the `Symbol` fallback. Never
/// fails: every string is at least a symbol. Numeric syntax is whatever
/// `i64::from_str` and `f64::from_str` natively accept.
///
/// # Parameters
/// - `lexeme`: A non-parenthesis token string.
///
/// # Returns
/// A `Number` or `Symbol` leaf.
///
/// # Example
/// ```
/// use lisplet::{
///     ast::{Expr, Number},
///     interpreter::parser::atom,
/// };
///
/// assert_eq!(atom("42"), Expr::Number(Number::Integer(42)));
/// assert_eq!(atom("2.5"), Expr::Number(Number::Real(2.5)));
/// assert_eq!(atom("sqrt"), Expr::Symbol("sqrt".to_string()));
/// ```
#[must_use]
pub fn atom(lexeme: &str) -> Expr {
    if let Ok(n) = lexeme.parse::<i64>() {
        return Expr::Number(Number::Integer(n));
    }

    if let Ok(r) = lexeme.parse::<f64>() {
        return Expr::Number(Number::Real(r));
    }

    Expr::Symbol(lexeme.to_string())
}

/// Validates parenthesis counts and returns the flat atom lexemes.
///
/// Alternate, lower-fidelity reader: it strips all parentheses, discards
/// nesting entirely, and returns the remaining lexemes unclassified. It is
/// never used by the evaluator.
///
/// The balance check only compares counts, so a stream whose depth dips
/// negative but returns to zero, such as `)(`, still validates. This weaker
/// guarantee is intentional; use [`parse`] when proper nesting matters.
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer.
///
/// # Returns
/// The atom lexemes in source order, with all parentheses removed.
///
/// # Errors
/// - `UnbalancedParentheses` if the open and close counts differ.
///
/// # Example
/// ```
/// use lisplet::interpreter::{lexer::tokenize, parser::flatten};
///
/// let atoms = flatten(&tokenize("(+ (sqrt 2) 1)")).unwrap();
/// assert_eq!(atoms, vec!["+", "sqrt", "2", "1"]);
///
/// assert!(flatten(&tokenize("(+ 1 2")).is_err());
/// ```
pub fn flatten(tokens: &[Token]) -> ParseResult<Vec<String>> {
    let mut open = 0;
    let mut close = 0;
    let mut atoms = Vec::new();

    for token in tokens {
        match token {
            Token::LParen => open += 1,
            Token::RParen => close += 1,
            Token::Atom(lexeme) => atoms.push(lexeme.clone()),
            Token::Ignored => {},
        }
    }

    if open == close {
        Ok(atoms)
    } else {
        Err(ParseError::UnbalancedParentheses { open, close })
    }
}
