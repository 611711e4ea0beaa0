#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading source text.
pub enum ParseError {
    /// The token stream ran out while more input was expected, typically
    /// because of an unterminated `(`.
    UnexpectedEof,
    /// A `)` was encountered where an expression was expected.
    UnexpectedCloseParen,
    /// Opening and closing parenthesis counts do not net to zero.
    ///
    /// Only raised by the flattening reader, which counts parentheses
    /// without tracking nesting.
    UnbalancedParentheses {
        /// The number of `(` tokens seen.
        open:  usize,
        /// The number of `)` tokens seen.
        close: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "Unexpected end of input."),

            Self::UnexpectedCloseParen => {
                write!(f, "Unexpected closing parenthesis ')'.")
            },

            Self::UnbalancedParentheses { open, close } => write!(f,
                                                                  "Unbalanced parentheses: {open} opening, {close} closing."),
        }
    }
}

impl std::error::Error for ParseError {}
