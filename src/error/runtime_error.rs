#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Looked up a symbol with no binding in the environment.
    UnboundSymbol {
        /// The name that was looked up.
        name: String,
    },
    /// An `if` or `define` form had the wrong shape.
    MalformedSpecialForm {
        /// The special form in question, `if` or `define`.
        form:    &'static str,
        /// What was wrong with the form.
        details: String,
    },
    /// The operator position of an application evaluated to something that
    /// is not a procedure.
    NotCallable {
        /// The rendered value found in operator position.
        found: String,
    },
    /// A primitive received a number of arguments it does not accept.
    ArityMismatch {
        /// The name of the primitive.
        name:  &'static str,
        /// The number of arguments actually supplied.
        found: usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The rendered non-numeric value.
        found: String,
    },
    /// An integer value was expected, but a real was found.
    ExpectedInteger {
        /// The rendered non-integer value.
        found: String,
    },
    /// An expression was evaluated for its value but produced none.
    ///
    /// Only `define` produces no value, so this fires when a `define` sits
    /// in argument, operator or value position.
    MissingValue,
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// An integer was too large to convert losslessly to a real, or a real
    /// was outside the exactly representable integer range.
    LiteralTooLarge,
    /// Any other structurally invalid expression shape, such as an empty
    /// application `()`.
    MalformedExpression {
        /// Details about the invalid shape.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundSymbol { name } => write!(f, "Unbound symbol '{name}'."),

            Self::MalformedSpecialForm { form, details } => {
                write!(f, "Malformed '{form}' form: {details}.")
            },

            Self::NotCallable { found } => {
                write!(f, "'{found}' is not a procedure and cannot be applied.")
            },

            Self::ArityMismatch { name, found } => write!(f,
                                                          "Procedure '{name}' does not accept {found} argument(s)."),

            Self::ExpectedNumber { found } => {
                write!(f, "Expected a number, found '{found}'.")
            },

            Self::ExpectedInteger { found } => {
                write!(f, "Expected an integer, found '{found}'.")
            },

            Self::MissingValue => {
                write!(f, "Expected a value, but the expression produced none.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::Overflow => {
                write!(f, "Integer overflow while trying to compute result.")
            },

            Self::LiteralTooLarge => write!(f, "Literal is too large."),

            Self::MalformedExpression { details } => {
                write!(f, "Malformed expression: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
