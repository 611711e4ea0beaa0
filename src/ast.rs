use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Represents a numeric scalar.
///
/// The language keeps two distinct numeric kinds under one numeric case:
/// exact 64-bit integers and double precision reals. Mixed arithmetic
/// promotes the integer side to a real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer, produced when a lexeme parses as an integer.
    Integer(i64),
    /// A 64-bit floating-point value, produced when a lexeme parses as a
    /// float but not as an integer.
    Real(f64),
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// Integers are converted only if they are exactly representable as a
    /// double; reals are returned unchanged.
    ///
    /// # Returns
    /// - `Ok(f64)`: The converted value.
    /// - `Err(RuntimeError::LiteralTooLarge)`: If an integer is outside the
    ///   exactly representable range.
    ///
    /// # Example
    /// ```
    /// use lisplet::ast::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real().unwrap(), 10.0);
    /// assert_eq!(Number::Real(2.5).as_real().unwrap(), 2.5);
    /// ```
    pub fn as_real(self) -> EvalResult<f64> {
        match self {
            Self::Integer(n) => i64_to_f64_checked(n, RuntimeError::LiteralTooLarge),
            Self::Real(r) => Ok(r),
        }
    }

    /// Returns `true` unless the number is zero.
    ///
    /// Both `Integer(0)` and `Real(0.0)` (including negative zero) are falsy.
    #[must_use]
    pub fn is_truthy(self) -> bool {
        match self {
            Self::Integer(n) => n != 0,
            Self::Real(r) => r != 0.0,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // `{:?}` keeps a decimal point or exponent on the rendered real,
            // so re-reading the output classifies it as a real again.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}

/// Type of the host functions backing [`Procedure`] values.
///
/// A primitive receives the slice of already-evaluated argument expressions
/// and returns the resulting expression or a runtime error. Arity checking
/// happens inside the primitive, not in the evaluator.
pub type PrimitiveFn = fn(&[Expr]) -> EvalResult<Expr>;

/// An opaque callable value bound to a host-provided primitive.
///
/// Procedures only ever originate from the pre-seeded environment; there is
/// no lambda form, so user code cannot construct one. Equality compares the
/// procedure name only.
#[derive(Clone)]
pub struct Procedure {
    name: &'static str,
    func: PrimitiveFn,
}

impl Procedure {
    /// Wraps a host primitive under the given name.
    #[must_use]
    pub const fn new(name: &'static str, func: PrimitiveFn) -> Self {
        Self { name, func }
    }

    /// Returns the name the procedure was registered under.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the underlying primitive with already-evaluated arguments.
    ///
    /// # Errors
    /// Whatever the primitive raises: arity mismatches, non-numeric
    /// arguments, division by zero, overflow.
    pub fn call(&self, args: &[Expr]) -> EvalResult<Expr> {
        (self.func)(args)
    }
}

impl std::fmt::Debug for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Procedure({})", self.name)
    }
}

impl PartialEq for Procedure {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Represents an expression, both as parsed syntax and as a runtime value.
///
/// The reader produces trees of `Number`, `Symbol` and `List`; evaluation
/// reduces such a tree to another `Expr`, which may additionally be a
/// `Procedure` fetched from the environment. Using one type for both roles
/// is what lets `define` store any evaluated result back into the
/// environment without conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric scalar. Self-evaluating.
    Number(Number),
    /// A name, used for variable lookup or in operator position.
    Symbol(String),
    /// An ordered, possibly empty sequence of sub-expressions.
    List(Vec<Expr>),
    /// A host primitive. Never produced by the parser.
    Procedure(Procedure),
}

impl Expr {
    /// Returns the contained number, or an `ExpectedNumber` error.
    ///
    /// # Example
    /// ```
    /// use lisplet::ast::{Expr, Number};
    ///
    /// let x = Expr::Number(Number::Integer(3));
    /// assert_eq!(x.as_number().unwrap(), Number::Integer(3));
    /// assert!(Expr::Symbol("x".to_string()).as_number().is_err());
    /// ```
    pub fn as_number(&self) -> EvalResult<Number> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::ExpectedNumber { found: self.to_string() }),
        }
    }

    /// Decides the truth value of an evaluated expression.
    ///
    /// Zero numbers and the empty list are falsy; every other value,
    /// including symbols and procedures, is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => n.is_truthy(),
            Self::List(elements) => !elements.is_empty(),
            Self::Symbol(_) | Self::Procedure(_) => true,
        }
    }
}

impl From<Number> for Expr {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Number(Number::Integer(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Number(Number::Real(value))
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::List(elements) => {
                write!(f, "(")?;

                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{element}")?;
                }

                write!(f, ")")
            },
            Self::Procedure(p) => write!(f, "#<procedure {}>", p.name()),
        }
    }
}
