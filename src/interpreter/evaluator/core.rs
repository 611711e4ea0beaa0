use std::collections::HashMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::builtin,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the symbol bindings consulted and mutated during evaluation.
///
/// The language has no closures and no nested scopes, so one flat table
/// suffices: `define` always writes into this single map, even from inside
/// an `if` branch. The environment is created once per session and lives
/// for its whole duration.
///
/// Not safe for unsynchronized concurrent mutation; callers sharing an
/// `Environment` across threads must serialize access themselves.
pub struct Environment {
    bindings: HashMap<String, Expr>,
}

impl Environment {
    /// Creates an environment with no bindings at all.
    ///
    /// Mostly useful in tests; interactive sessions want [`standard`].
    ///
    /// [`standard`]: Environment::standard
    #[must_use]
    pub fn empty() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Creates the standard environment.
    ///
    /// Pre-seeded with the host math constants and functions and the four
    /// arithmetic operators. See [`builtin`] for the full table.
    #[must_use]
    pub fn standard() -> Self {
        let mut env = Self::empty();
        builtin::install(&mut env);
        env
    }

    /// Looks up a symbol.
    ///
    /// Lookups are case-sensitive exact string matches.
    ///
    /// # Parameters
    /// - `name`: The symbol to resolve.
    ///
    /// # Returns
    /// A clone of the bound value.
    ///
    /// # Errors
    /// `UnboundSymbol` if no binding exists.
    pub fn lookup(&self, name: &str) -> EvalResult<Expr> {
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnboundSymbol { name: name.to_string() })
    }

    /// Binds a value under a name, overwriting any prior binding.
    ///
    /// # Example
    /// ```
    /// use lisplet::{ast::Expr, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::empty();
    /// env.define("x", Expr::from(10));
    ///
    /// assert_eq!(env.lookup("x").unwrap(), Expr::from(10));
    /// ```
    pub fn define(&mut self, name: impl Into<String>, value: Expr) {
        self.bindings.insert(name.into(), value);
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. Cases, in order:
    /// symbols resolve through the environment, numbers are
    /// self-evaluating, a list headed by the symbol `if` or `define` is a
    /// special form, any other non-empty list is a generic application, and
    /// the empty list (or a stray procedure leaf) is malformed.
    ///
    /// Only `define` yields `None`; every other successful evaluation
    /// yields `Some` value. The distinction lets the read loop tell "no
    /// output" apart from a legitimate falsy result like `0`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Expr)` for expressions that produce a value, or `None` for a
    /// definition.
    ///
    /// # Errors
    /// Any `RuntimeError` raised while reducing the expression; errors
    /// propagate unchanged from the first failing sub-expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Expr>> {
        match expr {
            Expr::Symbol(name) => self.lookup(name).map(Some),

            Expr::Number(_) => Ok(Some(expr.clone())),

            Expr::List(elements) => match elements.split_first() {
                None => Err(RuntimeError::MalformedExpression { details:
                                "the empty list has no operator to apply".to_string() }),

                Some((head, operands)) => match head {
                    Expr::Symbol(s) if s == "if" => self.eval_if(operands),
                    Expr::Symbol(s) if s == "define" => self.eval_define(operands),
                    _ => self.eval_application(head, operands).map(Some),
                },
            },

            // The parser never produces procedure leaves; evaluating one
            // directly is a malformed tree, not an application.
            Expr::Procedure(p) => Err(RuntimeError::MalformedExpression {
                details: format!("stray procedure '{}' in expression position", p.name()),
            }),
        }
    }

    /// Evaluates a sub-expression and requires that it produces a value.
    ///
    /// Argument, operator and `define`-value positions all need an actual
    /// value; a nested `define` yields none and is reported as
    /// `MissingValue` here.
    fn eval_child(&mut self, expr: &Expr) -> EvalResult<Expr> {
        self.eval(expr)?.ok_or(RuntimeError::MissingValue)
    }

    /// Evaluates an `if` special form.
    ///
    /// Expects exactly three operands: test, consequent, alternative. Only
    /// the test is always evaluated; the untaken branch never is. A test
    /// that produces no value counts as falsy.
    fn eval_if(&mut self, operands: &[Expr]) -> EvalResult<Option<Expr>> {
        let [test, consequent, alternative] = operands else {
            return Err(RuntimeError::MalformedSpecialForm {
                form:    "if",
                details: format!("expected 3 elements after 'if', found {}", operands.len()),
            });
        };

        let branch = if self.eval(test)?.as_ref().is_some_and(Expr::is_truthy) {
            consequent
        } else {
            alternative
        };

        self.eval(branch)
    }

    /// Evaluates a `define` special form.
    ///
    /// Expects exactly two operands: a symbol and a value expression. The
    /// value is evaluated, bound in the environment (overwriting any prior
    /// binding), and no displayable result is produced.
    fn eval_define(&mut self, operands: &[Expr]) -> EvalResult<Option<Expr>> {
        let [name, value] = operands else {
            return Err(RuntimeError::MalformedSpecialForm {
                form:    "define",
                details: format!("expected 2 elements after 'define', found {}", operands.len()),
            });
        };

        let Expr::Symbol(name) = name else {
            return Err(RuntimeError::MalformedSpecialForm {
                form:    "define",
                details: format!("'{name}' is not a symbol"),
            });
        };

        let value = self.eval_child(value)?;
        self.define(name.clone(), value);

        Ok(None)
    }

    /// Evaluates a generic application.
    ///
    /// The operator is evaluated first and must be a procedure; the
    /// arguments are then evaluated strictly left to right, in source
    /// order, before the procedure is invoked. The evaluator performs no
    /// arity checking of its own; the primitive rejects argument lists it
    /// does not accept.
    fn eval_application(&mut self, head: &Expr, operands: &[Expr]) -> EvalResult<Expr> {
        let operator = self.eval_child(head)?;

        let Expr::Procedure(procedure) = operator else {
            return Err(RuntimeError::NotCallable { found: operator.to_string() });
        };

        let mut args = Vec::with_capacity(operands.len());
        for operand in operands {
            args.push(self.eval_child(operand)?);
        }

        procedure.call(&args)
    }
}
