//! # lisplet
//!
//! lisplet is a minimal interpreter for a parenthesized expression language,
//! a small S-expression dialect. It tokenizes source text, parses it into a
//! nested expression tree, and evaluates that tree against a mutable binding
//! environment, supporting numeric literals, symbol lookup, the `if` and
//! `define` special forms, and application of a fixed set of host math
//! primitives.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    interpreter::{evaluator::core::Environment, lexer::tokenize, parser},
};

/// Defines the unified expression and value model.
///
/// This module declares the `Expr` enum that represents both parsed syntax
/// and runtime values, the `Number` scalar with its integer and real kinds,
/// and the `Procedure` handle wrapping host primitives. Rendering an
/// expression back to source-like text is its `Display` impl.
///
/// # Responsibilities
/// - Defines the tagged variant the parser produces and the evaluator
///   consumes and returns.
/// - Implements numeric promotion hooks and truthiness.
/// - Renders values such that re-parsing yields a structurally equal tree.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while reading or
/// evaluating code. None of them are recovered internally; every stage
/// propagates the first error upward unchanged, and only the interactive
/// shell decides that none of them should end the session.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (reader, evaluator).
/// - Attaches detailed messages for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, and evaluation to provide a
/// complete runtime for the language. It exposes the stages individually so
/// they can be exercised and tested in isolation.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Provide small numeric helpers shared by the primitives.
pub mod util;

/// Reads and evaluates one expression against the given environment.
///
/// This is the top-level pipeline: tokenize, parse one expression from the
/// front of the input, evaluate it. A `define` produces `Ok(None)`; every
/// other successful evaluation produces `Ok(Some(value))`.
///
/// # Parameters
/// - `source`: Source text holding one expression.
/// - `env`: The session environment, mutated in place by `define`.
///
/// # Returns
/// The evaluated value, or `None` for a definition.
///
/// # Errors
/// Returns the first parse or runtime error encountered, unchanged.
///
/// # Examples
/// ```
/// use lisplet::{eval_source, interpreter::evaluator::core::Environment};
///
/// let mut env = Environment::standard();
///
/// let value = eval_source("(+ 1 2)", &mut env).unwrap().unwrap();
/// assert_eq!(value.to_string(), "3");
///
/// // Definitions produce no value, but persist in the environment.
/// assert!(eval_source("(define x 10)", &mut env).unwrap().is_none());
/// let value = eval_source("x", &mut env).unwrap().unwrap();
/// assert_eq!(value.to_string(), "10");
/// ```
pub fn eval_source(source: &str,
                   env: &mut Environment)
                   -> Result<Option<Expr>, Box<dyn std::error::Error>> {
    let tokens = tokenize(source);

    let expr = match parser::parse(&tokens) {
        Ok(expr) => expr,
        Err(e) => return Err(Box::new(e)),
    };

    match env.eval(&expr) {
        Ok(value) => Ok(value),
        Err(e) => Err(Box::new(e)),
    }
}
