/// Host primitives and the standard environment.
///
/// Wraps the host math library and the four arithmetic operators as
/// [`Procedure`](crate::ast::Procedure) values and seeds the standard
/// environment with them, alongside the usual math constants. This is
/// table-building glue; the interesting semantics live in [`core`].
pub mod builtin;
/// The environment and the evaluation rules.
///
/// Defines [`Environment`](core::Environment), the single flat binding
/// table, and the recursive `eval` that reduces expression trees to values,
/// dispatching the `if` and `define` special forms before generic
/// application.
pub mod core;
