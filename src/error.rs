/// Parsing errors.
///
/// Defines all error types that can occur while reading source text into an
/// expression tree. Parse errors cover premature end of input, stray closing
/// parentheses, and unbalanced parenthesis counts in the flattening reader.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// symbols, malformed forms, calls to non-procedures, and the failures a
/// host primitive can report for an evaluated argument list.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
