/// The evaluator module reduces expression trees to values.
///
/// The evaluator recursively walks an expression, resolving symbols against
/// the environment, dispatching the `if` and `define` special forms, and
/// applying host primitives to evaluated argument lists. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions, observing special-form versus application
///   semantics.
/// - Owns the environment: the single flat symbol-to-value binding table.
/// - Reports runtime errors such as unbound symbols or malformed forms.
pub mod evaluator;
/// The lexer module tokenizes source text for the parser.
///
/// The lexer reads raw source text and produces the token stream: opening
/// and closing parentheses, and opaque atom lexemes. Whitespace only
/// separates tokens and is never emitted. This is the first stage of
/// interpretation and is total over all inputs.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Treats `(` and `)` as always-isolated single-character tokens.
/// - Leaves atom lexemes unclassified; the parser decides number vs symbol.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// The parser consumes the token stream produced by the lexer through a
/// recursive descent and constructs the nested list structure of the
/// program. It also classifies atom lexemes into numbers and symbols, and
/// houses the alternate flattening reader that validates parenthesis counts
/// without building a tree.
///
/// # Responsibilities
/// - Converts tokens into `Expr` trees, preserving element order.
/// - Reports premature end of input and stray closing parentheses.
/// - Provides the lower-fidelity "validate and flatten" entry point.
pub mod parser;
