use lisplet::{
    ast::{Expr, Number},
    error::{ParseError, RuntimeError},
    eval_source,
    interpreter::{
        evaluator::core::Environment,
        lexer::{Token, tokenize},
        parser::{atom, flatten, parse},
    },
};

fn eval_value(env: &mut Environment, src: &str) -> Expr {
    eval_source(src, env).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
                         .unwrap_or_else(|| panic!("'{src}' produced no value"))
}

fn eval_err(env: &mut Environment, src: &str) -> RuntimeError {
    let expr = parse(&tokenize(src)).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    env.eval(&expr)
       .err()
       .unwrap_or_else(|| panic!("'{src}' succeeded but was expected to fail"))
}

fn integer(n: i64) -> Expr {
    Expr::Number(Number::Integer(n))
}

fn real(r: f64) -> Expr {
    Expr::Number(Number::Real(r))
}

#[test]
fn tokenizer_isolates_parentheses() {
    assert_eq!(tokenize("(+ 1 2)"),
               vec![Token::LParen,
                    Token::Atom("+".to_string()),
                    Token::Atom("1".to_string()),
                    Token::Atom("2".to_string()),
                    Token::RParen]);
}

#[test]
fn tokenizer_is_total() {
    assert_eq!(tokenize(""), vec![]);
    assert_eq!(tokenize("   \t\n"), vec![]);
    assert_eq!(tokenize("hello"), vec![Token::Atom("hello".to_string())]);
    assert_eq!(tokenize("a(b"),
               vec![Token::Atom("a".to_string()),
                    Token::LParen,
                    Token::Atom("b".to_string())]);

    // Vertical tab separates tokens like any other whitespace.
    assert_eq!(tokenize("1\x0B2"),
               vec![Token::Atom("1".to_string()), Token::Atom("2".to_string())]);
}

#[test]
fn atoms_classify_integer_then_real_then_symbol() {
    assert_eq!(atom("42"), integer(42));
    assert_eq!(atom("-12"), integer(-12));
    assert_eq!(atom("2.5"), real(2.5));
    assert_eq!(atom("1e3"), real(1000.0));
    assert_eq!(atom("+"), Expr::Symbol("+".to_string()));
    assert_eq!(atom("12abc"), Expr::Symbol("12abc".to_string()));
}

#[test]
fn parser_builds_nested_lists() {
    let expr = parse(&tokenize("(+ 1 (sqrt 2))")).unwrap();

    assert_eq!(expr,
               Expr::List(vec![Expr::Symbol("+".to_string()),
                               integer(1),
                               Expr::List(vec![Expr::Symbol("sqrt".to_string()), integer(2)])]));
}

#[test]
fn parser_accepts_empty_list() {
    assert_eq!(parse(&tokenize("()")).unwrap(), Expr::List(vec![]));
}

#[test]
fn parser_reports_missing_close_paren() {
    assert_eq!(parse(&tokenize("(+ 1 2")), Err(ParseError::UnexpectedEof));
    assert_eq!(parse(&tokenize("")), Err(ParseError::UnexpectedEof));
}

#[test]
fn parser_tolerates_hand_built_whitespace_tokens() {
    // The lexer never emits `Ignored`, but `parse` accepts any token
    // slice; stray whitespace tokens are skipped, not a panic or an error.
    let tokens = vec![Token::Ignored,
                      Token::LParen,
                      Token::Atom("+".to_string()),
                      Token::Ignored,
                      Token::Atom("1".to_string()),
                      Token::Atom("2".to_string()),
                      Token::RParen];

    assert_eq!(parse(&tokens).unwrap(),
               Expr::List(vec![Expr::Symbol("+".to_string()), integer(1), integer(2)]));
    assert_eq!(parse(&[Token::Ignored]), Err(ParseError::UnexpectedEof));
}

#[test]
fn parser_rejects_stray_close_paren() {
    assert_eq!(parse(&tokenize(")")), Err(ParseError::UnexpectedCloseParen));
}

#[test]
fn flatten_returns_atoms_in_order() {
    assert_eq!(flatten(&tokenize("(+ (sqrt 2) 1)")).unwrap(),
               vec!["+", "sqrt", "2", "1"]);
}

#[test]
fn flatten_rejects_unbalanced_counts() {
    assert_eq!(flatten(&tokenize("((+ 1 2)")),
               Err(ParseError::UnbalancedParentheses { open: 2, close: 1 }));
}

#[test]
fn flatten_checks_counts_not_nesting() {
    // Depth-counting only: a stream that dips negative but nets to zero
    // still validates. This is the documented weaker guarantee.
    assert_eq!(flatten(&tokenize(")(")).unwrap(), Vec::<String>::new());
}

#[test]
fn arithmetic_evaluates() {
    let mut env = Environment::standard();

    assert_eq!(eval_value(&mut env, "(+ 1 2)"), integer(3));
    assert_eq!(eval_value(&mut env, "(- 8 5)"), integer(3));
    assert_eq!(eval_value(&mut env, "(* 3 4)"), integer(12));
    assert_eq!(eval_value(&mut env, "(+ (* 2 10) 1)"), integer(21));
}

#[test]
fn mixed_arithmetic_promotes_to_real() {
    let mut env = Environment::standard();

    assert_eq!(eval_value(&mut env, "(+ 1 2.5)"), real(3.5));
    assert_eq!(eval_value(&mut env, "(* 0.5 4)"), real(2.0));
}

#[test]
fn division_is_true_division() {
    let mut env = Environment::standard();

    assert_eq!(eval_value(&mut env, "(/ 7 2)"), real(3.5));
    assert_eq!(eval_value(&mut env, "(/ 4 2)"), real(2.0));
}

#[test]
fn division_by_zero_fails() {
    let mut env = Environment::standard();

    assert_eq!(eval_err(&mut env, "(/ 1 0)"), RuntimeError::DivisionByZero);
    assert_eq!(eval_err(&mut env, "(/ 1.0 0.0)"), RuntimeError::DivisionByZero);
}

#[test]
fn integer_overflow_fails() {
    let mut env = Environment::standard();

    assert_eq!(eval_err(&mut env, "(* 9223372036854775807 2)"),
               RuntimeError::Overflow);
}

#[test]
fn define_binds_and_persists() {
    let mut env = Environment::standard();

    assert!(eval_source("(define x 10)", &mut env).unwrap().is_none());
    assert_eq!(eval_value(&mut env, "x"), integer(10));
    assert_eq!(eval_value(&mut env, "(+ x 5)"), integer(15));

    // Redefinition overwrites the prior binding.
    assert!(eval_source("(define x 1)", &mut env).unwrap().is_none());
    assert_eq!(eval_value(&mut env, "x"), integer(1));
}

#[test]
fn define_value_is_evaluated_before_binding() {
    let mut env = Environment::standard();

    assert!(eval_source("(define x (* 6 7))", &mut env).unwrap().is_none());
    assert_eq!(eval_value(&mut env, "x"), integer(42));
}

#[test]
fn define_in_value_position_fails() {
    let mut env = Environment::standard();

    assert_eq!(eval_err(&mut env, "(+ (define x 1) 2)"), RuntimeError::MissingValue);
}

#[test]
fn if_selects_on_truthiness() {
    let mut env = Environment::standard();

    assert_eq!(eval_value(&mut env, "(if 0 10 20)"), integer(20));
    assert_eq!(eval_value(&mut env, "(if 1 10 20)"), integer(10));
    assert_eq!(eval_value(&mut env, "(if 0.0 10 20)"), integer(20));
    assert_eq!(eval_value(&mut env, "(if -3 10 20)"), integer(10));
}

#[test]
fn if_test_is_evaluated_not_inspected() {
    let mut env = Environment::standard();

    // Truthiness applies to evaluated values only; a literal `()` in test
    // position is itself evaluated and fails as an empty application
    // before any truth check happens.
    assert!(matches!(eval_err(&mut env, "(if () 10 20)"),
                     RuntimeError::MalformedExpression { .. }));
}

#[test]
fn if_does_not_evaluate_untaken_branch() {
    let mut env = Environment::standard();

    // The untaken branch references an unbound symbol; reaching it would
    // raise UnboundSymbol.
    assert_eq!(eval_value(&mut env, "(if 1 10 zzz)"), integer(10));
    assert_eq!(eval_value(&mut env, "(if 0 zzz 20)"), integer(20));
}

#[test]
fn special_forms_reject_wrong_shapes() {
    let mut env = Environment::standard();

    assert!(matches!(eval_err(&mut env, "(if 1 2)"),
                     RuntimeError::MalformedSpecialForm { form: "if", .. }));
    assert!(matches!(eval_err(&mut env, "(if 1 2 3 4)"),
                     RuntimeError::MalformedSpecialForm { form: "if", .. }));
    assert!(matches!(eval_err(&mut env, "(define x)"),
                     RuntimeError::MalformedSpecialForm { form: "define", .. }));
    assert!(matches!(eval_err(&mut env, "(define (x) 1)"),
                     RuntimeError::MalformedSpecialForm { form: "define", .. }));
}

#[test]
fn unbound_symbol_fails() {
    let mut env = Environment::standard();

    assert_eq!(eval_err(&mut env, "zzz"),
               RuntimeError::UnboundSymbol { name: "zzz".to_string() });
}

#[test]
fn empty_application_is_malformed() {
    let mut env = Environment::standard();

    assert!(matches!(eval_err(&mut env, "()"),
                     RuntimeError::MalformedExpression { .. }));
}

#[test]
fn non_procedure_operator_is_not_callable() {
    let mut env = Environment::standard();

    assert!(matches!(eval_err(&mut env, "(1 2 3)"), RuntimeError::NotCallable { .. }));
    assert!(matches!(eval_err(&mut env, "(pi 2)"), RuntimeError::NotCallable { .. }));
}

#[test]
fn primitives_reject_bad_argument_lists() {
    let mut env = Environment::standard();

    assert!(matches!(eval_err(&mut env, "(+ 1 2 3)"),
                     RuntimeError::ArityMismatch { name: "+", found: 3 }));
    assert!(matches!(eval_err(&mut env, "(sqrt)"),
                     RuntimeError::ArityMismatch { name: "sqrt", found: 0 }));
    assert!(matches!(eval_err(&mut env, "(+ 1 sqrt)"),
                     RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn math_primitives_evaluate() {
    let mut env = Environment::standard();

    assert_eq!(eval_value(&mut env, "(sqrt 9)"), real(3.0));
    assert_eq!(eval_value(&mut env, "(log2 8)"), real(3.0));
    assert_eq!(eval_value(&mut env, "(pow 2 10)"), real(1024.0));

    let Expr::Number(Number::Real(log)) = eval_value(&mut env, "(log 8 2)") else {
        panic!("(log 8 2) did not produce a real");
    };
    assert!((log - 3.0).abs() < 1e-12);
    assert_eq!(eval_value(&mut env, "(floor 2.7)"), integer(2));
    assert_eq!(eval_value(&mut env, "(gcd 12 18)"), integer(6));
    assert_eq!(eval_value(&mut env, "(fabs -2.5)"), real(2.5));
    assert_eq!(eval_value(&mut env, "pi"), real(std::f64::consts::PI));
}

#[test]
fn printer_round_trips_parsed_expressions() {
    let mut env = Environment::standard();

    for src in ["42",
                "2.5",
                "-0.125",
                "sqrt",
                "()",
                "(+ 1 2)",
                "(define y (f 1 2.5 () (g 3.0)))"] {
        let parsed = parse(&tokenize(src)).unwrap();
        let reparsed = parse(&tokenize(&parsed.to_string())).unwrap();

        assert_eq!(parsed, reparsed, "round trip failed for '{src}'");
    }

    // Evaluated values round trip too: a real result prints with its
    // decimal point so it re-reads as a real.
    let value = eval_value(&mut env, "(/ 4 2)");
    assert_eq!(parse(&tokenize(&value.to_string())).unwrap(), real(2.0));
}

#[test]
fn session_state_survives_errors() {
    let mut env = Environment::standard();

    assert!(eval_source("(define x 10)", &mut env).unwrap().is_none());
    assert!(eval_source("(+ x zzz)", &mut env).is_err());

    // The earlier binding is untouched by the failed evaluation.
    assert_eq!(eval_value(&mut env, "x"), integer(10));
}
