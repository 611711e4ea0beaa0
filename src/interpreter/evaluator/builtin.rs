use std::f64::consts;

use crate::{
    ast::{Expr, Number, PrimitiveFn, Procedure},
    error::RuntimeError,
    interpreter::evaluator::core::{Environment, EvalResult},
    util::num::{f64_to_i64_checked, gcd_u64},
};

/// Checks that a primitive received exactly `expected` arguments.
///
/// The evaluator itself never counts arguments; every primitive rejects a
/// bad argument list through this helper.
fn check_arity(name: &'static str, args: &[Expr], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArityMismatch { name, found: args.len() })
    }
}

/// Defines a unary primitive over reals.
///
/// The generated function accepts exactly one numeric argument. Integers
/// are promoted to reals before the host function is applied, and the
/// result is always a real.
macro_rules! real_builtin {
    ($fname:ident, $method:ident) => {
        fn $fname(args: &[Expr]) -> EvalResult<Expr> {
            check_arity(stringify!($fname), args, 1)?;
            Ok(Expr::from(args[0].as_number()?.as_real()?.$method()))
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(tan, tan);
real_builtin!(asin, asin);
real_builtin!(acos, acos);
real_builtin!(atan, atan);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(tanh, tanh);
real_builtin!(sqrt, sqrt);
real_builtin!(exp, exp);
real_builtin!(log2, log2);
real_builtin!(log10, log10);
real_builtin!(fabs, abs);
real_builtin!(degrees, to_degrees);
real_builtin!(radians, to_radians);

/// Defines a unary primitive that rounds a real to an integer.
///
/// Integer arguments pass through unchanged. Real results must fit the
/// exactly representable integer range, or `LiteralTooLarge` is raised.
macro_rules! rounding_builtin {
    ($fname:ident, $method:ident) => {
        fn $fname(args: &[Expr]) -> EvalResult<Expr> {
            check_arity(stringify!($fname), args, 1)?;

            match args[0].as_number()? {
                Number::Integer(n) => Ok(Expr::from(n)),
                Number::Real(r) => {
                    Ok(Expr::from(f64_to_i64_checked(r.$method(),
                                                     RuntimeError::LiteralTooLarge)?))
                },
            }
        }
    };
}

rounding_builtin!(floor, floor);
rounding_builtin!(ceil, ceil);
rounding_builtin!(trunc, trunc);

/// Defines a binary primitive over reals.
///
/// Both arguments are promoted to reals and the result is a real.
macro_rules! real_builtin2 {
    ($fname:ident, $method:ident) => {
        fn $fname(args: &[Expr]) -> EvalResult<Expr> {
            check_arity(stringify!($fname), args, 2)?;

            let x = args[0].as_number()?.as_real()?;
            let y = args[1].as_number()?.as_real()?;

            Ok(Expr::from(x.$method(y)))
        }
    };
}

real_builtin2!(pow, powf);
real_builtin2!(atan2, atan2);
real_builtin2!(hypot, hypot);
real_builtin2!(copysign, copysign);

/// Floating-point remainder with the sign of the dividend.
fn fmod(args: &[Expr]) -> EvalResult<Expr> {
    check_arity("fmod", args, 2)?;

    let x = args[0].as_number()?.as_real()?;
    let y = args[1].as_number()?.as_real()?;

    if y == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(Expr::from(x % y))
}

/// Natural logarithm, or logarithm in an explicit base.
///
/// Accepts one or two arguments, like the host `log(x[, base])`.
fn log(args: &[Expr]) -> EvalResult<Expr> {
    match args {
        [x] => Ok(Expr::from(x.as_number()?.as_real()?.ln())),

        [x, base] => {
            let x = x.as_number()?.as_real()?;
            let base = base.as_number()?.as_real()?;
            Ok(Expr::from(x.log(base)))
        },

        _ => Err(RuntimeError::ArityMismatch { name:  "log",
                                               found: args.len(), }),
    }
}

/// Extracts an integer argument, rejecting reals.
fn integer_arg(arg: &Expr) -> EvalResult<i64> {
    match arg.as_number()? {
        Number::Integer(n) => Ok(n),
        Number::Real(_) => Err(RuntimeError::ExpectedInteger { found: arg.to_string() }),
    }
}

/// Greatest common divisor of two integers.
fn gcd(args: &[Expr]) -> EvalResult<Expr> {
    check_arity("gcd", args, 2)?;

    let a = integer_arg(&args[0])?;
    let b = integer_arg(&args[1])?;

    let divisor = gcd_u64(a.unsigned_abs(), b.unsigned_abs());

    i64::try_from(divisor).map(Expr::from)
                          .map_err(|_| RuntimeError::Overflow)
}

/// Applies a binary arithmetic operator with numeric-tower promotion.
///
/// Two integers stay exact (checked, surfacing `Overflow`); any real
/// operand promotes the whole operation to reals.
fn numeric_op(name: &'static str,
              args: &[Expr],
              int_op: fn(i64, i64) -> Option<i64>,
              real_op: fn(f64, f64) -> f64)
              -> EvalResult<Expr> {
    check_arity(name, args, 2)?;

    let left = args[0].as_number()?;
    let right = args[1].as_number()?;

    match (left, right) {
        (Number::Integer(a), Number::Integer(b)) => {
            int_op(a, b).map(Expr::from).ok_or(RuntimeError::Overflow)
        },
        _ => Ok(Expr::from(real_op(left.as_real()?, right.as_real()?))),
    }
}

fn add(args: &[Expr]) -> EvalResult<Expr> {
    numeric_op("+", args, i64::checked_add, |a, b| a + b)
}

fn sub(args: &[Expr]) -> EvalResult<Expr> {
    numeric_op("-", args, i64::checked_sub, |a, b| a - b)
}

fn mul(args: &[Expr]) -> EvalResult<Expr> {
    numeric_op("*", args, i64::checked_mul, |a, b| a * b)
}

/// True division: the result is always a real, even for two integers.
fn div(args: &[Expr]) -> EvalResult<Expr> {
    check_arity("/", args, 2)?;

    let dividend = args[0].as_number()?.as_real()?;
    let divisor = args[1].as_number()?.as_real()?;

    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(Expr::from(dividend / divisor))
}

/// Math constants seeded into the standard environment.
const CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI),
                                    ("e", consts::E),
                                    ("tau", consts::TAU),
                                    ("inf", f64::INFINITY),
                                    ("nan", f64::NAN)];

/// The fixed set of host primitives seeded into the standard environment.
///
/// Procedures are a closed set: there is no lambda form, so nothing is ever
/// added to this table at runtime.
const PRIMITIVES: &[(&str, PrimitiveFn)] = &[("+", add),
                                             ("-", sub),
                                             ("*", mul),
                                             ("/", div),
                                             ("sin", sin),
                                             ("cos", cos),
                                             ("tan", tan),
                                             ("asin", asin),
                                             ("acos", acos),
                                             ("atan", atan),
                                             ("sinh", sinh),
                                             ("cosh", cosh),
                                             ("tanh", tanh),
                                             ("sqrt", sqrt),
                                             ("exp", exp),
                                             ("log", log),
                                             ("log2", log2),
                                             ("log10", log10),
                                             ("fabs", fabs),
                                             ("floor", floor),
                                             ("ceil", ceil),
                                             ("trunc", trunc),
                                             ("degrees", degrees),
                                             ("radians", radians),
                                             ("pow", pow),
                                             ("atan2", atan2),
                                             ("fmod", fmod),
                                             ("hypot", hypot),
                                             ("copysign", copysign),
                                             ("gcd", gcd)];

/// Seeds an environment with the standard constants and primitives.
///
/// Called once by [`Environment::standard`]; later `define` forms may
/// shadow any of these bindings, since the environment is one flat table.
pub fn install(env: &mut Environment) {
    for (name, value) in CONSTANTS {
        env.define(*name, Expr::from(*value));
    }

    for (name, func) in PRIMITIVES {
        env.define(*name, Expr::Procedure(Procedure::new(*name, *func)));
    }
}
