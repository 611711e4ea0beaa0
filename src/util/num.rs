/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the magnitude exceeds `MAX_SAFE_INT`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(f64)`: The converted value if it is safe.
/// - `Err(error)`: If the value is too large.
///
/// ## Example
/// ```
/// use lisplet::util::num::{MAX_SAFE_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
///
/// let big = MAX_SAFE_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if and only if it is an integer value
/// in the exactly representable range.
///
/// ## Errors
/// Returns `Err(error)` if the value is not finite, has a fractional part,
/// or exceeds `MAX_SAFE_INT` in magnitude.
///
/// ## Parameters
/// - `value`: The float to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Returns
/// - `Ok(i64)`: The converted value if it is safe.
/// - `Err(error)`: If the value cannot be represented.
///
/// ## Example
/// ```
/// use lisplet::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(3.0, "not an integer").unwrap(), 3);
/// assert!(f64_to_i64_checked(3.5, "not an integer").is_err());
/// assert!(f64_to_i64_checked(f64::NAN, "not an integer").is_err());
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() > MAX_SAFE_INT as f64 {
        return Err(error);
    }
    Ok(value as i64)
}

/// Greatest common divisor by Euclid's algorithm.
///
/// `gcd_u64(0, 0)` is `0`, matching the host convention.
///
/// ## Example
/// ```
/// use lisplet::util::num::gcd_u64;
///
/// assert_eq!(gcd_u64(12, 18), 6);
/// assert_eq!(gcd_u64(7, 0), 7);
/// ```
#[must_use]
pub const fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
