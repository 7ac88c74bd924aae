//! Wide arithmetic for the fixed-point weight domain
//!
//! The fixed-point domain maps the real interval [0.0, 1.0] onto
//! [0, `u64::MAX`]. Ratios are computed exactly through a 128-bit
//! intermediate, so no precision is lost between multiply and divide.

/// Image of `1.0` in the fixed-point domain.
pub const FIXED_ONE: u64 = u64::MAX;

/// Scale applied to `log2` results before truncation to an integer.
///
/// `log2` of any `u64` is at most 64.0, and `64 << 57` still fits in a `u64`.
pub const LOG_SCALE: u64 = 1 << 57;

/// Full 64x64 -> 128 bit product, returned as `(hi, lo)`.
#[inline]
#[must_use]
pub fn mul_wide(a: u64, b: u64) -> (u64, u64) {
    let product = u128::from(a) * u128::from(b);
    ((product >> 64) as u64, product as u64)
}

/// Divide the 128-bit value `hi:lo` by `d`, returning `(quotient, remainder)`.
///
/// Returns `None` when `d` is zero or when the quotient would not fit in
/// 64 bits (`hi >= d`).
#[inline]
#[must_use]
pub fn div_wide(hi: u64, lo: u64, d: u64) -> Option<(u64, u64)> {
    if d == 0 || hi >= d {
        return None;
    }
    let n = (u128::from(hi) << 64) | u128::from(lo);
    let d = u128::from(d);
    Some(((n / d) as u64, (n % d) as u64))
}

/// Ratio `a / b` mapped into the fixed-point domain, rounded to nearest.
///
/// The result saturates at [`FIXED_ONE`] when `a > b`. A zero divisor also
/// saturates; normalizers guard their zero cases before calling this.
#[must_use]
pub fn div(a: u64, b: u64) -> u64 {
    if b == 0 {
        return FIXED_ONE;
    }
    let (hi, lo) = mul_wide(a, FIXED_ONE);
    // hi <= a - 1, so adding the carry cannot overflow.
    let (lo, carry) = lo.overflowing_add(b / 2);
    let hi = hi + u64::from(carry);
    match div_wide(hi, lo, b) {
        Some((q, _)) => q,
        None => FIXED_ONE,
    }
}

/// Convert a fixed-point value to a float in [0.0, 1.0].
#[inline]
#[must_use]
pub fn to_float(u: u64) -> f64 {
    u as f64 / FIXED_ONE as f64
}

/// Convert a float in [0.0, 1.0] to the fixed-point domain.
///
/// Values below zero (and NaN) map to 0, values at or above 1.0 map to
/// [`FIXED_ONE`].
#[must_use]
pub fn from_float(f: f64) -> u64 {
    if f.is_nan() || f <= 0.0 {
        0
    } else if f >= 1.0 {
        FIXED_ONE
    } else {
        // `as` saturates if rounding pushes the product to 2^64.
        (f * FIXED_ONE as f64) as u64
    }
}

/// Base-2 logarithm of `u` scaled by [`LOG_SCALE`].
///
/// This is the only place the fixed-point family touches floating point.
/// The error is bounded by one float rounding per call and never
/// accumulates. `log2(0)` is defined as 0 here.
#[must_use]
pub fn log2(u: u64) -> u64 {
    if u == 0 {
        return 0;
    }
    ((u as f64).log2() * LOG_SCALE as f64) as u64
}
