//! Fast power approximation using IEEE 754 bit manipulation
//!
//! Computes `base^exponent` with a single linear transform of the base's
//! bit pattern instead of an exp/log evaluation.
//!
//! # Algorithm
//!
//! For a positive normal f32, the integer interpretation of the bit
//! pattern is approximately linear in the base-2 logarithm of the value:
//!
//! ```text
//! to_int_bits(x) ≈ 2²³ · (log₂(x) + 127 - σ)
//! ```
//!
//! where σ is the error from treating the mantissa linearly instead of
//! logarithmically. Powers are linear in log space, so scaling the integer
//! view around a fixed recentering point approximates the power:
//!
//! ```text
//! y = exponent · (to_int_bits(base) - BIAS) + BIAS
//! approx_pow(base, exponent) = from_int_bits(trunc(y))
//! ```
//!
//! # Error Bounds
//!
//! Error compounds with the exponent magnitude. Against `libm::powf`:
//!
//! - `|exponent| ≤ 1`: a few percent worst case
//! - `|exponent| ≤ 2`: ~13% worst case, typically a few percent
//! - beyond that the worst case grows roughly as `2^(0.06·|exponent|)`,
//!   reaching tens of percent by `|exponent| = 8`
//!
//! The accuracy suite in `tests/accuracy.rs` reports measured maximum and
//! mean error across the supported range.

use crate::bits::{from_int_bits, to_int_bits, truncate_saturating};

/// Recentering constant for the bit-space linear transform.
///
/// Scaling around `127 << 23` alone would leave the full mantissa
/// linearization error in the result; this value is nudged down by
/// ~0.058 · 2²³ to split that error symmetrically across the input and
/// output sides of the transform. Empirically tuned for the f32 encoding;
/// changing it shifts every documented error figure.
const POW_BIAS: i32 = 1_064_866_805;

/// Approximate `base^exponent` for f32.
///
/// One integer subtract, one float multiply-add, one truncation; no
/// branches, no table lookups, no calls into libm.
///
/// # Domain
///
/// `base` must be a positive, finite, normal f32 and `exponent` finite.
/// This is a documented precondition, not a checked one: out-of-domain
/// inputs (zero, negative, subnormal, or non-finite bases; exponents large
/// enough to push the transform outside the i32 range) still return a
/// deterministic f32, but its value is meaningless. The intermediate
/// truncation saturates (see [`crate::bits::truncate_saturating`]), so an
/// overflowing transform yields the `i32::MAX` bit pattern, which decodes
/// as NaN, and an underflowing one yields `-0.0`. The function never
/// panics and never signals an error.
///
/// # Error Bounds
///
/// See the module docs; bounds grow with `|exponent|`.
///
/// # Example
///
/// ```rust
/// use fastpow::approx_pow;
///
/// let y = approx_pow(10.0, 0.5);
/// assert!(((y - 3.1623) / 3.1623).abs() < 0.02);
/// ```
#[inline(always)]
pub fn approx_pow(base: f32, exponent: f32) -> f32 {
    let x = to_int_bits(base);
    // wrapping_sub keeps out-of-domain bit patterns (sign bit set) from
    // panicking in debug builds; in-domain bases never wrap.
    let y = exponent * x.wrapping_sub(POW_BIAS) as f32 + POW_BIAS as f32;
    from_int_bits(truncate_saturating(y))
}
