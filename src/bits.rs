//! Bit-pattern reinterpretation between f32 and i32
//!
//! The power kernel operates on the raw IEEE 754 bit pattern of its input:
//! sign(1) | exponent(8, biased by 127) | mantissa(23). Both views always
//! refer to the same 32 bits; the conversions here are reinterpretations,
//! never numeric casts. Keeping them in one place also pins down the one
//! genuinely implementation-defined step of the transform, the truncating
//! float-to-int conversion.

/// Reinterpret an f32's bit pattern as a signed 32-bit integer.
///
/// This is a transmute of the raw bits, not a numeric conversion:
/// `to_int_bits(1.0)` is `0x3F80_0000`, not `1`.
#[inline(always)]
pub fn to_int_bits(x: f32) -> i32 {
    x.to_bits() as i32
}

/// Reinterpret a signed 32-bit integer as an f32 bit pattern.
///
/// Inverse of [`to_int_bits`]; round-trips every bit pattern exactly,
/// including NaN payloads.
#[inline(always)]
pub fn from_int_bits(bits: i32) -> f32 {
    f32::from_bits(bits as u32)
}

/// Truncate an f32 toward zero, saturating at the i32 range.
///
/// Rust's `as` conversion gives the well-defined policy this crate commits
/// to: values beyond `i32::MAX`/`i32::MIN` clamp to those bounds, and NaN
/// maps to 0. (C leaves this conversion undefined for out-of-range values;
/// saturation is the documented choice here.)
#[inline(always)]
pub fn truncate_saturating(x: f32) -> i32 {
    x as i32
}
