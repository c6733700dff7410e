//! Test utilities for fastpow
//!
//! Provides the oracle wrapper, error helpers, and proptest strategies
//! shared by the accuracy and property suites.

#![allow(dead_code)]

use proptest::prelude::*;

/// Reference oracle: exact power via libm.
///
/// The core never calls this; it exists purely to measure the
/// approximation's error.
#[inline]
pub fn ref_pow(base: f32, exponent: f32) -> f32 {
    libm::powf(base, exponent)
}

/// Relative error `|actual - expected| / |expected|`.
pub fn relative_error(actual: f32, expected: f32) -> f32 {
    if expected.abs() < 1e-10 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

/// Strategy for bases in the supported domain: positive normal f32 in
/// `[0.1, 100]`.
pub fn supported_base() -> impl Strategy<Value = f32> {
    (0.1f32..=100.0f32).prop_filter("normal", |x| x.is_normal())
}

/// Strategy for exponents across the full tested range `[-10, 10]`.
pub fn moderate_exponent() -> impl Strategy<Value = f32> {
    -10.0f32..=10.0f32
}

/// Strategy for exponents where the documented error bound is tight:
/// `[-5, 5]`.
pub fn small_exponent() -> impl Strategy<Value = f32> {
    -5.0f32..=5.0f32
}
