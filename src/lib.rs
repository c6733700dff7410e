#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! fastpow: approximate f32 power via IEEE 754 bit manipulation
//!
//! The crate is a single pure kernel: reinterpret the base's bits as an
//! integer, apply a linear transform keyed on the exponent, reinterpret
//! back. No allocation, no I/O, no shared state; every call operates on
//! its own stack locals and is trivially safe to run from any thread.
//!
//! # Modules
//!
//! - `pow`: the power approximation itself
//! - `bits`: the f32/i32 reinterpretation seam and the truncation policy
//!
//! # Quick Start
//!
//! ```rust
//! use fastpow::approx_pow;
//!
//! // Harmonic amplitude weighting: 1 / n^1.5 per partial
//! let partial = 3.0_f32;
//! let amplitude = approx_pow(partial, -1.5);
//! assert!((amplitude - 0.192).abs() < 0.05);
//! ```

// Reference oracle for accuracy tests and the comparison demo; the core
// kernel never calls it.
extern crate libm;

// Bit-pattern reinterpretation
pub mod bits;

// Fast power kernel
pub mod pow;

// Public re-export for convenience
pub use pow::approx_pow;
