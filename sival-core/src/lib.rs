//! Core type system for compile-time dimensional analysis.
//!
//! `sival-core` encodes a physical quantity as the triple *(payload type, scale, dimension)*:
//!
//! - The payload is an ordinary number (`i32`, `i64`, `u32`, `u64`, `f32` or `f64`), see [`numeric`].
//! - The scale is an exact positive fraction fixed at compile time ([`scale::Ratio`]), e.g. `1/100` for centimetres.
//! - The dimension is a vector of integer exponents over the seven SI base dimensions ([`dimension::Dim`]).
//!
//! A value tagged this way is a [`Quantity<V, S, D>`]. The tag is pure type information, so a quantity has exactly
//! the size of its payload. The type checker then does the dimensional analysis:
//!
//! - `+`, `-` and comparisons require equal dimensions and work across scales.
//! - `*` and `/` combine scales and dimensions into a new quantity type.
//! - Dividing two quantities of the same dimension yields a plain number.
//! - `sqrt` exists only when every exponent is even.
//!
//! Most users should depend on `sival` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time rejection of dimensionally inconsistent expressions.
//! - Exact scale bookkeeping: sums of integer payloads in different scales are computed in their common measure, so
//!   `4 m + 2 cm` is exactly `402 cm`.
//! - Zero runtime overhead for the tags (phantom types only; scale factors are `const`).
//!
//! # What this crate does not try to solve
//!
//! - Parsing unit strings or choosing units at runtime.
//! - Irrational or runtime-configurable scale factors.
//! - Affine units (degrees Celsius) and logarithmic units.
//!
//! # Quick start
//!
//! ```rust
//! use sival_core::scale::Unity;
//! use sival_core::units::area::SquareMeters;
//! use sival_core::units::length::{Centimeters, Meters, CM, M};
//! use sival_core::units::time::S;
//! use sival_core::units::velocity::MetersPerSecond;
//!
//! let total = 4 * M + 2 * CM;
//! assert_eq!(total, Centimeters::new(402));
//! assert_eq!(total.convert::<i32, Unity>(), Meters::new(4));
//!
//! let area: SquareMeters<i32> = (4 * M) * (3 * M);
//! assert_eq!(area.value(), 12);
//!
//! let speed = (12 * M) / (3 * S);
//! assert_eq!(speed, MetersPerSecond::new(4));
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `sival-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! sival-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point `sqrt` and `abs` are provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the raw payload only. The
//!   [`serde_with_unit`] helper module keeps the unit next to the value.
//!
//! # Panics and errors
//!
//! Dimension errors are compile errors; the core operations have no error type and do not return `Result`. Payload
//! arithmetic follows the payload type (integer overflow, division by zero and NaN propagation behave as they do for
//! the bare number). The runtime reflection helpers report invalid input through [`RationalError`] and
//! [`dimension::DimensionError`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod declare;
pub mod dimension;
pub mod numeric;
pub mod ops;
mod quantity;
mod rational;
pub mod scale;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{Dim, Dimension, DimensionVector, Dimensionless};
pub use numeric::{Numeric, Promote};
pub use quantity::{Quantity, UnitSymbol};
pub use rational::{gcd, lcm, Rational, RationalError};
pub use scale::{Ratio, Scale};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
pub mod units;

pub use units::acceleration;
pub use units::area;
pub use units::charge;
pub use units::current;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::time;
pub use units::velocity;
pub use units::volume;
