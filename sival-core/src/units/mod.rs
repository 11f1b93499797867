//! Predefined units grouped by dimension.
//!
//! Every module exposes quantity aliases that are generic over the payload type (`Meters<V>`, `Seconds<V>`, …) and
//! `i32` constants worth one unit (`M`, `S`, …). Multiplying a raw number by such a constant is the sanctioned way to
//! tag a literal:
//!
//! ```rust
//! use sival_core::units::length::{Meters, KM, M};
//!
//! let d = 7 * KM;
//! let m: Meters<i32> = d.convert();
//! assert_eq!(m, 7000 * M);
//! ```
//!
//! ## Modules
//!
//! - [`length`]: millimetres to kilometres (SI metre is the canonical unit).
//! - [`mass`]: grams and kilograms (SI kilogram is the canonical unit).
//! - [`time`]: nanoseconds to days (SI second is the canonical unit).
//! - [`current`]: amperes.
//! - [`area`]: `Length × Length`.
//! - [`volume`]: `Length × Length × Length`.
//! - [`velocity`]: `Length / Time`.
//! - [`acceleration`]: `Velocity / Time`.
//! - [`charge`]: `Current × Time`.
//! - [`frequency`]: `1 / Time`.

pub mod acceleration;
pub mod area;
pub mod charge;
pub mod current;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod time;
pub mod velocity;
pub mod volume;
