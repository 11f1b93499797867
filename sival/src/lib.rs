//! Compile-time dimensional analysis for SI quantities.
//!
//! `sival` is the user-facing crate in this workspace. It re-exports the full API from `sival-core` plus the
//! predefined units (lengths, times, areas, velocities, …).
//!
//! The core idea is: a value is a `Quantity<V, S, D>`, where `V` is the payload type, `S` an exact rational scale and
//! `D` a vector of SI base-dimension exponents. Scale and dimension live only in the type, so a quantity costs
//! exactly its payload at runtime, and dimensionally inconsistent expressions do not compile.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to square metres).
//! - Derives result types automatically: `Meters * Meters` is `SquareMeters`, `Meters / Seconds` is
//!   `MetersPerSecond`, `Meters / Centimeters` is a plain number.
//! - Keeps integer arithmetic exact across scales: `4 m + 2 cm` is `402 cm`.
//!
//! # What this crate does not try to solve
//!
//! - Runtime unit parsing or runtime-configurable units.
//! - Non-rational scale factors.
//!
//! # Quick start
//!
//! ```rust
//! use sival::{Centimeters, Meters, CM, M, S};
//! use sival::scale::Unity;
//!
//! let total = 4 * M + 2 * CM;
//! assert_eq!(total, Centimeters::new(402));
//!
//! let metres: Meters<i32> = total.convert();
//! assert_eq!(metres.value(), 4);
//!
//! let precise = total.convert::<f64, Unity>();
//! assert_eq!(precise.value(), 4.02);
//!
//! let speed = (12 * M) / (3 * S);
//! assert_eq!(speed.to_string(), "4 m·s^-1");
//! ```
//!
//! Dividing two quantities of the same dimension yields a plain number:
//!
//! ```rust
//! use sival::{Centimeters, Meters};
//!
//! let ratio: f64 = Meters::new(4.0) / Centimeters::new(160);
//! assert_eq!(ratio, 2.5);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding quantities of different dimensions:
//!
//! ```compile_fail
//! use sival::{Meters, SquareMeters};
//!
//! let _ = Meters::new(1) + SquareMeters::new(1);
//! ```
//!
//! Adding a raw number to a quantity:
//!
//! ```compile_fail
//! use sival::Meters;
//!
//! let _ = Meters::new(1) + 7;
//! ```
//!
//! Turning a raw number into a quantity implicitly:
//!
//! ```compile_fail
//! use sival::Meters;
//!
//! let _: Meters<i32> = 7;
//! ```
//!
//! ```compile_fail
//! use sival::Meters;
//!
//! let _: Meters<i32> = 7.into();
//! ```
//!
//! Assigning across dimensions:
//!
//! ```compile_fail
//! use sival::{Meters, SquareMeters};
//!
//! let _: SquareMeters<i32> = Meters::new(1);
//! ```
//!
//! Taking the square root of a dimension with an odd exponent:
//!
//! ```compile_fail
//! use sival::Meters;
//!
//! let _ = Meters::new(49).sqrt();
//! ```
//!
//! Comparing across dimensions:
//!
//! ```compile_fail
//! use sival::{Meters, Seconds};
//!
//! let _ = Meters::new(1) < Seconds::new(1);
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `sival::length` (millimetres, centimetres, metres, kilometres)
//! - `sival::mass` (grams, kilograms)
//! - `sival::time` (nanoseconds to days)
//! - `sival::current` (amperes)
//! - `sival::area`, `sival::volume` (powers of length)
//! - `sival::velocity`, `sival::acceleration` (length over time)
//! - `sival::charge` (current times time)
//! - `sival::frequency` (inverse time)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `sival-core`.
//! - `serde`: enables `serde` support for `Quantity`; serialization is the raw payload only, and
//!   `sival::serde_with_unit` adds the unit.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! sival = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Dimension errors are compile errors. At runtime, payload arithmetic behaves exactly like the payload type.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use sival_core::*;

pub use sival_core::units::acceleration;
pub use sival_core::units::area;
pub use sival_core::units::charge;
pub use sival_core::units::current;
pub use sival_core::units::frequency;
pub use sival_core::units::length;
pub use sival_core::units::mass;
pub use sival_core::units::time;
pub use sival_core::units::velocity;
pub use sival_core::units::volume;

pub use sival_core::units::acceleration::*;
pub use sival_core::units::area::*;
pub use sival_core::units::charge::*;
pub use sival_core::units::current::*;
pub use sival_core::units::frequency::*;
pub use sival_core::units::length::*;
pub use sival_core::units::mass::*;
pub use sival_core::units::time::*;
pub use sival_core::units::velocity::*;
pub use sival_core::units::volume::*;
