//! Area units (`Length × Length`).
//!
//! Scales are squares of the length prefixes, so a square centimetre is `1/10^4 m²`.
//!
//! ```rust
//! use sival_core::scale::Unity;
//! use sival_core::units::area::{SquareCentimeters, SquareMeters};
//! use sival_core::units::length::{CM, M};
//!
//! let a = (4 * M) * (321 * CM);
//! assert_eq!(a, SquareCentimeters::new(128_400));
//! assert_eq!(a.convert::<f64, Unity>().value(), 12.84);
//! assert!(a > SquareMeters::new(12));
//! ```

use crate::declare::Base;
use crate::dimension::MulDim;
use crate::scale::{Centi, Kilo, ScaleProduct};
use crate::Quantity;

use super::length::Length;

/// Dimension of area: L².
pub type Area = MulDim<Length, Length>;

/// An area in square metres.
pub type SquareMeters<V> = Base<V, Area>;
/// An area in square centimetres (`1 cm² = 10^-4 m²`).
pub type SquareCentimeters<V> = Quantity<V, ScaleProduct<Centi, Centi>, Area>;
/// An area in square kilometres (`1 km² = 10^6 m²`).
pub type SquareKilometers<V> = Quantity<V, ScaleProduct<Kilo, Kilo>, Area>;

/// One square centimetre.
pub const CM2: SquareCentimeters<i32> = SquareCentimeters::new(1);
/// One square metre.
pub const M2: SquareMeters<i32> = SquareMeters::new(1);
/// One square kilometre.
pub const KM2: SquareKilometers<i32> = SquareKilometers::new(1);
