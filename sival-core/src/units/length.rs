//! Length units.
//!
//! The canonical unit is the SI metre ([`Meters`], scale 1/1). Every other unit is the metre with an SI prefix
//! applied.
//!
//! ```rust
//! use sival_core::scale::Unity;
//! use sival_core::units::length::{Centimeters, Meters, CM, M};
//!
//! let total = 4 * M + 2 * CM;
//! assert_eq!(total, Centimeters::new(402));
//! assert_eq!(total.convert::<i32, Unity>(), Meters::new(4));
//! ```

use crate::declare::Base;
use crate::scale::{Centi, Kilo, Milli};
use crate::Quantity;

pub use crate::dimension::Length;

/// A length in metres.
pub type Meters<V> = Base<V, Length>;
/// A length in millimetres (`1 mm = 10^-3 m`).
pub type Millimeters<V> = Quantity<V, Milli, Length>;
/// A length in centimetres (`1 cm = 10^-2 m`).
pub type Centimeters<V> = Quantity<V, Centi, Length>;
/// A length in kilometres (`1 km = 10^3 m`).
pub type Kilometers<V> = Quantity<V, Kilo, Length>;

/// One millimetre.
pub const MM: Millimeters<i32> = Millimeters::new(1);
/// One centimetre.
pub const CM: Centimeters<i32> = Centimeters::new(1);
/// One metre.
pub const M: Meters<i32> = Meters::new(1);
/// One kilometre.
pub const KM: Kilometers<i32> = Kilometers::new(1);
