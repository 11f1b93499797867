//! Mass units.
//!
//! The canonical unit is the SI kilogram ([`Kilograms`], scale 1/1), so the gram carries the scale 1/1000.

use crate::declare::Base;
use crate::scale::Milli;
use crate::Quantity;

pub use crate::dimension::Mass;

/// A mass in kilograms.
pub type Kilograms<V> = Base<V, Mass>;
/// A mass in grams (`1 g = 10^-3 kg`).
pub type Grams<V> = Quantity<V, Milli, Mass>;

/// One gram.
pub const G: Grams<i32> = Grams::new(1);
/// One kilogram.
pub const KG: Kilograms<i32> = Kilograms::new(1);
