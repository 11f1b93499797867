//! Volume units (`Length × Length × Length`).

use crate::declare::Base;
use crate::dimension::MulDim;
use crate::scale::{Centi, Milli, ScaleProduct};
use crate::Quantity;

use super::area::Area;
use super::length::Length;

/// Dimension of volume: L³.
pub type Volume = MulDim<Area, Length>;

/// A volume in cubic metres.
pub type CubicMeters<V> = Base<V, Volume>;
/// A volume in litres (`1 L = 10^-3 m³`).
pub type Liters<V> = Quantity<V, Milli, Volume>;
/// A volume in cubic centimetres (`1 cm³ = 10^-6 m³`).
pub type CubicCentimeters<V> = Quantity<V, ScaleProduct<ScaleProduct<Centi, Centi>, Centi>, Volume>;

/// One cubic metre.
pub const M3: CubicMeters<i32> = CubicMeters::new(1);
/// One litre.
pub const L: Liters<i32> = Liters::new(1);
