//! Velocity units (`Length / Time`).
//!
//! ```rust
//! use sival_core::units::length::Meters;
//! use sival_core::units::time::Seconds;
//! use sival_core::units::velocity::MetersPerSecond;
//!
//! let v = Meters::new(12) / Seconds::new(3);
//! assert_eq!(v, MetersPerSecond::new(4));
//! ```

use crate::declare::Base;
use crate::dimension::DivDim;
use crate::scale::{Hourly, Kilo, ScaleQuotient};
use crate::Quantity;

use super::length::Length;
use super::time::Time;

/// Dimension of velocity: L·T⁻¹.
pub type Velocity = DivDim<Length, Time>;

/// A velocity in metres per second.
pub type MetersPerSecond<V> = Base<V, Velocity>;
/// A velocity in kilometres per hour.
pub type KilometersPerHour<V> = Quantity<V, ScaleQuotient<Kilo, Hourly>, Velocity>;

/// One metre per second.
pub const M_S: MetersPerSecond<i32> = MetersPerSecond::new(1);
