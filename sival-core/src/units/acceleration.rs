//! Acceleration units (`Velocity / Time`).

use crate::declare::Base;
use crate::dimension::DivDim;

use super::time::Time;
use super::velocity::Velocity;

/// Dimension of acceleration: L·T⁻².
pub type Acceleration = DivDim<Velocity, Time>;

/// An acceleration in metres per second squared.
pub type MetersPerSecondSquared<V> = Base<V, Acceleration>;

/// One metre per second squared.
pub const M_S2: MetersPerSecondSquared<i32> = MetersPerSecondSquared::new(1);
