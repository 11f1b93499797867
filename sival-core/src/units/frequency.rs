//! Frequency units (`1 / Time`).
//!
//! Dividing a raw number by a time yields a frequency:
//!
//! ```rust
//! use sival_core::units::frequency::Hertz;
//! use sival_core::units::time::S;
//!
//! assert_eq!(36 / (12 * S), Hertz::new(3));
//! ```

use crate::declare::Base;
use crate::dimension::InvDim;
use crate::scale::Kilo;
use crate::Quantity;

use super::time::Time;

/// Dimension of frequency: T⁻¹.
pub type Frequency = InvDim<Time>;

/// A frequency in hertz.
pub type Hertz<V> = Base<V, Frequency>;
/// A frequency in kilohertz.
pub type Kilohertz<V> = Quantity<V, Kilo, Frequency>;

/// One hertz.
pub const HZ: Hertz<i32> = Hertz::new(1);
/// One kilohertz.
pub const KHZ: Kilohertz<i32> = Kilohertz::new(1);
