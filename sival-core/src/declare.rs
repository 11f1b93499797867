//! Declarative type constructors.
//!
//! These aliases are how unit modules (and downstream crates) name quantity types without spelling out the
//! type-level arithmetic:
//!
//! ```rust
//! use sival_core::declare::{Base, Product, Quotient, Root, Scaled};
//! use sival_core::dimension::{Length, Time};
//! use sival_core::scale::Kilo;
//!
//! type Metres = Base<f64, Length>;
//! type Kilometres = Scaled<Metres, Kilo>;
//! type Seconds = Base<f64, Time>;
//! type Speed = Quotient<Kilometres, Seconds>;
//! type Area = Product<Metres, Metres>;
//!
//! let v: Speed = Kilometres::new(3.0) / Seconds::new(2.0);
//! assert_eq!(v.value(), 1.5);
//!
//! let side: Root<Area> = Area::new(16.0).sqrt();
//! assert_eq!(side, Metres::new(4.0));
//! ```

use crate::dimension::{Dimension, HalfDim, IsBaseDimension};
use crate::numeric::Numeric;
use crate::quantity::Quantity;
use crate::scale::{Scale, ScaleProduct, Unity};
use core::ops::{Div, Mul};

/// Projects the three tags out of a quantity type.
pub trait QuantityType {
    /// Payload type.
    type Value: Numeric;
    /// Scale.
    type Scale: Scale;
    /// Dimension.
    type Dim: Dimension;
}

impl<V: Numeric, S: Scale, D: Dimension> QuantityType for Quantity<V, S, D> {
    type Value = V;
    type Scale = S;
    type Dim = D;
}

/// The canonical (scale 1/1) quantity type of a dimension.
///
/// Intended for the seven base dimensions; [`base`] enforces that at the value level.
pub type Base<V, D> = Quantity<V, Unity, D>;

/// `Q` with its scale multiplied by `R` (`Scaled<Meters<V>, Kilo>` is kilometres).
pub type Scaled<Q, R> = Quantity<
    <Q as QuantityType>::Value,
    ScaleProduct<<Q as QuantityType>::Scale, R>,
    <Q as QuantityType>::Dim,
>;

/// `Q` with its scale replaced by `S`.
pub type WithScale<Q, S> = Quantity<<Q as QuantityType>::Value, S, <Q as QuantityType>::Dim>;

/// `Q` with its payload type replaced by `W`.
pub type WithValue<Q, W> = Quantity<W, <Q as QuantityType>::Scale, <Q as QuantityType>::Dim>;

/// Type of `A * B`.
pub type Product<A, B> = <A as Mul<B>>::Output;

/// Type of `A / B`.
pub type Quotient<A, B> = <A as Div<B>>::Output;

/// Type of `Q::sqrt()`.
pub type Root<Q> = Quantity<
    <<Q as QuantityType>::Value as Numeric>::Root,
    Unity,
    HalfDim<<Q as QuantityType>::Dim>,
>;

/// Builds a base quantity. Only compiles for one of the seven base dimensions.
///
/// ```rust
/// use sival_core::declare::base;
/// use sival_core::dimension::Mass;
/// let m = base::<_, Mass>(3u32);
/// assert_eq!(m.value(), 3);
/// ```
///
/// ```compile_fail
/// use sival_core::declare::base;
/// use sival_core::dimension::{Length, MulDim};
/// let _ = base::<_, MulDim<Length, Length>>(3);
/// ```
#[inline]
pub const fn base<V: Numeric, D: IsBaseDimension>(value: V) -> Base<V, D> {
    Quantity::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Length, MulDim, Time};
    use crate::scale::{Centi, Kilo, Milli};
    use core::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    type Metres = Base<i32, Length>;
    type Seconds = Base<i32, Time>;

    #[test]
    fn scaled_applies_ratio() {
        assert!(same::<Scaled<Metres, Kilo>, Quantity<i32, Kilo, Length>>());
        assert!(same::<Scaled<Scaled<Metres, Kilo>, Milli>, Metres>());
        assert!(same::<WithScale<Metres, Centi>, Quantity<i32, Centi, Length>>());
        assert!(same::<WithValue<Metres, f32>, Base<f32, Length>>());
    }

    #[test]
    fn product_and_quotient() {
        assert!(same::<Product<Metres, Metres>, Base<i32, MulDim<Length, Length>>>());
        assert!(same::<Quotient<Metres, Metres>, i32>());
        assert!(same::<Quotient<Metres, Base<f64, Length>>, f64>());
        assert!(same::<Product<Seconds, i32>, Seconds>());
    }

    #[test]
    fn root_matches_sqrt_output() {
        type Area = Product<Metres, Metres>;
        let side: Root<Area> = Area::new(9).sqrt();
        assert_eq!(side.value(), 3.0);
        assert!(same::<Root<Area>, Base<f64, Length>>());
    }

    #[test]
    fn base_constructor() {
        let t = base::<_, Time>(5i64);
        assert_eq!(t.value(), 5);
    }
}
