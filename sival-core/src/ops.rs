//! Arithmetic on quantities.
//!
//! | Expression      | Requires             | Scale                     | Dimension  | Payload          |
//! |-----------------|----------------------|---------------------------|------------|------------------|
//! | `a + b`, `a - b`| same dimension       | common measure of scales  | unchanged  | promoted         |
//! | `a * b`         | –                    | product                   | sum        | promoted         |
//! | `a / b`         | different dimensions | quotient                  | difference | promoted         |
//! | `a / b`         | same dimension       | – (plain number)          | –          | promoted         |
//! | `a * k`, `a / k`| `k` of the payload type | unchanged              | unchanged  | unchanged        |
//! | `k / a`         | `k` of the payload type | reciprocal             | negated    | unchanged        |
//! | `a.sqrt()`      | all exponents even   | 1/1                       | halved     | `V::Root`        |
//!
//! Operations that the table does not allow have no impl, so they fail to compile:
//!
//! ```compile_fail
//! use sival_core::units::{area::SquareMeters, length::Meters};
//! let _ = Meters::new(3) + SquareMeters::new(4);
//! ```
//!
//! ```compile_fail
//! use sival_core::units::length::Meters;
//! let _ = Meters::new(3) + 7;
//! ```
//!
//! ```compile_fail
//! use sival_core::units::length::Meters;
//! let _ = Meters::new(49).sqrt();
//! ```
//!
//! ```compile_fail
//! use sival_core::units::length::Meters;
//! let mut side = Meters::new(7);
//! side *= Meters::new(7);
//! ```

use crate::dimension::{DimAdd, DimHalf, DimNeg, DimSub, Dimension, Dimensionless, DivDim, HalfDim, InvDim, MulDim};
use crate::numeric::{rebase, rebase_wide, scaled_div, Numeric, Promote, Promoted};
use crate::quantity::Quantity;
use crate::scale::{
    CommonMeasure, CommonScale, InvScale, Rebase, Scale, ScaleDiv, ScaleInv, ScaleMul, ScaleProduct, ScaleQuotient,
    Unity,
};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use typenum::{NInt, NonZero, PInt, Unsigned, Z0};

// ─────────────────────────────────────────────────────────────────────────────
// Addition & subtraction
// ─────────────────────────────────────────────────────────────────────────────

/// Rebases a payload from scale `From` into the common measure `To` in its promoted type.
///
/// `From / To` is integral whenever `To` is the common measure of `From` and another scale. Panics when the
/// rebased value does not fit in `P`.
#[inline]
fn into_common<P: Numeric, From: Scale, To: Scale>(value: P) -> P {
    let factor = Rebase::<From, To>::FACTOR;
    rebase(value, factor.multiplier(), factor.divider())
}

impl<V1, V2, S1, S2, D> Add<Quantity<V2, S2, D>> for Quantity<V1, S1, D>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: CommonScale<S2>,
    S2: Scale,
    D: Dimension,
{
    type Output = Quantity<Promoted<V1, V2>, CommonMeasure<S1, S2>, D>;

    #[inline]
    fn add(self, rhs: Quantity<V2, S2, D>) -> Self::Output {
        let lhs = into_common::<_, S1, CommonMeasure<S1, S2>>(V1::widen(self.value()));
        let rhs = into_common::<_, S2, CommonMeasure<S1, S2>>(V1::widen_rhs(rhs.value()));
        Quantity::new(lhs + rhs)
    }
}

impl<V1, V2, S1, S2, D> Sub<Quantity<V2, S2, D>> for Quantity<V1, S1, D>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: CommonScale<S2>,
    S2: Scale,
    D: Dimension,
{
    type Output = Quantity<Promoted<V1, V2>, CommonMeasure<S1, S2>, D>;

    #[inline]
    fn sub(self, rhs: Quantity<V2, S2, D>) -> Self::Output {
        let lhs = into_common::<_, S1, CommonMeasure<S1, S2>>(V1::widen(self.value()));
        let rhs = into_common::<_, S2, CommonMeasure<S1, S2>>(V1::widen_rhs(rhs.value()));
        Quantity::new(lhs - rhs)
    }
}

/// Adds a quantity of any scale and payload, truncating into the left operand's type.
impl<V1, V2, S1, S2, D> AddAssign<Quantity<V2, S2, D>> for Quantity<V1, S1, D>
where
    V1: Numeric,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    D: Dimension,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<V2, S2, D>) {
        *self = Self::new(self.value() + rhs.convert::<V1, S1>().value());
    }
}

/// Subtracts a quantity of any scale and payload, truncating into the left operand's type.
impl<V1, V2, S1, S2, D> SubAssign<Quantity<V2, S2, D>> for Quantity<V1, S1, D>
where
    V1: Numeric,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    D: Dimension,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<V2, S2, D>) {
        *self = Self::new(self.value() - rhs.convert::<V1, S1>().value());
    }
}

impl<V, S, D> Neg for Quantity<V, S, D>
where
    V: Numeric + Neg<Output = V>,
    S: Scale,
    D: Dimension,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplication & division
// ─────────────────────────────────────────────────────────────────────────────

impl<V1, V2, S1, S2, D1, D2> Mul<Quantity<V2, S2, D2>> for Quantity<V1, S1, D1>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: ScaleMul<S2>,
    S2: Scale,
    D1: DimAdd<D2>,
    D2: Dimension,
{
    type Output = Quantity<Promoted<V1, V2>, ScaleProduct<S1, S2>, MulDim<D1, D2>>;

    #[inline]
    fn mul(self, rhs: Quantity<V2, S2, D2>) -> Self::Output {
        Quantity::new(V1::widen(self.value()) * V1::widen_rhs(rhs.value()))
    }
}

/// Result of dividing payloads stored at scales `S1` and `S2` when the quotient has dimension `Self`.
///
/// A dimensionless quotient is a plain number, rebased by `S1 / S2`. Every other quotient is a quantity whose
/// scale is `S1 / S2` and whose payload is the raw ratio.
pub trait DivisionResult<P: Numeric, S1: Scale, S2: Scale>: Dimension {
    /// A raw `P` or a [`Quantity`].
    type Output;

    /// Divides two payloads already promoted to `P`.
    fn divide(lhs: P, rhs: P) -> Self::Output;
}

impl<P: Numeric, S1: Scale, S2: Scale> DivisionResult<P, S1, S2> for Dimensionless {
    type Output = P;

    #[inline]
    fn divide(lhs: P, rhs: P) -> P {
        let factor = Rebase::<S1, S2>::FACTOR;
        scaled_div(lhs, factor.multiplier(), rhs, factor.divider())
    }
}

macro_rules! impl_dimensioned_division {
    ($([$($free:ident),*] => $dim:ty;)*) => {
        $(
            impl<P, S1, S2, U, $($free),*> DivisionResult<P, S1, S2> for $dim
            where
                P: Numeric,
                S1: ScaleDiv<S2>,
                S2: Scale,
                U: Unsigned + NonZero,
                $dim: Dimension,
            {
                type Output = Quantity<P, ScaleQuotient<S1, S2>, $dim>;

                #[inline]
                fn divide(lhs: P, rhs: P) -> Self::Output {
                    Quantity::new(lhs / rhs)
                }
            }
        )*
    };
}

// One impl per (first non-zero exponent, sign); the exponents before it are zero.
impl_dimensioned_division! {
    [M, T, I, Th, N, J] => crate::dimension::Dim<PInt<U>, M, T, I, Th, N, J>;
    [M, T, I, Th, N, J] => crate::dimension::Dim<NInt<U>, M, T, I, Th, N, J>;
    [T, I, Th, N, J] => crate::dimension::Dim<Z0, PInt<U>, T, I, Th, N, J>;
    [T, I, Th, N, J] => crate::dimension::Dim<Z0, NInt<U>, T, I, Th, N, J>;
    [I, Th, N, J] => crate::dimension::Dim<Z0, Z0, PInt<U>, I, Th, N, J>;
    [I, Th, N, J] => crate::dimension::Dim<Z0, Z0, NInt<U>, I, Th, N, J>;
    [Th, N, J] => crate::dimension::Dim<Z0, Z0, Z0, PInt<U>, Th, N, J>;
    [Th, N, J] => crate::dimension::Dim<Z0, Z0, Z0, NInt<U>, Th, N, J>;
    [N, J] => crate::dimension::Dim<Z0, Z0, Z0, Z0, PInt<U>, N, J>;
    [N, J] => crate::dimension::Dim<Z0, Z0, Z0, Z0, NInt<U>, N, J>;
    [J] => crate::dimension::Dim<Z0, Z0, Z0, Z0, Z0, PInt<U>, J>;
    [J] => crate::dimension::Dim<Z0, Z0, Z0, Z0, Z0, NInt<U>, J>;
    [] => crate::dimension::Dim<Z0, Z0, Z0, Z0, Z0, Z0, PInt<U>>;
    [] => crate::dimension::Dim<Z0, Z0, Z0, Z0, Z0, Z0, NInt<U>>;
}

/// Quantity ÷ quantity. Same-dimension division yields a plain number.
///
/// ```rust
/// use sival_core::units::charge::Coulombs;
/// use sival_core::units::current::Amperes;
/// use sival_core::units::length::{Centimeters, Meters};
/// use sival_core::units::time::Seconds;
///
/// assert_eq!(Coulombs::new(8) / Amperes::new(2), Seconds::new(4));
///
/// let ratio: i32 = Meters::new(4) / Centimeters::new(160);
/// assert_eq!(ratio, 2);
/// ```
impl<V1, V2, S1, S2, D1, D2> Div<Quantity<V2, S2, D2>> for Quantity<V1, S1, D1>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    D1: DimSub<D2>,
    D2: Dimension,
    DivDim<D1, D2>: DivisionResult<Promoted<V1, V2>, S1, S2>,
{
    type Output = <DivDim<D1, D2> as DivisionResult<Promoted<V1, V2>, S1, S2>>::Output;

    #[inline]
    fn div(self, rhs: Quantity<V2, S2, D2>) -> Self::Output {
        <DivDim<D1, D2> as DivisionResult<Promoted<V1, V2>, S1, S2>>::divide(
            V1::widen(self.value()),
            V1::widen_rhs(rhs.value()),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw scalars
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<S: Scale, D: Dimension> Mul<$t> for Quantity<$t, S, D> {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Self::new(self.value() * rhs)
                }
            }

            impl<S: Scale, D: Dimension> Mul<Quantity<$t, S, D>> for $t {
                type Output = Quantity<$t, S, D>;

                #[inline]
                fn mul(self, rhs: Quantity<$t, S, D>) -> Self::Output {
                    Quantity::new(self * rhs.value())
                }
            }

            impl<S: Scale, D: Dimension> Div<$t> for Quantity<$t, S, D> {
                type Output = Self;

                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Self::new(self.value() / rhs)
                }
            }

            impl<S: ScaleInv, D: DimNeg> Div<Quantity<$t, S, D>> for $t {
                type Output = Quantity<$t, InvScale<S>, InvDim<D>>;

                #[inline]
                fn div(self, rhs: Quantity<$t, S, D>) -> Self::Output {
                    Quantity::new(self / rhs.value())
                }
            }

            impl<S: Scale, D: Dimension> MulAssign<$t> for Quantity<$t, S, D> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    *self = Self::new(self.value() * rhs);
                }
            }

            impl<S: Scale, D: Dimension> DivAssign<$t> for Quantity<$t, S, D> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    *self = Self::new(self.value() / rhs);
                }
            }
        )*
    };
}

// Raw scalars share the payload type.
impl_scalar_ops!(i32, i64, u32, u64, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Square root
// ─────────────────────────────────────────────────────────────────────────────

impl<V: Numeric, S: Scale, D: DimHalf> Quantity<V, S, D> {
    /// Square root. Only available when every exponent of `D` is even.
    ///
    /// The payload is first rebased to scale 1/1 (`value × m / d`), then rooted. Integer payloads are rebased
    /// exactly in `i128`, so the product cannot overflow, but the division truncates before the root is taken at a
    /// fine scale.
    ///
    /// ```rust
    /// use sival_core::units::area::SquareKilometers;
    /// use sival_core::units::length::Kilometers;
    ///
    /// let side = SquareKilometers::new(49).sqrt();
    /// assert_eq!(side, Kilometers::new(7));
    /// ```
    #[inline]
    pub fn sqrt(self) -> Quantity<V::Root, Unity, HalfDim<D>> {
        let ratio = S::RATIO;
        let root = if V::INTEGRAL {
            let canonical = rebase_wide(self.value(), ratio.multiplier(), ratio.divider());
            <V::Root as Numeric>::from_f64(Numeric::sqrt(canonical as f64))
        } else {
            rebase::<V, V>(self.value(), ratio.multiplier(), ratio.divider()).sqrt()
        };
        Quantity::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Current, Length, Time};
    use crate::scale::{Centi, Daily, Kilo, Mega, Nano};
    use approx::assert_relative_eq;
    use core::any::TypeId;
    use proptest::prelude::*;

    type M = Quantity<i32, Unity, Length>;
    type Cm = Quantity<i32, Centi, Length>;
    type Km = Quantity<i32, Kilo, Length>;
    type MDbl = Quantity<f64, Unity, Length>;
    type S = Quantity<i32, Unity, Time>;
    type A = Quantity<i32, Unity, Current>;

    fn type_of<T: 'static>(_: &T) -> TypeId {
        TypeId::of::<T>()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Addition & subtraction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_uses_common_measure() {
        let sum = M::new(4) + Cm::new(2);
        assert_eq!(type_of(&sum), TypeId::of::<Cm>());
        assert_eq!(sum.value(), 402);

        let sum = Cm::new(2) + Km::new(3);
        assert_eq!(sum.value(), 300_002);

        let sum = Km::new(1) + Km::new(2);
        assert_eq!(type_of(&sum), TypeId::of::<M>());
        assert_eq!(sum.value(), 3000);
    }

    #[test]
    fn add_with_wide_factor_is_exact() {
        type Days = Quantity<i64, Daily, Time>;
        type Ns = Quantity<i64, Nano, Time>;
        let sum = Days::new(1) + Ns::new(1);
        assert_eq!(type_of(&sum), TypeId::of::<Ns>());
        assert_eq!(sum.value(), 86_400_000_000_001);
    }

    #[test]
    #[should_panic(expected = "attempt to rebase with overflow")]
    fn add_panics_when_rebased_payload_does_not_fit() {
        let _ = Quantity::<i32, Daily, Time>::new(1) + Quantity::<i32, Nano, Time>::new(0);
    }

    #[test]
    fn add_promotes_payload() {
        let sum = M::new(4) + MDbl::new(0.5);
        assert_eq!(type_of(&sum), TypeId::of::<MDbl>());
        assert_relative_eq!(sum.value(), 4.5);
    }

    #[test]
    fn sub_and_neg() {
        assert_eq!((M::new(4) - Cm::new(2)).value(), 398);
        assert_eq!((-M::new(4)).value(), -4);
        assert_eq!(Cm::new(2) - M::new(4), Cm::new(-398));
    }

    #[test]
    fn compound_add_truncates_into_lhs() {
        let mut len = M::new(4);
        len += Cm::new(123);
        assert_eq!(len.value(), 5);
        len += Km::new(3);
        assert_eq!(len.value(), 3005);
        len -= MDbl::new(0.5);
        assert_eq!(len.value(), 3005);
        len -= Km::new(3);
        assert_eq!(len.value(), 5);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Multiplication & division
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_combines_scale_and_dimension() {
        let area = M::new(4) * Cm::new(321);
        assert_eq!(area.value(), 1284);
        assert_eq!(area.convert::<i32, Unity>().value(), 12);
        assert_eq!(type_of(&area), TypeId::of::<Quantity<i32, Centi, MulDim<Length, Length>>>());
    }

    #[test]
    fn cancelling_product_stays_a_quantity() {
        let frequency = 36 / S::new(12);
        let unitless = frequency * S::new(2);
        assert_eq!(type_of(&unitless), TypeId::of::<Quantity<i32, Unity, Dimensionless>>());
        assert_eq!(unitless.value(), 6);
    }

    #[test]
    fn same_dimension_division_is_scalar() {
        let int: i32 = M::new(4) / Cm::new(160);
        assert_eq!(int, 2);
        let dbl: f64 = MDbl::new(4.0) / Cm::new(160);
        assert_relative_eq!(dbl, 2.5);
        let dbl: f64 = M::new(12) / MDbl::new(1.6);
        assert_relative_eq!(dbl, 7.5);
    }

    #[test]
    fn same_dimension_division_with_wide_factor() {
        let days: i32 = Quantity::<i32, Daily, Time>::new(1) / Quantity::<i32, Nano, Time>::new(1_000_000_000);
        assert_eq!(days, 86_400);
    }

    #[test]
    fn cross_dimension_division() {
        let charge = A::new(2) * S::new(4);
        assert_eq!(charge / A::new(2), S::new(4));
        assert_eq!(charge / S::new(4), A::new(2));

        let speed = Km::new(3) / S::new(2);
        assert_eq!(speed.value(), 1);
        assert_eq!(type_of(&speed), TypeId::of::<Quantity<i32, Kilo, DivDim<Length, Time>>>());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Raw scalars
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn scalar_multiplication() {
        assert_eq!(M::new(4) * 3, M::new(12));
        assert_eq!(3 * M::new(4), M::new(12));
        let scaled = MDbl::new(4.0) * 2.8;
        assert_eq!(type_of(&scaled), TypeId::of::<MDbl>());
        assert_relative_eq!(scaled.value(), 11.2);
        assert_relative_eq!((2.5 * MDbl::new(4.0)).value(), 10.0);
    }

    #[test]
    fn literal_times_unit_infers() {
        let km = 7 * Km::new(1);
        assert_eq!(km.value(), 7);
        assert_eq!(km.convert::<i32, Unity>().value(), 7000);
    }

    #[test]
    fn scalar_division() {
        assert_eq!(S::new(12) / 3, S::new(4));
        assert_relative_eq!((Quantity::<f64, Unity, Time>::new(12.0) / 1.6).value(), 7.5);

        let hertz = 36 / S::new(12);
        assert_eq!(hertz.value(), 3);
        assert_eq!(type_of(&hertz), TypeId::of::<Quantity<i32, Unity, InvDim<Time>>>());

        let per_km = 6 / Km::new(2);
        assert_eq!(type_of(&per_km), TypeId::of::<Quantity<i32, crate::scale::Milli, InvDim<Length>>>());
    }

    #[test]
    fn compound_scalar_assignment() {
        let mut len = MDbl::new(4.0);
        len *= 2.8;
        assert_relative_eq!(len.value(), 11.2);
        let mut time = S::new(12);
        time /= 5;
        assert_eq!(time.value(), 2);
        time *= 3;
        assert_eq!(time.value(), 6);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Square root
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn sqrt_rebases_to_unity() {
        let area = Km::new(7) * Km::new(7);
        let side = area.sqrt();
        assert_eq!(type_of(&side), TypeId::of::<MDbl>());
        assert_relative_eq!(side.value(), 7000.0);
        assert_eq!(side, Km::new(7));
    }

    #[test]
    fn sqrt_rebases_without_overflow() {
        let area = Quantity::<i32, Mega, MulDim<Length, Length>>::new(3000);
        assert_relative_eq!(area.sqrt().value(), 3.0e9f64.sqrt());
    }

    #[test]
    fn sqrt_of_dimensionless() {
        let x = Quantity::<f64, Unity, Dimensionless>::new(2.25);
        assert_relative_eq!(x.sqrt().value(), 1.5);
    }

    proptest! {
        #[test]
        fn prop_sqrt_inverts_square(v in 0.0f64..1.0e6) {
            let side = MDbl::new(v);
            let back = (side * side).sqrt();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.max(1.0));
        }

        #[test]
        fn prop_add_commutes_across_scales(a in -10_000i32..10_000, b in -10_000i32..10_000) {
            prop_assert_eq!(M::new(a) + Cm::new(b), Cm::new(b) + M::new(a));
        }

        #[test]
        fn prop_mul_dimension_is_sum(a in -1000i32..1000, b in -1000i32..1000) {
            let p = M::new(a) * S::new(b);
            prop_assert_eq!(
                Quantity::<i32, Unity, MulDim<Length, Time>>::DIMENSION,
                Length::EXPONENTS.add(Time::EXPONENTS)
            );
            prop_assert_eq!(p.value(), a * b);
        }

        #[test]
        fn prop_same_dimension_ratio(a in 1i64..1_000_000, b in 1i64..1_000_000) {
            let r: f64 = Quantity::<f64, Unity, Length>::new(a as f64) / Quantity::<f64, Centi, Length>::new(b as f64);
            prop_assert!((r - (a as f64 * 100.0) / b as f64).abs() <= 1e-9 * r.abs().max(1.0));
        }
    }
}
