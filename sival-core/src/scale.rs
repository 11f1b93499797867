//! Type-level scales.
//!
//! A scale is encoded as [`Ratio<N, D>`] over [`typenum`] unsigned integers. Every operation that derives a new
//! scale (product, quotient, reciprocal, common measure) produces a reduced `Ratio`, and typenum keeps its integers
//! canonical, so two derivations that describe the same fraction always land on the *same type*. That type
//! identity is what lets `Centimeters * Centimeters` be exactly `SquareCentimeters`.
//!
//! The runtime mirror of each scale is [`Scale::RATIO`], a [`Rational`] constant.
//!
//! typenum ships named constants up to `U1024` plus the powers of two and ten; larger factors are built as products
//! of smaller ones (for example [`Mega`] is `Kilo × Kilo`).

use crate::rational::Rational;
use core::marker::PhantomData;
use core::ops::{Div, Mul};
use typenum::{Gcd, Gcf, NonZero, Prod, Quot, Unsigned, U1, U10, U100, U1000, U24, U60};

/// A compile-time scale factor.
pub trait Scale {
    /// The factor as a runtime fraction.
    const RATIO: Rational;
}

/// The scale `N / D`.
///
/// This type is never instantiated; it only appears as a type parameter of [`crate::Quantity`].
pub struct Ratio<N, D>(PhantomData<(N, D)>);

impl<N, D> Scale for Ratio<N, D>
where
    N: Unsigned + NonZero,
    D: Unsigned + NonZero,
{
    const RATIO: Rational = Rational::new(N::U64, D::U64);
}

/// Reduces a `Ratio` by the greatest common divisor of its terms.
pub trait Reduce {
    /// The reduced scale.
    type Output: Scale;
}

impl<N, D> Reduce for Ratio<N, D>
where
    N: Unsigned + NonZero + Gcd<D> + Div<Gcf<N, D>>,
    D: Unsigned + NonZero + Div<Gcf<N, D>>,
    Quot<N, Gcf<N, D>>: Unsigned + NonZero,
    Quot<D, Gcf<N, D>>: Unsigned + NonZero,
{
    type Output = Ratio<Quot<N, Gcf<N, D>>, Quot<D, Gcf<N, D>>>;
}

/// Product of two scales.
pub trait ScaleMul<Rhs: Scale>: Scale {
    /// The reduced product.
    type Output: Scale;
}

impl<N1, D1, N2, D2> ScaleMul<Ratio<N2, D2>> for Ratio<N1, D1>
where
    Ratio<N1, D1>: Scale,
    Ratio<N2, D2>: Scale,
    N1: Mul<N2>,
    D1: Mul<D2>,
    Ratio<Prod<N1, N2>, Prod<D1, D2>>: Reduce,
{
    type Output = Reduced<Ratio<Prod<N1, N2>, Prod<D1, D2>>>;
}

/// Reciprocal of a scale.
pub trait ScaleInv: Scale {
    /// `D / N`.
    type Output: Scale;
}

impl<N, D> ScaleInv for Ratio<N, D>
where
    Ratio<N, D>: Scale,
    Ratio<D, N>: Scale,
{
    type Output = Ratio<D, N>;
}

/// Quotient of two scales.
pub trait ScaleDiv<Rhs: Scale>: Scale {
    /// The reduced quotient.
    type Output: Scale;
}

impl<A, B> ScaleDiv<B> for A
where
    B: ScaleInv,
    A: ScaleMul<<B as ScaleInv>::Output>,
{
    type Output = ScaleProduct<A, <B as ScaleInv>::Output>;
}

type Lcm<A, B> = Quot<Prod<A, B>, Gcf<A, B>>;

/// Common measure of two scales: `1 / lcm(D₁, D₂)`.
///
/// This is the scale of a sum or difference. Both operands convert into it by an integral factor.
pub trait CommonScale<Rhs: Scale>: Scale {
    /// The common measure.
    type Output: Scale;
}

impl<N1, D1, N2, D2> CommonScale<Ratio<N2, D2>> for Ratio<N1, D1>
where
    Ratio<N1, D1>: Scale,
    Ratio<N2, D2>: Scale,
    D1: Gcd<D2> + Mul<D2>,
    Prod<D1, D2>: Div<Gcf<D1, D2>>,
    Lcm<D1, D2>: Unsigned + NonZero,
{
    type Output = Ratio<U1, Lcm<D1, D2>>;
}

/// `S` reduced.
pub type Reduced<S> = <S as Reduce>::Output;
/// `A × B`.
pub type ScaleProduct<A, B> = <A as ScaleMul<B>>::Output;
/// `A ÷ B`.
pub type ScaleQuotient<A, B> = <A as ScaleDiv<B>>::Output;
/// `1 ÷ S`.
pub type InvScale<S> = <S as ScaleInv>::Output;
/// Common measure of `A` and `B`.
pub type CommonMeasure<A, B> = <A as CommonScale<B>>::Output;

/// Factor that rebases a value stored at scale `From` into scale `To`: `From / To`.
///
/// Evaluated at compile time for every scale pair the program uses.
pub(crate) struct Rebase<From, To>(PhantomData<(From, To)>);

impl<From: Scale, To: Scale> Rebase<From, To> {
    pub(crate) const FACTOR: Rational = From::RATIO.div(To::RATIO);
}

// ─────────────────────────────────────────────────────────────────────────────
// Named scales
// ─────────────────────────────────────────────────────────────────────────────

/// `1/1`, the canonical scale of every base unit.
pub type Unity = Ratio<U1, U1>;
/// `1/10`.
pub type Deci = Ratio<U1, U10>;
/// `1/100`.
pub type Centi = Ratio<U1, U100>;
/// `1/1000`.
pub type Milli = Ratio<U1, U1000>;
/// `1/10⁶`.
pub type Micro = ScaleProduct<Milli, Milli>;
/// `1/10⁹`.
pub type Nano = ScaleProduct<Micro, Milli>;
/// `1000/1`.
pub type Kilo = Ratio<U1000, U1>;
/// `10⁶/1`.
pub type Mega = ScaleProduct<Kilo, Kilo>;
/// `10⁹/1`.
pub type Giga = ScaleProduct<Mega, Kilo>;

/// Sixty base increments (minutes from seconds).
pub type Sexagesimal = Ratio<U60, U1>;
/// `3600/1` (hours from seconds).
pub type Hourly = ScaleProduct<Sexagesimal, Sexagesimal>;
/// `86400/1` (days from seconds).
pub type Daily = ScaleProduct<Hourly, Ratio<U24, U1>>;

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::TypeId;
    use typenum::{U2, U3, U4, U6};

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn named_scale_ratios() {
        assert_eq!(Unity::RATIO, Rational::ONE);
        assert_eq!(Centi::RATIO, Rational::new(1, 100));
        assert_eq!(Micro::RATIO, Rational::new(1, 1_000_000));
        assert_eq!(Nano::RATIO, Rational::new(1, 1_000_000_000));
        assert_eq!(Mega::RATIO, Rational::new(1_000_000, 1));
        assert_eq!(Giga::RATIO, Rational::new(1_000_000_000, 1));
        assert_eq!(Hourly::RATIO, Rational::new(3600, 1));
        assert_eq!(Daily::RATIO, Rational::new(86_400, 1));
    }

    #[test]
    fn reduce_yields_canonical_type() {
        assert!(same::<Reduced<Ratio<U2, U4>>, Ratio<U1, U2>>());
        assert!(same::<Reduced<Ratio<U6, U4>>, Ratio<U3, U2>>());
        assert!(same::<Reduced<Unity>, Unity>());
    }

    #[test]
    fn product_identities() {
        assert!(same::<ScaleProduct<Kilo, Milli>, Unity>());
        assert!(same::<ScaleProduct<Unity, Centi>, Centi>());
        assert!(same::<ScaleProduct<Centi, Kilo>, Ratio<U10, U1>>());
    }

    #[test]
    fn quotient_and_inverse() {
        assert!(same::<InvScale<Kilo>, Milli>());
        assert!(same::<ScaleQuotient<Kilo, Kilo>, Unity>());
        assert!(same::<ScaleQuotient<Unity, Centi>, Ratio<U100, U1>>());
    }

    #[test]
    fn common_measure_types() {
        assert!(same::<CommonMeasure<Unity, Centi>, Centi>());
        assert!(same::<CommonMeasure<Centi, Kilo>, Centi>());
        assert!(same::<CommonMeasure<Kilo, Kilo>, Unity>());
        assert!(same::<CommonMeasure<Sexagesimal, Hourly>, Unity>());
        assert!(same::<CommonMeasure<Milli, Micro>, Micro>());
        assert!(same::<CommonMeasure<Ratio<U3, U2>, Ratio<U1, U3>>, Ratio<U1, U6>>());
    }

    #[test]
    fn type_level_matches_runtime() {
        assert_eq!(
            <ScaleProduct<Centi, Kilo> as Scale>::RATIO,
            Centi::RATIO.mul(Kilo::RATIO)
        );
        assert_eq!(
            <CommonMeasure<Centi, Kilo> as Scale>::RATIO,
            Centi::RATIO.common_measure(Kilo::RATIO)
        );
        assert_eq!(
            <CommonMeasure<Daily, Nano> as Scale>::RATIO,
            Daily::RATIO.common_measure(Nano::RATIO)
        );
    }

    #[test]
    fn rebase_factor() {
        assert_eq!(Rebase::<Kilo, Unity>::FACTOR, Rational::new(1000, 1));
        assert_eq!(Rebase::<Centi, Kilo>::FACTOR, Rational::new(1, 100_000));
        assert_eq!(Rebase::<Centi, Centi>::FACTOR, Rational::ONE);
    }
}
