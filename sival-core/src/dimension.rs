//! Physical dimensions as vectors of integer exponents over the seven SI base dimensions.
//!
//! The type-level form is [`Dim`], a product of seven [`typenum`] integers. Multiplying quantities adds their
//! exponents, dividing subtracts them, and a square root halves them. Halving is only defined when every exponent
//! is even, so `sqrt` of a length is rejected at compile time.
//!
//! The runtime mirror is [`DimensionVector`], which every [`Dimension`] exposes as [`Dimension::EXPONENTS`].
//!
//! ```rust
//! use sival_core::dimension::{BaseDimension, Dimension, DimensionVector, Length, MulDim, Time, DivDim};
//!
//! type Velocity = DivDim<Length, Time>;
//! let expected = DimensionVector::base(BaseDimension::Length).sub(DimensionVector::base(BaseDimension::Time));
//! assert_eq!(Velocity::EXPONENTS, expected);
//! assert_eq!(<MulDim<Length, Length> as Dimension>::EXPONENTS.exponent(BaseDimension::Length), 2);
//! ```

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::marker::PhantomData;
use core::ops::{Add, Neg};
use thiserror::Error;
use typenum::{Integer, Negate, PartialDiv, PartialQuot, Sum, P1, P2, Z0};

/// Number of SI base dimensions.
pub const BASE_DIMENSIONS: usize = 7;

/// One of the seven SI base dimensions, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    /// Length (metre).
    Length,
    /// Mass (kilogram).
    Mass,
    /// Time (second).
    Time,
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Amount of substance (mole).
    Amount,
    /// Luminous intensity (candela).
    Luminosity,
}

impl BaseDimension {
    /// All base dimensions in canonical order.
    pub const ALL: [Self; BASE_DIMENSIONS] = [
        Self::Length,
        Self::Mass,
        Self::Time,
        Self::Current,
        Self::Temperature,
        Self::Amount,
        Self::Luminosity,
    ];

    /// Position in a [`DimensionVector`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the SI base unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Length => "m",
            Self::Mass => "kg",
            Self::Time => "s",
            Self::Current => "A",
            Self::Temperature => "K",
            Self::Amount => "mol",
            Self::Luminosity => "cd",
        }
    }

    /// Lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Mass => "mass",
            Self::Time => "time",
            Self::Current => "current",
            Self::Temperature => "temperature",
            Self::Amount => "amount",
            Self::Luminosity => "luminosity",
        }
    }
}

impl Display for BaseDimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Errors from runtime dimension algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// A square root was requested for a dimension with an odd exponent.
    #[error("cannot take the square root of {dimension} with odd exponent {exponent}")]
    OddExponent {
        /// The offending base dimension.
        dimension: BaseDimension,
        /// Its exponent.
        exponent: i32,
    },
}

/// Runtime exponent vector, indexed by [`BaseDimension::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimensionVector([i32; BASE_DIMENSIONS]);

impl DimensionVector {
    /// All exponents zero.
    pub const DIMENSIONLESS: Self = Self([0; BASE_DIMENSIONS]);

    /// Wraps raw exponents.
    #[inline]
    pub const fn new(exponents: [i32; BASE_DIMENSIONS]) -> Self {
        Self(exponents)
    }

    /// A single base dimension with exponent one.
    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; BASE_DIMENSIONS];
        exponents[base.index()] = 1;
        Self(exponents)
    }

    /// Raw exponents.
    #[inline]
    pub const fn exponents(self) -> [i32; BASE_DIMENSIONS] {
        self.0
    }

    /// Exponent of one base dimension.
    #[inline]
    pub const fn exponent(self, base: BaseDimension) -> i32 {
        self.0[base.index()]
    }

    /// Element-wise equality, usable in `const` contexts.
    pub const fn equal(self, rhs: Self) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.0[i] != rhs.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub const fn is_dimensionless(self) -> bool {
        self.equal(Self::DIMENSIONLESS)
    }

    /// Element-wise sum (dimension of a product).
    pub const fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] += rhs.0[i];
            i += 1;
        }
        Self(out)
    }

    /// Element-wise negation (dimension of a reciprocal).
    pub const fn negate(self) -> Self {
        let mut out = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = -out[i];
            i += 1;
        }
        Self(out)
    }

    /// Element-wise difference (dimension of a quotient).
    #[inline]
    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.negate())
    }

    /// `true` when every exponent is even.
    pub const fn all_even(self) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.0[i] % 2 != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Halves every exponent, failing on the first odd one.
    ///
    /// ```rust
    /// use sival_core::dimension::{BaseDimension, DimensionError, DimensionVector};
    ///
    /// let area = DimensionVector::new([2, 0, 0, 0, 0, 0, 0]);
    /// assert_eq!(area.try_half(), Ok(DimensionVector::base(BaseDimension::Length)));
    ///
    /// let length = DimensionVector::base(BaseDimension::Length);
    /// assert_eq!(
    ///     length.try_half(),
    ///     Err(DimensionError::OddExponent { dimension: BaseDimension::Length, exponent: 1 })
    /// );
    /// ```
    pub const fn try_half(self) -> Result<Self, DimensionError> {
        let mut out = self.0;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if out[i] % 2 != 0 {
                return Err(DimensionError::OddExponent {
                    dimension: BaseDimension::ALL[i],
                    exponent: out[i],
                });
            }
            out[i] /= 2;
            i += 1;
        }
        Ok(Self(out))
    }

    /// Halves every exponent.
    ///
    /// # Panics
    ///
    /// Panics if any exponent is odd; use [`DimensionVector::try_half`] for untrusted input.
    pub const fn half(self) -> Self {
        match self.try_half() {
            Ok(half) => half,
            Err(_) => panic!("cannot halve a dimension with an odd exponent"),
        }
    }
}

/// Formats as base-unit symbols joined by `·`, e.g. `m·s^-2`. The dimensionless vector formats as an empty string.
impl Display for DimensionVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for base in BaseDimension::ALL {
            let exponent = self.exponent(base);
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if exponent != 1 {
                write!(f, "^{exponent}")?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Type-level dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// A compile-time dimension.
pub trait Dimension {
    /// The exponents as a runtime vector.
    const EXPONENTS: DimensionVector;
}

/// The dimension `L^l · M^m · T^t · I^i · Θ^θ · N^n · J^j` with typenum integer exponents.
///
/// Never instantiated.
pub struct Dim<L, M, T, I, Th, N, J>(PhantomData<(L, M, T, I, Th, N, J)>);

impl<L, M, T, I, Th, N, J> Dimension for Dim<L, M, T, I, Th, N, J>
where
    L: Integer,
    M: Integer,
    T: Integer,
    I: Integer,
    Th: Integer,
    N: Integer,
    J: Integer,
{
    const EXPONENTS: DimensionVector =
        DimensionVector::new([L::I32, M::I32, T::I32, I::I32, Th::I32, N::I32, J::I32]);
}

/// Dimension of a product.
pub trait DimAdd<Rhs: Dimension>: Dimension {
    /// Element-wise exponent sum.
    type Output: Dimension;
}

impl<L1, M1, T1, I1, Th1, A1, J1, L2, M2, T2, I2, Th2, A2, J2> DimAdd<Dim<L2, M2, T2, I2, Th2, A2, J2>>
    for Dim<L1, M1, T1, I1, Th1, A1, J1>
where
    L1: Integer + Add<L2>,
    M1: Integer + Add<M2>,
    T1: Integer + Add<T2>,
    I1: Integer + Add<I2>,
    Th1: Integer + Add<Th2>,
    A1: Integer + Add<A2>,
    J1: Integer + Add<J2>,
    L2: Integer,
    M2: Integer,
    T2: Integer,
    I2: Integer,
    Th2: Integer,
    A2: Integer,
    J2: Integer,
    Sum<L1, L2>: Integer,
    Sum<M1, M2>: Integer,
    Sum<T1, T2>: Integer,
    Sum<I1, I2>: Integer,
    Sum<Th1, Th2>: Integer,
    Sum<A1, A2>: Integer,
    Sum<J1, J2>: Integer,
{
    type Output = Dim<
        Sum<L1, L2>,
        Sum<M1, M2>,
        Sum<T1, T2>,
        Sum<I1, I2>,
        Sum<Th1, Th2>,
        Sum<A1, A2>,
        Sum<J1, J2>,
    >;
}

/// Dimension of a reciprocal.
pub trait DimNeg: Dimension {
    /// Element-wise negation.
    type Output: Dimension;
}

impl<L, M, T, I, Th, N, J> DimNeg for Dim<L, M, T, I, Th, N, J>
where
    L: Integer + Neg,
    M: Integer + Neg,
    T: Integer + Neg,
    I: Integer + Neg,
    Th: Integer + Neg,
    N: Integer + Neg,
    J: Integer + Neg,
    Negate<L>: Integer,
    Negate<M>: Integer,
    Negate<T>: Integer,
    Negate<I>: Integer,
    Negate<Th>: Integer,
    Negate<N>: Integer,
    Negate<J>: Integer,
{
    type Output = Dim<Negate<L>, Negate<M>, Negate<T>, Negate<I>, Negate<Th>, Negate<N>, Negate<J>>;
}

/// Dimension of a quotient.
pub trait DimSub<Rhs: Dimension>: Dimension {
    /// Element-wise exponent difference.
    type Output: Dimension;
}

impl<A, B> DimSub<B> for A
where
    B: DimNeg,
    A: DimAdd<<B as DimNeg>::Output>,
{
    type Output = MulDim<A, <B as DimNeg>::Output>;
}

/// Dimension of a square root. Only implemented when every exponent is even.
pub trait DimHalf: Dimension {
    /// Element-wise halving.
    type Output: Dimension;
}

impl<L, M, T, I, Th, N, J> DimHalf for Dim<L, M, T, I, Th, N, J>
where
    L: Integer + PartialDiv<P2>,
    M: Integer + PartialDiv<P2>,
    T: Integer + PartialDiv<P2>,
    I: Integer + PartialDiv<P2>,
    Th: Integer + PartialDiv<P2>,
    N: Integer + PartialDiv<P2>,
    J: Integer + PartialDiv<P2>,
    PartialQuot<L, P2>: Integer,
    PartialQuot<M, P2>: Integer,
    PartialQuot<T, P2>: Integer,
    PartialQuot<I, P2>: Integer,
    PartialQuot<Th, P2>: Integer,
    PartialQuot<N, P2>: Integer,
    PartialQuot<J, P2>: Integer,
{
    type Output = Dim<
        PartialQuot<L, P2>,
        PartialQuot<M, P2>,
        PartialQuot<T, P2>,
        PartialQuot<I, P2>,
        PartialQuot<Th, P2>,
        PartialQuot<N, P2>,
        PartialQuot<J, P2>,
    >;
}

/// `A × B`.
pub type MulDim<A, B> = <A as DimAdd<B>>::Output;
/// `A ÷ B`.
pub type DivDim<A, B> = <A as DimSub<B>>::Output;
/// `1 ÷ A`.
pub type InvDim<A> = <A as DimNeg>::Output;
/// `√A`.
pub type HalfDim<A> = <A as DimHalf>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Marker for the seven dimensions that have exactly one exponent equal to one.
pub trait IsBaseDimension: Dimension {
    /// Which base dimension this is.
    const BASE: BaseDimension;
}

/// All exponents zero.
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Length (L).
pub type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Mass (M).
pub type Mass = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// Time (T).
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
/// Electric current (I).
pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
/// Thermodynamic temperature (Θ).
pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// Amount of substance (N).
pub type Amount = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
/// Luminous intensity (J).
pub type Luminosity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

macro_rules! impl_base_dimension {
    ($($alias:ident => $base:ident),* $(,)?) => {
        $(
            impl IsBaseDimension for $alias {
                const BASE: BaseDimension = BaseDimension::$base;
            }
        )*
    };
}

impl_base_dimension! {
    Length => Length,
    Mass => Mass,
    Time => Time,
    Current => Current,
    Temperature => Temperature,
    Amount => Amount,
    Luminosity => Luminosity,
}
