//! Exact rational arithmetic for scale factors.
//!
//! A scale is a strictly positive fraction `multiplier / divider` describing how many canonical base-unit increments
//! one storage increment represents (centimetres are `1/100`, kilometres `1000/1`). The sign of a quantity always
//! lives in its payload, never in its scale.
//!
//! Every type-level scale ([`crate::Scale`]) mirrors itself into a [`Rational`] constant, so all the functions here
//! are `const fn` and run during compilation when used from associated constants.
//!
//! ```rust
//! use sival_core::Rational;
//!
//! let centi = Rational::new(1, 100);
//! let kilo = Rational::new(1000, 1);
//! assert_eq!(centi.mul(kilo), Rational::new(10, 1));
//! assert_eq!(centi.common_measure(kilo), centi);
//! ```

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors raised when a [`Rational`] is built from values that are not strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RationalError {
    /// The multiplier was zero.
    #[error("scale multiplier must be non-zero")]
    ZeroMultiplier,
    /// The divider was zero.
    #[error("scale divider must be non-zero")]
    ZeroDivider,
}

/// Greatest common divisor (Euclid). `gcd(a, 0) == a`.
#[inline]
pub const fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple. `lcm(a, 0) == 0`.
#[inline]
pub const fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        0
    } else {
        a / gcd(a, b) * b
    }
}

/// A strictly positive fraction `multiplier / divider`.
///
/// Values built with [`Rational::new`] keep the terms they were given; every derived value (product, quotient,
/// common measure) is reduced by the greatest common divisor so repeated derivations never grow unboundedly.
///
/// Equality compares the fractions, not their terms: `2/4 == 1/2`.
///
/// # Invariants
///
/// - `multiplier > 0` and `divider > 0`.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    multiplier: u64,
    divider: u64,
}

impl Rational {
    /// The identity scale `1/1`.
    pub const ONE: Self = Self {
        multiplier: 1,
        divider: 1,
    };

    /// Creates a fraction, panicking if either term is zero.
    ///
    /// In a `const` context the panic is a compile error, which is how type-level scales report bad declarations.
    ///
    /// ```rust
    /// use sival_core::Rational;
    /// let milli = Rational::new(1, 1000);
    /// assert_eq!(milli.divider(), 1000);
    /// ```
    #[inline]
    pub const fn new(multiplier: u64, divider: u64) -> Self {
        match Self::try_new(multiplier, divider) {
            Ok(ratio) => ratio,
            Err(RationalError::ZeroMultiplier) => panic!("scale multiplier must be non-zero"),
            Err(RationalError::ZeroDivider) => panic!("scale divider must be non-zero"),
        }
    }

    /// Creates a fraction, rejecting zero terms.
    ///
    /// ```rust
    /// use sival_core::{Rational, RationalError};
    /// assert_eq!(Rational::try_new(3, 0), Err(RationalError::ZeroDivider));
    /// ```
    #[inline]
    pub const fn try_new(multiplier: u64, divider: u64) -> Result<Self, RationalError> {
        if multiplier == 0 {
            return Err(RationalError::ZeroMultiplier);
        }
        if divider == 0 {
            return Err(RationalError::ZeroDivider);
        }
        Ok(Self {
            multiplier,
            divider,
        })
    }

    /// Numerator.
    #[inline]
    pub const fn multiplier(self) -> u64 {
        self.multiplier
    }

    /// Denominator.
    #[inline]
    pub const fn divider(self) -> u64 {
        self.divider
    }

    /// Returns `true` for `1/1` (or any unreduced equivalent).
    #[inline]
    pub const fn is_one(self) -> bool {
        self.multiplier == self.divider
    }

    /// Divides both terms by their greatest common divisor.
    ///
    /// ```rust
    /// use sival_core::Rational;
    /// assert_eq!(Rational::new(60, 3600).reduce(), Rational::new(1, 60));
    /// ```
    #[inline]
    pub const fn reduce(self) -> Self {
        let g = gcd(self.multiplier, self.divider);
        Self {
            multiplier: self.multiplier / g,
            divider: self.divider / g,
        }
    }

    /// Exact product, reduced.
    ///
    /// The terms are cross-simplified before multiplying so intermediate values stay as small as possible.
    #[inline]
    pub const fn mul(self, rhs: Self) -> Self {
        let g1 = gcd(self.multiplier, rhs.divider);
        let g2 = gcd(rhs.multiplier, self.divider);
        Self {
            multiplier: (self.multiplier / g1) * (rhs.multiplier / g2),
            divider: (self.divider / g2) * (rhs.divider / g1),
        }
        .reduce()
    }

    /// The reciprocal `divider / multiplier`.
    #[inline]
    pub const fn recip(self) -> Self {
        Self {
            multiplier: self.divider,
            divider: self.multiplier,
        }
    }

    /// Exact quotient, reduced.
    #[inline]
    pub const fn div(self, rhs: Self) -> Self {
        self.mul(rhs.recip())
    }

    /// The scale of a sum or difference: `1 / lcm(d₁, d₂)`.
    ///
    /// Values stored in either scale convert into it by an integral factor, so sums and differences of integral
    /// payloads stay exact. Multiples of the base unit collapse onto it (`km + km` is counted in metres).
    ///
    /// ```rust
    /// use sival_core::Rational;
    /// let metre = Rational::ONE;
    /// let centi = Rational::new(1, 100);
    /// let kilo = Rational::new(1000, 1);
    /// assert_eq!(metre.common_measure(centi), centi);
    /// assert_eq!(kilo.common_measure(kilo), metre);
    /// ```
    #[inline]
    pub const fn common_measure(self, rhs: Self) -> Self {
        Self {
            multiplier: 1,
            divider: lcm(self.divider, rhs.divider),
        }
    }

    /// Product of every fraction in `ratios`; the empty product is [`Rational::ONE`].
    ///
    /// ```rust
    /// use sival_core::Rational;
    /// let hour = Rational::product(&[Rational::new(60, 1), Rational::new(60, 1)]);
    /// assert_eq!(hour, Rational::new(3600, 1));
    /// assert_eq!(Rational::product(&[]), Rational::ONE);
    /// ```
    pub const fn product(ratios: &[Self]) -> Self {
        let mut acc = Self::ONE;
        let mut i = 0;
        while i < ratios.len() {
            acc = acc.mul(ratios[i]);
            i += 1;
        }
        acc
    }

    /// Floating-point approximation.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.multiplier as f64 / self.divider as f64
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let lhs = u128::from(self.multiplier) * u128::from(other.divider);
        let rhs = u128::from(other.multiplier) * u128::from(self.divider);
        lhs == rhs
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduce();
        reduced.multiplier.hash(state);
        reduced.divider.hash(state);
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.divider == 1 {
            write!(f, "{}", self.multiplier)
        } else {
            write!(f, "{}/{}", self.multiplier, self.divider)
        }
    }
}
