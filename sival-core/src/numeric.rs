//! Numeric payloads and mixed-type promotion.
//!
//! A [`Quantity`](crate::Quantity) stores its value in one of the primitive types implementing [`Numeric`]:
//! `i32`, `i64`, `u32`, `u64`, `f32` or `f64`. Arithmetic between two quantities with different payload types
//! happens in their [`Promoted`] type, following the usual widening rules (a raw scalar operand must match the
//! payload type exactly):
//!
//! | lhs \ rhs | i32 | i64 | u32 | u64 | f32 | f64 |
//! |-----------|-----|-----|-----|-----|-----|-----|
//! | i32       | i32 | i64 |     |     | f32 | f64 |
//! | i64       | i64 | i64 | i64 |     | f32 | f64 |
//! | u32       |     | i64 | u32 | u64 | f32 | f64 |
//! | u64       |     |     | u64 | u64 | f32 | f64 |
//! | f32       | f32 | f32 | f32 | f32 | f32 | f64 |
//! | f64       | f64 | f64 | f64 | f64 | f64 | f64 |
//!
//! Blank cells (a signed/unsigned mix with no lossless common type) have no promotion, so mixing those payloads is
//! a compile error rather than a silent wrap-around.

use core::cmp::Ordering;
use core::fmt::{Debug, Display};
use num_traits::{AsPrimitive, Num};

/// A primitive number usable as a quantity payload.
pub trait Numeric:
    Copy + Default + PartialEq + PartialOrd + Debug + Display + Num + AsPrimitive<f64> + AsPrimitive<i128> + 'static
{
    /// Payload produced by [`Numeric::sqrt`]: floats keep their type, integers become `f64`.
    type Root: Numeric;

    /// `true` for integer payloads.
    const INTEGRAL: bool;

    /// Converts with `as` semantics: truncation toward zero for integers, saturation at the bounds.
    fn from_f64(value: f64) -> Self;

    /// Narrows an exact `i128` intermediate; `None` when it is out of range.
    fn from_wide(value: i128) -> Option<Self>;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self::Root;

    /// Orders `self × lhs_factor` against `other × rhs_factor` without overflowing.
    ///
    /// Integers widen to `i128`; floats compare in `f64`.
    fn scaled_cmp(self, lhs_factor: u64, other: Self, rhs_factor: u64) -> Option<Ordering>;

    /// Lossy conversion to `f64`.
    #[inline]
    fn to_f64(self) -> f64 {
        AsPrimitive::<f64>::as_(self)
    }
}

macro_rules! impl_numeric_int {
    ($($t:ty => $abs:expr),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Root = f64;
                const INTEGRAL: bool = true;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn from_wide(value: i128) -> Option<Self> {
                    <$t>::try_from(value).ok()
                }

                #[inline]
                fn abs(self) -> Self {
                    let abs: fn($t) -> $t = $abs;
                    abs(self)
                }

                #[inline]
                fn sqrt(self) -> f64 {
                    sqrt_f64(self as f64)
                }

                #[inline]
                fn scaled_cmp(self, lhs_factor: u64, other: Self, rhs_factor: u64) -> Option<Ordering> {
                    let lhs = self as i128 * lhs_factor as i128;
                    let rhs = other as i128 * rhs_factor as i128;
                    Some(lhs.cmp(&rhs))
                }
            }
        )*
    };
}

impl_numeric_int! {
    i32 => i32::abs,
    i64 => i64::abs,
    u32 => |v| v,
    u64 => |v| v,
}

macro_rules! impl_numeric_float {
    ($($t:ty => $abs:ident, $sqrt:ident),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Root = $t;
                const INTEGRAL: bool = false;

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                #[inline]
                fn from_wide(value: i128) -> Option<Self> {
                    Some(value as $t)
                }

                #[inline]
                fn abs(self) -> Self {
                    $abs(self)
                }

                #[inline]
                fn sqrt(self) -> Self {
                    $sqrt(self)
                }

                #[inline]
                fn scaled_cmp(self, lhs_factor: u64, other: Self, rhs_factor: u64) -> Option<Ordering> {
                    let lhs = self as f64 * lhs_factor as f64;
                    let rhs = other as f64 * rhs_factor as f64;
                    lhs.partial_cmp(&rhs)
                }
            }
        )*
    };
}

impl_numeric_float! {
    f32 => abs_f32, sqrt_f32,
    f64 => abs_f64, sqrt_f64,
}

#[cfg(feature = "std")]
#[inline]
fn sqrt_f64(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
fn sqrt_f64(x: f64) -> f64 {
    libm::sqrt(x)
}

#[cfg(feature = "std")]
#[inline]
fn sqrt_f32(x: f32) -> f32 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
fn sqrt_f32(x: f32) -> f32 {
    libm::sqrtf(x)
}

#[cfg(feature = "std")]
#[inline]
fn abs_f64(x: f64) -> f64 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
fn abs_f64(x: f64) -> f64 {
    libm::fabs(x)
}

#[cfg(feature = "std")]
#[inline]
fn abs_f32(x: f32) -> f32 {
    x.abs()
}

#[cfg(not(feature = "std"))]
#[inline]
fn abs_f32(x: f32) -> f32 {
    libm::fabsf(x)
}

// ─────────────────────────────────────────────────────────────────────────────
// Rebasing
// ─────────────────────────────────────────────────────────────────────────────

#[cold]
#[inline(never)]
fn rebase_overflow() -> ! {
    panic!("attempt to rebase with overflow")
}

#[inline]
fn wide_mul(value: i128, factor: u64) -> i128 {
    match value.checked_mul(i128::from(factor)) {
        Some(product) => product,
        None => rebase_overflow(),
    }
}

#[inline]
fn narrow_wide<W: Numeric>(value: i128) -> W {
    match W::from_wide(value) {
        Some(narrowed) => narrowed,
        None => rebase_overflow(),
    }
}

/// `value × multiplier / divider` computed exactly in `i128`, truncated toward zero.
#[inline]
pub(crate) fn rebase_wide<V: Numeric>(value: V, multiplier: u64, divider: u64) -> i128 {
    wide_mul(AsPrimitive::<i128>::as_(value), multiplier) / i128::from(divider)
}

/// Rebases `value` by `multiplier / divider` into `W`.
///
/// Between integer types the arithmetic is exact in `i128` and truncates toward zero; if either side is a float it
/// runs in `f64` and narrows with `as` semantics. Panics when an integer result does not fit in `W`.
#[inline]
pub(crate) fn rebase<V: Numeric, W: Numeric>(value: V, multiplier: u64, divider: u64) -> W {
    if V::INTEGRAL && W::INTEGRAL {
        narrow_wide(rebase_wide(value, multiplier, divider))
    } else {
        W::from_f64(value.to_f64() * multiplier as f64 / divider as f64)
    }
}

/// `(lhs × multiplier) / (rhs × divider)` with the products taken in `i128` (integers) or `f64` (floats).
#[inline]
pub(crate) fn scaled_div<P: Numeric>(lhs: P, multiplier: u64, rhs: P, divider: u64) -> P {
    if P::INTEGRAL {
        let numerator = wide_mul(AsPrimitive::<i128>::as_(lhs), multiplier);
        let denominator = wide_mul(AsPrimitive::<i128>::as_(rhs), divider);
        narrow_wide(numerator / denominator)
    } else {
        P::from_f64(lhs.to_f64() * multiplier as f64 / (rhs.to_f64() * divider as f64))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Promotion
// ─────────────────────────────────────────────────────────────────────────────

/// The common payload type for arithmetic between `Self` and `Rhs`.
pub trait Promote<Rhs: Numeric>: Numeric {
    /// The promoted type.
    type Output: Numeric;

    /// Widens a left operand.
    fn widen(self) -> <Self as Promote<Rhs>>::Output;

    /// Widens a right operand.
    fn widen_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Promoted payload of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! impl_promote_identity {
    ($($t:ty),* $(,)?) => {
        $(
            impl Promote<$t> for $t {
                type Output = $t;

                #[inline]
                fn widen(self) -> $t {
                    self
                }

                #[inline]
                fn widen_rhs(rhs: $t) -> $t {
                    rhs
                }
            }
        )*
    };
}

macro_rules! impl_promote {
    ($($a:ty, $b:ty => $out:ty);* $(;)?) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;

                #[inline]
                fn widen(self) -> $out {
                    self as $out
                }

                #[inline]
                fn widen_rhs(rhs: $b) -> $out {
                    rhs as $out
                }
            }

            impl Promote<$a> for $b {
                type Output = $out;

                #[inline]
                fn widen(self) -> $out {
                    self as $out
                }

                #[inline]
                fn widen_rhs(rhs: $a) -> $out {
                    rhs as $out
                }
            }
        )*
    };
}

impl_promote_identity!(i32, i64, u32, u64, f32, f64);

impl_promote! {
    i32, i64 => i64;
    u32, u64 => u64;
    u32, i64 => i64;
    i32, f32 => f32;
    i64, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;
    i32, f64 => f64;
    i64, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
    f32, f64 => f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::any::TypeId;
    use proptest::prelude::*;

    fn promoted_is<A: Promote<B>, B: Numeric, O: 'static>() -> bool {
        TypeId::of::<Promoted<A, B>>() == TypeId::of::<O>()
    }

    #[test]
    fn promotion_table() {
        assert!(promoted_is::<i32, i32, i32>());
        assert!(promoted_is::<i32, i64, i64>());
        assert!(promoted_is::<i64, i32, i64>());
        assert!(promoted_is::<u32, i64, i64>());
        assert!(promoted_is::<u32, u64, u64>());
        assert!(promoted_is::<i32, f32, f32>());
        assert!(promoted_is::<u64, f64, f64>());
        assert!(promoted_is::<f32, f64, f64>());
        assert!(promoted_is::<f64, i32, f64>());
    }

    #[test]
    fn from_f64_truncates_toward_zero() {
        assert_eq!(i32::from_f64(43.21), 43);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(u32::from_f64(-5.0), 0);
        assert_eq!(i64::from_f64(1.999_999), 1);
    }

    #[test]
    fn abs_and_sqrt() {
        assert_eq!(Numeric::abs(-7i32), 7);
        assert_eq!(Numeric::abs(7u64), 7);
        assert_eq!(Numeric::abs(-2.5f64), 2.5);
        assert_relative_eq!(Numeric::sqrt(49i32), 7.0);
        assert_relative_eq!(Numeric::sqrt(2.25f32), 1.5f32);
    }

    #[test]
    fn rebase_between_integers_is_exact() {
        let big = 9_007_199_254_740_993i64;
        assert_eq!(rebase::<i64, i64>(big, 1, 1), big);
        assert_eq!(rebase::<i64, i64>(big, 1000, 1000), big);
        assert_eq!(rebase::<i32, i64>(86_400, 1_000_000_000, 1), 86_400_000_000_000);
        assert_eq!(rebase::<i32, i32>(-7, 1, 2), -3);
        assert_eq!(rebase::<u64, u64>(u64::MAX, 1, 1), u64::MAX);
    }

    #[test]
    fn rebase_through_floats() {
        assert_eq!(rebase::<f64, i32>(1234.56, 1, 1000), 1);
        assert_relative_eq!(rebase::<i32, f64>(3, 1, 100), 0.03);
        assert_relative_eq!(rebase::<f32, f32>(1.5, 1000, 1), 1500.0);
    }

    #[test]
    #[should_panic(expected = "attempt to rebase with overflow")]
    fn rebase_panics_when_result_does_not_fit() {
        let _ = rebase::<i32, i32>(1, 86_400_000_000_000, 1);
    }

    #[test]
    fn rebase_wide_keeps_intermediate() {
        assert_eq!(rebase_wide(3000i32, 1_000_000, 1), 3_000_000_000);
        assert_eq!(rebase_wide(900u32, 1, 10_000), 0);
    }

    #[test]
    fn scaled_div_uses_wide_products() {
        assert_eq!(scaled_div(3i32, 1_000_000_000_000, 2_000_000i32, 1_000_000), 1);
        assert_eq!(scaled_div(-9i64, 1000, 2i64, 1), -4500);
        assert_relative_eq!(scaled_div(4.0f64, 100, 160.0, 1), 2.5);
    }

    #[test]
    fn scaled_cmp_does_not_overflow() {
        let big = i32::MAX;
        assert_eq!(big.scaled_cmp(86_400_000_000_000, big, 1), Some(Ordering::Greater));
        assert_eq!(2000i32.scaled_cmp(1, 2i32, 1000), Some(Ordering::Equal));
        assert_eq!(f64::NAN.scaled_cmp(1, 1.0, 1), None);
    }

    #[test]
    fn integral_flag() {
        assert!(i64::INTEGRAL);
        assert!(!f32::INTEGRAL);
    }

    proptest! {
        #[test]
        fn prop_widen_preserves_value(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(<i32 as Promote<i64>>::widen(a) + <i32 as Promote<i64>>::widen_rhs(b as i64), a as i64 + b as i64);
        }

        #[test]
        fn prop_scaled_cmp_matches_i128(a in any::<i64>(), b in any::<i64>(), m in 1u64..1_000_000, d in 1u64..1_000_000) {
            let expected = (a as i128 * m as i128).cmp(&(b as i128 * d as i128));
            prop_assert_eq!(a.scaled_cmp(m, b, d), Some(expected));
        }
    }
}
