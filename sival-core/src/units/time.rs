//! Time units.
//!
//! The canonical unit is the SI second ([`Seconds`], scale 1/1). Sub-second units use SI prefixes; the civil units
//! are built by applying the ratios 60, 60 and 24 in turn, so [`Days`] is exactly 86 400 s (leap seconds ignored).
//!
//! ```rust
//! use sival_core::scale::Unity;
//! use sival_core::units::time::{Hours, Seconds, MIN, H};
//!
//! let t = 1 * H + 30 * MIN;
//! assert_eq!(t.convert::<i32, Unity>(), Seconds::new(5400));
//! assert!(t < Hours::new(2));
//! ```

use crate::declare::Base;
use crate::scale::{Daily, Hourly, Micro, Milli, Nano, Sexagesimal};
use crate::Quantity;

pub use crate::dimension::Time;

/// A time in seconds.
pub type Seconds<V> = Base<V, Time>;
/// A time in nanoseconds (`1 ns = 10^-9 s`).
pub type Nanoseconds<V> = Quantity<V, Nano, Time>;
/// A time in microseconds (`1 µs = 10^-6 s`).
pub type Microseconds<V> = Quantity<V, Micro, Time>;
/// A time in milliseconds (`1 ms = 10^-3 s`).
pub type Milliseconds<V> = Quantity<V, Milli, Time>;
/// A time in minutes (`1 min = 60 s`).
pub type Minutes<V> = Quantity<V, Sexagesimal, Time>;
/// A time in hours (`1 h = 60 min`).
pub type Hours<V> = Quantity<V, Hourly, Time>;
/// A time in days (`1 d = 24 h`).
pub type Days<V> = Quantity<V, Daily, Time>;

/// One nanosecond.
pub const NS: Nanoseconds<i32> = Nanoseconds::new(1);
/// One microsecond.
pub const US: Microseconds<i32> = Microseconds::new(1);
/// One millisecond.
pub const MS: Milliseconds<i32> = Milliseconds::new(1);
/// One second.
pub const S: Seconds<i32> = Seconds::new(1);
/// One minute.
pub const MIN: Minutes<i32> = Minutes::new(1);
/// One hour.
pub const H: Hours<i32> = Hours::new(1);
/// One day.
pub const DAY: Days<i32> = Days::new(1);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declare::Scaled;
    use crate::scale::{Ratio, Unity};
    use approx::assert_abs_diff_eq;
    use core::any::TypeId;
    use proptest::prelude::*;
    use typenum::{U24, U60};

    // ─────────────────────────────────────────────────────────────────────────────
    // Civil ladder
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn civil_units_are_successive_ratios() {
        type Min = Scaled<Seconds<i32>, Ratio<U60, typenum::U1>>;
        type Hr = Scaled<Min, Ratio<U60, typenum::U1>>;
        type Dy = Scaled<Hr, Ratio<U24, typenum::U1>>;
        assert_eq!(TypeId::of::<Min>(), TypeId::of::<Minutes<i32>>());
        assert_eq!(TypeId::of::<Hr>(), TypeId::of::<Hours<i32>>());
        assert_eq!(TypeId::of::<Dy>(), TypeId::of::<Days<i32>>());
    }

    #[test]
    fn seconds_per_day() {
        assert_eq!(DAY.convert::<i32, Unity>(), Seconds::new(86_400));
        assert_eq!(24 * H, DAY);
        assert_eq!(60 * MIN, H);
    }

    #[test]
    fn sub_second_units() {
        assert_eq!(1000 * MS, S);
        assert_eq!(1000 * US, MS);
        assert_eq!(1000 * NS, US);
        assert_abs_diff_eq!((1500 * MS).convert::<f64, Unity>().value(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn scalar_division_of_seconds() {
        let t = 12 * S;
        assert_eq!(t / 3, Seconds::new(4));
        assert_abs_diff_eq!((Seconds::new(12.0) / 1.6_f64).value(), 7.5, epsilon = 1e-12);
    }

    #[test]
    fn mixed_sum_is_counted_in_seconds() {
        let t = 1 * H + 30 * MIN;
        assert_eq!(t.value(), 5400);
        assert_eq!(TypeId::of::<Seconds<i32>>(), core::any::Any::type_id(&t));

        let t = 2 * MIN + 500 * MS;
        assert_eq!(t, Milliseconds::new(120_500));
        assert_eq!(TypeId::of::<Milliseconds<i32>>(), core::any::Any::type_id(&t));
    }

    proptest! {
        #[test]
        fn prop_hours_to_seconds_exact(h in 0i64..1_000_000) {
            let s: Seconds<i64> = Hours::new(h).convert();
            prop_assert_eq!(s.value(), h * 3600);
        }
    }
}
