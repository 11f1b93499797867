//! Electric current units.

use crate::declare::Base;
use crate::scale::Milli;
use crate::Quantity;

pub use crate::dimension::Current;

/// A current in amperes.
pub type Amperes<V> = Base<V, Current>;
/// A current in milliamperes (`1 mA = 10^-3 A`).
pub type Milliamperes<V> = Quantity<V, Milli, Current>;

/// One ampere.
pub const A: Amperes<i32> = Amperes::new(1);
/// One milliampere.
pub const MA: Milliamperes<i32> = Milliamperes::new(1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milliamperes() {
        assert_eq!(1000 * MA, 1 * A);
        assert!(999 * MA < A);
        assert_eq!((3 * A).to_string(), "3 A");
    }
}
