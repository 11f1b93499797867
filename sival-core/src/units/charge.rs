//! Electric charge units (`Current × Time`).

use crate::declare::Base;
use crate::dimension::MulDim;

use super::current::Current;
use super::time::Time;

/// Dimension of electric charge: I·T.
pub type Charge = MulDim<Current, Time>;

/// A charge in coulombs.
pub type Coulombs<V> = Base<V, Charge>;

/// One coulomb.
pub const C: Coulombs<i32> = Coulombs::new(1);
