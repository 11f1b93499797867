//! Quantity type and its value semantics.

use crate::dimension::{Dimension, DimensionVector};
use crate::numeric::{rebase, Numeric, Promote};
use crate::rational::Rational;
use crate::scale::{Rebase, Scale};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter, Write};
use core::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric value tagged at compile time with a scale and a dimension.
///
/// - `V` is the payload type (see [`Numeric`]).
/// - `S` is the scale: one stored increment equals `S::RATIO` canonical base-unit increments.
/// - `D` is the dimension.
///
/// The tag has no runtime representation: a `Quantity<i32, _, _>` is exactly four bytes.
///
/// Quantities are only created explicitly, with [`Quantity::new`] or by multiplying a raw number by a unit constant.
/// There is no `From<V>`, so a bare number never turns into a quantity by accident.
///
/// # Examples
///
/// ```rust
/// use sival_core::dimension::Length;
/// use sival_core::scale::{Centi, Unity};
/// use sival_core::Quantity;
///
/// let metres = Quantity::<i32, Unity, Length>::new(4);
/// let centimetres = Quantity::<i32, Centi, Length>::new(2);
/// let total = metres + centimetres;
///
/// assert_eq!(total.value(), 402);
/// assert_eq!(total.convert::<i32, Unity>().value(), 4);
/// assert_eq!(total.convert::<f64, Unity>().value(), 4.02);
/// ```
pub struct Quantity<V: Numeric, S: Scale, D: Dimension> {
    value: V,
    tag: PhantomData<(S, D)>,
}

impl<V: Numeric, S: Scale, D: Dimension> Quantity<V, S, D> {
    /// The scale as a runtime fraction.
    pub const SCALE: Rational = S::RATIO;

    /// The dimension as a runtime exponent vector.
    pub const DIMENSION: DimensionVector = D::EXPONENTS;

    /// Creates a quantity from a payload already expressed in this type's scale.
    ///
    /// ```rust
    /// use sival_core::units::length::Kilometers;
    /// let d = Kilometers::new(3);
    /// assert_eq!(d.value(), 3);
    /// ```
    #[inline]
    pub const fn new(value: V) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }

    /// Returns the raw payload, expressed in this type's scale.
    #[inline]
    pub const fn value(self) -> V {
        self.value
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use sival_core::units::time::Seconds;
    /// assert_eq!(Seconds::new(-4).abs(), Seconds::new(4));
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Rebases into another payload type and scale of the same dimension.
    ///
    /// The payload is computed as `value × (S / T)`. Between integer payloads this is exact in `i128` and truncates
    /// toward zero; it panics if the result does not fit in `W`. When either payload is a float the product is taken
    /// in `f64` and narrowed into `W` with `as` semantics.
    ///
    /// ```rust
    /// use sival_core::units::length::{Kilometers, Meters};
    ///
    /// let m: Meters<i32> = Kilometers::new(7).convert();
    /// assert_eq!(m.value(), 7000);
    ///
    /// let km: Kilometers<i32> = Meters::new(1234.56).convert();
    /// assert_eq!(km.value(), 1);
    /// ```
    #[inline]
    pub fn convert<W: Numeric, T: Scale>(self) -> Quantity<W, T, D> {
        let factor = Rebase::<S, T>::FACTOR;
        Quantity::new(rebase(self.value, factor.multiplier(), factor.divider()))
    }

    /// Rebases into another scale, keeping the payload type.
    ///
    /// ```rust
    /// use sival_core::scale::{Centi, Unity};
    /// use sival_core::units::length::Meters;
    ///
    /// let cm = Meters::new(7).rescale::<Centi>();
    /// assert_eq!(cm.value(), 700);
    /// ```
    #[inline]
    pub fn rescale<T: Scale>(self) -> Quantity<V, T, D> {
        self.convert()
    }

    /// Changes the payload type, keeping the scale. Follows the same narrowing rules as [`Quantity::convert`].
    ///
    /// ```rust
    /// use sival_core::units::length::Meters;
    /// assert_eq!(Meters::new(43.21).cast::<i32>().value(), 43);
    /// ```
    #[inline]
    pub fn cast<W: Numeric>(self) -> Quantity<W, S, D> {
        Quantity::new(rebase(self.value, 1, 1))
    }

    /// The unit of this type, for display.
    #[inline]
    pub const fn unit() -> UnitSymbol<S, D> {
        UnitSymbol::new()
    }
}

impl<V: Numeric, S: Scale, D: Dimension> Clone for Quantity<V, S, D> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: Numeric, S: Scale, D: Dimension> Copy for Quantity<V, S, D> {}

impl<V: Numeric, S: Scale, D: Dimension> Default for Quantity<V, S, D> {
    #[inline]
    fn default() -> Self {
        Self::new(V::zero())
    }
}

impl<V: Numeric, S: Scale, D: Dimension> Debug for Quantity<V, S, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("scale", &S::RATIO)
            .field("dimension", &D::EXPONENTS)
            .finish()
    }
}

/// Formats as `<value> <unit>`, e.g. `402 (1/100) m`. A dimensionless quantity at scale 1/1 prints only its value.
impl<V: Numeric, S: Scale, D: Dimension> Display for Quantity<V, S, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let unit = UnitSymbol::<S, D>::new();
        if unit.is_empty() {
            Display::fmt(&self.value, f)
        } else {
            Display::fmt(&self.value, f)?;
            write!(f, " {unit}")
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

/// Orders two payloads of the same dimension by cross-multiplying with the scale ratio `S1 / S2`.
#[inline]
fn compare<V1, V2, S1, S2>(lhs: V1, rhs: V2) -> Option<Ordering>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
{
    let factor = Rebase::<S1, S2>::FACTOR;
    V1::widen(lhs).scaled_cmp(factor.multiplier(), V1::widen_rhs(rhs), factor.divider())
}

impl<V1, V2, S1, S2, D> PartialEq<Quantity<V2, S2, D>> for Quantity<V1, S1, D>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    D: Dimension,
{
    #[inline]
    fn eq(&self, other: &Quantity<V2, S2, D>) -> bool {
        compare::<V1, V2, S1, S2>(self.value, other.value) == Some(Ordering::Equal)
    }
}

impl<V1, V2, S1, S2, D> PartialOrd<Quantity<V2, S2, D>> for Quantity<V1, S1, D>
where
    V1: Promote<V2>,
    V2: Numeric,
    S1: Scale,
    S2: Scale,
    D: Dimension,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<V2, S2, D>) -> Option<Ordering> {
        compare::<V1, V2, S1, S2>(self.value, other.value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit symbols
// ─────────────────────────────────────────────────────────────────────────────

/// The printable unit of a scale and dimension, e.g. `(1000) m` or `m·s^-1`.
pub struct UnitSymbol<S, D>(PhantomData<(S, D)>);

impl<S: Scale, D: Dimension> UnitSymbol<S, D> {
    /// Creates the symbol.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// `true` for a dimensionless unit at scale 1/1.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        S::RATIO.is_one() && D::EXPONENTS.is_dimensionless()
    }

    /// Compares against `text` without allocating.
    ///
    /// ```rust
    /// use sival_core::units::length::Kilometers;
    /// assert!(Kilometers::<f64>::unit().matches("(1000) m"));
    /// assert!(!Kilometers::<f64>::unit().matches("km"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        let mut matcher = Matcher {
            rest: text,
            matched: true,
        };
        write!(matcher, "{self}").is_ok() && matcher.matched && matcher.rest.is_empty()
    }
}

impl<S: Scale, D: Dimension> Default for UnitSymbol<S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scale, D: Dimension> Clone for UnitSymbol<S, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Scale, D: Dimension> Copy for UnitSymbol<S, D> {}

impl<S: Scale, D: Dimension> Debug for UnitSymbol<S, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnitSymbol({self})")
    }
}

impl<S: Scale, D: Dimension> Display for UnitSymbol<S, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let ratio = S::RATIO;
        let dimension = D::EXPONENTS;
        if !ratio.is_one() {
            write!(f, "({ratio})")?;
            if !dimension.is_dimensionless() {
                f.write_char(' ')?;
            }
        }
        Display::fmt(&dimension, f)
    }
}

/// A `fmt::Write` sink that checks the written text against an expected string.
struct Matcher<'a> {
    rest: &'a str,
    matched: bool,
}

impl Write for Matcher<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.rest.strip_prefix(s) {
            Some(rest) if self.matched => self.rest = rest,
            _ => self.matched = false,
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

/// Serializes the raw payload only.
#[cfg(feature = "serde")]
impl<V, S, D> Serialize for Quantity<V, S, D>
where
    V: Numeric + Serialize,
    S: Scale,
    D: Dimension,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.value.serialize(serializer)
    }
}

/// Deserializes a raw payload, interpreted in this type's scale.
#[cfg(feature = "serde")]
impl<'de, V, S, D> Deserialize<'de> for Quantity<V, S, D>
where
    V: Numeric + Deserialize<'de>,
    S: Scale,
    D: Dimension,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        V::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(feature = "serde")]
impl<S: Scale, D: Dimension> Serialize for UnitSymbol<S, D> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Serde helpers that keep the unit next to the value.
///
/// Use with `#[serde(with = "sival_core::serde_with_unit")]`:
///
/// ```rust
/// # #[cfg(feature = "serde")]
/// # {
/// use serde::{Deserialize, Serialize};
/// use sival_core::units::length::Kilometers;
///
/// #[derive(Serialize, Deserialize)]
/// struct Leg {
///     #[serde(with = "sival_core::serde_with_unit")]
///     distance: Kilometers<f64>, // {"value": 4.5, "unit": "(1000) m"}
///     climb: Kilometers<f64>,    // 0.2
/// }
/// # }
/// ```
///
/// On input the `unit` field is optional; when present it must match the target type's unit exactly.
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, DeserializeSeed, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes as `{"value": <payload>, "unit": "<symbol>"}`.
    pub fn serialize<V, S, D, Ser>(quantity: &Quantity<V, S, D>, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        V: Numeric + Serialize,
        S: Scale,
        D: Dimension,
        Ser: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", &UnitSymbol::<S, D>::new())?;
        state.end()
    }

    /// Deserializes from a `{"value", "unit"}` map, rejecting a unit that does not match.
    pub fn deserialize<'de, V, S, D, De>(deserializer: De) -> Result<Quantity<V, S, D>, De::Error>
    where
        V: Numeric + Deserialize<'de>,
        S: Scale,
        D: Dimension,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<V, S, D>(PhantomData<(V, S, D)>);

        impl<'de, V, S, D> Visitor<'de> for QuantityVisitor<V, S, D>
        where
            V: Numeric + Deserialize<'de>,
            S: Scale,
            D: Dimension,
        {
            type Value = Quantity<V, S, D>;

            fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut value: Option<V> = None;
                let mut unit_seen = false;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit_seen {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            map.next_value_seed(UnitCheck::<S, D>(PhantomData))?;
                            unit_seen = true;
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                if !unit_seen {
                    log::debug!(
                        "quantity deserialized without a unit field, assuming '{}'",
                        UnitSymbol::<S, D>::new()
                    );
                }
                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }

    /// Validates a unit string against `UnitSymbol<S, D>` without allocating.
    struct UnitCheck<S, D>(PhantomData<(S, D)>);

    impl<'de, S: Scale, D: Dimension> DeserializeSeed<'de> for UnitCheck<S, D> {
        type Value = ();

        fn deserialize<De>(self, deserializer: De) -> Result<(), De::Error>
        where
            De: Deserializer<'de>,
        {
            deserializer.deserialize_str(self)
        }
    }

    impl<'de, S: Scale, D: Dimension> Visitor<'de> for UnitCheck<S, D> {
        type Value = ();

        fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
            write!(formatter, "the unit string '{}'", UnitSymbol::<S, D>::new())
        }

        fn visit_str<E>(self, found: &str) -> Result<(), E>
        where
            E: de::Error,
        {
            let expected = UnitSymbol::<S, D>::new();
            if expected.matches(found) {
                return Ok(());
            }
            log::warn!("unit mismatch while deserializing quantity: expected '{expected}', found '{found}'");
            Err(E::custom(format_args!(
                "unit mismatch: expected '{expected}', found '{found}'"
            )))
        }
    }
}
