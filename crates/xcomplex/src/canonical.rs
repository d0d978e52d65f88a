//! The fifteen named reference values used to exercise every edge case.
//!
//! These cover each zero and infinity flavour, a few small reals of both signs,
//! `i`, an off-axis value (`1+i`) and NaN. Pairwise tables over this set are how
//! the behavior of [`Polar::power`] is pinned down.

use std::f64::consts::SQRT_2;

use strum::IntoEnumIterator;

use crate::value::Polar;

/// A named canonical value.
///
/// The string names (`"0"`, `"-0"`, `"c0"`, `"1+i"`, `"cinf"`, ...) are what the
/// command line accepts and what tables print.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Canonical {
    #[strum(serialize = "0")]
    Zero,
    #[strum(serialize = "-0")]
    NegZero,
    #[strum(serialize = "0i")]
    ImagZero,
    #[strum(serialize = "c0")]
    ComplexZero,
    #[strum(serialize = "1")]
    One,
    #[strum(serialize = "2")]
    Two,
    #[strum(serialize = "-1")]
    NegOne,
    #[strum(serialize = "-2")]
    NegTwo,
    #[strum(serialize = "i")]
    I,
    #[strum(serialize = "1+i")]
    OnePlusI,
    #[strum(serialize = "inf")]
    Infinity,
    #[strum(serialize = "-inf")]
    NegInfinity,
    #[strum(serialize = "infi")]
    ImagInfinity,
    #[strum(serialize = "cinf")]
    ComplexInfinity,
    #[strum(serialize = "nan")]
    Nan,
}

impl Canonical {
    /// Returns the `(modulus, angle)` literal for this name.
    #[must_use]
    pub const fn value(self) -> Polar {
        match self {
            Self::Zero => Polar::ZERO,
            Self::NegZero => Polar::NEG_ZERO,
            Self::ImagZero => Polar::IMAG_ZERO,
            Self::ComplexZero => Polar::COMPLEX_ZERO,
            Self::One => Polar::ONE,
            Self::Two => Polar::new(2.0, 0.0),
            Self::NegOne => Polar::NEG_ONE,
            Self::NegTwo => Polar::new(2.0, 1.0),
            Self::I => Polar::I,
            Self::OnePlusI => Polar::new(SQRT_2, 0.25),
            Self::Infinity => Polar::INFINITY,
            Self::NegInfinity => Polar::NEG_INFINITY,
            Self::ImagInfinity => Polar::IMAG_INFINITY,
            Self::ComplexInfinity => Polar::COMPLEX_INFINITY,
            Self::Nan => Polar::NAN,
        }
    }

    /// Finds the canonical name whose value equals `z` exactly.
    #[must_use]
    pub fn matching(z: Polar) -> Option<Self> {
        Self::iter().find(|c| c.value() == z)
    }
}

impl From<Canonical> for Polar {
    fn from(c: Canonical) -> Self {
        c.value()
    }
}
