//! The polar value type and its named constants.

use std::fmt;

use crate::angle::normalize;

/// An extended complex number in polar form.
///
/// `modulus` is a non-negative real, `+∞` or NaN. `angle` is the direction in
/// half-turns (`angle / π`), kept in the canonical range `(-1, 1]`.
///
/// Zero and infinite moduli keep their direction, which gives the directed
/// zeros and infinities (`+0`, `-0`, `0i`, `+∞`, `-∞`, `∞i`, ...). A NaN angle on
/// a zero or infinite modulus means the direction is unknown: the generic
/// complex zero and the generic complex infinity. A NaN modulus always carries a
/// NaN angle and is the single universal NaN value.
///
/// The named directed zeros and infinities lie on the axes, but operations may
/// produce a zero or infinity approached from any direction, e.g. `0 · (1+i)`.
///
/// Values are immutable; every operation returns a new `Polar`.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Polar {
    /// Magnitude: `0`, a positive real, `+∞` or NaN.
    pub modulus: f64,
    /// Direction in half-turns, in `(-1, 1]`, or NaN when unknown.
    pub angle: f64,
}

/// Coarse classification of a [`Polar`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, serde::Serialize, serde::Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum Kind {
    /// The universal NaN value.
    Nan,
    /// Zero modulus with unknown direction.
    GenericZero,
    /// Zero modulus with a known direction.
    DirectedZero,
    /// Finite positive modulus.
    Finite,
    /// Infinite modulus with a known direction.
    DirectedInfinity,
    /// Infinite modulus with unknown direction.
    GenericInfinity,
}

impl Polar {
    /// `+0`
    pub const ZERO: Self = Self::new(0.0, 0.0);
    /// `-0`
    pub const NEG_ZERO: Self = Self::new(0.0, 1.0);
    /// Zero approached along the positive imaginary axis.
    pub const IMAG_ZERO: Self = Self::new(0.0, 0.5);
    /// Zero approached along the negative imaginary axis.
    pub const NEG_IMAG_ZERO: Self = Self::new(0.0, -0.5);
    /// Zero of unknown direction.
    pub const COMPLEX_ZERO: Self = Self::new(0.0, f64::NAN);
    pub const ONE: Self = Self::new(1.0, 0.0);
    pub const NEG_ONE: Self = Self::new(1.0, 1.0);
    pub const I: Self = Self::new(1.0, 0.5);
    pub const NEG_I: Self = Self::new(1.0, -0.5);
    /// `+∞`
    pub const INFINITY: Self = Self::new(f64::INFINITY, 0.0);
    /// `-∞`
    pub const NEG_INFINITY: Self = Self::new(f64::INFINITY, 1.0);
    /// `∞·i`
    pub const IMAG_INFINITY: Self = Self::new(f64::INFINITY, 0.5);
    /// `-∞·i`
    pub const NEG_IMAG_INFINITY: Self = Self::new(f64::INFINITY, -0.5);
    /// Infinity of unknown direction.
    pub const COMPLEX_INFINITY: Self = Self::new(f64::INFINITY, f64::NAN);
    /// The universal NaN value.
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN);

    /// Creates a value from its raw parts without any canonicalization.
    #[must_use]
    pub const fn new(modulus: f64, angle: f64) -> Self {
        Self { modulus, angle }
    }

    /// Creates a canonical value from arbitrary parts.
    ///
    /// A negative modulus is folded into a half-turn of the angle, and the angle
    /// is normalized into `(-1, 1]` (an infinite angle becomes unknown). A NaN
    /// modulus gives [`Polar::NAN`], as does an unknown direction on a finite
    /// non-zero modulus.
    #[must_use]
    pub fn from_parts(modulus: f64, angle: f64) -> Self {
        if modulus.is_nan() {
            return Self::NAN;
        }
        let angle = if modulus < 0.0 { normalize(angle + 1.0) } else { normalize(angle) };
        let modulus = modulus.abs();
        if angle.is_nan() && modulus != 0.0 && modulus.is_finite() {
            Self::NAN
        } else {
            Self::new(modulus, angle)
        }
    }

    /// Returns true if the value satisfies the representation invariants.
    #[must_use]
    pub fn is_canonical(self) -> bool {
        if self.modulus.is_nan() {
            return self.angle.is_nan();
        }
        if self.modulus < 0.0 {
            return false;
        }
        if self.angle.is_nan() {
            // only zero and infinity may have an unknown direction
            return self.modulus == 0.0 || self.modulus.is_infinite();
        }
        self.angle > -1.0 && self.angle <= 1.0
    }

    #[must_use]
    pub fn kind(self) -> Kind {
        let m = self.modulus;
        if m.is_nan() {
            Kind::Nan
        } else if m == 0.0 {
            if self.angle.is_nan() { Kind::GenericZero } else { Kind::DirectedZero }
        } else if m.is_infinite() {
            if self.angle.is_nan() {
                Kind::GenericInfinity
            } else {
                Kind::DirectedInfinity
            }
        } else {
            Kind::Finite
        }
    }

    #[must_use]
    pub fn is_nan(self) -> bool {
        self.modulus.is_nan()
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.modulus == 0.0
    }

    #[must_use]
    pub fn is_infinite(self) -> bool {
        self.modulus.is_infinite()
    }

    /// Returns true for a finite modulus, zero included.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.modulus.is_finite()
    }
}

/// Compares component-wise, treating NaN as equal to NaN.
///
/// The NaN sentinel and the generic zero/infinity are ordinary values of the
/// algebra, so `Polar::NAN == Polar::NAN` holds.
impl PartialEq for Polar {
    fn eq(&self, other: &Self) -> bool {
        same(self.modulus, other.modulus) && same(self.angle, other.angle)
    }
}

fn same(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.modulus, self.angle)
    }
}

impl From<f64> for Polar {
    /// Embeds a real number, keeping the sign of zero as direction.
    fn from(x: f64) -> Self {
        if x.is_nan() {
            Self::NAN
        } else if x.is_sign_negative() {
            Self::new(-x, 1.0)
        } else {
            Self::new(x, 0.0)
        }
    }
}
