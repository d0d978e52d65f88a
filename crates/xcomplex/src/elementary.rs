//! Closed-form operations that never need trigonometry or logarithms.
//!
//! In polar form multiplication, reciprocal, negation, absolute value, sign and
//! square root only touch the modulus with one float operation and shift the
//! angle, so the IEEE rules on the modulus (`0 · ∞ = NaN`, `1 / 0 = ∞`, ...)
//! carry straight over to the extended domain.

use std::ops::{Div, Mul, Neg};

use crate::{
    angle::{negate, normalize},
    value::Polar,
};

impl Polar {
    /// Product: moduli multiply, angles add.
    ///
    /// `0 · ∞` in the modulus is NaN, as is anything times a NaN modulus; both
    /// collapse to the NaN value.
    #[must_use]
    pub fn multiply(self, rhs: Self) -> Self {
        Self::from_parts(self.modulus * rhs.modulus, self.angle + rhs.angle)
    }

    /// Multiplicative inverse. `1/0 = ∞` and `1/∞ = 0`, keeping the mirrored direction.
    #[must_use]
    pub fn reciprocal(self) -> Self {
        Self::new(1.0 / self.modulus, negate(self.angle))
    }

    /// Rotation by a half turn.
    #[must_use]
    pub fn unary_minus(self) -> Self {
        Self::new(self.modulus, normalize(self.angle + 1.0))
    }

    /// The modulus as a non-negative real.
    #[must_use]
    pub fn abs(self) -> Self {
        if self.is_nan() { Self::NAN } else { Self::new(self.modulus, 0.0) }
    }

    /// Unit value in the same direction.
    ///
    /// Zero keeps a zero modulus (so `sign(-0) = -0`), a directed infinity becomes
    /// the unit in its direction and NaN stays NaN. `abs(z) · sign(z) == z` for
    /// every finite `z`.
    ///
    /// The generic infinity gives NaN rather than the literal `(1, NaN)`: a unit
    /// modulus with no direction is not a valid value, and no direction exists
    /// to take a unit from.
    #[must_use]
    pub fn sign(self) -> Self {
        let modulus = if self.modulus.is_nan() {
            f64::NAN
        } else if self.modulus == 0.0 {
            0.0
        } else {
            1.0
        };
        Self::from_parts(modulus, self.angle)
    }

    /// Principal square root.
    ///
    /// Halving an angle in `(-1, 1]` lands in `(-0.5, 0.5]`, so no renormalization
    /// is needed and no logarithm is involved.
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self::new(self.modulus.sqrt(), self.angle / 2.0)
    }
}

impl Mul for Polar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for Polar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.multiply(rhs.reciprocal())
    }
}

impl Neg for Polar {
    type Output = Self;

    fn neg(self) -> Self {
        self.unary_minus()
    }
}
