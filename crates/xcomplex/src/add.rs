//! Addition over the extended domain.

use std::ops::{Add, Sub};

use crate::{
    angle::opposes,
    rect::{Rect, RectError},
    value::Polar,
};

impl Polar {
    /// Sum of two values.
    ///
    /// Resolution order:
    /// 1. a NaN operand gives NaN;
    /// 2. equal directions add moduli, keeping the direction (`∞ + ∞ = ∞`);
    /// 3. two infinities give NaN when they point in opposite directions or when
    ///    either direction is unknown, otherwise the generic complex infinity;
    /// 4. a single infinity absorbs the finite operand;
    /// 5. equal moduli in opposite directions cancel to the generic complex zero;
    /// 6. anything else is summed in Cartesian coordinates.
    #[must_use]
    #[expect(clippy::should_implement_trait, reason = "`Add` is implemented and forwards here")]
    pub fn add(self, rhs: Self) -> Self {
        if self.is_nan() || rhs.is_nan() {
            return Self::NAN;
        }
        let (t, b) = (self.angle, rhs.angle);
        if t == b {
            return Self::new(self.modulus + rhs.modulus, t);
        }
        match (self.is_infinite(), rhs.is_infinite()) {
            (true, true) => {
                if t.is_nan() || b.is_nan() || opposes(t, b) {
                    Self::NAN
                } else {
                    Self::COMPLEX_INFINITY
                }
            }
            (true, false) => self,
            (false, true) => rhs,
            (false, false) => {
                if self.modulus == rhs.modulus && opposes(t, b) {
                    return Self::COMPLEX_ZERO;
                }
                // both operands are finite here, so the bridge cannot refuse them
                add_finite(self, rhs).unwrap_or(Self::NAN)
            }
        }
    }
}

/// Sums two finite values through Cartesian coordinates.
///
/// When a component of the sum or its modulus overflows, the operands are halved
/// first and the modulus doubled afterwards, so the result keeps its direction
/// and becomes an infinity only if the true modulus is out of range.
fn add_finite(lhs: Polar, rhs: Polar) -> Result<Polar, RectError> {
    let (a, b) = (lhs.to_rect()?, rhs.to_rect()?);
    let sum = a + b;
    if sum.is_finite() {
        let z = Polar::from_rect(sum.x, sum.y)?;
        if !z.is_infinite() {
            return Ok(z);
        }
    }
    let half: Rect = a.scale(0.5) + b.scale(0.5);
    let z = Polar::from_rect(half.x, half.y)?;
    Ok(Polar::new(z.modulus * 2.0, z.angle))
}

impl Add for Polar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Polar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::add(self, rhs.unary_minus())
    }
}
