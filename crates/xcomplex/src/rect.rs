//! Conversion between finite polar values and Cartesian coordinates.
//!
//! Infinities have no finite Cartesian form, so both directions reject them with
//! a [`RectError`] instead of producing NaN coordinates. Callers that need to add
//! infinities (see [`Polar::add`]) resolve those cases before reaching here.

use std::{f64::consts::PI, fmt, ops::Add};

use crate::{
    angle::{negate, sincospi},
    power::guarded_mul,
    value::Polar,
};

/// A finite complex number in Cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Add for Rect {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Error returned when a value has no finite Cartesian counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RectError {
    /// The polar value has an infinite modulus.
    InfiniteModulus { angle: f64 },
    /// A Cartesian component is infinite.
    NonFiniteComponent { x: f64, y: f64 },
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfiniteModulus { angle } => {
                write!(f, "infinite modulus at angle {angle} has no Cartesian form")
            }
            Self::NonFiniteComponent { x, y } => {
                write!(f, "Cartesian components must be finite, got ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for RectError {}

impl Polar {
    /// Converts a finite value to Cartesian coordinates.
    ///
    /// Axis angles give exact components (`-1 → (-1, 0)`, not `(-1, 1.2e-16)`).
    /// A zero modulus gives `(0, 0)` whatever the direction, generic zero included.
    /// NaN converts to `(NaN, NaN)`.
    pub fn to_rect(self) -> Result<Rect, RectError> {
        if self.modulus.is_infinite() {
            return Err(RectError::InfiniteModulus { angle: self.angle });
        }
        let (sin, cos) = sincospi(self.angle);
        Ok(Rect::new(
            guarded_mul(self.modulus, cos),
            guarded_mul(self.modulus, sin),
        ))
    }

    /// Converts finite Cartesian coordinates to polar form.
    ///
    /// `(0, 0)` has no recoverable direction and becomes the generic complex zero.
    /// Points on the axes get exact axis angles; elsewhere the angle comes from
    /// `acos(x / |z|)` with the sign of `y`, except that `π` stays `1`. Inputs
    /// whose modulus overflows convert to an infinity that keeps its direction.
    pub fn from_rect(x: f64, y: f64) -> Result<Self, RectError> {
        if x.is_nan() || y.is_nan() {
            return Ok(Self::NAN);
        }
        if x.is_infinite() || y.is_infinite() {
            return Err(RectError::NonFiniteComponent { x, y });
        }
        let polar = match (x == 0.0, y == 0.0) {
            (true, true) => Self::COMPLEX_ZERO,
            (true, false) => Self::new(y.abs(), if y > 0.0 { 0.5 } else { -0.5 }),
            (false, true) => Self::new(x.abs(), if x > 0.0 { 0.0 } else { 1.0 }),
            (false, false) => {
                // direction from unit-scaled components; the modulus may overflow
                let scale = x.abs().max(y.abs());
                let (u, v) = (x / scale, y / scale);
                let modulus = x.hypot(y);
                let abs_angle = (u / u.hypot(v)).acos() / PI;
                let angle = if y < 0.0 { negate(abs_angle) } else { abs_angle };
                Self::new(modulus, angle)
            }
        };
        Ok(polar)
    }
}
