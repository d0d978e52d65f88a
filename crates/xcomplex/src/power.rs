//! Generalized exponentiation over the extended domain.
//!
//! For a base `(r, t)` and exponent `(s, b)` the principal power is
//!
//! ```text
//! z^w = exp(w · ln z),   ln z = ln r + i·tπ,   w = s·(cos bπ + i·sin bπ)
//! ```
//!
//! which in polar form gives
//!
//! ```text
//! modulus = exp(s · (cos bπ · ln r − sin bπ · tπ))
//! angle   = s · (cos bπ · tπ + sin bπ · ln r) / π
//! ```
//!
//! Evaluated naively this produces NaN whenever one of the products is
//! `0 · ∞` (real exponent on a zero base, `ln 0 = -∞`; imaginary exponent on an
//! infinite base, ...), even where the limit is finite. Two devices keep the
//! formula total without inventing values:
//!
//! - [`sincospi`] returns exact zeros on the axes, so a real or imaginary exponent
//!   yields a coefficient that is *provably* zero rather than numerically small;
//! - [`guarded_mul`] treats a provably zero coefficient as annihilating its
//!   partner, even when the partner is infinite or NaN.
//!
//! Anything not rescued by those rules is a genuinely indeterminate form and comes
//! out as NaN.

use std::f64::consts::PI;

use crate::{angle::sincospi, value::Polar};

/// Multiplies `coefficient * value`, except that a coefficient of exactly zero
/// yields zero regardless of `value` (including `±∞` and NaN).
///
/// Only literal zeros qualify; a tiny non-zero coefficient multiplies normally.
#[must_use]
pub fn guarded_mul(coefficient: f64, value: f64) -> f64 {
    if coefficient == 0.0 { 0.0 } else { coefficient * value }
}

impl Polar {
    /// Raises `self` to the power `exponent`, principal branch.
    ///
    /// Total over the extended domain:
    /// - any base to an exponent of zero modulus (whatever its direction, even
    ///   unknown) is exactly `1`, NaN base included;
    /// - a zero base to an exponent with a non-real component is NaN;
    /// - a positive real base to a real exponent lands exactly on the real axis;
    /// - directed zeros and infinities raised to infinite real exponents collapse
    ///   to directed or generic zeros and infinities, generic ones stay generic.
    #[must_use]
    pub fn power(self, exponent: Self) -> Self {
        let (r, t) = (self.modulus, self.angle);
        let (s, b) = (exponent.modulus, exponent.angle);
        if s == 0.0 {
            return Self::ONE;
        }

        let log_r = r.ln();
        let t_pi = t * PI;
        let (sin_b, cos_b) = sincospi(b);

        let modulus = if sin_b != 0.0 && r == 0.0 {
            // ln 0 times a non-zero imaginary coefficient
            f64::NAN
        } else {
            (s * (cos_b * log_r - guarded_mul(sin_b, t_pi))).exp()
        };
        let angle = if sin_b == 0.0 && t_pi == 0.0 && log_r != 0.0 {
            0.0
        } else {
            (cos_b * t_pi + guarded_mul(sin_b, log_r)) * s / PI
        };
        Self::from_parts(modulus, angle)
    }
}
