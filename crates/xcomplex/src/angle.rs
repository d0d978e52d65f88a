//! Angle helpers for values measured in half-turns.
//!
//! Every angle in this crate is stored as `angle / π`, so a full turn is `2.0`
//! and the canonical range is the half-open interval `(-1, 1]`. Keeping angles
//! in half-turns means the axis directions (`0`, `±0.5`, `1`) are exactly
//! representable, which is what lets [`sincospi`] return exact zeros and ones
//! on the axes.

use std::f64::consts::PI;

/// Reduces an arbitrary angle (in half-turns) into the canonical range `(-1, 1]`.
///
/// Equivalent to `t + 2 * floor((1 - t) / 2)`, but the even offset is computed
/// separately, rounded to an integer and only then added back to `t`. This keeps
/// small negative inputs such as `-0.1` bit-exact, makes the function idempotent,
/// and maps the boundary `-1` to `1`.
///
/// When `t + 1` rounds onto a multiple of two (e.g. `t = 1 + ε`), the rounded
/// offset can land one whole turn short, so a result still outside the range is
/// folded back by a full turn.
///
/// NaN and infinite inputs yield NaN. `-0.0` becomes `+0.0`.
#[must_use]
pub fn normalize(t: f64) -> f64 {
    let offset = (((t + 1.0) % 2.0 - 2.0) % 2.0 - t + 1.0).round();
    let n = offset + t;
    if n > 1.0 {
        n - 2.0
    } else if n <= -1.0 {
        n + 2.0
    } else {
        n
    }
}

/// Returns `(sin(tπ), cos(tπ))` for an angle already in the canonical range.
///
/// The four axis angles are answered from a table, so `sincospi(1.0)` is exactly
/// `(0.0, -1.0)` rather than carrying the `1.2e-16` residual of `PI.sin()`.
/// Callers rely on those exact zeros as decision flags.
#[must_use]
pub fn sincospi(t: f64) -> (f64, f64) {
    match t {
        0.0 => (0.0, 1.0),
        1.0 => (0.0, -1.0),
        0.5 => (1.0, 0.0),
        -0.5 => (-1.0, 0.0),
        _ => (t * PI).sin_cos(),
    }
}

/// Negates a canonical angle without leaving the canonical range.
///
/// `1` is its own negation because the range has no `-1` representative, and
/// `0` stays `+0.0`.
#[must_use]
pub(crate) fn negate(t: f64) -> f64 {
    if t == 1.0 { 1.0 } else { 0.0 - t }
}

/// Returns true when `t` and `b` point in diametrically opposite directions.
///
/// Besides the plain `|t - b| == 1` test this also accepts `b == normalize(t + 1)`
/// and the mirrored case, since that is exactly how a unary minus produces its
/// angle and the subtraction alone can round away from `1`.
#[must_use]
pub(crate) fn opposes(t: f64, b: f64) -> bool {
    (t - b).abs() == 1.0 || normalize(t + 1.0) == b || normalize(b + 1.0) == t
}
