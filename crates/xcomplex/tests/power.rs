//! Power over the fifteen canonical values, plus its documented limiting cases.

use xcomplex::{
    Canonical::{self, *},
    Kind, Polar,
};

const NAN: f64 = f64::NAN;
const INF: f64 = f64::INFINITY;

/// Compares exactly for zeros, infinities and NaN, and to a relative 1e-12 for
/// finite moduli (angles are compared on the circle).
fn assert_close(actual: Polar, expected: Polar, context: &str) {
    if expected.kind() != Kind::Finite || actual.kind() != Kind::Finite {
        assert_eq!(actual, expected, "{context}");
        return;
    }
    let modulus_err = (actual.modulus - expected.modulus).abs() / expected.modulus;
    let mut angle_err = (actual.angle - expected.angle).abs();
    if angle_err > 1.0 {
        angle_err = 2.0 - angle_err;
    }
    assert!(
        modulus_err <= 1e-12 && angle_err <= 1e-12,
        "{context}: got {actual}, expected {expected}"
    );
}

#[rustfmt::skip]
const POWER_TABLE: &[(Canonical, Canonical, f64, f64)] = &[
    // Zero ^ _
    (Zero, Zero, 1.0, 0.0),
    (Zero, NegZero, 1.0, 0.0),
    (Zero, ImagZero, 1.0, 0.0),
    (Zero, ComplexZero, 1.0, 0.0),
    (Zero, One, 0.0, 0.0),
    (Zero, Two, 0.0, 0.0),
    (Zero, NegOne, INF, 0.0),
    (Zero, NegTwo, INF, 0.0),
    (Zero, I, NAN, NAN),
    (Zero, OnePlusI, NAN, NAN),
    (Zero, Infinity, 0.0, 0.0),
    (Zero, NegInfinity, INF, 0.0),
    (Zero, ImagInfinity, NAN, NAN),
    (Zero, ComplexInfinity, NAN, NAN),
    (Zero, Nan, NAN, NAN),
    // NegZero ^ _
    (NegZero, Zero, 1.0, 0.0),
    (NegZero, NegZero, 1.0, 0.0),
    (NegZero, ImagZero, 1.0, 0.0),
    (NegZero, ComplexZero, 1.0, 0.0),
    (NegZero, One, 0.0, 1.0),
    (NegZero, Two, 0.0, 0.0),
    (NegZero, NegOne, INF, 1.0),
    (NegZero, NegTwo, INF, 0.0),
    (NegZero, I, NAN, NAN),
    (NegZero, OnePlusI, NAN, NAN),
    (NegZero, Infinity, 0.0, NAN),
    (NegZero, NegInfinity, INF, NAN),
    (NegZero, ImagInfinity, NAN, NAN),
    (NegZero, ComplexInfinity, NAN, NAN),
    (NegZero, Nan, NAN, NAN),
    // ImagZero ^ _
    (ImagZero, Zero, 1.0, 0.0),
    (ImagZero, NegZero, 1.0, 0.0),
    (ImagZero, ImagZero, 1.0, 0.0),
    (ImagZero, ComplexZero, 1.0, 0.0),
    (ImagZero, One, 0.0, 0.5),
    (ImagZero, Two, 0.0, 1.0),
    (ImagZero, NegOne, INF, -0.5),
    (ImagZero, NegTwo, INF, 1.0),
    (ImagZero, I, NAN, NAN),
    (ImagZero, OnePlusI, NAN, NAN),
    (ImagZero, Infinity, 0.0, NAN),
    (ImagZero, NegInfinity, INF, NAN),
    (ImagZero, ImagInfinity, NAN, NAN),
    (ImagZero, ComplexInfinity, NAN, NAN),
    (ImagZero, Nan, NAN, NAN),
    // ComplexZero ^ _
    (ComplexZero, Zero, 1.0, 0.0),
    (ComplexZero, NegZero, 1.0, 0.0),
    (ComplexZero, ImagZero, 1.0, 0.0),
    (ComplexZero, ComplexZero, 1.0, 0.0),
    (ComplexZero, One, 0.0, NAN),
    (ComplexZero, Two, 0.0, NAN),
    (ComplexZero, NegOne, INF, NAN),
    (ComplexZero, NegTwo, INF, NAN),
    (ComplexZero, I, NAN, NAN),
    (ComplexZero, OnePlusI, NAN, NAN),
    (ComplexZero, Infinity, 0.0, NAN),
    (ComplexZero, NegInfinity, INF, NAN),
    (ComplexZero, ImagInfinity, NAN, NAN),
    (ComplexZero, ComplexInfinity, NAN, NAN),
    (ComplexZero, Nan, NAN, NAN),
    // One ^ _
    (One, Zero, 1.0, 0.0),
    (One, NegZero, 1.0, 0.0),
    (One, ImagZero, 1.0, 0.0),
    (One, ComplexZero, 1.0, 0.0),
    (One, One, 1.0, 0.0),
    (One, Two, 1.0, 0.0),
    (One, NegOne, 1.0, 0.0),
    (One, NegTwo, 1.0, 0.0),
    (One, I, 1.0, 0.0),
    (One, OnePlusI, 1.0, 0.0),
    (One, Infinity, NAN, NAN),
    (One, NegInfinity, NAN, NAN),
    (One, ImagInfinity, NAN, NAN),
    (One, ComplexInfinity, NAN, NAN),
    (One, Nan, NAN, NAN),
    // Two ^ _
    (Two, Zero, 1.0, 0.0),
    (Two, NegZero, 1.0, 0.0),
    (Two, ImagZero, 1.0, 0.0),
    (Two, ComplexZero, 1.0, 0.0),
    (Two, One, 2.0, 0.0),
    (Two, Two, 4.0, 0.0),
    (Two, NegOne, 0.5, 0.0),
    (Two, NegTwo, 0.25, 0.0),
    (Two, I, 1.0, 0.2206356001526517),
    (Two, OnePlusI, 2.0, 0.2206356001526517),
    (Two, Infinity, INF, 0.0),
    (Two, NegInfinity, 0.0, 0.0),
    (Two, ImagInfinity, NAN, NAN),
    (Two, ComplexInfinity, NAN, NAN),
    (Two, Nan, NAN, NAN),
    // NegOne ^ _
    (NegOne, Zero, 1.0, 0.0),
    (NegOne, NegZero, 1.0, 0.0),
    (NegOne, ImagZero, 1.0, 0.0),
    (NegOne, ComplexZero, 1.0, 0.0),
    (NegOne, One, 1.0, 1.0),
    (NegOne, Two, 1.0, 0.0),
    (NegOne, NegOne, 1.0, 1.0),
    (NegOne, NegTwo, 1.0, 0.0),
    (NegOne, I, 0.04321391826377226, 0.0),
    (NegOne, OnePlusI, 0.04321391826377224, 1.0),
    (NegOne, Infinity, NAN, NAN),
    (NegOne, NegInfinity, NAN, NAN),
    (NegOne, ImagInfinity, 0.0, NAN),
    (NegOne, ComplexInfinity, NAN, NAN),
    (NegOne, Nan, NAN, NAN),
    // NegTwo ^ _
    (NegTwo, Zero, 1.0, 0.0),
    (NegTwo, NegZero, 1.0, 0.0),
    (NegTwo, ImagZero, 1.0, 0.0),
    (NegTwo, ComplexZero, 1.0, 0.0),
    (NegTwo, One, 2.0, 1.0),
    (NegTwo, Two, 4.0, 0.0),
    (NegTwo, NegOne, 0.5, 1.0),
    (NegTwo, NegTwo, 0.25, 0.0),
    (NegTwo, I, 0.04321391826377226, 0.2206356001526517),
    (NegTwo, OnePlusI, 0.08642783652754452, -0.7793643998473483),
    (NegTwo, Infinity, INF, NAN),
    (NegTwo, NegInfinity, 0.0, NAN),
    (NegTwo, ImagInfinity, 0.0, NAN),
    (NegTwo, ComplexInfinity, NAN, NAN),
    (NegTwo, Nan, NAN, NAN),
    // I ^ _
    (I, Zero, 1.0, 0.0),
    (I, NegZero, 1.0, 0.0),
    (I, ImagZero, 1.0, 0.0),
    (I, ComplexZero, 1.0, 0.0),
    (I, One, 1.0, 0.5),
    (I, Two, 1.0, 1.0),
    (I, NegOne, 1.0, -0.5),
    (I, NegTwo, 1.0, 1.0),
    (I, I, 0.20787957635076193, 0.0),
    (I, OnePlusI, 0.20787957635076187, 0.5000000000000001),
    (I, Infinity, NAN, NAN),
    (I, NegInfinity, NAN, NAN),
    (I, ImagInfinity, 0.0, NAN),
    (I, ComplexInfinity, NAN, NAN),
    (I, Nan, NAN, NAN),
    // OnePlusI ^ _
    (OnePlusI, Zero, 1.0, 0.0),
    (OnePlusI, NegZero, 1.0, 0.0),
    (OnePlusI, ImagZero, 1.0, 0.0),
    (OnePlusI, ComplexZero, 1.0, 0.0),
    (OnePlusI, One, 1.4142135623730951, 0.25),
    (OnePlusI, Two, 2.0, 0.5),
    (OnePlusI, NegOne, 0.7071067811865475, -0.25),
    (OnePlusI, NegTwo, 0.49999999999999994, -0.5),
    (OnePlusI, I, 0.45593812776599624, 0.11031780007632581),
    (OnePlusI, OnePlusI, 0.644793883889669, 0.3603178000763258),
    (OnePlusI, Infinity, INF, NAN),
    (OnePlusI, NegInfinity, 0.0, NAN),
    (OnePlusI, ImagInfinity, 0.0, NAN),
    (OnePlusI, ComplexInfinity, NAN, NAN),
    (OnePlusI, Nan, NAN, NAN),
    // Infinity ^ _
    (Infinity, Zero, 1.0, 0.0),
    (Infinity, NegZero, 1.0, 0.0),
    (Infinity, ImagZero, 1.0, 0.0),
    (Infinity, ComplexZero, 1.0, 0.0),
    (Infinity, One, INF, 0.0),
    (Infinity, Two, INF, 0.0),
    (Infinity, NegOne, 0.0, 0.0),
    (Infinity, NegTwo, 0.0, 0.0),
    (Infinity, I, NAN, NAN),
    (Infinity, OnePlusI, INF, NAN),
    (Infinity, Infinity, INF, 0.0),
    (Infinity, NegInfinity, 0.0, 0.0),
    (Infinity, ImagInfinity, NAN, NAN),
    (Infinity, ComplexInfinity, NAN, NAN),
    (Infinity, Nan, NAN, NAN),
    // NegInfinity ^ _
    (NegInfinity, Zero, 1.0, 0.0),
    (NegInfinity, NegZero, 1.0, 0.0),
    (NegInfinity, ImagZero, 1.0, 0.0),
    (NegInfinity, ComplexZero, 1.0, 0.0),
    (NegInfinity, One, INF, 1.0),
    (NegInfinity, Two, INF, 0.0),
    (NegInfinity, NegOne, 0.0, 1.0),
    (NegInfinity, NegTwo, 0.0, 0.0),
    (NegInfinity, I, NAN, NAN),
    (NegInfinity, OnePlusI, INF, NAN),
    (NegInfinity, Infinity, INF, NAN),
    (NegInfinity, NegInfinity, 0.0, NAN),
    (NegInfinity, ImagInfinity, NAN, NAN),
    (NegInfinity, ComplexInfinity, NAN, NAN),
    (NegInfinity, Nan, NAN, NAN),
    // ImagInfinity ^ _
    (ImagInfinity, Zero, 1.0, 0.0),
    (ImagInfinity, NegZero, 1.0, 0.0),
    (ImagInfinity, ImagZero, 1.0, 0.0),
    (ImagInfinity, ComplexZero, 1.0, 0.0),
    (ImagInfinity, One, INF, 0.5),
    (ImagInfinity, Two, INF, 1.0),
    (ImagInfinity, NegOne, 0.0, -0.5),
    (ImagInfinity, NegTwo, 0.0, 1.0),
    (ImagInfinity, I, NAN, NAN),
    (ImagInfinity, OnePlusI, INF, NAN),
    (ImagInfinity, Infinity, INF, NAN),
    (ImagInfinity, NegInfinity, 0.0, NAN),
    (ImagInfinity, ImagInfinity, NAN, NAN),
    (ImagInfinity, ComplexInfinity, NAN, NAN),
    (ImagInfinity, Nan, NAN, NAN),
    // ComplexInfinity ^ _
    (ComplexInfinity, Zero, 1.0, 0.0),
    (ComplexInfinity, NegZero, 1.0, 0.0),
    (ComplexInfinity, ImagZero, 1.0, 0.0),
    (ComplexInfinity, ComplexZero, 1.0, 0.0),
    (ComplexInfinity, One, INF, NAN),
    (ComplexInfinity, Two, INF, NAN),
    (ComplexInfinity, NegOne, 0.0, NAN),
    (ComplexInfinity, NegTwo, 0.0, NAN),
    (ComplexInfinity, I, NAN, NAN),
    (ComplexInfinity, OnePlusI, NAN, NAN),
    (ComplexInfinity, Infinity, INF, NAN),
    (ComplexInfinity, NegInfinity, 0.0, NAN),
    (ComplexInfinity, ImagInfinity, NAN, NAN),
    (ComplexInfinity, ComplexInfinity, NAN, NAN),
    (ComplexInfinity, Nan, NAN, NAN),
    // Nan ^ _
    (Nan, Zero, 1.0, 0.0),
    (Nan, NegZero, 1.0, 0.0),
    (Nan, ImagZero, 1.0, 0.0),
    (Nan, ComplexZero, 1.0, 0.0),
    (Nan, One, NAN, NAN),
    (Nan, Two, NAN, NAN),
    (Nan, NegOne, NAN, NAN),
    (Nan, NegTwo, NAN, NAN),
    (Nan, I, NAN, NAN),
    (Nan, OnePlusI, NAN, NAN),
    (Nan, Infinity, NAN, NAN),
    (Nan, NegInfinity, NAN, NAN),
    (Nan, ImagInfinity, NAN, NAN),
    (Nan, ComplexInfinity, NAN, NAN),
    (Nan, Nan, NAN, NAN),
];

#[test]
fn canonical_power_table() {
    assert_eq!(POWER_TABLE.len(), 225);
    for &(base, exponent, modulus, angle) in POWER_TABLE {
        let actual = base.value().power(exponent.value());
        assert_close(actual, Polar::new(modulus, angle), &format!("{base} ^ {exponent}"));
    }
}

#[test]
fn canonical_power_results_are_canonical() {
    for &(base, exponent, ..) in POWER_TABLE {
        let z = base.value().power(exponent.value());
        assert!(z.is_canonical(), "{base} ^ {exponent} = {z}");
    }
}

#[test]
fn zero_exponent_of_any_direction_gives_one() {
    for base in [
        Polar::NAN,
        Polar::COMPLEX_ZERO,
        Polar::COMPLEX_INFINITY,
        Polar::NEG_INFINITY,
        Polar::new(3.5, -0.2),
    ] {
        for angle in [0.0, 1.0, 0.5, -0.5, 0.3, NAN] {
            assert_eq!(base.power(Polar::new(0.0, angle)), Polar::ONE, "{base} ^ (0, {angle})");
        }
    }
}

#[test]
fn i_squared_is_minus_one() {
    assert_eq!(Polar::new(1.0, 0.5).power(Polar::new(2.0, 0.0)), Polar::new(1.0, 1.0));
}

#[test]
fn zero_to_infinity_is_zero() {
    assert_eq!(Polar::new(0.0, 0.0).power(Polar::new(INF, 0.0)), Polar::new(0.0, 0.0));
}

#[test]
fn generic_zero_to_infinity_stays_generic() {
    assert_eq!(Polar::new(0.0, NAN).power(Polar::new(INF, 0.0)), Polar::new(0.0, NAN));
}

#[test]
fn imaginary_zero_to_minus_two_is_minus_infinity() {
    assert_eq!(Polar::new(0.0, 0.5).power(Polar::new(2.0, 1.0)), Polar::new(INF, 1.0));
}

#[test]
fn positive_real_to_real_lands_on_real_axis() {
    for base in [0.3, 2.0, 3.0, 1e10] {
        for exponent in [Polar::new(2.5, 0.0), Polar::new(2.5, 1.0), Polar::new(1.0 / 3.0, 0.0)] {
            let z = Polar::new(base, 0.0).power(exponent);
            assert_eq!(z.angle, 0.0, "{base} ^ {exponent}");
        }
    }
}

#[test]
fn zero_base_with_imaginary_component_is_nan() {
    for base in [Polar::ZERO, Polar::NEG_ZERO, Polar::IMAG_ZERO, Polar::NEG_IMAG_ZERO] {
        for exponent in [Polar::I, Polar::NEG_I, Polar::new(2.0, 0.25), Polar::new(0.5, -0.9)] {
            assert_eq!(base.power(exponent), Polar::NAN, "{base} ^ {exponent}");
        }
    }
}

#[test]
fn generic_values_to_non_real_exponents_are_nan() {
    for base in [Polar::COMPLEX_ZERO, Polar::COMPLEX_INFINITY] {
        for exponent in [Polar::I, Polar::new(2.0, 0.25), Polar::IMAG_INFINITY, Polar::COMPLEX_INFINITY, Polar::NAN] {
            assert_eq!(base.power(exponent), Polar::NAN, "{base} ^ {exponent}");
        }
    }
}

#[test]
fn sqrt_agrees_with_half_power() {
    for z in [
        Polar::new(4.0, 0.6),
        Polar::new(2.0, -0.9),
        Polar::new(0.01, 0.25),
        Polar::NEG_ONE,
        Polar::I,
    ] {
        assert_close(z.sqrt(), z.power(Polar::new(0.5, 0.0)), &format!("sqrt {z}"));
    }
    assert_eq!(Polar::NEG_ONE.sqrt(), Polar::I);
    assert_eq!(Polar::NEG_ZERO.sqrt(), Polar::new(0.0, 0.5));
    assert_eq!(Polar::NEG_INFINITY.sqrt(), Polar::IMAG_INFINITY);
}

#[test]
fn integer_powers_match_repeated_multiplication() {
    let z = Polar::new(1.5, 0.35);
    let cube = z * z * z;
    assert_close(z.power(Polar::new(3.0, 0.0)), cube, "z^3");
    assert_close(z.power(Polar::new(1.0, 1.0)), z.reciprocal(), "z^-1");
}

#[test]
fn minus_one_to_off_axis_power_stays_in_range() {
    let z = NegOne.value().power(OnePlusI.value());
    assert!(z.is_canonical(), "{z}");
    assert!(z.angle > -1.0 && z.angle <= 1.0, "{z}");
}
