//! Fuzz target: add and multiply arbitrary values.
//!
//! Same input layout as `fuzz_power`. Both operations must stay canonical and
//! commutative for every pair of canonical operands.

#![no_main]

use libfuzzer_sys::fuzz_target;

use xcomplex::Polar;

fn read_f64(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    f64::from_le_bytes(buf)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let lhs = Polar::from_parts(read_f64(&data[0..8]), read_f64(&data[8..16]));
    let rhs = Polar::from_parts(read_f64(&data[16..24]), read_f64(&data[24..32]));

    let sum = lhs + rhs;
    assert!(sum.is_canonical(), "{lhs} + {rhs} = {sum}");
    assert_eq!(sum, rhs + lhs, "{lhs} + {rhs}");

    let product = lhs * rhs;
    assert!(product.is_canonical(), "{lhs} * {rhs} = {product}");

    if lhs.is_finite() {
        let cancelled = lhs - lhs;
        assert!(cancelled.is_zero(), "{lhs} - {lhs} = {cancelled}");
    }
});
