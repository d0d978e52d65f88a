//! Fuzz target: raise arbitrary values to arbitrary powers.
//!
//! The input bytes are read as four `f64`s and canonicalized into a base and an
//! exponent, so every bit pattern (NaN payloads, subnormals, huge angles) is
//! reachable. Power is total: it must never panic and must always return a
//! canonical value.

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
    let base = Polar::from_parts(read_f64(&data[0..8]), read_f64(&data[8..16]));
    let exponent = Polar::from_parts(read_f64(&data[16..24]), read_f64(&data[24..32]));
    assert!(base.is_canonical(), "from_parts gave {base}");
    assert!(exponent.is_canonical(), "from_parts gave {exponent}");

    let result = base.power(exponent);
    assert!(result.is_canonical(), "{base} ^ {exponent} = {result}");

    if exponent.is_zero() {
        assert_eq!(result, Polar::ONE);
    }
});
