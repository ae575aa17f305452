#![no_main]
// Square roots modulo the secp256k1 and toy883 primes, plus an arbitrary odd modulus
use libfuzzer_sys::fuzz_target;
use weierstrass_elgamal::{BigUint, NamedCurve, Secp256k1, Toy883, sqrt_mod_p};

fn check(residue: &BigUint, p: &BigUint) {
    let Ok(root) = sqrt_mod_p(residue, p) else {
        return;
    };

    if let Some(root) = root {
        assert!(&root < p);
        assert_eq!((&root * &root) % p, residue % p);
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let (head, tail) = data.split_at(data.len() / 2);
    let residue = BigUint::from_bytes_be(head);

    for curve in [Secp256k1::curve(), Toy883::curve()].into_iter().flatten() {
        check(&residue, curve.p());
    }

    // composite moduli carry no guarantee about the root, only that the call returns
    let p = u16::from_be_bytes([tail[0], tail[tail.len() - 1]]) | 1;
    let _ = sqrt_mod_p(&residue, &BigUint::from(p));
});
