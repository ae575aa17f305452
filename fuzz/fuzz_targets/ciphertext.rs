#![no_main]
// Arbitrary ciphertext points fed to decryption on toy883
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};
use weierstrass_elgamal::{
    BigUint, EncryptedByte, Error, NamedCurve, Point, SecretKey, Toy883,
};

fn point(bytes: &[u8]) -> Point {
    Point::new(
        BigUint::from(u16::from_be_bytes([bytes[0], bytes[1]])),
        BigUint::from(u16::from_be_bytes([bytes[2], bytes[3]])),
    )
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 41 {
        return;
    }

    let curve = Toy883::curve().unwrap();
    let mut rng = ChaCha20Rng::from_seed(data[0..32].try_into().unwrap());
    let secret = SecretKey::random(&curve, &mut rng).unwrap();

    let encrypted = EncryptedByte {
        ephemeral: point(&data[32..36]),
        masked: point(&data[36..40]),
    };

    match curve.decrypt_byte(&encrypted, secret.as_scalar()) {
        Ok(byte) => assert_eq!(curve.decode(&curve.encode(byte).unwrap()), Ok(byte)),
        Err(err) => assert!(matches!(err, Error::NotOnCurve | Error::UnmappableByte)),
    }

    // honest ciphertexts always decrypt
    let public = secret.public_key(&curve);
    let byte = data[40];
    let encrypted = curve.encrypt_byte(byte, public.as_point(), &mut rng).unwrap();
    assert_eq!(curve.decrypt_byte(&encrypted, secret.as_scalar()), Ok(byte));
});
