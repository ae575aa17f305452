//! ElGamal and ECDH round trips.

use num_bigint::BigUint;
use proptest::{collection::vec, prelude::any, proptest};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use weierstrass_elgamal::{
    Curve, EncryptedByte, Error, NamedCurve, Point, PublicKey, Secp256k1, SecretKey, Toy883,
    ecdh::diffie_hellman,
};

fn toy() -> Curve {
    Toy883::curve().unwrap()
}

#[test]
fn encrypt_single_byte_a() {
    let curve = toy();
    let mut rng = ChaCha20Rng::seed_from_u64(0x41);
    let secret = SecretKey::random(&curve, &mut rng).unwrap();
    let public = secret.public_key(&curve);

    let ciphertext = curve
        .encrypt_with_rng(&[65], public.as_point(), &mut rng)
        .unwrap();

    assert_eq!(ciphertext.len(), 1);
    assert_eq!(curve.decrypt(&ciphertext, secret.as_scalar()), Ok(vec![65]));
}

#[test]
fn encrypt_every_byte_value() {
    let curve = toy();
    let mut rng = ChaCha20Rng::seed_from_u64(256);
    let secret = SecretKey::random(&curve, &mut rng).unwrap();
    let public = secret.public_key(&curve);
    let plaintext = (0..=u8::MAX).collect::<Vec<_>>();

    let ciphertext = curve
        .encrypt_with_rng(&plaintext, public.as_point(), &mut rng)
        .unwrap();

    assert_eq!(curve.decrypt(&ciphertext, secret.as_scalar()), Ok(plaintext));
}

#[test]
fn text_message() {
    let curve = toy();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let bob = SecretKey::random(&curve, &mut rng).unwrap();
    let message = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz `~1!2@3#4$5%6^7&8*9(0)-_=+[{]}|\\:;\"',<.>/?";

    let ciphertext = curve
        .encrypt_with_rng(message.as_bytes(), bob.public_key(&curve).as_point(), &mut rng)
        .unwrap();
    let recovered = curve.decrypt(&ciphertext, bob.as_scalar()).unwrap();

    assert_eq!(String::from_utf8(recovered).unwrap(), message);
}

#[test]
fn ciphertext_is_randomized() {
    let curve = toy();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let secret = SecretKey::random(&curve, &mut rng).unwrap();
    let public = secret.public_key(&curve);

    let first = curve
        .encrypt_with_rng(b"same", public.as_point(), &mut rng)
        .unwrap();
    let second = curve
        .encrypt_with_rng(b"same", public.as_point(), &mut rng)
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(
        curve.decrypt(&first, secret.as_scalar()),
        curve.decrypt(&second, secret.as_scalar())
    );
}

#[test]
fn tampered_ciphertext() {
    let curve = toy();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let secret = SecretKey::random(&curve, &mut rng).unwrap();
    let public = secret.public_key(&curve);

    let mut ciphertext = curve
        .encrypt_with_rng(b"x", public.as_point(), &mut rng)
        .unwrap();

    // with D replaced by the identity, decryption yields -d·C
    ciphertext[0] = EncryptedByte {
        ephemeral: ciphertext[0].ephemeral.clone(),
        masked: Point::Infinity,
    };

    let shared = curve.multiply(&ciphertext[0].ephemeral, secret.as_scalar());
    let expected = curve.decode(&curve.negate(&shared));
    assert_eq!(curve.decrypt(&ciphertext, secret.as_scalar()), expected.map(|b| vec![b]));
}

#[test]
fn diffie_hellman_agreement() {
    let curve = toy();
    let mut rng = ChaCha20Rng::seed_from_u64(4);

    let alice = SecretKey::random(&curve, &mut rng).unwrap();
    let bob = SecretKey::random(&curve, &mut rng).unwrap();
    let alice_public = alice.public_key(&curve);
    let bob_public = bob.public_key(&curve);

    assert_eq!(
        curve.multiply(alice_public.as_point(), bob.as_scalar()).x(),
        curve.multiply(bob_public.as_point(), alice.as_scalar()).x()
    );
}

#[test]
fn secp256k1_round_trip() {
    let curve = Secp256k1::curve().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(256);

    let alice = SecretKey::random(&curve, &mut rng).unwrap();
    let bob = SecretKey::random(&curve, &mut rng).unwrap();
    let bob_public = PublicKey::from_point(&curve, bob.public_key(&curve).into()).unwrap();

    let ciphertext = curve
        .encrypt_with_rng(b"Hi!", bob_public.as_point(), &mut rng)
        .unwrap();
    assert_eq!(curve.decrypt(&ciphertext, bob.as_scalar()).unwrap(), b"Hi!");

    let alice_shared = diffie_hellman(&curve, &alice, &bob_public).unwrap();
    let bob_shared = diffie_hellman(&curve, &bob, &alice.public_key(&curve)).unwrap();
    assert_eq!(alice_shared, bob_shared);
    assert!(alice_shared.raw_secret() < curve.p());
}

#[test]
fn secp256k1_rejects_zero_scalar() {
    let curve = Secp256k1::curve().unwrap();
    assert_eq!(
        SecretKey::from_scalar(&curve, BigUint::from(0u32)),
        Err(Error::InvalidScalar)
    );
}

proptest! {
    #[test]
    fn round_trip(plaintext in vec(any::<u8>(), 0..32), seed in any::<u64>()) {
        let curve = toy();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let secret = SecretKey::random(&curve, &mut rng).unwrap();
        let public = secret.public_key(&curve);

        let ciphertext = curve
            .encrypt_with_rng(&plaintext, public.as_point(), &mut rng)
            .unwrap();

        assert_eq!(ciphertext.len(), plaintext.len());
        assert_eq!(curve.decrypt(&ciphertext, secret.as_scalar()), Ok(plaintext));
    }

    #[test]
    fn shared_secrets_agree(seed in any::<u64>()) {
        let curve = toy();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let alice = SecretKey::random(&curve, &mut rng).unwrap();
        let bob = SecretKey::random(&curve, &mut rng).unwrap();

        let alice_shared = diffie_hellman(&curve, &alice, &bob.public_key(&curve));
        let bob_shared = diffie_hellman(&curve, &bob, &alice.public_key(&curve));

        assert_eq!(alice_shared, bob_shared);
    }
}
