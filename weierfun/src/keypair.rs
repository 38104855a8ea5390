//! Secret/public key pairs on secp256k1.
use crate::secp256k1::{self, Point};
use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::RngCore;

/// A secret and public key pair on secp256k1.
///
/// The secret key is an integer in `[1, n − 1]` where `n` is the group order, and the
/// public key is the point `secret·G`. The public point is derived once at construction
/// and never drifts from the secret.
///
/// # Examples
///
/// ```
/// use weierfun::KeyPair;
/// let keypair = KeyPair::random(&mut rand::thread_rng());
/// assert!(!keypair.public_key().is_identity());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPair {
    sk: BigUint,
    pk: Point,
}

impl KeyPair {
    /// Creates a `KeyPair` from a secret key.
    ///
    /// The secret must lie in `[1, n − 1]`: zero has no corresponding public point and
    /// values at or above `n` alias a smaller key. Anything outside the range is an
    /// [`InvalidSecretKey`].
    pub fn new(secret_key: BigUint) -> Result<Self, InvalidSecretKey> {
        if secret_key.is_zero() || secret_key >= secp256k1::curve_order() {
            return Err(InvalidSecretKey);
        }
        let pk = secp256k1::generator().mul(&secret_key);
        Ok(KeyPair {
            sk: secret_key,
            pk,
        })
    }

    /// Generates a key pair from a caller provided cryptographically secure random
    /// number generator, by rejection sampling 256-bit integers into `[1, n − 1]`.
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        let n = secp256k1::curve_order();
        loop {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);
            let secret = BigUint::from_bytes_be(&bytes);
            if !secret.is_zero() && secret < n {
                return KeyPair::new(secret).expect("secret was sampled in range");
            }
        }
    }

    /// Returns a reference to the secret key.
    pub fn secret_key(&self) -> &BigUint {
        &self.sk
    }

    /// Returns a reference to the public key.
    pub fn public_key(&self) -> &Point {
        &self.pk
    }

    /// Gets a reference to the keypair as a tuple.
    pub fn as_tuple(&self) -> (&BigUint, &Point) {
        (&self.sk, &self.pk)
    }
}

/// Error returned when a secret key is outside `[1, n − 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSecretKey;

impl fmt::Display for InvalidSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "secret keys must lie in [1, n - 1]")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidSecretKey {}

#[cfg(test)]
mod test {
    use super::*;
    use num_traits::One;

    #[test]
    fn out_of_range_secrets_are_rejected() {
        assert_eq!(KeyPair::new(BigUint::zero()), Err(InvalidSecretKey));
        assert_eq!(
            KeyPair::new(secp256k1::curve_order()),
            Err(InvalidSecretKey)
        );
        assert_eq!(
            KeyPair::new(secp256k1::curve_order() + 1u32),
            Err(InvalidSecretKey)
        );
        assert!(KeyPair::new(secp256k1::curve_order() - 1u32).is_ok());
    }

    #[test]
    fn the_secret_one_has_public_key_g() {
        let keypair = KeyPair::new(BigUint::one()).unwrap();
        assert_eq!(keypair.public_key(), &secp256k1::generator());
    }

    #[test]
    fn the_secret_n_minus_one_has_public_key_minus_g() {
        let keypair = KeyPair::new(secp256k1::curve_order() - 1u32).unwrap();
        assert_eq!(keypair.public_key(), &-secp256k1::generator());
    }

    #[test]
    fn known_public_key() {
        let keypair = KeyPair::new(BigUint::from(256u32)).unwrap();
        assert_eq!(
            keypair.public_key().x_int().unwrap(),
            &BigUint::parse_bytes(
                b"8282263212c609d9ea2a6e3e172de238d8c39cabd5ac1ca10646e23fd5f51508",
                16
            )
            .unwrap()
        );
        assert_eq!(
            keypair.public_key().y_int().unwrap(),
            &BigUint::parse_bytes(
                b"11f8a8098557dfe45e8256e830b60ace62d613ac2f7b17bed31b6eaff6e26caf",
                16
            )
            .unwrap()
        );
    }

    #[test]
    fn random_keypairs_are_distinct() {
        let a = KeyPair::random(&mut rand::thread_rng());
        let b = KeyPair::random(&mut rand::thread_rng());
        assert_ne!(a.secret_key(), b.secret_key());
        assert_ne!(a.public_key(), b.public_key());
    }
}
