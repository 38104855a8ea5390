//! ECDSA over secp256k1 on [`weierfun`]'s big-integer arithmetic.
//!
//! The scheme signs an already-hashed message: callers reduce their message to an
//! integer digest below the curve order however they see fit (hash choice and domain
//! separation are their business) and get back the classic `(r, s)` pair. Verification
//! takes the same digest, a public key point and a candidate [`Signature`] and answers
//! with a plain `bool` — a signature that fails to check out is an expected outcome,
//! not an error.
//!
//! The ephemeral scalar drawn for every signature comes from an injectable
//! [`NonceRng`], never from a global generator, so deterministic test vectors can be
//! produced by supplying fixed bytes.
//!
//! ```
//! use ecdsa_weierfun::ECDSA;
//! use rand::rngs::ThreadRng;
//! use weierfun::{nonce::GlobalRng, num_bigint::BigUint, KeyPair};
//!
//! let ecdsa = ECDSA::new(GlobalRng::<ThreadRng>::default());
//! let keypair = KeyPair::random(&mut rand::thread_rng());
//! let digest = BigUint::from(0xcafeu32);
//!
//! let signature = ecdsa.sign(&keypair, &digest);
//! assert!(ecdsa.verify(keypair.public_key(), &digest, &signature));
//! ```
//!
//! # Security
//!
//! Like the arithmetic underneath it, nothing here is constant time: signing leaks
//! timing information about the secret key and the ephemeral scalar. Use it to study
//! the scheme and to cross-check vectors, not to protect anything.
#![no_std]
#![allow(non_snake_case)]
#![deny(missing_docs)]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

use num_bigint::BigUint;
use num_traits::Zero;
use weierfun::{
    nonce::NonceRng,
    secp256k1::{self, Point},
    KeyPair,
};

mod signature;
pub use signature::Signature;
pub use weierfun;

/// Retrying a signature requires hitting a degenerate ephemeral point, which happens
/// with probability around 2⁻²⁵⁶ per draw.
const MAX_SIGN_ATTEMPTS: usize = 64;

/// An instance of the ECDSA signature scheme.
///
/// The type parameter is the [`NonceRng`] capability that ephemeral scalars are drawn
/// from. A unit `()` rng gives an instance that can only verify — see
/// [`verify_only`](ECDSA::verify_only).
#[derive(Clone, Debug, Default)]
pub struct ECDSA<R = ()> {
    /// The randomness source for ephemeral scalars.
    pub nonce_rng: R,
}

impl<R> ECDSA<R> {
    /// Creates an ECDSA instance drawing ephemeral scalars from `nonce_rng`.
    pub fn new(nonce_rng: R) -> Self {
        ECDSA { nonce_rng }
    }
}

impl ECDSA<()> {
    /// Creates an `ECDSA` instance that cannot sign messages but can verify
    /// signatures.
    pub fn verify_only() -> Self {
        ECDSA { nonce_rng: () }
    }
}

impl<R: NonceRng> ECDSA<R> {
    /// Signs a message digest under the keypair's secret key.
    ///
    /// The digest `z` is the integer form of the already-hashed message, expected to
    /// be reduced below the curve order by the caller. Signing draws a fresh ephemeral
    /// scalar `k` uniformly from `[1, n − 1]`, computes `r` as the x-coordinate of
    /// `k·G`, and `s = (z + r·secret)·k⁻¹ mod n`. In the astronomically unlikely event
    /// that `r` or `s` comes out zero the scalar is discarded and redrawn; callers
    /// never observe retries.
    pub fn sign(&self, keypair: &KeyPair, z: &BigUint) -> Signature {
        let n = secp256k1::curve_order();
        let G = secp256k1::generator();
        for _ in 0..MAX_SIGN_ATTEMPTS {
            let k = self.draw_ephemeral(&n);
            let R = G.mul(&k);
            let r = R
                .x_int()
                .expect("k in [1, n - 1] cannot reach the identity")
                .clone();
            if r.is_zero() {
                continue;
            }
            // k⁻¹ = k^(n-2) mod n by Fermat's little theorem, n prime
            let k_inv = k.modpow(&(&n - 2u32), &n);
            let s = ((z + &r * keypair.secret_key()) * &k_inv) % &n;
            if s.is_zero() {
                continue;
            }
            return Signature::new(r, s);
        }
        unreachable!("computationally unreachable")
    }

    /// Draws an ephemeral scalar uniformly from `[1, n − 1]` by rejection sampling
    /// 256-bit integers from the injected rng.
    fn draw_ephemeral(&self, n: &BigUint) -> BigUint {
        loop {
            let mut bytes = [0u8; 32];
            self.nonce_rng.fill_bytes(&mut bytes);
            let k = BigUint::from_bytes_be(&bytes);
            if !k.is_zero() && &k < n {
                return k;
            }
        }
    }
}

impl<R> ECDSA<R> {
    /// Verifies a signature over a message digest against a public key.
    ///
    /// Follows the standard equations: with `u = z·s⁻¹` and `v = r·s⁻¹` (mod `n`), the
    /// point `u·G + v·P` must have x-coordinate `r`. Components outside `[1, n − 1]`
    /// fail immediately — zero values have no inverse and larger values alias reduced
    /// ones. Every failure mode is reported as `false`; verification never errors.
    pub fn verify(&self, public_key: &Point, z: &BigUint, signature: &Signature) -> bool {
        let n = secp256k1::curve_order();
        let (r, s) = signature.as_tuple();
        if r.is_zero() || r >= &n || s.is_zero() || s >= &n {
            return false;
        }
        let s_inv = s.modpow(&(&n - 2u32), &n);
        let u = (z * &s_inv) % &n;
        let v = (r * &s_inv) % &n;
        let C = secp256k1::generator().mul(&u).add(&public_key.mul(&v));
        match C.x_int() {
            None => false,
            Some(x) => x == r,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::ThreadRng, RngCore};
    use weierfun::nonce::GlobalRng;

    fn random_digest() -> BigUint {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        BigUint::from_bytes_be(&bytes) % secp256k1::curve_order()
    }

    #[test]
    fn repeated_sign_and_verify() {
        let ecdsa = ECDSA::new(GlobalRng::<ThreadRng>::default());
        for _ in 0..20 {
            let keypair = KeyPair::random(&mut rand::thread_rng());
            let z = random_digest();
            let signature = ecdsa.sign(&keypair, &z);
            assert!(ecdsa.verify(keypair.public_key(), &z, &signature));
        }
    }

    #[test]
    fn signatures_under_the_wrong_key_fail() {
        let ecdsa = ECDSA::new(GlobalRng::<ThreadRng>::default());
        let keypair = KeyPair::random(&mut rand::thread_rng());
        let other = KeyPair::random(&mut rand::thread_rng());
        let z = random_digest();
        let signature = ecdsa.sign(&keypair, &z);
        assert!(!ecdsa.verify(other.public_key(), &z, &signature));
    }

    #[test]
    fn a_verify_only_instance_accepts_signatures() {
        let signer = ECDSA::new(GlobalRng::<ThreadRng>::default());
        let verifier = ECDSA::verify_only();
        let keypair = KeyPair::random(&mut rand::thread_rng());
        let z = random_digest();
        let signature = signer.sign(&keypair, &z);
        assert!(verifier.verify(keypair.public_key(), &z, &signature));
    }

    #[test]
    fn each_signature_draws_a_fresh_ephemeral_scalar() {
        let ecdsa = ECDSA::new(GlobalRng::<ThreadRng>::default());
        let keypair = KeyPair::random(&mut rand::thread_rng());
        let z = random_digest();
        // same key, same digest: randomized k must still give distinct signatures
        assert_ne!(ecdsa.sign(&keypair, &z), ecdsa.sign(&keypair, &z));
    }
}
