//! Ephemeral randomness for signing.
//!
//! ECDSA consumes one secret random scalar per signature. Its distribution is security
//! critical: reusing an ephemeral scalar across two signatures under the same key —
//! or even leaking a few bits of bias — hands the secret key to an observer. Schemes
//! in this workspace therefore never reach for a hard-wired global generator; they
//! take a [`NonceRng`] capability chosen by the caller, which also lets tests swap in
//! deterministic bytes to pin down known signature vectors.
use core::marker::PhantomData;
use rand_core::{CryptoRng, RngCore};

/// A source of random bytes for ephemeral scalars.
///
/// [`RngCore`] requires `self` to be mutable which is annoying in our context. This
/// trait requires the rng be able to create randomness without being mutable. The most
/// straightforward way of doing this is to use transient rng instances like
/// [`ThreadRng`] that have a `Default` implementation; [`GlobalRng`] wraps any such
/// type. To BYO rng, implement this trait yourself and handle mutability internally.
///
/// [`RngCore`]: rand_core::RngCore
/// [`ThreadRng`]: https://docs.rs/rand/latest/rand/rngs/struct.ThreadRng.html
pub trait NonceRng {
    /// Fill `bytes` with random data.
    fn fill_bytes(&self, bytes: &mut [u8]);
}

/// A zero sized type that wraps an RNG that implements `Default`, e.g. [`ThreadRng`].
///
/// A fresh rng instance is conjured for every fill, so `GlobalRng` stays `Sync` even
/// when the wrapped rng is not.
///
/// # Examples
///
/// ```
/// use rand::rngs::ThreadRng;
/// use weierfun::nonce::{GlobalRng, NonceRng};
///
/// let nonce_rng = GlobalRng::<ThreadRng>::default();
/// let mut bytes = [0u8; 32];
/// nonce_rng.fill_bytes(&mut bytes);
/// assert_ne!(bytes, [0u8; 32]);
/// ```
///
/// [`ThreadRng`]: https://docs.rs/rand/latest/rand/rngs/struct.ThreadRng.html
#[derive(Debug, Default, Clone)]
pub struct GlobalRng<R> {
    // fn(R) keeps this Sync even if R is not
    inner: PhantomData<fn(R)>,
}

/// We implement NonceRng only for rngs we can conjure out of thin air with `Default`,
/// and only for ones that declare themselves cryptographically secure.
impl<R: RngCore + CryptoRng + Default> NonceRng for GlobalRng<R> {
    fn fill_bytes(&self, bytes: &mut [u8]) {
        R::default().fill_bytes(bytes);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::ThreadRng;

    fn is_sync<S: Sync>(_: &S) -> bool {
        true
    }

    #[test]
    fn global_rng_fills_and_is_sync() {
        let nonce_rng = GlobalRng::<ThreadRng>::default();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        nonce_rng.fill_bytes(&mut a);
        nonce_rng.fill_bytes(&mut b);
        assert_ne!(a, [0u8; 32]);
        assert_ne!(a, b);
        assert!(is_sync(&nonce_rng));
    }
}
