//! Short Weierstrass curves over big-integer prime fields, optimized for clarity!
//!
//! The crate builds the elliptic-curve group up from first principles on
//! arbitrary-precision integers: [`FieldElement`] is one element of a prime field
//! `F_p`, [`CurvePoint`] is a point on `y² = x³ + ax + b` over such a field together
//! with the group addition law and double-and-add scalar multiplication, and
//! [`secp256k1`] pins those generic pieces to the Bitcoin curve's domain parameters.
//! [`KeyPair`] derives a public point from a secret scalar, and [`nonce`] provides the
//! injectable randomness that signature schemes built on top (see the companion
//! `ecdsa_weierfun` crate) draw their ephemeral scalars from.
//!
//! Every value here is immutable: operations return fresh values, and nothing needs a
//! lock to be shared across threads.
//!
//! ```
//! use weierfun::{secp256k1, KeyPair};
//! use weierfun::num_bigint::BigUint;
//!
//! let keypair = KeyPair::new(BigUint::from(0xdeadbeefu32)).unwrap();
//! let x = keypair.public_key().x_int().unwrap().clone();
//! let lifted = secp256k1::Point::lift_x(x).unwrap();
//! assert!(lifted == *keypair.public_key() || lifted == -keypair.public_key());
//! ```
//!
//! # Security
//!
//! Nothing in this crate runs in constant time. Field and group operations branch and
//! allocate depending on the integers involved, so timing and memory-access patterns
//! leak information about secret scalars. This is a crate for studying the algebra and
//! for exact test vectors — do not sign with keys that guard anything of value.
#![no_std]
#![deny(missing_docs)]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

mod field;
mod keypair;
mod point;

pub mod nonce;
pub mod secp256k1;

pub use field::{FieldElement, FieldError};
pub use keypair::{InvalidSecretKey, KeyPair};
pub use point::{CurveError, CurvePoint};

pub use num_bigint;
pub use rand_core;
