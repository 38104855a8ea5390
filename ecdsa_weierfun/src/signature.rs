use core::fmt;
use num_bigint::BigUint;

/// An ECDSA signature: the pair `(r, s)`.
///
/// `r` is the x-coordinate of the ephemeral point `k·G` taken as an integer and `s`
/// binds it to the message digest and the secret key. Signatures produced by signing
/// always have both components in `[1, n − 1]`; this type does not enforce that range
/// itself so that verification can be handed arbitrary candidate pairs and reject
/// them with a clean `false`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The x-coordinate of the ephemeral point, as an integer.
    pub r: BigUint,
    /// The signature proof value.
    pub s: BigUint,
}

impl Signature {
    /// Creates a signature from its two components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Signature { r, s }
    }

    /// Gets a reference to the signature as a tuple.
    pub fn as_tuple(&self) -> (&BigUint, &BigUint) {
        (&self.r, &self.s)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Signature({:064x}, {:064x})", self.r, self.s)
    }
}
