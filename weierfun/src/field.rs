//! Prime field arithmetic on arbitrary-precision integers.
use core::{fmt, ops::Neg};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// An element of the prime field `F_p` for a modulus `p` chosen at runtime.
///
/// A `FieldElement` is an integer in the range `[0, p)` paired with its modulus. Every
/// operation returns a fresh element reduced into that range; nothing is ever mutated in
/// place. Elements only combine with elements of the same field — mixing moduli is a
/// [`FieldError::ModulusMismatch`].
///
/// Negative values cannot occur: the value is a [`BigUint`], so the lower bound of the
/// range invariant is carried by the type rather than checked at runtime.
///
/// The inversion operations ([`inverse`], [`div`] and negative exponents in [`pow`])
/// assume `p` is prime — they compute inverses as `a^(p-2)` via Fermat's little theorem,
/// which has no meaning in a composite ring. Constructing elements with a composite
/// modulus and then inverting them silently yields garbage, so don't.
///
/// # Examples
///
/// ```
/// use weierfun::FieldElement;
/// use weierfun::num_bigint::BigUint;
///
/// let a = FieldElement::new(BigUint::from(3u32), BigUint::from(47u32)).unwrap();
/// let b = FieldElement::new(BigUint::from(46u32), BigUint::from(47u32)).unwrap();
/// assert_eq!(a.add(&b).unwrap().value(), &BigUint::from(2u32));
/// assert_eq!(a.div(&b).unwrap().value(), &BigUint::from(44u32));
/// ```
///
/// [`inverse`]: FieldElement::inverse
/// [`div`]: FieldElement::div
/// [`pow`]: FieldElement::pow
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl FieldElement {
    /// Creates the field element `value mod modulus`.
    ///
    /// The value must already be reduced: anything `>= modulus` is a
    /// [`FieldError::ValueOutOfRange`] rather than being silently wrapped.
    pub fn new(value: BigUint, modulus: BigUint) -> Result<Self, FieldError> {
        if value >= modulus {
            return Err(FieldError::ValueOutOfRange);
        }
        Ok(FieldElement { value, modulus })
    }

    /// The additive identity of `F_modulus`.
    pub fn zero(modulus: BigUint) -> Self {
        FieldElement {
            value: BigUint::zero(),
            modulus,
        }
    }

    /// The multiplicative identity of `F_modulus`.
    pub fn one(modulus: BigUint) -> Self {
        FieldElement {
            value: BigUint::one() % &modulus,
            modulus,
        }
    }

    /// The integer representative in `[0, modulus)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The field modulus.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn require_same_field(&self, other: &FieldElement) -> Result<(), FieldError> {
        if self.modulus != other.modulus {
            return Err(FieldError::ModulusMismatch);
        }
        Ok(())
    }

    /// Adds two elements of the same field.
    pub fn add(&self, other: &FieldElement) -> Result<FieldElement, FieldError> {
        self.require_same_field(other)?;
        Ok(FieldElement {
            value: (&self.value + &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// Subtracts `other` from `self` within the same field.
    pub fn sub(&self, other: &FieldElement) -> Result<FieldElement, FieldError> {
        self.require_same_field(other)?;
        // lift above the modulus first so the unsigned subtraction cannot wrap
        Ok(FieldElement {
            value: (&self.value + &self.modulus - &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// Multiplies two elements of the same field.
    pub fn mul(&self, other: &FieldElement) -> Result<FieldElement, FieldError> {
        self.require_same_field(other)?;
        Ok(FieldElement {
            value: (&self.value * &other.value) % &self.modulus,
            modulus: self.modulus.clone(),
        })
    }

    /// Multiplies the element by a small integer coefficient, e.g. `3x²` in the curve
    /// tangent formula.
    pub fn scale(&self, coefficient: u32) -> FieldElement {
        FieldElement {
            value: (&self.value * coefficient) % &self.modulus,
            modulus: self.modulus.clone(),
        }
    }

    /// Raises the element to an integer power.
    ///
    /// The exponent may be negative or arbitrarily large: it acts modulo `modulus - 1`,
    /// because `a^(p-1) = 1` for every nonzero `a` when `p` is prime (Fermat's little
    /// theorem). A negative exponent therefore computes the corresponding power of the
    /// inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use weierfun::FieldElement;
    /// use weierfun::num_bigint::{BigInt, BigUint};
    ///
    /// let a = FieldElement::new(BigUint::from(7u32), BigUint::from(13u32)).unwrap();
    /// assert_eq!(a.pow(&BigInt::from(-3)), a.pow(&BigInt::from(9)));
    /// ```
    pub fn pow(&self, exponent: &BigInt) -> FieldElement {
        let group_order = BigInt::from(self.modulus.clone()) - 1;
        let exponent = exponent
            .mod_floor(&group_order)
            .to_biguint()
            .expect("mod_floor with a positive modulus is non-negative");
        FieldElement {
            value: self.value.modpow(&exponent, &self.modulus),
            modulus: self.modulus.clone(),
        }
    }

    /// The multiplicative inverse, computed as `self^(modulus - 2)`.
    ///
    /// Returns [`FieldError::DivisionByZero`] for the zero element, which has no inverse.
    pub fn inverse(&self) -> Result<FieldElement, FieldError> {
        if self.value.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        let exponent = &self.modulus - 2u32;
        Ok(FieldElement {
            value: self.value.modpow(&exponent, &self.modulus),
            modulus: self.modulus.clone(),
        })
    }

    /// Divides `self` by `other`, i.e. multiplies by the Fermat inverse of `other`.
    pub fn div(&self, other: &FieldElement) -> Result<FieldElement, FieldError> {
        self.require_same_field(other)?;
        self.mul(&other.inverse()?)
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        let value = if self.value.is_zero() {
            BigUint::zero()
        } else {
            &self.modulus - &self.value
        };
        FieldElement {
            value,
            modulus: self.modulus.clone(),
        }
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} mod {}", self.value, self.modulus)
    }
}

/// Error representing an invalid field element construction or operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The value was not in the range `[0, modulus)`.
    ValueOutOfRange,
    /// The operands belong to fields with different moduli.
    ModulusMismatch,
    /// The zero element was inverted or divided by.
    DivisionByZero,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use FieldError::*;
        match self {
            ValueOutOfRange => write!(f, "field element values must lie in [0, modulus)"),
            ModulusMismatch => write!(f, "cannot combine elements of different fields"),
            DivisionByZero => write!(f, "the zero element has no multiplicative inverse"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}
