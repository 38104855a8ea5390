//! The secp256k1 domain parameters and a point type specialized to them.
//!
//! secp256k1 is the curve `y² = x³ + 7` over the prime field of order
//! `p = 2²⁵⁶ − 2³² − 977`, with a distinguished base point `G` generating the whole
//! group of prime order `n`. The parameters are specified in [_SEC 2: Recommended
//! Elliptic Curve Domain Parameters_] and used in Bitcoin.
//!
//! [`Point`] is a thin wrapper fixing a [`CurvePoint`] to these constants: its group
//! operations cannot mismatch curves, so they are infallible, and its scalar
//! multiplication reduces scalars modulo `n` up front.
//!
//! [_SEC 2: Recommended Elliptic Curve Domain Parameters_]: https://www.secg.org/sec2-v2.pdf
use crate::field::FieldElement;
use crate::point::{CurveError, CurvePoint};
use core::{fmt, ops::Neg};
use num_bigint::{BigInt, BigUint};
use num_traits::One;

/// The order `p = 2²⁵⁶ − 2³² − 977` of the secp256k1 base field.
pub fn field_order() -> BigUint {
    (BigUint::one() << 256u32) - (BigUint::one() << 32u32) - 977u32
}

/// The order `n` of the secp256k1 group, i.e. the number of curve points.
///
/// `n` is prime and `n·P` is the point at infinity for every point `P`, which is what
/// lets scalars be reduced modulo `n` before multiplying.
pub fn curve_order() -> BigUint {
    BigUint::parse_bytes(
        b"fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141",
        16,
    )
    .expect("hard-coded constant is valid hex")
}

fn curve_a() -> FieldElement {
    FieldElement::zero(field_order())
}

fn curve_b() -> FieldElement {
    FieldElement::new(BigUint::from(7u32), field_order())
        .expect("7 is below the field order")
}

/// The base point `G` of secp256k1.
///
/// # Examples
///
/// ```
/// use weierfun::secp256k1;
/// assert_eq!(
///     format!("{}", secp256k1::generator()),
///     "Point(79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798, \
///      483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8)"
/// );
/// ```
pub fn generator() -> Point {
    let x = BigUint::parse_bytes(
        b"79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        16,
    )
    .expect("hard-coded constant is valid hex");
    let y = BigUint::parse_bytes(
        b"483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        16,
    )
    .expect("hard-coded constant is valid hex");
    Point::new(x, y).expect("the generator lies on the curve")
}

/// A point on secp256k1.
///
/// This is a [`CurvePoint`] whose coefficients and field are fixed to the secp256k1
/// domain parameters by construction. Since every `Point` lives on the one curve,
/// [`add`] and [`mul`] cannot fail and return plain points.
///
/// [`add`]: Point::add
/// [`mul`]: Point::mul
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point(CurvePoint);

impl Point {
    /// Creates the secp256k1 point with the given affine coordinates.
    ///
    /// Returns [`CurveError::NotOnCurve`] when `y² ≠ x³ + 7`, and
    /// [`FieldError::ValueOutOfRange`](crate::FieldError) (as a [`CurveError::Field`])
    /// when a coordinate is not below the field order.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self, CurveError> {
        let x = FieldElement::new(x, field_order()).map_err(CurveError::Field)?;
        let y = FieldElement::new(y, field_order()).map_err(CurveError::Field)?;
        CurvePoint::new(x, y, curve_a(), curve_b()).map(Point)
    }

    /// The point at infinity, the identity of the group.
    pub fn infinity() -> Self {
        Point(CurvePoint::infinity(curve_a(), curve_b()))
    }

    /// Recovers the point with the given x-coordinate and an **even** y-coordinate.
    ///
    /// Solves `y² = x³ + 7` by raising the right hand side to `(p + 1)/4`, which yields
    /// a square root exactly when one exists because `p ≡ 3 (mod 4)`. Roughly half of
    /// all x values have no point; those return [`CurveError::NotOnCurve`]. Of the two
    /// roots `y` and `p − y` the even one is chosen.
    pub fn lift_x(x: BigUint) -> Result<Self, CurveError> {
        let p = field_order();
        let x = FieldElement::new(x, p.clone()).map_err(CurveError::Field)?;
        let rhs = x.mul(&x)?.mul(&x)?.add(&curve_b())?;
        let candidate = rhs.pow(&BigInt::from((p + 1u32) >> 2u32));
        if candidate.mul(&candidate)? != rhs {
            return Err(CurveError::NotOnCurve);
        }
        let y = if candidate.value().bit(0) {
            -&candidate
        } else {
            candidate
        };
        CurvePoint::new(x, y, curve_a(), curve_b()).map(Point)
    }

    /// Adds two secp256k1 points.
    pub fn add(&self, other: &Point) -> Point {
        Point(
            self.0
                .add(&other.0)
                .expect("both operands lie on the secp256k1 curve"),
        )
    }

    /// Multiplies the point by a scalar with double-and-add.
    ///
    /// The scalar is first reduced modulo the group order `n`: the group has exactly
    /// `n` elements, so `n·P` is the identity and only `k mod n` matters. The
    /// reduction shortens the double-and-add walk without changing the result.
    pub fn mul(&self, k: &BigUint) -> Point {
        let k = k % curve_order();
        Point(
            self.0
                .scalar_mul(&BigInt::from(k))
                .expect("reduced scalars are non-negative"),
        )
    }

    /// The x-coordinate as an integer, or `None` for the point at infinity.
    pub fn x_int(&self) -> Option<&BigUint> {
        self.0.x().map(FieldElement::value)
    }

    /// The y-coordinate as an integer, or `None` for the point at infinity.
    pub fn y_int(&self) -> Option<&BigUint> {
        self.0.y().map(FieldElement::value)
    }

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.0.is_identity()
    }

    /// A view of the point as a generic [`CurvePoint`].
    pub fn as_curve_point(&self) -> &CurvePoint {
        &self.0
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point(-&self.0)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        -&self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.x_int(), self.y_int()) {
            (Some(x), Some(y)) => write!(f, "Point({:064x}, {:064x})", x, y),
            _ => write!(f, "Point(infinity)"),
        }
    }
}
