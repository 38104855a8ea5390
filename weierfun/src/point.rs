//! The short Weierstrass point group and its addition law.
use crate::field::{FieldElement, FieldError};
use core::{fmt, ops::Neg};
use num_bigint::BigInt;
use num_traits::Zero;

/// A point on the short Weierstrass curve `y² = x³ + ax + b` over a prime field, or the
/// point at infinity.
///
/// The point at infinity carries no coordinates and acts as the identity of the group.
/// Affine points are validated against the curve equation on construction, so every
/// `CurvePoint` in existence is a genuine group element. Points are immutable values;
/// [`add`] and [`scalar_mul`] return new points.
///
/// Two points only combine when they lie on the same curve, i.e. their `(a, b)`
/// coefficients (and with them the field modulus) agree.
///
/// # Examples
///
/// ```
/// use weierfun::{CurvePoint, FieldElement};
/// use weierfun::num_bigint::{BigInt, BigUint};
///
/// let fe = |v: u32| FieldElement::new(BigUint::from(v), BigUint::from(223u32)).unwrap();
/// let point = CurvePoint::new(fe(170), fe(142), fe(0), fe(7)).unwrap();
/// let doubled = point.add(&point).unwrap();
/// assert_eq!(doubled, point.scalar_mul(&BigInt::from(2)).unwrap());
/// ```
///
/// [`add`]: CurvePoint::add
/// [`scalar_mul`]: CurvePoint::scalar_mul
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurvePoint {
    coordinates: Option<(FieldElement, FieldElement)>,
    a: FieldElement,
    b: FieldElement,
}

impl CurvePoint {
    /// Creates the affine point `(x, y)` on the curve with coefficients `a` and `b`.
    ///
    /// Returns [`CurveError::NotOnCurve`] when the coordinates do not satisfy
    /// `y² = x³ + ax + b`, and a [`CurveError::Field`] when the coordinates and
    /// coefficients do not all share one field.
    pub fn new(
        x: FieldElement,
        y: FieldElement,
        a: FieldElement,
        b: FieldElement,
    ) -> Result<Self, CurveError> {
        let lhs = y.mul(&y)?;
        let rhs = x.mul(&x)?.mul(&x)?.add(&a.mul(&x)?)?.add(&b)?;
        if lhs != rhs {
            return Err(CurveError::NotOnCurve);
        }
        Ok(CurvePoint {
            coordinates: Some((x, y)),
            a,
            b,
        })
    }

    /// The point at infinity of the curve with coefficients `a` and `b`.
    pub fn infinity(a: FieldElement, b: FieldElement) -> Self {
        CurvePoint {
            coordinates: None,
            a,
            b,
        }
    }

    /// The x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&FieldElement> {
        self.coordinates.as_ref().map(|(x, _)| x)
    }

    /// The y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&FieldElement> {
        self.coordinates.as_ref().map(|(_, y)| y)
    }

    /// The curve coefficient `a`.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// The curve coefficient `b`.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Whether this is the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.coordinates.is_none()
    }

    // Group-law results are on the curve by construction, so skip re-validating the
    // curve equation.
    fn affine(&self, x: FieldElement, y: FieldElement) -> CurvePoint {
        CurvePoint {
            coordinates: Some((x, y)),
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }

    /// Adds two points of the same curve under the group law.
    ///
    /// The case analysis runs in a fixed order: identities first, then mutual inverses
    /// (equal `x`, opposite `y`), then the chord rule for distinct `x`, then the
    /// vertical tangent (`y = 0`), and finally the tangent rule for doubling. Checking
    /// tangency before ruling out distinct points would divide `0/0` in the chord slope,
    /// so the order is load-bearing.
    pub fn add(&self, other: &CurvePoint) -> Result<CurvePoint, CurveError> {
        if self.a != other.a || self.b != other.b {
            return Err(CurveError::CurveMismatch);
        }
        let (x1, y1) = match &self.coordinates {
            None => return Ok(other.clone()),
            Some(coordinates) => coordinates,
        };
        let (x2, y2) = match &other.coordinates {
            None => return Ok(self.clone()),
            Some(coordinates) => coordinates,
        };

        if x1 == x2 && y1 != y2 {
            // mutual inverses: the chord is vertical
            return Ok(CurvePoint::infinity(self.a.clone(), self.b.clone()));
        }

        if x1 != x2 {
            let slope = y2.sub(y1)?.div(&x2.sub(x1)?)?;
            let x3 = slope.mul(&slope)?.sub(x1)?.sub(x2)?;
            let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
            return Ok(self.affine(x3, y3));
        }

        // from here on both operands are the same point
        if y1.is_zero() {
            // the tangent at y = 0 is vertical
            return Ok(CurvePoint::infinity(self.a.clone(), self.b.clone()));
        }

        let slope = x1.mul(x1)?.scale(3).add(&self.a)?.div(&y1.scale(2))?;
        let x3 = slope.mul(&slope)?.sub(x1)?.sub(x1)?;
        let y3 = slope.mul(&x1.sub(&x3)?)?.sub(y1)?;
        Ok(self.affine(x3, y3))
    }

    /// Multiplies the point by a non-negative integer scalar using double-and-add.
    ///
    /// Walks the binary digits of `k` from the least significant end, adding the running
    /// doubling into the result wherever a bit is set — `O(log k)` group additions.
    /// `0·P` is the point at infinity. Negative scalars are a
    /// [`CurveError::NegativeScalar`].
    pub fn scalar_mul(&self, k: &BigInt) -> Result<CurvePoint, CurveError> {
        let mut k = k.to_biguint().ok_or(CurveError::NegativeScalar)?;
        let mut current = self.clone();
        let mut result = CurvePoint::infinity(self.a.clone(), self.b.clone());
        while !k.is_zero() {
            if k.bit(0) {
                result = result.add(&current)?;
            }
            current = current.add(&current)?;
            k >>= 1u32;
        }
        Ok(result)
    }
}

impl Neg for &CurvePoint {
    type Output = CurvePoint;

    /// The group inverse: the reflection `(x, -y)`, which sums with the original to the
    /// point at infinity.
    fn neg(self) -> CurvePoint {
        CurvePoint {
            coordinates: self
                .coordinates
                .as_ref()
                .map(|(x, y)| (x.clone(), -y)),
            a: self.a.clone(),
            b: self.b.clone(),
        }
    }
}

impl Neg for CurvePoint {
    type Output = CurvePoint;

    fn neg(self) -> CurvePoint {
        -&self
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.coordinates {
            None => write!(f, "Point(infinity)"),
            Some((x, y)) => write!(f, "Point({}, {}) mod {}", x.value(), y.value(), x.modulus()),
        }
    }
}

/// Error representing an invalid point construction or group operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// The coordinates do not satisfy the curve equation.
    NotOnCurve,
    /// The operands lie on curves with different coefficients.
    CurveMismatch,
    /// A point was multiplied by a negative scalar.
    NegativeScalar,
    /// The underlying field arithmetic was handed incompatible elements.
    Field(FieldError),
}

impl From<FieldError> for CurveError {
    fn from(e: FieldError) -> Self {
        CurveError::Field(e)
    }
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use CurveError::*;
        match self {
            NotOnCurve => write!(f, "the coordinates do not satisfy the curve equation"),
            CurveMismatch => write!(f, "cannot combine points on different curves"),
            NegativeScalar => write!(f, "cannot multiply a point by a negative scalar"),
            Field(e) => write!(f, "field arithmetic failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CurveError {}

#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigUint;

    fn fe(value: u32) -> FieldElement {
        FieldElement::new(BigUint::from(value), BigUint::from(223u32)).unwrap()
    }

    // y² = x³ + 7 over F_223
    fn pt(x: u32, y: u32) -> CurvePoint {
        CurvePoint::new(fe(x), fe(y), fe(0), fe(7)).unwrap()
    }

    fn identity() -> CurvePoint {
        CurvePoint::infinity(fe(0), fe(7))
    }

    #[test]
    fn construction_validates_the_curve_equation() {
        assert!(CurvePoint::new(fe(192), fe(105), fe(0), fe(7)).is_ok());
        assert!(CurvePoint::new(fe(17), fe(56), fe(0), fe(7)).is_ok());
        assert_eq!(
            CurvePoint::new(fe(200), fe(119), fe(0), fe(7)),
            Err(CurveError::NotOnCurve)
        );
        assert_eq!(
            CurvePoint::new(fe(42), fe(99), fe(0), fe(7)),
            Err(CurveError::NotOnCurve)
        );
    }

    #[test]
    fn construction_rejects_mixed_fields() {
        let other_field = FieldElement::new(BigUint::from(3u32), BigUint::from(47u32)).unwrap();
        assert_eq!(
            CurvePoint::new(fe(192), fe(105), fe(0), other_field),
            Err(CurveError::Field(FieldError::ModulusMismatch))
        );
    }

    #[test]
    fn the_identity_is_neutral() {
        let p = pt(170, 142);
        assert_eq!(identity().add(&p).unwrap(), p);
        assert_eq!(p.add(&identity()).unwrap(), p);
        assert_eq!(identity().add(&identity()).unwrap(), identity());
        assert!(identity().is_identity());
    }

    #[test]
    fn mutual_inverses_sum_to_the_identity() {
        let p = pt(170, 142);
        let minus_p = -&p;
        assert_eq!(minus_p, pt(170, 223 - 142));
        assert_eq!(p.add(&minus_p).unwrap(), identity());
    }

    #[test]
    fn chord_addition() {
        let sum = pt(170, 142).add(&pt(60, 139)).unwrap();
        assert_eq!(sum, pt(220, 181));
    }

    #[test]
    fn addition_commutes() {
        let p = pt(170, 142);
        let q = pt(60, 139);
        assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }

    #[test]
    fn doubling_uses_the_tangent_rule() {
        let p = pt(170, 142);
        assert_eq!(p.add(&p).unwrap(), pt(84, 150));
    }

    #[test]
    fn doubling_a_point_with_zero_y_gives_the_identity() {
        // (206, 0) lies on the curve and its tangent is vertical
        let p = pt(206, 0);
        assert_eq!(p.add(&p).unwrap(), identity());
    }

    #[test]
    fn points_on_different_curves_do_not_add() {
        let p = pt(170, 142);
        // y² = x³ + x over F_223: (0, 0) satisfies it
        let q = CurvePoint::new(fe(0), fe(0), fe(1), fe(0)).unwrap();
        assert_eq!(p.add(&q), Err(CurveError::CurveMismatch));
    }

    #[test]
    fn scalar_multiples() {
        let p = pt(170, 142);
        assert_eq!(p.scalar_mul(&BigInt::from(0)).unwrap(), identity());
        assert_eq!(p.scalar_mul(&BigInt::from(1)).unwrap(), p);
        assert_eq!(p.scalar_mul(&BigInt::from(2)).unwrap(), pt(84, 150));
        assert_eq!(p.scalar_mul(&BigInt::from(4)).unwrap(), pt(127, 152));
        assert_eq!(p.scalar_mul(&BigInt::from(21)).unwrap(), pt(206, 0));
        assert_eq!(p.scalar_mul(&BigInt::from(42)).unwrap(), identity());
        assert_eq!(p.scalar_mul(&BigInt::from(43)).unwrap(), p);
    }

    #[test]
    fn scalar_multiplication_distributes_over_addition() {
        let p = pt(170, 142);
        let lhs = p.scalar_mul(&BigInt::from(5 + 9)).unwrap();
        let rhs = p
            .scalar_mul(&BigInt::from(5))
            .unwrap()
            .add(&p.scalar_mul(&BigInt::from(9)).unwrap())
            .unwrap();
        assert_eq!(lhs, rhs);
        assert_eq!(lhs, pt(111, 47));
    }

    #[test]
    fn negative_scalars_are_rejected() {
        let p = pt(170, 142);
        assert_eq!(
            p.scalar_mul(&BigInt::from(-1)),
            Err(CurveError::NegativeScalar)
        );
    }
}
