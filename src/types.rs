//! Value types: the `Point` itself, the `Mat2` linear map, and the `Coords`
//! trait that lets the free functions in [`crate::geometry`] work on any
//! coordinate pair.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::{DMat2, DVec2, dvec2};

use crate::geometry;

/// Anything that exposes an `x` and a `y` coordinate.
pub trait Coords {
    /// The x coordinate.
    fn x(&self) -> f64;
    /// The y coordinate.
    fn y(&self) -> f64;
    /// Overwrite both coordinates at once.
    fn set_xy(&mut self, x: f64, y: f64);
}

/// A 2D coordinate pair, used both as a position and as a vector.
///
/// Every transform comes in two flavours:
/// - `*_in_place` mutates the receiver and returns `&mut Self` for chaining;
/// - the plain name takes `self` by value and returns the transformed copy,
///   leaving the caller's point untouched.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    // ==================== Queries ====================

    /// Exact component-wise equality, no tolerance.
    pub fn equals(&self, q: &Point) -> bool {
        geometry::equals(self, q)
    }

    /// Per-component absolute tolerance comparison.
    pub fn approx_eq(&self, q: &Point, epsilon: f64) -> bool {
        DVec2::from(*self).abs_diff_eq(DVec2::from(*q), epsilon)
    }

    /// Euclidean distance from the origin.
    pub fn mag(&self) -> f64 {
        geometry::mag(self)
    }

    pub fn dist(&self, q: &Point) -> f64 {
        geometry::dist(self, q)
    }

    /// Squared distance; cheaper than [`Point::dist`] for comparisons.
    pub fn dist_sqr(&self, q: &Point) -> f64 {
        geometry::dist_sqr(self, q)
    }

    /// Angle from the origin to this point, in radians.
    pub fn angle(&self) -> f64 {
        geometry::angle(self)
    }

    /// Angle of the vector pointing from `q` to `self`, in radians.
    pub fn angle_to(&self, q: &Point) -> f64 {
        geometry::angle_to(self, q)
    }

    /// Signed angle between `self` and `b` as vectors, in radians.
    pub fn angle_with(&self, b: &Point) -> f64 {
        geometry::angle_with(self, b)
    }

    pub fn angle_with_sep(&self, x: f64, y: f64) -> f64 {
        geometry::angle_with_sep(self, x, y)
    }

    // ==================== In-place transforms ====================

    pub fn add_in_place(&mut self, q: &Point) -> &mut Self {
        geometry::add(self, q)
    }

    pub fn sub_in_place(&mut self, q: &Point) -> &mut Self {
        geometry::sub(self, q)
    }

    pub fn mult_in_place(&mut self, k: f64) -> &mut Self {
        geometry::mult(self, k)
    }

    pub fn div_in_place(&mut self, k: f64) -> &mut Self {
        geometry::div(self, k)
    }

    pub fn mult_by_point_in_place(&mut self, q: &Point) -> &mut Self {
        geometry::mult_by_point(self, q)
    }

    pub fn div_by_point_in_place(&mut self, q: &Point) -> &mut Self {
        geometry::div_by_point(self, q)
    }

    /// Scale to magnitude 1. A zero (or NaN) vector is left as it is.
    pub fn unit_in_place(&mut self) -> &mut Self {
        geometry::unit(self)
    }

    pub fn perp_in_place(&mut self) -> &mut Self {
        geometry::perp(self)
    }

    pub fn rotate_in_place(&mut self, angle: f64) -> &mut Self {
        geometry::rotate(self, angle)
    }

    pub fn rotate_around_in_place(&mut self, angle: f64, q: &Point) -> &mut Self {
        geometry::rotate_around(self, angle, q)
    }

    /// Round both coordinates, halfway cases away from zero.
    pub fn round_in_place(&mut self) -> &mut Self {
        geometry::round(self)
    }

    pub fn mat_mult_in_place(&mut self, m: impl Into<Mat2>) -> &mut Self {
        geometry::mat_mult(self, &m.into())
    }

    // ==================== Copy-returning transforms ====================

    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, q: &Point) -> Point {
        self.add_in_place(q);
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn sub(mut self, q: &Point) -> Point {
        self.sub_in_place(q);
        self
    }

    pub fn mult(mut self, k: f64) -> Point {
        self.mult_in_place(k);
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn div(mut self, k: f64) -> Point {
        self.div_in_place(k);
        self
    }

    pub fn mult_by_point(mut self, q: &Point) -> Point {
        self.mult_by_point_in_place(q);
        self
    }

    pub fn div_by_point(mut self, q: &Point) -> Point {
        self.div_by_point_in_place(q);
        self
    }

    pub fn unit(mut self) -> Point {
        self.unit_in_place();
        self
    }

    pub fn perp(mut self) -> Point {
        self.perp_in_place();
        self
    }

    pub fn rotate(mut self, angle: f64) -> Point {
        self.rotate_in_place(angle);
        self
    }

    pub fn rotate_around(mut self, angle: f64, q: &Point) -> Point {
        self.rotate_around_in_place(angle, q);
        self
    }

    pub fn round(mut self) -> Point {
        self.round_in_place();
        self
    }

    pub fn mat_mult(mut self, m: impl Into<Mat2>) -> Point {
        self.mat_mult_in_place(m);
        self
    }
}

impl Coords for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl Coords for DVec2 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

impl Coords for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn set_xy(&mut self, x: f64, y: f64) {
        *self = [x, y];
    }
}

impl Coords for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
    #[inline]
    fn set_xy(&mut self, x: f64, y: f64) {
        *self = (x, y);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        dvec2(p.x, p.y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::add(self, &rhs)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::sub(self, &rhs)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        self.mult(rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::div(self, rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point { x: -self.x, y: -self.y }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.add_in_place(&rhs);
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.sub_in_place(&rhs);
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        self.mult_in_place(rhs);
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, rhs: f64) {
        self.div_in_place(rhs);
    }
}

/// A 2x2 linear map, stored by row with named entries:
///
/// ```text
/// x' = xx * x + xy * y
/// y' = yx * x + yy * y
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2 {
    pub xx: f64,
    pub xy: f64,
    pub yx: f64,
    pub yy: f64,
}

impl Mat2 {
    pub const IDENTITY: Mat2 = Mat2 {
        xx: 1.0,
        xy: 0.0,
        yx: 0.0,
        yy: 1.0,
    };

    pub const fn from_rows(row_x: [f64; 2], row_y: [f64; 2]) -> Self {
        Mat2 {
            xx: row_x[0],
            xy: row_x[1],
            yx: row_y[0],
            yy: row_y[1],
        }
    }

    /// Counterclockwise rotation by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Mat2 {
            xx: cos,
            xy: -sin,
            yx: sin,
            yy: cos,
        }
    }

    /// Apply this map to `p`, returning the transformed point.
    pub fn apply(&self, p: Point) -> Point {
        p.mat_mult(*self)
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Mat2::IDENTITY
    }
}

/// Row-major flat layout: `[xx, xy, yx, yy]`.
impl From<[f64; 4]> for Mat2 {
    fn from([xx, xy, yx, yy]: [f64; 4]) -> Self {
        Mat2 { xx, xy, yx, yy }
    }
}

impl From<Mat2> for [f64; 4] {
    fn from(m: Mat2) -> Self {
        [m.xx, m.xy, m.yx, m.yy]
    }
}

// glam stores matrices by column.
impl From<Mat2> for DMat2 {
    fn from(m: Mat2) -> Self {
        DMat2::from_cols(dvec2(m.xx, m.yx), dvec2(m.xy, m.yy))
    }
}

impl From<DMat2> for Mat2 {
    fn from(m: DMat2) -> Self {
        Mat2 {
            xx: m.x_axis.x,
            xy: m.y_axis.x,
            yx: m.x_axis.y,
            yy: m.y_axis.y,
        }
    }
}
