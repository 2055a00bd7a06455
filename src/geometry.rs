//! Free functions over plain coordinate pairs.
//!
//! Queries borrow their arguments. Transforms write the result back into the
//! first argument and return it, so calls can be nested:
//! `round(rotate(&mut p, FRAC_PI_2))`.

use crate::log::debug;
use crate::types::{Coords, Mat2, Point};

/// Build a point from two numbers. No validation.
pub fn from(x: f64, y: f64) -> Point {
    Point { x, y }
}

/// Copy any coordinate pair into a fresh [`Point`].
pub fn clone(p: &impl Coords) -> Point {
    Point { x: p.x(), y: p.y() }
}

pub fn equals(p: &impl Coords, q: &impl Coords) -> bool {
    p.x() == q.x() && p.y() == q.y()
}

/// Euclidean distance from the origin.
pub fn mag(p: &impl Coords) -> f64 {
    (p.x() * p.x() + p.y() * p.y()).sqrt()
}

pub fn dist(p: &impl Coords, q: &impl Coords) -> f64 {
    dist_sqr(p, q).sqrt()
}

/// Squared distance, for relative comparisons without the square root.
pub fn dist_sqr(p: &impl Coords, q: &impl Coords) -> f64 {
    let dx = p.x() - q.x();
    let dy = p.y() - q.y();
    dx * dx + dy * dy
}

/// Angle from the origin to `p`, in radians, in `(-π, π]`.
pub fn angle(p: &impl Coords) -> f64 {
    p.y().atan2(p.x())
}

/// Angle of the vector pointing from `q` to `p`.
pub fn angle_to(p: &impl Coords, q: &impl Coords) -> f64 {
    (p.y() - q.y()).atan2(p.x() - q.x())
}

/// Signed angle between `p` and `b` taken as vectors.
pub fn angle_with(p: &impl Coords, b: &impl Coords) -> f64 {
    angle_with_sep(p, b.x(), b.y())
}

/// Signed angle between `p` and the vector `(x, y)`.
///
/// Solves `a × b = |a||b| sin θ` together with `a · b = |a||b| cos θ`.
/// A zero vector on either side yields 0 regardless of the sign of the
/// zeros involved.
pub fn angle_with_sep(p: &impl Coords, x: f64, y: f64) -> f64 {
    if (p.x() == 0.0 && p.y() == 0.0) || (x == 0.0 && y == 0.0) {
        return 0.0;
    }
    let cross = p.x() * y - p.y() * x;
    let dot = p.x() * x + p.y() * y;
    cross.atan2(dot)
}

pub fn add<'a, P: Coords>(p: &'a mut P, q: &impl Coords) -> &'a mut P {
    p.set_xy(p.x() + q.x(), p.y() + q.y());
    p
}

pub fn sub<'a, P: Coords>(p: &'a mut P, q: &impl Coords) -> &'a mut P {
    p.set_xy(p.x() - q.x(), p.y() - q.y());
    p
}

pub fn mult<P: Coords>(p: &mut P, k: f64) -> &mut P {
    p.set_xy(p.x() * k, p.y() * k);
    p
}

/// Divide by a scalar. Dividing by zero gives infinities or NaN.
pub fn div<P: Coords>(p: &mut P, k: f64) -> &mut P {
    p.set_xy(p.x() / k, p.y() / k);
    p
}

pub fn mult_by_point<'a, P: Coords>(p: &'a mut P, q: &impl Coords) -> &'a mut P {
    p.set_xy(p.x() * q.x(), p.y() * q.y());
    p
}

pub fn div_by_point<'a, P: Coords>(p: &'a mut P, q: &impl Coords) -> &'a mut P {
    p.set_xy(p.x() / q.x(), p.y() / q.y());
    p
}

/// Normalize to magnitude 1.
///
/// The point is left unchanged when its magnitude is not strictly positive,
/// so a zero vector stays `(0, 0)` instead of turning into NaN.
pub fn unit<P: Coords>(p: &mut P) -> &mut P {
    let magnitude = mag(&*p);
    if magnitude > 0.0 {
        p.set_xy(p.x() / magnitude, p.y() / magnitude);
    } else {
        debug!(?magnitude, "unit: degenerate vector left unchanged");
    }
    p
}

/// Rotate 90° counterclockwise: `(x, y) -> (-y, x)`.
pub fn perp<P: Coords>(p: &mut P) -> &mut P {
    p.set_xy(-p.y(), p.x());
    p
}

/// Rotate counterclockwise about the origin by `angle` radians.
pub fn rotate<P: Coords>(p: &mut P, angle: f64) -> &mut P {
    let (sin, cos) = angle.sin_cos();
    let x = cos * p.x() - sin * p.y();
    let y = sin * p.x() + cos * p.y();
    p.set_xy(x, y);
    p
}

/// Rotate counterclockwise about the pivot `q` by `angle` radians.
pub fn rotate_around<'a, P: Coords>(p: &'a mut P, angle: f64, q: &impl Coords) -> &'a mut P {
    let (sin, cos) = angle.sin_cos();
    let dx = p.x() - q.x();
    let dy = p.y() - q.y();
    let x = q.x() + cos * dx - sin * dy;
    let y = q.y() + sin * dx + cos * dy;
    p.set_xy(x, y);
    p
}

/// Round each coordinate to the nearest integer.
///
/// Halfway cases round away from zero: `0.5 -> 1`, `-0.5 -> -1`.
pub fn round<P: Coords>(p: &mut P) -> &mut P {
    p.set_xy(p.x().round(), p.y().round());
    p
}

/// Apply the linear map `m` to `p`.
pub fn mat_mult<'a, P: Coords>(p: &'a mut P, m: &Mat2) -> &'a mut P {
    let x = m.xx * p.x() + m.xy * p.y();
    let y = m.yx * p.x() + m.yy * p.y();
    p.set_xy(x, y);
    p
}
