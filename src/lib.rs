//! A 2D point/vector value type.
//!
//! The same operation set is available two ways:
//!
//! - [`geometry`]: free functions over any [`Coords`] implementor
//!   (`Point`, `[f64; 2]`, `(f64, f64)`, `glam::DVec2`). Transforms mutate
//!   their first argument and hand it back.
//! - [`Point`] methods: `*_in_place` mutates the receiver, the plain name
//!   returns a transformed copy.
//!
//! ```
//! use point_geometry::{Point, geometry};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let p = Point::new(0.0, 1.0);
//! assert_eq!(p.rotate(FRAC_PI_2).round(), Point::new(-1.0, 0.0));
//!
//! let mut q = geometry::from(2.0, 3.0);
//! geometry::round(geometry::rotate_around(&mut q, FRAC_PI_2, &Point::new(2.0, 2.0)));
//! assert_eq!(q, Point::new(1.0, 2.0));
//! ```

pub mod convert;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod types;

pub use convert::PointLike;
pub use errors::PointError;
pub use types::{Coords, Mat2, Point};
