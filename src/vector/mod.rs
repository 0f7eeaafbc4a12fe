//! # Vector Module
//!
//! This module provides `Vector3`, an immutable three-dimensional vector used
//! to place celestial directions on a sphere and to move between Cartesian
//! and azimuth/elevation descriptions of them.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: Azimuth 0, elevation 0
//! - **Y-axis**: Azimuth 90° (counter-clockwise from X), elevation 0
//! - **Z-axis**: Elevation +90°
//!
//! ## Value Semantics
//!
//! A `Vector3` is a `Copy` value whose components cannot be changed after
//! construction. Every operation returns a new vector.
//!
//! Equality is bit-exact IEEE 754 comparison of the three components, so a
//! vector holding a NaN never equals anything, itself included. Use the
//! [`approx`] traits for tolerance-based comparison.
//!
//! ## Degenerate Inputs
//!
//! No operation panics or returns an error. NaN and infinities propagate
//! through the arithmetic, and the few undefined cases have fixed answers:
//! - [`Vector3::angle_between`] returns 0 when either vector has zero length
//! - [`Vector3::element`] returns NaN for an index outside `0..3`
//! - [`Vector3::normalize`] of the zero vector is all NaN
//!
//! ## Examples
//!
//! ```rust
//! use skysphere::Vector3;
//! use std::f64::consts::PI;
//!
//! let east = Vector3::new(1.0, 0.0, 0.0);
//! let north = Vector3::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(east.dot_product(north), 0.0);
//! assert_eq!(east.vector_product(north), Vector3::new(0.0, 0.0, 1.0));
//! assert!((east.angle_between(north) - PI / 2.0).abs() < 1e-15);
//! ```

pub mod parse;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use log::trace;
use nalgebra as na;
use serde::{Deserialize, Serialize};

use crate::constants::DEGTORAD;
use crate::{Result, SkysphereError};

/// Immutable vector in three-dimensional space
///
/// Represents a point or a direction. Components are stored verbatim as
/// `f64` and are read through [`x`](Vector3::x), [`y`](Vector3::y) and
/// [`z`](Vector3::z).
///
/// # Equality and Hashing
///
/// `PartialEq` compares components with IEEE 754 `==`; there is no epsilon
/// and no `Eq` impl. `Hash` agrees with `PartialEq`: `0.0` and `-0.0` hash
/// the same.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// All-NaN vector
    pub const NAN: Vector3 = Vector3::new(f64::NAN, f64::NAN, f64::NAN);

    /// All-NaN vector marking an undefined result
    ///
    /// Identical in content to [`Vector3::NAN`].
    pub const UNDEFINED: Vector3 = Vector3::new(f64::NAN, f64::NAN, f64::NAN);

    /// Creates a vector from Cartesian components
    ///
    /// The components are stored as given. NaN and infinite values are
    /// accepted and propagate through every derived quantity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skysphere::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x(), 1.0);
    /// assert_eq!(v.y(), 2.0);
    /// assert_eq!(v.z(), 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Creates a unit vector from azimuth and elevation
    ///
    /// # Arguments
    ///
    /// * `azimuth` - Radians, counter-clockwise from the x-axis in the xy-plane
    /// * `elevation` - Radians, from the xy-plane toward +z
    ///
    /// # Mathematical Conversion
    ///
    /// - `x = cos(azimuth) * cos(elevation)`
    /// - `y = sin(azimuth) * cos(elevation)`
    /// - `z = sin(elevation)`
    ///
    /// The result is not renormalized afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skysphere::Vector3;
    /// use std::f64::consts::PI;
    ///
    /// let zenith = Vector3::from_azimuth_elevation(0.0, PI / 2.0);
    /// assert!(zenith.x().abs() < 1e-15);
    /// assert!(zenith.y().abs() < 1e-15);
    /// assert_eq!(zenith.z(), 1.0);
    /// ```
    pub fn from_azimuth_elevation(azimuth: f64, elevation: f64) -> Self {
        let cos_elev = elevation.cos();
        Vector3 {
            x: azimuth.cos() * cos_elev,
            y: azimuth.sin() * cos_elev,
            z: elevation.sin(),
        }
    }

    /// X component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns the component at `index` (0 = x, 1 = y, 2 = z)
    ///
    /// Any other index yields NaN rather than panicking.
    ///
    /// ```rust
    /// use skysphere::Vector3;
    ///
    /// let v = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(v.element(1), 5.0);
    /// assert!(v.element(3).is_nan());
    /// ```
    pub fn element(&self, index: usize) -> f64 {
        match index {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => f64::NAN,
        }
    }

    /// Creates a new vector with every component multiplied by `factor`
    pub fn scale(self, factor: f64) -> Vector3 {
        Vector3::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Componentwise sum
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Componentwise difference `self - other`
    pub fn subtract(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Calculates the dot product with another vector
    ///
    /// # Mathematical Formula
    ///
    /// `dot = x₁*x₂ + y₁*y₂ + z₁*z₂`
    pub fn dot_product(self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the right-handed cross product `self × other`
    ///
    /// Not commutative: `a × b == -(b × a)`.
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn vector_product(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Square of the magnitude, for comparisons that do not need the root
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// NaN if any component is NaN.
    ///
    /// ```rust
    /// use skysphere::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a vector with the same direction and unit length
    ///
    /// This is `scale(1 / magnitude)` with no zero check. For the zero vector
    /// the factor is `+inf` and `0 * inf` gives an all-NaN result, which is
    /// returned as-is.
    ///
    /// ```rust
    /// use skysphere::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    ///
    /// assert!(Vector3::ZERO.normalize().has_nan());
    /// ```
    pub fn normalize(self) -> Vector3 {
        self.scale(1.0 / self.magnitude())
    }

    /// Rotates by `angle` radians about the x-axis (right-handed)
    ///
    /// `y' = cos·y − sin·z`, `z' = sin·y + cos·z`; x is unchanged.
    pub fn rotate_about_x_axis(self, angle: f64) -> Vector3 {
        let (sine, cosine) = angle.sin_cos();
        Vector3::new(
            self.x,
            cosine * self.y - sine * self.z,
            sine * self.y + cosine * self.z,
        )
    }

    /// Rotates by `angle` radians about the z-axis (right-handed)
    ///
    /// `x' = cos·x − sin·y`, `y' = sin·x + cos·y`; z is unchanged.
    ///
    /// ```rust
    /// use skysphere::Vector3;
    /// use std::f64::consts::PI;
    ///
    /// let v = Vector3::new(1.0, 0.0, 0.0).rotate_about_z_axis(PI / 2.0);
    /// assert!(v.x().abs() < 1e-15);
    /// assert!((v.y() - 1.0).abs() < 1e-15);
    /// assert_eq!(v.z(), 0.0);
    /// ```
    pub fn rotate_about_z_axis(self, angle: f64) -> Vector3 {
        let (sine, cosine) = angle.sin_cos();
        Vector3::new(
            cosine * self.x - sine * self.y,
            sine * self.x + cosine * self.y,
            self.z,
        )
    }

    /// Calculates the angle between two vectors in radians
    ///
    /// # Returns
    ///
    /// `acos(dot / (|a| |b|))` in `[0, π]`, or 0 when:
    /// - the product of the magnitudes is not positive (a zero-length or NaN
    ///   vector is involved)
    /// - rounding pushes the cosine outside `[-1, 1]`
    ///
    /// The second rule also applies to nearly antiparallel vectors, whose
    /// cosine can land just below -1.
    pub fn angle_between(self, other: Vector3) -> f64 {
        let mag_product = self.magnitude() * other.magnitude();

        if mag_product > 0.0 {
            let cosine = self.dot_product(other) / mag_product;
            if cosine.abs() <= 1.0 {
                cosine.acos()
            } else {
                trace!("cosine {cosine} outside [-1, 1] between {self} and {other}, using 0");
                0.0
            }
        } else {
            0.0
        }
    }

    /// Angle above the xy-plane in radians, `asin(z / |v|)`
    ///
    /// NaN for the zero vector, or if rounding pushes the ratio outside
    /// `[-1, 1]`.
    pub fn latitude(&self) -> f64 {
        (self.z / self.magnitude()).asin()
    }

    /// Angle in the xy-plane from the x-axis in radians, in `(-π, π]`
    pub fn longitude(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Bearing in degrees measured clockwise from north (the +y axis)
    ///
    /// Computed as `90 - longitude` in degrees with a single `+360` applied to
    /// negative results. The longitude never leaves `(-180°, 180°]`, so the
    /// result is in `[0, 360)` except for a bearing a few ulps west of north:
    /// the tiny negative value rounds to exactly `360.0` after the shift.
    ///
    /// ```rust
    /// use skysphere::Vector3;
    ///
    /// assert_eq!(Vector3::new(0.0, 1.0, 0.0).azimuth_in_degrees(), 0.0);
    /// assert_eq!(Vector3::new(1.0, 0.0, 0.0).azimuth_in_degrees(), 90.0);
    /// assert_eq!(Vector3::new(-1.0, 0.0, 0.0).azimuth_in_degrees(), 270.0);
    /// ```
    pub fn azimuth_in_degrees(&self) -> f64 {
        let az = 90.0 - self.longitude() / DEGTORAD;
        if az < 0.0 {
            az + 360.0
        } else {
            az
        }
    }

    /// Elevation in degrees measured upwards from the horizon, in `[-90, 90]`
    pub fn elevation_in_degrees(&self) -> f64 {
        self.latitude() / DEGTORAD
    }

    /// True if any component is NaN
    pub fn has_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// True if every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Converts to a nalgebra `Vector3<f64>`
    pub fn to_nalgebra(&self) -> na::Vector3<f64> {
        na::Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from a nalgebra `Vector3<f64>`
    pub fn from_nalgebra(vec: na::Vector3<f64>) -> Self {
        Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::ZERO
    }
}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Adding +0.0 folds -0.0 into +0.0, matching `==`.
        for component in [self.x, self.y, self.z] {
            (component + 0.0).to_bits().hash(state);
        }
    }
}

/// Writes one component with two decimals, or the non-finite spelling.
fn fmt_component(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value == f64::INFINITY {
        f.write_str("Infinity")
    } else if value == f64::NEG_INFINITY {
        f.write_str("-Infinity")
    } else {
        f.write_str(&round_half_up_hundredths(value))
    }
}

/// Formats a finite value with two decimals, rounding half-up on its
/// shortest round-trip digits (so `1.005` gives `1.01`, not `1.00`).
fn round_half_up_hundredths(value: f64) -> String {
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    // Digits of `value * 100` left of its decimal point
    let kept = exponent + 3;
    let mut hundredths: Vec<u8> = (0..kept.max(0) as usize)
        .map(|i| digits.get(i).copied().unwrap_or(0))
        .collect();
    let next = if kept >= 0 {
        digits.get(kept as usize).copied().unwrap_or(0)
    } else {
        0
    };

    if next >= 5 {
        let mut i = hundredths.len();
        loop {
            if i == 0 {
                hundredths.insert(0, 1);
                break;
            }
            i -= 1;
            if hundredths[i] == 9 {
                hundredths[i] = 0;
            } else {
                hundredths[i] += 1;
                break;
            }
        }
    }

    while hundredths.len() < 3 {
        hundredths.insert(0, 0);
    }

    let split = hundredths.len() - 2;
    let mut out = String::with_capacity(hundredths.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(hundredths[..split].iter().map(|d| char::from(b'0' + d)));
    out.push('.');
    out.extend(hundredths[split..].iter().map(|d| char::from(b'0' + d)));
    out
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector3(")?;
        fmt_component(self.x, f)?;
        f.write_str(", ")?;
        fmt_component(self.y, f)?;
        f.write_str(", ")?;
        fmt_component(self.z, f)?;
        f.write_str(")")
    }
}

// Arithmetic operations for convenience
impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::add(self, other)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        self.subtract(other)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        self.scale(scalar)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vector: Vector3) -> Vector3 {
        vector.scale(self)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = SkysphereError;

    fn try_from(components: &[f64]) -> Result<Self> {
        match *components {
            [x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => Err(SkysphereError::WrongLength {
                expected: 3,
                actual: components.len(),
            }),
        }
    }
}

impl From<na::Vector3<f64>> for Vector3 {
    fn from(vec: na::Vector3<f64>) -> Self {
        Vector3::from_nalgebra(vec)
    }
}

impl From<Vector3> for na::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        v.to_nalgebra()
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
