//! Skysphere: immutable 3D vectors and astronomical constants
//!
//! This crate provides the geometric foundation for mapping celestial
//! coordinates onto a sphere: a `Vector3` value type with Cartesian and
//! azimuth/elevation constructors, and a table of angle-conversion and
//! physical constants.
//!
//! ```rust
//! use skysphere::constants::DEGTORAD;
//! use skysphere::Vector3;
//!
//! let star = Vector3::from_azimuth_elevation(30.0 * DEGTORAD, 45.0 * DEGTORAD);
//! assert!((star.elevation_in_degrees() - 45.0).abs() < 1e-12);
//! assert!((star.longitude() / DEGTORAD - 30.0).abs() < 1e-12);
//! ```

use thiserror::Error;

pub mod constants;
pub mod vector;

// Re-export commonly used types
pub use vector::Vector3;

/// Main error type for the skysphere library
///
/// Vector arithmetic never fails; these errors only come from converting
/// outside data into a `Vector3`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkysphereError {
    #[error("Wrong number of components: expected {expected}, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid component {index}: {text:?} is not a number")]
    InvalidComponent { index: usize, text: String },
}

/// Result type for skysphere operations
pub type Result<T> = std::result::Result<T, SkysphereError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SkysphereError::WrongLength {
            expected: 3,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "Wrong number of components: expected 3, got 5"
        );

        let err = SkysphereError::InvalidComponent {
            index: 2,
            text: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid component 2: \"abc\" is not a number");
    }
}
