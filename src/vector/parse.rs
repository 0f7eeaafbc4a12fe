//! Parsing of the `Vector3(x, y, z)` text form
//!
//! Accepts the output of `Display` as well as a bare `x, y, z` triple.
//! Components go through `f64::from_str`, with the `Infinity` spellings used
//! by `Display` mapped explicitly. Parsing a displayed vector only recovers
//! the two-decimal rounded values.

use std::str::FromStr;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use super::Vector3;
use crate::SkysphereError;

lazy_static! {
    static ref WRAPPED: Regex = Regex::new(r"^\s*Vector3\s*\((?P<body>[^()]*)\)\s*$").unwrap();
    static ref TRIPLE: Regex =
        Regex::new(r"^\s*(?P<x>[^,\s()]+)\s*,\s*(?P<y>[^,\s()]+)\s*,\s*(?P<z>[^,\s()]+)\s*$").unwrap();
}

fn parse_component(index: usize, text: &str) -> Result<f64, SkysphereError> {
    match text {
        "Infinity" | "+Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        _ => text
            .parse::<f64>()
            .map_err(|_| SkysphereError::InvalidComponent {
                index,
                text: text.to_string(),
            }),
    }
}

impl FromStr for Vector3 {
    type Err = SkysphereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = WRAPPED
            .captures(s)
            .and_then(|caps| caps.name("body"))
            .map_or(s, |m| m.as_str());

        let caps = TRIPLE.captures(body).ok_or_else(|| {
            trace!("rejecting vector text {s:?}");
            SkysphereError::Parse(format!("expected `Vector3(x, y, z)` or `x, y, z`, got {s:?}"))
        })?;

        let mut components = [0.0; 3];
        for (index, name) in ["x", "y", "z"].into_iter().enumerate() {
            components[index] = parse_component(index, &caps[name])?;
        }

        Ok(Vector3::from(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_form() {
        let v: Vector3 = "Vector3(1.00, 2.35, -0.50)".parse().unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.35, -0.5));
    }

    #[test]
    fn test_parse_bare_triple() {
        let v: Vector3 = "  3, 4.5e2 ,-7 ".parse().unwrap();
        assert_eq!(v, Vector3::new(3.0, 450.0, -7.0));
    }

    #[test]
    fn test_parse_display_round_trip_is_rounded() {
        let original = Vector3::new(0.123_456, -9.876_5, 100.0);
        let parsed: Vector3 = original.to_string().parse().unwrap();
        assert_eq!(parsed, Vector3::new(0.12, -9.88, 100.0));
    }

    #[test]
    fn test_parse_non_finite() {
        let v: Vector3 = "Vector3(NaN, Infinity, -Infinity)".parse().unwrap();
        assert!(v.x().is_nan());
        assert_eq!(v.y(), f64::INFINITY);
        assert_eq!(v.z(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_shape_errors() {
        for text in ["", "Vector3()", "1, 2", "1, 2, 3, 4", "Vector3(1, 2, 3", "Vector2(1, 2, 3)"] {
            let result = text.parse::<Vector3>();
            assert!(
                matches!(result, Err(SkysphereError::Parse(_))),
                "expected shape error for {text:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_parse_bad_component() {
        let result = "Vector3(1.0, north, 3.0)".parse::<Vector3>();
        assert_eq!(
            result,
            Err(SkysphereError::InvalidComponent {
                index: 1,
                text: "north".to_string()
            })
        );
    }
}
