//! Sphere Point Tool
//!
//! Builds a unit vector from an azimuth/elevation pair and prints its
//! Cartesian components together with the compass bearing and elevation.
//!
//! Usage:
//!   cargo run --bin sphere_point -- [--degrees] [--json] <AZIMUTH> <ELEVATION>

use clap::{ArgAction, Parser};
use serde::Serialize;
use skysphere::constants::DEGTORAD;
use skysphere::Vector3;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sphere Point Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts an azimuth/elevation pair into a unit vector on the sphere",
    long_about = None
)]
struct Args {
    /// Interpret the angles as degrees instead of radians
    #[arg(short, long, action = ArgAction::SetTrue)]
    degrees: bool,

    /// Print the report as JSON
    #[arg(short, long, action = ArgAction::SetTrue)]
    json: bool,

    /// Azimuth, counter-clockwise from the x-axis
    #[arg(allow_negative_numbers = true)]
    azimuth: f64,

    /// Elevation above the xy-plane
    #[arg(allow_negative_numbers = true)]
    elevation: f64,
}

#[derive(Debug, Serialize)]
struct PointReport {
    vector: Vector3,
    magnitude: f64,
    bearing_deg: f64,
    elevation_deg: f64,
}

impl PointReport {
    fn new(vector: Vector3) -> Self {
        PointReport {
            vector,
            magnitude: vector.magnitude(),
            bearing_deg: vector.azimuth_in_degrees(),
            elevation_deg: vector.elevation_in_degrees(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (azimuth, elevation) = if args.degrees {
        (args.azimuth * DEGTORAD, args.elevation * DEGTORAD)
    } else {
        (args.azimuth, args.elevation)
    };

    let report = PointReport::new(Vector3::from_azimuth_elevation(azimuth, elevation));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Vector:    {}", report.vector);
    println!("Magnitude: {:.6}", report.magnitude);
    println!("Bearing:   {:.4}° (clockwise from north)", report.bearing_deg);
    println!("Elevation: {:.4}°", report.elevation_deg);

    Ok(())
}
