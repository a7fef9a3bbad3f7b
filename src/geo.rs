//! TSPLIB "GEO" coordinates and the geodesic distance defined on them.
//!
//! Coordinates are encoded as `DDD.MM`: the integer part holds whole degrees
//! and the fractional part holds minutes, so `45.30` means 45°30′. Distances
//! are integers and must match the published TSPLIB reference tables, which is
//! why both constants below are fixed approximations.

use serde::{Deserialize, Serialize};

/// Approximation of π used by the TSPLIB GEO convention. Do not replace with
/// `std::f64::consts::PI`: reference distances would drift.
pub const PI_APPROX: f64 = 3.141592;

/// Earth radius (km) used by the TSPLIB GEO distance.
pub const EARTH_RADIUS: f64 = 6378.388;

/// Convert a `DDD.MM` value into radians.
///
/// Degrees are taken as the nearest integer (half away from zero) and the
/// signed remainder is treated as minutes.
pub fn to_radians(value: f64) -> f64 {
    let deg = value.round();
    let min = value - deg;
    PI_APPROX * (deg + 5.0 * min / 3.0) / 180.0
}

/// A geographic position in TSPLIB GEO form, with its radians precomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub radians_latitude: f64,
    pub radians_longitude: f64,
}

impl GeoPoint {
    /// Create a point, converting both axes to radians.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
            radians_latitude: to_radians(latitude),
            radians_longitude: to_radians(longitude),
        }
    }

    /// TSPLIB GEO distance to another point.
    ///
    /// The `+ 1.0` before truncation is part of the reference formula.
    pub fn distance(&self, other: &GeoPoint) -> u32 {
        let q1 = (self.radians_longitude - other.radians_longitude).cos();
        let q2 = (self.radians_latitude - other.radians_latitude).cos();
        let q3 = (self.radians_latitude + other.radians_latitude).cos();

        // rounding can push coincident points just past 1.0
        let cosine = (0.5 * ((1.0 + q1) * q2 - (1.0 - q1) * q3)).clamp(-1.0, 1.0);

        (EARTH_RADIUS * cosine.acos() + 1.0) as u32
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.latitude, self.longitude)
    }
}
