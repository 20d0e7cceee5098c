//! Great-circle distance on a spherical Earth.
//!
//! Straight-line sea distance between coordinates. Ignores currents and
//! coastline, which is acceptable for open-water leg estimates.

use crate::traits::{CostSource, Located};

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two `(lat, lon)` pairs in degrees, in km.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Pure-haversine cost source.
///
/// Always available, never caches. Useful when no matrix has been built
/// and as the reference answer matrix lookups must agree with.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectCost;

impl CostSource for DirectCost {
    fn cost_km(&self, from: &impl Located, to: &impl Located) -> f64 {
        haversine_km(from.position(), to.position())
    }
}
