//! Collaborator seams for the route planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps
//! should implement them for their own fleet store and cost backend.

use crate::fuel::VesselSpec;

/// Anything with a stable identifier and a geographic position.
pub trait Located {
    fn id(&self) -> &str;

    /// Coordinates as (lat, lon) in degrees.
    fn position(&self) -> (f64, f64);
}

/// Supplies vessel attributes keyed by vessel identifier.
///
/// An absent vessel fails the route request before any routing work.
pub trait FleetRegistry {
    fn vessel(&self, id: &str) -> Option<VesselSpec>;
}

/// Supplies travel cost in kilometers between two located nodes.
///
/// Implementations may serve precomputed values, but any pair they cannot
/// serve must still be answered by direct computation: a cost source is an
/// optimization, never a source of truth, and never blocks a route.
pub trait CostSource {
    fn cost_km(&self, from: &impl Located, to: &impl Located) -> f64;
}
