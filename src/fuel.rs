//! Physical fuel-consumption model.
//!
//! Post-processes a finalized node sequence: per-leg fuel scaled by hull
//! material, crew size and how full the hold is, plus distance and
//! transit-time totals. Cumulative loads are recomputed here so the
//! figures stay correct after the refiner reorders the sequence.

use serde::{Deserialize, Serialize};

use crate::solver::RouteNode;
use crate::traits::CostSource;

/// Knots to km/h.
const KNOT_KMH: f64 = 1.852;

/// Extra fuel per crew member, fraction of the base rate.
const CREW_RATE: f64 = 0.005;

/// Fuel penalty of a completely full hold, fraction of the base rate.
const FULL_HOLD_PENALTY: f64 = 0.5;

/// Vessel attributes read from the fleet registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselSpec {
    pub name: String,
    pub capacity_tons: f64,
    pub speed_knots: f64,
    /// Base fuel burn per kilometer: empty hold, reference hull.
    pub fuel_rate_per_km: f64,
    pub hull_material: String,
    pub crew_size: u32,
}

/// Hull-material drag multiplier. Case-insensitive substring match, first
/// rule wins; unknown materials (steel included) burn at the reference
/// rate.
pub fn hull_factor(material: &str) -> f64 {
    let material = material.to_uppercase();
    if material.contains("FIBR") {
        0.90
    } else if material.contains("WOOD") || material.contains("MADERA") {
        0.95
    } else if material.contains("ALUMIN") {
        0.92
    } else {
        1.0
    }
}

/// Crew weight and hotel-load multiplier.
pub fn crew_factor(crew_size: u32) -> f64 {
    1.0 + CREW_RATE * crew_size as f64
}

/// Aggregate figures for a finalized route.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionReport {
    pub total_distance_km: f64,
    pub total_fuel: f64,
    pub estimated_hours: f64,
}

/// Walks the closed node sequence, rewriting each node's cumulative load
/// and accumulating leg distance and fuel.
///
/// Each leg burns `distance × base rate × hull × crew × load factor`,
/// where the load factor reflects how full the hold is when the leg
/// starts: `1 + 0.5 × (load / capacity)`.
pub fn consumption_report(
    nodes: &mut [RouteNode],
    vessel: &VesselSpec,
    capacity_tons: f64,
    speed_knots: f64,
    cost: &impl CostSource,
) -> ConsumptionReport {
    let hull = hull_factor(&vessel.hull_material);
    let crew = crew_factor(vessel.crew_size);

    let mut cumulative = 0.0;
    let mut total_distance_km = 0.0;
    let mut total_fuel = 0.0;

    for i in 0..nodes.len() {
        cumulative += nodes[i].picked_up_tons;
        nodes[i].cumulative_tons = cumulative;

        if let Some(next) = nodes.get(i + 1) {
            let km = cost.cost_km(&nodes[i], next);
            let load_factor = if capacity_tons > 0.0 {
                1.0 + FULL_HOLD_PENALTY * (cumulative / capacity_tons)
            } else {
                1.0
            };
            total_distance_km += km;
            total_fuel += km * vessel.fuel_rate_per_km * hull * crew * load_factor;
        }
    }

    let estimated_hours = if speed_knots > 0.0 {
        total_distance_km / (speed_knots * KNOT_KMH)
    } else {
        0.0
    };

    ConsumptionReport { total_distance_km, total_fuel, estimated_hours }
}

/// Human-readable closing report for a finished route.
pub fn route_summary(
    base_name: &str,
    vessel: &VesselSpec,
    total_load_tons: f64,
    report: &ConsumptionReport,
    node_count: usize,
) -> String {
    let per_leg = if node_count > 0 {
        report.total_distance_km / node_count as f64
    } else {
        0.0
    };
    format!(
        "CLOSED-LOOP OPERATION\n\
         • Home port: {}\n\
         • Vessel: {} ({})\n\
         • Load collected: {:.2} t\n\
         • Fuel burned: {:.1} gal\n\
         • Efficiency: {:.1} km/leg",
        base_name, vessel.name, vessel.hull_material, total_load_tons, report.total_fuel, per_leg,
    )
}
