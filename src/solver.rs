//! Closed-loop route construction and refinement.
//!
//! A request resolves its vessel and home base, builds a greedy
//! nearest-unvisited route bounded by hold capacity, uncrosses it with
//! 2-opt and prices the result with the consumption model. Every
//! infeasible condition short of a missing vessel or base degrades to a
//! valid degenerate route instead of failing.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Base, CatalogSnapshot, Site};
use crate::fuel;
use crate::traits::{CostSource, FleetRegistry, Located};

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// A candidate farther than this from the route head is unreachable
    /// and ends construction.
    pub reach_limit_km: f64,
    /// Number of leading catalog sites offered to the constructor.
    pub candidate_pool: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            reach_limit_km: 600.0,
            candidate_pool: 200,
        }
    }
}

/// One route computation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub vessel_id: String,
    pub base_id: String,
    #[serde(default)]
    pub capacity_override: Option<f64>,
    #[serde(default)]
    pub speed_override: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Base,
    Site,
}

/// One stop in a planned route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteNode {
    pub id: String,
    pub kind: NodeKind,
    pub lat: f64,
    pub lon: f64,
    /// Load taken on board at this node. Zero for bases.
    pub picked_up_tons: f64,
    /// Load carried after leaving this node.
    pub cumulative_tons: f64,
}

impl RouteNode {
    fn for_base(base: &Base) -> Self {
        Self {
            id: base.id.clone(),
            kind: NodeKind::Base,
            lat: base.lat,
            lon: base.lon,
            picked_up_tons: 0.0,
            cumulative_tons: 0.0,
        }
    }

    fn for_site(site: &Site, picked_up_tons: f64, cumulative_tons: f64) -> Self {
        Self {
            id: site.id.clone(),
            kind: NodeKind::Site,
            lat: site.lat,
            lon: site.lon,
            picked_up_tons,
            cumulative_tons,
        }
    }
}

impl Located for RouteNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// Finished plan for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub vessel_id: String,
    pub total_distance_km: f64,
    pub total_load_tons: f64,
    pub total_fuel: f64,
    pub estimated_hours: f64,
    pub nodes: Vec<RouteNode>,
    pub summary: String,
}

/// Route planning failures surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    VesselNotFound(String),
    BaseNotFound(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::VesselNotFound(id) => write!(f, "vessel not found: {id}"),
            PlanError::BaseNotFound(id) => write!(f, "base not found: {id}"),
        }
    }
}

impl std::error::Error for PlanError {}

/// Plans one closed-loop collection route.
///
/// Fails only when the vessel or base is unknown; anything else — no
/// reachable sites, zero capacity, an empty catalog — yields a valid
/// degenerate round trip with zero totals.
pub fn plan_route<F: FleetRegistry>(
    request: &RouteRequest,
    snapshot: &CatalogSnapshot,
    fleet: &F,
    options: &SolveOptions,
) -> Result<RouteResult, PlanError> {
    let vessel = fleet
        .vessel(&request.vessel_id)
        .ok_or_else(|| PlanError::VesselNotFound(request.vessel_id.clone()))?;
    let base = snapshot
        .base(&request.base_id)
        .ok_or_else(|| PlanError::BaseNotFound(request.base_id.clone()))?;

    let capacity_tons = request.capacity_override.unwrap_or(vessel.capacity_tons);
    let speed_knots = request.speed_override.unwrap_or(vessel.speed_knots);
    let candidates = snapshot.candidate_sites(options.candidate_pool);

    let greedy = construct_route(base, capacity_tons, candidates, snapshot, options);
    let mut nodes = refine_route(greedy, snapshot);

    let report = fuel::consumption_report(&mut nodes, &vessel, capacity_tons, speed_knots, snapshot);
    let total_load_tons = nodes.last().map(|node| node.cumulative_tons).unwrap_or(0.0);
    let summary = fuel::route_summary(&base.name, &vessel, total_load_tons, &report, nodes.len());

    Ok(RouteResult {
        vessel_id: request.vessel_id.clone(),
        total_distance_km: report.total_distance_km,
        total_load_tons,
        total_fuel: report.total_fuel,
        estimated_hours: report.estimated_hours,
        nodes,
        summary,
    })
}

/// Builds the initial feasible loop: nearest unvisited site first, until
/// the hold is full or nothing reachable remains, then back home.
///
/// Ties break to the first candidate encountered in feed order, so the
/// construction is deterministic for a given catalog generation.
pub fn construct_route(
    base: &Base,
    capacity_tons: f64,
    candidates: &[Site],
    cost: &impl CostSource,
    options: &SolveOptions,
) -> Vec<RouteNode> {
    let mut route = vec![RouteNode::for_base(base)];
    let mut visited: HashSet<&str> = HashSet::new();
    let mut load = 0.0;

    while load < capacity_tons {
        let Some(head) = route.last() else { break };

        let mut best: Option<(usize, f64)> = None;
        for (index, site) in candidates.iter().enumerate() {
            if site.available_tons <= 0.0 || visited.contains(site.id.as_str()) {
                continue;
            }
            let km = cost.cost_km(head, site);
            if best.is_none_or(|(_, best_km)| km < best_km) {
                best = Some((index, km));
            }
        }

        let Some((index, km)) = best else { break };
        if km > options.reach_limit_km {
            break;
        }

        let site = &candidates[index];
        let pickup = site.available_tons.min(capacity_tons - load);
        if pickup <= 0.0 {
            break;
        }

        load += pickup;
        route.push(RouteNode::for_site(site, pickup, load));
        visited.insert(site.id.as_str());
    }

    route.push(RouteNode::for_base(base));
    debug!(nodes = route.len(), load, "greedy route constructed");
    route
}

/// Sum of consecutive-leg costs over the sequence.
pub fn route_distance_km(nodes: &[RouteNode], cost: &impl CostSource) -> f64 {
    nodes
        .windows(2)
        .map(|leg| cost.cost_km(&leg[0], &leg[1]))
        .sum()
}

// ============================================================================
// Local Search
// ============================================================================

/// 2-opt over the route interior: reverse a sub-segment, keep it when the
/// total distance strictly drops, repeat until a full pass finds nothing.
///
/// The base endpoints are never part of a reversal. If refinement
/// nevertheless leaves a different node at the head, the refined route is
/// discarded in favor of the unrefined one.
pub fn refine_route(route: Vec<RouteNode>, cost: &impl CostSource) -> Vec<RouteNode> {
    if route.len() <= 3 {
        return route;
    }

    let mut best = route.clone();
    let mut best_km = route_distance_km(&best, cost);
    let last_interior = route.len() - 2;
    let mut improved = true;

    while improved {
        improved = false;
        for i in 1..=last_interior {
            for j in (i + 2)..=last_interior {
                let mut candidate = best.clone();
                candidate[i..=j].reverse();
                let km = route_distance_km(&candidate, cost);
                if km < best_km {
                    best = candidate;
                    best_km = km;
                    improved = true;
                }
            }
        }
    }

    if best[0].id != route[0].id {
        warn!(
            expected = %route[0].id,
            found = %best[0].id,
            "refinement moved the start node, keeping unrefined route"
        );
        return route;
    }

    best
}
