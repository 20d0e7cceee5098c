//! Site/base catalog and the shared, swappable data snapshot.
//!
//! Feeds arrive as loose records; validation decides what is usable. A
//! load produces one immutable [`CatalogSnapshot`] holding the filtered
//! data plus its precomputed cost matrix, and the [`CatalogStore`] swaps
//! that snapshot wholesale so in-flight requests keep a consistent view.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::geo;
use crate::matrix::CostMatrix;
use crate::traits::{CostSource, Located};

/// A fishing ground with an estimated available quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub available_tons: f64,
}

/// A port a route departs from and returns to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Located for Site {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

impl Located for Base {
    fn id(&self) -> &str {
        &self.id
    }

    fn position(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// Raw site feed entry. Coordinates and quantity arrive untrusted and may
/// be missing or non-numeric upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteRecord {
    pub id: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub available_tons: Option<f64>,
}

impl SiteRecord {
    /// A usable site needs finite coordinates and a non-negative quantity.
    pub fn validate(self) -> Option<Site> {
        let lat = self.lat.filter(|v| v.is_finite())?;
        let lon = self.lon.filter(|v| v.is_finite())?;
        let available_tons = self.available_tons.filter(|v| v.is_finite() && *v >= 0.0)?;
        Some(Site { id: self.id, lat, lon, available_tons })
    }
}

/// Raw base feed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseRecord {
    pub id: String,
    pub name: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl BaseRecord {
    pub fn validate(self) -> Option<Base> {
        let lat = self.lat.filter(|v| v.is_finite())?;
        let lon = self.lon.filter(|v| v.is_finite())?;
        Some(Base { id: self.id, name: self.name, lat, lon })
    }
}

/// Filters a site feed down to usable entries, preserving feed order.
pub fn filter_sites(records: Vec<SiteRecord>) -> Vec<Site> {
    let total = records.len();
    let sites: Vec<Site> = records.into_iter().filter_map(SiteRecord::validate).collect();
    if sites.len() < total {
        warn!(dropped = total - sites.len(), kept = sites.len(), "skipped unusable site records");
    }
    sites
}

/// Filters a base feed down to usable entries, preserving feed order.
pub fn filter_bases(records: Vec<BaseRecord>) -> Vec<Base> {
    let total = records.len();
    let bases: Vec<Base> = records.into_iter().filter_map(BaseRecord::validate).collect();
    if bases.len() < total {
        warn!(dropped = total - bases.len(), kept = bases.len(), "skipped unusable base records");
    }
    bases
}

/// Tuning for snapshot construction.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Upper bound on sites entering the pairwise precompute. All bases
    /// are always included.
    pub sample_cap: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { sample_cap: 300 }
    }
}

/// Immutable view of one catalog generation: sites, bases and the cost
/// matrix computed over them. Swapped wholesale on reload, never mutated.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    version: u64,
    sites: Vec<Site>,
    bases: Vec<Base>,
    matrix: CostMatrix,
}

impl CatalogSnapshot {
    /// Builds a generation from validated feeds, including the matrix
    /// precompute over the first `sample_cap` sites plus all bases.
    pub fn build(sites: Vec<Site>, bases: Vec<Base>, config: &CatalogConfig, version: u64) -> Self {
        let mut sample: Vec<(String, (f64, f64))> = sites
            .iter()
            .take(config.sample_cap)
            .map(|site| (site.id.clone(), site.position()))
            .collect();
        sample.extend(bases.iter().map(|base| (base.id.clone(), base.position())));

        let matrix = CostMatrix::build(&sample);
        info!(version, sites = sites.len(), bases = bases.len(), "catalog snapshot built");

        Self { version, sites, bases, matrix }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn base(&self, id: &str) -> Option<&Base> {
        self.bases.iter().find(|base| base.id == id)
    }

    /// Leading slice of the site list offered to the route constructor.
    pub fn candidate_sites(&self, limit: usize) -> &[Site] {
        &self.sites[..self.sites.len().min(limit)]
    }

    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }
}

impl CostSource for CatalogSnapshot {
    /// Cached distance when the pair was sampled, direct haversine
    /// otherwise. A miss is recovered locally and never surfaced.
    fn cost_km(&self, from: &impl Located, to: &impl Located) -> f64 {
        self.matrix
            .lookup(from.id(), to.id())
            .unwrap_or_else(|| geo::haversine_km(from.position(), to.position()))
    }
}

/// Shared handle to the current snapshot.
///
/// Read-heavy, written once per data load. Readers clone the `Arc` once
/// and keep that generation for the whole request; `install` swaps the
/// snapshot wholesale, so a reader observes either the old or the new
/// generation in full, never a partial rebuild.
#[derive(Debug)]
pub struct CatalogStore {
    config: CatalogConfig,
    version: AtomicU64,
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    pub fn new(config: CatalogConfig) -> Self {
        let empty = CatalogSnapshot::build(Vec::new(), Vec::new(), &config, 0);
        Self {
            config,
            version: AtomicU64::new(0),
            current: RwLock::new(Arc::new(empty)),
        }
    }

    /// Current generation. Cheap; clones the `Arc`, not the data.
    pub fn current(&self) -> Arc<CatalogSnapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Builds and installs a new generation from validated feeds.
    pub fn install(&self, sites: Vec<Site>, bases: Vec<Base>) -> Arc<CatalogSnapshot> {
        let version = self.version.fetch_add(1, Ordering::Relaxed) + 1;
        let snapshot = Arc::new(CatalogSnapshot::build(sites, bases, &self.config, version));
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = snapshot.clone();
        snapshot
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}
