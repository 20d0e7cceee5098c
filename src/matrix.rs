//! Precomputed pairwise cost matrix.
//!
//! Built once per catalog load over a bounded sample, so the O(N²) sweep
//! is amortized across route requests instead of paid per request. Pairs
//! outside the sample are expected lookup misses; callers fall back to
//! direct geodesic computation.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::info;

use crate::geo;

/// Symmetric distance table keyed by node identifier.
///
/// Both orientations of every pair are stored, so a lookup is a single
/// probe and `lookup(a, b) == lookup(b, a)` by construction.
#[derive(Debug, Clone, Default)]
pub struct CostMatrix {
    distances: HashMap<String, HashMap<String, f64>>,
}

impl CostMatrix {
    /// Builds the matrix over a sample of `(id, (lat, lon))` nodes.
    ///
    /// The upper-triangle sweep is data-parallel; insertion stays serial.
    pub fn build(sample: &[(String, (f64, f64))]) -> Self {
        let legs: Vec<(usize, usize, f64)> = sample
            .par_iter()
            .enumerate()
            .flat_map_iter(|(i, (_, from))| {
                sample[i + 1..]
                    .iter()
                    .enumerate()
                    .map(move |(offset, (_, to))| (i, i + 1 + offset, geo::haversine_km(*from, *to)))
            })
            .collect();

        let mut distances: HashMap<String, HashMap<String, f64>> = HashMap::new();
        for (i, j, km) in legs {
            let a = &sample[i].0;
            let b = &sample[j].0;
            distances.entry(a.clone()).or_default().insert(b.clone(), km);
            distances.entry(b.clone()).or_default().insert(a.clone(), km);
        }

        info!(nodes = sample.len(), pairs = distances.values().map(HashMap::len).sum::<usize>() / 2, "cost matrix built");
        Self { distances }
    }

    /// Cached distance between two ids, if the pair was in the sample.
    ///
    /// `None` is a cache miss, not an error; compute directly instead.
    pub fn lookup(&self, a: &str, b: &str) -> Option<f64> {
        self.distances.get(a)?.get(b).copied()
    }

    /// Number of ids the matrix has entries for.
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
