//! R-tree backed linker.
//!
//! # Spatial index
//!
//! Facilities are indexed by their position on the unit sphere
//! ([`GeoPoint::to_unit_xyz`](fl_core::GeoPoint::to_unit_xyz)).  Chord length
//! is monotonic in great-circle distance, so `rstar`'s nearest-neighbour
//! iterator visits candidates in haversine order without any lat/lon
//! distortion near the poles or the antimeridian.
//!
//! For each facility the iterator is consumed only until the haversine
//! distance leaves the tie window around the best candidate, so a query costs
//! O(log n) in the common case instead of the brute-force O(n).

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use tracing::debug;

use fl_core::Facility;

use crate::linker::{check_batch, resolve_tie};
use crate::{DistanceEdge, LinkConfig, LinkResult, Linker};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a unit-sphere `[x, y, z]` point with the
/// facility's input index.
#[derive(Clone)]
struct SiteEntry {
    point: [f64; 3],
    index: usize,
}

impl RTreeObject for SiteEntry {
    type Envelope = AABB<[f64; 3]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SiteEntry {
    /// Squared chord length on the unit sphere.
    fn distance_2(&self, point: &[f64; 3]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        let dz = self.point[2] - point[2];
        dx * dx + dy * dy + dz * dz
    }
}

// ── RTreeLinker ───────────────────────────────────────────────────────────────

/// Nearest-neighbour linker over a bulk-loaded R-tree.
///
/// Produces the same edges as [`BruteForceLinker`](crate::BruteForceLinker)
/// for the same input and configuration; the index is rebuilt on every call
/// because linkers hold no state between invocations.
#[derive(Clone, Debug, Default)]
pub struct RTreeLinker {
    pub config: LinkConfig,
}

impl RTreeLinker {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }
}

impl Linker for RTreeLinker {
    fn link(&self, facilities: &[Facility]) -> LinkResult<Vec<DistanceEdge>> {
        check_batch(facilities, &self.config)?;

        let n = facilities.len();
        if n < 2 {
            return Ok(Vec::new());
        }

        // Bulk-load for O(n log n) construction (faster than n inserts).
        let entries: Vec<SiteEntry> = facilities
            .iter()
            .enumerate()
            .map(|(index, f)| SiteEntry { point: f.position.to_unit_xyz(), index })
            .collect();
        let tree = RTree::bulk_load(entries);

        let eps = self.config.tie_epsilon_km;
        let mut edges = Vec::with_capacity(n);
        let mut candidates: Vec<(usize, f64)> = Vec::new();

        for (i, origin) in facilities.iter().enumerate() {
            candidates.clear();
            let mut best = f64::INFINITY;

            for entry in tree.nearest_neighbor_iter(&origin.position.to_unit_xyz()) {
                if entry.index == i {
                    continue;
                }
                let d = origin.position.haversine_km(facilities[entry.index].position);
                if d > best + eps {
                    break;
                }
                best = best.min(d);
                candidates.push((entry.index, d));
            }

            if let Some((j, distance_km)) = resolve_tie(&candidates, eps) {
                edges.push(DistanceEdge {
                    from: origin.id,
                    to: facilities[j].id,
                    distance_km,
                });
            }
        }

        debug!(linker = self.name(), facilities = n, edges = edges.len(), "linked nearest neighbours");
        Ok(edges)
    }

    fn name(&self) -> &'static str {
        "rtree"
    }
}
