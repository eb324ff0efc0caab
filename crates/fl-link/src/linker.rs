//! Linker trait and default brute-force implementation.
//!
//! # Pluggability
//!
//! Callers link facilities through the [`Linker`] trait, so a spatial index
//! can replace the all-pairs scan without touching call sites.  The default
//! [`BruteForceLinker`] is O(n²) per call, which at the expected scale (tens
//! to low hundreds of facilities per region) is tens of thousands of haversine
//! evaluations.  [`RTreeLinker`](crate::RTreeLinker) is the drop-in for larger
//! sets.
//!
//! # Contract (all implementations)
//!
//! - Every coordinate is validated before any distance is computed.  One bad
//!   record fails the whole call.
//! - Under [`RegionPolicy::Validate`] every facility must share the first
//!   facility's region.
//! - Fewer than two facilities → empty edge list.
//! - Otherwise exactly one edge per facility, in input order.
//! - Ties: among candidates within `tie_epsilon_km` of the minimum distance,
//!   the lowest input index wins.

use fl_core::Facility;
use tracing::debug;

use crate::rtree::RTreeLinker;
use crate::{DistanceEdge, LinkConfig, LinkError, LinkResult, RegionPolicy};

// ── Linker trait ──────────────────────────────────────────────────────────────

/// Pluggable nearest-neighbour engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one linker can serve several
/// region groups concurrently (see [`link_regions`](crate::link_regions)).
pub trait Linker: Send + Sync {
    /// Link every facility to its nearest other facility.
    fn link(&self, facilities: &[Facility]) -> LinkResult<Vec<DistanceEdge>>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

impl<L: Linker + ?Sized> Linker for Box<L> {
    fn link(&self, facilities: &[Facility]) -> LinkResult<Vec<DistanceEdge>> {
        (**self).link(facilities)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// ── LinkerKind ────────────────────────────────────────────────────────────────

/// Selects a [`Linker`] implementation at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LinkerKind {
    #[default]
    BruteForce,
    RTree,
}

impl LinkerKind {
    pub fn build(self, config: LinkConfig) -> Box<dyn Linker> {
        match self {
            LinkerKind::BruteForce => Box::new(BruteForceLinker::new(config)),
            LinkerKind::RTree => Box::new(RTreeLinker::new(config)),
        }
    }
}

impl std::fmt::Display for LinkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LinkerKind::BruteForce => "brute-force",
            LinkerKind::RTree => "rtree",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for LinkerKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute-force" | "brute" | "bruteforce" => Ok(LinkerKind::BruteForce),
            "rtree" | "r-tree" => Ok(LinkerKind::RTree),
            other => Err(format!("unknown linker {other:?}: expected \"brute-force\" or \"rtree\"")),
        }
    }
}

// ── BruteForceLinker ──────────────────────────────────────────────────────────

/// All-pairs scan: for each facility, the haversine distance to every other.
#[derive(Clone, Debug, Default)]
pub struct BruteForceLinker {
    pub config: LinkConfig,
}

impl BruteForceLinker {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }
}

impl Linker for BruteForceLinker {
    fn link(&self, facilities: &[Facility]) -> LinkResult<Vec<DistanceEdge>> {
        check_batch(facilities, &self.config)?;

        let n = facilities.len();
        if n < 2 {
            return Ok(Vec::new());
        }

        let mut edges = Vec::with_capacity(n);
        // Reused per facility: (input index, distance km).
        let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(n - 1);

        for (i, origin) in facilities.iter().enumerate() {
            candidates.clear();
            candidates.extend(
                facilities
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(j, other)| (j, origin.position.haversine_km(other.position))),
            );

            if let Some((j, distance_km)) = resolve_tie(&candidates, self.config.tie_epsilon_km) {
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
        "brute-force"
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Enforce the batch preconditions before any distance work starts.
pub(crate) fn check_batch(facilities: &[Facility], config: &LinkConfig) -> LinkResult<()> {
    for f in facilities {
        f.position
            .validate()
            .map_err(|source| LinkError::InvalidCoordinate { facility: f.id, source })?;
    }

    if config.region_policy == RegionPolicy::Validate {
        if let Some((first, rest)) = facilities.split_first() {
            if let Some(bad) = rest.iter().find(|f| f.region != first.region) {
                return Err(LinkError::RegionMismatch {
                    facility: bad.id,
                    expected: first.region.clone(),
                    found:    bad.region.clone(),
                });
            }
        }
    }

    Ok(())
}

/// Lowest-index candidate whose distance is within `eps` of the minimum.
///
/// Independent of candidate order, so every linker resolves ties the same way
/// regardless of how it enumerates neighbours.
pub(crate) fn resolve_tie(candidates: &[(usize, f64)], eps: f64) -> Option<(usize, f64)> {
    let min = candidates
        .iter()
        .map(|&(_, d)| d)
        .fold(f64::INFINITY, f64::min);

    candidates
        .iter()
        .copied()
        .filter(|&(_, d)| d <= min + eps)
        .min_by_key(|&(j, _)| j)
}
