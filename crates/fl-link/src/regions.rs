//! Region partitioning and per-region linking.
//!
//! Facilities are never linked across regions.  [`partition_by_region`]
//! splits a filtered selection into one group per region, and
//! [`link_regions`] runs a [`Linker`] over each group independently.
//!
//! With the `parallel` feature the groups are linked on Rayon's thread pool.
//! Each call reads only its own group, so no synchronisation is needed and
//! the output order (region order) is the same either way.

use fl_core::Facility;
use tracing::debug;

use crate::{DistanceEdge, LinkError, LinkResult, Linker};

/// Facilities belonging to one region, in their original relative order.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionGroup {
    pub region:     String,
    pub facilities: Vec<Facility>,
}

/// Linker output for one [`RegionGroup`].
#[derive(Clone, Debug, PartialEq)]
pub struct RegionLinks {
    pub region: String,
    pub edges:  Vec<DistanceEdge>,
}

/// Group facilities by region.  Groups appear in order of first appearance;
/// facilities keep their relative order within each group.
pub fn partition_by_region(facilities: &[Facility]) -> Vec<RegionGroup> {
    let mut groups: Vec<RegionGroup> = Vec::new();

    for f in facilities {
        match groups.iter_mut().find(|g| g.region == f.region) {
            Some(g) => g.facilities.push(f.clone()),
            None => groups.push(RegionGroup {
                region:     f.region.clone(),
                facilities: vec![f.clone()],
            }),
        }
    }

    groups
}

/// Link every group independently.
///
/// # Errors
///
/// A failure in any group fails the whole call, wrapped in
/// [`LinkError::Region`] so the message names the region.
pub fn link_regions<L>(linker: &L, groups: &[RegionGroup]) -> LinkResult<Vec<RegionLinks>>
where
    L: Linker + ?Sized,
{
    let link_one = |g: &RegionGroup| -> LinkResult<RegionLinks> {
        let edges = linker.link(&g.facilities).map_err(|e| LinkError::Region {
            region: g.region.clone(),
            source: Box::new(e),
        })?;
        Ok(RegionLinks { region: g.region.clone(), edges })
    };

    #[cfg(not(feature = "parallel"))]
    let links: LinkResult<Vec<RegionLinks>> = groups.iter().map(link_one).collect();

    #[cfg(feature = "parallel")]
    let links: LinkResult<Vec<RegionLinks>> = {
        use rayon::prelude::*;
        groups.par_iter().map(link_one).collect()
    };

    let links = links?;
    debug!(
        linker = linker.name(),
        regions = links.len(),
        edges = links.iter().map(|l| l.edges.len()).sum::<usize>(),
        "linked all regions"
    );
    Ok(links)
}
