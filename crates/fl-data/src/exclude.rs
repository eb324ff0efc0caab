//! Known-bad records removed before anything is linked or displayed.
//!
//! Upstream exports occasionally carry a facility with wildly wrong
//! coordinates.  Rather than special-casing it in the linker, callers list it
//! here by name or id and drop it at load time.

use std::collections::HashSet;

use tracing::{info, warn};

use fl_core::{Facility, FacilityId};

/// A set of facility names and ids to drop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exclusions {
    names: HashSet<String>,
    ids:   HashSet<FacilityId>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude every facility whose name is exactly `name`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    pub fn id(mut self, id: FacilityId) -> Self {
        self.ids.insert(id);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.ids.is_empty()
    }

    pub fn matches(&self, facility: &Facility) -> bool {
        self.ids.contains(&facility.id) || self.names.contains(&facility.name)
    }

    /// Drop every matching facility, preserving the order of the rest.
    ///
    /// Each drop is logged; entries that matched nothing are logged as a
    /// warning since they usually mean the exclusion list is stale.
    pub fn apply(&self, facilities: Vec<Facility>) -> Vec<Facility> {
        if self.is_empty() {
            return facilities;
        }

        let mut hit_names: HashSet<&str> = HashSet::new();
        let mut hit_ids: HashSet<FacilityId> = HashSet::new();
        let mut kept = Vec::with_capacity(facilities.len());

        for f in facilities {
            if self.matches(&f) {
                info!(id = %f.id, name = %f.name, region = %f.region, "excluding facility");
                if let Some(n) = self.names.get(&f.name) {
                    hit_names.insert(n.as_str());
                }
                hit_ids.insert(f.id);
            } else {
                kept.push(f);
            }
        }

        for name in self.names.iter().filter(|n| !hit_names.contains(n.as_str())) {
            warn!(name = %name, "exclusion matched no facility");
        }
        for id in self.ids.iter().filter(|id| !hit_ids.contains(id)) {
            warn!(id = %id, "exclusion matched no facility");
        }

        kept
    }
}
