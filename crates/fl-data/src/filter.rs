//! Region and name filtering of a facility selection.

use fl_core::Facility;

/// Region selection meaning "no region filter".
pub const ALL_REGIONS: &str = "All";

/// What the user has selected.  `None` fields do not filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FacilityFilter {
    /// Exact region name.
    pub region:     Option<String>,
    /// Case-insensitive substring of the facility name.
    pub name_query: Option<String>,
}

impl FacilityFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Apply a region dropdown value; [`ALL_REGIONS`] (any case) clears the
    /// region filter.
    pub fn region_selection(mut self, selection: &str) -> Self {
        let selection = selection.trim();
        self.region = if selection.is_empty() || selection.eq_ignore_ascii_case(ALL_REGIONS) {
            None
        } else {
            Some(selection.to_owned())
        };
        self
    }

    /// Set the name search.  Blank text clears it.
    pub fn name_contains(mut self, query: &str) -> Self {
        let query = query.trim();
        self.name_query = (!query.is_empty()).then(|| query.to_lowercase());
        self
    }

    pub fn is_region_selected(&self) -> bool {
        self.region.is_some()
    }

    pub fn matches(&self, facility: &Facility) -> bool {
        let region_ok = self.region.as_deref().is_none_or(|r| facility.region == r);
        let name_ok = self
            .name_query
            .as_deref()
            .is_none_or(|q| facility.name.to_lowercase().contains(&q.to_lowercase()));
        region_ok && name_ok
    }

    /// Matching facilities, in input order.
    pub fn apply(&self, facilities: &[Facility]) -> Vec<Facility> {
        facilities.iter().filter(|f| self.matches(f)).cloned().collect()
    }
}

/// Distinct regions in order of first appearance (the region dropdown, minus
/// the leading [`ALL_REGIONS`] entry).
pub fn regions(facilities: &[Facility]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for f in facilities {
        if !out.iter().any(|r| r == &f.region) {
            out.push(f.region.clone());
        }
    }
    out
}
