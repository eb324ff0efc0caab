//! The linker's output record.

use fl_core::FacilityId;

/// A directed nearest-neighbour relationship: `to` is the facility closest to
/// `from` within the linked set.  Never a self-edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceEdge {
    pub from:        FacilityId,
    pub to:          FacilityId,
    /// Great-circle distance in kilometres, `>= 0`.
    pub distance_km: f64,
}

impl DistanceEdge {
    /// `true` if `other` is the reverse of `self` (a mutual nearest pair).
    pub fn is_mutual_with(&self, other: &DistanceEdge) -> bool {
        self.from == other.to && self.to == other.from
    }
}
