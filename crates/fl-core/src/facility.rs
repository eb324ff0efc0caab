//! The facility record shared by every crate in the workspace.

use crate::{FacilityId, GeoPoint};

/// One geolocated health facility.
///
/// Immutable by convention: loaders build it once and every later stage
/// borrows it.  `region` is the partition key for nearest-neighbour linking
/// (a province in the source dataset).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub id:            FacilityId,
    pub name:          String,
    pub region:        String,
    pub district:      String,
    pub facility_type: String,
    pub donor:         String,
    pub position:      GeoPoint,
}

impl Facility {
    /// Minimal constructor for the fields the linker needs.  Descriptive
    /// fields default to empty strings.
    pub fn new(
        id:       FacilityId,
        name:     impl Into<String>,
        region:   impl Into<String>,
        position: GeoPoint,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            region: region.into(),
            district: String::new(),
            facility_type: String::new(),
            donor: String::new(),
            position,
        }
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    pub fn with_type(mut self, facility_type: impl Into<String>) -> Self {
        self.facility_type = facility_type.into();
        self
    }

    pub fn with_donor(mut self, donor: impl Into<String>) -> Self {
        self.donor = donor.into();
        self
    }
}
