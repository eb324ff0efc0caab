//! CSV facility loader.
//!
//! # CSV format
//!
//! One row per facility, in the column layout of the national clinics export:
//!
//! ```csv
//! Province Name,District Name,Facility Name (DHIS2),FacilityID,Facility Type,Donor,Latitude,Longitude
//! Nangarhar,Jalalabad,Jalalabad-CHC (1201),1201,CHC,WB,34.4265,70.4515
//! Nangarhar,Behsud,Behsud-BHC (1202),1202,BHC,WB,34.4402,70.4071
//! ```
//!
//! | Column                  | Field            | Required |
//! |-------------------------|------------------|----------|
//! | `FacilityID`            | `id`             | yes      |
//! | `Facility Name (DHIS2)` | `name`           | yes      |
//! | `Province Name`         | `region`         | yes      |
//! | `Latitude`, `Longitude` | `position`       | yes      |
//! | `District Name`         | `district`       | no       |
//! | `Facility Type`         | `facility_type`  | no       |
//! | `Donor`                 | `donor`          | no       |
//!
//! Other columns are ignored.  Fields are trimmed.
//!
//! Coordinates are parsed but not range-checked: linking validates every
//! position before computing anything, so a bad row surfaces there with the
//! facility's id rather than being silently dropped here.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use fl_core::{Facility, FacilityId, GeoPoint};

use crate::DataError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FacilityRecord {
    #[serde(rename = "FacilityID")]
    facility_id:   u32,
    #[serde(rename = "Facility Name (DHIS2)")]
    name:          String,
    #[serde(rename = "Province Name")]
    province:      String,
    #[serde(rename = "District Name", default)]
    district:      String,
    #[serde(rename = "Facility Type", default)]
    facility_type: String,
    #[serde(rename = "Donor", default)]
    donor:         String,
    #[serde(rename = "Latitude")]
    latitude:      f64,
    #[serde(rename = "Longitude")]
    longitude:     f64,
}

impl From<FacilityRecord> for Facility {
    fn from(r: FacilityRecord) -> Self {
        Facility {
            id:            FacilityId(r.facility_id),
            name:          r.name,
            region:        r.province,
            district:      r.district,
            facility_type: r.facility_type,
            donor:         r.donor,
            position:      GeoPoint::new(r.latitude, r.longitude),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every facility from a CSV file, in file order.
pub fn load_facilities_csv(path: &Path) -> Result<Vec<Facility>, DataError> {
    let file = std::fs::File::open(path).map_err(DataError::Io)?;
    let facilities = load_facilities_reader(file)?;
    info!(path = %path.display(), rows = facilities.len(), "loaded facilities");
    Ok(facilities)
}

/// Like [`load_facilities_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for data fetched by some
/// other means.
///
/// # Errors
///
/// - [`DataError::Parse`] for malformed rows or missing required columns.
/// - [`DataError::DuplicateId`] if two rows share a `FacilityID`.
pub fn load_facilities_reader<R: Read>(reader: R) -> Result<Vec<Facility>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut seen: HashSet<FacilityId> = HashSet::new();
    let mut facilities = Vec::new();

    for (i, result) in csv_reader.deserialize::<FacilityRecord>().enumerate() {
        let record = result.map_err(|e| DataError::Parse(e.to_string()))?;
        let facility = Facility::from(record);

        if !seen.insert(facility.id) {
            return Err(DataError::DuplicateId { id: facility.id, row: i + 1 });
        }
        facilities.push(facility);
    }

    Ok(facilities)
}
