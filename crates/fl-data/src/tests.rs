//! Unit tests for fl-data.

#[cfg(test)]
mod fixtures {
    /// Five facilities across two provinces, plus the known-bad clinic.
    pub const CLINICS_CSV: &str = "\
Province Name,District Name,Facility Name (DHIS2),FacilityID,Facility Type,Donor,Latitude,Longitude\n\
Nangarhar,Jalalabad,Jalalabad-CHC (1201),1201,CHC,WB,34.4265,70.4515\n\
Nangarhar,Behsud,Behsud-BHC (1202),1202,BHC,WB,34.4402,70.4071\n\
Kabul,Kabul,Kabul-CHC (1001),1001,CHC,EU,34.5553,69.2075\n\
Nangarhar,Kama,Kama-BHC (1203),1203,BHC,WB,34.4700,70.5600\n\
Kabul,Paghman,Paghman-SHC (1002),1002,SHC,EU,34.5880,68.9530\n\
Nangarhar,Achin,Jokan-CHC (8629),8629,CHC,WB,12.0000,70.0000\n\
";

    pub fn load() -> Vec<fl_core::Facility> {
        crate::load_facilities_reader(std::io::Cursor::new(CLINICS_CSV)).unwrap()
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use fl_core::{FacilityId, GeoPoint};

    use super::fixtures::{CLINICS_CSV, load};
    use crate::{DataError, load_facilities_csv, load_facilities_reader};

    #[test]
    fn loads_all_rows_in_order() {
        let facilities = load();
        assert_eq!(facilities.len(), 6);
        let ids: Vec<u32> = facilities.iter().map(|f| f.id.0).collect();
        assert_eq!(ids, [1201, 1202, 1001, 1203, 1002, 8629]);
    }

    #[test]
    fn maps_columns_to_fields() {
        let f = &load()[0];
        assert_eq!(f.id, FacilityId(1201));
        assert_eq!(f.name, "Jalalabad-CHC (1201)");
        assert_eq!(f.region, "Nangarhar");
        assert_eq!(f.district, "Jalalabad");
        assert_eq!(f.facility_type, "CHC");
        assert_eq!(f.donor, "WB");
        assert_eq!(f.position, GeoPoint::new(34.4265, 70.4515));
    }

    #[test]
    fn optional_columns_may_be_absent_and_extras_ignored() {
        let csv = "\
FacilityID,Facility Name (DHIS2),Province Name,Latitude,Longitude,Notes\n\
7, Clinic A ,Herat,34.35,62.20,ignored\n\
";
        let facilities = load_facilities_reader(Cursor::new(csv)).unwrap();
        assert_eq!(facilities.len(), 1);
        assert_eq!(facilities[0].name, "Clinic A");
        assert!(facilities[0].district.is_empty());
        assert!(facilities[0].donor.is_empty());
    }

    #[test]
    fn out_of_range_coordinates_are_loaded_not_dropped() {
        let csv = "\
FacilityID,Facility Name (DHIS2),Province Name,Latitude,Longitude\n\
1,Bad,Herat,134.35,62.20\n\
";
        let facilities = load_facilities_reader(Cursor::new(csv)).unwrap();
        assert!(!facilities[0].position.is_valid());
    }

    #[test]
    fn duplicate_id_rejected() {
        let csv = "\
FacilityID,Facility Name (DHIS2),Province Name,Latitude,Longitude\n\
1,A,Herat,34.0,62.0\n\
2,B,Herat,34.1,62.1\n\
1,C,Herat,34.2,62.2\n\
";
        match load_facilities_reader(Cursor::new(csv)) {
            Err(DataError::DuplicateId { id, row }) => {
                assert_eq!(id, FacilityId(1));
                assert_eq!(row, 3);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn non_numeric_latitude_is_parse_error() {
        let csv = "\
FacilityID,Facility Name (DHIS2),Province Name,Latitude,Longitude\n\
1,A,Herat,north,62.0\n\
";
        assert!(matches!(load_facilities_reader(Cursor::new(csv)), Err(DataError::Parse(_))));
    }

    #[test]
    fn missing_required_column_is_parse_error() {
        let csv = "FacilityID,Province Name,Latitude,Longitude\n1,Herat,34.0,62.0\n";
        assert!(matches!(load_facilities_reader(Cursor::new(csv)), Err(DataError::Parse(_))));
    }

    #[test]
    fn header_only_is_empty() {
        let csv = CLINICS_CSV.lines().next().unwrap();
        assert!(load_facilities_reader(Cursor::new(csv)).unwrap().is_empty());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("Clinics.csv");
        std::fs::write(&path, CLINICS_CSV).unwrap();
        assert_eq!(load_facilities_csv(&path).unwrap().len(), 6);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let res = load_facilities_csv(&dir.path().join("nope.csv"));
        assert!(matches!(res, Err(DataError::Io(_))));
    }
}

// ── Exclusions ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod exclude {
    use fl_core::FacilityId;

    use super::fixtures::load;
    use crate::Exclusions;

    #[test]
    fn drops_by_name() {
        let kept = Exclusions::new().name("Jokan-CHC (8629)").apply(load());
        assert_eq!(kept.len(), 5);
        assert!(kept.iter().all(|f| f.id != FacilityId(8629)));
    }

    #[test]
    fn drops_by_id_and_preserves_order() {
        let kept = Exclusions::new().id(FacilityId(1202)).id(FacilityId(1001)).apply(load());
        let ids: Vec<u32> = kept.iter().map(|f| f.id.0).collect();
        assert_eq!(ids, [1201, 1203, 1002, 8629]);
    }

    #[test]
    fn empty_exclusions_keep_everything() {
        let ex = Exclusions::new();
        assert!(ex.is_empty());
        assert_eq!(ex.apply(load()).len(), 6);
    }

    #[test]
    fn unmatched_exclusion_is_harmless() {
        let kept = Exclusions::new().name("Nowhere-BHC").apply(load());
        assert_eq!(kept.len(), 6);
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter {
    use super::fixtures::load;
    use crate::{FacilityFilter, regions};

    #[test]
    fn all_selection_does_not_filter() {
        let f = FacilityFilter::all().region_selection("All");
        assert!(!f.is_region_selected());
        assert_eq!(f.apply(&load()).len(), 6);
    }

    #[test]
    fn region_filter() {
        let f = FacilityFilter::all().region_selection("Kabul");
        let ids: Vec<u32> = f.apply(&load()).iter().map(|f| f.id.0).collect();
        assert_eq!(ids, [1001, 1002]);
    }

    #[test]
    fn name_search_is_case_insensitive_substring() {
        let f = FacilityFilter::all().name_contains("chc");
        let ids: Vec<u32> = f.apply(&load()).iter().map(|f| f.id.0).collect();
        assert_eq!(ids, [1201, 1001, 8629]);
    }

    #[test]
    fn region_and_name_combine() {
        let f = FacilityFilter::all().region_selection("Nangarhar").name_contains("BHC");
        let ids: Vec<u32> = f.apply(&load()).iter().map(|f| f.id.0).collect();
        assert_eq!(ids, [1202, 1203]);
    }

    #[test]
    fn blank_search_is_ignored() {
        let f = FacilityFilter::all().name_contains("   ");
        assert!(f.name_query.is_none());
        assert_eq!(f.apply(&load()).len(), 6);
    }

    #[test]
    fn unknown_region_matches_nothing() {
        let f = FacilityFilter::all().region_selection("Atlantis");
        assert!(f.apply(&load()).is_empty());
    }

    #[test]
    fn regions_in_first_appearance_order() {
        assert_eq!(regions(&load()), ["Nangarhar", "Kabul"]);
    }
}

// ── Map view ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod view {
    use fl_core::{Facility, FacilityId, GeoPoint};

    use crate::MapView;
    use crate::view::{COUNTRY_ZOOM, DEFAULT_CENTER, REGION_ZOOM};

    #[test]
    fn empty_selection_uses_default() {
        let v = MapView::fit(&[], true);
        assert_eq!(v.center, DEFAULT_CENTER);
        assert_eq!(v.zoom, COUNTRY_ZOOM);
    }

    #[test]
    fn centre_is_mean_position() {
        let fs = [
            Facility::new(FacilityId(1), "a", "r", GeoPoint::new(34.0, 70.0)),
            Facility::new(FacilityId(2), "b", "r", GeoPoint::new(35.0, 71.0)),
        ];
        let v = MapView::fit(&fs, true);
        assert_eq!(v.center, GeoPoint::new(34.5, 70.5));
        assert_eq!(v.zoom, REGION_ZOOM);
        assert_eq!(MapView::fit(&fs, false).zoom, COUNTRY_ZOOM);
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary {
    use super::fixtures::load;
    use crate::{FacilityFilter, TypeCount, select_detail, type_distribution};

    #[test]
    fn type_counts_sorted_by_type() {
        let counts = type_distribution(&load());
        assert_eq!(
            counts,
            [
                TypeCount { facility_type: "BHC".into(), count: 2 },
                TypeCount { facility_type: "CHC".into(), count: 3 },
                TypeCount { facility_type: "SHC".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn type_counts_empty() {
        assert!(type_distribution(&[]).is_empty());
    }

    #[test]
    fn clicked_marker_wins() {
        let all = load();
        let filtered = FacilityFilter::all().region_selection("Kabul").apply(&all);
        let sel = select_detail(&all, &filtered, Some("Kama-BHC (1203)"), Some("Kabul-CHC (1001)"));
        assert_eq!(sel.len(), 1);
        assert_eq!(sel[0].id.0, 1203);
    }

    #[test]
    fn search_text_used_when_nothing_clicked() {
        let all = load();
        let sel = select_detail(&all, &all, None, Some("Kabul-CHC (1001)"));
        assert_eq!(sel[0].id.0, 1001);

        // A partial name is not an exact match.
        assert!(select_detail(&all, &all, Some(""), Some("Kabul")).is_empty());
    }

    #[test]
    fn falls_back_to_first_filtered() {
        let all = load();
        let filtered = FacilityFilter::all().region_selection("Kabul").apply(&all);
        let sel = select_detail(&all, &filtered, None, None);
        assert_eq!(sel[0].id.0, 1001);
    }

    #[test]
    fn nothing_to_select() {
        let all = load();
        assert!(select_detail(&all, &[], None, None).is_empty());
    }
}
