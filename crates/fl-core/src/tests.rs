//! Unit tests for fl-core primitives.

#[cfg(test)]
mod ids {
    use crate::FacilityId;

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" 8629 ".parse::<FacilityId>().unwrap(), FacilityId(8629));
        assert!("abc".parse::<FacilityId>().is_err());
    }

    #[test]
    fn ordering() {
        assert!(FacilityId(0) < FacilityId(1));
    }

    #[test]
    fn display() {
        assert_eq!(FacilityId(7).to_string(), "7");
    }
}

#[cfg(test)]
mod geo {
    use crate::{CoreError, EARTH_RADIUS_KM, GeoPoint, distance_km};

    fn sample_points() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(34.0, 70.0),
            GeoPoint::new(34.01, 70.0),
            GeoPoint::new(35.0, 71.0),
            GeoPoint::new(-33.9, 151.2),
            GeoPoint::new(51.5, -0.12),
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(90.0, 0.0),
        ]
    }

    #[test]
    fn zero_distance() {
        for p in sample_points() {
            assert_eq!(distance_km(p, p).unwrap(), 0.0, "{p}");
        }
    }

    #[test]
    fn symmetric() {
        let pts = sample_points();
        for &a in &pts {
            for &b in &pts {
                let ab = distance_km(a, b).unwrap();
                let ba = distance_km(b, a).unwrap();
                assert!((ab - ba).abs() < 1e-9, "{a} {b}: {ab} vs {ba}");
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.195 km on a 6371 km sphere
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = distance_km(a, b).unwrap();
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn triangle_inequality_holds_locally() {
        let a = GeoPoint::new(34.0, 70.0);
        let b = GeoPoint::new(34.5, 70.4);
        let c = GeoPoint::new(35.0, 71.0);
        let ab = a.haversine_km(b);
        let bc = b.haversine_km(c);
        let ac = a.haversine_km(c);
        assert!(ac <= ab + bc + 1e-9);
    }

    #[test]
    fn latitude_out_of_range_rejected() {
        let err = distance_km(GeoPoint::new(91.0, 0.0), GeoPoint::new(0.0, 0.0)).unwrap_err();
        assert_eq!(err, CoreError::InvalidCoordinate { lat: 91.0, lon: 0.0 });
    }

    #[test]
    fn longitude_out_of_range_rejected() {
        let res = distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, -180.5));
        assert!(matches!(res, Err(CoreError::InvalidCoordinate { .. })));
    }

    #[test]
    fn nan_rejected() {
        assert!(GeoPoint::try_new(f64::NAN, 0.0).is_err());
        assert!(!GeoPoint::new(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(GeoPoint::try_new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::try_new(90.0, 180.0).is_ok());
    }

    #[test]
    fn antipodal_points_do_not_hit_domain_error() {
        let pairs = [
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0)),
            (GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0)),
            (GeoPoint::new(45.0, 10.0), GeoPoint::new(-45.0, -170.0)),
            (GeoPoint::new(33.123456789, 69.987654321), GeoPoint::new(-33.123456789, -110.012345679)),
        ];
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        for (a, b) in pairs {
            let d = distance_km(a, b).unwrap();
            assert!(d.is_finite() && d >= 0.0, "{a} {b}: {d}");
            assert!((d - half_circumference).abs() < 1.0, "{a} {b}: {d}");
        }
    }

    #[test]
    fn numerically_adjacent_points_are_finite() {
        let a = GeoPoint::new(34.4253, 70.4528);
        let b = GeoPoint::new(34.4253 + 1e-12, 70.4528 - 1e-12);
        let d = distance_km(a, b).unwrap();
        assert!(d.is_finite() && d >= 0.0 && d < 1e-6);
    }

    #[test]
    fn midpoint_is_mean() {
        let m = GeoPoint::new(34.0, 70.0).midpoint(GeoPoint::new(35.0, 71.0));
        assert_eq!(m, GeoPoint::new(34.5, 70.5));
    }

    #[test]
    fn unit_xyz_has_unit_length() {
        for p in sample_points() {
            let [x, y, z] = p.to_unit_xyz();
            assert!(((x * x + y * y + z * z) - 1.0).abs() < 1e-12);
        }
    }
}

#[cfg(test)]
mod facility {
    use crate::{Facility, FacilityId, GeoPoint};

    #[test]
    fn builder_fills_descriptive_fields() {
        let f = Facility::new(FacilityId(1), "Kama-BHC", "Nangarhar", GeoPoint::new(34.4, 70.5))
            .with_district("Kama")
            .with_type("BHC")
            .with_donor("WB");
        assert_eq!(f.district, "Kama");
        assert_eq!(f.facility_type, "BHC");
        assert_eq!(f.donor, "WB");
        assert_eq!(f.region, "Nangarhar");
    }
}
