//! Map centre and zoom for a facility selection.

use fl_core::{Facility, GeoPoint};

/// Fallback centre when nothing is selected (central Afghanistan).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(34.5, 69.2);

/// Zoom used when a single region is selected.
pub const REGION_ZOOM: f64 = 9.0;

/// Zoom used for the whole country, and for an empty selection.
pub const COUNTRY_ZOOM: f64 = 6.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom:   f64,
}

impl MapView {
    /// Centre on the mean position of `facilities`; zoom in when the
    /// selection is restricted to one region.
    pub fn fit(facilities: &[Facility], region_selected: bool) -> Self {
        if facilities.is_empty() {
            return Self { center: DEFAULT_CENTER, zoom: COUNTRY_ZOOM };
        }

        let n = facilities.len() as f64;
        let (lat_sum, lon_sum) = facilities
            .iter()
            .fold((0.0, 0.0), |(lat, lon), f| (lat + f.position.lat, lon + f.position.lon));

        Self {
            center: GeoPoint::new(lat_sum / n, lon_sum / n),
            zoom:   if region_selected { REGION_ZOOM } else { COUNTRY_ZOOM },
        }
    }
}
