//! Flat row type shared by output backends.

use fl_link::EdgeAnnotation;

/// One nearest-neighbour edge, flattened for tabular output.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRow {
    pub region:      String,
    pub from_id:     u32,
    pub from_name:   String,
    pub to_id:       u32,
    pub to_name:     String,
    pub distance_km: f64,
    /// Label anchor (segment midpoint).
    pub label_lat:   f64,
    pub label_lon:   f64,
}

impl EdgeRow {
    pub fn new(region: &str, a: &EdgeAnnotation) -> Self {
        Self {
            region:      region.to_owned(),
            from_id:     a.edge.from.get(),
            from_name:   a.from_name.clone(),
            to_id:       a.edge.to.get(),
            to_name:     a.to_name.clone(),
            distance_km: a.edge.distance_km,
            label_lat:   a.label_pos.lat,
            label_lon:   a.label_pos.lon,
        }
    }
}
