//! Geometric annotation of nearest-neighbour edges for rendering.
//!
//! A renderer needs more than `(from, to, km)`: both endpoints' positions to
//! draw the line, an anchor for the distance label, and display text.  This
//! module joins the edge list back to the facility records once, so renderers
//! never look anything up themselves.

use std::collections::HashMap;

use fl_core::{Facility, FacilityId, GeoPoint};

use crate::{DistanceEdge, LinkError, LinkResult};

/// One edge plus everything needed to draw it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeAnnotation {
    pub edge:      DistanceEdge,
    pub from_name: String,
    pub to_name:   String,
    pub from_pos:  GeoPoint,
    pub to_pos:    GeoPoint,
    /// Where the distance label sits: the lat/lon midpoint of the segment.
    pub label_pos: GeoPoint,
}

impl EdgeAnnotation {
    /// Distance label, e.g. `"1.11 km"`.
    pub fn label(&self) -> String {
        format!("{:.2} km", self.edge.distance_km)
    }

    /// Hover text for the line, e.g. `"Nearest: Kama-BHC (1.11 km)"`.
    pub fn tooltip(&self) -> String {
        format!("Nearest: {} ({:.2} km)", self.to_name, self.edge.distance_km)
    }

    /// The two endpoints of the connecting line, `from` first.
    pub fn line(&self) -> [GeoPoint; 2] {
        [self.from_pos, self.to_pos]
    }
}

/// Join `edges` to `facilities`, producing one annotation per edge in edge
/// order.
///
/// # Errors
///
/// [`LinkError::UnknownFacility`] if an edge endpoint is not in `facilities`.
pub fn annotate(facilities: &[Facility], edges: &[DistanceEdge]) -> LinkResult<Vec<EdgeAnnotation>> {
    let by_id: HashMap<FacilityId, &Facility> = facilities.iter().map(|f| (f.id, f)).collect();
    let lookup = |id: FacilityId| by_id.get(&id).copied().ok_or(LinkError::UnknownFacility(id));

    edges
        .iter()
        .map(|edge| {
            let from = lookup(edge.from)?;
            let to = lookup(edge.to)?;
            Ok(EdgeAnnotation {
                edge:      *edge,
                from_name: from.name.clone(),
                to_name:   to.name.clone(),
                from_pos:  from.position,
                to_pos:    to.position,
                label_pos: from.position.midpoint(to.position),
            })
        })
        .collect()
}
