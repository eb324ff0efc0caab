//! GeoJSON output backend.
//!
//! Buffers one `Feature` per edge and writes `nearest_edges.geojson` as a
//! single `FeatureCollection` on [`finish`](EdgeWriter::finish).  Each
//! feature is a two-point `LineString` in GeoJSON's `[lon, lat]` order, with
//! the distance label and its anchor in `properties`, so a web map can draw
//! the line and its label without further lookups.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tracing::debug;

use fl_core::GeoPoint;
use fl_link::EdgeAnnotation;

use crate::writer::EdgeWriter;
use crate::{OutputError, OutputResult};

pub const GEOJSON_FILE_NAME: &str = "nearest_edges.geojson";

pub struct GeoJsonEdgeWriter {
    path:     PathBuf,
    features: Vec<Value>,
    finished: bool,
}

impl GeoJsonEdgeWriter {
    /// Nothing touches the filesystem until `finish`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path:     dir.join(GEOJSON_FILE_NAME),
            features: Vec::new(),
            finished: false,
        }
    }
}

fn lon_lat(p: GeoPoint) -> [f64; 2] {
    [p.lon, p.lat]
}

fn feature(region: &str, a: &EdgeAnnotation) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": [lon_lat(a.from_pos), lon_lat(a.to_pos)],
        },
        "properties": {
            "region":      region,
            "from_id":     a.edge.from.get(),
            "from_name":   a.from_name,
            "to_id":       a.edge.to.get(),
            "to_name":     a.to_name,
            "distance_km": a.edge.distance_km,
            "label":       a.label(),
            "label_pos":   lon_lat(a.label_pos),
            "tooltip":     a.tooltip(),
        },
    })
}

impl EdgeWriter for GeoJsonEdgeWriter {
    fn write_region(&mut self, region: &str, edges: &[EdgeAnnotation]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        self.features.extend(edges.iter().map(|a| feature(region, a)));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let collection = json!({
            "type": "FeatureCollection",
            "features": std::mem::take(&mut self.features),
        });
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &collection)?;
        out.flush()?;
        debug!(path = %self.path.display(), "geojson edges written");
        Ok(())
    }
}
