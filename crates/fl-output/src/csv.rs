//! CSV output backend.
//!
//! Creates `nearest_edges.csv` in the configured output directory, one row
//! per edge, regions in the order they were written.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use fl_link::EdgeAnnotation;

use crate::writer::EdgeWriter;
use crate::{EdgeRow, OutputError, OutputResult};

pub const CSV_FILE_NAME: &str = "nearest_edges.csv";

pub const CSV_HEADER: [&str; 8] = [
    "region", "from_id", "from_name", "to_id", "to_name", "distance_km", "label_lat", "label_lon",
];

/// Writes annotated edges to a single CSV file.
pub struct CsvEdgeWriter {
    edges:    Writer<File>,
    rows:     usize,
    finished: bool,
}

impl CsvEdgeWriter {
    /// Create (or truncate) the CSV file in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut edges = Writer::from_path(dir.join(CSV_FILE_NAME))?;
        edges.write_record(CSV_HEADER)?;
        Ok(Self { edges, rows: 0, finished: false })
    }

    /// Rows written so far (excluding the header).
    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl EdgeWriter for CsvEdgeWriter {
    fn write_region(&mut self, region: &str, edges: &[EdgeAnnotation]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished);
        }
        for a in edges {
            let row = EdgeRow::new(region, a);
            self.edges.write_record(&[
                row.region,
                row.from_id.to_string(),
                row.from_name,
                row.to_id.to_string(),
                row.to_name,
                format!("{:.3}", row.distance_km),
                format!("{:.6}", row.label_lat),
                format!("{:.6}", row.label_lon),
            ])?;
        }
        self.rows += edges.len();
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.edges.flush()?;
        debug!(rows = self.rows, file = CSV_FILE_NAME, "csv edges written");
        Ok(())
    }
}
