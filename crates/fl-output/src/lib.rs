//! `fl-output` — hand-off of annotated nearest-neighbour edges to renderers.
//!
//! Two backends are provided:
//!
//! | Backend             | File created             | Consumer                    |
//! |---------------------|--------------------------|-----------------------------|
//! | [`CsvEdgeWriter`]   | `nearest_edges.csv`      | tables, spreadsheets        |
//! | [`GeoJsonEdgeWriter`] | `nearest_edges.geojson` | web maps (one `LineString` per edge) |
//!
//! Both implement [`EdgeWriter`] and are fed one region at a time.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fl_output::{CsvEdgeWriter, EdgeWriter};
//!
//! let mut w = CsvEdgeWriter::new(Path::new("./output"))?;
//! w.write_region("Nangarhar", &annotations)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod geojson;
pub mod row;
pub mod writer;


pub use csv::CsvEdgeWriter;
pub use error::{OutputError, OutputResult};
pub use geojson::GeoJsonEdgeWriter;
pub use row::EdgeRow;
pub use writer::EdgeWriter;
