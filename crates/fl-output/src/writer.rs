//! The `EdgeWriter` trait implemented by all backend writers.

use fl_link::EdgeAnnotation;

use crate::OutputResult;

/// Trait implemented by the CSV and GeoJSON writers.
pub trait EdgeWriter {
    /// Write every annotated edge of one region.
    ///
    /// Returns [`OutputError::Finished`](crate::OutputError::Finished) after
    /// [`finish`](Self::finish) has been called.
    fn write_region(&mut self, region: &str, edges: &[EdgeAnnotation]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: later calls are no-ops.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: EdgeWriter + ?Sized> EdgeWriter for Box<W> {
    fn write_region(&mut self, region: &str, edges: &[EdgeAnnotation]) -> OutputResult<()> {
        (**self).write_region(region, edges)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
