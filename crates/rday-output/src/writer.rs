//! The `ReportWriter` trait implemented by all backend writers.

use rday_engine::{VisitLog, VisitRecord};

use crate::OutputResult;

/// Trait implemented by visit-log export backends.
pub trait ReportWriter {
    /// Write one visit record.
    fn write_visit(&mut self, record: &VisitRecord) -> OutputResult<()>;

    /// Flush and close the underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Bulk-export a whole visit log after the run.
pub fn write_log<W: ReportWriter>(writer: &mut W, log: &VisitLog) -> OutputResult<()> {
    for record in log.records() {
        writer.write_visit(record)?;
    }
    writer.finish()
}
