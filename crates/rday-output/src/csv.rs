//! CSV export backend.
//!
//! Creates `station_visits.csv` in the configured output directory, one row
//! per visit record in admission order.  Column layout matches the source
//! pipeline's tabular trace (`entity, stn_idx, q_length, svc_count,
//! svc_capacity, stn_nm, time, next_stn, arc_ct, svc_count_after`); terminal
//! routes are written as `-1`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use rday_engine::VisitRecord;

use crate::writer::ReportWriter;
use crate::OutputResult;

/// Writes the visit log to `station_visits.csv`.
pub struct CsvReportWriter {
    visits: Writer<File>,
    finished: bool,
}

impl CsvReportWriter {
    /// Open (or create) the CSV file in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut visits = Writer::from_path(dir.join("station_visits.csv"))?;
        visits.write_record([
            "entity",
            "stn_idx",
            "q_length",
            "svc_count",
            "svc_capacity",
            "stn_nm",
            "time",
            "next_stn",
            "arc_ct",
            "svc_count_after",
        ])?;
        Ok(Self {
            visits,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_visit(&mut self, record: &VisitRecord) -> OutputResult<()> {
        self.visits.write_record(&[
            record.entity.0.to_string(),
            record.station.0.to_string(),
            record.queue_len.to_string(),
            record.busy.to_string(),
            record.capacity.to_string(),
            record.station_name.clone(),
            record.time.hours().to_string(),
            record.next.code().to_string(),
            record.arc_count.to_string(),
            record.busy_after.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.visits.flush()?;
        Ok(())
    }
}
