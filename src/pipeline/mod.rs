pub mod classify;
pub mod coerce;
pub mod loader;
pub mod records;
pub mod repair;

use std::path::Path;

use tracing::{info, warn};

use crate::config::ExportFormat;
use crate::domain::Session;
use crate::error::{ReportError, Result};
use repair::RowRepairer;

/// Summary of one pipeline run.
#[derive(Debug)]
pub struct PipelineRun {
    /// Classified sessions, one per data row
    pub sessions: Vec<Session>,
    /// Data rows seen in the export (header excluded)
    pub total_rows: usize,
    /// Rows that needed the delimiter repair
    pub repaired_rows: usize,
}

/// The whole normalization pipeline: load, repair, coerce, build, classify.
///
/// Single-threaded and batch-oriented; one export file per run, everything
/// threaded through return values.
pub struct Pipeline {
    format: ExportFormat,
}

impl Pipeline {
    pub fn new(format: ExportFormat) -> Result<Self> {
        format.validate()?;
        Ok(Self { format })
    }

    /// Run the pipeline over an export file.
    pub fn run(&self, path: &Path) -> Result<PipelineRun> {
        let rows = loader::load_rows(path, &self.format)?;
        let run = self.run_rows(rows)?;
        info!(
            "processed {} rows from {} ({} repaired)",
            run.total_rows,
            path.display(),
            run.repaired_rows
        );
        Ok(run)
    }

    /// Run the pipeline over already-loaded raw rows. Row 0 is the header.
    pub fn run_rows(&self, rows: Vec<Vec<String>>) -> Result<PipelineRun> {
        let mut rows = rows.into_iter();
        let header_row = match rows.next() {
            Some(row) => row,
            None => {
                warn!("export is empty, producing an empty report");
                return Ok(PipelineRun {
                    sessions: Vec::new(),
                    total_rows: 0,
                    repaired_rows: 0,
                });
            }
        };

        if header_row.len() != self.format.columns {
            return Err(ReportError::Schema(format!(
                "header has {} columns, expected {}",
                header_row.len(),
                self.format.columns
            )));
        }
        let headers = records::normalize_headers(&header_row);

        let repairer = RowRepairer::new(self.format.clone());
        let mut sessions = Vec::new();
        let mut total_rows = 0;
        let mut repaired_rows = 0;

        // Row numbers are 1-based and count the header, so data starts at 2
        for (row_number, row) in rows.enumerate().map(|(i, r)| (i + 2, r)) {
            total_rows += 1;
            let needed_repair = row.len() != self.format.columns;
            let row = repairer.repair(row, row_number)?;
            if needed_repair {
                repaired_rows += 1;
            }

            let values = coerce::coerce_row(&row);
            let record = records::build_record(&headers, values, row_number)?;
            sessions.push(classify::classify(record)?);
        }

        Ok(PipelineRun {
            sessions,
            total_rows,
            repaired_rows,
        })
    }
}
