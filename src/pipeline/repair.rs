use tracing::debug;

use crate::config::ExportFormat;
use crate::error::{ReportError, Result};

/// Repairs rows split by unescaped delimiters in the recording-name field.
///
/// The upstream export does not quote the free-text recording name, so a name
/// containing the delimiter arrives split across several raw fields and the
/// row ends up wider than the schema. All overflow is known to sit inside
/// that one contiguous field, so the row is rebuilt by joining the surplus
/// fields back into the name column.
pub struct RowRepairer {
    format: ExportFormat,
}

impl RowRepairer {
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    /// Repair a single row. `row_number` is 1-based and only used for
    /// diagnostics.
    ///
    /// Rows already at schema width pass through unchanged. Rows that are
    /// too short cannot be reconstructed and are rejected.
    pub fn repair(&self, row: Vec<String>, row_number: usize) -> Result<Vec<String>> {
        let columns = self.format.columns;
        let found = row.len();

        if found == columns {
            return Ok(row);
        }
        if found < columns {
            return Err(ReportError::MalformedRow {
                row: row_number,
                expected: columns,
                found,
            });
        }

        let name_start = self.format.name_column;
        let tail_start = found - self.format.tail_width();

        let mut repaired = Vec::with_capacity(columns);
        repaired.extend_from_slice(&row[..name_start]);
        repaired.push(row[name_start..tail_start].concat());
        repaired.extend_from_slice(&row[tail_start..]);

        debug!(
            "row {}: rejoined {} fields into the name column",
            row_number,
            tail_start - name_start
        );
        debug_assert_eq!(repaired.len(), columns);
        Ok(repaired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repairer() -> RowRepairer {
        RowRepairer::new(ExportFormat::default())
    }

    fn row_of(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_well_formed_row_is_identity() {
        let row = row_of(&[
            "100", "Acme", "2024-01-01", "ready", "Recording", "5:00:00", "yes", "Expires 01/02",
            "", "1", "2", "3",
        ]);
        let repaired = repairer().repair(row.clone(), 2).unwrap();
        assert_eq!(repaired, row);
    }

    #[test]
    fn test_embedded_delimiter_is_rejoined() {
        // "J,ohn Doe" in the name column splits into two raw fields
        let row = row_of(&[
            "100", "Acme", "2024-01-01", "ready", "J", "ohn Doe", "5:00:00", "yes",
            "Expires 01/02", "", "1", "2", "3",
        ]);
        let repaired = repairer().repair(row, 2).unwrap();
        assert_eq!(repaired.len(), 12);
        assert_eq!(repaired[4], "John Doe");
        // Everything around the name column survives verbatim, in order
        assert_eq!(&repaired[..4], &row_of(&["100", "Acme", "2024-01-01", "ready"])[..]);
        assert_eq!(repaired[5], "5:00:00");
        assert_eq!(repaired[11], "3");
    }

    #[test]
    fn test_multiple_embedded_delimiters() {
        let row = row_of(&[
            "100", "Acme", "2024-01-01", "ready", "a", "b", "c", "5:00:00", "yes",
            "Expires 01/02", "", "1", "2", "3",
        ]);
        let repaired = repairer().repair(row, 3).unwrap();
        assert_eq!(repaired.len(), 12);
        assert_eq!(repaired[4], "abc");
    }

    #[test]
    fn test_short_row_is_rejected_with_row_number() {
        let row = row_of(&["100", "Acme"]);
        let err = repairer().repair(row, 7).unwrap_err();
        match err {
            ReportError::MalformedRow { row, expected, found } => {
                assert_eq!(row, 7);
                assert_eq!(expected, 12);
                assert_eq!(found, 2);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }
}
