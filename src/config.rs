use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Shape of the List of Sessions export.
///
/// The export format is fixed by the upstream tool, not auto-detected: the
/// schema width and the position of the free-text recording-name column are
/// supplied here so the repair step knows how to reassemble split rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportFormat {
    /// Total number of columns in a well-formed row
    pub columns: usize,
    /// Zero-based index of the recording-name column
    pub name_column: usize,
    /// Field delimiter
    pub delimiter: char,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self {
            columns: 12,
            name_column: 4,
            delimiter: ',',
        }
    }
}

impl ExportFormat {
    /// Load an export format description from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let format: ExportFormat = toml::from_str(&content)?;
        format.validate()?;
        Ok(format)
    }

    /// Number of columns that follow the recording-name column.
    pub fn tail_width(&self) -> usize {
        self.columns - self.name_column - 1
    }

    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(ReportError::Config(
                "columns must be greater than zero".to_string(),
            ));
        }
        if self.name_column >= self.columns {
            return Err(ReportError::Config(format!(
                "name_column {} is outside a {}-column schema",
                self.name_column, self.columns
            )));
        }
        if !self.delimiter.is_ascii() {
            return Err(ReportError::Config(format!(
                "delimiter '{}' must be a single ASCII character",
                self.delimiter
            )));
        }
        Ok(())
    }
}
