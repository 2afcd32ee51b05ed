use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::config::ExportFormat;
use crate::error::Result;

/// Slurp all rows of a delimited export into memory.
///
/// Rows are returned exactly as delimiter-parsed, with standard CSV quoting
/// honored and no interpretation of content. The reader is configured
/// `flexible` so rows corrupted by unescaped delimiters keep their extra
/// fields and reach the repair step intact, and `has_headers(false)` so the
/// header row comes through as an ordinary row.
pub fn load_rows(path: &Path, format: &ExportFormat) -> Result<Vec<Vec<String>>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!("loaded {} raw rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_keeps_header_as_ordinary_row() {
        let file = write_csv("ID,Customer\n100,acme\n");
        let rows = load_rows(file.path(), &ExportFormat::default()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["ID", "Customer"]);
        assert_eq!(rows[1], vec!["100", "acme"]);
    }

    #[test]
    fn test_load_preserves_extra_fields_from_unescaped_delimiters() {
        let file = write_csv("a,b\n1,2,3,4\n");
        let rows = load_rows(file.path(), &ExportFormat::default()).unwrap();
        assert_eq!(rows[1].len(), 4);
    }

    #[test]
    fn test_load_honors_quoting() {
        let file = write_csv("a,b\n\"one, field\",2\n");
        let rows = load_rows(file.path(), &ExportFormat::default()).unwrap();
        assert_eq!(rows[1], vec!["one, field", "2"]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_rows(
            Path::new("/nonexistent/los_export.csv"),
            &ExportFormat::default(),
        );
        assert!(result.is_err());
    }
}
