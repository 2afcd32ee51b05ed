use crate::domain::{Record, Value};
use crate::error::{ReportError, Result};

/// Normalize header strings into field names: lower-cased, spaces replaced
/// with underscores. The resulting names are the record keys for the run.
pub fn normalize_headers(header_row: &[String]) -> Vec<String> {
    header_row
        .iter()
        .map(|h| h.to_lowercase().replace(' ', "_"))
        .collect()
}

/// Zip one typed row with the header names to build a record.
///
/// `row_number` is 1-based and only used for diagnostics. A width mismatch
/// here means the repair step let a bad row through, which is a schema
/// error rather than something to patch up.
pub fn build_record(headers: &[String], row: Vec<Value>, row_number: usize) -> Result<Record> {
    if row.len() != headers.len() {
        return Err(ReportError::Schema(format!(
            "row {}: {} fields do not fit a {}-column header",
            row_number,
            row.len(),
            headers.len()
        )));
    }

    let mut record = Record::new();
    for (name, value) in headers.iter().zip(row) {
        record.insert(name.clone(), value);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_lowercased_and_underscored() {
        let raw: Vec<String> = ["ID", "Customer", "Is Finished?", "Rec Name"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            normalize_headers(&raw),
            vec!["id", "customer", "is_finished?", "rec_name"]
        );
    }

    #[test]
    fn test_build_record_zips_positionally() {
        let headers = vec!["id".to_string(), "customer".to_string()];
        let record = build_record(
            &headers,
            vec![Value::Int(7), Value::Str("acme".to_string())],
            2,
        )
        .unwrap();
        assert_eq!(record.get("id"), Some(&Value::Int(7)));
        assert_eq!(record.get("customer"), Some(&Value::Str("acme".to_string())));
    }

    #[test]
    fn test_width_mismatch_is_schema_error() {
        let headers = vec!["id".to_string(), "customer".to_string()];
        let err = build_record(&headers, vec![Value::Int(7)], 5).unwrap_err();
        match err {
            ReportError::Schema(msg) => assert!(msg.contains("row 5")),
            other => panic!("expected Schema, got {:?}", other),
        }
    }
}
