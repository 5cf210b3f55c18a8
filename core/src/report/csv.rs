use crate::error::{DicomScanError, Result};
use crate::record::MetadataRecord;
use std::path::Path;

/// Default output filename for the CSV export
pub const DEFAULT_CSV_NAME: &str = "dicom_metadata.csv";

/// Exports the record store to a UTF-8, comma-delimited CSV file
///
/// The header row carries the field names in first-seen order; all records
/// within one extraction run share the same field set. One data row is
/// written per record, with no index column.
///
/// # Errors
///
/// Returns [`DicomScanError::EmptyStore`] for an empty record store (no
/// file is created), or a CSV/I/O error if writing fails.
pub fn export_csv(records: &[MetadataRecord], path: &Path) -> Result<()> {
    let first = records.first().ok_or(DicomScanError::EmptyStore)?;

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(first.field_names())?;
    for record in records {
        writer.write_record(record.fields().iter().map(|(_, value)| value.as_str()))?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DetailedMetadata, BASIC_FIELDS, DETAILED_FIELDS};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn make_record(name: &str, patient_name: &str, detailed: bool) -> MetadataRecord {
        MetadataRecord {
            file_path: PathBuf::from(format!("/data/{name}")),
            file_name: name.to_string(),
            directory: "/data".to_string(),
            patient_id: Some("P1".to_string()),
            patient_name: Some(patient_name.to_string()),
            modality: Some("CT".to_string()),
            study_date: Some("2023-01-01".to_string()),
            birth_date: None,
            series_number: Some(2),
            instance_number: None,
            rows: Some(512),
            columns: Some(512),
            patient_age: Some("045Y".to_string()),
            detailed: detailed.then(DetailedMetadata::default),
        }
    }

    #[test]
    fn test_export_refuses_empty_store() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let result = export_csv(&[], &path);

        assert!(matches!(result, Err(DicomScanError::EmptyStore)));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            make_record("a.dcm", "Doe^Jane", false),
            make_record("b.dcm", "Gül^Ayşe", false),
        ];

        export_csv(&records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, BASIC_FIELDS.to_vec());

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|row| row.unwrap()).collect();
        assert_eq!(rows.len(), records.len());

        for (row, record) in rows.iter().zip(&records) {
            let values: Vec<String> = record.fields().into_iter().map(|(_, v)| v).collect();
            let row_values: Vec<String> = row.iter().map(String::from).collect();
            assert_eq!(row_values, values);
        }

        // non-ASCII field values survive the round trip
        assert_eq!(rows[1].get(4), Some("Gül^Ayşe"));
    }

    #[test]
    fn test_export_detailed_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![make_record("a.dcm", "Doe^Jane", true)];

        export_csv(&records, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();

        assert_eq!(headers.len(), BASIC_FIELDS.len() + DETAILED_FIELDS.len());
        assert_eq!(&headers[..BASIC_FIELDS.len()], BASIC_FIELDS);
        assert_eq!(&headers[BASIC_FIELDS.len()..], DETAILED_FIELDS);
    }
}
