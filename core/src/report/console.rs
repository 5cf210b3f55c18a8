use crate::record::MetadataRecord;
use std::fmt;

/// Console listing of extracted records
///
/// Prints one block per record in fixed key order, optionally truncated to
/// the first `limit` records with a trailing notice for the rest. Read-only
/// over the record store.
pub struct ConsoleReport<'a> {
    records: &'a [MetadataRecord],
    limit: Option<usize>,
}

impl<'a> ConsoleReport<'a> {
    /// Creates a console report over `records`, showing at most `limit`
    /// entries when given
    pub fn new(records: &'a [MetadataRecord], limit: Option<usize>) -> Self {
        Self { records, limit }
    }
}

impl<'a> fmt::Display for ConsoleReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.records.len();
        let shown = self.limit.map_or(total, |limit| limit.min(total));

        for (index, record) in self.records[..shown].iter().enumerate() {
            writeln!(f, "{}", "=".repeat(60))?;
            writeln!(f, "DICOM file {}/{}", index + 1, total)?;
            writeln!(f, "{}", "=".repeat(60))?;
            for (name, value) in record.fields() {
                writeln!(f, "{:<20}: {}", name, value)?;
            }
            writeln!(f)?;
        }

        if shown < total {
            writeln!(f, "... and {} more files", total - shown)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_record(name: &str, modality: &str) -> MetadataRecord {
        MetadataRecord {
            file_path: PathBuf::from(format!("/data/{name}")),
            file_name: name.to_string(),
            directory: "/data".to_string(),
            patient_id: Some("P1".to_string()),
            patient_name: None,
            modality: Some(modality.to_string()),
            study_date: Some("2023-01-01".to_string()),
            birth_date: None,
            series_number: Some(1),
            instance_number: None,
            rows: Some(512),
            columns: Some(512),
            patient_age: None,
            detailed: None,
        }
    }

    #[test]
    fn test_console_report_all_records() {
        let records = vec![make_record("a.dcm", "CT"), make_record("b.dcm", "MR")];
        let output = format!("{}", ConsoleReport::new(&records, None));

        assert!(output.contains("DICOM file 1/2"));
        assert!(output.contains("DICOM file 2/2"));
        assert!(output.contains("modality            : CT"));
        assert!(output.contains("modality            : MR"));
        assert!(output.contains("patient_name        : N/A"));
        assert!(!output.contains("more files"));
    }

    #[test]
    fn test_console_report_truncates_with_notice() {
        let records = vec![
            make_record("a.dcm", "CT"),
            make_record("b.dcm", "MR"),
            make_record("c.dcm", "US"),
        ];
        let output = format!("{}", ConsoleReport::new(&records, Some(1)));

        assert!(output.contains("DICOM file 1/3"));
        assert!(!output.contains("DICOM file 2/3"));
        assert!(output.contains("... and 2 more files"));
    }

    #[test]
    fn test_console_report_limit_beyond_total() {
        let records = vec![make_record("a.dcm", "CT")];
        let output = format!("{}", ConsoleReport::new(&records, Some(10)));

        assert!(output.contains("DICOM file 1/1"));
        assert!(!output.contains("more files"));
    }
}
