pub mod api;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod extraction;
pub mod record;
pub mod report;

pub use api::MetadataExtractor;
pub use discovery::{discover, is_candidate};
pub use error::{DicomScanError, Result};
pub use extraction::{decode_header, normalize_date};
pub use record::{DetailedMetadata, MetadataRecord, NOT_AVAILABLE};
pub use report::{export_csv, ConsoleReport, Summary, DEFAULT_CSV_NAME};

#[cfg(test)]
mod tests {
    use super::*;
    use dicom_core::{DataElement, PrimitiveValue, VR};
    use dicom_object::meta::FileMetaTableBuilder;
    use dicom_object::InMemDicomObject;
    use extraction::tags::{MODALITY, PATIENT_ID, STUDY_DATE};
    use std::path::Path;
    use tempfile::TempDir;

    fn write_dicom_file(path: &Path, patient_id: &str, modality: &str, study_date: &str) {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            PATIENT_ID,
            VR::LO,
            PrimitiveValue::from(patient_id),
        ));
        dcm.put(DataElement::new(
            MODALITY,
            VR::CS,
            PrimitiveValue::from(modality),
        ));
        dcm.put(DataElement::new(
            STUDY_DATE,
            VR::DA,
            PrimitiveValue::from(study_date),
        ));

        let dcm = dcm
            .with_meta(
                FileMetaTableBuilder::new()
                    .transfer_syntax("1.2.840.10008.1.2.1")
                    .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
                    .media_storage_sop_instance_uid("1.2.826.0.1.3680043.10.1011.3"),
            )
            .unwrap();
        dcm.write_to_file(path).unwrap();
    }

    #[test]
    fn test_pipeline_ct_mr_scenario() {
        let dir = TempDir::new().unwrap();
        write_dicom_file(&dir.path().join("a.dcm"), "P1", "CT", "20230101");
        write_dicom_file(&dir.path().join("b.dcm"), "P2", "MR", "20230101");

        let files = discover(dir.path());
        assert_eq!(files.len(), 2);

        let (records, failures) = MetadataExtractor::new(false).extract_all(&files);
        assert_eq!(failures, 0);
        assert_eq!(records.len(), 2);
        assert!(records
            .iter()
            .all(|r| r.study_date.as_deref() == Some("2023-01-01")));

        let summary = Summary::from_records(&records);
        assert_eq!(summary.total, 2);
        assert!(summary.distinct_patients <= 2);
        assert_eq!(summary.distinct_study_dates, 1);
        assert_eq!(
            summary.modality_counts,
            vec![("CT".to_string(), 1), ("MR".to_string(), 1)]
        );
    }
}
