use thiserror::Error;

/// Result type for dicomscan operations
pub type Result<T> = std::result::Result<T, DicomScanError>;

/// Error types for dicomscan operations
#[derive(Error, Debug)]
pub enum DicomScanError {
    /// DICOM decode error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Invalid element value
    #[error("Invalid element value: {0}")]
    InvalidValue(String),

    /// Generic extraction error
    #[error("Extraction error: {0}")]
    ExtractionError(String),

    /// No metadata records to present
    #[error("no metadata records available")]
    EmptyStore,

    /// CSV output error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for DicomScanError {
    fn from(s: String) -> Self {
        DicomScanError::ExtractionError(s)
    }
}

impl From<&str> for DicomScanError {
    fn from(s: &str) -> Self {
        DicomScanError::ExtractionError(s.to_string())
    }
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for DicomScanError {
    fn from(e: dicom_object::ReadError) -> Self {
        DicomScanError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for DicomScanError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        DicomScanError::InvalidValue(format!("{}", e))
    }
}
