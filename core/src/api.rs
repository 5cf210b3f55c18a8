use crate::error::Result;
use crate::extraction::decode_header;
use crate::record::MetadataRecord;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Metadata extractor over a set of discovered DICOM files
///
/// Decodes each file's header independently and builds one
/// [`MetadataRecord`] per file, selecting the basic or the basic+detailed
/// field set at construction.
///
/// # Example
///
/// ```no_run
/// use dicomscan_core::{discover, MetadataExtractor};
/// use std::path::Path;
///
/// let files = discover(Path::new("/data/studies"));
/// let extractor = MetadataExtractor::new(false);
/// let (records, failures) = extractor.extract_all(&files);
/// println!("{} records, {} failures", records.len(), failures);
/// ```
pub struct MetadataExtractor {
    detailed: bool,
}

impl MetadataExtractor {
    /// Creates an extractor for the basic (`detailed = false`) or the
    /// basic+detailed (`detailed = true`) field set
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }

    /// Extracts a record from a single file
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be decoded. Absent fields are
    /// not errors; they fill with the sentinel.
    pub fn extract_file(&self, path: &Path) -> Result<MetadataRecord> {
        let dcm = decode_header(path)?;
        Ok(MetadataRecord::from_dicom(
            path.to_path_buf(),
            &dcm,
            self.detailed,
        ))
    }

    /// Extracts records from every file, isolating per-file faults
    ///
    /// A fault on one file is logged with path and description, counted,
    /// and skipped; it never aborts the remaining files. The returned
    /// records preserve the input order minus skipped entries.
    pub fn extract_all(&self, files: &[PathBuf]) -> (Vec<MetadataRecord>, usize) {
        let mut records = Vec::with_capacity(files.len());
        let mut failures = 0;

        for path in files {
            match self.extract_file(path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    failures += 1;
                }
            }
        }

        info!("Extracted metadata from {} files", records.len());
        (records, failures)
    }
}
