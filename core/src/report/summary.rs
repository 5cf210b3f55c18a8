use crate::record::{MetadataRecord, NOT_AVAILABLE};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Aggregate summary over the record store
///
/// Derived on demand and never cached, so it always reflects the latest
/// extraction pass. Records missing a field count under the sentinel as a
/// single bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Total number of records
    pub total: usize,

    /// Number of distinct patient identifiers
    pub distinct_patients: usize,

    /// Distinct modality values, in order of first appearance
    pub modalities: Vec<String>,

    /// Number of distinct study dates
    pub distinct_study_dates: usize,

    /// Modality frequency table, sorted by descending count with
    /// alphabetical tie-break
    pub modality_counts: Vec<(String, usize)>,
}

impl Summary {
    /// Computes the summary from the current record store contents
    pub fn from_records(records: &[MetadataRecord]) -> Self {
        let mut patients: HashSet<&str> = HashSet::new();
        let mut study_dates: HashSet<&str> = HashSet::new();
        let mut modalities = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();

        for record in records {
            patients.insert(record.patient_id.as_deref().unwrap_or(NOT_AVAILABLE));
            study_dates.insert(record.study_date.as_deref().unwrap_or(NOT_AVAILABLE));

            let modality = record.modality.as_deref().unwrap_or(NOT_AVAILABLE);
            let count = counts.entry(modality).or_insert(0);
            if *count == 0 {
                modalities.push(modality.to_string());
            }
            *count += 1;
        }

        let mut modality_counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(modality, count)| (modality.to_string(), count))
            .collect();
        modality_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            total: records.len(),
            distinct_patients: patients.len(),
            modalities,
            distinct_study_dates: study_dates.len(),
            modality_counts,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "DICOM METADATA SUMMARY")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Total DICOM files:    {}", self.total)?;
        writeln!(f, "Distinct patients:    {}", self.distinct_patients)?;
        writeln!(f, "Distinct modalities:  {}", self.modalities.join(", "))?;
        writeln!(f, "Distinct study dates: {}", self.distinct_study_dates)?;
        writeln!(f)?;
        writeln!(f, "Modality distribution:")?;
        for (modality, count) in &self.modality_counts {
            writeln!(f, "  {:<12} {}", modality, count)?;
        }
        Ok(())
    }
}
