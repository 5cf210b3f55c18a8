use crate::extraction::normalize_date;
use crate::extraction::tags::{
    get_int_value, get_string_value, get_u16_value, COLUMNS, INSTANCE_NUMBER, MANUFACTURER,
    MANUFACTURER_MODEL_NAME, MODALITY, PATIENT_AGE, PATIENT_BIRTH_DATE, PATIENT_ID, PATIENT_NAME,
    PIXEL_SPACING, REFERRING_PHYSICIAN_NAME, ROWS, SERIES_DESCRIPTION, SERIES_INSTANCE_UID,
    SERIES_NUMBER, SLICE_THICKNESS, STUDY_DATE, STUDY_DESCRIPTION, STUDY_INSTANCE_UID,
};
use dicom_object::InMemDicomObject;
use regex::Regex;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Placeholder rendered for every field the header cannot supply.
///
/// Distinct from a legitimately empty string: an empty header value is
/// rendered as the empty string, not the sentinel.
pub const NOT_AVAILABLE: &str = "N/A";

/// Field names of the basic set, in output order.
pub const BASIC_FIELDS: [&str; 13] = [
    "file_path",
    "file_name",
    "directory",
    "patient_id",
    "patient_name",
    "modality",
    "study_date",
    "birth_date",
    "series_number",
    "instance_number",
    "rows",
    "columns",
    "patient_age",
];

/// Field names of the detailed set, appended after the basic set when
/// detailed extraction was requested.
pub const DETAILED_FIELDS: [&str; 9] = [
    "study_description",
    "series_description",
    "referring_physician",
    "manufacturer",
    "model",
    "pixel_spacing",
    "slice_thickness",
    "study_instance_uid",
    "series_instance_uid",
];

/// Metadata extracted from a single DICOM file
///
/// The path-derived fields are always present; every header-derived field
/// is `None` when the header lacks it and renders as [`NOT_AVAILABLE`].
/// Records are immutable once built, and their insertion order into the
/// record store equals discovery order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    /// Full path to the source file
    pub file_path: PathBuf,

    /// File name component of the path
    pub file_name: String,

    /// Containing directory of the file
    pub directory: String,

    /// PatientID (0010,0020)
    pub patient_id: Option<String>,

    /// PatientName (0010,0010)
    pub patient_name: Option<String>,

    /// Modality (0008,0060)
    pub modality: Option<String>,

    /// StudyDate (0008,0020), normalized to `YYYY-MM-DD` where possible
    pub study_date: Option<String>,

    /// PatientBirthDate (0010,0030), normalized to `YYYY-MM-DD` where possible
    pub birth_date: Option<String>,

    /// SeriesNumber (0020,0011)
    pub series_number: Option<i32>,

    /// InstanceNumber (0020,0013)
    pub instance_number: Option<i32>,

    /// Rows (0028,0010)
    pub rows: Option<u16>,

    /// Columns (0028,0011)
    pub columns: Option<u16>,

    /// PatientAge (0010,1010)
    pub patient_age: Option<String>,

    /// Extended field set, present only for detailed extraction
    pub detailed: Option<DetailedMetadata>,
}

/// Extended field set extracted only on request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailedMetadata {
    pub study_description: Option<String>,
    pub series_description: Option<String>,
    pub referring_physician: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub pixel_spacing: Option<String>,
    pub slice_thickness: Option<String>,
    pub study_instance_uid: Option<String>,
    pub series_instance_uid: Option<String>,
}

impl MetadataRecord {
    /// Builds a record from an already-decoded DICOM header
    ///
    /// Field reads are absence-tolerant and never fail; the two date-bearing
    /// fields are passed through the date normalizer.
    pub fn from_dicom(path: PathBuf, dcm: &InMemDicomObject, detailed: bool) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let directory = path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let detailed = detailed.then(|| DetailedMetadata::from_dicom(dcm));

        Self {
            file_name,
            directory,
            patient_id: get_string_value(dcm, PATIENT_ID),
            patient_name: get_string_value(dcm, PATIENT_NAME),
            modality: get_string_value(dcm, MODALITY),
            study_date: get_string_value(dcm, STUDY_DATE).map(|d| normalize_date(&d)),
            birth_date: get_string_value(dcm, PATIENT_BIRTH_DATE).map(|d| normalize_date(&d)),
            series_number: get_int_value(dcm, SERIES_NUMBER),
            instance_number: get_int_value(dcm, INSTANCE_NUMBER),
            rows: get_u16_value(dcm, ROWS),
            columns: get_u16_value(dcm, COLUMNS),
            patient_age: get_string_value(dcm, PATIENT_AGE),
            detailed,
            file_path: path,
        }
    }

    /// Returns the field names this record renders, in output order
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = BASIC_FIELDS.to_vec();
        if self.detailed.is_some() {
            names.extend(DETAILED_FIELDS);
        }
        names
    }

    /// Renders the record as an ordered `(field name, value)` sequence
    ///
    /// This ordering is the single source of truth for the console view and
    /// the CSV column order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("file_path", self.file_path.display().to_string()),
            ("file_name", self.file_name.clone()),
            ("directory", self.directory.clone()),
            ("patient_id", render_text(&self.patient_id)),
            ("patient_name", render_text(&self.patient_name)),
            ("modality", render_text(&self.modality)),
            ("study_date", render_text(&self.study_date)),
            ("birth_date", render_text(&self.birth_date)),
            ("series_number", render_number(self.series_number)),
            ("instance_number", render_number(self.instance_number)),
            ("rows", render_number(self.rows)),
            ("columns", render_number(self.columns)),
            ("patient_age", render_text(&self.patient_age)),
        ];

        if let Some(detailed) = &self.detailed {
            fields.extend([
                ("study_description", render_text(&detailed.study_description)),
                (
                    "series_description",
                    render_text(&detailed.series_description),
                ),
                (
                    "referring_physician",
                    render_text(&detailed.referring_physician),
                ),
                ("manufacturer", render_text(&detailed.manufacturer)),
                ("model", render_text(&detailed.model)),
                ("pixel_spacing", render_text(&detailed.pixel_spacing)),
                ("slice_thickness", render_text(&detailed.slice_thickness)),
                (
                    "study_instance_uid",
                    render_text(&detailed.study_instance_uid),
                ),
                (
                    "series_instance_uid",
                    render_text(&detailed.series_instance_uid),
                ),
            ]);
        }

        fields
    }
}

impl DetailedMetadata {
    /// Reads the extended field set from a decoded header
    pub fn from_dicom(dcm: &InMemDicomObject) -> Self {
        Self {
            study_description: get_string_value(dcm, STUDY_DESCRIPTION),
            series_description: get_string_value(dcm, SERIES_DESCRIPTION),
            referring_physician: get_string_value(dcm, REFERRING_PHYSICIAN_NAME),
            manufacturer: get_string_value(dcm, MANUFACTURER),
            model: get_string_value(dcm, MANUFACTURER_MODEL_NAME),
            pixel_spacing: get_string_value(dcm, PIXEL_SPACING)
                .map(|raw| format_pixel_spacing(&raw)),
            slice_thickness: get_string_value(dcm, SLICE_THICKNESS),
            study_instance_uid: get_string_value(dcm, STUDY_INSTANCE_UID),
            series_instance_uid: get_string_value(dcm, SERIES_INSTANCE_UID),
        }
    }
}

fn render_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn render_number<T: ToString>(value: Option<T>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Formats a raw PixelSpacing value as `"{row} x {col} mm"`
///
/// Accepts `\`-separated, space-separated and exponent notation. Values that
/// do not carry two numeric components pass through unchanged.
fn format_pixel_spacing(raw: &str) -> String {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let re = NUMBER.get_or_init(|| {
        Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
    });

    let mut numbers = re
        .find_iter(raw)
        .filter_map(|m| m.as_str().parse::<f64>().ok());

    match (numbers.next(), numbers.next()) {
        (Some(row), Some(col)) => format!("{} x {} mm", row, col),
        _ => raw.to_string(),
    }
}
