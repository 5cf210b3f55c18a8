pub mod dates;
pub mod tags;

pub use dates::normalize_date;
pub use tags::{get_int_value, get_string_value, get_u16_value};

use crate::error::Result;
use dicom_object::{DefaultDicomObject, OpenFileOptions};
use std::path::Path;

/// Decodes the header of a DICOM file.
///
/// Parsing stops at the PixelData element, so bulk pixel payload is never
/// read into memory.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a parseable
/// DICOM data set.
pub fn decode_header(path: &Path) -> Result<DefaultDicomObject> {
    let dcm = OpenFileOptions::new()
        .read_until(tags::PIXEL_DATA)
        .open_file(path)?;
    Ok(dcm)
}
