use chrono::NaiveDate;

/// Normalizes a DICOM `YYYYMMDD` date string to ISO-8601 `YYYY-MM-DD`.
///
/// Inputs that do not encode a valid 8-digit calendar date are returned
/// unchanged, including the `"N/A"` sentinel. Normalization failure is a
/// degraded pass-through, never an error.
pub fn normalize_date(raw: &str) -> String {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let year = raw[..4].parse().unwrap_or(0);
    let month = raw[4..6].parse().unwrap_or(0);
    let day = raw[6..8].parse().unwrap_or(0);

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => raw.to_string(),
    }
}
