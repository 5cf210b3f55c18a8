use crate::extraction::decode_header;
use log::info;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File suffixes treated as plausible DICOM containers, lowercased.
///
/// Files with no suffix at all are also probed, since DICOM exports
/// frequently ship extensionless instance files.
pub const RECOGNIZED_EXTENSIONS: [&str; 2] = ["dcm", "dicom"];

/// Decides whether a path is a decodable DICOM container
///
/// A path is accepted when it is a regular file, its suffix passes the
/// extension gate, and a header-only decode succeeds. Every decode fault of
/// every kind converts to `false`; this function never propagates one.
///
/// The decode attempt makes this deliberately expensive; the trade is zero
/// false positives.
pub fn is_candidate(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    if !has_candidate_extension(path) {
        return false;
    }
    decode_header(path).is_ok()
}

fn has_candidate_extension(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => RECOGNIZED_EXTENSIONS
            .iter()
            .any(|recognized| ext.eq_ignore_ascii_case(recognized)),
        None => true,
    }
}

/// Recursively collects every decodable DICOM file under `root`
///
/// The root is assumed to exist; validating it is the caller's
/// responsibility. Entries that cannot be read (permissions, races) are
/// silently excluded. The returned order is the traversal order, which is
/// stable across runs: directories are walked depth-first with entries
/// sorted by file name.
///
/// Progress is reported per accepted file and once at the end, through the
/// `log` facade only; it never affects the returned sequence.
pub fn discover(root: &Path) -> Vec<PathBuf> {
    info!("Searching for DICOM files under: {}", root.display());

    let mut accepted = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok());

    for entry in walker {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if is_candidate(&path) {
            info!("({}) DICOM file found: {}", accepted.len() + 1, path.display());
            accepted.push(path);
        }
    }

    info!("{} DICOM files found in total", accepted.len());
    accepted
}
