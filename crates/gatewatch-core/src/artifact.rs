//! Screenshot artifact naming and cleanup.
//!
//! Screenshots are transient: named from a timestamp, sent to the channel,
//! then deleted best-effort once the run no longer needs them.

use chrono::{DateTime, FixedOffset, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Screenshot timestamps are rendered in the scheduling site's local time.
/// Asia/Tokyo has no DST, so a fixed offset is exact.
const TOKYO_OFFSET_SECS: i32 = 9 * 3600;

/// Build the screenshot filename for a capture taken at `now`.
///
/// Pattern: `DDMonYYYY_HHMMSS.png`, e.g. `03Feb2026_141503.png`.
pub fn screenshot_filename(now: DateTime<Utc>) -> String {
    let tokyo = FixedOffset::east_opt(TOKYO_OFFSET_SECS).expect("UTC+9 is a valid offset");
    format!("{}.png", now.with_timezone(&tokyo).format("%d%b%Y_%H%M%S"))
}

/// Delete the given artifact files, best-effort.
///
/// A file that no longer exists counts as already removed. Returns the
/// paths that are still present after the attempt, in input order.
pub fn remove_artifacts<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    let mut survivors = Vec::new();
    for path in paths {
        let path = path.as_ref();
        match fs::remove_file(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "artifact removed"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                // Already gone, nothing to do.
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "artifact removal failed");
                if path.exists() {
                    survivors.push(path.to_path_buf());
                }
            }
        }
    }
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_screenshot_filename_format() {
        let now = Utc.with_ymd_and_hms(2026, 2, 3, 5, 15, 3).unwrap();
        // 05:15:03 UTC is 14:15:03 in Tokyo.
        assert_eq!(screenshot_filename(now), "03Feb2026_141503.png");
    }

    #[test]
    fn test_screenshot_filename_day_rollover() {
        let now = Utc.with_ymd_and_hms(2026, 2, 3, 22, 0, 0).unwrap();
        assert_eq!(screenshot_filename(now), "04Feb2026_070000.png");
    }

    #[test]
    fn test_remove_existing_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let file = tmp.path().join("shot.png");
        fs::write(&file, b"png").expect("write file");

        let survivors = remove_artifacts(&[&file]);
        assert!(survivors.is_empty());
        assert!(!file.exists());
    }

    #[test]
    fn test_remove_missing_file_is_not_an_error() {
        let tmp = TempDir::new().expect("create temp dir");
        let file = tmp.path().join("never-created.png");

        let survivors = remove_artifacts(&[&file]);
        assert!(survivors.is_empty());
    }

    #[test]
    fn test_undeletable_path_is_reported() {
        // A directory cannot be removed with remove_file, and it still
        // exists afterwards, so it must show up as a survivor.
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().join("stuck");
        fs::create_dir(&dir).expect("create dir");

        let survivors = remove_artifacts(&[&dir]);
        assert_eq!(survivors, vec![dir.clone()]);
        assert!(dir.exists());
    }

    #[test]
    fn test_mixed_batch_reports_only_survivors() {
        let tmp = TempDir::new().expect("create temp dir");
        let ok = tmp.path().join("a.png");
        fs::write(&ok, b"png").expect("write file");
        let stuck = tmp.path().join("b");
        fs::create_dir(&stuck).expect("create dir");

        let survivors = remove_artifacts(&[ok.clone(), stuck.clone()]);
        assert_eq!(survivors, vec![stuck]);
        assert!(!ok.exists());
    }
}
