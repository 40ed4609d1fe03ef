use std::path::Path;

use core_types::{FileSize, RawFile};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count for display, e.g. `1536` -> `"1.5 KB"`.
///
/// Values are rounded to two decimals and trailing zeros are dropped.
/// Gigabytes is the largest unit used.
pub fn format_file_size(bytes: FileSize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut divisor = 1u64;
    while unit < SIZE_UNITS.len() - 1 && bytes >= divisor * 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / divisor as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// Builds a candidate file from a path on disk, guessing the MIME type from the extension.
///
/// Unknown extensions map to `application/octet-stream` and are therefore not images.
pub fn raw_file_from_path(path: &Path) -> std::io::Result<RawFile> {
    let metadata = std::fs::metadata(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Ok(RawFile::new(name, mime_type, metadata.len()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_format_file_size() {
        let test_cases = vec![
            (0, "0 Bytes"),
            (1, "1 Bytes"),
            (1023, "1023 Bytes"),
            (1024, "1 KB"),
            (1536, "1.5 KB"),
            (5 * 1024 * 1024, "5 MB"),
            (1_234_567, "1.18 MB"),
            (3 * 1024 * 1024 * 1024, "3 GB"),
            (2048 * 1024 * 1024 * 1024, "2048 GB"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(format_file_size(input), expected, "input {}", input);
        }
    }

    #[test]
    fn test_raw_file_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let photo_path = dir.path().join("balcony.JPG");
        let mut photo = std::fs::File::create(&photo_path).unwrap();
        photo.write_all(&[0u8; 300]).unwrap();

        let raw = raw_file_from_path(&photo_path).unwrap();

        assert_eq!(raw.name, "balcony.JPG");
        assert_eq!(raw.mime_type, "image/jpeg");
        assert_eq!(raw.size_bytes, 300);
        assert!(raw.is_image());
    }

    #[test]
    fn test_raw_file_from_path_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let doc_path = dir.path().join("contract.pdf");
        std::fs::write(&doc_path, b"%PDF").unwrap();

        let raw = raw_file_from_path(&doc_path).unwrap();

        assert_eq!(raw.mime_type, "application/pdf");
        assert!(!raw.is_image());
    }

    #[test]
    fn test_raw_file_from_missing_path() {
        assert!(raw_file_from_path(Path::new("/definitely/not/here.png")).is_err());
    }
}
