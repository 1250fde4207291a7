use crate::config::constants::{ANONYMOUS, DEFAULT_EXTENSION};
use bytes::Bytes;
use std::io;
use std::path::Path;
use tokio::{fs::File, io::AsyncWriteExt, io::BufWriter};

/// Writes `data` to `path`, creating missing parent directories.
pub async fn write_to_file(path: &Path, data: &Bytes) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut file = BufWriter::new(File::create(path).await?);
    file.write_all(data).await?;
    file.flush().await?;

    Ok(())
}

// A segment is used verbatim as one level of the storage key, so it must not
// be able to escape or add levels
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control())
}

/// Drops any directory components a client may have sent along with the filename.
pub fn sanitize_filename(filename: &str) -> &str {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
}

/// Trailing suffix of `filename`, or `jpg` when there is none usable.
pub fn extension_of(filename: Option<&str>) -> String {
    filename
        .map(sanitize_filename)
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(DEFAULT_EXTENSION)
        .to_string()
}

pub fn normalize_attribution(attribution: Option<&str>) -> String {
    match attribution.map(str::trim) {
        Some(name) if !name.is_empty() => name.replace(['/', '\\'], "-"),
        _ => ANONYMOUS.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_to_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Fotos").join("Xàtiva").join("a.jpg");

        write_to_file(&path, &Bytes::from_static(b"hello")).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_is_safe_segment() {
        assert!(is_safe_segment("Fotos"));
        assert!(is_safe_segment("Plaça d'Espanya"));
        assert!(!is_safe_segment(""));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("."));
        assert!(!is_safe_segment("a/b"));
        assert!(!is_safe_segment("a\\b"));
        assert!(!is_safe_segment("line\nbreak"));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("photo.png"), "photo.png");
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\IMG_1.HEIC"), "IMG_1.HEIC");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Some("photo.png")), "png");
        assert_eq!(extension_of(Some("archive.tar.gz")), "gz");
        assert_eq!(extension_of(Some("IMG_0001.JPG")), "JPG");
        assert_eq!(extension_of(Some("photo")), "jpg");
        assert_eq!(extension_of(Some("photo.")), "jpg");
        assert_eq!(extension_of(Some("dir.v2/photo")), "jpg");
        assert_eq!(extension_of(None), "jpg");
    }

    #[test]
    fn test_normalize_attribution() {
        assert_eq!(normalize_attribution(Some("Marta")), "Marta");
        assert_eq!(normalize_attribution(Some("  Marta ")), "Marta");
        assert_eq!(normalize_attribution(Some("   ")), "ANONYMOUS");
        assert_eq!(normalize_attribution(None), "ANONYMOUS");
        assert_eq!(normalize_attribution(Some("a/b")), "a-b");
    }
}
