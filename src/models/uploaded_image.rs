use std::path::{Path, PathBuf};

pub const CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

/// Accept only `[a-zA-Z0-9_.-]+`, and never a bare `.` or `..`.
///
/// With no separator allowed, a valid name is always a single path component
/// directly inside the images directory.
pub fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && filename.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        && !filename.chars().all(|c| c == '.')
}

/// Content type from the lower-cased extension. Anything unlisted is served
/// as JPEG; the file contents are never inspected.
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        _ => "image/jpeg",
    }
}

/// First candidate `root/filename` that is a regular file.
///
/// Returns `None` without touching the filesystem when the name is unsafe.
pub async fn locate(roots: &[PathBuf], filename: &str) -> Option<PathBuf> {
    if !is_safe_filename(filename) {
        log::debug!("Rejected image filename {filename:?}");
        return None;
    }
    for root in roots {
        let candidate = root.join(filename);
        match tokio::fs::metadata(&candidate).await {
            Ok(meta) if meta.is_file() => return Some(candidate),
            Ok(_) => log::debug!("{} is not a regular file", candidate.display()),
            Err(_) => {}
        }
    }
    log::debug!("Image {filename} not found in any upload directory");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_filenames() {
        assert!(is_safe_filename("photo.png"));
        assert!(is_safe_filename("a_b-c.1.JPG"));
        assert!(is_safe_filename(".hidden"));
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename("."));
        assert!(!is_safe_filename(".."));
        assert!(!is_safe_filename("../../etc/passwd"));
        assert!(!is_safe_filename("dir/photo.png"));
        assert!(!is_safe_filename("dir\\photo.png"));
        assert!(!is_safe_filename("photo .png"));
        assert!(!is_safe_filename("phöto.png"));
        assert!(!is_safe_filename("photo.png%00"));
    }

    #[test]
    fn content_type_by_extension() {
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.PNG"), "image/png");
        assert_eq!(content_type_for("a.webp"), "image/webp");
        assert_eq!(content_type_for("a.Gif"), "image/gif");
        assert_eq!(content_type_for("a.svg"), "image/svg+xml");
        assert_eq!(content_type_for("a.jpg"), "image/jpeg");
        assert_eq!(content_type_for("a.txt"), "image/jpeg");
        assert_eq!(content_type_for("noext"), "image/jpeg");
    }

    #[tokio::test]
    async fn locate_skips_directories_and_uses_fallback_roots() {
        let dir = tempfile::tempdir().unwrap();
        let primary = dir.path().join("uploads/images");
        let legacy = dir.path().join("images");
        std::fs::create_dir_all(primary.join("folder.png")).unwrap();
        std::fs::create_dir_all(&legacy).unwrap();
        std::fs::write(legacy.join("old.png"), b"png").unwrap();

        let roots = vec![primary.clone(), legacy.clone()];
        assert_eq!(locate(&roots, "old.png").await, Some(legacy.join("old.png")));
        assert_eq!(locate(&roots, "folder.png").await, None);
        assert_eq!(locate(&roots, "missing.png").await, None);
        assert_eq!(locate(&roots, "..").await, None);
    }
}
