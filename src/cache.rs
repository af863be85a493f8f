use std::path::{Path, PathBuf};

use crate::foundation::core::Dimensions;

pub fn placeholder_path(save_root: &Path, dims: Dimensions) -> PathBuf {
    save_root.join(dims.file_name())
}

/// True iff `save_root` is a directory holding a regular file named `{width}_x_{height}.jpg`.
///
/// Never fails: a missing directory or unreadable entry counts as "not cached". The check is
/// advisory; nothing stops another process writing the same file right after it returns.
pub fn placeholder_exists(width: u32, height: u32, save_root: &Path) -> bool {
    if !save_root.is_dir() {
        return false;
    }
    let path = placeholder_path(save_root, Dimensions { width, height });
    std::fs::metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "placeholder_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn missing_dir_is_not_cached() {
        let dir = temp_dir("cache_missing");
        assert!(!placeholder_exists(800, 600, &dir));
    }

    #[test]
    fn existing_file_is_cached() {
        let dir = temp_dir("cache_hit");
        std::fs::create_dir_all(&dir).unwrap();
        assert!(!placeholder_exists(800, 600, &dir));

        std::fs::write(dir.join("800_x_600.jpg"), b"jpeg").unwrap();
        assert!(placeholder_exists(800, 600, &dir));
        assert!(!placeholder_exists(600, 800, &dir));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn directory_with_artifact_name_is_not_cached() {
        let dir = temp_dir("cache_dir_entry");
        std::fs::create_dir_all(dir.join("64_x_64.jpg")).unwrap();
        assert!(!placeholder_exists(64, 64, &dir));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn path_uses_artifact_name() {
        let p = placeholder_path(
            Path::new("out"),
            Dimensions {
                width: 200,
                height: 100,
            },
        );
        assert_eq!(p, Path::new("out").join("200_x_100.jpg"));
    }
}
