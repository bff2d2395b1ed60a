use std::path::{Path, PathBuf};

use sasskit::config::{APPSETTINGS_FILE_NAME, CONFIG_FILE_NAME};

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `sasscompiler.json`
/// - `appsettings.json`
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(CONFIG_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(APPSETTINGS_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_project_root_prefers_nearest_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("site/Styles")).unwrap();
        std::fs::write(root.join("site/sasscompiler.json"), "{}").unwrap();

        let start = root.join("site/Styles");

        assert_eq!(discover_project_root(&start), root.join("site"));
    }

    #[test]
    fn discover_project_root_uses_appsettings() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("web/Pages")).unwrap();
        std::fs::write(root.join("web/appsettings.json"), "{}").unwrap();

        assert_eq!(
            discover_project_root(&root.join("web/Pages")),
            root.join("web")
        );
    }

    #[test]
    fn discover_project_root_falls_back_to_git_root() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::create_dir_all(root.join("a/b")).unwrap();

        assert_eq!(discover_project_root(&root.join("a/b")), root.to_path_buf());
    }
}
