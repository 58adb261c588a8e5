use std::path::{Path, PathBuf};

/// Resolve the directory whose `.clai_local/` holds the conversation.
///
/// Priority:
/// 1. `--root` flag / `CLAI_ROOT` env var (passed in as `explicit`)
/// 2. The current working directory
///
/// Parent directories are never searched; each directory has its own
/// conversation.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        let result = resolve_root(Some(dir.path()));
        assert_eq!(result, dir.path());
    }

    #[test]
    fn defaults_to_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_root(None), cwd);
    }

    #[test]
    fn parent_workspace_is_not_inherited() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".clai_local")).unwrap();
        let subdir = dir.path().join("src/deep");
        std::fs::create_dir_all(&subdir).unwrap();

        let result = resolve_root(Some(&subdir));
        assert_eq!(result, subdir);
    }
}
