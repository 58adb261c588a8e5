use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const WORKSPACE_DIR: &str = ".clai_local";

pub const MODEL_FILE: &str = "clai_model";
pub const SYSMSG_FILE: &str = "clai_sysmsg";
pub const CONVERSATION_FILE: &str = "clai_conversation";
pub const LOG_FILE: &str = "clai_log";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn workspace_dir(root: &Path) -> PathBuf {
    root.join(WORKSPACE_DIR)
}

pub fn model_path(root: &Path) -> PathBuf {
    workspace_dir(root).join(MODEL_FILE)
}

pub fn sysmsg_path(root: &Path) -> PathBuf {
    workspace_dir(root).join(SYSMSG_FILE)
}

pub fn conversation_path(root: &Path) -> PathBuf {
    workspace_dir(root).join(CONVERSATION_FILE)
}

pub fn log_path(root: &Path) -> PathBuf {
    workspace_dir(root).join(LOG_FILE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(workspace_dir(root), PathBuf::from("/tmp/proj/.clai_local"));
        assert_eq!(
            model_path(root),
            PathBuf::from("/tmp/proj/.clai_local/clai_model")
        );
        assert_eq!(
            sysmsg_path(root),
            PathBuf::from("/tmp/proj/.clai_local/clai_sysmsg")
        );
        assert_eq!(
            conversation_path(root),
            PathBuf::from("/tmp/proj/.clai_local/clai_conversation")
        );
        assert_eq!(log_path(root), PathBuf::from("/tmp/proj/.clai_local/clai_log"));
    }
}
