//! Where the blueprint dump is looked up.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the dump from a local WotR installation.
pub const INPUT_ENV: &str = "WOTR_CHEATDATA";

/// Sample dump shipped with the workspace.
pub const DEFAULT_INPUT: &str = "data/cheatdata.json";

/// Resolve the dump location from the value of [`INPUT_ENV`].
///
/// A relative value is taken from the workspace root, same as the default,
/// so the build script and the CLI read the same file whatever their cwd is.
pub fn input_path(workspace_root: &Path, configured: Option<&OsStr>) -> PathBuf {
    match configured.filter(|value| !value.is_empty()) {
        Some(value) => workspace_root.join(value),
        None => workspace_root.join(DEFAULT_INPUT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_workspace_relative() {
        let root = Path::new("/work/wotr");
        assert_eq!(
            input_path(root, None),
            Path::new("/work/wotr/data/cheatdata.json")
        );
        assert_eq!(
            input_path(root, Some(OsStr::new(""))),
            Path::new("/work/wotr/data/cheatdata.json")
        );
    }

    #[test]
    fn test_relative_value_is_workspace_relative() {
        let root = Path::new("/work/wotr");
        assert_eq!(
            input_path(root, Some(OsStr::new("dumps/cheatdata.json"))),
            Path::new("/work/wotr/dumps/cheatdata.json")
        );
    }

    #[test]
    fn test_absolute_value_is_kept() {
        let root = Path::new("/work/wotr");
        assert_eq!(
            input_path(root, Some(OsStr::new("/games/wotr/cheatdata.json"))),
            Path::new("/games/wotr/cheatdata.json")
        );
    }
}
