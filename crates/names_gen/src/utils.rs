use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use wotr_names_codegen::{input_path, INPUT_ENV};

/// Nearest ancestor of the current directory holding the workspace manifest.
pub fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_root_from(&cwd).unwrap_or(cwd)
}

fn find_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| {
            fs::read_to_string(dir.join("Cargo.toml"))
                .map(|manifest| manifest.contains("[workspace]"))
                .unwrap_or(false)
        })
        .map(Path::to_path_buf)
}

/// Dump to read: `--input` as typed (relative to cwd), otherwise
/// `WOTR_CHEATDATA` or the sample dump, both relative to the workspace root.
pub fn input_or_default(input: Option<PathBuf>) -> PathBuf {
    match input {
        Some(path) => path,
        None => input_path(&find_project_root(), env::var_os(INPUT_ENV).as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    #[test]
    fn test_nearest_workspace_manifest_wins() {
        let dir = TempDir::new().unwrap();
        let outer = dir.path().join("outer");
        let root = outer.join("wotr");
        let member = root.join("crates/names_gen");
        fs::create_dir_all(&member).unwrap();
        fs::write(outer.join("Cargo.toml"), "[workspace]\nmembers = []").unwrap();
        fs::write(root.join("Cargo.toml"), "[workspace]\nmembers = []").unwrap();
        fs::write(member.join("Cargo.toml"), "[package]\nname = \"names_gen\"").unwrap();

        assert_eq!(find_root_from(&member), Some(root));
    }

    #[test]
    fn test_package_manifest_is_not_a_root() {
        let dir = TempDir::new().unwrap();
        let member = dir.path().join("names_gen");
        fs::create_dir_all(&member).unwrap();
        fs::write(member.join("Cargo.toml"), "[package]\nname = \"names_gen\"").unwrap();

        assert_eq!(find_root_from(&member), None);
    }

    #[test]
    fn test_explicit_input_is_kept_as_typed() {
        let typed = PathBuf::from("dumps/cheatdata.json");
        assert_eq!(input_or_default(Some(typed.clone())), typed);
    }

    #[test]
    fn test_env_input_resolves_from_workspace_root() {
        // Same root build.rs uses (CARGO_MANIFEST_DIR/../..), from any member dir.
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("wotr");
        let member = root.join("crates/wotr_names");
        fs::create_dir_all(&member).unwrap();
        fs::write(root.join("Cargo.toml"), "[workspace]\nmembers = []").unwrap();

        let found = find_root_from(&member).unwrap();
        assert_eq!(
            input_path(&found, Some(OsStr::new("data/cheatdata.json"))),
            root.join("data/cheatdata.json")
        );
        assert_eq!(input_path(&found, None), root.join("data/cheatdata.json"));
    }
}
