use crate::config::ReviewConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Files eligible for review, split by role.
///
/// Built once per run and read-only afterwards. A path appears at most once
/// and in at most one partition.
#[derive(Debug, Default, Clone)]
pub struct FileInventory {
    pub source_files: Vec<PathBuf>,
    pub config_files: Vec<PathBuf>,
}

impl FileInventory {
    pub fn is_empty(&self) -> bool {
        self.source_files.is_empty() && self.config_files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source_files.len() + self.config_files.len()
    }
}

/// Walks `root` and classifies every eligible file.
///
/// A missing root is not an error: it produces an empty inventory and a warning.
/// So does a root that is not a directory. Symlinked files are kept, symlinked
/// directories are not descended into.
pub fn discover_files(root: &Path, config: &ReviewConfig) -> FileInventory {
    let mut inventory = FileInventory::default();

    if !root.exists() {
        warn!("Path does not exist: {}", root.display());
        return inventory;
    }
    if !root.is_dir() {
        warn!("Path is not a directory: {}", root.display());
        return inventory;
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("Skipping unreadable entry under {}: {}", root.display(), err);
                continue;
            }
        };
        if !is_file(&entry) {
            continue;
        }

        let path = entry.path();
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };

        if config.source_extensions.iter().any(|s| s == ext) {
            inventory.source_files.push(path.to_path_buf());
        } else if config.config_extensions.iter().any(|c| c == ext) {
            if is_excluded_file(path, config) {
                debug!("Skipping fixture file {}", path.display());
                continue;
            }
            inventory.config_files.push(path.to_path_buf());
        }
    }

    debug!(
        "Discovered {} source files and {} config files under {}",
        inventory.source_files.len(),
        inventory.config_files.len(),
        root.display()
    );
    inventory
}

fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn is_excluded_dir(entry: &DirEntry, config: &ReviewConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && config
            .excluded_dirs
            .iter()
            .any(|d| entry.file_name().to_string_lossy() == d.as_str())
}

fn is_excluded_file(path: &Path, config: &ReviewConfig) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy();
            config.excluded_files.iter().any(|f| name == f.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_root_yields_empty_inventory() {
        let dir = tempdir().unwrap();
        let inventory = discover_files(&dir.path().join("nope"), &ReviewConfig::default());
        assert!(inventory.is_empty());
    }

    #[test]
    fn classifies_and_excludes() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pkg/__pycache__")).unwrap();
        fs::write(root.join("pkg/b.py"), "").unwrap();
        fs::write(root.join("pkg/a.py"), "").unwrap();
        fs::write(root.join("pkg/__pycache__/a.py"), "").unwrap();
        fs::write(root.join("settings.yml"), "").unwrap();
        fs::write(root.join("config.yaml"), "").unwrap();
        fs::write(root.join("pkg/database.json"), "{}").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();

        let inventory = discover_files(root, &ReviewConfig::default());
        assert_eq!(
            inventory.source_files,
            vec![root.join("pkg/a.py"), root.join("pkg/b.py")]
        );
        assert_eq!(
            inventory.config_files,
            vec![root.join("config.yaml"), root.join("settings.yml")]
        );
        assert_eq!(inventory.len(), 4);
    }

    #[test]
    fn file_root_yields_empty_inventory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("app.py");
        fs::write(&file, "print(\"debug\")\n").unwrap();

        let inventory = discover_files(&file, &ReviewConfig::default());
        assert!(inventory.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn keeps_symlinked_files_without_following_directories() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let shared = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("real.py"), "").unwrap();
        symlink(root.join("real.py"), root.join("linked.py")).unwrap();
        fs::write(shared.path().join("config.yaml"), "").unwrap();
        fs::write(shared.path().join("outside.py"), "").unwrap();
        symlink(shared.path().join("config.yaml"), root.join("config.yaml")).unwrap();
        symlink(shared.path(), root.join("vendored")).unwrap();
        symlink(root.join("gone.py"), root.join("dangling.py")).unwrap();

        let inventory = discover_files(root, &ReviewConfig::default());
        assert_eq!(
            inventory.source_files,
            vec![root.join("linked.py"), root.join("real.py")]
        );
        assert_eq!(inventory.config_files, vec![root.join("config.yaml")]);
    }
}
