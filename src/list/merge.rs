use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LicenceError;
use crate::list::writer::{read_list, write_list};
use crate::models::IdentifierList;

/// Find every `*.txt` list in `dir`, the previous combined file included.
pub fn discover_lists(dir: &Path) -> Result<Vec<PathBuf>, LicenceError> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.txt").to_string_lossy().into_owned();

    let entries = glob::glob(&pattern).map_err(|e| LicenceError::fetch(&pattern, e))?;

    let mut files = Vec::new();
    for entry in entries {
        files.push(entry.map_err(|e| LicenceError::fetch(&pattern, e))?);
    }
    Ok(files)
}

/// Combine every list in `dir` into `dir/combined_file`.
pub fn merge_lists(dir: &Path, combined_file: &str) -> Result<IdentifierList, LicenceError> {
    let mut combined = Vec::new();
    for file in discover_lists(dir)? {
        let lines = read_list(&file)?;
        debug!(file = %file.display(), entries = lines.len(), "merging list");
        combined.extend(lines);
    }

    let list = IdentifierList::from_candidates(combined);
    write_list(&dir.join(combined_file), &list)?;
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_merge_dedups_and_sorts() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("one.txt"), "b\na\n").unwrap();
        std::fs::write(dir.path().join("two.txt"), "c\na\n").unwrap();

        let merged = merge_lists(dir.path(), "tweaked.txt").unwrap();
        assert_eq!(merged.as_slice(), ["a", "b", "c"]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("tweaked.txt")).unwrap(),
            "a\nb\nc\n"
        );
    }

    #[test]
    fn test_hand_added_combined_entries_are_kept() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("fedora.txt"), "MIT\n").unwrap();
        std::fs::write(dir.path().join("tweaked.txt"), "Hand-Added\nMIT\n").unwrap();

        let merged = merge_lists(dir.path(), "tweaked.txt").unwrap();
        assert_eq!(merged.as_slice(), ["Hand-Added", "MIT"]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("tweaked.txt")).unwrap(),
            "Hand-Added\nMIT\n"
        );
    }

    #[test]
    fn test_only_txt_files_are_merged() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("suse.txt"), "Zlib\n").unwrap();
        std::fs::write(dir.path().join("README.md"), "# not a list\n").unwrap();

        let files = discover_lists(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("suse.txt")]);
    }

    #[test]
    fn test_empty_directory_writes_empty_list() {
        let dir = TempDir::new().unwrap();
        let merged = merge_lists(dir.path(), "tweaked.txt").unwrap();
        assert!(merged.is_empty());
        assert!(dir.path().join("tweaked.txt").exists());
    }
}
