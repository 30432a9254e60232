use std::path::Path;

use tracing::info;

use crate::error::LicenceError;
use crate::models::IdentifierList;

/// Render a list as file content: one identifier per line, always ending in `\n`.
pub fn render(list: &IdentifierList) -> String {
    let mut content = list.as_slice().join("\n");
    content.push('\n');
    content
}

/// Overwrite `path` with the rendered list. The parent directory must already exist.
pub fn write_list(path: &Path, list: &IdentifierList) -> Result<(), LicenceError> {
    std::fs::write(path, render(list)).map_err(|source| LicenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), entries = list.len(), "wrote licence list");
    Ok(())
}

/// Read a previously written list back. Blank lines (including the one implied
/// by the trailing newline) are dropped.
pub fn read_list(path: &Path) -> Result<Vec<String>, LicenceError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LicenceError::fetch(&path.display().to_string(), e))?;

    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn list(items: &[&str]) -> IdentifierList {
        IdentifierList::from_candidates(items.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_render_ends_with_single_newline() {
        assert_eq!(render(&list(&["MIT", "Apache-2.0"])), "Apache-2.0\nMIT\n");
        assert_eq!(render(&list(&[])), "\n");
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fedora.txt");
        let original = list(&["GPL-2.0-or-later", "MIT", "mit", "Zlib"]);

        write_list(&path, &original).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.ends_with('\n'));
        assert!(!raw.ends_with("\n\n"));
        assert_eq!(read_list(&path).unwrap(), original.as_slice());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("suse.txt");
        std::fs::write(&path, "stale\nentries\nfrom\nlast\nrun\n").unwrap();

        write_list(&path, &list(&["MIT"])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "MIT\n");
    }

    #[test]
    fn test_missing_output_dir_is_write_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("fedora.txt");

        let err = write_list(&path, &list(&["MIT"])).unwrap_err();
        assert!(matches!(err, LicenceError::Write { .. }));
        assert!(!path.exists());
        assert!(!dir.path().join("no-such-dir").exists());
    }

    #[test]
    fn test_unwritable_destination_is_write_error() {
        let dir = TempDir::new().unwrap();
        // A regular file where a directory is expected.
        let blocker = dir.path().join("licences");
        std::fs::write(&blocker, "").unwrap();

        let err = write_list(&blocker.join("fedora.txt"), &list(&["MIT"])).unwrap_err();
        assert!(matches!(err, LicenceError::Write { .. }));
    }

    #[test]
    fn test_read_missing_file_is_fetch_error() {
        let dir = TempDir::new().unwrap();
        let err = read_list(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, LicenceError::Fetch { .. }));
    }
}
