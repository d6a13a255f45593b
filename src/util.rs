use std::fs;
use std::io;
use std::path::Path;

/// Uppercase initials for an avatar fallback.
///
/// Example: "Alex Morgan" → "AM"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Write a string to a file atomically (temp file + rename).
///
/// Creates parent directories as needed.
pub fn atomic_write_str(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_basic() {
        assert_eq!(initials("Alex Morgan"), "AM");
        assert_eq!(initials("Sarah Johnson"), "SJ");
    }

    #[test]
    fn test_initials_single_and_empty() {
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_atomic_write_creates_parents_and_replaces() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("roster.json");

        atomic_write_str(&path, "one").expect("first write");
        atomic_write_str(&path, "two").expect("second write");

        let content = fs::read_to_string(&path).expect("read back");
        assert_eq!(content, "two");
    }
}
