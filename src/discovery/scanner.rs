//! Source icon scanner.
//!
//! Lists the PNG icons directly inside the icon directory and splits them
//! into OS icons and other icons. Subdirectories are not descended into.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, ThemeError};
use crate::types::{IconClass, IconFile};

/// Icons found in a source directory, split by class.
#[derive(Debug, Default)]
pub struct IconScan {
    /// Icons matching `os_*.png`.
    pub os: Vec<IconFile>,
    /// Every other `.png` icon.
    pub other: Vec<IconFile>,
}

impl IconScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of discovered icons.
    pub fn total(&self) -> usize {
        self.os.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Get icons of one class.
    pub fn of_class(&self, class: IconClass) -> &[IconFile] {
        match class {
            IconClass::Os => &self.os,
            IconClass::Other => &self.other,
        }
    }

    fn push(&mut self, icon: IconFile) {
        match icon.class {
            IconClass::Os => self.os.push(icon),
            IconClass::Other => self.other.push(icon),
        }
    }
}

/// Scan a directory for icons.
///
/// A missing or unreadable directory is an error; nothing in the build can
/// proceed without its icons.
pub fn scan_icons(dir: &Path) -> Result<IconScan> {
    let mut result = IconScan::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
            ThemeError::io(path, "Failed to list icons", e)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if let Some(icon) = IconFile::from_path(entry.path()) {
            result.push(icon);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();

        let result = scan_icons(dir.path()).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
    }

    #[test]
    fn test_scan_partitions_icons() {
        let dir = tempdir().unwrap();
        for name in [
            "os_arch.png",
            "os_debian.png",
            "func_reset.png",
            "tool_shell.png",
            "theme.conf",
            "notes.txt",
        ] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let result = scan_icons(dir.path()).unwrap();

        let os: Vec<&str> = result.os.iter().map(|i| i.name.as_str()).collect();
        let other: Vec<&str> = result.other.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(os, vec!["os_arch.png", "os_debian.png"]);
        assert_eq!(other, vec!["func_reset.png", "tool_shell.png"]);

        let all: HashSet<&Path> = result
            .os
            .iter()
            .chain(result.other.iter())
            .map(|icon| icon.path.as_path())
            .collect();
        assert_eq!(all.len(), 4);
        assert_eq!(result.of_class(IconClass::Os).len(), 2);
    }

    #[test]
    fn test_scan_skips_subdirectories() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("os_nested.png")).unwrap();
        fs::create_dir_all(dir.path().join("extra")).unwrap();
        fs::write(dir.path().join("extra/os_deep.png"), b"").unwrap();
        fs::write(dir.path().join("os_top.png"), b"").unwrap();

        let result = scan_icons(dir.path()).unwrap();

        assert_eq!(result.total(), 1);
        assert_eq!(result.os[0].name, "os_top.png");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_keeps_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let raw = OsStr::from_bytes(b"os_\xffarch.png");
        fs::write(dir.path().join(raw), b"").unwrap();
        fs::write(dir.path().join("os_ok.png"), b"").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"\xfeback.png")), b"").unwrap();

        let result = scan_icons(dir.path()).unwrap();

        assert_eq!(result.total(), 3);
        assert_eq!(result.os.len(), 2);
        assert_eq!(result.other.len(), 1);
        assert!(result.os.iter().any(|icon| icon.path == dir.path().join(raw)));
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_icons(Path::new("/nonexistent/icons"));
        assert!(result.is_err());
    }
}
