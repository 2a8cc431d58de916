//! Icon files and their two render classes.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Filename prefix that marks an operating-system icon.
pub const OS_ICON_PREFIX: &str = "os_";

/// Extension every icon must carry.
pub const ICON_EXTENSION: &str = ".png";

/// The two classes an icon can belong to.
///
/// OS icons are rendered on the big button, everything else on the small one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconClass {
    Os,
    Other,
}

impl IconClass {
    /// Classify a file name. Returns `None` for anything that is not a PNG.
    pub fn of(name: &str) -> Option<Self> {
        if !name.ends_with(ICON_EXTENSION) {
            None
        } else if is_os_icon(name) {
            Some(IconClass::Os)
        } else {
            Some(IconClass::Other)
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IconClass::Os => "os",
            IconClass::Other => "other",
        }
    }
}

impl fmt::Display for IconClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True when `name` matches `os_*.png`.
pub fn is_os_icon(name: &str) -> bool {
    name.starts_with(OS_ICON_PREFIX) && name.ends_with(ICON_EXTENSION)
}

/// An icon found in the source directory.
///
/// `name` is for display only and may contain replacement characters; the
/// output path is always built from the file name as found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    pub path: PathBuf,
    pub name: String,
    pub class: IconClass,
    file_name: OsString,
}

impl IconFile {
    /// Build an icon from a path, or `None` if the file name is not an icon.
    ///
    /// Names that are not valid UTF-8 are still classified: the prefix and
    /// extension are ASCII and survive a lossy conversion unchanged.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_os_string();
        let name = file_name.to_string_lossy().into_owned();
        let class = IconClass::of(&name)?;
        Some(Self {
            path: path.to_path_buf(),
            name,
            class,
            file_name,
        })
    }

    /// Output path for this icon inside `dir`; only the directory changes.
    pub fn output_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}
