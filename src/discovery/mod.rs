//! Project discovery for bootskin.
//!
//! A project is a root directory holding `icons/`, `templates/`, the
//! source `theme.conf` and the selection images, plus an optional
//! `theme.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use bootskin::discovery::discover;
//!
//! let project = discover(".", None)?;
//! let scan = bootskin::discovery::scan_icons(&project.icons_dir())?;
//! println!("Found {} icons", scan.total());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{ThemeManifest, TintConfig};
pub use scanner::{scan_icons, IconScan};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "theme.yaml";

/// The theme configuration file, read from the root and written to the output.
pub const THEME_CONF: &str = "theme.conf";

/// Template file names inside the templates directory.
pub mod templates {
    pub const BUTTON_BIG: &str = "button_big_alpha.png";
    pub const BUTTON_SMALL: &str = "button_small_alpha.png";
    pub const BUTTON_DOWN_BIG: &str = "button_down_big_alpha.png";
    pub const BUTTON_DOWN_SMALL: &str = "button_down_small_alpha.png";
    pub const BACKGROUND_HD: &str = "bg_1080.png";
    pub const BACKGROUND_SD: &str = "bg_480.png";
}

/// Output file names inside the theme directory.
pub mod outputs {
    pub const ICONS_DIR: &str = "icons";
    pub const BACKGROUND: &str = "background.png";
    pub const SELECTION_BIG: &str = "selection_big.png";
    pub const SELECTION_SMALL: &str = "selection_small.png";
}

/// A theme project rooted at a directory.
#[derive(Debug, Clone)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no theme.yaml was found).
    pub manifest: ThemeManifest,

    /// Whether a manifest file was found.
    pub has_manifest: bool,
}

impl Project {
    /// Project with a default manifest.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_manifest(root, ThemeManifest::default())
    }

    pub fn with_manifest(root: impl Into<PathBuf>, manifest: ThemeManifest) -> Self {
        Self {
            root: root.into(),
            manifest,
            has_manifest: false,
        }
    }

    /// Source icon directory.
    pub fn icons_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.icons)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.templates)
    }

    /// Path of a template file.
    pub fn template(&self, name: &str) -> PathBuf {
        self.templates_dir().join(name)
    }

    /// Path of a file in the project root.
    pub fn root_file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Theme output directory, `<build>/<name>`.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.build).join(&self.manifest.name)
    }

    /// Path of a file in the theme output directory.
    pub fn output(&self, name: &str) -> PathBuf {
        self.output_dir().join(name)
    }

    pub fn output_icons_dir(&self) -> PathBuf {
        self.output(outputs::ICONS_DIR)
    }
}

/// Discover a project at `root`.
///
/// Loads `config` when given, otherwise `<root>/theme.yaml` if present,
/// otherwise falls back to the default manifest. An explicit config path
/// that does not exist is an error.
pub fn discover(root: impl AsRef<Path>, config: Option<&Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();

    let (manifest, has_manifest) = match config {
        Some(path) => (ThemeManifest::load(path)?, true),
        None => {
            let manifest_path = root.join(MANIFEST_FILENAME);
            if manifest_path.exists() {
                (ThemeManifest::load(&manifest_path)?, true)
            } else {
                (ThemeManifest::default(), false)
            }
        }
    };

    Ok(Project {
        root,
        manifest,
        has_manifest,
    })
}
