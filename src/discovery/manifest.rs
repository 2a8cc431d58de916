//! Theme manifest (theme.yaml) parsing.
//!
//! Every field has a default matching the stock theme, so a project without
//! a manifest builds exactly like one with an empty manifest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::types::{ButtonLayout, TintSpec};

/// Theme manifest loaded from theme.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeManifest {
    /// Name of the generated theme; also the output directory name.
    pub name: String,

    /// Theme name in the source theme.conf that gets replaced by `name`.
    pub source_name: String,

    /// Directory holding the source icons.
    pub icons: PathBuf,

    /// Directory holding button and background templates.
    pub templates: PathBuf,

    /// Build output root; the theme lands in `<build>/<name>`.
    pub build: PathBuf,

    /// Tint applied to composited icons. `null` disables tinting.
    #[serde(default = "default_tint")]
    pub tint: Option<TintConfig>,

    /// Button sizes and spacing.
    pub layout: ButtonLayout,
}

/// Tint as written in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TintConfig {
    /// Hex colour, `#RGB` or `#RRGGBB`.
    pub colour: String,
    /// Blend factor in `[0, 1]`.
    pub blend: f32,
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            colour: "#29272A".to_string(),
            blend: 1.0,
        }
    }
}

fn default_tint() -> Option<TintConfig> {
    Some(TintConfig::default())
}

impl Default for ThemeManifest {
    fn default() -> Self {
        Self {
            name: "rEFInd-Minecraft".to_string(),
            source_name: "rEFInd-Minimalist".to_string(),
            icons: PathBuf::from("icons"),
            templates: PathBuf::from("templates"),
            build: PathBuf::from("build"),
            tint: default_tint(),
            layout: ButtonLayout::default(),
        }
    }
}

impl ThemeManifest {
    /// Load manifest from a theme.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ThemeError::io(path, "Failed to read manifest", e))?;

        Self::parse(&content)
    }

    /// Parse and validate a manifest from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document is null in YAML, which serde rejects for structs.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Self = serde_yaml::from_str(content).map_err(|e| ThemeError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check theme.yaml syntax".to_string()),
        })?;

        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.name.contains(['/', '\\']) || self.name == ".." {
            return Err(ThemeError::Config {
                message: format!("Invalid theme name '{}'", self.name),
                help: Some("The name is used as a directory name; avoid path separators".to_string()),
            });
        }

        if self.layout.big == 0 || self.layout.small == 0 {
            return Err(ThemeError::Config {
                message: "Button sizes must be non-zero".to_string(),
                help: None,
            });
        }

        self.tint_spec().map(|_| ())
    }

    /// Resolve the configured tint, if any.
    pub fn tint_spec(&self) -> Result<Option<TintSpec>> {
        self.tint
            .as_ref()
            .map(|tint| TintSpec::from_hex(&tint.colour, tint.blend))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_manifest() {
        assert_eq!(ThemeManifest::parse("").unwrap(), ThemeManifest::default());
    }

    #[test]
    fn test_default_manifest() {
        let manifest = ThemeManifest::default();

        assert_eq!(manifest.name, "rEFInd-Minecraft");
        assert_eq!(manifest.source_name, "rEFInd-Minimalist");
        assert_eq!(manifest.icons, PathBuf::from("icons"));
        assert_eq!(manifest.templates, PathBuf::from("templates"));
        assert_eq!(manifest.build, PathBuf::from("build"));
        assert_eq!(manifest.tint_spec().unwrap(), Some(TintSpec::slate()));
        assert_eq!(manifest.layout, ButtonLayout::default());
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
name: rEFInd-Stone
source_name: rEFInd-Plain
icons: art/icons
templates: art/templates
build: out
tint:
  colour: "#403B3C"
  blend: 0.5
layout:
  big: 128
  small: 32
  spacing: 4
  row_gap: 10
"##;
        let manifest = ThemeManifest::parse(yaml).unwrap();

        assert_eq!(manifest.name, "rEFInd-Stone");
        assert_eq!(manifest.source_name, "rEFInd-Plain");
        assert_eq!(manifest.icons, PathBuf::from("art/icons"));
        assert_eq!(manifest.build, PathBuf::from("out"));
        assert_eq!(
            manifest.tint,
            Some(TintConfig {
                colour: "#403B3C".to_string(),
                blend: 0.5
            })
        );
        assert_eq!(
            manifest.layout,
            ButtonLayout {
                big: 128,
                small: 32,
                spacing: 4,
                row_gap: 10
            }
        );
    }

    #[test]
    fn test_null_tint_disables_tinting() {
        let manifest = ThemeManifest::parse("tint: null").unwrap();
        assert_eq!(manifest.tint_spec().unwrap(), None);
    }

    #[test]
    fn test_partial_tint_keeps_defaults() {
        let manifest = ThemeManifest::parse("tint:\n  blend: 0.25").unwrap();
        let tint = manifest.tint_spec().unwrap().unwrap();
        assert_eq!(tint.blend(), 0.25);
        assert_eq!(tint.colour(), TintSpec::slate().colour());
    }

    #[test]
    fn test_invalid_tint_colour() {
        let err = ThemeManifest::parse("tint:\n  colour: \"#nothex\"").unwrap_err();
        assert!(matches!(err, ThemeError::Config { .. }));
    }

    #[test]
    fn test_invalid_name() {
        assert!(ThemeManifest::parse("name: ../escape").is_err());
        assert!(ThemeManifest::parse("name: \"\"").is_err());
    }

    #[test]
    fn test_zero_button_size() {
        assert!(ThemeManifest::parse("layout:\n  big: 0").is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(ThemeManifest::parse("name: [unclosed").is_err());
    }
}
