//! `KEY=VALUE` options for the build command.

use std::collections::BTreeMap;

use crate::error::{Result, ThemeError};
use crate::types::ButtonCounts;

/// Bake buttons into the background; also switches icons to copy mode.
pub const BAKE_ICONS: &str = "bgbakeicons";
/// Per-row override for the big (OS) button row.
pub const BAKE_ICONS_OS: &str = "bgbakeicons.os";
/// Per-row override for the small (other) button row.
pub const BAKE_ICONS_OTHER: &str = "bgbakeicons.other";

const KNOWN: [&str; 3] = [BAKE_ICONS, BAKE_ICONS_OS, BAKE_ICONS_OTHER];

/// How icons and the background are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Composite every icon onto its button; copy the plain background.
    Composite,
    /// Copy icons verbatim; bake buttons into the background.
    Bake(ButtonCounts),
}

/// Parsed build options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Raw options after trimming and lowercasing.
    pub values: BTreeMap<String, String>,
    pub mode: BuildMode,
}

impl BuildOptions {
    /// Parse raw `KEY=VALUE` arguments.
    pub fn parse(raw: &[String]) -> Result<Self> {
        let values = parse_pairs(raw);
        let mode = build_mode(&values)?;
        Ok(Self { values, mode })
    }

    /// Option keys this build does not understand.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| !KNOWN.contains(key))
            .collect()
    }
}

/// Split each argument on its first `=`. A bare key maps to `"true"`.
///
/// Arguments are trimmed and lowercased first; later duplicates win.
pub fn parse_pairs(raw: &[String]) -> BTreeMap<String, String> {
    raw.iter()
        .map(|arg| arg.trim().to_lowercase())
        .filter(|arg| !arg.is_empty())
        .map(|arg| match arg.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (arg, "true".to_string()),
        })
        .collect()
}

fn build_mode(values: &BTreeMap<String, String>) -> Result<BuildMode> {
    if !KNOWN.iter().any(|key| values.contains_key(*key)) {
        return Ok(BuildMode::Composite);
    }

    let base = match values.get(BAKE_ICONS) {
        Some(value) => parse_count(BAKE_ICONS, value)?,
        None => 0,
    };

    let row = |key: &str| -> Result<u32> {
        match values.get(key) {
            Some(value) => parse_count(key, value),
            None => Ok(base),
        }
    };

    Ok(BuildMode::Bake(ButtonCounts {
        big: row(BAKE_ICONS_OS)?,
        small: row(BAKE_ICONS_OTHER)?,
    }))
}

/// A count of buttons. `true` (a bare flag) means zero.
fn parse_count(key: &str, value: &str) -> Result<u32> {
    if value == "true" {
        return Ok(0);
    }

    value.parse().map_err(|_| ThemeError::Args {
        message: format!("Invalid value '{}' for {}", value, key),
        help: Some(format!(
            "Use a non-negative number of buttons, e.g. {}=3",
            key
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_pairs() {
        let pairs = parse_pairs(&args(&[" BgBakeIcons=3 ", "flag", "a=b=c", ""]));

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs["bgbakeicons"], "3");
        assert_eq!(pairs["flag"], "true");
        assert_eq!(pairs["a"], "b=c");
    }

    #[test]
    fn test_no_options_is_composite() {
        let options = BuildOptions::parse(&[]).unwrap();
        assert_eq!(options.mode, BuildMode::Composite);
    }

    #[test]
    fn test_numeric_bake() {
        let options = BuildOptions::parse(&args(&["bgbakeicons=3"])).unwrap();
        assert_eq!(options.mode, BuildMode::Bake(ButtonCounts::uniform(3)));
    }

    #[test]
    fn test_bare_bake_is_zero() {
        let options = BuildOptions::parse(&args(&["bgbakeicons"])).unwrap();
        assert_eq!(options.mode, BuildMode::Bake(ButtonCounts::uniform(0)));

        let options = BuildOptions::parse(&args(&["bgbakeicons=true"])).unwrap();
        assert_eq!(options.mode, BuildMode::Bake(ButtonCounts::uniform(0)));
    }

    #[test]
    fn test_per_row_overrides() {
        let options =
            BuildOptions::parse(&args(&["bgbakeicons=4", "bgbakeicons.other=6"])).unwrap();
        assert_eq!(options.mode, BuildMode::Bake(ButtonCounts { big: 4, small: 6 }));

        let options = BuildOptions::parse(&args(&["bgbakeicons.os=2"])).unwrap();
        assert_eq!(options.mode, BuildMode::Bake(ButtonCounts { big: 2, small: 0 }));
    }

    #[test]
    fn test_invalid_count() {
        for bad in ["bgbakeicons=abc", "bgbakeicons=-1", "bgbakeicons.os=1.5"] {
            let err = BuildOptions::parse(&args(&[bad])).unwrap_err();
            assert!(matches!(err, ThemeError::Args { .. }), "{}", bad);
        }
    }

    #[test]
    fn test_unknown_keys() {
        let options = BuildOptions::parse(&args(&["bgbakeicons=1", "shiny=yes"])).unwrap();
        assert_eq!(options.unknown_keys(), vec!["shiny"]);
    }
}
