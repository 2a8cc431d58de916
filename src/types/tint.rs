//! Tint settings: a target colour and how far to pull towards it.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;

use crate::error::{Result, ThemeError};

/// A colour tint with a blend factor in `[0, 1]`.
///
/// Only the colour channels are affected by a tint; alpha is always kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintSpec {
    colour: Srgb<u8>,
    blend: f32,
}

impl TintSpec {
    /// Create a tint. The blend factor is clamped to `[0, 1]`.
    pub fn new(colour: Srgb<u8>, blend: f32) -> Self {
        let blend = if blend.is_nan() { 0.0 } else { blend.clamp(0.0, 1.0) };
        Self { colour, blend }
    }

    /// Parse a `#RGB` / `#RRGGBB` hex colour into a tint.
    pub fn from_hex(hex: &str, blend: f32) -> Result<Self> {
        let colour = Srgb::<u8>::from_str(hex.trim()).map_err(|e| ThemeError::Config {
            message: format!("Invalid tint colour '{}': {}", hex, e),
            help: Some("Use #RGB or #RRGGBB format".to_string()),
        })?;
        Ok(Self::new(colour, blend))
    }

    /// The dark slate used by the stock theme (0x29272A at full blend).
    pub fn slate() -> Self {
        Self::new(Srgb::new(0x29, 0x27, 0x2A), 1.0)
    }

    pub fn colour(&self) -> Srgb<u8> {
        self.colour
    }

    pub fn blend(&self) -> f32 {
        self.blend
    }

    /// Apply the tint to one RGBA pixel, truncating each channel.
    pub fn apply(&self, [r, g, b, a]: [u8; 4]) -> [u8; 4] {
        [
            self.mix(r, self.colour.red),
            self.mix(g, self.colour.green),
            self.mix(b, self.colour.blue),
            a,
        ]
    }

    fn mix(&self, channel: u8, target: u8) -> u8 {
        // `as u8` truncates towards zero and saturates.
        (channel as f32 * (1.0 - self.blend) + target as f32 * self.blend) as u8
    }
}

impl Default for TintSpec {
    fn default() -> Self {
        Self::slate()
    }
}

impl fmt::Display for TintSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X} @ {}",
            self.colour.red, self.colour.green, self.colour.blue, self.blend
        )
    }
}
