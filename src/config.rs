//! Tunables for the particle field, the text highlighter and the orb parallax.
//!
//! Every struct deserializes from JSON with all fields optional; anything left
//! out keeps the landing page's value.

use crate::color::Color;
use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Pairwise link tests grow with the square of this; above it the per-frame
/// cost stops being negligible.
pub const PAIRWISE_COMFORT_LIMIT: usize = 150;

fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ConfigError> {
    serde_json::from_str(json).map_err(ConfigError::from)
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    /// Full width of the per-axis velocity range, centered on zero
    pub max_speed: f64,
    pub min_radius: f64,
    pub radius_spread: f64,
    pub palette: [Color; 2],
    pub link_distance: f64,
    /// Link alpha at zero distance
    pub link_opacity: f64,
    pub link_width: f64,
    pub link_color: Color,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: 80,
            max_speed: 0.3,
            min_radius: 0.5,
            radius_spread: 1.5,
            palette: [Color::FIELD_BLUE, Color::FIELD_PINK],
            link_distance: 120.0,
            link_opacity: 0.15,
            link_width: 0.5,
            link_color: Color::LINK_BLUE,
        }
    }
}

impl FieldConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        from_json(json)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Horizontal distance, in percent of the container width, under which a
    /// glyph counts as near the pointer
    pub radius: f64,
    pub near_color: Color,
    pub default_color: Color,
    pub transition: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            radius: 15.0,
            near_color: Color::MUTED_GRAY,
            default_color: Color::SOFT_WHITE,
            transition: "color 0.15s ease".to_owned(),
        }
    }
}

impl HighlightConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        from_json(json)
    }
}

/// Resting offset of one orb plus how strongly it follows the pointer and scroll.
/// Offsets are in percent of the viewport.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct OrbAnchor {
    pub horizontal: f64,
    pub vertical: f64,
    pub pointer_gain: f64,
    pub scroll_gain: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Positioned from the left edge
    pub leading: OrbAnchor,
    /// Positioned from the right edge
    pub trailing: OrbAnchor,
    /// Hero title vertical shift in pixels per scrolled pixel
    pub title_scroll_gain: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        ParallaxConfig {
            leading: OrbAnchor {
                horizontal: 20.0,
                vertical: 10.0,
                pointer_gain: 0.03,
                scroll_gain: 0.05,
            },
            trailing: OrbAnchor {
                horizontal: 15.0,
                vertical: 30.0,
                pointer_gain: 0.02,
                scroll_gain: 0.03,
            },
            title_scroll_gain: -0.08,
        }
    }
}

impl ParallaxConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        from_json(json)
    }
}
