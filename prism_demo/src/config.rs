// Copyright 2025 the Prism Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! TOML configuration for the demo screen.
//!
//! Every field is optional; a missing file section falls back to the reference
//! screen (seven languages on a 1080 px wide, 2.75x density display).

use std::path::{Path, PathBuf};

use peniko::Color;
use peniko::color::{Srgb, parse_color};
use prism_charts::{BarEntry, ChartDataset};
use serde::Deserialize;
use thiserror::Error;

use crate::theme;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("entry {label:?} has invalid color {value:?}: {reason}")]
    Color {
        label: String,
        value: String,
        reason: String,
    },

    #[error("screen {field} must be positive, got {value}")]
    Screen { field: &'static str, value: f64 },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct DemoConfig {
    pub(crate) title: String,
    pub(crate) show_description: bool,
    pub(crate) screen: ScreenConfig,
    pub(crate) entries: Vec<EntryConfig>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ScreenConfig {
    /// Content width in px.
    pub(crate) width: f64,
    /// Content height in px.
    pub(crate) height: f64,
    /// Pixels per dp.
    pub(crate) density: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct EntryConfig {
    pub(crate) value: f64,
    pub(crate) label: String,
    /// A palette name (`"bright-blue"`) or any CSS color (`"#0091ff"`, `"teal"`).
    pub(crate) color: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let entries = [
            (28.0, "Kotlin", "orange"),
            (15.0, "Swift", "bright-blue"),
            (11.0, "Ruby", "green"),
            (7.0, "Cobol", "purple"),
            (14.0, "C++", "blue-gray"),
            (9.0, "C", "red-orange"),
            (21.0, "Python", "dark-gray"),
        ]
        .into_iter()
        .map(|(value, label, color)| EntryConfig {
            value,
            label: label.to_owned(),
            color: color.to_owned(),
        })
        .collect();

        Self {
            title: "Preferred Programming Languages".to_owned(),
            show_description: false,
            screen: ScreenConfig::default(),
            entries,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 2200.0,
            density: 2.75,
        }
    }
}

impl DemoConfig {
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), entries = config.entries.len(), "loaded config");
        Ok(config)
    }

    pub(crate) fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.screen.validate()?;
        Ok(config)
    }

    /// Resolves entry colors and builds the chart dataset.
    pub(crate) fn dataset(&self) -> Result<ChartDataset, ConfigError> {
        self.entries
            .iter()
            .map(|e| {
                e.resolve_color()
                    .map(|color| BarEntry::new(e.value, e.label.as_str(), color))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ChartDataset::new)
    }
}

impl ScreenConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("density", self.density),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Screen { field, value });
            }
        }
        Ok(())
    }

    pub(crate) fn dp(&self, dp: f64) -> f64 {
        dp * self.density
    }
}

impl EntryConfig {
    fn resolve_color(&self) -> Result<Color, ConfigError> {
        if let Some(color) = theme::named(&self.color) {
            return Ok(color);
        }
        parse_color(&self.color)
            .map(|c| c.to_alpha_color::<Srgb>())
            .map_err(|err| ConfigError::Color {
                label: self.label.clone(),
                value: self.color.clone(),
                reason: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_the_reference_screen() {
        let config = DemoConfig::default();
        let dataset = config.dataset().unwrap();
        assert_eq!(dataset.len(), 7);
        assert_eq!(dataset.total(), Ok(105.0));
        assert_eq!(dataset.entries()[0].color, theme::ORANGE);
        assert_eq!(dataset.entries()[6].label, "Python");
        assert!(!config.show_description);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
show_description = true

[screen]
density = 2.0
"#,
        )
        .unwrap();
        assert!(config.show_description);
        assert_eq!(config.screen.density, 2.0);
        assert_eq!(config.screen.width, 1080.0);
        assert_eq!(config.entries.len(), 7);
        assert_eq!(config.screen.dp(20.0), 40.0);
    }

    #[test]
    fn entries_accept_palette_names_and_css_colors() {
        let config = DemoConfig::from_toml_str(
            r##"
entries = [
  { value = 3, label = "Rust", color = "#b7410e" },
  { value = 1, label = "Zig", color = "orange" },
]
"##,
        )
        .unwrap();
        let dataset = config.dataset().unwrap();
        let rust = dataset.entries()[0].color.to_rgba8();
        assert_eq!((rust.r, rust.g, rust.b, rust.a), (0xB7, 0x41, 0x0E, 0xFF));
        assert_eq!(dataset.entries()[1].color, theme::ORANGE);
    }

    #[test]
    fn bad_color_names_the_entry() {
        let config = DemoConfig::from_toml_str(
            r#"entries = [{ value = 1, label = "Go", color = "not-a-color" }]"#,
        )
        .unwrap();
        let err = config.dataset().unwrap_err();
        assert!(matches!(&err, ConfigError::Color { label, .. } if label == "Go"));
        assert!(err.to_string().contains("not-a-color"));
    }

    #[test]
    fn unknown_keys_and_bad_screens_are_rejected() {
        assert!(matches!(
            DemoConfig::from_toml_str("colour = 1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DemoConfig::from_toml_str("[screen]\ndensity = 0"),
            Err(ConfigError::Screen {
                field: "density",
                ..
            })
        ));
    }
}
