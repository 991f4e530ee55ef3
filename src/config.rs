//! Tool configuration.
//!
//! Handles loading, validating, and merging `showcase.toml`. The file is
//! sparse: stock defaults are the base layer and user values override just
//! the keys they name. Unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [defaults]
//! tone = "professional"             # classy | professional | savage | funny
//! tags = "webdev, coding, project"  # Comma-separated hashtag seeds
//! variations = 2                    # Caption variations (1-3)
//! auto_detect_tech = true
//!
//! [colors]
//! accent = "#059669"
//! accent_alt = "#0d9488"
//! heading = "#1e293b"
//! text = "#334155"
//! text_muted = "#64748b"
//! surface = "#f8fafc"
//! surface_alt = "#e2e8f0"
//! border = "#e2e8f0"
//! ```
//!
//! `[defaults]` seeds the form before flags and form files are applied;
//! `[colors]` themes the generated landing page via CSS custom properties.

use crate::form::{FormDefaults, MAX_VARIATIONS, MIN_VARIATIONS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `showcase.toml`.
///
/// All fields have stock defaults. User config files need only specify the
/// values they want to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Sticky form defaults, applied before flags and form files.
    pub defaults: FormDefaults,
    /// Landing-page palette.
    pub colors: ColorConfig,
}

impl ShowcaseConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_VARIATIONS..=MAX_VARIATIONS).contains(&self.defaults.variations) {
            return Err(ConfigError::Validation(format!(
                "defaults.variations must be {MIN_VARIATIONS}-{MAX_VARIATIONS}"
            )));
        }
        for (name, value) in self.colors.entries() {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{} must not be empty",
                    name.replace('-', "_")
                )));
            }
        }
        Ok(())
    }
}

/// Landing-page color palette.
///
/// Values are emitted verbatim as CSS custom properties; any CSS color
/// syntax works.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Buttons, logo, gradient start.
    pub accent: String,
    /// Gradient partner of `accent`.
    pub accent_alt: String,
    /// Section headings and the footer background.
    pub heading: String,
    /// Body text.
    pub text: String,
    /// Hero subheading, nav links, demo placeholder.
    pub text_muted: String,
    /// Page background gradient start, feature-card fill.
    pub surface: String,
    /// Page background gradient end.
    pub surface_alt: String,
    /// Card and header borders.
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            accent: "#059669".to_string(),
            accent_alt: "#0d9488".to_string(),
            heading: "#1e293b".to_string(),
            text: "#334155".to_string(),
            text_muted: "#64748b".to_string(),
            surface: "#f8fafc".to_string(),
            surface_alt: "#e2e8f0".to_string(),
            border: "#e2e8f0".to_string(),
        }
    }
}

impl ColorConfig {
    /// CSS custom-property names paired with their configured values.
    fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("accent", &self.accent),
            ("accent-alt", &self.accent_alt),
            ("heading", &self.heading),
            ("text", &self.text),
            ("text-muted", &self.text_muted),
            ("surface", &self.surface),
            ("surface-alt", &self.surface_alt),
            ("border", &self.border),
        ]
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ShowcaseConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<ShowcaseConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ShowcaseConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given `showcase.toml` path.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock config.
pub fn load_config(path: &Path) -> Result<ShowcaseConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `showcase.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Showcase Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Each section only needs the keys it wants to override.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Form defaults - applied before flags and --form files
# ---------------------------------------------------------------------------
[defaults]
# Caption voice: classy | professional | savage | funny
tone = "professional"

# Comma-separated hashtag seeds for the caption hashtag line.
tags = "webdev, coding, project"

# Caption variations to produce (1-3).
variations = 2

# When false, the README tech-stack section lists a single generic entry.
auto_detect_tech = true

# ---------------------------------------------------------------------------
# Landing-page palette - emitted as CSS custom properties
# ---------------------------------------------------------------------------
[colors]
accent = "#059669"        # Buttons, logo, gradient start
accent_alt = "#0d9488"    # Gradient partner of accent
heading = "#1e293b"       # Section headings and the footer background
text = "#334155"          # Body text
text_muted = "#64748b"    # Hero subheading, nav links, demo placeholder
surface = "#f8fafc"       # Page background gradient start, card fill
surface_alt = "#e2e8f0"   # Page background gradient end
border = "#e2e8f0"        # Card and header borders
"##
}

/// Generate CSS custom properties from the color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let vars = colors
        .entries()
        .iter()
        .map(|(name, value)| format!("    --{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(":root {{\n{vars}\n}}")
}
