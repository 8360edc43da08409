//! Site configuration module.
//!
//! Handles loading, validating, and merging the optional `config.toml` in the
//! content root. Stock defaults are the base layer; the user file only needs
//! the keys it overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "John Doe"                             # Hero heading, <title> suffix
//! tagline = "Full Stack Developer & Designer"    # Hero subheading
//! description = ""                               # <meta name="description">
//! about_heading = "About Me"
//! about = "I'm a passionate developer ..."       # Markdown
//! owner = "John Doe"                             # Footer: "© <year> By <owner>"
//! # copyright_year = 2024                        # Omit for the current year
//! lang = "en"
//!
//! [gallery]
//! swipe_threshold = 50.0    # Horizontal swipe distance (px) that changes image
//! mobile_breakpoint = 768   # Viewport width (px) where desktop behaviour starts
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111827"
//! text_muted = "#4b5563"
//! border = "#d1d5db"
//! link = "#1f2937"
//! link_hover = "#000000"
//! accent = "#3b82f6"
//! accent_alt = "#9333ea"
//!
//! [colors.dark]
//! # same keys, dark defaults
//!
//! [processing]
//! max_processes = 4         # Max parallel render workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

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
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity and page copy.
    pub site: SiteInfo,
    /// Lightbox and accordion interaction settings.
    pub gallery: GalleryConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if !self.gallery.swipe_threshold.is_finite() || self.gallery.swipe_threshold <= 0.0 {
            return Err(ConfigError::Validation(
                "gallery.swipe_threshold must be a positive number".into(),
            ));
        }
        if self.gallery.mobile_breakpoint == 0 {
            return Err(ConfigError::Validation(
                "gallery.mobile_breakpoint must be non-zero".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Site identity and the copy shown on the home page and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub tagline: String,
    /// Meta description; empty means none is emitted.
    pub description: String,
    pub about_heading: String,
    /// Markdown source of the about section.
    pub about: String,
    /// Name in the footer copyright line.
    pub owner: String,
    /// Fixed copyright year. When absent the build year is used.
    pub copyright_year: Option<i32>,
    pub lang: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "John Doe".to_string(),
            tagline: "Full Stack Developer & Designer".to_string(),
            description: String::new(),
            about_heading: "About Me".to_string(),
            about: "I'm a passionate developer with experience in building modern web \
                    applications. My focus is on creating intuitive and performant user \
                    experiences using cutting-edge technologies."
                .to_string(),
            owner: "John Doe".to_string(),
            copyright_year: None,
            lang: "en".to_string(),
        }
    }
}

/// Interaction settings shared by the lightbox and the listing accordion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Minimum horizontal swipe distance in CSS pixels.
    pub swipe_threshold: f64,
    /// Viewport width at and above which the desktop behaviour applies.
    pub mobile_breakpoint: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: crate::gallery::DEFAULT_SWIPE_THRESHOLD,
            mobile_breakpoint: 768,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel render workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Secondary text: descriptions, bylines, footer.
    pub text_muted: String,
    pub border: String,
    pub link: String,
    pub link_hover: String,
    /// Hero gradient start.
    pub accent: String,
    /// Hero gradient end.
    pub accent_alt: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#d1d5db".to_string(),
            link: "#1f2937".to_string(),
            link_hover: "#000000".to_string(),
            accent: "#3b82f6".to_string(),
            accent_alt: "#9333ea".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b0f19".to_string(),
            text: "#f3f4f6".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#374151".to_string(),
            link: "#e5e7eb".to_string(),
            link_hover: "#ffffff".to_string(),
            accent: "#1d4ed8".to_string(),
            accent_alt: "#6b21a8".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(root = %root.display(), "loaded site config");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# casefolio configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the root of the content directory:
#   content/config.toml
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity and home page copy
# ---------------------------------------------------------------------------
[site]
title = "John Doe"
tagline = "Full Stack Developer & Designer"

# <meta name="description">; leave empty to omit.
description = ""

about_heading = "About Me"

# Markdown. Use a multi-line string for several paragraphs.
about = "I'm a passionate developer with experience in building modern web applications. My focus is on creating intuitive and performant user experiences using cutting-edge technologies."

# Footer reads "© <year> By <owner>".
owner = "John Doe"

# Fixed copyright year. Omit to use the year of the build.
# copyright_year = 2024

lang = "en"

# ---------------------------------------------------------------------------
# Gallery lightbox and listing cards
# ---------------------------------------------------------------------------
[gallery]
# Horizontal swipe distance (CSS px) that moves to the next/previous image.
swipe_threshold = 50.0

# Viewport width (CSS px) from which desktop behaviour applies:
# hover zoom instead of the lightbox, hover instead of tap on cards.
mobile_breakpoint = 768

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111827"
text_muted = "#4b5563"    # Descriptions, bylines, footer
border = "#d1d5db"
link = "#1f2937"
link_hover = "#000000"
accent = "#3b82f6"        # Hero gradient start
accent_alt = "#9333ea"    # Hero gradient end

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b0f19"
text = "#f3f4f6"
text_muted = "#9ca3af"
border = "#374151"
link = "#e5e7eb"
link_hover = "#ffffff"
accent = "#1d4ed8"
accent_alt = "#6b21a8"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page-render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}    }}
}}"#,
        light = color_properties(&colors.light, "    "),
        dark = color_properties(&colors.dark, "        "),
    )
}

fn color_properties(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-link", &scheme.link),
        ("--color-link-hover", &scheme.link_hover),
        ("--color-accent", &scheme.accent),
        ("--color-accent-alt", &scheme.accent_alt),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};\n"))
    .collect()
}

/// Generate the breakpoint-dependent CSS from the gallery settings.
///
/// Media queries can't read custom properties, so the desktop rules (hover
/// zoom, lightbox hidden) are emitted here with the configured width. The
/// `--mobile-breakpoint` property carries the same value to the scripts.
pub fn generate_gallery_css(gallery: &GalleryConfig) -> String {
    let bp = gallery.mobile_breakpoint;
    format!(
        r#":root {{
    --mobile-breakpoint: {bp}px;
}}

@media (min-width: {bp}px) {{
    .zoomable:hover img {{
        transform: scale(1.5);
    }}

    .lightbox {{
        display: none !important;
    }}
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_site_copy() {
        let config = SiteConfig::default();
        assert_eq!(config.site.title, "John Doe");
        assert_eq!(config.site.tagline, "Full Stack Developer & Designer");
        assert_eq!(config.site.about_heading, "About Me");
        assert_eq!(config.site.copyright_year, None);
    }

    #[test]
    fn default_config_has_gallery_settings() {
        let config = SiteConfig::default();
        assert_eq!(config.gallery.swipe_threshold, 50.0);
        assert_eq!(config.gallery.mobile_breakpoint, 768);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors.light]
background = "#fafafa"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.colors.light.background, "#fafafa");
        // Default values preserved
        assert_eq!(config.colors.light.text, "#111827");
        assert_eq!(config.colors.dark.background, "#0b0f19");
        assert_eq!(config.site.title, "John Doe");
    }

    #[test]
    fn parse_site_settings() {
        let toml = r#"
[site]
title = "Ada Lovelace"
owner = "Ada"
copyright_year = 1843
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Ada Lovelace");
        assert_eq!(config.site.owner, "Ada");
        assert_eq!(config.site.copyright_year, Some(1843));
        // Unspecified defaults preserved
        assert_eq!(config.site.lang, "en");
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let mut colors = ColorConfig::default();
        colors.light.background = "#f0f0f0".to_string();
        colors.dark.background = "#1a1a1a".to_string();

        let css = generate_color_css(&colors);
        assert!(css.contains("--color-bg: #f0f0f0;"));
        assert!(css.contains("--color-bg: #1a1a1a;"));
    }

    #[test]
    fn generate_css_includes_all_variables() {
        let css = generate_color_css(&ColorConfig::default());
        for var in [
            "--color-bg:",
            "--color-text:",
            "--color-text-muted:",
            "--color-border:",
            "--color-link:",
            "--color-link-hover:",
            "--color-accent:",
            "--color-accent-alt:",
        ] {
            assert_eq!(css.matches(var).count(), 2, "{var} in both schemes");
        }
    }

    #[test]
    fn generate_css_includes_dark_mode_media_query() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
    }

    #[test]
    fn gallery_css_carries_breakpoint() {
        let css = generate_gallery_css(&GalleryConfig {
            swipe_threshold: 50.0,
            mobile_breakpoint: 1024,
        });
        assert!(css.contains("--mobile-breakpoint: 1024px"));
        assert!(css.contains("@media (min-width: 1024px)"));
        assert!(!css.contains("768"));
    }

    #[test]
    fn color_scheme_default_is_light() {
        assert_eq!(ColorScheme::default(), ColorScheme::default_light());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[site]
tagline = "Designer"

[gallery]
swipe_threshold = 80.0
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.tagline, "Designer");
        assert_eq!(config.gallery.swipe_threshold, 80.0);
        // Unspecified values should be defaults
        assert_eq!(config.site.title, "John Doe");
        assert_eq!(config.gallery.mobile_breakpoint, 768);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Processing config tests
    // =========================================================================

    #[test]
    fn effective_threads_auto() {
        let threads = effective_threads(&ProcessingConfig {
            max_processes: None,
        });
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(threads, cores);
    }

    #[test]
    fn effective_threads_clamped_to_cores() {
        let threads = effective_threads(&ProcessingConfig {
            max_processes: Some(99999),
        });
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        assert_eq!(threads, cores);
    }

    #[test]
    fn effective_threads_user_constrains_down() {
        let config = ProcessingConfig {
            max_processes: Some(1),
        };
        assert_eq!(effective_threads(&config), 1);
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"threshold = 50"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"threshold = 70"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("threshold").unwrap().as_integer(), Some(70));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fff"
text = "#000"
"##,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r##"
[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let light = merged.get("colors").unwrap().get("light").unwrap();
        assert_eq!(light.get("background").unwrap().as_str(), Some("#fafafa"));
        assert_eq!(light.get("text").unwrap().as_str(), Some("#000"));
    }

    #[test]
    fn merge_toml_adds_missing_keys() {
        let base: toml::Value = toml::from_str("[site]\ntitle = \"A\"").unwrap();
        let overlay: toml::Value = toml::from_str("[site]\ncopyright_year = 2020").unwrap();
        let merged = merge_toml(base, overlay);
        let site = merged.get("site").unwrap();
        assert_eq!(site.get("title").unwrap().as_str(), Some("A"));
        assert_eq!(site.get("copyright_year").unwrap().as_integer(), Some(2020));
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[gallery]\nswipe_treshold = 40.0\n");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[images]\nquality = 90\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "[site]\nauthor = \"x\"\n").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_title() {
        let mut config = SiteConfig::default();
        config.site.title = "  ".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn validate_rejects_non_positive_threshold() {
        let mut config = SiteConfig::default();
        config.gallery.swipe_threshold = 0.0;
        assert!(config.validate().is_err());
        config.gallery.swipe_threshold = -5.0;
        assert!(config.validate().is_err());
        config.gallery.swipe_threshold = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_breakpoint() {
        let mut config = SiteConfig::default();
        config.gallery.mobile_breakpoint = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_processes() {
        let mut config = SiteConfig::default();
        config.processing.max_processes = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[gallery]\nmobile_breakpoint = 0\n",
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // resolve_config / load_raw_config tests
    // =========================================================================

    #[test]
    fn load_raw_config_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn resolve_config_with_overlay() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[gallery]\nmobile_breakpoint = 1024\n").unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.gallery.mobile_breakpoint, 1024);
        assert_eq!(config.gallery.swipe_threshold, 50.0);
    }

    // =========================================================================
    // stock_config_toml / stock_defaults_value tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        for section in [
            "[site]",
            "[gallery]",
            "[colors.light]",
            "[colors.dark]",
            "[processing]",
        ] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        assert!(val.is_table());
        for key in ["site", "gallery", "colors", "processing"] {
            assert!(val.get(key).is_some(), "missing {key}");
        }
    }
}
