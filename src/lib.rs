//! Concierge: a storefront search overlay as a Zellij plugin.
//!
//! The plugin pane shows a storefront page with a compact search trigger near
//! its bottom edge. Pressing the trigger, pressing `Ctrl+I` / `Super+I`, or
//! sending a `concierge` pipe message opens a full-pane overlay with recent
//! searches, trending products, suggested queries and a focused search input.
//! `Esc`, a press on the backdrop, or the close control dismiss it.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Key / pipe mapping                               │
//! │  - Event handling and pointer propagation           │
//! │  - Focus handles, view model computation            │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ UI Layer (ui/)        │   │ Infrastructure          │
//! │ - Layout / hit areas  │   │ - Sandbox paths         │
//! │ - Portal layers       │   │ - Scoped key listener   │
//! │ - Components, theming │   │                         │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Static storefront content                        │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/concierge.wasm" {
//!         placeholder "Search products"
//!         label "Product search"
//!         shortcut_hint "⌘ I"
//!         container_width "60"
//!         raise_on_open "true"
//!         theme "catppuccin-mocha"
//!         content_file "~/.config/concierge/content.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use concierge::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::Viewport { rows: 30, cols: 100 })?;
//! handle_event(&mut state, &Event::Shortcut)?;
//! assert!(state.overlay_visible());
//! # Ok::<(), concierge::ConciergeError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, OverlayState, TriggerProps};
pub use domain::{ConciergeError, Result, StaticContent};
pub use ui::Theme;

use app::props::{ContainerStyle, InputStyle, DEFAULT_LABEL, DEFAULT_SHORTCUT_HINT};
use infrastructure::paths::{resolve_config_path, strip_host_prefix};
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// Every key is optional. Empty values count as unset; malformed numbers and
/// booleans fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Trigger placeholder text. Default: `Search`.
    pub placeholder: Option<String>,

    /// Accessible name, also used as the pane title. Default: `Search`.
    pub label: Option<String>,

    /// Trigger input text colour (hex).
    pub input_fg: Option<String>,

    /// Trigger placeholder colour (hex).
    pub placeholder_fg: Option<String>,

    /// Trigger container border colour (hex).
    pub container_border: Option<String>,

    /// Trigger container maximum width in columns.
    pub container_width: Option<usize>,

    /// Rows between the trigger container and the bottom edge.
    pub container_offset: Option<usize>,

    /// Shortcut glyph shown in the closed trigger. Default: `⌘ I`.
    pub shortcut_hint: Option<String>,

    /// Whether opening the overlay makes the pane fullscreen. Default: `true`.
    pub raise_on_open: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Path to a TOML file with the storefront content.
    pub content_file: Option<String>,

    /// Tracing filter directive. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholder: None,
            label: None,
            input_fg: None,
            placeholder_fg: None,
            container_border: None,
            container_width: None,
            container_offset: None,
            shortcut_hint: None,
            raise_on_open: true,
            theme_name: None,
            theme_file: None,
            content_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use concierge::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("container_width".to_string(), "60".to_string());
    /// map.insert("raise_on_open".to_string(), "no".to_string());
    /// map.insert("label".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.container_width, Some(60));
    /// assert!(!config.raise_on_open);
    /// assert_eq!(config.label, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .filter(|value| !value.trim().is_empty())
                .cloned()
        };
        let number = |key: &str| {
            config.get(key).and_then(|value| {
                parse_usize(key, value)
                    .map_err(|e| tracing::warn!(error = %e, "ignoring configuration value"))
                    .ok()
            })
        };

        let raise_on_open = config.get("raise_on_open").map_or(true, |value| {
            parse_bool("raise_on_open", value).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring configuration value");
                true
            })
        });

        Self {
            placeholder: text("placeholder"),
            label: text("label"),
            input_fg: text("input_fg"),
            placeholder_fg: text("placeholder_fg"),
            container_border: text("container_border"),
            container_width: number("container_width"),
            container_offset: number("container_offset"),
            shortcut_hint: text("shortcut_hint"),
            raise_on_open,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            content_file: text("content_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Trigger attributes with defaults filled in.
    ///
    /// The placeholder falls back to the label when only the label is set.
    #[must_use]
    pub fn trigger_props(&self) -> TriggerProps {
        let label = self.label.clone().unwrap_or_else(|| DEFAULT_LABEL.to_string());

        TriggerProps {
            placeholder: self.placeholder.clone().unwrap_or_else(|| label.clone()),
            label,
            shortcut_hint: self
                .shortcut_hint
                .clone()
                .unwrap_or_else(|| DEFAULT_SHORTCUT_HINT.to_string()),
            input_style: InputStyle {
                fg: self.input_fg.clone(),
                placeholder_fg: self.placeholder_fg.clone(),
            },
            container_style: ContainerStyle {
                border: self.container_border.clone(),
                width: self.container_width,
                offset: self.container_offset,
            },
        }
    }
}

fn parse_usize(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| ConciergeError::Config(format!("{key}: expected a number, got {value:?}")))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ConciergeError::Config(format!(
            "{key}: expected true or false, got {value:?}"
        ))),
    }
}

/// Builds the initial application state from configuration.
///
/// Theme resolution: `theme_file`, then `theme`, then the default theme.
/// Content resolution: `content_file`, then the built-in storefront content.
/// Files that fail to load are logged and replaced by the defaults.
///
/// The returned state is closed and unmounted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing concierge plugin");

    let mut state = AppState::new(config.trigger_props(), load_content(config), load_theme(config));
    state.raise_on_open = config.raise_on_open;
    state
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = resolve_config_path(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(
                theme_file = %strip_host_prefix(&path.to_string_lossy()),
                error = %e,
                "failed to load theme file, using default"
            );
            Theme::default()
        });
    }

    config.theme_name.as_deref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

fn load_content(config: &Config) -> StaticContent {
    let Some(content_file) = &config.content_file else {
        return StaticContent::default();
    };

    let path = resolve_config_path(content_file);
    StaticContent::from_file(&path).unwrap_or_else(|e| {
        tracing::warn!(
            content_file = %strip_host_prefix(&path.to_string_lossy()),
            error = %e,
            "failed to load content file, using built-in content"
        );
        StaticContent::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.trigger_props(), TriggerProps::default());
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("container_width", "wide"),
            ("container_offset", "-3"),
            ("raise_on_open", "maybe"),
        ]));

        assert_eq!(config.container_width, None);
        assert_eq!(config.container_offset, None);
        assert!(config.raise_on_open);
    }

    #[test]
    fn parse_errors_are_config_errors() {
        assert!(matches!(parse_bool("k", "maybe"), Err(ConciergeError::Config(_))));
        assert!(matches!(parse_usize("k", "x"), Err(ConciergeError::Config(_))));
        assert_eq!(parse_usize("k", " 12 ").unwrap(), 12);
        assert!(!parse_bool("k", "OFF").unwrap());
    }

    #[test]
    fn trigger_props_carry_overrides() {
        let config = Config::from_zellij(&map(&[
            ("label", "Product search"),
            ("input_fg", "#ffffff"),
            ("container_border", "#ff0000"),
            ("container_width", "60"),
            ("shortcut_hint", "^I"),
        ]));
        let props = config.trigger_props();

        assert_eq!(props.label, "Product search");
        assert_eq!(props.placeholder, "Product search");
        assert_eq!(props.shortcut_hint, "^I");
        assert_eq!(props.input_style.fg.as_deref(), Some("#ffffff"));
        assert_eq!(props.container_style.border.as_deref(), Some("#ff0000"));
        assert_eq!(props.container_style.width, Some(60));
    }

    #[test]
    fn initialize_uses_named_theme_and_raise_flag() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("raise_on_open", "false"),
        ]));
        let state = initialize(&config);

        assert_eq!(state.theme.name, "catppuccin-latte");
        assert!(!state.raise_on_open);
        assert!(!state.is_open());
        assert!(!state.is_mounted());
    }

    #[test]
    fn initialize_falls_back_on_bad_files() {
        let config = Config {
            theme_file: Some("/definitely/missing/theme.toml".to_string()),
            content_file: Some("/definitely/missing/content.toml".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.theme, Theme::default());
        assert_eq!(state.content, StaticContent::default());
    }

    #[test]
    fn initialize_reads_content_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "brand = \"NORTHWIND\"\nsuggested_queries = [\"rain jacket\"]"
        )
        .unwrap();

        let config = Config {
            content_file: Some(file.path().to_string_lossy().into_owned()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.content.brand, "NORTHWIND");
        assert_eq!(state.content.suggested_queries, vec!["rain jacket"]);
    }
}
