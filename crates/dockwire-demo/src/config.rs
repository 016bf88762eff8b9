//! Demo configuration.
//!
//! Configuration can be loaded from:
//! - The file named by `DOCKWIRE_CONFIG`
//! - `dockwire.toml` in the working directory
//! - `~/.config/dockwire/dockwire.toml`

use anyhow::{Context, Result};
use dockwire_core::{DuplicatePolicy, RouterConfig, SetupPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Router behaviour.
    #[serde(default)]
    pub router: RouterSection,

    /// Widgets to create, in creation order.
    #[serde(default = "default_widgets")]
    pub widgets: Vec<WidgetConfig>,

    /// Names of widgets to click, in order.
    #[serde(default = "default_clicks")]
    pub clicks: Vec<String>,

    /// Metrics configuration.
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Router configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouterSection {
    /// Reject entities registered twice instead of warning.
    #[serde(default)]
    pub strict_duplicates: bool,

    /// Make repeated connection passes skip already wired pairs.
    #[serde(default)]
    pub skip_wired: bool,
}

/// A single content widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Widget name; also the payload it emits when clicked.
    pub name: String,

    /// Whether the widget is registered with the router.
    #[serde(default = "default_true")]
    pub routed: bool,
}

impl WidgetConfig {
    fn new(name: &str, routed: bool) -> Self {
        Self {
            name: name.to_string(),
            routed,
        }
    }
}

/// Metrics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Install a Prometheus recorder and log its rendering on exit.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_log_filter() -> String {
    "dockwire=info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_widgets() -> Vec<WidgetConfig> {
    vec![
        WidgetConfig::new("Red", true),
        WidgetConfig::new("Blue", true),
        WidgetConfig::new("Green", true),
        WidgetConfig::new("Yellow", true),
        // Second Red tab, docked but left off the router.
        WidgetConfig::new("Red", false),
    ]
}

fn default_clicks() -> Vec<String> {
    vec!["Red".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            router: RouterSection::default(),
            widgets: default_widgets(),
            clicks: default_clicks(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration from file or defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("DOCKWIRE_CONFIG") {
            return Self::from_file(shellexpand::tilde(&path).as_ref());
        }

        let config_paths = ["dockwire.toml", "~/.config/dockwire/dockwire.toml"];

        for path in &config_paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::from_file(expanded.as_ref());
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Router configuration derived from the `[router]` section.
    #[must_use]
    pub fn router_config(&self) -> RouterConfig {
        RouterConfig {
            duplicate_policy: if self.router.strict_duplicates {
                DuplicatePolicy::Reject
            } else {
                DuplicatePolicy::Warn
            },
            setup_policy: if self.router.skip_wired {
                SetupPolicy::SkipWired
            } else {
                SetupPolicy::Rescan
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.widgets.len(), 5);
        assert_eq!(config.widgets.iter().filter(|w| w.routed).count(), 4);
        assert_eq!(config.clicks, vec!["Red".to_string()]);
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_default_router_config() {
        let router = Config::default().router_config();
        assert_eq!(router.duplicate_policy, DuplicatePolicy::Warn);
        assert_eq!(router.setup_policy, SetupPolicy::Rescan);
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            clicks = ["Blue", "Green"]

            [router]
            strict_duplicates = true
            skip_wired = true

            [[widgets]]
            name = "Blue"

            [[widgets]]
            name = "Green"
            routed = false
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.widgets,
            vec![WidgetConfig::new("Blue", true), WidgetConfig::new("Green", false)]
        );
        assert_eq!(config.clicks, vec!["Blue".to_string(), "Green".to_string()]);
        assert_eq!(config.log_filter, default_log_filter());

        let router = config.router_config();
        assert_eq!(router.duplicate_policy, DuplicatePolicy::Reject);
        assert_eq!(router.setup_policy, SetupPolicy::SkipWired);
    }

    #[test]
    fn test_config_from_missing_file() {
        let err = Config::from_file("/nonexistent/dockwire.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
