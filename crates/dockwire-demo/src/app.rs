//! Composition root.
//!
//! Builds the widgets and the router from configuration, wires them, and
//! drives simulated clicks. Nothing here is global; the [`App`] owns every
//! widget and the router for as long as the demo runs.

use crate::config::Config;
use crate::metrics;
use crate::widget::{ContentWidget, WidgetSignal};
use anyhow::{bail, Context, Result};
use dockwire_core::{Routable, SignalRouter};
use std::rc::Rc;
use tracing::{debug, info};

/// The demo application.
pub struct App {
    /// Widgets in creation order, routed or not.
    widgets: Vec<Rc<ContentWidget>>,
    /// Router holding the routed widgets.
    router: SignalRouter<WidgetSignal>,
}

impl App {
    /// Build widgets and router, then run the connection pass.
    ///
    /// # Errors
    ///
    /// Returns an error if a widget cannot be created or registered.
    pub fn build(config: &Config) -> Result<Self> {
        let mut router = SignalRouter::with_config(config.router_config());
        let mut widgets = Vec::with_capacity(config.widgets.len());

        for entry in &config.widgets {
            if entry.name.is_empty() {
                bail!("Widget name cannot be empty");
            }

            let widget = Rc::new(
                ContentWidget::new(entry.name.as_str())
                    .with_context(|| format!("Failed to create widget {}", entry.name))?,
            );

            if entry.routed {
                router
                    .register(Rc::clone(&widget) as Rc<dyn Routable<WidgetSignal>>)
                    .with_context(|| format!("Failed to register widget {}", entry.name))?;
            } else {
                debug!(widget = %entry.name, "Widget left unrouted");
            }

            widgets.push(widget);
        }

        router.setup();

        let stats = router.stats();
        metrics::record_router(&stats);
        info!(
            widgets = widgets.len(),
            routed = stats.entity_count,
            connections = stats.connection_count,
            "Widgets wired"
        );

        Ok(Self { widgets, router })
    }

    /// All widgets in creation order.
    #[must_use]
    pub fn widgets(&self) -> &[Rc<ContentWidget>] {
        &self.widgets
    }

    /// The router.
    #[must_use]
    pub fn router(&self) -> &SignalRouter<WidgetSignal> {
        &self.router
    }

    /// Click the first widget named `name`.
    ///
    /// Returns the number of handlers reached.
    ///
    /// # Errors
    ///
    /// Returns an error if no widget has that name.
    pub fn click(&self, name: &str) -> Result<usize> {
        let Some(widget) = self.widgets.iter().find(|w| w.name() == name) else {
            bail!("No widget named {name}");
        };

        let reached = widget.click();
        info!(widget = %name, reached, "Clicked");
        Ok(reached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;

    fn contents(app: &App) -> Vec<(String, String)> {
        app.widgets()
            .iter()
            .map(|w| (w.name().to_string(), w.content()))
            .collect()
    }

    fn widgets(names: &[(&str, bool)]) -> Vec<WidgetConfig> {
        names
            .iter()
            .map(|(name, routed)| WidgetConfig {
                name: name.to_string(),
                routed: *routed,
            })
            .collect()
    }

    #[test]
    fn test_app_default_wiring() {
        let app = App::build(&Config::default()).unwrap();

        assert_eq!(app.widgets().len(), 5);
        let stats = app.router().stats();
        assert_eq!(stats.entity_count, 4);
        // Four routed widgets, each emitting to the three others.
        assert_eq!(stats.connection_count, 12);
    }

    #[test]
    fn test_app_red_click_reaches_others() {
        let app = App::build(&Config::default()).unwrap();

        assert_eq!(app.click("Red").unwrap(), 3);

        let contents = contents(&app);
        let expected = "The widget with name Red was clicked";
        assert_eq!(contents[0], ("Red".to_string(), String::new()));
        assert_eq!(contents[1].1, expected);
        assert_eq!(contents[2].1, expected);
        assert_eq!(contents[3].1, expected);
        // The unrouted second Red tab hears nothing.
        assert_eq!(contents[4], ("Red".to_string(), String::new()));
    }

    #[test]
    fn test_app_latest_click_wins() {
        let config = Config {
            widgets: widgets(&[("Red", true), ("Blue", true), ("Green", true)]),
            ..Config::default()
        };
        let app = App::build(&config).unwrap();

        app.click("Red").unwrap();
        app.click("Blue").unwrap();

        let contents = contents(&app);
        assert_eq!(contents[0].1, "The widget with name Blue was clicked");
        assert_eq!(contents[1].1, "The widget with name Red was clicked");
        assert_eq!(contents[2].1, "The widget with name Blue was clicked");
    }

    #[test]
    fn test_app_unknown_widget() {
        let app = App::build(&Config::default()).unwrap();
        let err = app.click("Purple").unwrap_err();
        assert!(err.to_string().contains("No widget named Purple"));
    }

    #[test]
    fn test_app_rejects_empty_name() {
        let config = Config {
            widgets: widgets(&[("", true)]),
            ..Config::default()
        };
        assert!(App::build(&config).is_err());
    }

    #[test]
    fn test_app_no_routed_widgets() {
        let config = Config {
            widgets: widgets(&[("Red", false), ("Blue", false)]),
            ..Config::default()
        };
        let app = App::build(&config).unwrap();

        assert_eq!(app.click("Red").unwrap(), 0);
        assert!(contents(&app).iter().all(|(_, content)| content.is_empty()));
    }
}
