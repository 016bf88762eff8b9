//! Content widgets.
//!
//! A content widget is the demo's routable entity: a named panel with a text
//! cell. Clicking it announces its name; hearing another widget's click
//! rewrites the text cell.

use crate::metrics;
use anyhow::Result;
use dockwire_core::{EntityId, Inbound, Outbound, Routable, Signal, SignalKind};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Signals exchanged between content widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidgetSignal {
    /// A widget was clicked; the payload is its name.
    WidgetClicked,
}

impl SignalKind for WidgetSignal {
    fn name(self) -> &'static str {
        match self {
            Self::WidgetClicked => "widgetClicked",
        }
    }
}

/// A named panel that emits and reacts to clicks.
#[derive(Debug)]
pub struct ContentWidget {
    id: EntityId,
    name: String,
    caption: String,
    content: Rc<RefCell<String>>,
    clicked: Signal,
    outbound: Outbound<WidgetSignal>,
    inbound: Inbound<WidgetSignal>,
}

impl ContentWidget {
    /// Create a widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget's signal tables cannot be built.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let id = EntityId::next();

        let mut outbound = Outbound::new(id);
        let clicked = outbound.declare(WidgetSignal::WidgetClicked)?;

        let content = Rc::new(RefCell::new(String::new()));
        let mut inbound = Inbound::new();
        let cell = Rc::clone(&content);
        let receiver = name.clone();
        inbound.bind(WidgetSignal::WidgetClicked, move |sender, value| {
            debug!(widget = %receiver, %sender, value, "Widget click received");
            metrics::record_delivery(&receiver);
            *cell.borrow_mut() = format!("The widget with name {value} was clicked");
        })?;

        Ok(Self {
            id,
            caption: format!("Long description for: {name}"),
            name,
            content,
            clicked,
            outbound,
            inbound,
        })
    }

    /// Widget name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tab caption.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Current text content.
    #[must_use]
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    /// Simulate a click, emitting the widget's name.
    ///
    /// Returns the number of handlers reached.
    pub fn click(&self) -> usize {
        metrics::record_click(&self.name);
        self.clicked.emit(&self.name)
    }
}

impl Routable<WidgetSignal> for ContentWidget {
    fn id(&self) -> EntityId {
        self.id
    }

    fn outbound(&self) -> &Outbound<WidgetSignal> {
        &self.outbound
    }

    fn inbound(&self) -> &Inbound<WidgetSignal> {
        &self.inbound
    }

    fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
