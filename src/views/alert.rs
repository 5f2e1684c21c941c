//! Dismissible alert banner.
//!
//! An alert is a two-state machine: it mounts `Shown` and a close action moves it
//! to `Closed`, which is terminal for that instance. A closed alert renders
//! nothing at all. The only way to show it again is to build a new one.

use std::fmt;

use super::escape;

/// Alert severity; selects the icon and its accessible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Information,
    Warning,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Information => "ℹ️",
            Severity::Warning => "⚠",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Information => "Information",
            Severity::Warning => "Warning",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "information" => Some(Severity::Information),
            "warning" => Some(Severity::Warning),
            _ => None,
        }
    }
}

/// One piece of child content.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Plain text, escaped on render.
    Text(String),
    /// Trusted markup, inserted verbatim.
    Markup(String),
    Integer(i64),
    /// Booleans render nothing.
    Bool(bool),
}

impl Child {
    fn render(&self) -> String {
        match self {
            Child::Text(text) => escape(text),
            Child::Markup(markup) => markup.clone(),
            Child::Integer(n) => n.to_string(),
            Child::Bool(_) => String::new(),
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<i64> for Child {
    fn from(n: i64) -> Self {
        Child::Integer(n)
    }
}

impl From<bool> for Child {
    fn from(b: bool) -> Self {
        Child::Bool(b)
    }
}

/// Callback fired when an alert is closed.
pub type OnClose = Box<dyn FnMut() + Send>;

/// Properties an alert is mounted with.
#[derive(Default)]
pub struct AlertProps {
    pub heading: String,
    pub severity: Severity,
    pub closable: bool,
    pub children: Vec<Child>,
    pub on_close: Option<OnClose>,
}

impl AlertProps {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            ..Self::default()
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn on_close(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for AlertProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertProps")
            .field("heading", &self.heading)
            .field("severity", &self.severity)
            .field("closable", &self.closable)
            .field("children", &self.children)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Visibility state of a mounted alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertState {
    Shown,
    Closed,
}

/// A mounted alert instance.
#[derive(Debug)]
pub struct Alert {
    props: AlertProps,
    state: AlertState,
}

impl Alert {
    pub fn new(props: AlertProps) -> Self {
        Self {
            props,
            state: AlertState::Shown,
        }
    }

    pub fn state(&self) -> AlertState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == AlertState::Shown
    }

    /// Perform the close action.
    ///
    /// Returns `false` if the alert is not closable or was already closed; the
    /// callback only fires on the transition.
    pub fn close(&mut self) -> bool {
        if !self.props.closable || self.state == AlertState::Closed {
            return false;
        }
        self.state = AlertState::Closed;
        if let Some(callback) = self.props.on_close.as_mut() {
            callback();
        }
        true
    }

    /// Render the alert, or `None` once it has been closed.
    pub fn render(&self) -> Option<String> {
        if !self.is_visible() {
            return None;
        }

        let props = &self.props;
        let mut html = String::from("<div>");
        html.push_str(&format!(
            r#"<div><span role="img" aria-label="{}">{}</span><span>{}</span></div>"#,
            props.severity.label(),
            props.severity.icon(),
            escape(&props.heading)
        ));
        if props.closable {
            html.push_str(
                r#"<a href="?dismissed=true" role="button" aria-label="Close"><span role="img" aria-label="Close">❌</span></a>"#,
            );
        }
        html.push_str("<div>");
        for child in &props.children {
            html.push_str(&child.render());
        }
        html.push_str("</div></div>");

        Some(html)
    }
}
