//! View switch between the entry form and the contact list.

use std::fmt;
use std::str::FromStr;

/// The two screens. Nothing else is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Form,
    Gallery,
}

impl View {
    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            View::Form => "Form",
            View::Gallery => "Contact List",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "form" => Ok(View::Form),
            "list" | "cards" | "gallery" => Ok(View::Gallery),
            other => Err(format!("unknown view '{}', expected 'form' or 'list'", other)),
        }
    }
}

/// Holds the currently displayed view.
///
/// Selecting a view has no side effects beyond changing the selection.
#[derive(Debug, Clone, Default)]
pub struct ViewSwitch {
    current: View,
}

impl ViewSwitch {
    pub fn new(initial: View) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Select `view`, returning the previously selected one.
    pub fn select(&mut self, view: View) -> View {
        let previous = std::mem::replace(&mut self.current, view);
        if previous != view {
            tracing::debug!(from = %previous, to = %view, "View switched");
        }
        previous
    }

    /// Navigation bar with the active entry bracketed.
    pub fn render_nav(&self) -> String {
        [View::Form, View::Gallery]
            .iter()
            .map(|&view| {
                if view == self.current {
                    format!("[ {} ]", view.label())
                } else {
                    format!("  {}  ", view.label())
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_form() {
        assert_eq!(View::default(), View::Form);
        assert_eq!(ViewSwitch::default().current(), View::Form);
    }

    #[test]
    fn test_view_from_str() {
        assert_eq!("form".parse::<View>(), Ok(View::Form));
        assert_eq!(" LIST ".parse::<View>(), Ok(View::Gallery));
        assert_eq!("cards".parse::<View>(), Ok(View::Gallery));
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_select_returns_previous() {
        let mut switch = ViewSwitch::new(View::Form);
        assert_eq!(switch.select(View::Gallery), View::Form);
        assert_eq!(switch.current(), View::Gallery);
        assert_eq!(switch.select(View::Gallery), View::Gallery);
    }

    #[test]
    fn test_render_nav_marks_active() {
        let mut switch = ViewSwitch::new(View::Form);
        assert!(switch.render_nav().contains("[ Form ]"));
        switch.select(View::Gallery);
        let nav = switch.render_nav();
        assert!(nav.contains("[ Contact List ]"));
        assert!(!nav.contains("[ Form ]"));
    }
}
