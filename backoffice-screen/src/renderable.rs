//! Renderable handles and assembled screens
//!
//! The resolver never instantiates UI components. It selects opaque
//! [`ComponentRef`]s from the configuration (or the one built-in search
//! input), assigns each a stable key, and hands the result to the rendering
//! layer as a [`Screen`].

use serde::{Deserialize, Serialize};

use backoffice_config::ComponentRef;

/// A renderable selected for one property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Renderable {
    /// A component from the per-resource registry.
    Component(ComponentRef),

    /// The built-in full-text search input for the `"q"` filter property.
    Search,
}

impl Renderable {
    /// Check if this is the built-in search input.
    pub fn is_search(&self) -> bool {
        matches!(self, Renderable::Search)
    }

    /// Get the configured component, if this is not the built-in search.
    pub fn component(&self) -> Option<&ComponentRef> {
        match self {
            Renderable::Component(c) => Some(c),
            Renderable::Search => None,
        }
    }
}

/// A renderable with its assembly-assigned key.
///
/// Keys are assigned by [`Resolver::build`](crate::Resolver::build) with a
/// counter that is monotonic across the whole call, so every element of a
/// screen (tabbed or flat) gets a distinct stable key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Keyed {
    /// Stable key, unique within one assembled screen.
    pub key: usize,
    /// The selected renderable.
    pub renderable: Renderable,
}

/// One tab of a tabbed screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tab {
    /// Label from the configured tab list, or the positional default.
    pub label: String,
    /// Renderables of this tab, in configured order.
    pub items: Vec<Keyed>,
}

/// An assembled screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Nothing to render.
    Empty,

    /// A single ungrouped screen, no tab chrome.
    Flat(Vec<Keyed>),

    /// Two or more tab groups.
    Tabbed(Vec<Tab>),
}

impl Screen {
    /// Check if the screen renders nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Screen::Empty)
    }

    /// Total number of renderables across the screen.
    pub fn len(&self) -> usize {
        match self {
            Screen::Empty => 0,
            Screen::Flat(items) => items.len(),
            Screen::Tabbed(tabs) => tabs.iter().map(|t| t.items.len()).sum(),
        }
    }
}
