//! # Property classification
//!
//! Decides how a single property is rendered for a given action: not at all,
//! as a read-only display field, or as an editable input.
//!
//! There is exactly one source of truth here. [`classify_property`] answers
//! point lookups ("how would `author` render on the edit screen?") and
//! [`classify_entry`] derives the classification of one literal entry while
//! walking a configured property list. Both apply the same rules, so a bulk
//! pass over a list and a single-property query can never disagree.

use serde::{Deserialize, Serialize};

use crate::actions::ScreenAction;

/// Per-property render mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// The property is not rendered.
    Hidden,

    /// Read-only display.
    Field,

    /// Editable input.
    Input,
}

impl Classification {
    /// Get the string representation of the classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Hidden => "hidden",
            Classification::Field => "field",
            Classification::Input => "input",
        }
    }

    /// Parse a classification from its string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hidden" => Some(Classification::Hidden),
            "field" => Some(Classification::Field),
            "input" => Some(Classification::Input),
            _ => None,
        }
    }

    /// Check if the property is suppressed entirely.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Classification::Hidden)
    }

    /// Check if the property renders at all.
    pub fn is_visible(&self) -> bool {
        !self.is_hidden()
    }
}

/// A property name with its resolved render mode.
///
/// Produced by the collector while walking a configured property list,
/// consumed by the renderable selector. Derived and ephemeral; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name, with any read-only prefix already stripped.
    pub name: String,
    /// Resolved render mode.
    pub classification: Classification,
}

impl PropertyDescriptor {
    /// Create a read-only field descriptor.
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classification: Classification::Field,
        }
    }

    /// Create an editable input descriptor.
    pub fn input(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classification: Classification::Input,
        }
    }
}

/// Classify `property` against the ordered property list configured for an
/// action.
///
/// Precedence:
/// 1. An empty or missing list hides everything.
/// 2. Form actions (edit/create): the read-only-prefixed name in the list
///    forces `Field`; the bare name yields `Input`; otherwise `Hidden`.
/// 3. Filter: a listed property is an `Input`.
/// 4. Any other action: a listed property is a `Field`.
///
/// The compact flag of `action` does not change classification; it only
/// matters for action-gate resolution.
///
/// # Example
///
/// ```
/// use backoffice_policy::{Action, Classification, ScreenAction};
/// use backoffice_policy::classify::classify_property;
///
/// let entries = vec!["title".to_string(), "_author".to_string()];
///
/// let edit = ScreenAction::new(Action::Edit);
/// assert_eq!(classify_property(edit, &entries, "author", "_"), Classification::Field);
///
/// let show = ScreenAction::new(Action::Show);
/// assert_eq!(classify_property(show, &entries, "title", "_"), Classification::Field);
/// assert_eq!(classify_property(show, &entries, "author", "_"), Classification::Hidden);
/// ```
pub fn classify_property(
    action: ScreenAction,
    entries: &[String],
    property: &str,
    read_only_prefix: &str,
) -> Classification {
    let contains = |name: &str| entries.iter().any(|e| e == name);

    if action.action.is_form() {
        let prefixed = format!("{read_only_prefix}{property}");
        if contains(&prefixed) {
            Classification::Field
        } else if contains(property) {
            Classification::Input
        } else {
            Classification::Hidden
        }
    } else if contains(property) {
        if action.action.is_filter() {
            Classification::Input
        } else {
            Classification::Field
        }
    } else {
        Classification::Hidden
    }
}

/// Derive the descriptor for one literal entry of a configured property list.
///
/// Form actions strip the read-only prefix and classify the remainder as a
/// `Field`; unprefixed entries are `Input`s. Filter entries are always
/// `Input`s, and every other action renders listed entries as `Field`s.
///
/// Classification depends on the literal string being visited: a list that
/// carries both `_name` and `name` yields one field descriptor and one input
/// descriptor for the same underlying property.
pub fn classify_entry(
    action: ScreenAction,
    entry: &str,
    read_only_prefix: &str,
) -> PropertyDescriptor {
    if action.action.is_form() {
        match entry.strip_prefix(read_only_prefix) {
            Some(stripped) => PropertyDescriptor::field(stripped),
            None => PropertyDescriptor::input(entry),
        }
    } else if action.action.is_filter() {
        PropertyDescriptor::input(entry)
    } else {
        PropertyDescriptor::field(entry)
    }
}
