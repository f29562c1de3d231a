//! # Actions
//!
//! Defines the screen actions an admin console renders for a resource,
//! together with their compact-device variants.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Screen actions that can be rendered for a resource.
///
/// Actions correspond to the screens of a CRUD admin interface:
/// - **List**: Browse multiple records (also gates the navigation menu link)
/// - **Show**: View a single record
/// - **Edit**: Modify an existing record
/// - **Create**: Create a new record
/// - **Delete**: Remove a record
/// - **Filter**: Narrow the list with per-property filter inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Browse multiple records.
    List,

    /// View a single record.
    Show,

    /// Modify an existing record.
    Edit,

    /// Create a new record.
    Create,

    /// Remove a record.
    Delete,

    /// Narrow the list with filter inputs.
    Filter,
}

impl Action {
    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Show => "show",
            Action::Edit => "edit",
            Action::Create => "create",
            Action::Delete => "delete",
            Action::Filter => "filter",
        }
    }

    /// Parse an action from its string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive, supports aliases)
    ///
    /// # Example
    ///
    /// ```
    /// use backoffice_policy::actions::Action;
    ///
    /// assert_eq!(Action::parse("edit"), Some(Action::Edit));
    /// assert_eq!(Action::parse("view"), Some(Action::Show)); // Alias
    /// assert_eq!(Action::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "list" | "index" => Some(Action::List),
            "show" | "view" => Some(Action::Show),
            "edit" | "update" => Some(Action::Edit),
            "create" | "new" => Some(Action::Create),
            "delete" | "remove" => Some(Action::Delete),
            "filter" | "search" => Some(Action::Filter),
            _ => None,
        }
    }

    /// Get all actions.
    pub fn all() -> Vec<Self> {
        vec![
            Action::List,
            Action::Show,
            Action::Edit,
            Action::Create,
            Action::Delete,
            Action::Filter,
        ]
    }

    /// Check if this action renders an editable form.
    ///
    /// Form actions honor the read-only prefix on configured property names:
    /// a prefixed property renders as a display field inside the form.
    ///
    /// # Returns
    ///
    /// `true` for `Edit` and `Create`
    pub fn is_form(&self) -> bool {
        matches!(self, Action::Edit | Action::Create)
    }

    /// Check if this is the filter action.
    ///
    /// Filter screens render every configured property as an input.
    pub fn is_filter(&self) -> bool {
        matches!(self, Action::Filter)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An [`Action`] together with its device variant.
///
/// Compact layouts request the `<action>_mobile` variant of an action. A
/// variant that is not configured at all falls back to the base action at
/// resolution time; an explicitly configured variant (granted or denied)
/// stands on its own.
///
/// `ScreenAction` is the typed key of per-role action rules in the
/// configuration, so it serializes as its string form (`"show"`,
/// `"show_mobile"`).
///
/// # Example
///
/// ```
/// use backoffice_policy::{Action, ScreenAction};
///
/// let show = ScreenAction::new(Action::Show);
/// assert_eq!(show.as_str(), "show");
///
/// let compact = ScreenAction::compact(Action::Show);
/// assert_eq!(compact.as_str(), "show_mobile");
/// assert_eq!(compact.base(), show);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenAction {
    /// The action family.
    pub action: Action,
    /// Whether this is the compact-device variant.
    pub compact: bool,
}

/// Suffix marking the compact-device variant of an action.
const COMPACT_SUFFIX: &str = "_mobile";

impl ScreenAction {
    /// Create the regular (non-compact) variant of an action.
    pub fn new(action: Action) -> Self {
        Self {
            action,
            compact: false,
        }
    }

    /// Create the compact-device variant of an action.
    pub fn compact(action: Action) -> Self {
        Self {
            action,
            compact: true,
        }
    }

    /// Get the base (non-compact) form of this action.
    pub fn base(&self) -> Self {
        Self::new(self.action)
    }

    /// Get the string representation (`"edit"`, `"edit_mobile"`, ...).
    pub fn as_str(&self) -> &'static str {
        match (self.action, self.compact) {
            (Action::List, false) => "list",
            (Action::List, true) => "list_mobile",
            (Action::Show, false) => "show",
            (Action::Show, true) => "show_mobile",
            (Action::Edit, false) => "edit",
            (Action::Edit, true) => "edit_mobile",
            (Action::Create, false) => "create",
            (Action::Create, true) => "create_mobile",
            (Action::Delete, false) => "delete",
            (Action::Delete, true) => "delete_mobile",
            (Action::Filter, false) => "filter",
            (Action::Filter, true) => "filter_mobile",
        }
    }

    /// Parse a screen action from its string representation.
    ///
    /// # Example
    ///
    /// ```
    /// use backoffice_policy::{Action, ScreenAction};
    ///
    /// assert_eq!(ScreenAction::parse("edit"), Some(ScreenAction::new(Action::Edit)));
    /// assert_eq!(ScreenAction::parse("show_mobile"), Some(ScreenAction::compact(Action::Show)));
    /// assert_eq!(ScreenAction::parse("teleport"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(stripped) = s.strip_suffix(COMPACT_SUFFIX) {
            Action::parse(stripped).map(Self::compact)
        } else {
            Action::parse(s).map(Self::new)
        }
    }
}

impl From<Action> for ScreenAction {
    fn from(action: Action) -> Self {
        Self::new(action)
    }
}

impl fmt::Display for ScreenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown screen action `{s}`"))
    }
}

impl Serialize for ScreenAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScreenAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScreenActionVisitor;

        impl Visitor<'_> for ScreenActionVisitor {
            type Value = ScreenAction;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a screen action such as `edit` or `show_mobile`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ScreenAction, E> {
                ScreenAction::parse(value)
                    .ok_or_else(|| E::custom(format!("unknown screen action `{value}`")))
            }
        }

        deserializer.deserialize_str(ScreenActionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!(Action::parse("list"), Some(Action::List));
        assert_eq!(Action::parse("show"), Some(Action::Show));
        assert_eq!(Action::parse("view"), Some(Action::Show));
        assert_eq!(Action::parse("edit"), Some(Action::Edit));
        assert_eq!(Action::parse("update"), Some(Action::Edit));
        assert_eq!(Action::parse("create"), Some(Action::Create));
        assert_eq!(Action::parse("delete"), Some(Action::Delete));
        assert_eq!(Action::parse("filter"), Some(Action::Filter));
        assert_eq!(Action::parse("FILTER"), Some(Action::Filter));
        assert_eq!(Action::parse("invalid"), None);
    }

    #[test]
    fn test_action_as_str() {
        assert_eq!(Action::List.as_str(), "list");
        assert_eq!(Action::Show.as_str(), "show");
        assert_eq!(Action::Edit.as_str(), "edit");
        assert_eq!(Action::Create.as_str(), "create");
        assert_eq!(Action::Delete.as_str(), "delete");
        assert_eq!(Action::Filter.as_str(), "filter");
    }

    #[test]
    fn test_action_families() {
        assert!(Action::Edit.is_form());
        assert!(Action::Create.is_form());
        assert!(!Action::Show.is_form());
        assert!(!Action::Filter.is_form());

        assert!(Action::Filter.is_filter());
        assert!(!Action::List.is_filter());
    }

    #[test]
    fn test_all_actions_count() {
        assert_eq!(Action::all().len(), 6);
    }

    #[test]
    fn test_screen_action_round_trip() {
        for action in Action::all() {
            let regular = ScreenAction::new(action);
            assert_eq!(ScreenAction::parse(regular.as_str()), Some(regular));

            let compact = ScreenAction::compact(action);
            assert_eq!(ScreenAction::parse(compact.as_str()), Some(compact));
            assert_eq!(compact.base(), regular);
        }
    }

    #[test]
    fn test_screen_action_parse() {
        assert_eq!(
            ScreenAction::parse("show_mobile"),
            Some(ScreenAction::compact(Action::Show))
        );
        assert_eq!(
            ScreenAction::parse("edit"),
            Some(ScreenAction::new(Action::Edit))
        );
        assert_eq!(ScreenAction::parse("mobile"), None);
        assert_eq!(ScreenAction::parse("_mobile"), None);
        assert_eq!(ScreenAction::parse(""), None);
    }

    #[test]
    fn test_screen_action_serde() {
        let compact = ScreenAction::compact(Action::Delete);
        let json = serde_json::to_string(&compact).unwrap();
        assert_eq!(json, "\"delete_mobile\"");

        let parsed: ScreenAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, compact);

        assert!(serde_json::from_str::<ScreenAction>("\"bogus\"").is_err());
    }

    #[test]
    fn test_screen_action_as_map_key() {
        use std::collections::HashMap;

        let json = r#"{"edit": 1, "show_mobile": 2}"#;
        let map: HashMap<ScreenAction, u32> = serde_json::from_str(json).unwrap();
        assert_eq!(map[&ScreenAction::new(Action::Edit)], 1);
        assert_eq!(map[&ScreenAction::compact(Action::Show)], 2);
    }
}
