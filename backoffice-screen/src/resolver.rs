//! # Screen-policy resolver
//!
//! One resolver per resource. Every public operation re-reads the viewer's
//! role from the [`RoleStore`](crate::RoleStore) and recomputes its answer
//! from the configuration; nothing is cached and nothing is mutated. The
//! `*_for_role` variants take the role explicitly, for callers that already
//! hold it (and for tests).

use tracing::{debug, trace};

use backoffice_config::{ActionRule, Configuration, ResolverSettings, ResourceConfig};
use backoffice_policy::classify::{classify_entry, classify_property};
use backoffice_policy::tabs::{flatten, split_groups};
use backoffice_policy::{Action, Classification, PolicyDecision, PropertyDescriptor, ScreenAction};

use crate::renderable::{Keyed, Renderable, Screen, Tab};
use crate::store::RoleStore;

/// Property name carrying the built-in full-text search input on filter
/// screens. Never looked up in the component registry.
pub const SEARCH_PROPERTY: &str = "q";

/// Resolves the screen policy of one resource.
///
/// Borrows the session-wide [`Configuration`] and the [`RoleStore`]; it is
/// cheap to construct one per screen render.
pub struct Resolver<'a> {
    resource: String,
    config: &'a Configuration,
    store: &'a dyn RoleStore,
}

impl<'a> Resolver<'a> {
    /// Create a resolver for `resource`.
    ///
    /// A resource missing from the configuration is not an error; every
    /// query on it resolves to "nothing visible".
    pub fn new(resource: impl Into<String>, config: &'a Configuration, store: &'a dyn RoleStore) -> Self {
        Self {
            resource: resource.into(),
            config,
            store,
        }
    }

    /// The resource this resolver answers for.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The global settings in effect.
    pub fn settings(&self) -> &ResolverSettings {
        &self.config.settings
    }

    /// Read the viewer's current role from the store.
    ///
    /// Read fresh on every resolution call; switching the role in the
    /// store takes effect on the next call.
    pub fn current_role(&self) -> Option<String> {
        self.store.get(&self.config.settings.role_storage_key)
    }

    fn resource_config(&self) -> Option<&ResourceConfig> {
        self.config.resource(&self.resource)
    }

    fn rule(&self, role: &str, action: ScreenAction) -> Option<&ActionRule> {
        self.resource_config()
            .and_then(|resource| resource.rule(role, action))
    }

    /// Read the role, degrading an absent role to one with no grants.
    fn effective_role(&self) -> String {
        match self.current_role() {
            Some(role) => role,
            None => {
                debug!(
                    resource = %self.resource,
                    key = %self.config.settings.role_storage_key,
                    "no role in store"
                );
                String::new()
            }
        }
    }

    // ---------- Action gate ----------

    /// Raw action-policy lookup for (role, action), without device fallback.
    pub fn action_policy(&self, role: &str, action: ScreenAction) -> PolicyDecision {
        match self.resource_config() {
            Some(resource) => resource.action_policy(role, action),
            None => PolicyDecision::Unspecified,
        }
    }

    /// Resolve the action policy, applying the compact-device fallback.
    ///
    /// A compact action (`show_mobile`, ...) falls back to its base action
    /// only when the variant is truly unconfigured; an explicit denial of
    /// the variant stands.
    ///
    /// # Example
    ///
    /// ```
    /// use backoffice_config::Configuration;
    /// use backoffice_policy::{Action, PolicyDecision, ScreenAction};
    /// use backoffice_screen::{MemoryRoleStore, Resolver};
    /// use serde_json::json;
    ///
    /// let config = Configuration::from_value(json!({
    ///     "resources": {
    ///         "Post": {
    ///             "roles": { "editor": { "show": { "action": true } } }
    ///         }
    ///     }
    /// })).unwrap();
    /// let store = MemoryRoleStore::new();
    /// let resolver = Resolver::new("Post", &config, &store);
    ///
    /// // show_mobile is unconfigured, so it inherits show
    /// let compact = ScreenAction::compact(Action::Show);
    /// assert_eq!(resolver.resolve_action("editor", compact), PolicyDecision::Granted);
    /// ```
    pub fn resolve_action(&self, role: &str, action: ScreenAction) -> PolicyDecision {
        let direct = self.action_policy(role, action);
        if action.compact {
            direct.or_fallback(|| self.action_policy(role, action.base()))
        } else {
            direct
        }
    }

    /// Check whether the action renders for an explicit role.
    ///
    /// Denied and unspecified are both non-granting.
    pub fn allows_for_role(&self, role: &str, action: ScreenAction) -> bool {
        self.resolve_action(role, action).is_granted()
    }

    /// Check whether the action renders for the stored role.
    pub fn allows(&self, action: ScreenAction) -> bool {
        self.allows_for_role(&self.effective_role(), action)
    }

    /// Gate for an action button (create/edit/delete/show/list) or screen.
    pub fn can(&self, action: Action) -> bool {
        self.allows(ScreenAction::new(action))
    }

    /// Gate for the compact-device variant of an action.
    pub fn can_compact(&self, action: Action) -> bool {
        self.allows(ScreenAction::compact(action))
    }

    /// Whether the navigation menu links to this resource (the list gate).
    pub fn menu_visible(&self) -> bool {
        self.can(Action::List)
    }

    /// Whether the list screen offers filtering (the filter gate).
    pub fn filter_enabled(&self) -> bool {
        self.can(Action::Filter)
    }

    // ---------- Property classifier ----------

    /// Classify a property for an explicit role.
    pub fn classify_for_role(
        &self,
        role: &str,
        action: ScreenAction,
        property: &str,
    ) -> Classification {
        match self.rule(role, action) {
            Some(rule) => classify_property(
                action,
                &rule.props,
                property,
                &self.config.settings.read_only_prefix,
            ),
            None => Classification::Hidden,
        }
    }

    /// Classify a property for the stored role.
    pub fn classify(&self, action: ScreenAction, property: &str) -> Classification {
        self.classify_for_role(&self.effective_role(), action, property)
    }

    // ---------- Property collector ----------

    /// Ordered, classified property descriptors for an explicit role,
    /// delimiter sentinels excluded. Empty when nothing is configured.
    pub fn properties_for_role(&self, role: &str, action: ScreenAction) -> Vec<PropertyDescriptor> {
        let settings = &self.config.settings;
        match self.rule(role, action) {
            Some(rule) => flatten(&rule.props, &settings.tab_delimiter)
                .into_iter()
                .map(|entry| classify_entry(action, entry, &settings.read_only_prefix))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Ordered, classified property descriptors for the stored role.
    pub fn properties(&self, action: ScreenAction) -> Vec<PropertyDescriptor> {
        self.properties_for_role(&self.effective_role(), action)
    }

    /// The tab groups of an action's property list for an explicit role.
    ///
    /// Always at least one group; a single group means the screen renders
    /// flat, without tab chrome.
    pub fn tab_groups_for_role(
        &self,
        role: &str,
        action: ScreenAction,
    ) -> Vec<Vec<PropertyDescriptor>> {
        let settings = &self.config.settings;
        match self.rule(role, action) {
            Some(rule) => split_groups(&rule.props, &settings.tab_delimiter)
                .into_iter()
                .map(|group| {
                    group
                        .into_iter()
                        .map(|entry| classify_entry(action, entry, &settings.read_only_prefix))
                        .collect()
                })
                .collect(),
            None => vec![Vec::new()],
        }
    }

    /// The tab groups of an action's property list for the stored role.
    pub fn tab_groups(&self, action: ScreenAction) -> Vec<Vec<PropertyDescriptor>> {
        self.tab_groups_for_role(&self.effective_role(), action)
    }

    /// The descriptors of one tab group, or `None` when `index` is out of
    /// range.
    pub fn tab_properties_for_role(
        &self,
        role: &str,
        action: ScreenAction,
        index: usize,
    ) -> Option<Vec<PropertyDescriptor>> {
        let mut groups = self.tab_groups_for_role(role, action);
        if index < groups.len() {
            Some(groups.swap_remove(index))
        } else {
            None
        }
    }

    /// The descriptors of one tab group for the stored role.
    pub fn tab_properties(
        &self,
        action: ScreenAction,
        index: usize,
    ) -> Option<Vec<PropertyDescriptor>> {
        self.tab_properties_for_role(&self.effective_role(), action, index)
    }

    /// Number of tab groups for an explicit role.
    pub fn tab_count_for_role(&self, role: &str, action: ScreenAction) -> usize {
        self.tab_groups_for_role(role, action).len()
    }

    /// Number of tab groups for the stored role.
    pub fn tab_count(&self, action: ScreenAction) -> usize {
        self.tab_count_for_role(&self.effective_role(), action)
    }

    // ---------- Renderable selector ----------

    /// Select the renderable for one property, for an explicit role.
    ///
    /// The `"q"` property on filter screens always yields the built-in
    /// search input, independent of configuration and of the action gate.
    /// Otherwise: a missing `classification` is derived from the property
    /// list, hidden properties and non-granted actions yield `None`, and
    /// the component registry decides the rest.
    pub fn select_for_role(
        &self,
        role: &str,
        action: ScreenAction,
        property: &str,
        classification: Option<Classification>,
    ) -> Option<Renderable> {
        if property == SEARCH_PROPERTY && action.action.is_filter() {
            return Some(Renderable::Search);
        }

        let classification =
            classification.unwrap_or_else(|| self.classify_for_role(role, action, property));
        if classification.is_hidden() {
            return None;
        }

        if !self.resolve_action(role, action).is_granted() {
            debug!(
                resource = %self.resource,
                action = %action,
                role,
                "action not granted; nothing rendered"
            );
            return None;
        }

        match self
            .resource_config()
            .and_then(|resource| resource.renderables(property))
            .and_then(|renderables| renderables.for_classification(classification))
        {
            Some(component) => Some(Renderable::Component(component.clone())),
            None => {
                trace!(
                    resource = %self.resource,
                    property,
                    classification = classification.as_str(),
                    "no renderable registered"
                );
                None
            }
        }
    }

    /// Select the renderable for one property, for the stored role.
    pub fn select(&self, action: ScreenAction, property: &str) -> Option<Renderable> {
        self.select_for_role(&self.effective_role(), action, property, None)
    }

    // ---------- Screen assembly ----------

    /// Assemble the whole screen for an explicit role.
    ///
    /// Collects the tab groups, selects a renderable per descriptor, and
    /// assigns keys from a counter monotonic across the whole call. One
    /// group renders flat; several render as tabs labeled from the rule's
    /// `tabs` list or the positional default `"Tab <N>"`.
    ///
    /// If any group maps to zero renderables the whole screen is
    /// [`Screen::Empty`]: a screen with a dead tab is treated as
    /// misconfigured rather than rendered with the tab missing.
    pub fn build_for_role(&self, role: &str, action: ScreenAction) -> Screen {
        let groups = self.tab_groups_for_role(role, action);
        let labels = self
            .rule(role, action)
            .map(|rule| rule.tabs.as_slice())
            .unwrap_or(&[]);

        let mut key = 0usize;
        let mut assembled: Vec<Vec<Keyed>> = Vec::with_capacity(groups.len());
        for group in &groups {
            let mut items = Vec::with_capacity(group.len());
            for descriptor in group {
                if let Some(renderable) = self.select_for_role(
                    role,
                    action,
                    &descriptor.name,
                    Some(descriptor.classification),
                ) {
                    items.push(Keyed { key, renderable });
                    key += 1;
                }
            }
            assembled.push(items);
        }

        if assembled.iter().any(|items| items.is_empty()) {
            debug!(
                resource = %self.resource,
                action = %action,
                role,
                "a tab group resolved to nothing; screen suppressed"
            );
            return Screen::Empty;
        }

        if assembled.len() == 1 {
            return Screen::Flat(assembled.pop().unwrap_or_default());
        }

        let tabs = assembled
            .into_iter()
            .enumerate()
            .map(|(index, items)| Tab {
                label: labels
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("Tab {}", index + 1)),
                items,
            })
            .collect();
        Screen::Tabbed(tabs)
    }

    /// Assemble the whole screen for the stored role.
    pub fn build(&self, action: ScreenAction) -> Screen {
        self.build_for_role(&self.effective_role(), action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRoleStore;
    use serde_json::json;

    fn config() -> Configuration {
        Configuration::from_value(json!({
            "resources": {
                "Post": {
                    "props": {
                        "title": { "field": "TextField", "input": "TextInput" },
                        "author": { "field": "ReferenceField" }
                    },
                    "roles": {
                        "editor": {
                            "edit": { "action": true, "props": ["title", "_author"] },
                            "show": { "action": true, "props": ["title", "author"] },
                            "show_mobile": { "action": false },
                            "list": { "action": true, "props": ["title"] }
                        }
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_gate_for_unknown_resource() {
        let config = config();
        let store = MemoryRoleStore::new();
        let resolver = Resolver::new("Comment", &config, &store);
        assert_eq!(
            resolver.action_policy("editor", ScreenAction::new(Action::Edit)),
            PolicyDecision::Unspecified
        );
    }

    #[test]
    fn test_compact_denial_does_not_fall_back() {
        let config = config();
        let store = MemoryRoleStore::new();
        let resolver = Resolver::new("Post", &config, &store);

        let compact_show = ScreenAction::compact(Action::Show);
        assert_eq!(
            resolver.resolve_action("editor", compact_show),
            PolicyDecision::Denied
        );

        // An unconfigured variant does fall back.
        let compact_list = ScreenAction::compact(Action::List);
        assert_eq!(
            resolver.resolve_action("editor", compact_list),
            PolicyDecision::Granted
        );
    }

    #[test]
    fn test_missing_role_in_store() {
        let config = config();
        let store = MemoryRoleStore::new();
        let resolver = Resolver::new("Post", &config, &store);

        assert_eq!(resolver.current_role(), None);
        assert!(!resolver.can(Action::Edit));
        assert!(resolver.properties(ScreenAction::new(Action::Edit)).is_empty());
        assert!(resolver.build(ScreenAction::new(Action::Edit)).is_empty());
    }

    #[test]
    fn test_select_derives_classification_when_not_supplied() {
        let config = config();
        let store = MemoryRoleStore::new();
        store.set("user_role", "editor");
        let resolver = Resolver::new("Post", &config, &store);

        let edit = ScreenAction::new(Action::Edit);
        assert_eq!(
            resolver.select(edit, "title"),
            Some(Renderable::Component("TextInput".into()))
        );
        // `_author` in the list classifies the bare name as a field.
        assert_eq!(
            resolver.select(edit, "author"),
            Some(Renderable::Component("ReferenceField".into()))
        );
        assert_eq!(resolver.select(edit, "body"), None);
    }

    #[test]
    fn test_build_flat_with_monotonic_keys() {
        let config = config();
        let store = MemoryRoleStore::new();
        store.set("user_role", "editor");
        let resolver = Resolver::new("Post", &config, &store);

        match resolver.build(ScreenAction::new(Action::Show)) {
            Screen::Flat(items) => {
                let keys: Vec<usize> = items.iter().map(|k| k.key).collect();
                assert_eq!(keys, vec![0, 1]);
            }
            other => panic!("expected flat screen, got {other:?}"),
        }
    }
}
