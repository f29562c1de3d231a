//! # Configuration schema
//!
//! The typed form of the externally supplied screen configuration. The
//! document is deserialized and validated once; afterwards every policy
//! question is a plain lookup that bottoms out in a tri-state
//! [`PolicyDecision`] instead of a chain of existence checks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use backoffice_policy::{Classification, PolicyDecision, ScreenAction};

use crate::error::{ConfigError, ConfigResult};
use crate::settings::ResolverSettings;

/// Opaque reference to a UI-library component.
///
/// The policy layer never interprets the referenced component; it only
/// selects one per (resource, property, classification) and forwards it to
/// the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    /// Create a component reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the referenced component identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ComponentRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Renderable components registered for one property, keyed by render mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropRenderables {
    /// Component used when the property renders as a read-only field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<ComponentRef>,

    /// Component used when the property renders as an editable input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<ComponentRef>,
}

impl PropRenderables {
    /// Get the component registered for a classification.
    ///
    /// `Hidden` never has a component.
    pub fn for_classification(&self, classification: Classification) -> Option<&ComponentRef> {
        match classification {
            Classification::Field => self.field.as_ref(),
            Classification::Input => self.input.as_ref(),
            Classification::Hidden => None,
        }
    }
}

/// Policy for one (role, action) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRule {
    /// Tri-state policy flag. Absent means the action policy is
    /// unspecified, which is distinct from an explicit `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<bool>,

    /// Ordered property names for the action. Order defines render order
    /// and tab membership; the tab delimiter may appear as a sentinel entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub props: Vec<String>,

    /// Ordered tab labels, index-aligned to the tab groups of `props`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tabs: Vec<String>,
}

impl ActionRule {
    /// The tri-state decision carried by this rule's `action` flag.
    pub fn policy(&self) -> PolicyDecision {
        PolicyDecision::from_flag(self.action)
    }
}

/// Action rules configured for one role on one resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RoleGrants {
    /// Rule per screen action (including compact variants).
    pub actions: HashMap<ScreenAction, ActionRule>,
}

impl RoleGrants {
    /// Get the rule for a screen action, if configured.
    pub fn rule(&self, action: ScreenAction) -> Option<&ActionRule> {
        self.actions.get(&action)
    }
}

/// Screen configuration for one resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Component registry: property name to its renderables.
    #[serde(default)]
    pub props: HashMap<String, PropRenderables>,

    /// Role grants: role name to its action rules.
    #[serde(default)]
    pub roles: HashMap<String, RoleGrants>,
}

impl ResourceConfig {
    /// Get the renderables registered for a property.
    pub fn renderables(&self, property: &str) -> Option<&PropRenderables> {
        self.props.get(property)
    }

    /// Get the grants configured for a role.
    pub fn grants(&self, role: &str) -> Option<&RoleGrants> {
        self.roles.get(role)
    }

    /// Get the rule for a (role, action) pair, if configured.
    pub fn rule(&self, role: &str, action: ScreenAction) -> Option<&ActionRule> {
        self.grants(role).and_then(|grants| grants.rule(action))
    }

    /// Resolve the action policy for a (role, action) pair.
    ///
    /// Returns [`PolicyDecision::Unspecified`] when the role, the action
    /// rule, or the rule's `action` flag is absent at any level. No
    /// device-variant fallback happens here; that is the resolver's job.
    pub fn action_policy(&self, role: &str, action: ScreenAction) -> PolicyDecision {
        match self.rule(role, action) {
            Some(rule) => rule.policy(),
            None => PolicyDecision::Unspecified,
        }
    }
}

/// The complete screen configuration for an application session.
///
/// Constructed once, validated once, then read-only for the lifetime of
/// every resolver built on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Configuration {
    /// Global resolver settings.
    #[serde(default)]
    pub settings: ResolverSettings,

    /// Per-resource configuration, keyed by resource name.
    #[serde(default)]
    pub resources: HashMap<String, ResourceConfig>,
}

impl Configuration {
    /// Deserialize and validate a configuration from a JSON value.
    ///
    /// # Example
    ///
    /// ```
    /// use backoffice_config::Configuration;
    /// use serde_json::json;
    ///
    /// let config = Configuration::from_value(json!({
    ///     "settings": { "tab_delimiter": "---" },
    ///     "resources": {}
    /// })).unwrap();
    /// assert_eq!(config.settings.tab_delimiter, "---");
    /// ```
    pub fn from_value(value: serde_json::Value) -> ConfigResult<Self> {
        let config: Configuration = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Deserialize and validate a configuration from a JSON string.
    pub fn from_json_str(document: &str) -> ConfigResult<Self> {
        let config: Configuration = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Checks the settings sentinels: all three must be non-empty, and the
    /// read-only prefix must differ from the tab delimiter (a shared token
    /// could not be told apart inside a property list).
    pub fn validate(&self) -> ConfigResult<()> {
        if self.settings.role_storage_key.is_empty() {
            return Err(ConfigError::EmptySetting("role_storage_key"));
        }
        if self.settings.tab_delimiter.is_empty() {
            return Err(ConfigError::EmptySetting("tab_delimiter"));
        }
        if self.settings.read_only_prefix.is_empty() {
            return Err(ConfigError::EmptySetting("read_only_prefix"));
        }
        if self.settings.read_only_prefix == self.settings.tab_delimiter {
            return Err(ConfigError::PrefixDelimiterClash);
        }
        Ok(())
    }

    /// Get the configuration for a resource, if present.
    pub fn resource(&self, name: &str) -> Option<&ResourceConfig> {
        self.resources.get(name)
    }
}
