//! Global resolver settings
//!
//! Three knobs shared by every resource: where the viewer's role is stored,
//! which sentinel token splits a property list into tabs, and which prefix
//! marks a property as read-only on edit/create screens.

use serde::{Deserialize, Serialize};

/// Global settings for screen-policy resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Storage key under which the viewer's current role is kept.
    #[serde(default = "default_role_storage_key")]
    pub role_storage_key: String,

    /// Sentinel property name marking a tab boundary in a property list.
    /// Never rendered as a property.
    #[serde(default = "default_tab_delimiter")]
    pub tab_delimiter: String,

    /// Prefix marking a property as read-only in edit/create property lists.
    #[serde(default = "default_read_only_prefix")]
    pub read_only_prefix: String,
}

fn default_role_storage_key() -> String {
    "user_role".to_string()
}

fn default_tab_delimiter() -> String {
    "DELIMITER".to_string()
}

fn default_read_only_prefix() -> String {
    "_".to_string()
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            role_storage_key: default_role_storage_key(),
            tab_delimiter: default_tab_delimiter(),
            read_only_prefix: default_read_only_prefix(),
        }
    }
}
