//! # Backoffice Configuration
//!
//! Strongly-typed screen configuration for the Backoffice admin console.
//!
//! ## Overview
//!
//! The backoffice-config crate handles:
//! - **Schema**: Per-resource component registry and per-role action rules
//! - **Settings**: Global knobs (role storage key, tab delimiter, read-only prefix)
//! - **Validation**: One-shot checks at construction; everything downstream
//!   is a plain typed lookup
//!
//! ## Architecture
//!
//! ```text
//! Configuration
//!   ├─ ResolverSettings (role_storage_key, tab_delimiter, read_only_prefix)
//!   └─ resources: name ─→ ResourceConfig
//!                           ├─ props: property ─→ PropRenderables (field / input)
//!                           └─ roles: role ─→ RoleGrants
//!                                               └─ ScreenAction ─→ ActionRule
//!                                                     (action flag, props, tabs)
//! ```
//!
//! A configuration is supplied externally (typically as JSON), deserialized
//! and validated once per application session, and treated as read-only for
//! the lifetime of every resolver built on top of it.
//!
//! ## Usage
//!
//! ```rust
//! use backoffice_config::Configuration;
//! use backoffice_policy::{Action, PolicyDecision, ScreenAction};
//! use serde_json::json;
//!
//! let config = Configuration::from_value(json!({
//!     "resources": {
//!         "Post": {
//!             "props": { "title": { "input": "TextInput", "field": "TextField" } },
//!             "roles": {
//!                 "editor": { "edit": { "action": true, "props": ["title"] } }
//!             }
//!         }
//!     }
//! })).unwrap();
//!
//! let post = config.resource("Post").unwrap();
//! let edit = ScreenAction::new(Action::Edit);
//! assert_eq!(post.action_policy("editor", edit), PolicyDecision::Granted);
//! assert_eq!(post.action_policy("intern", edit), PolicyDecision::Unspecified);
//! ```

pub mod error;
pub mod schema;
pub mod settings;

// Re-export main types for convenience
pub use error::{ConfigError, ConfigResult};
pub use schema::{ActionRule, ComponentRef, Configuration, PropRenderables, ResourceConfig, RoleGrants};
pub use settings::ResolverSettings;
