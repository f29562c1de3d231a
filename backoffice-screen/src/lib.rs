//! # Backoffice Screen
//!
//! The screen-policy resolver for the Backoffice admin console: given a
//! resource name, a typed [`Configuration`], and a [`RoleStore`] carrying
//! the viewer's role, it decides what a CRUD screen renders.
//!
//! ## Overview
//!
//! The backoffice-screen crate handles:
//! - **Action gates**: Is list/show/edit/create/delete/filter rendered for
//!   the current role, including compact-device fallback
//! - **Collection**: The ordered, classified, tab-partitioned property lists
//!   of a screen
//! - **Selection**: Mapping each property to its configured renderable, with
//!   the built-in full-text search input for `"q"` on filter screens
//! - **Assembly**: Whole-screen construction with stable keys and tab labels
//!
//! ## Data flow
//!
//! ```text
//! Resolver::build(action)
//!   ├─ RoleStore::get(role_storage_key)        (fresh read, every call)
//!   ├─ action gate (tri-state + compact fallback)
//!   ├─ collect: props list ─→ classified descriptors ─→ tab groups
//!   └─ select:  descriptor ─→ Renderable ─→ Keyed ─→ Screen
//! ```
//!
//! All of it is synchronous, pure computation over the shared read-only
//! configuration plus one storage read per public call. Nothing is cached,
//! so switching the role in the store (impersonation, test harnesses) takes
//! effect on the next call.
//!
//! ## Usage
//!
//! ```rust
//! use backoffice_config::Configuration;
//! use backoffice_policy::Action;
//! use backoffice_screen::{MemoryRoleStore, Resolver, Screen};
//! use serde_json::json;
//!
//! let config = Configuration::from_value(json!({
//!     "resources": {
//!         "Post": {
//!             "props": { "title": { "input": "TextInput" } },
//!             "roles": {
//!                 "editor": { "edit": { "action": true, "props": ["title"] } }
//!             }
//!         }
//!     }
//! })).unwrap();
//!
//! let store = MemoryRoleStore::new();
//! store.set("user_role", "editor");
//!
//! let resolver = Resolver::new("Post", &config, &store);
//! assert!(resolver.can(Action::Edit));
//! match resolver.build(Action::Edit.into()) {
//!     Screen::Flat(items) => assert_eq!(items.len(), 1),
//!     other => panic!("expected a flat screen, got {other:?}"),
//! }
//! ```

pub mod renderable;
pub mod resolver;
pub mod store;

// Re-export main types for convenience
pub use renderable::{Keyed, Renderable, Screen, Tab};
pub use resolver::{Resolver, SEARCH_PROPERTY};
pub use store::{MemoryRoleStore, RoleStore};

// Re-exported so consumers can depend on this crate alone.
pub use backoffice_config::Configuration;
pub use backoffice_policy::{Action, Classification, PolicyDecision, PropertyDescriptor, ScreenAction};
