//! # Backoffice Policy
//!
//! This crate provides the screen-policy vocabulary for the Backoffice
//! admin console: which actions a screen can render, how a property is
//! displayed for a given action, and how a property list is partitioned
//! into tabs.
//!
//! ## Overview
//!
//! The backoffice-policy crate handles:
//! - **Actions**: The screen actions of a CRUD resource, with compact-device variants
//! - **Classifications**: Per-property render modes (hidden, read-only field, editable input)
//! - **Decisions**: Tri-state action-policy outcomes (granted, denied, unspecified)
//! - **Tabs**: Partitioning of ordered property lists on a delimiter sentinel
//!
//! ## Architecture
//!
//! ```text
//! (role, action, property list)  ──►  Classification per property
//! (role, action)                 ──►  PolicyDecision (tri-state)
//! property list + delimiter      ──►  ordered tab groups
//! ```
//!
//! Everything here is a pure function over its inputs. Configuration lookup
//! lives in `backoffice-config`; role storage and screen assembly live in
//! `backoffice-screen`.
//!
//! ## Usage
//!
//! ```rust
//! use backoffice_policy::{Action, Classification, ScreenAction};
//! use backoffice_policy::classify::classify_property;
//!
//! let edit = ScreenAction::new(Action::Edit);
//! let entries = vec!["title".to_string(), "_author".to_string()];
//!
//! // "title" appears bare: editable input
//! assert_eq!(classify_property(edit, &entries, "title", "_"), Classification::Input);
//! // "author" appears with the read-only prefix: display field
//! assert_eq!(classify_property(edit, &entries, "author", "_"), Classification::Field);
//! // anything else is not rendered at all
//! assert_eq!(classify_property(edit, &entries, "body", "_"), Classification::Hidden);
//! ```
//!
//! ## Compact-device variants
//!
//! Every action has a `<action>_mobile` variant for compact layouts. A
//! variant that is truly unconfigured falls back to its base action; an
//! explicitly denied variant does not. See [`decision::PolicyDecision`].

pub mod actions;
pub mod classify;
pub mod decision;
pub mod tabs;

// Re-export main types for convenience
pub use actions::{Action, ScreenAction};
pub use classify::{Classification, PropertyDescriptor};
pub use decision::PolicyDecision;
