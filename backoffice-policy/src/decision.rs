//! # Policy decisions
//!
//! Tri-state outcome of an action-policy lookup. The third state matters:
//! a compact-device action falls back to its base action only when the
//! variant is truly unconfigured, never when it was explicitly denied.

use serde::{Deserialize, Serialize};

/// Outcome of an action-policy lookup.
///
/// # Example
///
/// ```
/// use backoffice_policy::PolicyDecision;
///
/// assert_eq!(PolicyDecision::from_flag(Some(true)), PolicyDecision::Granted);
/// assert_eq!(PolicyDecision::from_flag(Some(false)), PolicyDecision::Denied);
/// assert_eq!(PolicyDecision::from_flag(None), PolicyDecision::Unspecified);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PolicyDecision {
    /// The action is explicitly granted.
    Granted,

    /// The action is explicitly denied.
    Denied,

    /// No policy is configured for the action at any level.
    Unspecified,
}

impl PolicyDecision {
    /// Map an optional policy flag to a decision.
    ///
    /// An absent flag means the policy was never written down, which is
    /// distinct from a present-but-false flag.
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => PolicyDecision::Granted,
            Some(false) => PolicyDecision::Denied,
            None => PolicyDecision::Unspecified,
        }
    }

    /// Get the string representation of the decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyDecision::Granted => "granted",
            PolicyDecision::Denied => "denied",
            PolicyDecision::Unspecified => "unspecified",
        }
    }

    /// Check if the action may be rendered.
    ///
    /// Only an explicit grant renders; `Denied` and `Unspecified` both
    /// suppress the action.
    pub fn is_granted(&self) -> bool {
        matches!(self, PolicyDecision::Granted)
    }

    /// Check if the action was explicitly denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, PolicyDecision::Denied)
    }

    /// Check if no policy was configured.
    pub fn is_unspecified(&self) -> bool {
        matches!(self, PolicyDecision::Unspecified)
    }

    /// Resolve `Unspecified` through a fallback lookup.
    ///
    /// Explicit decisions (granted or denied) pass through untouched; only a
    /// truly unconfigured policy consults the fallback. This is the
    /// device-variant contract: `show_mobile` falls back to `show` only when
    /// `show_mobile` has no entry of its own.
    ///
    /// # Example
    ///
    /// ```
    /// use backoffice_policy::PolicyDecision;
    ///
    /// let denied = PolicyDecision::Denied;
    /// assert_eq!(denied.or_fallback(|| PolicyDecision::Granted), PolicyDecision::Denied);
    ///
    /// let unspecified = PolicyDecision::Unspecified;
    /// assert_eq!(unspecified.or_fallback(|| PolicyDecision::Granted), PolicyDecision::Granted);
    /// ```
    pub fn or_fallback(self, fallback: impl FnOnce() -> PolicyDecision) -> PolicyDecision {
        if self.is_unspecified() {
            fallback()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(PolicyDecision::from_flag(Some(true)), PolicyDecision::Granted);
        assert_eq!(PolicyDecision::from_flag(Some(false)), PolicyDecision::Denied);
        assert_eq!(PolicyDecision::from_flag(None), PolicyDecision::Unspecified);
    }

    #[test]
    fn test_predicates() {
        assert!(PolicyDecision::Granted.is_granted());
        assert!(!PolicyDecision::Denied.is_granted());
        assert!(!PolicyDecision::Unspecified.is_granted());

        assert!(PolicyDecision::Denied.is_denied());
        assert!(PolicyDecision::Unspecified.is_unspecified());
    }

    #[test]
    fn test_or_fallback_only_on_unspecified() {
        assert_eq!(
            PolicyDecision::Granted.or_fallback(|| PolicyDecision::Denied),
            PolicyDecision::Granted
        );
        assert_eq!(
            PolicyDecision::Denied.or_fallback(|| PolicyDecision::Granted),
            PolicyDecision::Denied
        );
        assert_eq!(
            PolicyDecision::Unspecified.or_fallback(|| PolicyDecision::Denied),
            PolicyDecision::Denied
        );
        assert_eq!(
            PolicyDecision::Unspecified.or_fallback(|| PolicyDecision::Unspecified),
            PolicyDecision::Unspecified
        );
    }

    #[test]
    fn test_serde_representation() {
        let json = serde_json::to_string(&PolicyDecision::Unspecified).unwrap();
        assert_eq!(json, "\"unspecified\"");
    }
}
