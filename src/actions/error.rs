use thiserror::Error;

/// Errors raised by a single action.
///
/// None of these abort the rest of the action list; the dispatcher turns
/// them into `ShowMessage` effects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// A property the action cannot run without is absent.
    #[error("Action '{action}' is missing required property '{property}'")]
    MissingProperty {
        action: String,
        property: &'static str,
    },

    /// A property is present but has the wrong kind.
    #[error("Action '{action}' expects '{property}' to be a {expected}, got {found}")]
    InvalidProperty {
        action: String,
        property: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A `@@` reference in an action property has no state behind it.
    #[error("Action '{action}' could not resolve '{property}': NO STATE FOR PATH {key}")]
    UnresolvedBinding {
        action: String,
        property: &'static str,
        key: String,
    },
}
