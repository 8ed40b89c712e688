//! Error types shared by the routing, reveal and form modules.

use crate::core::sequencer::SequenceHandle;

/// Malformed setup data. Raised at registration time, never at runtime.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("sequence has no visual groups")]
    EmptySequence,

    #[error("visual group '{group}' has no final state")]
    MissingFinalState { group: String },

    #[error("visual group '{group}' is registered twice in the same sequence")]
    DuplicateGroup { group: String },

    #[error("route '{path}' is registered more than once")]
    DuplicateRoute { path: String },

    #[error("invalid trigger thresholds: enter={enter}, exit={exit}")]
    InvalidThresholds { enter: f64, exit: f64 },

    #[error("unknown sequence {0:?}")]
    UnknownSequence(SequenceHandle),
}

/// No route matches the requested path exactly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no view registered for path '{path}'")]
pub struct RouteNotFound {
    pub path: String,
}

/// A required form field was left empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field '{field}' is required")]
    MissingField { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigurationError::MissingFinalState {
            group: "hero-title".to_string(),
        };
        assert_eq!(err.to_string(), "visual group 'hero-title' has no final state");

        let err = RouteNotFound {
            path: "/unknown".to_string(),
        };
        assert_eq!(err.to_string(), "no view registered for path '/unknown'");

        let err = ValidationError::MissingField { field: "email" };
        assert_eq!(err.to_string(), "field 'email' is required");
    }
}
