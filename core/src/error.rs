use thiserror::Error;

pub type Result<T, E = StateError> = std::result::Result<T, E>;

/// Reducer contract violations. These indicate a bug in whoever built the
/// action, never a runtime condition, so nothing retries them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("{action} must carry a payload")]
    MissingPayload { action: &'static str },
}

impl StateError {
    pub(crate) fn missing_payload(action: &'static str) -> Self {
        Self::MissingPayload { action }
    }
}
