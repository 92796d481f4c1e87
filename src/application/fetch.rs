// Fetch lifecycle of a graph panel's sample request

/// Observable state of one sample fetch. A panel starts Pending when
/// the request is issued and lands on Succeeded or Failed; the failure
/// message is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Pending,
    Succeeded,
    Failed(String),
}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Terminal state for a resolved repository call.
    pub fn from_result<T>(result: &anyhow::Result<T>) -> Self {
        match result {
            Ok(_) => FetchState::Succeeded,
            Err(e) => FetchState::Failed(failure_text(e)),
        }
    }
}

/// The error chain flattened into a single user-visible message. Every
/// surface that shows a fetch failure goes through this.
pub fn failure_text(error: &anyhow::Error) -> String {
    format!("{error:#}")
}
