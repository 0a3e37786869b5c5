use serde::{Deserialize, Serialize};

/// A single speaker record. Identity is `id`; every other field is
/// descriptive payload the store copies but never inspects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    pub id: u64,
    pub first: String,
    pub last: String,
    pub company: String,
    #[serde(default)]
    pub sessions: Vec<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl Speaker {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Copy of this speaker with the favorite flag flipped.
    pub fn toggled(&self) -> Speaker {
        Speaker {
            favorite: !self.favorite,
            ..self.clone()
        }
    }
}

/// Status of the simulated fetch. Starts at `Loading` and transitions
/// exactly once to `Success` or `Failure`; both are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Loading,
    Success,
    Failure,
}

impl RequestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RequestStatus::Loading => "loading",
            RequestStatus::Success => "success",
            RequestStatus::Failure => "failure",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Success | RequestStatus::Failure)
    }
}
