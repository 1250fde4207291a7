use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a client upload session.
///
/// `Idle -> Uploading -> {Success | Error}`. `Success` goes back to `Idle`
/// once the reset delay elapses; `Error` stays until the user retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Idle => write!(f, "idle"),
            Status::Uploading => write!(f, "uploading"),
            Status::Success => write!(f, "success"),
            Status::Error => write!(f, "error"),
        }
    }
}
