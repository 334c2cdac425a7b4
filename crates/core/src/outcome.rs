use crate::errors::ClinicResult;

/// Result of a write that reached the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed,
    /// Human-readable reason, taken from the backend when it sent one.
    Failed(String),
}

impl SubmitOutcome {
    /// Interprets a backend call, substituting `fallback` when the error
    /// carries no message of its own.
    pub fn from_result(result: ClinicResult<()>, fallback: &str) -> Self {
        match result {
            Ok(()) => SubmitOutcome::Confirmed,
            Err(err) => SubmitOutcome::Failed(err.user_message(fallback)),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Confirmed => None,
            SubmitOutcome::Failed(message) => Some(message),
        }
    }
}

/// Outcome of submitting an appointment.
pub type AppointmentResult = SubmitOutcome;
