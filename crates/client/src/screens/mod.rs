//! Per-screen state.
//!
//! Each screen owns its lists, drafts and status flags. Async operations
//! borrow the screen mutably for their whole duration, so a screen has at most
//! one request in flight, and dropping the returned future cancels it.

pub mod appointment_list;
pub mod doctor_directory;
pub mod doctor_form;
pub mod patient_form;
pub mod patient_list;
pub mod scheduling;

/// Status of a screen that shows a fetched list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Load failed; holds the message to show. Nothing is retried automatically.
    Failed(String),
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
