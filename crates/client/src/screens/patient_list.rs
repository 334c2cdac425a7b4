use clinica_core::errors::ClinicResult;
use clinica_core::models::{EntityId, Patient};
use clinica_core::outcome::SubmitOutcome;
use tracing::{error, info, warn};

use crate::api::ClinicApi;
use crate::screens::ListState;

pub const LOAD_FALLBACK_MESSAGE: &str = "Could not load patients";
pub const DELETE_FALLBACK_MESSAGE: &str = "Failed to delete patient";

#[derive(Debug, Default)]
pub struct PatientList {
    state: ListState,
    patients: Vec<Patient>,
}

impl PatientList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub async fn load<A>(&mut self, api: &A, page_size: u32) -> ClinicResult<()>
    where
        A: ClinicApi + ?Sized,
    {
        self.state = ListState::Loading;

        match api.list_patients(page_size).await {
            Ok(patients) => {
                info!("Loaded {} patients", patients.len());
                self.patients = patients;
                self.state = ListState::Loaded;
                Ok(())
            }
            Err(err) => {
                error!("Failed to load patients: {}", err);
                self.state = ListState::Failed(err.user_message(LOAD_FALLBACK_MESSAGE));
                Err(err)
            }
        }
    }

    /// Deletes a patient and reloads the list when the backend accepts.
    pub async fn delete<A>(&mut self, api: &A, id: &EntityId, page_size: u32) -> SubmitOutcome
    where
        A: ClinicApi + ?Sized,
    {
        let outcome = SubmitOutcome::from_result(api.delete_patient(id).await, DELETE_FALLBACK_MESSAGE);

        match &outcome {
            SubmitOutcome::Confirmed => {
                info!("Patient {} deleted", id);
                // The list state already records a reload failure.
                let _ = self.load(api, page_size).await;
            }
            SubmitOutcome::Failed(message) => warn!("Deleting patient {} failed: {}", id, message),
        }
        outcome
    }
}
