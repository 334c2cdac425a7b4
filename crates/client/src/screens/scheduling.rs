//! Appointment scheduling screen.
//!
//! ```text
//! Loading ──ok──▶ Ready ──submit──▶ Submitting ──confirmed──▶ Done
//!    │              ▲                    │
//!    └─err─▶ LoadFailed                  ├──failed──▶ Ready (draft kept)
//!                                        └─dropped──▶ Ready (draft kept)
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clinica_core::datetime::local_now;
use clinica_core::draft::{AppointmentDraft, SCHEDULE_FALLBACK_MESSAGE};
use clinica_core::errors::{ClinicError, ClinicResult};
use clinica_core::models::{AppointmentRequest, DoctorRef, EntityId, PatientRef};
use clinica_core::outcome::AppointmentResult;
use tracing::{error, info, warn};

use crate::api::ClinicApi;

/// Shown when either reference list fails to load.
pub const LOAD_FALLBACK_MESSAGE: &str = "Failed to load patient and doctor lists";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulingState {
    Loading,
    Ready,
    Submitting,
    Done,
    LoadFailed(String),
}

#[derive(Debug)]
pub struct SchedulingScreen {
    state: SchedulingState,
    page_size: u32,
    patients: Vec<PatientRef>,
    doctors: Vec<DoctorRef>,
    draft: AppointmentDraft,
}

impl SchedulingScreen {
    pub fn new(page_size: u32) -> Self {
        Self {
            state: SchedulingState::Loading,
            page_size,
            patients: Vec::new(),
            doctors: Vec::new(),
            draft: AppointmentDraft::new(),
        }
    }

    pub fn state(&self) -> &SchedulingState {
        &self.state
    }

    pub fn patients(&self) -> &[PatientRef] {
        &self.patients
    }

    pub fn doctors(&self) -> &[DoctorRef] {
        &self.doctors
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    /// Fetches both reference lists concurrently.
    ///
    /// Either both lists are shown or neither: a failure in one discards the
    /// other and leaves the screen in `LoadFailed`.
    pub async fn load<A>(&mut self, api: &A) -> ClinicResult<()>
    where
        A: ClinicApi + ?Sized,
    {
        match self.state {
            SchedulingState::Loading | SchedulingState::LoadFailed(_) => {}
            _ => return Err(self.invalid_state("load")),
        }
        self.state = SchedulingState::Loading;

        let loaded = tokio::try_join!(
            api.list_patients(self.page_size),
            api.list_doctors(self.page_size)
        );

        match loaded {
            Ok((patients, doctors)) => {
                self.patients = patients.iter().map(PatientRef::from).collect();
                self.doctors = doctors.iter().map(DoctorRef::from).collect();
                self.state = SchedulingState::Ready;
                info!(
                    "Scheduling screen ready: {} patients, {} doctors",
                    self.patients.len(),
                    self.doctors.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("Failed to load reference lists: {}", err);
                self.patients.clear();
                self.doctors.clear();
                self.state = SchedulingState::LoadFailed(err.user_message(LOAD_FALLBACK_MESSAGE));
                Err(err)
            }
        }
    }

    pub fn select_patient(&mut self, id: EntityId) -> ClinicResult<()> {
        self.ensure_editable("select a patient")?;
        if !self.patients.iter().any(|patient| patient.id == id) {
            return Err(ClinicError::NotFound(format!("Patient {}", id)));
        }
        self.draft.select_patient(id);
        Ok(())
    }

    pub fn select_doctor(&mut self, id: EntityId) -> ClinicResult<()> {
        self.ensure_editable("select a doctor")?;
        if !self.doctors.iter().any(|doctor| doctor.id == id) {
            return Err(ClinicError::NotFound(format!("Doctor {}", id)));
        }
        self.draft.select_doctor(id);
        Ok(())
    }

    pub fn set_scheduled_at(&mut self, at: NaiveDateTime) -> ClinicResult<()> {
        self.ensure_editable("change the appointment time")?;
        self.draft.set_scheduled_at(at);
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) -> ClinicResult<()> {
        self.ensure_editable("change the appointment date")?;
        self.draft.set_date(date);
        Ok(())
    }

    pub fn set_time(&mut self, time: NaiveTime) -> ClinicResult<()> {
        self.ensure_editable("change the appointment time")?;
        self.draft.set_time(time);
        Ok(())
    }

    /// Sets the time from typed `YYYY-MM-DD` and `HH:MM` text. Unparsable
    /// input is recorded on the draft as an invalid format.
    pub fn enter_scheduled_at(&mut self, date: &str, time: &str) -> ClinicResult<()> {
        self.ensure_editable("change the appointment time")?;
        self.draft.enter_scheduled_at(date, time)?;
        Ok(())
    }

    /// Validates the draft and freezes it for sending.
    ///
    /// Validation failures leave the screen `Ready` and never reach the
    /// network.
    pub fn begin_submit(&mut self, now: NaiveDateTime) -> ClinicResult<AppointmentRequest> {
        self.ensure_editable("submit")?;
        self.draft.validate_at(now)?;
        let request = self.draft.build_request()?;

        self.state = SchedulingState::Submitting;
        Ok(request)
    }

    /// Applies the backend's answer to a submission started with
    /// [`Self::begin_submit`].
    pub fn finish_submit(&mut self, outcome: ClinicResult<()>) -> ClinicResult<AppointmentResult> {
        if self.state != SchedulingState::Submitting {
            return Err(self.invalid_state("finish a submission"));
        }

        let result = AppointmentResult::from_result(outcome, SCHEDULE_FALLBACK_MESSAGE);
        match &result {
            AppointmentResult::Confirmed => {
                info!("Appointment scheduled");
                self.draft = AppointmentDraft::new();
                self.state = SchedulingState::Done;
            }
            AppointmentResult::Failed(message) => {
                warn!("Scheduling rejected: {}", message);
                self.state = SchedulingState::Ready;
            }
        }
        Ok(result)
    }

    /// Submits the draft, validating against the current local time.
    pub async fn submit<A>(&mut self, api: &A) -> ClinicResult<AppointmentResult>
    where
        A: ClinicApi + ?Sized,
    {
        self.submit_at(api, local_now()).await
    }

    /// Abandons a submission started with [`Self::begin_submit`], keeping
    /// the draft for another attempt.
    pub fn cancel_submit(&mut self) -> ClinicResult<()> {
        if self.state != SchedulingState::Submitting {
            return Err(self.invalid_state("cancel a submission"));
        }
        warn!("Submission cancelled, draft kept");
        self.state = SchedulingState::Ready;
        Ok(())
    }

    /// Submits once; failures are reported, never retried.
    ///
    /// Dropping the returned future before the backend answers puts the
    /// screen back to `Ready` with the draft intact.
    pub async fn submit_at<A>(&mut self, api: &A, now: NaiveDateTime) -> ClinicResult<AppointmentResult>
    where
        A: ClinicApi + ?Sized,
    {
        let request = self.begin_submit(now)?;
        let guard = SubmitGuard { screen: self };
        let outcome = api.create_appointment(&request).await;
        guard.screen.finish_submit(outcome)
    }

    fn ensure_editable(&self, action: &str) -> ClinicResult<()> {
        if self.state == SchedulingState::Ready {
            Ok(())
        } else {
            Err(self.invalid_state(action))
        }
    }

    fn invalid_state(&self, action: &str) -> ClinicError {
        ClinicError::InvalidState(format!("cannot {} while {:?}", action, self.state))
    }
}

/// Rolls an unfinished submission back to `Ready` when dropped.
struct SubmitGuard<'a> {
    screen: &'a mut SchedulingScreen,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        if self.screen.state == SchedulingState::Submitting {
            let _ = self.screen.cancel_submit();
        }
    }
}
