//! Client-held appointment input and its validation.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::datetime::{local_now, parse_input};
use crate::models::{AppointmentRequest, EntityId};
use crate::validation::{FieldError, ValidationErrors};

pub const PATIENT_FIELD: &str = "idPaciente";
pub const DOCTOR_FIELD: &str = "idMedico";
pub const SCHEDULED_AT_FIELD: &str = "data";

/// Message shown when scheduling fails without a backend explanation.
pub const SCHEDULE_FALLBACK_MESSAGE: &str = "Error scheduling appointment";

/// Appointment being put together on the scheduling screen.
///
/// The time is a local wall-clock value; it is sent exactly as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentDraft {
    patient_id: Option<EntityId>,
    doctor_id: Option<EntityId>,
    scheduled_at: Option<NaiveDateTime>,
    unparsed_time: bool,
    errors: ValidationErrors,
}

impl AppointmentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patient_id(&self) -> Option<&EntityId> {
        self.patient_id.as_ref()
    }

    pub fn doctor_id(&self) -> Option<&EntityId> {
        self.doctor_id.as_ref()
    }

    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        self.scheduled_at
    }

    /// Errors recorded by the last validation, minus fields edited since.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn select_patient(&mut self, id: EntityId) {
        self.patient_id = Some(id);
        self.errors.clear(PATIENT_FIELD);
    }

    pub fn select_doctor(&mut self, id: EntityId) {
        self.doctor_id = Some(id);
        self.errors.clear(DOCTOR_FIELD);
    }

    pub fn set_scheduled_at(&mut self, at: NaiveDateTime) {
        self.scheduled_at = Some(at);
        self.unparsed_time = false;
        self.errors.clear(SCHEDULED_AT_FIELD);
    }

    /// Sets the time from typed date and time text.
    ///
    /// Text that does not parse clears the time and records
    /// [`FieldError::InvalidFormat`] until a valid time is entered.
    pub fn enter_scheduled_at(&mut self, date: &str, time: &str) -> Result<(), ValidationErrors> {
        match parse_input(date, time) {
            Ok(at) => {
                self.set_scheduled_at(at);
                Ok(())
            }
            Err(_) => {
                self.scheduled_at = None;
                self.unparsed_time = true;
                self.errors.add(SCHEDULED_AT_FIELD, FieldError::InvalidFormat);
                let mut errors = ValidationErrors::new();
                errors.add(SCHEDULED_AT_FIELD, FieldError::InvalidFormat);
                Err(errors)
            }
        }
    }

    /// Replaces the date, keeping the chosen time (or the current time).
    pub fn set_date(&mut self, date: NaiveDate) {
        let time = self
            .scheduled_at
            .map(|at| at.time())
            .unwrap_or_else(|| local_now().time());
        self.set_scheduled_at(date.and_time(time));
    }

    /// Replaces the time, keeping the chosen date (or today).
    pub fn set_time(&mut self, time: NaiveTime) {
        let date = self
            .scheduled_at
            .map(|at| at.date())
            .unwrap_or_else(|| local_now().date());
        self.set_scheduled_at(date.and_time(time));
    }

    /// Validates against the current local time.
    pub fn validate(&mut self) -> Result<(), ValidationErrors> {
        self.validate_at(local_now())
    }

    /// Checks every field and records all errors found.
    pub fn validate_at(&mut self, now: NaiveDateTime) -> Result<(), ValidationErrors> {
        let mut errors = self.missing_fields();

        if let Some(at) = self.scheduled_at {
            if at <= now {
                errors.add(SCHEDULED_AT_FIELD, FieldError::InPast);
            }
        }

        self.errors = errors.clone();
        errors.into_result()
    }

    /// Projects the draft into the wire request.
    ///
    /// Expects a prior successful validation; fails only when a field is
    /// still unset.
    pub fn build_request(&self) -> Result<AppointmentRequest, ValidationErrors> {
        match (&self.patient_id, &self.doctor_id, self.scheduled_at) {
            (Some(patient), Some(doctor), Some(at)) if !patient.is_empty() && !doctor.is_empty() => {
                Ok(AppointmentRequest {
                    id_paciente: patient.clone(),
                    id_medico: doctor.clone(),
                    data: at,
                })
            }
            _ => Err(self.missing_fields()),
        }
    }

    fn missing_fields(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.patient_id.as_ref().is_none_or(EntityId::is_empty) {
            errors.add(PATIENT_FIELD, FieldError::Required);
        }
        if self.doctor_id.as_ref().is_none_or(EntityId::is_empty) {
            errors.add(DOCTOR_FIELD, FieldError::Required);
        }
        if self.unparsed_time {
            errors.add(SCHEDULED_AT_FIELD, FieldError::InvalidFormat);
        } else if self.scheduled_at.is_none() {
            errors.add(SCHEDULED_AT_FIELD, FieldError::Required);
        }

        errors
    }
}
