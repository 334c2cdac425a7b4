use clinica_core::datetime::format_display;
use clinica_core::errors::ClinicResult;
use clinica_core::models::{Appointment, AppointmentStatus};
use tracing::{error, info};

use crate::api::ClinicApi;
use crate::screens::ListState;

pub const LOAD_FALLBACK_MESSAGE: &str = "Could not load appointments";

/// One appointment card, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub when: String,
    pub status: AppointmentStatus,
    pub doctor: String,
    pub patient: String,
    pub cancellation_reason: Option<String>,
}

impl From<&Appointment> for AppointmentRow {
    fn from(appointment: &Appointment) -> Self {
        let status = appointment.status();
        Self {
            when: format_display(&appointment.data),
            status,
            doctor: appointment.medico.clone(),
            patient: appointment.paciente.clone(),
            cancellation_reason: match status {
                AppointmentStatus::Cancelled => appointment.motivo_cancelamento.clone(),
                AppointmentStatus::Scheduled => None,
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct AppointmentList {
    state: ListState,
    appointments: Vec<Appointment>,
}

impl AppointmentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn rows(&self) -> Vec<AppointmentRow> {
        self.appointments.iter().map(AppointmentRow::from).collect()
    }

    pub async fn load<A>(&mut self, api: &A) -> ClinicResult<()>
    where
        A: ClinicApi + ?Sized,
    {
        self.state = ListState::Loading;

        match api.list_appointments().await {
            Ok(appointments) => {
                info!("Loaded {} appointments", appointments.len());
                self.appointments = appointments;
                self.state = ListState::Loaded;
                Ok(())
            }
            Err(err) => {
                error!("Failed to load appointments: {}", err);
                self.state = ListState::Failed(err.user_message(LOAD_FALLBACK_MESSAGE));
                Err(err)
            }
        }
    }
}
