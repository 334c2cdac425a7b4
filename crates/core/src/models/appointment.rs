use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, EntityId};
use crate::datetime;

/// Appointment as it appears in `GET /consultas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: EntityId,
    #[serde(with = "datetime::wire")]
    pub data: NaiveDateTime,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub medico: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub paciente: String,
    #[serde(default)]
    pub motivo_cancelamento: Option<String>,
}

impl Appointment {
    pub fn status(&self) -> AppointmentStatus {
        match self.motivo_cancelamento.as_deref() {
            Some(reason) if !reason.trim().is_empty() => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => f.write_str("SCHEDULED"),
            AppointmentStatus::Cancelled => f.write_str("CANCELLED"),
        }
    }
}

/// Body of `POST /consultas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub id_paciente: EntityId,
    pub id_medico: EntityId,
    #[serde(with = "datetime::wire")]
    pub data: NaiveDateTime,
}
