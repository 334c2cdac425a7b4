use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, Address, EntityId};
use super::specialty::Specialty;

/// Doctor record. Listing entries may omit contact and address fields;
/// `GET /medicos/{id}` returns them all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub especialidade: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub crm: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telefone: String,
    #[serde(default)]
    pub endereco: Option<Address>,
}

impl Doctor {
    /// The specialty parsed into the closed set, if it is one of them.
    pub fn specialty(&self) -> Option<Specialty> {
        self.especialidade.parse().ok()
    }
}

/// Read-only projection of a doctor used for selection lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorRef {
    pub id: EntityId,
    pub name: String,
    pub specialty: String,
}

impl DoctorRef {
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.specialty)
    }
}

impl From<&Doctor> for DoctorRef {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.nome.clone(),
            specialty: doctor.especialidade.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub crm: String,
    pub especialidade: Specialty,
    pub endereco: Address,
}

/// Only name, phone and address are mutable once a doctor exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateDoctorRequest {
    pub id: EntityId,
    pub nome: String,
    pub telefone: String,
    pub endereco: Address,
}
