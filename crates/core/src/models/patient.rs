use serde::{Deserialize, Serialize};

use super::common::{null_as_empty, Address, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cpf: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub telefone: String,
    #[serde(default)]
    pub endereco: Option<Address>,
}

/// Read-only projection of a patient used for selection lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRef {
    pub id: EntityId,
    pub name: String,
}

impl From<&Patient> for PatientRef {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.nome.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    pub endereco: Address,
}
