use clinica_core::errors::{ClinicError, ClinicResult};
use clinica_core::models::{Address, CreatePatientRequest};
use clinica_core::normalize::normalize_cep;
use clinica_core::outcome::SubmitOutcome;
use clinica_core::validation::{require, ValidationErrors};
use tracing::{info, warn};

use crate::api::ClinicApi;

pub const SAVE_FALLBACK_MESSAGE: &str = "Error registering patient";

/// Patient registration form. Only name, CPF and email are mandatory; the
/// CEP is checked when given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub cpf: String,
    pub endereco: Address,
}

impl PatientForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        require(&mut errors, "nome", &self.nome);
        require(&mut errors, "cpf", &self.cpf);
        require(&mut errors, "email", &self.email);

        if !self.endereco.cep.trim().is_empty() {
            if let Err(err) = normalize_cep(&self.endereco.cep) {
                errors.add("cep", err);
            }
        }

        errors.into_result()
    }

    /// Body for `POST /pacientes/cadastro`.
    pub fn create_request(&self) -> Result<CreatePatientRequest, ValidationErrors> {
        self.validate()?;

        let mut endereco = self.endereco.clone();
        if !endereco.cep.trim().is_empty() {
            endereco.cep = normalize_cep(&endereco.cep).map_err(|err| {
                let mut errors = ValidationErrors::new();
                errors.add("cep", err);
                errors
            })?;
        }

        Ok(CreatePatientRequest {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            telefone: self.telefone.trim().to_string(),
            cpf: self.cpf.trim().to_string(),
            endereco,
        })
    }

    pub async fn save<A>(&self, api: &A) -> ClinicResult<SubmitOutcome>
    where
        A: ClinicApi + ?Sized,
    {
        let request = self.create_request().map_err(ClinicError::from)?;
        let outcome = SubmitOutcome::from_result(
            api.create_patient(&request).await,
            SAVE_FALLBACK_MESSAGE,
        );

        match &outcome {
            SubmitOutcome::Confirmed => info!("Patient registered"),
            SubmitOutcome::Failed(message) => warn!("Registering patient failed: {}", message),
        }
        Ok(outcome)
    }
}
