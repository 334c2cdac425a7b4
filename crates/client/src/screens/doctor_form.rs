//! Doctor registration and editing form.

use clinica_core::errors::{ClinicError, ClinicResult};
use clinica_core::models::{
    Address, CreateDoctorRequest, Doctor, EntityId, Specialty, UpdateDoctorRequest,
};
use clinica_core::normalize::normalize_cep;
use clinica_core::outcome::SubmitOutcome;
use clinica_core::validation::{require, FieldError, ValidationErrors};
use tracing::{info, warn};

use crate::api::ClinicApi;

pub const SAVE_FALLBACK_MESSAGE: &str = "Error saving doctor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorField {
    Nome,
    Especialidade,
    Crm,
    Email,
    Telefone,
    Logradouro,
    Numero,
    Complemento,
    Bairro,
    Cidade,
    Uf,
    Cep,
}

impl DoctorField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorField::Nome => "nome",
            DoctorField::Especialidade => "especialidade",
            DoctorField::Crm => "crm",
            DoctorField::Email => "email",
            DoctorField::Telefone => "telefone",
            DoctorField::Logradouro => "logradouro",
            DoctorField::Numero => "numero",
            DoctorField::Complemento => "complemento",
            DoctorField::Bairro => "bairro",
            DoctorField::Cidade => "cidade",
            DoctorField::Uf => "uf",
            DoctorField::Cep => "cep",
        }
    }
}

const REQUIRED_FIELDS: [DoctorField; 10] = [
    DoctorField::Nome,
    DoctorField::Especialidade,
    DoctorField::Crm,
    DoctorField::Email,
    DoctorField::Telefone,
    DoctorField::Logradouro,
    DoctorField::Bairro,
    DoctorField::Cidade,
    DoctorField::Uf,
    DoctorField::Cep,
];

/// Flattened form values, address included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorFormData {
    pub nome: String,
    pub especialidade: String,
    pub crm: String,
    pub email: String,
    pub telefone: String,
    pub logradouro: String,
    pub numero: String,
    pub complemento: String,
    pub bairro: String,
    pub cidade: String,
    pub uf: String,
    pub cep: String,
}

impl Default for DoctorFormData {
    fn default() -> Self {
        Self {
            nome: String::new(),
            especialidade: Specialty::default().to_string(),
            crm: String::new(),
            email: String::new(),
            telefone: String::new(),
            logradouro: String::new(),
            numero: String::new(),
            complemento: String::new(),
            bairro: String::new(),
            cidade: String::new(),
            uf: String::new(),
            cep: String::new(),
        }
    }
}

impl DoctorFormData {
    fn get(&self, field: DoctorField) -> &str {
        match field {
            DoctorField::Nome => &self.nome,
            DoctorField::Especialidade => &self.especialidade,
            DoctorField::Crm => &self.crm,
            DoctorField::Email => &self.email,
            DoctorField::Telefone => &self.telefone,
            DoctorField::Logradouro => &self.logradouro,
            DoctorField::Numero => &self.numero,
            DoctorField::Complemento => &self.complemento,
            DoctorField::Bairro => &self.bairro,
            DoctorField::Cidade => &self.cidade,
            DoctorField::Uf => &self.uf,
            DoctorField::Cep => &self.cep,
        }
    }

    fn slot(&mut self, field: DoctorField) -> &mut String {
        match field {
            DoctorField::Nome => &mut self.nome,
            DoctorField::Especialidade => &mut self.especialidade,
            DoctorField::Crm => &mut self.crm,
            DoctorField::Email => &mut self.email,
            DoctorField::Telefone => &mut self.telefone,
            DoctorField::Logradouro => &mut self.logradouro,
            DoctorField::Numero => &mut self.numero,
            DoctorField::Complemento => &mut self.complemento,
            DoctorField::Bairro => &mut self.bairro,
            DoctorField::Cidade => &mut self.cidade,
            DoctorField::Uf => &mut self.uf,
            DoctorField::Cep => &mut self.cep,
        }
    }
}

/// Create/edit form for a doctor. Editing is selected by constructing the
/// form from an existing record.
#[derive(Debug, Clone, Default)]
pub struct DoctorForm {
    data: DoctorFormData,
    editing: Option<EntityId>,
    errors: ValidationErrors,
}

impl DoctorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from `doctor`, saving as an update.
    pub fn edit(doctor: &Doctor) -> Self {
        let address = doctor.endereco.clone().unwrap_or_default();
        let especialidade = if doctor.especialidade.trim().is_empty() {
            Specialty::default().to_string()
        } else {
            doctor.especialidade.clone()
        };

        Self {
            data: DoctorFormData {
                nome: doctor.nome.clone(),
                especialidade,
                crm: doctor.crm.clone(),
                email: doctor.email.clone(),
                telefone: doctor.telefone.clone(),
                logradouro: address.logradouro,
                numero: address.numero,
                complemento: address.complemento,
                bairro: address.bairro,
                cidade: address.cidade,
                uf: address.uf,
                cep: address.cep,
            },
            editing: Some(doctor.id.clone()),
            errors: ValidationErrors::new(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn data(&self) -> &DoctorFormData {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Sets one field and clears its recorded error.
    pub fn set(&mut self, field: DoctorField, value: impl Into<String>) {
        *self.data.slot(field) = value.into();
        self.errors.clear(field.as_str());
    }

    /// Checks required fields, the CEP and the specialty; records and
    /// returns every problem found.
    pub fn validate(&mut self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in REQUIRED_FIELDS {
            require(&mut errors, field.as_str(), self.data.get(field));
        }

        if !self.data.cep.trim().is_empty() {
            if let Err(err) = normalize_cep(&self.data.cep) {
                errors.add(DoctorField::Cep.as_str(), err);
            }
        }

        if !self.data.especialidade.trim().is_empty()
            && self.data.especialidade.parse::<Specialty>().is_err()
        {
            errors.add(DoctorField::Especialidade.as_str(), FieldError::UnknownSpecialty);
        }

        self.errors = errors.clone();
        errors.into_result()
    }

    fn address(&self) -> Result<Address, ValidationErrors> {
        let cep = normalize_cep(&self.data.cep).map_err(|err| {
            let mut errors = ValidationErrors::new();
            errors.add(DoctorField::Cep.as_str(), err);
            errors
        })?;

        Ok(Address {
            logradouro: self.data.logradouro.trim().to_string(),
            numero: self.data.numero.trim().to_string(),
            complemento: self.data.complemento.trim().to_string(),
            bairro: self.data.bairro.trim().to_string(),
            cidade: self.data.cidade.trim().to_string(),
            uf: self.data.uf.trim().to_uppercase(),
            cep,
        })
    }

    /// Body for `POST /medicos`, with normalized specialty and CEP.
    pub fn create_request(&mut self) -> Result<CreateDoctorRequest, ValidationErrors> {
        self.validate()?;
        let especialidade = self.data.especialidade.parse::<Specialty>().map_err(|err| {
            let mut errors = ValidationErrors::new();
            errors.add(DoctorField::Especialidade.as_str(), err);
            errors
        })?;

        Ok(CreateDoctorRequest {
            nome: self.data.nome.trim().to_string(),
            email: self.data.email.trim().to_string(),
            telefone: self.data.telefone.trim().to_string(),
            crm: self.data.crm.trim().to_string(),
            especialidade,
            endereco: self.address()?,
        })
    }

    /// Body for `PUT /medicos`; only the mutable fields are sent.
    pub fn update_request(&mut self, id: EntityId) -> Result<UpdateDoctorRequest, ValidationErrors> {
        self.validate()?;

        Ok(UpdateDoctorRequest {
            id,
            nome: self.data.nome.trim().to_string(),
            telefone: self.data.telefone.trim().to_string(),
            endereco: self.address()?,
        })
    }

    /// Validates locally, then creates or updates the doctor.
    ///
    /// Local validation failures come back as `Err`; backend answers as the
    /// returned outcome.
    pub async fn save<A>(&mut self, api: &A) -> ClinicResult<SubmitOutcome>
    where
        A: ClinicApi + ?Sized,
    {
        let result = match self.editing.clone() {
            Some(id) => {
                let request = self.update_request(id).map_err(ClinicError::from)?;
                api.update_doctor(&request).await
            }
            None => {
                let request = self.create_request().map_err(ClinicError::from)?;
                api.create_doctor(&request).await
            }
        };

        let outcome = SubmitOutcome::from_result(result, SAVE_FALLBACK_MESSAGE);
        match &outcome {
            SubmitOutcome::Confirmed if self.is_editing() => info!("Doctor profile updated"),
            SubmitOutcome::Confirmed => info!("Doctor registered"),
            SubmitOutcome::Failed(message) => warn!("Saving doctor failed: {}", message),
        }
        Ok(outcome)
    }
}
