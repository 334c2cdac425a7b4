use async_trait::async_trait;
use clinica_core::errors::ClinicResult;
use clinica_core::models::{
    Appointment, AppointmentRequest, CreateDoctorRequest, CreatePatientRequest, Doctor, EntityId,
    Patient, UpdateDoctorRequest,
};
use mockall::automock;

/// Remote clinic backend.
///
/// Screens talk to the backend only through this trait, so tests can swap
/// in the generated `MockClinicApi` for the HTTP implementation.
#[automock]
#[async_trait]
pub trait ClinicApi: Send + Sync {
    /// `GET /pacientes?size={size}`
    async fn list_patients(&self, size: u32) -> ClinicResult<Vec<Patient>>;

    /// `GET /medicos?size={size}`
    async fn list_doctors(&self, size: u32) -> ClinicResult<Vec<Doctor>>;

    /// `GET /medicos/{id}`
    async fn get_doctor(&self, id: &EntityId) -> ClinicResult<Doctor>;

    /// `POST /medicos`
    async fn create_doctor(&self, request: &CreateDoctorRequest) -> ClinicResult<()>;

    /// `PUT /medicos`
    async fn update_doctor(&self, request: &UpdateDoctorRequest) -> ClinicResult<()>;

    /// `POST /pacientes/cadastro`
    async fn create_patient(&self, request: &CreatePatientRequest) -> ClinicResult<()>;

    /// `DELETE /pacientes/{id}`
    async fn delete_patient(&self, id: &EntityId) -> ClinicResult<()>;

    /// `GET /consultas`
    async fn list_appointments(&self) -> ClinicResult<Vec<Appointment>>;

    /// `POST /consultas`
    async fn create_appointment(&self, request: &AppointmentRequest) -> ClinicResult<()>;
}
