use std::time::Duration;

use async_trait::async_trait;
use clinica_core::errors::{ClinicError, ClinicResult};
use clinica_core::models::{
    Appointment, AppointmentRequest, CreateDoctorRequest, CreatePatientRequest, Doctor, EntityId,
    Page, Patient, UpdateDoctorRequest,
};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::ClinicApi;
use crate::config::ClientConfig;

/// [`ClinicApi`] over HTTP/JSON.
///
/// Every request carries the configured timeout; an expired request is
/// reported as [`ClinicError::Timeout`] rather than left hanging.
#[derive(Debug, Clone)]
pub struct HttpClinicApi {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClinicApi {
    pub fn new(config: &ClientConfig) -> ClinicResult<Self> {
        Self::with_timeout(&config.api_url, config.request_timeout())
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClinicResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClinicError::Internal(eyre::eyre!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and turns non-success statuses into backend errors.
    async fn send(&self, request: RequestBuilder) -> ClinicResult<Response> {
        let response = request.send().await.map_err(|e| self.request_error(e))?;
        let status = response.status();
        debug!("Backend responded {} for {}", status, response.url().path());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = ClinicError::from_response_body(status.as_u16(), &body);
        warn!("Backend request failed: {}", err);
        Err(err)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClinicResult<T> {
        let response = self.send(request).await?;
        response.json::<T>().await.map_err(|e| self.request_error(e))
    }

    fn request_error(&self, err: reqwest::Error) -> ClinicError {
        if err.is_timeout() {
            warn!("Request exceeded {:?}", self.timeout);
            ClinicError::Timeout(self.timeout)
        } else if err.is_decode() {
            ClinicError::Decode(err.to_string())
        } else {
            ClinicError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ClinicApi for HttpClinicApi {
    async fn list_patients(&self, size: u32) -> ClinicResult<Vec<Patient>> {
        debug!("Listing patients (size={})", size);
        let page: Page<Patient> = self
            .fetch_json(self.client.get(self.url("/pacientes")).query(&[("size", size)]))
            .await?;
        Ok(page.into_content())
    }

    async fn list_doctors(&self, size: u32) -> ClinicResult<Vec<Doctor>> {
        debug!("Listing doctors (size={})", size);
        let page: Page<Doctor> = self
            .fetch_json(self.client.get(self.url("/medicos")).query(&[("size", size)]))
            .await?;
        Ok(page.into_content())
    }

    async fn get_doctor(&self, id: &EntityId) -> ClinicResult<Doctor> {
        debug!("Fetching doctor {}", id);
        self.fetch_json(self.client.get(self.url(&format!("/medicos/{}", id))))
            .await
    }

    async fn create_doctor(&self, request: &CreateDoctorRequest) -> ClinicResult<()> {
        debug!("Creating doctor {}", request.nome);
        self.send(self.client.post(self.url("/medicos")).json(request))
            .await?;
        Ok(())
    }

    async fn update_doctor(&self, request: &UpdateDoctorRequest) -> ClinicResult<()> {
        debug!("Updating doctor {}", request.id);
        self.send(self.client.put(self.url("/medicos")).json(request))
            .await?;
        Ok(())
    }

    async fn create_patient(&self, request: &CreatePatientRequest) -> ClinicResult<()> {
        debug!("Registering patient {}", request.nome);
        self.send(self.client.post(self.url("/pacientes/cadastro")).json(request))
            .await?;
        Ok(())
    }

    async fn delete_patient(&self, id: &EntityId) -> ClinicResult<()> {
        debug!("Deleting patient {}", id);
        self.send(self.client.delete(self.url(&format!("/pacientes/{}", id))))
            .await?;
        Ok(())
    }

    async fn list_appointments(&self) -> ClinicResult<Vec<Appointment>> {
        debug!("Listing appointments");
        let page: Page<Appointment> = self.fetch_json(self.client.get(self.url("/consultas"))).await?;
        Ok(page.into_content())
    }

    async fn create_appointment(&self, request: &AppointmentRequest) -> ClinicResult<()> {
        debug!(
            "Scheduling appointment: patient={}, doctor={}",
            request.id_paciente, request.id_medico
        );
        self.send(self.client.post(self.url("/consultas")).json(request))
            .await?;
        Ok(())
    }
}
