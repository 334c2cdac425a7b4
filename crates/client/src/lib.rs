//! # Clinica Client
//!
//! Client for the clinic-management backend: the [`api::ClinicApi`] seam,
//! its reqwest implementation, configuration, and the state behind each
//! screen (scheduling, doctor directory and form, patient list and form,
//! appointment list).

/// Backend operations consumed by the screens
pub mod api;
/// Environment-driven client settings
pub mod config;
/// HTTP implementation of the backend operations
pub mod http;
/// Per-screen state machines
pub mod screens;

pub use api::{ClinicApi, MockClinicApi};
pub use config::ClientConfig;
pub use http::HttpClinicApi;
