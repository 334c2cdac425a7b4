//! # Clinica Core
//!
//! Domain types shared by the clinic client: backend wire models, the error
//! taxonomy, field validation, and the appointment draft with its local-time
//! handling. Nothing here performs I/O.

pub mod datetime;
pub mod draft;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod outcome;
pub mod validation;

pub use draft::AppointmentDraft;
pub use errors::{ClinicError, ClinicResult};
pub use outcome::{AppointmentResult, SubmitOutcome};
pub use validation::{FieldError, ValidationErrors};
