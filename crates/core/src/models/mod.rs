pub mod appointment;
pub mod common;
pub mod doctor;
pub mod patient;
pub mod specialty;

pub use appointment::{Appointment, AppointmentRequest, AppointmentStatus};
pub use common::{Address, EntityId, Page};
pub use doctor::{CreateDoctorRequest, Doctor, DoctorRef, UpdateDoctorRequest};
pub use patient::{CreatePatientRequest, Patient, PatientRef};
pub use specialty::Specialty;
