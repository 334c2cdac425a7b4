mod test_utils;

use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{Duration, NaiveTime};
use clinica_client::api::{ClinicApi, MockClinicApi};
use clinica_client::screens::scheduling::{
    SchedulingScreen, SchedulingState, LOAD_FALLBACK_MESSAGE,
};
use clinica_core::draft::{DOCTOR_FIELD, PATIENT_FIELD, SCHEDULED_AT_FIELD};
use clinica_core::errors::{ClinicError, ClinicResult};
use clinica_core::models::{
    Appointment, AppointmentRequest, CreateDoctorRequest, CreatePatientRequest, Doctor, EntityId,
    Patient, UpdateDoctorRequest,
};
use clinica_core::outcome::AppointmentResult;
use clinica_core::validation::FieldError;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use tokio_test::{assert_err, assert_ok};

use test_utils::{doctor, now, patient};

fn api_with_lists() -> MockClinicApi {
    let mut api = MockClinicApi::new();
    api.expect_list_patients()
        .with(eq(100))
        .returning(|_| Ok(vec![patient("P1", "Ana Souza"), patient("P2", "Caio Reis")]));
    api.expect_list_doctors()
        .with(eq(100))
        .returning(|_| Ok(vec![doctor("D1", "Bruno Lima", "CARDIOLOGIA")]));
    api
}

async fn ready_screen(api: &MockClinicApi) -> SchedulingScreen {
    let mut screen = SchedulingScreen::new(100);
    screen.load(api).await.expect("load should succeed");
    screen
}

#[test_log::test(tokio::test)]
async fn test_load_populates_reference_lists() {
    let api = api_with_lists();

    let screen = ready_screen(&api).await;

    assert_eq!(screen.state(), &SchedulingState::Ready);
    assert_eq!(screen.patients().len(), 2);
    assert_eq!(screen.doctors()[0].label(), "Bruno Lima - CARDIOLOGIA");
}

#[tokio::test]
async fn test_load_is_all_or_nothing() {
    let mut api = MockClinicApi::new();
    api.expect_list_patients()
        .returning(|_| Ok(vec![patient("P1", "Ana Souza")]));
    api.expect_list_doctors()
        .returning(|_| Err(ClinicError::Transport("connection reset".to_string())));

    let mut screen = SchedulingScreen::new(100);
    let result = screen.load(&api).await;

    assert!(result.is_err());
    assert_eq!(
        screen.state(),
        &SchedulingState::LoadFailed(LOAD_FALLBACK_MESSAGE.to_string())
    );
    assert!(screen.patients().is_empty());
    assert!(screen.doctors().is_empty());
}

#[tokio::test]
async fn test_edits_rejected_before_ready() {
    let mut screen = SchedulingScreen::new(100);

    let result = screen.select_patient(EntityId::from("P1"));

    assert!(matches!(result, Err(ClinicError::InvalidState(_))));
}

#[tokio::test]
async fn test_unknown_reference_is_rejected() {
    let api = api_with_lists();
    let mut screen = ready_screen(&api).await;

    let result = screen.select_doctor(EntityId::from("D9"));

    assert!(matches!(result, Err(ClinicError::NotFound(_))));
    assert!(screen.draft().doctor_id().is_none());
}

#[tokio::test]
async fn test_validation_failure_never_reaches_network() {
    let mut api = api_with_lists();
    api.expect_create_appointment().never();
    let mut screen = ready_screen(&api).await;
    screen.set_scheduled_at(now() - Duration::days(1)).unwrap();

    let err = screen.submit_at(&api, now()).await.unwrap_err();

    match err {
        ClinicError::Validation(errors) => {
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec![PATIENT_FIELD, DOCTOR_FIELD, SCHEDULED_AT_FIELD]
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(screen.state(), &SchedulingState::Ready);
}

#[tokio::test]
async fn test_successful_submission_finishes_screen() {
    let tomorrow = now().date() + Duration::days(1);
    let mut api = api_with_lists();
    api.expect_create_appointment()
        .withf(move |request: &AppointmentRequest| {
            request.id_paciente == EntityId::from("P1")
                && request.id_medico == EntityId::from("D1")
                && request.data == tomorrow.and_hms_opt(14, 30, 0).unwrap()
        })
        .times(1)
        .returning(|_| Ok(()));

    let mut screen = ready_screen(&api).await;
    screen.select_patient(EntityId::from("P1")).unwrap();
    screen.select_doctor(EntityId::from("D1")).unwrap();
    screen.set_date(tomorrow).unwrap();
    screen
        .set_time(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
        .unwrap();

    let result = screen.submit_at(&api, now()).await.unwrap();

    assert_eq!(result, AppointmentResult::Confirmed);
    assert_eq!(screen.state(), &SchedulingState::Done);
    assert!(screen.select_patient(EntityId::from("P2")).is_err());
}

#[tokio::test]
async fn test_backend_rejection_restores_ready_with_draft() {
    let mut api = api_with_lists();
    api.expect_create_appointment().times(1).returning(|_| {
        Err(ClinicError::from_response_body(
            400,
            r#"{"message":"Doctor unavailable"}"#,
        ))
    });

    let mut screen = ready_screen(&api).await;
    screen.select_patient(EntityId::from("P1")).unwrap();
    screen.select_doctor(EntityId::from("D1")).unwrap();
    screen.set_scheduled_at(now() + Duration::hours(3)).unwrap();
    let draft_before = screen.draft().clone();

    let result = screen.submit_at(&api, now()).await.unwrap();

    assert_eq!(
        result,
        AppointmentResult::Failed("Doctor unavailable".to_string())
    );
    assert_eq!(screen.state(), &SchedulingState::Ready);
    assert_eq!(screen.draft(), &draft_before);
}

#[tokio::test]
async fn test_backend_failure_without_message_uses_fallback() {
    let mut api = api_with_lists();
    api.expect_create_appointment()
        .returning(|_| Err(ClinicError::from_response_body(500, "")));

    let mut screen = ready_screen(&api).await;
    screen.select_patient(EntityId::from("P2")).unwrap();
    screen.select_doctor(EntityId::from("D1")).unwrap();
    screen.set_scheduled_at(now() + Duration::days(2)).unwrap();

    let result = screen.submit_at(&api, now()).await.unwrap();

    assert_eq!(
        result.message(),
        Some("Error scheduling appointment")
    );
}

#[tokio::test]
async fn test_draft_frozen_while_submitting() {
    let api = api_with_lists();
    let mut screen = ready_screen(&api).await;
    screen.select_patient(EntityId::from("P1")).unwrap();
    screen.select_doctor(EntityId::from("D1")).unwrap();
    screen.set_scheduled_at(now() + Duration::days(1)).unwrap();

    let request = screen.begin_submit(now()).unwrap();

    assert_eq!(screen.state(), &SchedulingState::Submitting);
    assert!(screen.select_patient(EntityId::from("P2")).is_err());
    assert!(screen.set_scheduled_at(now() + Duration::days(5)).is_err());
    assert_eq!(request.id_paciente, EntityId::from("P1"));

    let result = screen.finish_submit(Ok(())).unwrap();
    assert!(result.is_confirmed());
}

#[tokio::test]
async fn test_finish_without_begin_is_rejected() {
    let api = api_with_lists();
    let mut screen = ready_screen(&api).await;

    assert!(matches!(
        screen.finish_submit(Ok(())),
        Err(ClinicError::InvalidState(_))
    ));
}

/// Backend that serves the reference lists but never answers a booking.
struct StalledBackend;

#[async_trait]
impl ClinicApi for StalledBackend {
    async fn list_patients(&self, _size: u32) -> ClinicResult<Vec<Patient>> {
        Ok(vec![patient("P1", "Ana Souza")])
    }

    async fn list_doctors(&self, _size: u32) -> ClinicResult<Vec<Doctor>> {
        Ok(vec![doctor("D1", "Bruno Lima", "CARDIOLOGIA")])
    }

    async fn get_doctor(&self, _id: &EntityId) -> ClinicResult<Doctor> {
        unimplemented!()
    }

    async fn create_doctor(&self, _request: &CreateDoctorRequest) -> ClinicResult<()> {
        unimplemented!()
    }

    async fn update_doctor(&self, _request: &UpdateDoctorRequest) -> ClinicResult<()> {
        unimplemented!()
    }

    async fn create_patient(&self, _request: &CreatePatientRequest) -> ClinicResult<()> {
        unimplemented!()
    }

    async fn delete_patient(&self, _id: &EntityId) -> ClinicResult<()> {
        unimplemented!()
    }

    async fn list_appointments(&self) -> ClinicResult<Vec<Appointment>> {
        unimplemented!()
    }

    async fn create_appointment(&self, _request: &AppointmentRequest) -> ClinicResult<()> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn test_dropped_submission_returns_to_ready() {
    let api = StalledBackend;
    let mut screen = SchedulingScreen::new(100);
    assert_ok!(screen.load(&api).await);
    assert_ok!(screen.select_patient(EntityId::from("P1")));
    assert_ok!(screen.select_doctor(EntityId::from("D1")));
    assert_ok!(screen.set_scheduled_at(now() + Duration::days(1)));
    let draft_before = screen.draft().clone();

    let attempt = tokio::time::timeout(StdDuration::from_millis(50), screen.submit_at(&api, now())).await;

    assert_err!(attempt);
    assert_eq!(screen.state(), &SchedulingState::Ready);
    assert_eq!(screen.draft(), &draft_before);
    assert_ok!(screen.set_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap()));
}

#[tokio::test]
async fn test_cancel_submit_keeps_draft() {
    let api = api_with_lists();
    let mut screen = ready_screen(&api).await;
    assert_err!(screen.cancel_submit());

    assert_ok!(screen.select_patient(EntityId::from("P1")));
    assert_ok!(screen.select_doctor(EntityId::from("D1")));
    assert_ok!(screen.set_scheduled_at(now() + Duration::days(1)));
    assert_ok!(screen.begin_submit(now()));

    assert_ok!(screen.cancel_submit());
    assert_eq!(screen.state(), &SchedulingState::Ready);
    assert_eq!(screen.draft().patient_id(), Some(&EntityId::from("P1")));
}

#[tokio::test]
async fn test_numeric_selection_matches_textual_backend_id() {
    let mut api = MockClinicApi::new();
    api.expect_list_patients()
        .returning(|_| Ok(vec![patient("1", "Ana Souza")]));
    api.expect_list_doctors()
        .returning(|_| Ok(vec![doctor("7", "Bruno Lima", "CARDIOLOGIA")]));
    let mut screen = ready_screen(&api).await;

    assert_ok!(screen.select_patient("1".parse().unwrap()));
    assert_ok!(screen.select_doctor(EntityId::Number(7)));
}

#[tokio::test]
async fn test_unparsable_time_text_is_invalid_format() {
    let mut api = api_with_lists();
    api.expect_create_appointment().never();
    let mut screen = ready_screen(&api).await;
    screen.select_patient(EntityId::from("P1")).unwrap();
    screen.select_doctor(EntityId::from("D1")).unwrap();

    let result = screen.enter_scheduled_at("2030-04-11", "25:99");
    assert!(matches!(result, Err(ClinicError::Validation(_))));

    let err = screen.submit_at(&api, now()).await.unwrap_err();
    match err {
        ClinicError::Validation(errors) => {
            assert_eq!(errors.get(SCHEDULED_AT_FIELD), Some(FieldError::InvalidFormat));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(screen.state(), &SchedulingState::Ready);
}
