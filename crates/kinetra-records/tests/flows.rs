//! End-to-end flow tests against real AWS resources.
//!
//! Require credentials plus `KINETRA_BUCKET`, `KINETRA_USER_POOL_ID`, and
//! `KINETRA_CLIENT_ID` pointing at disposable test infrastructure.
//!
//! Run with: `cargo test -p kinetra-records --test flows -- --ignored`

use jiff::Timestamp;

use kinetra_core::models::AppointmentStatus;
use kinetra_core::recovery::ClinicalRating;
use kinetra_records::builder::PatientForm;
use kinetra_records::context::Context;
use kinetra_records::evaluations::{evaluations_for_patient, record_evaluation};
use kinetra_records::patients::{patient_by_uid, patients_for_professional};
use kinetra_records::registration::register_patient;
use kinetra_records::scheduling::{
    appointments_for_professional, schedule_appointment, update_appointment_status,
};

fn test_form() -> PatientForm {
    let tag = {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        format!("{nanos:x}")
    };

    PatientForm {
        rut: "12.345.678-5".to_string(),
        name: "Paciente de Prueba".to_string(),
        age: "40".to_string(),
        sex: "F".to_string(),
        email: format!("kinetra-test+{tag}@example.com"),
        phone: String::new(),
        address: String::new(),
        history: String::new(),
        diagnoses: "Lumbalgia".to_string(),
        treatments: String::new(),
    }
}

#[tokio::test]
#[ignore]
async fn registration_then_listing() {
    let ctx = Context::from_env().await;
    let professional_id = "test-professional";

    let registered = register_patient(&ctx, &test_form(), professional_id)
        .await
        .expect("registration should succeed");
    assert_eq!(registered.temporary_credential, "5678");

    let patient = patient_by_uid(&ctx, &registered.uid)
        .await
        .expect("profile should exist");
    assert_eq!(patient.professional_id, professional_id);

    let listed = patients_for_professional(&ctx, professional_id)
        .await
        .expect("listing should succeed");
    assert!(listed.iter().any(|p| p.uid == registered.uid));
}

#[tokio::test]
#[ignore]
async fn appointment_lifecycle() {
    let ctx = Context::from_env().await;
    let scheduled_at: Timestamp = "2030-01-15T10:00:00Z".parse().unwrap();

    let appointment =
        schedule_appointment(&ctx, "test-patient", "test-professional", scheduled_at, "")
            .await
            .expect("scheduling should succeed");
    assert_eq!(appointment.status, AppointmentStatus::Pending);

    let updated = update_appointment_status(&ctx, appointment.id, AppointmentStatus::Completed)
        .await
        .expect("status update should succeed");
    assert_eq!(updated.status, AppointmentStatus::Completed);

    let agenda = appointments_for_professional(&ctx, "test-professional")
        .await
        .expect("agenda should load");
    assert!(agenda.iter().any(|a| a.id == appointment.id));
}

#[tokio::test]
#[ignore]
async fn evaluation_trend_is_oldest_first() {
    let ctx = Context::from_env().await;
    let patient_id = "test-trend-patient";

    for pain in [8, 5, 2] {
        let ratings = ClinicalRating {
            mobility: 6,
            strength: 6,
            pain,
        };
        record_evaluation(&ctx, patient_id, "test-professional", ratings, "")
            .await
            .expect("recording should succeed");
    }

    let trend = evaluations_for_patient(&ctx, patient_id)
        .await
        .expect("trend should load");
    assert!(trend.len() >= 3);
    assert!(trend.windows(2).all(|w| w[0].recorded_at <= w[1].recorded_at));
}
