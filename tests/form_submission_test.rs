use httpmock::prelude::*;
use serde_json::json;
use std::time::{Duration, Instant};
use thompson_digital::core::form::{FormController, NoticeKind, NoticePhase, SubmitOutcome};
use thompson_digital::core::validate::Field;
use thompson_digital::domain::model::ServiceCategory;
use thompson_digital::http::client::HttpInquiryTransport;

fn ack_body() -> serde_json::Value {
    json!({
        "success": true,
        "message": "Form submitted successfully",
        "data": {
            "inquiryId": "INQ-1748779200000",
            "timestamp": "2025-06-01T12:00:00Z"
        }
    })
}

async fn fill_valid(controller: &FormController<HttpInquiryTransport>) {
    controller.set_field(Field::Name, "Jane Cooper").await;
    controller.set_field(Field::Email, "jane@example.com").await;
    controller
        .set_field(Field::ServiceCategory, "web-development")
        .await;
    controller
        .set_field(Field::Message, "We need a new marketing site.")
        .await;
}

#[tokio::test]
async fn test_submit_round_trip_success() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ack_body());
    });

    let transport = HttpInquiryTransport::new(&server.base_url()).unwrap();
    let controller = FormController::new(transport, None);
    fill_valid(&controller).await;

    let outcome = controller.submit().await;
    let SubmitOutcome::Accepted(receipt) = outcome else {
        panic!("expected Accepted, got {:?}", outcome);
    };

    mock.assert();
    assert_eq!(receipt.inquiry_id, "INQ-1748779200000");

    // Success clears the fields and posts the success notice.
    assert_eq!(controller.field_value(Field::Name).await, "");
    assert_eq!(controller.field_value(Field::Message).await, "");
    let notice = controller.notice().await.unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.phase_at(Instant::now()), Some(NoticePhase::Shown));
}

#[tokio::test]
async fn test_double_submit_sends_single_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ack_body())
            .delay(Duration::from_millis(200));
    });

    let transport = HttpInquiryTransport::new(&server.base_url()).unwrap();
    let controller = FormController::new(transport, None);
    fill_valid(&controller).await;

    let (first, second) = tokio::join!(controller.submit(), async {
        // Let the first submit reach the wire before the second attempt.
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.submit().await
    });

    assert!(matches!(first, SubmitOutcome::Accepted(_)));
    assert_eq!(second, SubmitOutcome::Blocked);
    assert_eq!(mock.hits(), 1);
}

#[tokio::test]
async fn test_server_rejection_preserves_fields() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "success": false,
                "message": "Validation error",
                "errors": [{ "field": "email", "message": "Invalid email address" }]
            }));
    });

    let transport = HttpInquiryTransport::new(&server.base_url()).unwrap();
    let controller = FormController::new(transport, None);
    fill_valid(&controller).await;

    let outcome = controller.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    mock.assert();

    // Failure keeps what the user typed and posts the failure notice.
    assert_eq!(controller.field_value(Field::Name).await, "Jane Cooper");
    assert_eq!(
        controller.field_value(Field::Email).await,
        "jane@example.com"
    );
    let notice = controller.notice().await.unwrap();
    assert_eq!(notice.kind, NoticeKind::Failure);
}

#[tokio::test]
async fn test_invalid_form_makes_no_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ack_body());
    });

    let transport = HttpInquiryTransport::new(&server.base_url()).unwrap();
    let controller = FormController::new(transport, None);
    controller.set_field(Field::Name, "Jane Cooper").await;

    let outcome = controller.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn test_success_restores_default_category() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(ack_body());
    });

    let transport = HttpInquiryTransport::new(&server.base_url()).unwrap();
    let controller = FormController::new(transport, Some(ServiceCategory::DigitalMarketing));
    fill_valid(&controller).await;
    // The user picked a different category for this submission.
    controller
        .set_field(Field::ServiceCategory, "cloud-services")
        .await;

    let outcome = controller.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Accepted(_)));

    assert_eq!(
        controller.field_value(Field::ServiceCategory).await,
        "digital-marketing"
    );
}

#[tokio::test]
async fn test_unreachable_server_reports_failure() {
    // Nothing listens on port 9 (discard); connection is refused immediately.
    let transport =
        HttpInquiryTransport::with_timeout("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let controller = FormController::new(transport, None);
    fill_valid(&controller).await;

    let outcome = controller.submit().await;
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));

    assert_eq!(controller.field_value(Field::Name).await, "Jane Cooper");
    let notice = controller.notice().await.unwrap();
    assert_eq!(notice.kind, NoticeKind::Failure);
}
