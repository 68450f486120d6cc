use assert_matches::assert_matches;
use serde_json::json;

use shared_models::{AppError, BookingRequest, BookingResponse, SlotList, StatusKind, StatusMessage};

#[test]
fn test_slot_list_missing_key_is_empty() {
    let list: SlotList = serde_json::from_value(json!({})).unwrap();
    assert!(list.is_empty());

    let list: SlotList = serde_json::from_value(json!({ "slots": ["08:00", "08:30"] })).unwrap();
    assert_eq!(list.slots, vec!["08:00", "08:30"]);
}

#[test]
fn test_booking_response_success_flag() {
    let ok: BookingResponse = serde_json::from_value(json!({ "status": "success" })).unwrap();
    assert!(ok.is_success());
    assert_eq!(ok.error_message(), None);

    let failed: BookingResponse =
        serde_json::from_value(json!({ "status": "failed", "error": "Slot taken" })).unwrap();
    assert!(!failed.is_success());
    assert_eq!(failed.error_message(), Some("Slot taken"));
}

#[test]
fn test_blank_service_error_is_ignored() {
    let failed = BookingResponse::failed(Some("   "));
    assert_eq!(failed.error_message(), None);
}

#[test]
fn test_booking_request_wire_shape() {
    let request = BookingRequest {
        name: "Asha".to_string(),
        phone: "9876543210".to_string(),
        address: "12 Lake Road".to_string(),
        doctor: "A".to_string(),
        service: "checkup".to_string(),
        date: "2099-01-01".to_string(),
        time: "08:30".to_string(),
        notes: String::new(),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["time"], "08:30");
    assert_eq!(value["notes"], "");
    assert_eq!(value.as_object().unwrap().len(), 8);
}

#[test]
fn test_decode_error_counts_as_transport() {
    let err: AppError = serde_json::from_str::<SlotList>("not json").unwrap_err().into();
    assert_matches!(err, AppError::Decode(_));
    assert!(err.is_transport());
    assert!(!AppError::InvalidTime("25:00".into()).is_transport());
}

#[test]
fn test_status_message_constructors() {
    assert_eq!(StatusMessage::success("done").kind, StatusKind::Success);
    assert!(StatusMessage::error("nope").is_error());
}
