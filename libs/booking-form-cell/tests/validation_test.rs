use chrono::NaiveDate;
use std::sync::Arc;

use booking_form_cell::{BookingForm, FieldId, FormField, FormValidator};
use shared_utils::FixedClock;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
}

fn validator() -> FormValidator {
    FormValidator::new(Arc::new(FixedClock::new(today())))
}

fn complete_form() -> BookingForm {
    BookingForm::new()
        .with(FieldId::Name, "Asha Verma")
        .with(FieldId::Phone, "9876543210")
        .with(FieldId::Address, "12 Lake Road")
        .with(FieldId::Doctor, "A")
        .with(FieldId::Service, "General Checkup")
        .with(FieldId::Date, "2030-06-20")
        .with(FieldId::Time, "08:30")
}

#[test]
fn test_complete_form_is_valid() {
    let report = validator().validate(complete_form().fields());

    assert!(report.is_valid());
    assert_eq!(report.checks.len(), FieldId::ALL.len());
}

#[test]
fn test_blank_required_field_is_invalid() {
    let form = complete_form().with(FieldId::Address, "   ");

    let report = validator().validate(form.fields());

    assert!(!report.is_valid());
    assert_eq!(report.invalid_fields(), vec![FieldId::Address]);
}

#[test]
fn test_notes_are_optional() {
    let form = complete_form().with(FieldId::Notes, "");
    assert!(validator().validate(form.fields()).is_valid());
}

#[test]
fn test_phone_must_be_ten_digits() {
    let v = validator();

    let short = complete_form().with(FieldId::Phone, "12345");
    assert_eq!(v.validate(short.fields()).invalid_fields(), vec![FieldId::Phone]);

    let letters = complete_form().with(FieldId::Phone, "98765abcde");
    assert!(!v.validate(letters.fields()).is_valid());

    let ok = complete_form().with(FieldId::Phone, "1234567890");
    assert!(v.validate(ok.fields()).is_valid());
}

#[test]
fn test_optional_phone_may_be_blank() {
    let fields = vec![FormField::new(FieldId::Phone, "").optional()];
    assert!(validator().validate(&fields).is_valid());
}

#[test]
fn test_past_date_is_invalid_and_today_is_valid() {
    let v = validator();

    let yesterday = complete_form().with(FieldId::Date, "2030-06-14");
    assert_eq!(v.validate(yesterday.fields()).invalid_fields(), vec![FieldId::Date]);

    let on_the_day = complete_form().with(FieldId::Date, "2030-06-15");
    assert!(v.validate(on_the_day.fields()).is_valid());
}

#[test]
fn test_unparseable_date_is_invalid() {
    let form = complete_form().with(FieldId::Date, "next tuesday");
    assert_eq!(validator().validate(form.fields()).invalid_fields(), vec![FieldId::Date]);
}

#[test]
fn test_every_problem_is_reported() {
    let form = complete_form()
        .with(FieldId::Name, "")
        .with(FieldId::Phone, "12")
        .with(FieldId::Date, "2001-01-01");

    let invalid = validator().validate(form.fields()).invalid_fields();

    assert_eq!(invalid, vec![FieldId::Name, FieldId::Phone, FieldId::Date]);
}
