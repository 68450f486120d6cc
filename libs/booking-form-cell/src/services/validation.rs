// =====================================================================================
// VALIDATION SERVICE - BOOKING FORM FIELD CHECKS
// =====================================================================================

use chrono::NaiveDate;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

use shared_utils::Clock;

use crate::models::{FieldCheck, FieldId, FormField, ValidationReport};

const PHONE_PATTERN: &str = r"^[0-9]{10}$";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct FormValidator {
    clock: Arc<dyn Clock>,
    phone_regex: Regex,
}

impl FormValidator {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            phone_regex: Regex::new(PHONE_PATTERN).expect("phone pattern compiles"),
        }
    }

    /// Checks every field. A field is reported invalid when it is required and
    /// blank, when it is a phone number that is not exactly ten digits, or when
    /// it is a date before today or not a date at all.
    pub fn validate(&self, fields: &[FormField]) -> ValidationReport {
        let today = self.clock.today();

        let checks = fields
            .iter()
            .map(|field| FieldCheck {
                field: field.id,
                valid: self.check_field(field, today),
            })
            .collect::<Vec<_>>();

        let report = ValidationReport { checks };
        if !report.is_valid() {
            debug!("Form validation failed for {:?}", report.invalid_fields());
        }
        report
    }

    fn check_field(&self, field: &FormField, today: NaiveDate) -> bool {
        let trimmed = field.value.trim();

        if field.required && trimmed.is_empty() {
            return false;
        }

        match field.id {
            FieldId::Phone if !trimmed.is_empty() => self.validate_phone(&field.value),
            FieldId::Date if !trimmed.is_empty() => self.validate_date(trimmed, today),
            _ => true,
        }
    }

    pub fn validate_phone(&self, phone: &str) -> bool {
        self.phone_regex.is_match(phone)
    }

    /// Today or later. Unparseable dates are rejected.
    pub fn validate_date(&self, date: &str, today: NaiveDate) -> bool {
        match NaiveDate::parse_from_str(date, DATE_FORMAT) {
            Ok(selected) => selected >= today,
            Err(_) => {
                debug!("Unparseable appointment date: {:?}", date);
                false
            }
        }
    }
}
