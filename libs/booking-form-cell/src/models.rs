use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use shared_models::{AppError, BookingRequest};
use shared_utils::to_24_hour;

// ==============================================================================
// FORM FIELDS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Phone,
    Address,
    Doctor,
    Service,
    Date,
    Time,
    Notes,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::Name,
        FieldId::Phone,
        FieldId::Address,
        FieldId::Doctor,
        FieldId::Service,
        FieldId::Date,
        FieldId::Time,
        FieldId::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Phone => "phone",
            FieldId::Address => "address",
            FieldId::Doctor => "doctor",
            FieldId::Service => "service",
            FieldId::Date => "date",
            FieldId::Time => "time",
            FieldId::Notes => "notes",
        }
    }

    /// Notes is the only optional field on the booking form.
    pub fn is_required_by_default(self) -> bool {
        self != FieldId::Notes
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::Validation(format!("Unknown form field: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
    pub required: bool,
}

impl FormField {
    pub fn new(id: FieldId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            required: id.is_required_by_default(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Current values of the booking form, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    fields: Vec<FormField>,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            fields: FieldId::ALL.into_iter().map(|id| FormField::new(id, "")).collect(),
        }
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: FieldId, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.id == id) {
            field.value = value.into();
        }
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Clears every value; required flags stay as they are.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Payload for the booking service with the selected time in 24-hour form.
    pub fn to_request(&self) -> Result<BookingRequest, AppError> {
        Ok(BookingRequest {
            name: self.value(FieldId::Name).to_string(),
            phone: self.value(FieldId::Phone).to_string(),
            address: self.value(FieldId::Address).to_string(),
            doctor: self.value(FieldId::Doctor).to_string(),
            service: self.value(FieldId::Service).to_string(),
            date: self.value(FieldId::Date).to_string(),
            time: to_24_hour(self.value(FieldId::Time))?,
            notes: self.value(FieldId::Notes).to_string(),
        })
    }
}

// ==============================================================================
// VALIDATION
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: FieldId,
    pub valid: bool,
}

/// Outcome of one validation pass, one entry per field checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub checks: Vec<FieldCheck>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.checks.iter().all(|c| c.valid)
    }

    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.checks
            .iter()
            .filter(|c| !c.valid)
            .map(|c| c.field)
            .collect()
    }
}

// ==============================================================================
// TIME SELECTOR
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPlaceholder {
    SelectDoctorAndDate,
    SelectDateFirst,
    SelectTime,
    Loading,
    NoSlots,
    ServerError,
}

impl SlotPlaceholder {
    pub fn text(self) -> &'static str {
        match self {
            SlotPlaceholder::SelectDoctorAndDate => "Select doctor & date first",
            SlotPlaceholder::SelectDateFirst => "Select date first",
            SlotPlaceholder::SelectTime => "Select a time",
            SlotPlaceholder::Loading => "Loading slots...",
            SlotPlaceholder::NoSlots => "No slots available",
            SlotPlaceholder::ServerError => "Server error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotOption {
    pub label: String,
    pub value: String,
}

/// What the time selector shows: a single non-selectable placeholder, or
/// selectable slots headed by the "Select a time" prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotSelect {
    Placeholder(SlotPlaceholder),
    Options(Vec<SlotOption>),
}

impl SlotSelect {
    pub fn options(&self) -> &[SlotOption] {
        match self {
            SlotSelect::Placeholder(_) => &[],
            SlotSelect::Options(options) => options,
        }
    }

    pub fn placeholder(&self) -> Option<SlotPlaceholder> {
        match self {
            SlotSelect::Placeholder(p) => Some(*p),
            SlotSelect::Options(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotLoadState {
    Unselected,
    Loading,
    LoadedEmpty,
    Loaded { count: usize },
    Error,
}

// ==============================================================================
// SUBMISSION
// ==============================================================================

pub const MSG_FIX_FIELDS: &str = "Please correct the highlighted fields.";
pub const MSG_BOOKING_IN_PROGRESS: &str = "Booking your appointment...";
pub const MSG_BOOKED: &str = "Appointment booked successfully!";
pub const MSG_SLOT_UNAVAILABLE: &str = "Slot not available.";
pub const MSG_CONNECTION_FAILED: &str = "Could not connect to booking server.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Client-side validation failed, nothing was sent.
    Invalid(Vec<FieldId>),
    Booked(BookingRequest),
    /// The service answered but refused the booking.
    Rejected(String),
    /// The service could not be reached or answered garbage.
    Failed(AppError),
}
