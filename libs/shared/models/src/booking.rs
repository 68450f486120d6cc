use serde::{Deserialize, Serialize};

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

/// Body of `POST /create-appointment`. `time` is always 24-hour `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub doctor: String,
    pub service: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub notes: String,
}

/// Query of `GET /available-slots`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotQuery {
    pub date: String,
    pub doctor: String,
}

impl SlotQuery {
    pub fn new(doctor: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            doctor: doctor.into(),
        }
    }
}

// ==============================================================================
// RESPONSE MODELS
// ==============================================================================

/// Ordered 24-hour slot times for one doctor and date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotList {
    #[serde(default)]
    pub slots: Vec<String>,
}

impl SlotList {
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
}

pub const BOOKING_STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BookingResponse {
    pub fn success() -> Self {
        Self {
            status: BOOKING_STATUS_SUCCESS.to_string(),
            error: None,
        }
    }

    pub fn failed(error: Option<&str>) -> Self {
        Self {
            status: "failed".to_string(),
            error: error.map(str::to_string),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == BOOKING_STATUS_SUCCESS
    }

    /// Service supplied reason, ignoring blank strings.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
    }
}
