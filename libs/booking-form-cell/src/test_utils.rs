//! In-memory doubles for driving the widget without a page or a network.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

use shared_api::BookingApi;
use shared_models::{AppError, BookingRequest, BookingResponse, SlotList, SlotQuery, StatusMessage};

use crate::models::{FieldId, SlotSelect};
use crate::view::{FormView, ScrollSurface};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ==============================================================================
// VIEW
// ==============================================================================

#[derive(Debug, Default)]
struct ViewState {
    statuses: Vec<StatusMessage>,
    slots: Vec<SlotSelect>,
    invalid: BTreeSet<FieldId>,
    marks: usize,
    acknowledgments: Vec<String>,
    resets: usize,
}

/// Records everything rendered so tests can assert on it.
#[derive(Debug, Default)]
pub struct RecordingView {
    state: Mutex<ViewState>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn status(&self) -> Option<StatusMessage> {
        lock(&self.state).statuses.last().cloned()
    }

    pub fn status_history(&self) -> Vec<StatusMessage> {
        lock(&self.state).statuses.clone()
    }

    pub fn slots(&self) -> Option<SlotSelect> {
        lock(&self.state).slots.last().cloned()
    }

    pub fn slot_renders(&self) -> Vec<SlotSelect> {
        lock(&self.state).slots.clone()
    }

    pub fn invalid_fields(&self) -> Vec<FieldId> {
        lock(&self.state).invalid.iter().copied().collect()
    }

    pub fn mark_count(&self) -> usize {
        lock(&self.state).marks
    }

    pub fn acknowledgments(&self) -> Vec<String> {
        lock(&self.state).acknowledgments.clone()
    }

    pub fn reset_count(&self) -> usize {
        lock(&self.state).resets
    }
}

impl FormView for RecordingView {
    fn show_status(&self, status: StatusMessage) {
        lock(&self.state).statuses.push(status);
    }

    fn render_slots(&self, slots: SlotSelect) {
        lock(&self.state).slots.push(slots);
    }

    fn mark_field(&self, field: FieldId, valid: bool) {
        let mut state = lock(&self.state);
        state.marks += 1;
        if valid {
            state.invalid.remove(&field);
        } else {
            state.invalid.insert(field);
        }
    }

    fn acknowledge(&self, message: &str) {
        lock(&self.state).acknowledgments.push(message.to_string());
    }

    fn reset_form(&self) {
        let mut state = lock(&self.state);
        state.resets += 1;
        state.invalid.clear();
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    visibility: Mutex<Vec<bool>>,
    scrolls: Mutex<Vec<f64>>,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visibility_changes(&self) -> Vec<bool> {
        lock(&self.visibility).clone()
    }

    pub fn scrolls(&self) -> Vec<f64> {
        lock(&self.scrolls).clone()
    }
}

impl ScrollSurface for RecordingSurface {
    fn set_control_visible(&self, visible: bool) {
        lock(&self.visibility).push(visible);
    }

    fn smooth_scroll_to(&self, top: f64) {
        lock(&self.scrolls).push(top);
    }
}

// ==============================================================================
// BOOKING SERVICE
// ==============================================================================

/// Canned booking service. Slot answers are keyed by date; a gated date
/// holds its answer until the gate is notified.
#[derive(Debug)]
pub struct StubBookingApi {
    slots: Mutex<HashMap<String, Result<SlotList, AppError>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    booking_gate: Mutex<Option<Arc<Notify>>>,
    booking: Mutex<Result<BookingResponse, AppError>>,
    slot_queries: Mutex<Vec<SlotQuery>>,
    bookings: Mutex<Vec<BookingRequest>>,
}

impl Default for StubBookingApi {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
            booking_gate: Mutex::new(None),
            booking: Mutex::new(Ok(BookingResponse::success())),
            slot_queries: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
        }
    }
}

impl StubBookingApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots<I, S>(self, date: &str, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lock(&self.slots).insert(date.to_string(), Ok(SlotList::new(slots)));
        self
    }

    pub fn with_slot_error(self, date: &str, error: AppError) -> Self {
        lock(&self.slots).insert(date.to_string(), Err(error));
        self
    }

    pub fn with_booking_response(self, response: Result<BookingResponse, AppError>) -> Self {
        *lock(&self.booking) = response;
        self
    }

    /// Holds the slot answer for `date` until the returned handle is notified.
    pub fn gate(&self, date: &str) -> Arc<Notify> {
        lock(&self.gates)
            .entry(date.to_string())
            .or_insert_with(|| Arc::new(Notify::new()))
            .clone()
    }

    /// Holds every booking answer until the returned handle is notified.
    pub fn gate_bookings(&self) -> Arc<Notify> {
        lock(&self.booking_gate)
            .get_or_insert_with(|| Arc::new(Notify::new()))
            .clone()
    }

    pub fn slot_queries(&self) -> Vec<SlotQuery> {
        lock(&self.slot_queries).clone()
    }

    pub fn bookings(&self) -> Vec<BookingRequest> {
        lock(&self.bookings).clone()
    }
}

#[async_trait]
impl BookingApi for StubBookingApi {
    async fn fetch_slots(&self, query: &SlotQuery) -> Result<SlotList, AppError> {
        lock(&self.slot_queries).push(query.clone());

        let gate = lock(&self.gates).get(&query.date).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        lock(&self.slots)
            .get(&query.date)
            .cloned()
            .unwrap_or_else(|| Ok(SlotList::default()))
    }

    async fn submit_booking(&self, request: &BookingRequest) -> Result<BookingResponse, AppError> {
        lock(&self.bookings).push(request.clone());

        let gate = lock(&self.booking_gate).clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        lock(&self.booking).clone()
    }
}
