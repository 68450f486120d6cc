use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, instrument, warn};

use shared_api::BookingApi;
use shared_models::SlotQuery;
use shared_utils::to_label;

use crate::models::{SlotLoadState, SlotOption, SlotPlaceholder, SlotSelect};
use crate::view::FormView;

/// A slot request whose token is already issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFetch {
    pub token: u64,
    pub query: SlotQuery,
}

struct SlotTracker {
    token: u64,
    state: SlotLoadState,
}

/// Keeps the time selector in step with the chosen doctor and date.
///
/// Every change issues a new request token. A slot response is rendered only
/// while its token is still the latest, so a slow answer for an older date
/// never overwrites a newer one.
pub struct SlotLoader {
    api: Arc<dyn BookingApi>,
    view: Arc<dyn FormView>,
    tracker: Mutex<SlotTracker>,
}

impl SlotLoader {
    pub fn new(api: Arc<dyn BookingApi>, view: Arc<dyn FormView>) -> Self {
        Self {
            api,
            view,
            tracker: Mutex::new(SlotTracker {
                token: 0,
                state: SlotLoadState::Unselected,
            }),
        }
    }

    pub fn state(&self) -> SlotLoadState {
        self.tracker().state.clone()
    }

    pub fn latest_token(&self) -> u64 {
        self.tracker().token
    }

    /// Shows `placeholder` and invalidates any request still in flight.
    pub fn reset(&self, placeholder: SlotPlaceholder) -> u64 {
        self.issue(SlotLoadState::Unselected, SlotSelect::Placeholder(placeholder))
    }

    /// A new doctor invalidates whatever was loaded for the old one.
    pub fn on_doctor_changed(&self) {
        self.reset(SlotPlaceholder::SelectDateFirst);
    }

    /// Loads slots for the pair. Returns the state rendered, or `None` when a
    /// newer selection made this response stale.
    pub async fn on_date_changed(&self, doctor: &str, date: &str) -> Option<SlotLoadState> {
        match self.begin_load(doctor, date) {
            Some(fetch) => self.finish_load(fetch).await,
            None => Some(SlotLoadState::Unselected),
        }
    }

    /// Synchronous half of a load: issues the request token and shows the
    /// loading placeholder. `None` when doctor or date is missing, in which
    /// case the selector asks for both and no request is needed.
    pub fn begin_load(&self, doctor: &str, date: &str) -> Option<SlotFetch> {
        let (doctor, date) = (doctor.trim(), date.trim());

        if doctor.is_empty() || date.is_empty() {
            self.reset(SlotPlaceholder::SelectDoctorAndDate);
            return None;
        }

        let token = self.issue(
            SlotLoadState::Loading,
            SlotSelect::Placeholder(SlotPlaceholder::Loading),
        );

        Some(SlotFetch {
            token,
            query: SlotQuery::new(doctor, date),
        })
    }

    #[instrument(skip(self), fields(token = fetch.token))]
    pub async fn finish_load(&self, fetch: SlotFetch) -> Option<SlotLoadState> {
        let SlotFetch { token, query } = fetch;
        let result = self.api.fetch_slots(&query).await;

        let (state, select) = match result {
            Ok(list) if list.is_empty() => (
                SlotLoadState::LoadedEmpty,
                SlotSelect::Placeholder(SlotPlaceholder::NoSlots),
            ),
            Ok(list) => {
                let options = list.slots.iter().map(|slot| slot_option(slot)).collect::<Vec<_>>();
                (
                    SlotLoadState::Loaded { count: options.len() },
                    SlotSelect::Options(options),
                )
            }
            Err(e) => {
                error!("Slot fetch error for doctor {} on {}: {}", query.doctor, query.date, e);
                (
                    SlotLoadState::Error,
                    SlotSelect::Placeholder(SlotPlaceholder::ServerError),
                )
            }
        };

        if self.apply(token, state.clone(), select) {
            Some(state)
        } else {
            debug!("Dropping stale slot response (token {})", token);
            None
        }
    }

    fn tracker(&self) -> MutexGuard<'_, SlotTracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn issue(&self, state: SlotLoadState, select: SlotSelect) -> u64 {
        let mut tracker = self.tracker();
        tracker.token += 1;
        tracker.state = state;
        self.view.render_slots(select);
        tracker.token
    }

    fn apply(&self, token: u64, state: SlotLoadState, select: SlotSelect) -> bool {
        let mut tracker = self.tracker();
        if tracker.token != token {
            return false;
        }
        tracker.state = state;
        self.view.render_slots(select);
        true
    }
}

fn slot_option(slot: &str) -> SlotOption {
    let label = to_label(slot).unwrap_or_else(|e| {
        warn!("Service returned an unreadable slot: {}", e);
        slot.to_string()
    });

    SlotOption {
        label,
        value: slot.to_string(),
    }
}
