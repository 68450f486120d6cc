use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use shared_api::BookingApi;
use shared_config::AppConfig;
use shared_utils::Clock;

use crate::models::{BookingForm, FieldId, SlotLoadState, SubmissionOutcome};
use crate::services::{BookingSubmitter, ScrollToTop, SlotFetch, SlotLoader};
use crate::view::{FormView, ScrollSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    FieldChanged { field: FieldId, value: String },
    Submit,
    Scrolled(f64),
    ScrollTopActivated,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetOutcome {
    FieldUpdated,
    /// `None` when a newer selection superseded this load.
    Slots(Option<SlotLoadState>),
    Submission(SubmissionOutcome),
    ScrollControl { visible: bool },
    ScrolledToTop,
}

/// Work left over from `BookingWidget::dispatch` that waits on the booking
/// service.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingWork {
    LoadSlots(SlotFetch),
    Submit(BookingForm),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    Done(WidgetOutcome),
    Pending(PendingWork),
}

/// The booking page: owns the current form values and routes each user
/// event to the component that handles it.
pub struct BookingWidget {
    form: Mutex<BookingForm>,
    slots: Arc<SlotLoader>,
    submitter: BookingSubmitter,
    scroll: ScrollToTop,
}

impl BookingWidget {
    pub fn new(
        config: &AppConfig,
        api: Arc<dyn BookingApi>,
        view: Arc<dyn FormView>,
        clock: Arc<dyn Clock>,
        scroll_surface: Option<Arc<dyn ScrollSurface>>,
    ) -> Self {
        let slots = Arc::new(SlotLoader::new(api.clone(), view.clone()));
        let submitter = BookingSubmitter::new(api, view, slots.clone(), clock);

        Self {
            form: Mutex::new(BookingForm::new()),
            slots,
            submitter,
            scroll: ScrollToTop::new(scroll_surface, config.scroll_top_threshold),
        }
    }

    pub fn form(&self) -> BookingForm {
        self.lock_form().clone()
    }

    pub fn slot_state(&self) -> SlotLoadState {
        self.slots.state()
    }

    pub async fn handle(&self, event: WidgetEvent) -> WidgetOutcome {
        match self.dispatch(event) {
            Dispatch::Done(outcome) => outcome,
            Dispatch::Pending(work) => self.run(work).await,
        }
    }

    /// Applies the event's immediate effects: field values, slot tokens,
    /// form snapshots. Whatever still has to wait on the booking service is
    /// returned as `Pending`, so events dispatched in order keep that order
    /// even when their network work finishes out of order.
    pub fn dispatch(&self, event: WidgetEvent) -> Dispatch {
        match event {
            WidgetEvent::FieldChanged { field, value } => self.on_field_changed(field, value),
            WidgetEvent::Submit => Dispatch::Pending(PendingWork::Submit(self.form())),
            WidgetEvent::Scrolled(offset) => Dispatch::Done(WidgetOutcome::ScrollControl {
                visible: self.scroll.on_scroll(offset),
            }),
            WidgetEvent::ScrollTopActivated => {
                self.scroll.on_activate();
                Dispatch::Done(WidgetOutcome::ScrolledToTop)
            }
        }
    }

    pub async fn run(&self, work: PendingWork) -> WidgetOutcome {
        match work {
            PendingWork::LoadSlots(fetch) => WidgetOutcome::Slots(self.slots.finish_load(fetch).await),
            PendingWork::Submit(snapshot) => WidgetOutcome::Submission(self.submit(&snapshot).await),
        }
    }

    fn on_field_changed(&self, field: FieldId, value: String) -> Dispatch {
        let (doctor, date) = {
            let mut form = self.lock_form();
            form.set(field, value);
            (
                form.value(FieldId::Doctor).to_string(),
                form.value(FieldId::Date).to_string(),
            )
        };

        match field {
            FieldId::Doctor => {
                self.slots.on_doctor_changed();
                Dispatch::Done(WidgetOutcome::Slots(Some(self.slots.state())))
            }
            FieldId::Date => match self.slots.begin_load(&doctor, &date) {
                Some(fetch) => Dispatch::Pending(PendingWork::LoadSlots(fetch)),
                None => Dispatch::Done(WidgetOutcome::Slots(Some(SlotLoadState::Unselected))),
            },
            _ => Dispatch::Done(WidgetOutcome::FieldUpdated),
        }
    }

    async fn submit(&self, snapshot: &BookingForm) -> SubmissionOutcome {
        let outcome = self.submitter.submit(snapshot).await;

        if matches!(outcome, SubmissionOutcome::Booked(_)) {
            debug!("Clearing booking form after successful submission");
            self.lock_form().reset();
        }

        outcome
    }

    fn lock_form(&self) -> MutexGuard<'_, BookingForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
