use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use shared_api::BookingApi;
use shared_models::StatusMessage;
use shared_utils::Clock;

use crate::models::{
    BookingForm, FieldId, SlotPlaceholder, SubmissionOutcome, MSG_BOOKED,
    MSG_BOOKING_IN_PROGRESS, MSG_CONNECTION_FAILED, MSG_FIX_FIELDS, MSG_SLOT_UNAVAILABLE,
};
use crate::services::{FormValidator, SlotLoader};
use crate::view::FormView;

/// Validates the form and sends it to the booking service.
///
/// Submissions are independent of each other; a second submit while one is
/// in flight sends a second request.
pub struct BookingSubmitter {
    api: Arc<dyn BookingApi>,
    view: Arc<dyn FormView>,
    slots: Arc<SlotLoader>,
    validator: FormValidator,
}

impl BookingSubmitter {
    pub fn new(
        api: Arc<dyn BookingApi>,
        view: Arc<dyn FormView>,
        slots: Arc<SlotLoader>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            api,
            view,
            slots,
            validator: FormValidator::new(clock),
        }
    }

    /// Runs validation, marking every field, and returns the fields that failed.
    pub fn validate(&self, form: &BookingForm) -> Vec<FieldId> {
        let report = self.validator.validate(form.fields());
        for check in &report.checks {
            self.view.mark_field(check.field, check.valid);
        }
        report.invalid_fields()
    }

    #[instrument(skip(self, form))]
    pub async fn submit(&self, form: &BookingForm) -> SubmissionOutcome {
        let invalid = self.validate(form);
        if !invalid.is_empty() {
            self.view.show_status(StatusMessage::error(MSG_FIX_FIELDS));
            return SubmissionOutcome::Invalid(invalid);
        }

        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                debug!("Selected time is not usable: {}", e);
                self.view.mark_field(FieldId::Time, false);
                self.view.show_status(StatusMessage::error(MSG_FIX_FIELDS));
                return SubmissionOutcome::Invalid(vec![FieldId::Time]);
            }
        };

        self.view.show_status(StatusMessage::info(MSG_BOOKING_IN_PROGRESS));

        match self.api.submit_booking(&request).await {
            Ok(response) if response.is_success() => {
                info!(
                    "Appointment booked with doctor {} on {} at {}",
                    request.doctor, request.date, request.time
                );
                self.view.show_status(StatusMessage::success(MSG_BOOKED));
                self.view.acknowledge(MSG_BOOKED);
                self.view.reset_form();
                self.slots.reset(SlotPlaceholder::SelectTime);
                SubmissionOutcome::Booked(request)
            }
            Ok(response) => {
                let reason = response
                    .error_message()
                    .unwrap_or(MSG_SLOT_UNAVAILABLE)
                    .to_string();
                warn!("Booking rejected by service (status {:?}): {}", response.status, reason);
                self.view.show_status(StatusMessage::error(reason.clone()));
                SubmissionOutcome::Rejected(reason)
            }
            Err(e) => {
                error!("Booking error: {}", e);
                self.view.show_status(StatusMessage::error(MSG_CONNECTION_FAILED));
                SubmissionOutcome::Failed(e)
            }
        }
    }
}
