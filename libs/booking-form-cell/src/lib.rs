// =====================================================================================
// BOOKING FORM CELL - APPOINTMENT WIDGET LOGIC
// =====================================================================================
//
// Everything the booking widget does between user input and the remote
// booking service:
// - form validation (required fields, phone, appointment date)
// - slot loading for the selected doctor and date
// - booking submission and status reporting
// - the scroll-to-top control
//
// Rendering is delegated to a `FormView`, so the same logic drives a browser
// page, a terminal, or a test double.
//
// =====================================================================================

pub mod handlers;
pub mod models;
pub mod services;
pub mod test_utils;
pub mod view;

pub use handlers::{BookingWidget, Dispatch, PendingWork, WidgetEvent, WidgetOutcome};
pub use models::*;
pub use services::{BookingSubmitter, FormValidator, ScrollToTop, SlotFetch, SlotLoader};
pub use view::{FormView, ScrollSurface};
