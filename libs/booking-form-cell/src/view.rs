use shared_models::StatusMessage;

use crate::models::{FieldId, SlotSelect};

/// Rendering side of the booking form.
pub trait FormView: Send + Sync {
    fn show_status(&self, status: StatusMessage);

    fn render_slots(&self, slots: SlotSelect);

    /// Called for every field on every validation pass.
    fn mark_field(&self, field: FieldId, valid: bool);

    /// Blocking acknowledgment after a successful booking.
    fn acknowledge(&self, message: &str);

    fn reset_form(&self);
}

/// The page hosting the scroll-to-top control.
pub trait ScrollSurface: Send + Sync {
    fn set_control_visible(&self, visible: bool);

    /// Smoothly scrolls the page to vertical offset `top`.
    fn smooth_scroll_to(&self, top: f64);
}
