use booking_form_cell::{BookingForm, FieldId, FormView, ScrollSurface, SlotSelect};
use shared_models::{StatusKind, StatusMessage};

pub struct TerminalView;

impl FormView for TerminalView {
    fn show_status(&self, status: StatusMessage) {
        let marker = match status.kind {
            StatusKind::Info => "..",
            StatusKind::Error => "!!",
            StatusKind::Success => "ok",
        };
        println!("[{}] {}", marker, status.text);
    }

    fn render_slots(&self, slots: SlotSelect) {
        match slots {
            SlotSelect::Placeholder(placeholder) => println!("time: <{}>", placeholder.text()),
            SlotSelect::Options(options) => {
                println!("time: select a time");
                for option in options {
                    println!("  {:<10} (set time {})", option.label, option.value);
                }
            }
        }
    }

    fn mark_field(&self, field: FieldId, valid: bool) {
        if !valid {
            println!("  {} is invalid", field);
        }
    }

    fn acknowledge(&self, message: &str) {
        println!("*** {} ***", message);
    }

    fn reset_form(&self) {
        println!("form cleared");
    }
}

pub struct TerminalSurface;

impl ScrollSurface for TerminalSurface {
    fn set_control_visible(&self, visible: bool) {
        println!("back-to-top control {}", if visible { "shown" } else { "hidden" });
    }

    fn smooth_scroll_to(&self, top: f64) {
        println!("scrolling smoothly to {}", top);
    }
}

pub fn print_form(form: &BookingForm) {
    for field in form.fields() {
        let marker = if field.required { "*" } else { " " };
        println!("{}{:<8} {}", marker, field.id.as_str(), field.value);
    }
}
