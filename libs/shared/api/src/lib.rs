pub mod client;

pub use client::{BookingApi, BookingApiClient, AVAILABLE_SLOTS_PATH, CREATE_APPOINTMENT_PATH};
