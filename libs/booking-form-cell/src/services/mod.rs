pub mod scroll;
pub mod slots;
pub mod submission;
pub mod validation;

pub use scroll::ScrollToTop;
pub use slots::{SlotFetch, SlotLoader};
pub use submission::BookingSubmitter;
pub use validation::FormValidator;
