pub mod booking;
pub mod service_offering;

pub use booking::{BookingDraft, BookingValidationError};
pub use service_offering::CatalogValidationError;
