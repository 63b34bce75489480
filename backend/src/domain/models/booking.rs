//! In-progress state of the booking form.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::{PaymentMode, SessionTier};

/// The transient, unsaved state of a booking being filled in.
///
/// Created empty when the booking view opens, mutated through
/// [`BookingService`](crate::domain::booking_service::BookingService)
/// on every field edit, and reset after a successful submission.
/// `derived_price` and `derived_end_time` are recomputed whenever the
/// service, tier or start time changes; a draft is never submit-valid
/// while a derivation is stale or failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub client_name: String,
    pub client_contact: String,
    /// Selected service, if any. `service_name` mirrors the catalog
    /// name for the submission payload.
    pub service_id: Option<String>,
    pub service_name: String,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub session_tier: SessionTier,
    /// End time derived from `start_time` + tier minutes. `None` until
    /// a start time is set.
    pub derived_end_time: Option<NaiveTime>,
    /// Whether the derived end time wrapped past midnight.
    pub crosses_midnight: bool,
    /// Discounted price derived from the selected service and tier.
    /// Zero until a service is selected.
    pub derived_price: f64,
    /// Assigned therapist/staff member.
    pub staff: String,
    pub created_by: String,
    pub payment_mode: PaymentMode,
    pub other_payment: f64,
    pub room_number: String,
}

/// Field-level problems that block submission of a draft.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("Client name cannot be empty")]
    EmptyClientName,
    #[error("Client name is too long")]
    ClientNameTooLong,
    #[error("Client contact must be exactly {expected} digits")]
    InvalidClientContact { expected: usize },
    #[error("No service selected")]
    NoServiceSelected,
    #[error("No booking date set")]
    NoDateSet,
    #[error("No start time set")]
    NoStartTimeSet,
    #[error("Other payment cannot be negative")]
    NegativeOtherPayment,
    #[error("Other payment is too large")]
    OtherPaymentTooLarge,
}
