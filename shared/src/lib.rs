use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed session-duration tiers offered for every service.
///
/// A tier label combines the hands-on service minutes with a fixed
/// 15-minute turnaround buffer; the buffer is included in the total
/// minutes used for end-time computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionTier {
    #[serde(rename = "30MIN+15MIN")]
    Min30,
    #[serde(rename = "45MIN+15MIN")]
    Min45,
    #[serde(rename = "60MIN+15MIN")]
    Min60,
    #[serde(rename = "90MIN+15MIN")]
    Min90,
    #[serde(rename = "120MIN+15MIN")]
    Min120,
}

impl SessionTier {
    /// All tiers in catalog order. Price arrays on [`ServiceOffering`]
    /// are index-aligned with this ordering when a service offers the
    /// full set.
    pub const ALL: [SessionTier; 5] = [
        SessionTier::Min30,
        SessionTier::Min45,
        SessionTier::Min60,
        SessionTier::Min90,
        SessionTier::Min120,
    ];

    /// The wire/display label, e.g. `"45MIN+15MIN"`.
    pub fn label(&self) -> &'static str {
        match self {
            SessionTier::Min30 => "30MIN+15MIN",
            SessionTier::Min45 => "45MIN+15MIN",
            SessionTier::Min60 => "60MIN+15MIN",
            SessionTier::Min90 => "90MIN+15MIN",
            SessionTier::Min120 => "120MIN+15MIN",
        }
    }

    /// Total elapsed minutes for the tier: service minutes plus the
    /// fixed 15-minute buffer.
    pub fn total_minutes(&self) -> i64 {
        match self {
            SessionTier::Min30 => 45,
            SessionTier::Min45 => 60,
            SessionTier::Min60 => 75,
            SessionTier::Min90 => 105,
            SessionTier::Min120 => 135,
        }
    }

    /// Parse a tier from its label. Whitespace is trimmed and matching
    /// is case-insensitive; anything else is not a tier.
    pub fn from_label(label: &str) -> Option<SessionTier> {
        let normalized = label.trim().to_uppercase();
        SessionTier::ALL
            .into_iter()
            .find(|tier| tier.label() == normalized)
    }
}

impl fmt::Display for SessionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coarse-grained permission class controlling navigation and route
/// admission. Absence of a role means "unauthenticated".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    /// Canonical lowercase form used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }

    /// Parse a role string case-insensitively. Unknown strings yield
    /// `None`, which callers treat the same as an absent role.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authenticated principal, passed explicitly into access checks
/// instead of being read from ambient browser storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    /// Display name of the logged-in user (stamped onto bookings as
    /// `created_by`).
    pub name: String,
    pub role: Role,
}

impl UserSession {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// A declarative sidebar/menu item. Static configuration, never
/// mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub path: String,
    pub label: String,
    /// Roles permitted to see and enter this entry.
    pub allowed_roles: Vec<Role>,
}

impl NavigationEntry {
    pub fn new(path: &str, label: &str, allowed_roles: &[Role]) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
            allowed_roles: allowed_roles.to_vec(),
        }
    }
}

/// Role requirement attached to a protected route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RouteAccess {
    /// Any authenticated role is admitted.
    Any,
    /// Only the listed roles are admitted.
    Roles(Vec<Role>),
}

/// Outcome of a route admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteDecision {
    Admit,
    /// No session present; send the visitor to the login page.
    RedirectToLogin,
    /// Authenticated but not permitted; send back to the default view.
    RedirectToDefault,
}

/// How the client settled the booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Card,
    Cash,
    #[serde(rename = "UPI")]
    Upi,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Card => "Card",
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
        }
    }

    pub fn parse(raw: &str) -> Option<PaymentMode> {
        match raw.trim().to_lowercase().as_str() {
            "card" => Some(PaymentMode::Card),
            "cash" => Some(PaymentMode::Cash),
            "upi" => Some(PaymentMode::Upi),
            _ => None,
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One bookable service type from the catalog.
///
/// `duration_tiers`, `list_price` and `discounted_price` are parallel
/// arrays: entry `i` of each price array belongs to tier `i`. The
/// three must always have equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub duration_tiers: Vec<SessionTier>,
    pub list_price: Vec<f64>,
    pub discounted_price: Vec<f64>,
}

impl ServiceOffering {
    /// Index of `tier` within this offering's tier list, if present.
    pub fn tier_index(&self, tier: SessionTier) -> Option<usize> {
        self.duration_tiers.iter().position(|t| *t == tier)
    }

    /// Whether the parallel price arrays line up with the tier list.
    pub fn has_aligned_prices(&self) -> bool {
        self.list_price.len() == self.duration_tiers.len()
            && self.discounted_price.len() == self.duration_tiers.len()
    }
}

/// A confirmed booking as returned by the booking service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub client_name: String,
    /// Client phone number, ten digits.
    pub client_contact: String,
    pub service_id: String,
    pub service_name: String,
    /// ISO 8601 date (YYYY-MM-DD).
    pub date: String,
    /// 24-hour clock, HH:MM.
    pub start_time: String,
    /// 24-hour clock, HH:MM. May be earlier than `start_time` when the
    /// session wraps past midnight.
    pub end_time: String,
    pub session_tier: SessionTier,
    /// Discounted price resolved at booking time.
    pub price: f64,
    /// Assigned therapist/staff member.
    pub staff: String,
    pub created_by: String,
    pub payment_mode: PaymentMode,
    /// Extra payment collected outside the service price (tips,
    /// add-ons). Zero when none.
    pub other_payment: f64,
    pub room_number: String,
}

/// Submission shape for a new booking. Mirrors [`Booking`] minus the
/// server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub client_name: String,
    pub client_contact: String,
    pub service_id: String,
    pub service_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub session_tier: SessionTier,
    pub price: f64,
    pub staff: String,
    pub created_by: String,
    pub payment_mode: PaymentMode,
    pub other_payment: f64,
    pub room_number: String,
}

/// A recorded business expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub title: String,
    pub amount: f64,
    /// ISO 8601 date (YYYY-MM-DD).
    pub date: String,
}

/// Aggregated totals for one day of bookings, for dashboard display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub booking_count: usize,
    /// Sum of resolved service prices.
    pub service_revenue: f64,
    /// Sum of other-payment amounts.
    pub other_revenue: f64,
    pub card_total: f64,
    pub cash_total: f64,
    pub upi_total: f64,
}

/// Per-staff-member totals for one day, for the employee stats view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDayTotals {
    pub employee: String,
    pub booking_count: usize,
    pub service_total: f64,
    pub other_total: f64,
}

/// One day's booking count in a monthly report series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReportPoint {
    pub day: u32,
    pub count: u32,
}

/// Date selector state for the daily report views. Defaults to the
/// current local date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Default for ReportDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            year: now.year(),
            month: now.month(),
            day: now.day(),
        }
    }
}

impl ReportDate {
    /// ISO 8601 form (YYYY-MM-DD), the format the report endpoints
    /// filter on.
    pub fn iso(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Limits and defaults for the booking form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingFormConfig {
    /// Required length of a client contact number.
    pub contact_digits: usize,
    pub max_client_name_length: usize,
    /// Tier pre-selected when a draft is opened or reset.
    pub default_tier: SessionTier,
    pub max_other_payment: f64,
}

impl Default for BookingFormConfig {
    fn default() -> Self {
        Self {
            contact_digits: 10,
            max_client_name_length: 120,
            default_tier: SessionTier::Min45,
            max_other_payment: 1_000_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_total_minutes() {
        let expected = [
            (SessionTier::Min30, 45),
            (SessionTier::Min45, 60),
            (SessionTier::Min60, 75),
            (SessionTier::Min90, 105),
            (SessionTier::Min120, 135),
        ];
        for (tier, minutes) in expected {
            assert_eq!(tier.total_minutes(), minutes);
        }
    }

    #[test]
    fn test_tier_label_round_trip() {
        for tier in SessionTier::ALL {
            assert_eq!(SessionTier::from_label(tier.label()), Some(tier));
        }

        // Case-insensitive parse with surrounding whitespace
        assert_eq!(
            SessionTier::from_label(" 45min+15min "),
            Some(SessionTier::Min45)
        );
        assert_eq!(SessionTier::from_label("45MIN"), None);
        assert_eq!(SessionTier::from_label(""), None);
    }

    #[test]
    fn test_tier_serde_uses_wire_labels() {
        let json = serde_json::to_string(&SessionTier::Min90).unwrap();
        assert_eq!(json, "\"90MIN+15MIN\"");

        let parsed: SessionTier = serde_json::from_str("\"120MIN+15MIN\"").unwrap();
        assert_eq!(parsed, SessionTier::Min120);
    }

    #[test]
    fn test_role_parse_case_insensitive() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("  Employee "), Some(Role::Employee));
        assert_eq!(Role::parse("manager"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let parsed: Role = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(parsed, Role::Employee);
    }

    #[test]
    fn test_payment_mode_parse() {
        assert_eq!(PaymentMode::parse("Card"), Some(PaymentMode::Card));
        assert_eq!(PaymentMode::parse("cash"), Some(PaymentMode::Cash));
        assert_eq!(PaymentMode::parse("UPI"), Some(PaymentMode::Upi));
        assert_eq!(PaymentMode::parse("cheque"), None);
    }

    #[test]
    fn test_offering_tier_index() {
        let offering = ServiceOffering {
            id: "svc::1".to_string(),
            name: "Swedish".to_string(),
            description: String::new(),
            duration_tiers: vec![SessionTier::Min45, SessionTier::Min90],
            list_price: vec![60.0, 110.0],
            discounted_price: vec![50.0, 95.0],
        };

        assert_eq!(offering.tier_index(SessionTier::Min45), Some(0));
        assert_eq!(offering.tier_index(SessionTier::Min90), Some(1));
        assert_eq!(offering.tier_index(SessionTier::Min30), None);
        assert!(offering.has_aligned_prices());
    }

    #[test]
    fn test_offering_misaligned_prices() {
        let offering = ServiceOffering {
            id: "svc::2".to_string(),
            name: "Deep Tissue".to_string(),
            description: String::new(),
            duration_tiers: SessionTier::ALL.to_vec(),
            list_price: vec![0.0; 5],
            discounted_price: vec![0.0; 4],
        };
        assert!(!offering.has_aligned_prices());
    }

    #[test]
    fn test_report_date_iso() {
        let date = ReportDate {
            year: 2025,
            month: 3,
            day: 7,
        };
        assert_eq!(date.iso(), "2025-03-07");
    }

    #[test]
    fn test_booking_form_config_defaults() {
        let config = BookingFormConfig::default();
        assert_eq!(config.contact_digits, 10);
        assert_eq!(config.default_tier, SessionTier::Min45);
    }
}
