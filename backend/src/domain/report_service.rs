//! Display-side aggregation for the dashboard and report views.
//!
//! The external backend serves raw booking lists; these helpers fold
//! them into the totals the dashboard cards and stats tables show.
//! Server-side report aggregation stays out of scope.

use log::debug;
use shared::{Booking, DailyReport, EmployeeDayTotals, ExpenseRecord, MonthlyReportPoint, PaymentMode};

/// Stateless aggregation over booking lists.
#[derive(Debug, Clone, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    /// Totals for one day of bookings: count, revenue split by service
    /// price vs. other payment, and a per-payment-mode breakdown. The
    /// payment-mode breakdown covers the full take (price plus other
    /// payment) of each booking.
    pub fn daily_totals(&self, bookings: &[Booking]) -> DailyReport {
        let mut report = DailyReport {
            booking_count: bookings.len(),
            service_revenue: 0.0,
            other_revenue: 0.0,
            card_total: 0.0,
            cash_total: 0.0,
            upi_total: 0.0,
        };

        for booking in bookings {
            report.service_revenue += booking.price;
            report.other_revenue += booking.other_payment;

            let take = booking.price + booking.other_payment;
            match booking.payment_mode {
                PaymentMode::Card => report.card_total += take,
                PaymentMode::Cash => report.cash_total += take,
                PaymentMode::Upi => report.upi_total += take,
            }
        }

        debug!(
            "Daily totals: {} bookings, {:.2} service + {:.2} other",
            report.booking_count, report.service_revenue, report.other_revenue
        );
        report
    }

    /// Per-staff totals over a day's bookings, matched on the assigned
    /// staff field.
    pub fn employee_day_totals(&self, bookings: &[Booking], employee: &str) -> EmployeeDayTotals {
        let mut totals = EmployeeDayTotals {
            employee: employee.to_string(),
            booking_count: 0,
            service_total: 0.0,
            other_total: 0.0,
        };

        for booking in bookings.iter().filter(|b| b.staff == employee) {
            totals.booking_count += 1;
            totals.service_total += booking.price;
            totals.other_total += booking.other_payment;
        }

        totals
    }

    /// Sum of a day's recorded expenses, for the expenses view footer.
    pub fn expense_total(&self, expenses: &[ExpenseRecord]) -> f64 {
        expenses.iter().map(|e| e.amount).sum()
    }

    /// Expand a sparse (day, count) series into one point per calendar
    /// day of the month, filling absent days with zero.
    pub fn monthly_series(&self, month: u32, year: u32, counts: &[(u32, u32)]) -> Vec<MonthlyReportPoint> {
        let days = self.days_in_month(month, year);

        (1..=days)
            .map(|day| MonthlyReportPoint {
                day,
                count: counts
                    .iter()
                    .find(|(d, _)| *d == day)
                    .map(|(_, c)| *c)
                    .unwrap_or(0),
            })
            .collect()
    }

    /// Get the number of days in a given month and year. `month` must
    /// be in the 1-12 range.
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        debug_assert!((1..=12).contains(&month), "invalid month: {}", month);
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year.
    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }
}
