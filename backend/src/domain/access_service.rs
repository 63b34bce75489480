//! Role-based navigation filtering and route admission.
//!
//! The presentation layer passes the current session (or its absence)
//! into these checks explicitly; nothing here reads ambient state.

use log::debug;
use shared::{NavigationEntry, Role, RouteAccess, RouteDecision, UserSession};

/// Stateless access filter deciding which navigation entries are
/// visible and which protected views are enterable for a given role.
#[derive(Debug, Clone, Default)]
pub struct AccessService;

impl AccessService {
    pub fn new() -> Self {
        Self
    }

    /// Whether `role` may see and enter `entry`. An absent role (an
    /// unauthenticated visitor) is allowed nothing.
    pub fn is_allowed(&self, entry: &NavigationEntry, role: Option<&Role>) -> bool {
        match role {
            None => false,
            Some(role) => entry.allowed_roles.contains(role),
        }
    }

    /// The ordered subsequence of `entries` visible to `role`. The
    /// input is not mutated and relative order is preserved.
    pub fn filter_menu(&self, entries: &[NavigationEntry], role: Option<&Role>) -> Vec<NavigationEntry> {
        let visible: Vec<NavigationEntry> = entries
            .iter()
            .filter(|entry| self.is_allowed(entry, role))
            .cloned()
            .collect();

        debug!(
            "Menu filter for role {:?}: {} of {} entries visible",
            role.map(Role::as_str),
            visible.len(),
            entries.len()
        );
        visible
    }

    /// Decide admission to a route guarded by `access` for `role`.
    ///
    /// Unauthenticated visitors are redirected to login regardless of
    /// the requirement; authenticated visitors outside the required
    /// role set are sent back to the default view.
    pub fn authorize_route(&self, access: &RouteAccess, role: Option<&Role>) -> RouteDecision {
        let Some(role) = role else {
            return RouteDecision::RedirectToLogin;
        };

        match access {
            RouteAccess::Any => RouteDecision::Admit,
            RouteAccess::Roles(allowed) if allowed.contains(role) => RouteDecision::Admit,
            RouteAccess::Roles(_) => RouteDecision::RedirectToDefault,
        }
    }

    /// Convenience wrappers over the whole session context the login
    /// collaborator establishes.
    pub fn filter_menu_for_session(
        &self,
        entries: &[NavigationEntry],
        session: Option<&UserSession>,
    ) -> Vec<NavigationEntry> {
        self.filter_menu(entries, session.map(|s| &s.role))
    }

    pub fn authorize_route_for_session(
        &self,
        access: &RouteAccess,
        session: Option<&UserSession>,
    ) -> RouteDecision {
        self.authorize_route(access, session.map(|s| &s.role))
    }

    /// The dashboard sidebar: every navigable view with its role set.
    /// Static configuration; shared between the menu and the route
    /// guards so the two can never drift apart.
    pub fn default_menu(&self) -> Vec<NavigationEntry> {
        const BOTH: &[Role] = &[Role::Admin, Role::Employee];
        const ADMIN: &[Role] = &[Role::Admin];

        vec![
            NavigationEntry::new("/dashboard", "Dashboard", BOTH),
            NavigationEntry::new("/dashboard/employees", "Employees", ADMIN),
            NavigationEntry::new("/dashboard/bookings", "Create Bookings", BOTH),
            NavigationEntry::new("/dashboard/today/bookings", "Today Bookings", BOTH),
            NavigationEntry::new("/dashboard/monthly/report", "Booking History", ADMIN),
            NavigationEntry::new("/dashboard/massages", "Massages", BOTH),
            NavigationEntry::new("/dashboard/analytics", "Analytics", ADMIN),
            NavigationEntry::new("/dashboard/employeestats", "Employee Stats", ADMIN),
            NavigationEntry::new("/dashboard/today/expenses", "Expenses", ADMIN),
            NavigationEntry::new("/dashboard/clients", "Clients", ADMIN),
        ]
    }
}
