//! Path-based navigation with protected routes.

/// Every page of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Dashboard,
    Applicants,
    CreateApplicant,
    UpdateApplicant,
    EmployApplicant,
    Employees,
    CreateEmployee,
    UpdateEmployee,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Login,
        Route::Dashboard,
        Route::Applicants,
        Route::CreateApplicant,
        Route::UpdateApplicant,
        Route::EmployApplicant,
        Route::Employees,
        Route::CreateEmployee,
        Route::UpdateEmployee,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/auth/login",
            Route::Dashboard => "/app",
            Route::Applicants => "/app/applicants",
            Route::CreateApplicant => "/app/applicants/create",
            Route::UpdateApplicant => "/app/applicants/update",
            Route::EmployApplicant => "/app/applicants/employ",
            Route::Employees => "/app/employees",
            Route::CreateEmployee => "/app/employees/create",
            Route::UpdateEmployee => "/app/employees/update",
        }
    }

    /// Exact path match; trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }

    /// Pages under `/app` need a logged-in operator.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Pages that edit the currently selected record.
    pub fn needs_selection(&self) -> Option<Route> {
        match self {
            Route::UpdateApplicant | Route::EmployApplicant => Some(Route::Applicants),
            Route::UpdateEmployee => Some(Route::Employees),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Dashboard => "Dashboard",
            Route::Applicants => "Applicants",
            Route::CreateApplicant => "New Applicant",
            Route::UpdateApplicant => "Edit Applicant",
            Route::EmployApplicant => "Employ Applicant",
            Route::Employees => "Employees",
            Route::CreateEmployee => "New Employee",
            Route::UpdateEmployee => "Edit Employee",
        }
    }
}

/// Facts the router needs about the current session.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard {
    pub is_logged_in: bool,
    pub has_selected_applicant: bool,
    pub has_selected_employee: bool,
}

impl RouteGuard {
    fn home(&self) -> Route {
        if self.is_logged_in { Route::Dashboard } else { Route::Login }
    }

    fn has_selection_for(&self, route: Route) -> bool {
        match route {
            Route::UpdateApplicant | Route::EmployApplicant => self.has_selected_applicant,
            Route::UpdateEmployee => self.has_selected_employee,
            _ => true,
        }
    }
}

/// Resolve a path to the page that should actually render.
pub fn resolve(path: &str, guard: RouteGuard) -> Route {
    match Route::from_path(path) {
        Some(route) => resolve_route(route, guard),
        None => guard.home(),
    }
}

/// Apply auth and selection redirects to a known route.
pub fn resolve_route(route: Route, guard: RouteGuard) -> Route {
    if route.is_protected() && !guard.is_logged_in {
        return Route::Login;
    }
    if route == Route::Login && guard.is_logged_in {
        return Route::Dashboard;
    }
    if let Some(fallback) = route.needs_selection()
        && !guard.has_selection_for(route)
    {
        return fallback;
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> RouteGuard {
        RouteGuard {
            is_logged_in: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("app/employees/"), Some(Route::Employees));
    }

    #[test]
    fn test_unknown_path_redirects_home() {
        assert_eq!(resolve("/nowhere", RouteGuard::default()), Route::Login);
        assert_eq!(resolve("/nowhere", logged_in()), Route::Dashboard);
        assert_eq!(resolve("", logged_in()), Route::Dashboard);
    }

    #[test]
    fn test_protected_routes_require_login() {
        assert_eq!(resolve("/app/applicants", RouteGuard::default()), Route::Login);
        assert_eq!(resolve("/app/applicants", logged_in()), Route::Applicants);
    }

    #[test]
    fn test_login_page_skipped_when_logged_in() {
        assert_eq!(resolve("/auth/login", logged_in()), Route::Dashboard);
        assert_eq!(resolve("/auth/login", RouteGuard::default()), Route::Login);
    }

    #[test]
    fn test_edit_pages_need_selection() {
        assert_eq!(resolve("/app/applicants/employ", logged_in()), Route::Applicants);
        assert_eq!(resolve("/app/employees/update", logged_in()), Route::Employees);

        let guard = RouteGuard {
            is_logged_in: true,
            has_selected_applicant: true,
            has_selected_employee: false,
        };
        assert_eq!(resolve("/app/applicants/update", guard), Route::UpdateApplicant);
        assert_eq!(resolve("/app/applicants/employ", guard), Route::EmployApplicant);
        assert_eq!(resolve("/app/employees/update", guard), Route::Employees);
        assert_eq!(resolve("/app/employees/create", guard), Route::CreateEmployee);
    }
}
