// ============================================================================
// NAVIGATION - Gate, guard y router de pestañas (funciones puras)
// ============================================================================

use crate::models::auth::{Role, User};
use crate::models::setup::SetupStatus;
use crate::state::{AuthPhase, SetupPhase};

/// Qué renderiza el gate de setup
#[derive(Debug, PartialEq)]
pub enum GateView<'a> {
    Loading,
    Setup(&'a SetupStatus),
    App,
}

pub fn setup_gate(phase: &SetupPhase) -> GateView<'_> {
    match phase {
        SetupPhase::Checking => GateView::Loading,
        SetupPhase::Incomplete(status) => GateView::Setup(status),
        SetupPhase::Complete => GateView::App,
    }
}

/// Qué renderiza el guard de rutas protegidas
#[derive(Debug, PartialEq)]
pub enum GuardView<'a> {
    Loading,
    Login,
    Protected(&'a User),
}

pub fn route_guard(phase: &AuthPhase) -> GuardView<'_> {
    match phase {
        AuthPhase::Pending => GuardView::Loading,
        AuthPhase::Anonymous => GuardView::Login,
        AuthPhase::Authenticated(user) => GuardView::Protected(user),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Departments,
    Programs,
    Courses,
    Users,
    Subjects,
    Questions,
    Exams,
    Analytics,
    Results,
}

impl Tab {
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Departments => "departments",
            Tab::Programs => "programs",
            Tab::Courses => "courses",
            Tab::Users => "users",
            Tab::Subjects => "subjects",
            Tab::Questions => "questions",
            Tab::Exams => "exams",
            Tab::Analytics => "analytics",
            Tab::Results => "results",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Departments => "Departments",
            Tab::Programs => "Programs",
            Tab::Courses => "Courses",
            Tab::Users => "Users",
            Tab::Subjects => "Subjects",
            Tab::Questions => "Question Bank",
            Tab::Exams => "Exams",
            Tab::Analytics => "Analytics",
            Tab::Results => "Results",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        const ALL: [Tab; 10] = [
            Tab::Dashboard,
            Tab::Departments,
            Tab::Programs,
            Tab::Courses,
            Tab::Users,
            Tab::Subjects,
            Tab::Questions,
            Tab::Exams,
            Tab::Analytics,
            Tab::Results,
        ];
        ALL.into_iter().find(|tab| tab.id() == id)
    }
}

/// Pestañas permitidas por rol, en orden de menú
pub fn tabs_for(role: Role) -> &'static [Tab] {
    match role {
        Role::SuperAdmin => &[Tab::Dashboard, Tab::Departments, Tab::Programs, Tab::Courses, Tab::Users],
        Role::Teacher => &[Tab::Dashboard, Tab::Subjects, Tab::Questions, Tab::Exams, Tab::Analytics],
        Role::Student => &[Tab::Dashboard, Tab::Exams, Tab::Results],
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Overview(Role),
    Departments,
    Programs,
    Courses,
    Users,
    /// Pestañas sin pantalla de gestión todavía (contenido de relleno)
    Placeholder(Tab),
    NotFound,
}

/// Rol + id de pestaña -> exactamente una pantalla.
/// No filtra por permisos: quien llama solo ofrece `tabs_for(role)`.
pub fn screen_for(role: Role, tab_id: &str) -> Screen {
    match Tab::from_id(tab_id) {
        Some(Tab::Dashboard) => Screen::Overview(role),
        Some(Tab::Departments) => Screen::Departments,
        Some(Tab::Programs) => Screen::Programs,
        Some(Tab::Courses) => Screen::Courses,
        Some(Tab::Users) => Screen::Users,
        Some(tab) => Screen::Placeholder(tab),
        None => Screen::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(role: Role) -> Vec<&'static str> {
        tabs_for(role).iter().map(Tab::id).collect()
    }

    #[test]
    fn role_tab_table() {
        assert_eq!(ids(Role::SuperAdmin), ["dashboard", "departments", "programs", "courses", "users"]);
        assert_eq!(ids(Role::Teacher), ["dashboard", "subjects", "questions", "exams", "analytics"]);
        assert_eq!(ids(Role::Student), ["dashboard", "exams", "results"]);
    }

    #[test]
    fn every_permitted_tab_resolves_to_a_screen() {
        for role in [Role::SuperAdmin, Role::Teacher, Role::Student] {
            for tab in tabs_for(role) {
                assert_ne!(screen_for(role, tab.id()), Screen::NotFound);
                assert_eq!(Tab::from_id(tab.id()), Some(*tab));
            }
        }
    }

    #[test]
    fn screen_mapping() {
        assert_eq!(screen_for(Role::Teacher, "dashboard"), Screen::Overview(Role::Teacher));
        assert_eq!(screen_for(Role::SuperAdmin, "programs"), Screen::Programs);
        assert_eq!(screen_for(Role::Student, "results"), Screen::Placeholder(Tab::Results));
        assert_eq!(screen_for(Role::Student, "gradebook"), Screen::NotFound);
        // tabs outside the role's menu are not blocked here
        assert_eq!(screen_for(Role::Student, "users"), Screen::Users);
    }

    #[test]
    fn gate_and_guard() {
        let status = SetupStatus::default();
        assert_eq!(setup_gate(&SetupPhase::Checking), GateView::Loading);
        assert_eq!(setup_gate(&SetupPhase::Incomplete(status.clone())), GateView::Setup(&status));
        assert_eq!(setup_gate(&SetupPhase::Complete), GateView::App);

        let user = User {
            id: "u-1".into(),
            name: "Sam".into(),
            email: "sam@example.edu".into(),
            role: Role::Student,
            phone: None,
            dept_id: None,
            status: None,
        };
        assert_eq!(route_guard(&AuthPhase::Pending), GuardView::Loading);
        assert_eq!(route_guard(&AuthPhase::Anonymous), GuardView::Login);
        let phase = AuthPhase::Authenticated(user.clone());
        assert_eq!(route_guard(&phase), GuardView::Protected(&user));
    }
}
