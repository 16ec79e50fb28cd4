use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireRole, layout::Layout},
    pages::{
        availability::AvailabilityPage,
        home::{HomePage, NotFoundPage, UnauthorizedPage},
        homecare::HomecarePage,
        homecare_requests::HomecareRequestsPage,
        signin::{HomecareSignInPage, SignInPage},
        signup::SignUpPage,
        student_assigned::StudentAssignedPage,
        student_requests::StudentRequestsPage,
        students::StudentsPage,
    },
    state::{
        auth::{AuthProvider, ADMIN_ROLES, HOMECARE_ROLES},
        notify::provide_notifier,
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/signin",
    "/signin-homecare",
    "/signup",
    "/",
    "/homecare",
    "/students",
    "/homecare-request",
    "/student-availability",
    "/student-request",
    "/student-assigned",
    "/unauthorized",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/",
    "/homecare",
    "/students",
    "/homecare-request",
    "/student-availability",
];

pub const HOMECARE_ROUTE_PATHS: &[&str] = &["/student-request", "/student-assigned"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/signin", "/signin-homecare", "/signup", "/unauthorized"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_notifier();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/signin" view=SignInPage/>
                    <Route path="/signin-homecare" view=HomecareSignInPage/>
                    <Route path="/signup" view=SignUpPage/>
                    <Route path="/" view=ProtectedHome/>
                    <Route path="/homecare" view=ProtectedHomecare/>
                    <Route path="/students" view=ProtectedStudents/>
                    <Route path="/homecare-request" view=ProtectedHomecareRequests/>
                    <Route path="/student-availability" view=ProtectedAvailability/>
                    <Route path="/student-request" view=ProtectedStudentRequests/>
                    <Route path="/student-assigned" view=ProtectedStudentAssigned/>
                    <Route path="/unauthorized" view=UnauthorizedPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! { <RequireRole allowed=ADMIN_ROLES><Layout><HomePage/></Layout></RequireRole> }
}

#[component]
fn ProtectedHomecare() -> impl IntoView {
    view! { <RequireRole allowed=ADMIN_ROLES><Layout><HomecarePage/></Layout></RequireRole> }
}

#[component]
fn ProtectedStudents() -> impl IntoView {
    view! { <RequireRole allowed=ADMIN_ROLES><Layout><StudentsPage/></Layout></RequireRole> }
}

#[component]
fn ProtectedHomecareRequests() -> impl IntoView {
    view! { <RequireRole allowed=ADMIN_ROLES><Layout><HomecareRequestsPage/></Layout></RequireRole> }
}

#[component]
fn ProtectedAvailability() -> impl IntoView {
    view! { <RequireRole allowed=ADMIN_ROLES><Layout><AvailabilityPage/></Layout></RequireRole> }
}

#[component]
fn ProtectedStudentRequests() -> impl IntoView {
    view! { <RequireRole allowed=HOMECARE_ROLES><Layout><StudentRequestsPage/></Layout></RequireRole> }
}

#[component]
fn ProtectedStudentAssigned() -> impl IntoView {
    view! { <RequireRole allowed=HOMECARE_ROLES><Layout><StudentAssignedPage/></Layout></RequireRole> }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::Role;
    use crate::test_support::{helpers::provide_page_context, ssr::render_to_string};

    #[test]
    fn admin_sees_guarded_page_inside_layout() {
        let html = render_to_string(move || {
            provide_page_context(Role::Admin);
            view! { <ProtectedHomecare/> }
        });
        assert!(html.contains("Sign out"));
        assert!(html.contains("Add Homecare"));
    }

    #[test]
    fn homecare_user_is_kept_out_of_admin_pages() {
        let html = render_to_string(move || {
            provide_page_context(Role::HomeCare);
            view! { <ProtectedStudents/> }
        });
        assert!(!html.contains("Search students"));
    }

    #[test]
    fn admin_is_kept_out_of_homecare_pages() {
        let html = render_to_string(move || {
            provide_page_context(Role::SuperAdmin);
            view! { <ProtectedStudentRequests/> }
        });
        assert!(!html.contains("Student Requests"));
    }
}
