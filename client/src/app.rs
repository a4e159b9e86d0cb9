//! Root application component, session router, and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives here and nowhere else. `Portal` renders the login page
//! while no session exists and the role's dashboard once one does; pages get
//! the login or logout callback, never the session signal itself.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::Toast;
use crate::pages::{admin_dashboard::AdminDashboard, login::LoginPage, student_dashboard::StudentDashboard};
use crate::state::session::{PortalView, Role, SessionState};
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/hostel-portal.css"/>
        <Title text="Hostel Management"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Portal/>
            </Routes>
        </Router>
        <Toast/>
    }
}

/// Session router: login page or the signed-in role's dashboard.
#[component]
fn Portal() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_login = Callback::new(move |(role, id): (Role, String)| session.update(|s| s.login(role, id)));
    let on_logout = Callback::new(move |()| session.update(SessionState::logout));

    move || {
        let (current, user_id) = session.with(|s| (s.view(), s.user_id()));
        match current {
            PortalView::Login => view! { <LoginPage on_login=on_login/> }.into_any(),
            PortalView::StudentDashboard => {
                view! { <StudentDashboard user_id=user_id on_logout=on_logout/> }.into_any()
            }
            PortalView::AdminDashboard => view! { <AdminDashboard user_id=user_id on_logout=on_logout/> }.into_any(),
        }
    }
}
