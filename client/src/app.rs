//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{profile::ProfilePage, register::RegisterPage};
use crate::state::session::SessionContext;

/// Root application component.
///
/// Restores the persisted session once and passes it to each page as a prop.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::restore();

    view! {
        <Title text="CulinaryTech"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("register") view=move || view! { <RegisterPage session=session/> }/>
                <Route path=StaticSegment("profile") view=move || view! { <ProfilePage session=session/> }/>
            </Routes>
        </Router>
    }
}
