//! Profile page showing the signed-in user's details.

use accounts::profile::ProfileView;
use leptos::prelude::*;

use crate::state::session::SessionContext;

#[component]
pub fn ProfilePage(session: SessionContext) -> impl IntoView {
    let on_logout = move |_| session.logout();

    move || match ProfileView::from_session(session.current().as_ref()) {
        ProfileView::SignedOut { message } => view! {
            <p class="profile-signed-out">{message}</p>
        }
        .into_any(),
        ProfileView::SignedIn { heading, subheading, rows } => view! {
            <section class="profile">
                <h2 class="profile__heading">{heading}</h2>
                <p class="profile__subheading">{subheading}</p>
                <h3>"Personal information"</h3>
                <ul class="profile__rows">
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <li class="profile__row">
                                    <span class="profile__label">{row.label}": "</span>
                                    <span class="profile__value">{row.value}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button class="profile__logout" on:click=on_logout>"Log out"</button>
            </section>
        }
        .into_any(),
    }
}
