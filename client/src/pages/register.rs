//! Sign-up page: six-field registration form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use accounts::register::{FormMessage, MessageKind, RegistrationDraft, RegistrationField};
use leptos::prelude::*;

use crate::state::session::SessionContext;

fn input_type_for(field: RegistrationField, reveal_passwords: bool) -> &'static str {
    if field.is_secret() && reveal_passwords { "text" } else { field.input_type() }
}

fn message_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Success => "form-message form-message--success",
        MessageKind::Error => "form-message form-message--error",
    }
}

/// Validate locally; on failure return the message to show without any
/// network call.
fn precheck(draft: &RegistrationDraft) -> Option<FormMessage> {
    draft.validate().err().map(|e| FormMessage::error(e.to_string()))
}

#[component]
pub fn RegisterPage(session: SessionContext) -> impl IntoView {
    let draft = RwSignal::new(RegistrationDraft::default());
    let message = RwSignal::new(None::<FormMessage>);
    let busy = RwSignal::new(false);
    let reveal = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = draft.get();
        if let Some(invalid) = precheck(&current) {
            message.set(Some(invalid));
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use accounts::register::RegistrationFlow;

            use crate::net::api::{GlooRegisterApi, api_config};
            use crate::util::browser::{GlooTimer, LocationNavigator};

            let flow = RegistrationFlow::new(GlooRegisterApi::new(&api_config()), GlooTimer, LocationNavigator);
            flow.submit_and_redirect(&current, |outcome| {
                message.set(Some(outcome.message.clone()));
                if let Some(user) = outcome.user.clone() {
                    session.login(user);
                }
                // Stay disabled while the redirect is pending.
                if outcome.redirect.is_none() {
                    busy.set(false);
                }
            })
            .await;
        });
        #[cfg(not(feature = "csr"))]
        let _ = (current, session);
    };

    let inputs = RegistrationField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <label class="register-field">
                    <span class="register-field__label">{field.label()}</span>
                    <input
                        class="register-input"
                        name=field.input_name()
                        type=move || input_type_for(field, reveal.get())
                        required=true
                        prop:value=move || draft.with(|d| d.field(field).to_owned())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| *d.field_mut(field) = value);
                        }
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="register-page">
            <h2>"Sign Up"</h2>
            {move || message.get().map(|m| view! { <p class=message_class(m.kind)>{m.text}</p> })}
            <form class="register-form" on:submit=on_submit>
                {inputs}
                <button
                    class="register-reveal"
                    type="button"
                    on:click=move |_| reveal.update(|v| *v = !*v)
                >
                    {move || if reveal.get() { "Hide passwords" } else { "Show passwords" }}
                </button>
                <button class="register-button" type="submit" disabled=move || busy.get()>
                    "Sign Up"
                </button>
            </form>
            <p class="register-page__login">
                "Already have an account? "
                <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
