//! Registration page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::config::routes;
use crate::state::session::{self, SessionState};
use crate::util::validation;

/// Sign-up form; a successful registration authenticates immediately and
/// lands on the news list.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let firstname_error = RwSignal::new(None::<String>);
    let lastname_error = RwSignal::new(None::<String>);
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let busy = Signal::derive(move || session_signal.get().loading);
    let server_error = Signal::derive(move || session_signal.get().last_error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let firstname_value = firstname.get_untracked();
        let lastname_value = lastname.get_untracked();
        let username_value = username.get_untracked();
        let password_value = password.get_untracked();

        firstname_error.set(validation::validate_firstname(&firstname_value));
        lastname_error.set(validation::validate_lastname(&lastname_value));
        username_error.set(validation::validate_username(&username_value));
        password_error.set(validation::validate_password(&password_value));
        if firstname_error.get_untracked().is_some()
            || lastname_error.get_untracked().is_some()
            || username_error.get_untracked().is_some()
            || password_error.get_untracked().is_some()
        {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let ok = session::register(
                    session_signal,
                    &firstname_value,
                    &lastname_value,
                    &username_value,
                    &password_value,
                )
                .await;
                if ok {
                    navigate(routes::NEWS, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (firstname_value, lastname_value, username_value, password_value);
            let _ = &session::register;
        }
    };

    let field = |label: &'static str,
                 kind: &'static str,
                 value: RwSignal<String>,
                 error: RwSignal<Option<String>>| {
        view! {
            <label class="auth-form__label">
                {label}
                <input
                    class="auth-form__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="error-text">{move || error.get().unwrap_or_default()}</p>
            </Show>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>

                <form class="auth-form" on:submit=on_submit>
                    {field("Firstname", "text", firstname, firstname_error)}
                    {field("Lastname", "text", lastname, lastname_error)}
                    {field("Username", "text", username, username_error)}
                    {field("Password", "password", password, password_error)}

                    <Show when=move || server_error.get().is_some()>
                        <p class="error-text">{move || server_error.get().unwrap_or_default()}</p>
                    </Show>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? " <A href=routes::LOGIN>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
