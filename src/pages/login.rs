//! Login page: credential sign-in plus the Google OAuth2 redirect.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

use crate::config::routes;
use crate::services::oauth2;
use crate::state::session::{self, SessionState};
use crate::util::validation;

/// Sign-in form. A `?error=true` query (set by a failed OAuth2 callback)
/// shows a banner; success navigates to the news list.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();
    let query_map = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);

    let oauth_failed = query_map.get_untracked().get("error").is_some();

    let busy = Signal::derive(move || session_signal.get().loading);
    let server_error = Signal::derive(move || session_signal.get().last_error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let username_value = username.get_untracked();
        let password_value = password.get_untracked();
        username_error.set(validation::validate_username(&username_value));
        password_error.set(validation::validate_password(&password_value));
        if username_error.get_untracked().is_some() || password_error.get_untracked().is_some() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if session::login(session_signal, &username_value, &password_value).await {
                    navigate(routes::NEWS, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username_value, password_value, &session::login);
        }
    };

    let oauth_sign_in = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        oauth2::redirect_to_provider();
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign In"</h1>

                <Show when=move || oauth_failed>
                    <p class="error-text">"Google sign-in failed. Please try again."</p>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || username_error.get().is_some()>
                        <p class="error-text">{move || username_error.get().unwrap_or_default()}</p>
                    </Show>

                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || password_error.get().is_some()>
                        <p class="error-text">{move || password_error.get().unwrap_or_default()}</p>
                    </Show>

                    <Show when=move || server_error.get().is_some()>
                        <p class="error-text">{move || server_error.get().unwrap_or_default()}</p>
                    </Show>

                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="auth-card__divider"></div>

                <button class="btn auth-card__oauth" on:click=oauth_sign_in>
                    "Sign in with Google"
                </button>

                <p class="auth-card__switch">
                    "No account yet? " <A href=routes::REGISTER>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
