//! OAuth2 redirect landing page.
//!
//! The backend redirects here with `?token=<jwt>` after a successful
//! provider login. A missing token bounces back to the login page with an
//! error flag; an undecodable one surfaces the session store's explicit
//! "Invalid OAuth2 token" error.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::routes;
use crate::state::session::{self, SessionState};

#[component]
pub fn OAuth2CallbackPage() -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query_map = use_query_map();

    let callback_error = Signal::derive(move || session_signal.get().last_error);

    Effect::new(move || {
        let token = query_map.get_untracked().get("token");
        let navigate = navigate.clone();
        match token {
            Some(token) => {
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    if session::login_with_oauth2(session_signal, &token).await {
                        navigate(routes::NEWS, NavigateOptions::default());
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (token, navigate, &session::login_with_oauth2);
                }
            }
            None => {
                navigate(&format!("{}?error=true", routes::LOGIN), NavigateOptions::default());
            }
        }
    });

    view! {
        <div class="oauth-callback">
            <Show
                when=move || callback_error.get().is_some()
                fallback=|| view! { <p>"Loading..."</p> }
            >
                <p class="error-text">{move || callback_error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
