//! Top navigation bar with auth-aware actions.
//!
//! Sign-out goes through the session store's `logout` transition; the
//! header never touches token storage itself.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::routes;
use crate::state::session::{self, SessionState};

/// Application header: brand, nav links, and sign in/out controls.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let sign_out = {
        let navigate = navigate.clone();
        move |_| {
            session::logout(session);
            navigate(routes::LOGIN, NavigateOptions::default());
        }
    };

    let sign_in = {
        let navigate = navigate.clone();
        move |_| navigate(routes::LOGIN, NavigateOptions::default())
    };

    let sign_up = move |_| navigate(routes::REGISTER, NavigateOptions::default());

    view! {
        <header class="header">
            <div class="header__brand">
                <span class="header__brand-line">"News"</span>
                <span class="header__brand-line">"Management"</span>
            </div>

            <nav class="header__nav">
                <A href=routes::HOME>"HOME"</A>
                <A href=routes::NEWS>"NEWS"</A>
                <A href=routes::ABOUT>"ABOUT"</A>
            </nav>

            <div class="header__auth">
                <Show
                    when=move || session.get().is_authenticated
                    fallback=move || {
                        view! {
                            <button class="btn header__signin" on:click=sign_in.clone()>
                                "SIGN IN"
                            </button>
                            <button class="btn btn--primary header__signup" on:click=sign_up.clone()>
                                "SIGN UP"
                            </button>
                        }
                    }
                >
                    <button class="btn header__signout" on:click=sign_out.clone()>
                        "SIGN OUT"
                    </button>
                </Show>
            </div>
        </header>
    }
}
