//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <A href=routes::HOME>"Back to home"</A>
        </div>
    }
}
