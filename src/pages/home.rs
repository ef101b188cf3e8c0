//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"News Management"</h1>
            <p class="home-page__tagline">
                "Read, search, and manage news articles, authors, and tags."
            </p>
            <A href=routes::NEWS attr:class="btn btn--primary home-page__cta">
                "Browse News"
            </A>
        </div>
    }
}
