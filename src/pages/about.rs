//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <p>
                "News Management is a small editorial tool: anyone signed in can "
                "read and comment, administrators can publish, edit, and tag "
                "articles."
            </p>
        </div>
    }
}
