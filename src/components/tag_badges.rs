//! Tag badge strip for a news article.

use leptos::prelude::*;

use crate::net::types::Tag;

/// Inline list of tag names.
#[component]
pub fn TagBadges(tags: Vec<Tag>) -> impl IntoView {
    view! {
        <div class="tag-badges">
            {tags
                .into_iter()
                .map(|tag| view! { <span class="tag-badges__badge">{tag.name}</span> })
                .collect::<Vec<_>>()}
        </div>
    }
}
