//! Card for one news article in a list.

#[cfg(test)]
#[path = "news_card_test.rs"]
mod news_card_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::tag_badges::TagBadges;
use crate::net::types::News;

/// Preview length for card content.
const PREVIEW_CHARS: usize = 120;

/// Truncate `text` to `max` characters with a trailing ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

/// Date portion of a backend timestamp (`2026-01-05T10:00:00` → `2026-01-05`).
pub(crate) fn display_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

/// A clickable card showing an article summary with optional admin actions.
///
/// Clicking the card opens the article; the author name and the action
/// buttons stop propagation so they do not.
#[component]
pub fn NewsCard(
    news: News,
    #[prop(into)] is_admin: Signal<bool>,
    on_edit: Callback<News>,
    on_delete: Callback<News>,
) -> impl IntoView {
    let navigate = use_navigate();

    let id = news.id;
    let author = news.author.clone();
    let created = news.create_date.clone().unwrap_or_default();
    let preview = truncate(&news.content, PREVIEW_CHARS);
    let tags = news.tags.clone();

    let open_article = {
        let navigate = navigate.clone();
        move |_| navigate(&format!("/news/{id}"), NavigateOptions::default())
    };

    let open_author = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        navigate(&format!("/news/{id}/author"), NavigateOptions::default());
    };

    let edit_news = {
        let news = news.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            on_edit.run(news.clone());
        }
    };

    let delete_news = {
        let news = news.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            on_delete.run(news.clone());
        }
    };

    view! {
        <div class="news-card" on:click=open_article>
            <h5 class="news-card__title">{news.title.clone()}</h5>
            <div class="news-card__date">{display_date(&created).to_owned()}</div>
            <div class="news-card__author">
                {author
                    .map(|a| {
                        view! {
                            <span class="news-card__author-link" on:click=open_author>
                                {a.name}
                            </span>
                        }
                    })}
            </div>
            <p class="news-card__preview">{preview}</p>

            <TagBadges tags=tags/>

            <Show when=move || is_admin.get()>
                <div class="news-card__actions">
                    <button
                        class="btn news-card__action"
                        title="Edit"
                        aria-label="Edit"
                        on:click=edit_news.clone()
                    >
                        "Edit"
                    </button>
                    <button
                        class="btn btn--danger news-card__action"
                        title="Delete"
                        aria-label="Delete"
                        on:click=delete_news.clone()
                    >
                        "Delete"
                    </button>
                </div>
            </Show>
        </div>
    }
}
