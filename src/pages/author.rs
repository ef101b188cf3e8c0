//! Author page, reachable two ways: directly by author id, or through an
//! article (`/news/:id/author`), which resolves the author server-side.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::news_card::NewsCard;
use crate::net::types::{Author, News};
use crate::services::authors as authors_api;
use crate::services::news as news_api;
use crate::state::session::SessionState;

/// Which endpoint resolves the `:id` route parameter to an author.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthorLookup {
    /// `/authors/:id` — the id is the author's.
    Direct,
    /// `/news/:id/author` — the id is the article's.
    ViaNews,
}

/// `/authors/:id`
#[component]
pub fn AuthorPage() -> impl IntoView {
    author_view(AuthorLookup::Direct)
}

/// `/news/:id/author`
#[component]
pub fn NewsAuthorPage() -> impl IntoView {
    author_view(AuthorLookup::ViaNews)
}

fn author_view(lookup: AuthorLookup) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    let author = RwSignal::new(None::<Author>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let is_admin = Signal::derive(move || session.get().is_admin());

    Effect::new(move || {
        let Some(id) = params.get().get("id").and_then(|v| v.parse::<i64>().ok()) else {
            error.set(Some("Invalid ID format".to_owned()));
            loading.set(false);
            return;
        };
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let fetched = match lookup {
                AuthorLookup::Direct => authors_api::get(id).await,
                AuthorLookup::ViaNews => news_api::author(id).await,
            };
            match fetched {
                Ok(found) => author.set(Some(found)),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, lookup, &authors_api::get, &news_api::author);
        }
    });

    let noop_edit = Callback::new(|_: News| {});
    let noop_delete = Callback::new(|_: News| {});

    view! {
        <div class="author-page">
            <Show when=move || loading.get() fallback=|| ()>
                <p class="author-page__loading">"Loading..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="error-text">{move || error.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                author
                    .get()
                    .map(|found| {
                        let created = found.create_date.clone().unwrap_or_default();
                        let updated = found.last_update_date.clone().unwrap_or_default();
                        view! {
                            <h2>{found.name.clone()}</h2>
                            <p class="author-page__dates">
                                <strong>"Since: "</strong>
                                {crate::components::news_card::display_date(&created).to_owned()}
                                <strong>" Last update: "</strong>
                                {crate::components::news_card::display_date(&updated).to_owned()}
                            </p>

                            <h3>"More news of this author"</h3>
                            <Show
                                when={
                                    let count = found.news.len();
                                    move || count > 0
                                }
                                fallback=|| {
                                    view! {
                                        <p class="author-page__empty">
                                            "This author hasn't got any news."
                                        </p>
                                    }
                                }
                            >
                                <div class="author-page__news">
                                    {found
                                        .news
                                        .clone()
                                        .into_iter()
                                        .map(|news| {
                                            view! {
                                                <NewsCard
                                                    news=news
                                                    is_admin=is_admin
                                                    on_edit=noop_edit
                                                    on_delete=noop_delete
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </Show>
                        }
                    })
            }}
        </div>
    }
}
