//! News list page: search, sort, pagination, and admin CRUD.
//!
//! ARCHITECTURE
//! ============
//! The query lives in one `RwSignal<ListQuery>`; every control writes into
//! it and a single effect refetches on change, mirroring the state into the
//! route's query string so views are shareable links. Mutations close their
//! modal, bump a refetch tick, and toast — the list is always re-fetched
//! rather than patched in place.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::confirm_modal::ConfirmModal;
use crate::components::news_card::NewsCard;
use crate::components::news_form::NewsFormModal;
use crate::components::pagination::PaginationBar;
use crate::components::toast_host::show_toast;
use crate::config::routes;
use crate::net::query::{ListQuery, SortDirection, percent_encode};
use crate::net::types::{News, NewsDraft};
#[cfg(feature = "hydrate")]
use crate::services::news as news_api;
use crate::state::news_list::NewsListState;
use crate::state::session::SessionState;
use crate::state::toasts::{ToastKind, ToastState};
use crate::util::guard::install_unauth_redirect;

/// Rebuild a [`ListQuery`] from the route's query parameters.
///
/// Anything missing or unparseable falls back to the default view.
pub(crate) fn query_from_route(
    page: Option<&str>,
    size: Option<&str>,
    sort_field: Option<&str>,
    sort: Option<&str>,
    search: Option<&str>,
) -> ListQuery {
    let defaults = ListQuery::default();
    ListQuery {
        page: page.and_then(|v| v.parse().ok()).unwrap_or(defaults.page),
        size: size.and_then(|v| v.parse().ok()).unwrap_or(defaults.size),
        sort_field: sort_field
            .filter(|v| !v.is_empty())
            .map_or(defaults.sort_field, ToOwned::to_owned),
        direction: parse_direction(sort),
        search: search.unwrap_or_default().to_owned(),
    }
}

pub(crate) fn parse_direction(value: Option<&str>) -> SortDirection {
    match value {
        Some(v) if v.eq_ignore_ascii_case("ASC") => SortDirection::Asc,
        _ => SortDirection::Desc,
    }
}

/// Render the route query string (`page`, `size`, `sortField`, `sort`,
/// optional `search`) that round-trips through [`query_from_route`].
pub(crate) fn route_query(query: &ListQuery) -> String {
    let mut out = format!(
        "page={}&size={}&sortField={}&sort={}",
        query.page,
        query.size,
        query.sort_field,
        query.direction.as_str()
    );
    let search = query.search.trim();
    if !search.is_empty() {
        out.push_str("&search=");
        out.push_str(&percent_encode(search));
    }
    out
}

/// News list page with admin actions. Redirects to login when the session
/// is not authenticated.
#[component]
pub fn NewsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query_map = use_query_map();

    install_unauth_redirect(session, navigate.clone());

    let initial = {
        let map = query_map.get_untracked();
        query_from_route(
            map.get("page").as_deref(),
            map.get("size").as_deref(),
            map.get("sortField").as_deref(),
            map.get("sort").as_deref(),
            map.get("search").as_deref(),
        )
    };
    let search_input = RwSignal::new(initial.search.clone());
    let query = RwSignal::new(initial);
    let list = RwSignal::new(NewsListState::default());
    let is_admin = Signal::derive(move || session.get().is_admin());

    let show_add = RwSignal::new(false);
    let editing = RwSignal::new(None::<News>);
    let deleting = RwSignal::new(None::<News>);
    let mutation_busy = RwSignal::new(false);
    let mutation_error = RwSignal::new(None::<String>);

    // Bumped after a mutation so the fetch effect reruns with the same query.
    let refetch_tick = RwSignal::new(0u32);

    Effect::new(move || {
        let current = query.get();
        refetch_tick.get();
        list.update(|s| s.begin_fetch(&current));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match news_api::list(&current).await {
                Ok(page) => list.update(|s| s.apply_page(page)),
                Err(err) => list.update(|s| s.apply_error(&err)),
            }
        });
    });

    // Mirror the query into the URL so the view survives reload/share.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let current = query.get();
            let route = format!("{}?{}", routes::NEWS, route_query(&current));
            navigate(&route, NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    }

    // Debounce the search box into the query.
    let debounce_generation = StoredValue::new(0u64);
    Effect::new(move || {
        let value = search_input.get();
        #[cfg(feature = "hydrate")]
        {
            debounce_generation.update_value(|g| *g += 1);
            let generation = debounce_generation.get_value();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    crate::config::SEARCH_DEBOUNCE_MS,
                )))
                .await;
                if debounce_generation.get_value() == generation {
                    query.update(|q| {
                        if q.search != value {
                            q.search = value;
                            q.page = 0;
                        }
                    });
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    });

    let set_sort_field = move |ev: leptos::ev::Event| {
        query.update(|q| {
            q.sort_field = event_target_value(&ev);
            q.page = 0;
        });
    };
    let toggle_direction = move |_| query.update(|q| q.direction = q.direction.toggled());

    let close_dialogs = move || {
        show_add.set(false);
        editing.set(None);
        deleting.set(None);
        mutation_error.set(None);
        mutation_busy.set(false);
    };

    let after_mutation = move |message: &str| {
        close_dialogs();
        refetch_tick.update(|t| *t += 1);
        show_toast(toasts, ToastKind::Success, message);
    };

    let save_new = Callback::new(move |draft: NewsDraft| {
        #[cfg(feature = "hydrate")]
        {
            mutation_busy.set(true);
            mutation_error.set(None);
            leptos::task::spawn_local(async move {
                match news_api::create(&draft).await {
                    Ok(_) => after_mutation("News created"),
                    Err(err) => {
                        mutation_busy.set(false);
                        mutation_error.set(Some(err.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, after_mutation);
        }
    });

    let save_edited = Callback::new(move |draft: NewsDraft| {
        let Some(current) = editing.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            mutation_busy.set(true);
            mutation_error.set(None);
            leptos::task::spawn_local(async move {
                match news_api::update(current.id, &draft).await {
                    Ok(_) => after_mutation("News updated"),
                    Err(err) => {
                        mutation_busy.set(false);
                        mutation_error.set(Some(err.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, draft);
        }
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(current) = deleting.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            mutation_busy.set(true);
            mutation_error.set(None);
            leptos::task::spawn_local(async move {
                match news_api::remove(current.id).await {
                    Ok(()) => after_mutation("News deleted"),
                    Err(err) => {
                        mutation_busy.set(false);
                        mutation_error.set(Some(err.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
        }
    });

    let open_edit = Callback::new(move |news: News| editing.set(Some(news)));
    let open_delete = Callback::new(move |news: News| deleting.set(Some(news)));
    let cancel_dialogs = Callback::new(move |()| close_dialogs());

    view! {
        <div class="news-page">
            <header class="news-page__header">
                <h1>"News"</h1>
                <Show when=move || is_admin.get()>
                    <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                        "+ Add News"
                    </button>
                </Show>
            </header>

            <div class="news-page__controls">
                <input
                    class="news-page__search"
                    type="text"
                    placeholder="Search news or #tags..."
                    prop:value=move || search_input.get()
                    on:input=move |ev| search_input.set(event_target_value(&ev))
                />
                <select
                    class="news-page__sort"
                    on:change=set_sort_field
                    prop:value=move || query.get().sort_field
                >
                    <option value="createDate">"Newest"</option>
                    <option value="title">"Title"</option>
                </select>
                <button class="btn btn--small" title="Toggle sort direction" on:click=toggle_direction>
                    {move || query.get().direction.as_str()}
                </button>
                <Show when=move || list.get().search_loading>
                    <span class="news-page__spinner">"Searching..."</span>
                </Show>
            </div>

            <Show when=move || list.get().error.is_some()>
                <p class="error-text">{move || list.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !list.get().not_found
                fallback=|| view! { <p class="news-page__empty">"No news found."</p> }
            >
                <Show
                    when=move || !list.get().loading
                    fallback=|| view! { <p class="news-page__loading">"Loading news..."</p> }
                >
                    <div class="news-page__grid">
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|news| {
                                    view! {
                                        <NewsCard
                                            news=news
                                            is_admin=is_admin
                                            on_edit=open_edit
                                            on_delete=open_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <div class="news-page__footer">
                        <span class="news-page__total">
                            {move || format!("{} articles", list.get().total_elements)}
                        </span>
                        <PaginationBar
                            query=query
                            total_pages=Signal::derive(move || list.get().total_pages)
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || show_add.get()>
                <NewsFormModal
                    heading="Add News"
                    submit_error=Signal::derive(move || mutation_error.get())
                    busy=Signal::derive(move || mutation_busy.get())
                    on_cancel=cancel_dialogs
                    on_save=save_new
                />
            </Show>

            {move || {
                editing
                    .get()
                    .map(|news| {
                        view! {
                            <NewsFormModal
                                heading="Edit News"
                                initial=news
                                submit_error=Signal::derive(move || mutation_error.get())
                                busy=Signal::derive(move || mutation_busy.get())
                                on_cancel=cancel_dialogs
                                on_save=save_edited
                            />
                        }
                    })
            }}

            {move || {
                deleting
                    .get()
                    .map(|news| {
                        view! {
                            <ConfirmModal
                                title="Delete News"
                                message=format!("Delete \"{}\"? This cannot be undone.", news.title)
                                error=Signal::derive(move || mutation_error.get())
                                busy=Signal::derive(move || mutation_busy.get())
                                on_cancel=cancel_dialogs
                                on_confirm=confirm_delete
                            />
                        }
                    })
            }}
        </div>
    }
}
