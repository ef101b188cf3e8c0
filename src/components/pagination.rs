//! Pagination controls for list pages.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::config::pagination::SIZE_OPTIONS;
use crate::net::query::ListQuery;

/// Pages shown around the current one.
const NEIGHBORS: u32 = 2;

/// Numbered pages to render: the current page plus up to [`NEIGHBORS`] on
/// each side, clamped to the valid range. Empty when there are no pages.
pub(crate) fn page_window(page: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let first = page.saturating_sub(NEIGHBORS);
    let last = (page + NEIGHBORS).min(total_pages - 1);
    (first..=last).collect()
}

/// Page buttons plus a page-size selector, all writing back into `query`.
///
/// Changing the size resets to the first page so the new window starts from
/// the top of the result set.
#[component]
pub fn PaginationBar(
    query: RwSignal<ListQuery>,
    #[prop(into)] total_pages: Signal<u32>,
) -> impl IntoView {
    let go_to = move |page: u32| query.update(|q| q.page = page);

    let set_size = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
            query.update(|q| {
                q.size = size;
                q.page = 0;
            });
        }
    };

    view! {
        <div class="pagination">
            <div class="pagination__buttons">
                <Show when=move || { query.get().page > 0 }>
                    <button class="btn btn--small" on:click=move |_| go_to(0)>
                        "<<"
                    </button>
                    <button
                        class="btn btn--small"
                        on:click=move |_| go_to(query.get_untracked().page - 1)
                    >
                        "<"
                    </button>
                </Show>

                {move || {
                    let current = query.get().page;
                    page_window(current, total_pages.get())
                        .into_iter()
                        .map(|p| {
                            let class = if p == current {
                                "btn btn--small btn--primary"
                            } else {
                                "btn btn--small"
                            };
                            view! {
                                <button class=class on:click=move |_| go_to(p)>
                                    {p + 1}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                <Show when=move || {
                    total_pages.get() > 0 && query.get().page < total_pages.get() - 1
                }>
                    <button
                        class="btn btn--small"
                        on:click=move |_| go_to(query.get_untracked().page + 1)
                    >
                        ">"
                    </button>
                    <button
                        class="btn btn--small"
                        on:click=move |_| go_to(total_pages.get_untracked() - 1)
                    >
                        ">>"
                    </button>
                </Show>
            </div>

            <select class="pagination__size" on:change=set_size prop:value=move || query.get().size.to_string()>
                {SIZE_OPTIONS
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string()>{format!("{size} / page")}</option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
