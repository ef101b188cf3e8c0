//! Single-article page with comments and admin actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_modal::ConfirmModal;
use crate::components::news_form::NewsFormModal;
use crate::components::tag_badges::TagBadges;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::show_toast;
#[cfg(feature = "hydrate")]
use crate::config::routes;
use crate::net::types::{Comment, News, NewsDraft};
use crate::services::comments as comments_api;
use crate::services::news as news_api;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::toasts::ToastKind;
use crate::state::toasts::ToastState;
use crate::util::guard::install_unauth_redirect;

/// Article detail page. Shows the not-found view when the backend reports a
/// missing article, otherwise the article with its comment thread.
#[component]
pub fn NewsDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    install_unauth_redirect(session, navigate.clone());

    let article_id = Signal::derive(move || {
        params.get().get("id").and_then(|v| v.parse::<i64>().ok())
    });

    let news = RwSignal::new(None::<News>);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let loading = RwSignal::new(true);
    let not_found = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let new_comment = RwSignal::new(String::new());
    let comment_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let editing = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let mutation_busy = RwSignal::new(false);
    let mutation_error = RwSignal::new(None::<String>);

    let is_admin = Signal::derive(move || session.get().is_admin());

    Effect::new(move || {
        let Some(id) = article_id.get() else {
            not_found.set(true);
            loading.set(false);
            return;
        };
        loading.set(true);
        not_found.set(false);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match news_api::get(id).await {
                Ok(article) => {
                    news.set(Some(article));
                    loading.set(false);
                }
                Err(err) if err.is_not_found() => {
                    not_found.set(true);
                    loading.set(false);
                }
                Err(err) => {
                    error.set(Some(err.user_message()));
                    loading.set(false);
                }
            }
            match news_api::comments(id).await {
                Ok(thread) => comments.set(thread),
                Err(err) => error.set(Some(err.user_message())),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, &news_api::get);
        }
    });

    let submit_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let content = new_comment.get_untracked();
        comment_error.set(crate::util::validation::validate_comment(&content));
        if comment_error.get_untracked().is_some() {
            return;
        }
        let Some(id) = article_id.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            submitting.set(true);
            leptos::task::spawn_local(async move {
                match comments_api::create(content.trim(), id).await {
                    Ok(posted) => {
                        comments.update(|thread| thread.insert(0, posted));
                        new_comment.set(String::new());
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (content, id, &comments_api::create);
        }
    };

    let save_edited = Callback::new(move |draft: NewsDraft| {
        let Some(id) = article_id.get_untracked() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            mutation_busy.set(true);
            mutation_error.set(None);
            leptos::task::spawn_local(async move {
                match news_api::update(id, &draft).await {
                    Ok(updated) => {
                        news.set(Some(updated));
                        editing.set(false);
                        mutation_busy.set(false);
                        show_toast(toasts, ToastKind::Success, "News updated");
                    }
                    Err(err) => {
                        mutation_busy.set(false);
                        mutation_error.set(Some(err.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, draft, toasts);
        }
    });

    let confirm_delete = Callback::new({
        #[cfg(feature = "hydrate")]
        let navigate = navigate.clone();
        move |()| {
            let Some(id) = article_id.get_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let navigate = navigate.clone();
                mutation_busy.set(true);
                mutation_error.set(None);
                leptos::task::spawn_local(async move {
                    match news_api::remove(id).await {
                        Ok(()) => {
                            show_toast(toasts, ToastKind::Success, "News deleted");
                            navigate(routes::NEWS, NavigateOptions::default());
                        }
                        Err(err) => {
                            mutation_busy.set(false);
                            mutation_error.set(Some(err.user_message()));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (id, toasts);
            }
        }
    });

    let cancel_dialogs = Callback::new(move |()| {
        editing.set(false);
        deleting.set(false);
        mutation_error.set(None);
        mutation_busy.set(false);
    });

    let open_author = {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| {
            if let Some(id) = article_id.get_untracked() {
                navigate(&format!("/news/{id}/author"), NavigateOptions::default());
            }
        }
    };
    let open_author = StoredValue::new(open_author);

    view! {
        <div class="news-detail">
            <Show
                when=move || !not_found.get()
                fallback=|| view! { <p class="news-detail__missing">"This article does not exist."</p> }
            >
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="news-detail__loading">"Loading..."</p> }
                >
                    {
                        let open_author = open_author.clone();
                        move || {
                            let open_author = open_author.clone();
                            news.get().map(move |article| {
                                let created = article.create_date.clone().unwrap_or_default();
                                view! {
                                    <article class="news-detail__article">
                                        <h1>{article.title.clone()}</h1>
                                        <div class="news-detail__meta">
                                            <span class="news-detail__date">
                                                {crate::components::news_card::display_date(&created).to_owned()}
                                            </span>
                                            {article
                                                .author
                                                .clone()
                                                .map(|a| {
                                                    view! {
                                                        <span
                                                            class="news-detail__author"
                                                            on:click=move |ev| open_author.with_value(|f| f(ev))
                                                        >
                                                            {a.name}
                                                        </span>
                                                    }
                                                })}
                                        </div>
                                        <p class="news-detail__content">{article.content.clone()}</p>
                                        <TagBadges tags=article.tags.clone()/>

                                        <Show when=move || is_admin.get()>
                                            <div class="news-detail__actions">
                                                <button class="btn" on:click=move |_| editing.set(true)>
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| deleting.set(true)
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </Show>
                                    </article>
                                }
                            })
                        }
                    }

                    <Show when=move || error.get().is_some()>
                        <p class="error-text">{move || error.get().unwrap_or_default()}</p>
                    </Show>

                    <section class="news-detail__comments">
                        <h3>"Comments"</h3>
                        <form class="comment-form" on:submit=submit_comment>
                            <textarea
                                class="comment-form__input"
                                placeholder="Write a comment..."
                                prop:value=move || new_comment.get()
                                on:input=move |ev| new_comment.set(event_target_value(&ev))
                            ></textarea>
                            <Show when=move || comment_error.get().is_some()>
                                <p class="error-text">
                                    {move || comment_error.get().unwrap_or_default()}
                                </p>
                            </Show>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Posting..." } else { "Post Comment" }}
                            </button>
                        </form>

                        {move || {
                            comments
                                .get()
                                .into_iter()
                                .map(|comment| {
                                    let created = comment.create_date.clone().unwrap_or_default();
                                    view! {
                                        <div class="comment">
                                            <span class="comment__date">
                                                {crate::components::news_card::display_date(&created)
                                                    .to_owned()}
                                            </span>
                                            <p class="comment__content">{comment.content}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </section>
                </Show>
            </Show>

            <Show when=move || editing.get()>
                {move || {
                    news.get()
                        .map(|article| {
                            view! {
                                <NewsFormModal
                                    heading="Edit News"
                                    initial=article
                                    submit_error=Signal::derive(move || mutation_error.get())
                                    busy=Signal::derive(move || mutation_busy.get())
                                    on_cancel=cancel_dialogs
                                    on_save=save_edited
                                />
                            }
                        })
                }}
            </Show>

            <Show when=move || deleting.get()>
                <ConfirmModal
                    title="Delete News"
                    message="Delete this article? This cannot be undone."
                    error=Signal::derive(move || mutation_error.get())
                    busy=Signal::derive(move || mutation_busy.get())
                    on_cancel=cancel_dialogs
                    on_confirm=confirm_delete
                />
            </Show>
        </div>
    }
}
