//! Create/edit dialog for a news article with tag autocomplete.
//!
//! The dialog validates locally and hands a finished draft to the page; the
//! page owns the service call so it can refetch and toast afterwards.

use leptos::prelude::*;

use crate::net::types::{News, NewsDraft, Tag};
use crate::services::tags as tags_api;
use crate::util::validation;

/// Modal form for creating or editing an article.
#[component]
pub fn NewsFormModal(
    #[prop(into)] heading: String,
    #[prop(into, optional)] initial: Option<News>,
    #[prop(into, optional)] submit_error: Option<Signal<Option<String>>>,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_save: Callback<NewsDraft>,
) -> impl IntoView {
    let title = RwSignal::new(initial.as_ref().map(|n| n.title.clone()).unwrap_or_default());
    let content = RwSignal::new(initial.as_ref().map(|n| n.content.clone()).unwrap_or_default());
    let selected_tags = RwSignal::new(initial.map(|n| n.tags).unwrap_or_default());

    let title_error = RwSignal::new(None::<String>);
    let content_error = RwSignal::new(None::<String>);
    let tag_error = RwSignal::new(None::<String>);

    let tag_input = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<Tag>::new());

    let load_suggestions = move |ev: leptos::ev::Event| {
        let input = event_target_value(&ev);
        tag_input.set(input.clone());
        if input.trim().is_empty() {
            suggestions.set(Vec::new());
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let found = tags_api::search(input.trim()).await;
            suggestions.set(found);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &tags_api::search;
        }
    };

    let add_tag = move |tag: Tag| {
        tag_error.set(validation::validate_tag_name(&tag.name));
        selected_tags.update(|tags| {
            if !tags.iter().any(|t| t.id == tag.id) {
                tags.push(tag);
            }
        });
        tag_input.set(String::new());
        suggestions.set(Vec::new());
    };

    let remove_tag = move |id: i64| {
        selected_tags.update(|tags| tags.retain(|t| t.id != id));
        tag_error.set(None);
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let title_value = title.get_untracked();
        let content_value = content.get_untracked();
        title_error.set(validation::validate_news_title(&title_value));
        content_error.set(validation::validate_news_content(&content_value));
        let bad_tag = selected_tags
            .get_untracked()
            .iter()
            .find_map(|t| validation::validate_tag_name(&t.name));
        tag_error.set(bad_tag);

        if title_error.get_untracked().is_some()
            || content_error.get_untracked().is_some()
            || tag_error.get_untracked().is_some()
        {
            return;
        }

        on_save.run(NewsDraft {
            title: title_value.trim().to_owned(),
            content: content_value.trim().to_owned(),
            tag_ids: selected_tags.get_untracked().iter().map(|t| t.id).collect(),
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <form class="news-form" on:submit=submit>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || title_error.get().is_some()>
                        <p class="error-text">{move || title_error.get().unwrap_or_default()}</p>
                    </Show>

                    <label class="dialog__label">
                        "Content"
                        <textarea
                            class="dialog__input dialog__input--area"
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || content_error.get().is_some()>
                        <p class="error-text">{move || content_error.get().unwrap_or_default()}</p>
                    </Show>

                    <label class="dialog__label">
                        "Tags"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Search and select tags..."
                            prop:value=move || tag_input.get()
                            on:input=load_suggestions
                        />
                    </label>
                    <Show when=move || !suggestions.get().is_empty()>
                        <ul class="news-form__suggestions">
                            {move || {
                                suggestions
                                    .get()
                                    .into_iter()
                                    .map(|tag| {
                                        let label = tag.name.clone();
                                        view! {
                                            <li>
                                                <button
                                                    type="button"
                                                    class="news-form__suggestion"
                                                    on:click=move |_| add_tag(tag.clone())
                                                >
                                                    {label}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                    <div class="news-form__selected">
                        {move || {
                            selected_tags
                                .get()
                                .into_iter()
                                .map(|tag| {
                                    let id = tag.id;
                                    view! {
                                        <span class="tag-badges__badge">
                                            {tag.name}
                                            <button
                                                type="button"
                                                class="news-form__remove-tag"
                                                aria-label="Remove tag"
                                                on:click=move |_| remove_tag(id)
                                            >
                                                "x"
                                            </button>
                                        </span>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <Show when=move || tag_error.get().is_some()>
                        <p class="error-text">{move || tag_error.get().unwrap_or_default()}</p>
                    </Show>

                    {submit_error
                        .map(|err| {
                            view! {
                                <Show when=move || err.get().is_some()>
                                    <p class="error-text">{move || err.get().unwrap_or_default()}</p>
                                </Show>
                            }
                        })}

                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
