//! Confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Modal asking the user to confirm or cancel.
///
/// Clicking the backdrop cancels; clicks inside the dialog stay inside.
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, optional)] error: Option<Signal<Option<String>>>,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__message">{message}</p>
                {error
                    .map(|error| {
                        view! {
                            <Show when=move || error.get().is_some()>
                                <p class="error-text">{move || error.get().unwrap_or_default()}</p>
                            </Show>
                        }
                    })}
                <div class="dialog__actions">
                    <button class="btn" disabled=move || busy.get() on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
