//! Toast rendering and scheduling.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState};

/// Queue a toast and schedule its auto-dismiss.
///
/// The timer only exists in the browser; natively the toast stays queued
/// until dismissed explicitly.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = String::new();
    toasts.update(|t| id = t.push(kind, message.into()));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                crate::config::TOAST_DISMISS_MS,
            )))
            .await;
            toasts.update(|t| t.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed overlay rendering the toast queue; click a toast to dismiss it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        let class = format!("toast toast--{}", toast.kind.class_suffix());
                        view! {
                            <div class=class on:click=move |_| toasts.update(|t| t.dismiss(&id))>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
