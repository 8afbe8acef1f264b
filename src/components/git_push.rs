use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::api::types::compose_push_alert;
use crate::features::kanban::services::alert;

/// Commit-and-push trigger. Disabled with a loading indicator while the
/// request is in flight; restored whatever the outcome.
#[component]
pub fn GitPushButton() -> impl IntoView {
    let (pushing, set_pushing) = signal(false);

    let push = move |_| {
        if pushing.get_untracked() {
            return;
        }
        set_pushing.set(true);

        spawn_local(async move {
            let message = match api::push_to_remote().await {
                Ok((ok, response)) => compose_push_alert(ok, &response),
                Err(e) => {
                    web_sys::console::error_1(&format!("Push request failed: {}", e).into());
                    format!(
                        "\u{274c} Could not reach the server to push changes\n\n{}",
                        e
                    )
                }
            };
            alert(&message);
            set_pushing.set(false);
        });
    };

    view! {
        <button
            id="gitPushBtn"
            class="git-push-btn"
            on:click=push
            disabled=move || pushing.get()
        >
            <span
                id="gitPushText"
                style:display=move || if pushing.get() { "none" } else { "inline" }
            >
                "Push to GitHub"
            </span>
            <span
                id="gitPushLoading"
                style:display=move || if pushing.get() { "inline" } else { "none" }
            >
                "Pushing..."
            </span>
        </button>
    }
}
