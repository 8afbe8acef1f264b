use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::{ev, html::Dialog};

use crate::api;
use crate::api::types::WorkerPayload;
use crate::features::kanban::services::{
    alert, delete_worker_with_confirm, reload_workers,
};
use crate::models::{Column, SaveAction, Worker};

/// Worker management panel: a create/update form on top of the list of
/// registered workers. Kept open across mutations so several workers can be
/// edited in a row.
#[component]
pub fn WorkersModal(
    dialog_ref: NodeRef<Dialog>,
    workers: ReadSignal<Vec<Worker>>,
    set_workers: WriteSignal<Vec<Worker>>,
    set_columns: WriteSignal<Vec<Column>>,
) -> impl IntoView {
    let (worker_id, set_worker_id) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let reset_form = move || {
        set_worker_id.set(String::new());
        set_name.set(String::new());
        set_email.set(String::new());
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let action = SaveAction::for_id(&worker_id.get_untracked());
        let payload = WorkerPayload {
            name: name.get_untracked(),
            email: email.get_untracked(),
        };

        spawn_local(async move {
            let result = match &action {
                SaveAction::Create => api::create_worker(&payload).await,
                SaveAction::Update { id } => api::update_worker(id, &payload).await,
            };

            match result {
                Ok(()) => {
                    reset_form();
                    // Refreshes the panel list and the assignee select alike
                    reload_workers(set_workers);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to save worker: {}", e).into());
                    alert("The worker could not be saved");
                }
            }
        });
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref id="workersModal" class="workers-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Workers"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>
                        "\u{d7}"
                    </button>
                </div>
                <form id="workerForm" on:submit=handle_submit>
                    <input type="hidden" id="workerId" prop:value=move || worker_id.get() />
                    <div class="form-group">
                        <label for="workerName">"Name"</label>
                        <input
                            type="text"
                            id="workerName"
                            placeholder="Worker name..."
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=move || name.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="workerEmail">"Email"</label>
                        <input
                            type="email"
                            id="workerEmail"
                            placeholder="worker@example.com"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=move || email.get()
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| reset_form()>
                            "Clear"
                        </button>
                        <button type="submit" class="btn-primary">"Save"</button>
                    </div>
                </form>
                <div id="workersList" class="workers-list">
                    {move || {
                        let list = workers.get();
                        if list.is_empty() {
                            view! {
                                <p class="workers-empty">"No workers registered"</p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="worker-items">
                                    {list
                                        .into_iter()
                                        .map(|worker| {
                                            let worker_for_edit = worker.clone();
                                            let id_for_delete = worker.id.clone();
                                            view! {
                                                <div class="worker-item">
                                                    <div class="worker-info">
                                                        <div class="worker-name">{worker.name}</div>
                                                        {(!worker.email.is_empty())
                                                            .then(|| {
                                                                view! {
                                                                    <div class="worker-email">
                                                                        {worker.email.clone()}
                                                                    </div>
                                                                }
                                                            })}
                                                    </div>
                                                    <div class="worker-actions">
                                                        <button
                                                            class="btn-edit-worker"
                                                            on:click=move |_| {
                                                                set_worker_id
                                                                    .set(worker_for_edit.id.clone());
                                                                set_name
                                                                    .set(worker_for_edit.name.clone());
                                                                set_email
                                                                    .set(worker_for_edit.email.clone());
                                                            }
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn-delete-worker"
                                                            on:click=move |_| {
                                                                delete_worker_with_confirm(
                                                                    id_for_delete.clone(),
                                                                    set_workers,
                                                                    set_columns,
                                                                );
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </div>
        </dialog>
    }
}
