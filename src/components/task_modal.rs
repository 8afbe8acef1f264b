use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::{ev, html::Dialog};

use crate::api;
use crate::api::types::{NewTaskPayload, UpdateTaskPayload};
use crate::features::kanban::services::{alert, reload_board};
use crate::models::{Column, SaveAction, Worker};

/// What the task editor was opened for.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorRequest {
    /// Empty form with the target column preset.
    Create { column_id: String },
    /// Form pre-filled with the task's current state.
    Edit { task_id: String },
}

#[component]
pub fn TaskModal(
    dialog_ref: NodeRef<Dialog>,
    request: ReadSignal<Option<EditorRequest>>,
    workers: ReadSignal<Vec<Worker>>,
    set_columns: WriteSignal<Vec<Column>>,
) -> impl IntoView {
    let (task_id, set_task_id) = signal(String::new());
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (assigned_to, set_assigned_to) = signal(String::new());
    let (column_id, set_column_id) = signal(String::new());
    let (modal_title, set_modal_title) = signal(String::from("New Task"));

    // Populate the form and open the dialog whenever the parent requests it.
    Effect::new(move || {
        let Some(request) = request.get() else {
            return;
        };

        match request {
            EditorRequest::Create { column_id } => {
                set_modal_title.set("New Task".to_string());
                set_task_id.set(String::new());
                set_title.set(String::new());
                set_description.set(String::new());
                set_assigned_to.set(String::new());
                set_column_id.set(column_id);
            }
            EditorRequest::Edit { task_id } => {
                set_modal_title.set("Edit Task".to_string());
                // There is no single-task endpoint; re-fetch the board and
                // locate the task by id.
                spawn_local(async move {
                    match api::fetch_board().await {
                        Ok(board) => {
                            if let Some((column, task)) = board.find_task(&task_id) {
                                set_task_id.set(task.id.clone());
                                set_title.set(task.title.clone());
                                set_description.set(task.description.clone());
                                set_assigned_to.set(task.assigned_to.clone());
                                set_column_id.set(column.id.clone());
                            } else {
                                web_sys::console::error_1(
                                    &format!("Task {} no longer on the board", task_id).into(),
                                );
                            }
                        }
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to load task: {}", e).into(),
                            );
                        }
                    }
                });
            }
        }

        if let Some(dialog) = dialog_ref.get_untracked() {
            let _ = dialog.show_modal();
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let action = SaveAction::for_id(&task_id.get_untracked());
        let form_title = title.get_untracked();
        let form_description = description.get_untracked();
        let form_assigned_to = assigned_to.get_untracked();
        let form_column_id = column_id.get_untracked();

        spawn_local(async move {
            let result = match &action {
                SaveAction::Create => {
                    api::create_task(&NewTaskPayload {
                        title: form_title,
                        description: form_description,
                        column_id: form_column_id,
                        assigned_to: form_assigned_to,
                    })
                    .await
                }
                SaveAction::Update { id } => {
                    api::update_task(
                        id,
                        &UpdateTaskPayload {
                            title: form_title,
                            description: form_description,
                            assigned_to: form_assigned_to,
                        },
                    )
                    .await
                }
            };

            match result {
                Ok(()) => {
                    if let Some(dialog) = dialog_ref.get_untracked() {
                        dialog.close();
                    }
                    reload_board(set_columns);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to save task: {}", e).into());
                    alert("The task could not be saved");
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
        <dialog node_ref=dialog_ref id="taskModal" class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3 id="modalTitle">{modal_title}</h3>
                    <button type="button" class="modal-close" on:click=close_modal>
                        "\u{d7}"
                    </button>
                </div>
                <form id="taskForm" on:submit=handle_submit>
                    <input type="hidden" id="taskId" prop:value=move || task_id.get() />
                    <input type="hidden" id="columnId" prop:value=move || column_id.get() />
                    <div class="form-group">
                        <label for="taskTitle">"Title"</label>
                        <input
                            type="text"
                            id="taskTitle"
                            placeholder="Task title..."
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="taskDescription">"Description"</label>
                        <textarea
                            id="taskDescription"
                            placeholder="Task description..."
                            rows="4"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=move || description.get()
                        ></textarea>
                    </div>
                    <div class="form-group">
                        <label for="taskAssignedTo">"Assigned to"</label>
                        <select
                            id="taskAssignedTo"
                            on:change=move |ev| set_assigned_to.set(event_target_value(&ev))
                        >
                            <option value="" prop:selected=move || assigned_to.get().is_empty()>
                                "Unassigned"
                            </option>
                            {move || {
                                workers
                                    .get()
                                    .into_iter()
                                    .map(|worker| {
                                        let value = worker.id.clone();
                                        let selected_id = worker.id;
                                        view! {
                                            <option
                                                value=value
                                                prop:selected=move || {
                                                    assigned_to.get() == selected_id
                                                }
                                            >
                                                {worker.name}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">"Save"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
