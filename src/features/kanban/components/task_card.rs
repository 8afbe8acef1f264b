use leptos::prelude::*;

use crate::features::kanban::services::delete_task_with_confirm;
use crate::models::{assignee_name, Column, Task, Worker};

/// A draggable task card with title, resolved assignee, optional
/// description, and the edit/delete actions.
#[component]
pub fn TaskCard(
    task: Task,
    workers: ReadSignal<Vec<Worker>>,
    dragged_task: RwSignal<Option<String>>,
    hovered_column: RwSignal<Option<String>>,
    set_columns: WriteSignal<Vec<Column>>,
    #[prop(into)] on_edit: Callback<String>,
) -> impl IntoView {
    let Task {
        id,
        title,
        description,
        assigned_to,
    } = task;

    let (dragging, set_dragging) = signal(false);

    let id_for_drag = id.clone();
    let id_for_edit = id.clone();
    let id_for_delete = id;

    view! {
        <div
            class="task"
            class:dragging=dragging
            draggable="true"
            on:dragstart=move |ev| {
                if let Some(dt) = ev.data_transfer() {
                    dt.set_effect_allowed("move");
                }
                dragged_task.set(Some(id_for_drag.clone()));
                set_dragging.set(true);
            }
            on:dragend=move |_| {
                set_dragging.set(false);
                hovered_column.set(None);
            }
        >
            <div class="task-title">{title}</div>
            {move || {
                workers
                    .with(|workers| assignee_name(workers, &assigned_to))
                    .map(|name| {
                        view! { <div class="task-assigned">"\u{1f464} " {name}</div> }
                    })
            }}
            {(!description.is_empty())
                .then(|| view! { <div class="task-description">{description.clone()}</div> })}
            <div class="task-actions">
                <button class="btn-edit" on:click=move |_| on_edit.run(id_for_edit.clone())>
                    "Edit"
                </button>
                <button
                    class="btn-delete"
                    on:click=move |_| {
                        delete_task_with_confirm(id_for_delete.clone(), set_columns);
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
