use leptos::prelude::*;

use crate::features::kanban::services::move_task;
use crate::models::{Column, Worker};

use super::TaskCard;

/// A single board lane: header with task-count badge, the drop target
/// holding the task cards, and the "add task" affordance.
#[component]
pub fn BoardColumn(
    column: Column,
    workers: ReadSignal<Vec<Worker>>,
    dragged_task: RwSignal<Option<String>>,
    hovered_column: RwSignal<Option<String>>,
    set_columns: WriteSignal<Vec<Column>>,
    #[prop(into)] on_add: Callback<String>,
    #[prop(into)] on_edit: Callback<String>,
) -> impl IntoView {
    let Column { id, title, tasks } = column;
    let task_count = tasks.len();

    // Each closure needs its own copy of the column id
    let id_for_highlight = id.clone();
    let id_for_over = id.clone();
    let id_for_leave = id.clone();
    let id_for_drop = id.clone();
    let id_for_add = id;

    view! {
        <div
            class="column"
            class:drag-over=move || {
                hovered_column.get().as_deref() == Some(id_for_highlight.as_str())
            }
        >
            <div class="column-header">
                <span class="column-title">{title}</span>
                <span class="task-count">{task_count}</span>
            </div>
            <div
                class="tasks-container"
                on:dragover=move |ev| {
                    ev.prevent_default();
                    if let Some(dt) = ev.data_transfer() {
                        dt.set_drop_effect("move");
                    }
                    hovered_column.set(Some(id_for_over.clone()));
                }
                on:dragleave=move |_| {
                    if hovered_column.get_untracked().as_deref() == Some(id_for_leave.as_str()) {
                        hovered_column.set(None);
                    }
                }
                on:drop=move |ev| {
                    ev.prevent_default();
                    hovered_column.set(None);
                    if let Some(task_id) = dragged_task.get_untracked() {
                        move_task(task_id, id_for_drop.clone(), set_columns);
                    }
                    // Cleared no matter how the move request turns out
                    dragged_task.set(None);
                }
            >
                {tasks
                    .into_iter()
                    .map(|task| {
                        view! {
                            <TaskCard
                                task
                                workers
                                dragged_task
                                hovered_column
                                set_columns
                                on_edit
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button class="add-task-btn" on:click=move |_| on_add.run(id_for_add.clone())>
                "+ Add task"
            </button>
        </div>
    }
}
