use leptos::html::Dialog;
use leptos::prelude::*;

use crate::components::{EditorRequest, GitPushButton, TaskModal, WorkersModal};
use crate::features::kanban::components::BoardColumn;
use crate::features::kanban::services::{reload_board, reload_workers};
use crate::models::{Column, Worker};

/// The board controller: owns every piece of mutable client state (columns,
/// cached workers, drag state, editor request) and wires the components
/// together. State reset points are initialization, post-submit, and
/// post-drop; everything else is a full re-fetch from the server.
#[component]
pub fn BoardPage() -> impl IntoView {
    let (columns, set_columns) = signal(Vec::<Column>::new());
    let (workers, set_workers) = signal(Vec::<Worker>::new());

    // Drag-and-drop state: the task being dragged and the column under it
    let dragged_task = RwSignal::new(None::<String>);
    let hovered_column = RwSignal::new(None::<String>);

    let (editor_request, set_editor_request) = signal(None::<EditorRequest>);

    let task_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let workers_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    // Initial load. Workers first so assignee names resolve as soon as the
    // board renders; both calls are independent fetches.
    reload_workers(set_workers);
    reload_board(set_columns);

    let open_create = Callback::new(move |column_id: String| {
        set_editor_request.set(Some(EditorRequest::Create { column_id }));
    });
    let open_edit = Callback::new(move |task_id: String| {
        set_editor_request.set(Some(EditorRequest::Edit { task_id }));
    });

    let open_workers = move |_| {
        reload_workers(set_workers);
        if let Some(dialog) = workers_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    view! {
        <div class="board-page">
            <header class="board-header">
                <h1>"Task Board"</h1>
                <div class="board-actions">
                    <button class="btn-secondary" on:click=open_workers>
                        "Manage Workers"
                    </button>
                    <GitPushButton />
                </div>
            </header>

            <div id="board" class="board">
                {move || {
                    columns
                        .get()
                        .into_iter()
                        .map(|column| {
                            view! {
                                <BoardColumn
                                    column
                                    workers
                                    dragged_task
                                    hovered_column
                                    set_columns
                                    on_add=open_create
                                    on_edit=open_edit
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <TaskModal
                dialog_ref=task_dialog_ref
                request=editor_request
                workers=workers
                set_columns=set_columns
            />
            <WorkersModal
                dialog_ref=workers_dialog_ref
                workers=workers
                set_workers=set_workers
                set_columns=set_columns
            />
        </div>
    }
}
