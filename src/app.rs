use leptos::prelude::*;

use crate::pages::BoardPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <BoardPage />
        </main>
    }
}
