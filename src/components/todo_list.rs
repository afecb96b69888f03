//! Todo List Component
//!
//! Renders the collection in insertion order, one editor row per item.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::use_app_store;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let todos = move || store.with(|todos| todos.items().to_vec());

    view! {
        <ul class="todos">
            <For
                each=todos
                key=|item| {
                    // Key on every field so a committed change rebuilds the row
                    (
                        item.id.clone(),
                        item.description.clone(),
                        item.progress,
                        item.is_finished,
                    )
                }
                children=move |item| {
                    view! {
                        <li>
                            <TodoRow item=item />
                        </li>
                    }
                }
            />
        </ul>
    }
}
