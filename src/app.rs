//! Progress Todo App
//!
//! Top-level component: owns the todo store and lays out the form and list.

use leptos::prelude::*;
use todo_core::{StoreConfig, TodoStore};

use crate::components::{NewTodoForm, TodoList};
use crate::storage::BrowserSlot;
use crate::store::AppStore;

#[component]
pub fn App() -> impl IntoView {
    let config = StoreConfig::default();
    let slot = BrowserSlot::new(config.storage_key.as_str());
    let store: AppStore = RwSignal::new(TodoStore::load(slot, &config));
    log::info!("[APP] Loaded {} todos", store.with_untracked(|todos| todos.len()));

    // Provide the store to all children
    provide_context(store);

    view! {
        <div class="app-layout">
            <h1>"Todo App"</h1>

            <NewTodoForm />

            <TodoList />

            <p class="item-count">
                {move || {
                    store.with(|todos| {
                        format!("{} todos, {} finished", todos.len(), todos.finished_count())
                    })
                }}
            </p>
        </div>
    }
}
