//! New Todo Form Component
//!
//! Text input and submit button for creating todos.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_create_item, use_app_store};

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.is_empty() {
            return;
        }
        if let Some(item) = store_create_item(&store, &text) {
            log::debug!("[FORM] Created todo {}", item.id);
        }
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-item-form" on:submit=create_todo>
            <label for="todo-description">"Describe your todo"</label>
            <div class="new-item-row">
                <input
                    id="todo-description"
                    type="text"
                    placeholder="Todo description"
                    prop:value=move || new_text.get()
                    on:input=move |ev| {
                        let input = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                        if let Some(input) = input {
                            set_new_text.set(input.value());
                        }
                    }
                />
                <button type="submit" disabled=move || new_text.with(|t| t.is_empty())>
                    "Submit"
                </button>
            </div>
        </form>
    }
}
