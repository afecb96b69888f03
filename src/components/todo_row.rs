//! Todo Row Component
//!
//! One todo rendered through an [`ItemEditor`]: a static description and
//! progress bar in view mode, a textarea and range slider in edit mode.

use leptos::prelude::*;
use todo_core::{EditorMode, ItemEditor, TodoItem, MAX_PROGRESS};

use crate::store::{store_remove_item, store_update_item, use_app_store};

/// Parse a range input value into a progress percentage
fn parse_progress(value: &str) -> Option<u8> {
    let value = value.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, MAX_PROGRESS as f64) as u8)
}

/// A single todo with its view/edit form
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let store = use_app_store();

    let editor = RwSignal::new(ItemEditor::new(item));
    let mode = move || editor.with(|e| e.mode());
    let is_viewing = move || mode() == EditorMode::View;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(replacement) = editor.try_update(|e| e.submit()).flatten() {
            store_update_item(&store, replacement);
        }
    };

    let on_toggle = move |_: web_sys::Event| {
        if let Some(replacement) = editor.try_update(|e| e.toggle_finished()).flatten() {
            store_update_item(&store, replacement);
        }
    };

    let on_delete = move |_: web_sys::MouseEvent| {
        if let Some(id) = editor.with(|e| e.delete_target().map(str::to_string)) {
            store_remove_item(&store, &id);
        }
    };

    let on_cancel = move |_: web_sys::MouseEvent| editor.update(|e| e.cancel());

    view! {
        <form class="todo-item" data-mode=move || mode().as_str() on:submit=on_submit>
            <Show when=is_viewing>
                <button
                    type="button"
                    class="delete-btn"
                    disabled=move || !editor.with(|e| e.can_delete())
                    on:click=on_delete
                >
                    "Delete"
                </button>

                <input
                    type="checkbox"
                    prop:checked=move || editor.with(|e| e.committed().is_finished)
                    disabled=move || !editor.with(|e| e.can_toggle_finished())
                    on:change=on_toggle
                />
            </Show>

            {move || if is_viewing() {
                view! {
                    <div class="item-text">
                        {move || editor.with(|e| e.committed().description.clone())}
                    </div>
                }.into_any()
            } else {
                view! {
                    <textarea
                        placeholder="Enter your todo"
                        required=true
                        prop:value=move || editor.with(|e| e.draft().description.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            editor.update(|e| e.set_description(text));
                        }
                    />
                }.into_any()
            }}

            {move || if is_viewing() {
                let progress = move || editor.with(|e| e.committed().progress);
                view! {
                    <progress value=move || progress().to_string() max=MAX_PROGRESS.to_string()>
                        {progress}
                    </progress>
                }.into_any()
            } else {
                view! {
                    <input
                        type="range"
                        min="0"
                        max=MAX_PROGRESS.to_string()
                        prop:value=move || editor.with(|e| e.draft().progress.to_string())
                        on:input=move |ev| {
                            if let Some(progress) = parse_progress(&event_target_value(&ev)) {
                                editor.update(|e| e.set_progress(progress));
                            }
                        }
                    />
                }.into_any()
            }}

            <div class="item-actions">
                <button type="submit">{move || mode().submit_label()}</button>
                <Show when=move || !is_viewing()>
                    <button type="button" class="cancel-btn" on:click=on_cancel>"Cancel"</button>
                </Show>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_progress() {
        assert_eq!(parse_progress("0"), Some(0));
        assert_eq!(parse_progress("42"), Some(42));
        assert_eq!(parse_progress(" 100 "), Some(100));
        assert_eq!(parse_progress("57.6"), Some(58));
    }

    #[test]
    fn test_parse_progress_clamps() {
        assert_eq!(parse_progress("140"), Some(100));
        assert_eq!(parse_progress("-5"), Some(0));
    }

    #[test]
    fn test_parse_progress_rejects_garbage() {
        assert_eq!(parse_progress(""), None);
        assert_eq!(parse_progress("abc"), None);
        assert_eq!(parse_progress("NaN"), None);
    }
}
