//! Item Editor
//!
//! View/edit state machine for one todo. While editing, changes live in a
//! [`Draft`] and only reach the store when the edit is submitted.

use crate::domain::{TodoItem, MAX_PROGRESS};

/// Editor presentation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Read-only display with the side controls
    #[default]
    View,
    /// Editable description and progress
    Edit,
}

impl EditorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorMode::View => "view",
            EditorMode::Edit => "edit",
        }
    }

    /// Label of the form's submit button
    pub fn submit_label(&self) -> &'static str {
        match self {
            EditorMode::View => "Update",
            EditorMode::Edit => "Save",
        }
    }
}

/// Uncommitted edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub description: String,
    pub progress: u8,
}

impl Draft {
    fn of(item: &TodoItem) -> Self {
        Self {
            description: item.description.clone(),
            progress: item.progress,
        }
    }
}

/// Editor for a single todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEditor {
    committed: TodoItem,
    mode: EditorMode,
    draft: Draft,
}

impl ItemEditor {
    pub fn new(item: TodoItem) -> Self {
        let draft = Draft::of(&item);
        Self {
            committed: item,
            mode: EditorMode::View,
            draft,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Last values sent to the store
    pub fn committed(&self) -> &TodoItem {
        &self.committed
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Set draft progress, clamped to 100
    pub fn set_progress(&mut self, progress: u8) {
        self.draft.progress = progress.min(MAX_PROGRESS);
    }

    /// Submit the form
    ///
    /// In view mode this enters edit mode and commits nothing. In edit mode
    /// it returns the replacement item for the store and goes back to view,
    /// unless the draft description is empty, in which case the editor stays
    /// in edit mode.
    pub fn submit(&mut self) -> Option<TodoItem> {
        match self.mode {
            EditorMode::View => {
                self.draft = Draft::of(&self.committed);
                self.mode = EditorMode::Edit;
                None
            }
            EditorMode::Edit => {
                if self.draft.description.is_empty() {
                    return None;
                }
                let replacement = TodoItem {
                    id: self.committed.id.clone(),
                    description: self.draft.description.clone(),
                    progress: self.draft.progress,
                    is_finished: self.committed.is_finished,
                }
                .normalized();
                self.committed = replacement.clone();
                self.mode = EditorMode::View;
                Some(replacement)
            }
        }
    }

    /// Drop the draft and return to view mode without committing
    pub fn cancel(&mut self) {
        self.draft = Draft::of(&self.committed);
        self.mode = EditorMode::View;
    }

    /// Whether the completion checkbox is live
    pub fn can_toggle_finished(&self) -> bool {
        self.mode == EditorMode::View && self.committed.can_finish()
    }

    /// Flip the completion flag, returning the replacement for the store
    pub fn toggle_finished(&mut self) -> Option<TodoItem> {
        if !self.can_toggle_finished() {
            return None;
        }
        self.committed.is_finished = !self.committed.is_finished;
        Some(self.committed.clone())
    }

    /// Whether the delete control is live
    pub fn can_delete(&self) -> bool {
        self.mode == EditorMode::View && self.committed.is_finished
    }

    /// Id to hand to the store's delete, if deletion is allowed
    pub fn delete_target(&self) -> Option<&str> {
        self.can_delete().then_some(self.committed.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(progress: u8, is_finished: bool) -> TodoItem {
        TodoItem {
            id: "item0001".to_string(),
            description: "Write report".to_string(),
            progress,
            is_finished,
        }
    }

    #[test]
    fn test_starts_in_view_mode() {
        let editor = ItemEditor::new(make_item(0, false));
        assert_eq!(editor.mode(), EditorMode::View);
        assert_eq!(editor.mode().submit_label(), "Update");
    }

    #[test]
    fn test_submit_in_view_enters_edit() {
        let mut editor = ItemEditor::new(make_item(0, false));
        assert!(editor.submit().is_none());
        assert_eq!(editor.mode(), EditorMode::Edit);
        assert_eq!(editor.mode().as_str(), "edit");
        assert_eq!(editor.mode().submit_label(), "Save");
    }

    #[test]
    fn test_save_commits_draft() {
        let mut editor = ItemEditor::new(make_item(10, false));
        editor.submit();
        editor.set_description("Write final report");
        editor.set_progress(60);

        let replacement = editor.submit().expect("edit committed");

        assert_eq!(replacement.id, "item0001");
        assert_eq!(replacement.description, "Write final report");
        assert_eq!(replacement.progress, 60);
        assert_eq!(editor.mode(), EditorMode::View);
        assert_eq!(editor.committed(), &replacement);
    }

    #[test]
    fn test_cancel_restores_committed_values() {
        let mut editor = ItemEditor::new(make_item(30, false));
        editor.submit();
        editor.set_description("Something else");
        editor.set_progress(90);

        editor.cancel();

        assert_eq!(editor.mode(), EditorMode::View);
        assert_eq!(editor.draft().description, "Write report");
        assert_eq!(editor.draft().progress, 30);
        assert_eq!(editor.committed(), &make_item(30, false));
    }

    #[test]
    fn test_empty_draft_stays_in_edit() {
        let mut editor = ItemEditor::new(make_item(0, false));
        editor.submit();
        editor.set_description("");

        assert!(editor.submit().is_none());
        assert_eq!(editor.mode(), EditorMode::Edit);
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut editor = ItemEditor::new(make_item(0, false));
        editor.submit();
        editor.set_progress(180);
        assert_eq!(editor.draft().progress, 100);
    }

    #[test]
    fn test_toggle_at_full_progress() {
        let mut editor = ItemEditor::new(make_item(100, false));
        assert!(editor.can_toggle_finished());

        let replacement = editor.toggle_finished().expect("toggle allowed");
        assert!(replacement.is_finished);
        assert!(editor.can_delete());

        let replacement = editor.toggle_finished().expect("toggle allowed");
        assert!(!replacement.is_finished);
    }

    #[test]
    fn test_toggle_below_full_progress_is_disabled() {
        let mut editor = ItemEditor::new(make_item(99, false));
        assert!(!editor.can_toggle_finished());
        assert!(editor.toggle_finished().is_none());
        assert!(!editor.committed().is_finished);
    }

    #[test]
    fn test_side_controls_inactive_while_editing() {
        let mut editor = ItemEditor::new(make_item(100, true));
        editor.submit();
        assert!(!editor.can_toggle_finished());
        assert!(editor.delete_target().is_none());
    }

    #[test]
    fn test_delete_only_when_finished() {
        assert!(ItemEditor::new(make_item(100, false)).delete_target().is_none());
        assert_eq!(ItemEditor::new(make_item(100, true)).delete_target(), Some("item0001"));
    }

    #[test]
    fn test_lowering_progress_clears_finished() {
        let mut editor = ItemEditor::new(make_item(100, true));
        editor.submit();
        editor.set_progress(50);
        let replacement = editor.submit().unwrap();
        assert!(!replacement.is_finished);
    }
}
