//! Draft state: reply selection, staged files, input placeholder
//!
//! Staged files are handles the user has picked but not yet sent. They carry
//! metadata only (name + byte length); sizes are formatted at send time.

use serde::{Deserialize, Serialize};

use super::message::MessageId;

/// Default input prompt when no reply target is selected.
pub const PLACEHOLDER_DEFAULT: &str = "Add a comment or attach a file...";
/// Input prompt while a reply target is selected.
pub const PLACEHOLDER_REPLY: &str = "Type your reply...";

/// A file handle chosen by the user but not yet attached to a sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFile {
    pub name: String,
    /// Byte length reported by the picker.
    pub len: u64,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, len: u64) -> Self {
        Self {
            name: name.into(),
            len,
        }
    }
}

/// Pending-send state for the input box.
#[derive(Debug, Clone)]
pub struct Draft {
    selected: Option<MessageId>,
    staged: Vec<StagedFile>,
    placeholder: &'static str,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            selected: None,
            staged: Vec::new(),
            placeholder: PLACEHOLDER_DEFAULT,
        }
    }
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<MessageId> {
        self.selected
    }

    pub fn staged(&self) -> &[StagedFile] {
        &self.staged
    }

    pub fn placeholder(&self) -> &str {
        self.placeholder
    }

    pub fn select(&mut self, id: MessageId) {
        self.selected = Some(id);
        self.placeholder = PLACEHOLDER_REPLY;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.placeholder = PLACEHOLDER_DEFAULT;
    }

    /// Append newly chosen file handles to the staged list.
    pub fn stage(&mut self, files: impl IntoIterator<Item = StagedFile>) {
        self.staged.extend(files);
        tracing::debug!(staged = self.staged.len(), "files staged");
    }

    /// Remove the staged file at `index`. Out-of-range is an explicit no-op.
    pub fn unstage(&mut self, index: usize) {
        if index < self.staged.len() {
            self.staged.remove(index);
        } else {
            tracing::debug!(index, staged = self.staged.len(), "unstage out of range");
        }
    }

    pub fn clear_staged(&mut self) {
        self.staged.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_switches_placeholder() {
        let mut draft = Draft::new();
        assert_eq!(draft.placeholder(), PLACEHOLDER_DEFAULT);

        draft.select(MessageId(3));
        assert_eq!(draft.selected(), Some(MessageId(3)));
        assert_eq!(draft.placeholder(), PLACEHOLDER_REPLY);

        draft.clear_selection();
        assert_eq!(draft.selected(), None);
        assert_eq!(draft.placeholder(), PLACEHOLDER_DEFAULT);
    }

    #[test]
    fn test_stage_appends_in_order() {
        let mut draft = Draft::new();
        draft.stage([StagedFile::new("a.pdf", 100)]);
        draft.stage([StagedFile::new("b.png", 200), StagedFile::new("c.txt", 300)]);

        let names: Vec<&str> = draft.staged().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.png", "c.txt"]);
    }

    #[test]
    fn test_unstage_removes_at_index() {
        let mut draft = Draft::new();
        draft.stage([StagedFile::new("first.pdf", 100), StagedFile::new("second.png", 200)]);

        draft.unstage(0);

        assert_eq!(draft.staged().len(), 1);
        assert_eq!(draft.staged()[0], StagedFile::new("second.png", 200));
    }

    #[test]
    fn test_unstage_out_of_range_is_noop() {
        let mut draft = Draft::new();
        draft.stage([StagedFile::new("only.pdf", 100)]);

        draft.unstage(5);
        draft.unstage(1);

        assert_eq!(draft.staged().len(), 1);
    }

    #[test]
    fn test_unstage_on_empty_is_noop() {
        let mut draft = Draft::new();
        draft.unstage(0);
        assert!(draft.staged().is_empty());
    }
}
