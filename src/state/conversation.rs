//! Conversation store
//!
//! Owns the ordered message list and the draft state for one conversation
//! view. All mutation goes through the methods here; the rendering host only
//! reads through the accessors and drains the scroll request after it has
//! applied the newest message.

use chrono::Local;
use tracing::debug;

use super::draft::{Draft, StagedFile};
use super::message::{Attachment, Author, Message, MessageId};
use crate::format;

/// Body text used when a message is sent with attachments but no text.
const ATTACHMENTS_ONLY_BODY: &str = "Attachment(s) added";

/// Reply banner shown above the input while a selection is active.
///
/// Both fields are empty when nothing is selected or the selected id no
/// longer resolves to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplyContext {
    /// "Replying to {name}", or empty.
    pub label: String,
    /// Flattened content of the selected message, or empty.
    pub content: String,
}

/// State holder for a single conversation view.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    author: Author,
    messages: Vec<Message>,
    next_id: u64,
    draft: Draft,
    scroll_requested: bool,
}

impl ConversationStore {
    /// Empty conversation authored by `author` on the local side.
    pub fn new(author: Author) -> Self {
        Self::with_messages(author, Vec::new())
    }

    /// Conversation pre-populated with `messages` (e.g. the seed transcript).
    /// The id counter resumes after the highest existing id.
    pub fn with_messages(author: Author, messages: Vec<Message>) -> Self {
        let next_id = messages.iter().map(|m| m.id.0).max().unwrap_or(0) + 1;
        Self {
            author,
            messages,
            next_id,
            draft: Draft::new(),
            scroll_requested: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Id of the message currently targeted for a reply, if any.
    pub fn selected_id(&self) -> Option<MessageId> {
        self.draft.selected()
    }

    pub fn placeholder(&self) -> &str {
        self.draft.placeholder()
    }

    pub fn staged_files(&self) -> &[StagedFile] {
        self.draft.staged()
    }

    /// Toggle the reply selection. Selecting the already-selected id clears
    /// it; any other id (valid or not) becomes the new selection.
    pub fn select_for_reply(&mut self, id: MessageId) {
        if self.draft.selected() == Some(id) {
            self.clear_selection();
        } else {
            debug!(%id, "reply target selected");
            self.draft.select(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.draft.clear_selection();
    }

    /// Banner text for the current selection.
    pub fn reply_context(&self) -> ReplyContext {
        let Some(id) = self.draft.selected() else {
            return ReplyContext::default();
        };
        match self.find(id) {
            Some(msg) => ReplyContext {
                label: format!("Replying to {}", msg.author.name),
                content: msg.flattened_content(),
            },
            None => ReplyContext::default(),
        }
    }

    /// Append newly chosen file handles to the staged list.
    pub fn stage_files(&mut self, files: impl IntoIterator<Item = StagedFile>) {
        self.draft.stage(files);
    }

    /// Remove the staged file at `index`; out-of-range is a no-op.
    pub fn unstage_file(&mut self, index: usize) {
        self.draft.unstage(index);
    }

    /// Send the draft.
    ///
    /// A trimmed-empty body with nothing staged is a no-op. While a reply
    /// selection is active the new message captures a snapshot of the
    /// selected message; a selection whose id no longer resolves also aborts
    /// the send, leaving the draft untouched. On success the message is
    /// appended, selection and staged files are reset, and a scroll-to-latest
    /// request is raised for the host.
    pub fn compose(&mut self, body: &str) -> Option<MessageId> {
        let body = body.trim();
        if body.is_empty() && self.draft.staged().is_empty() {
            debug!("compose skipped: empty draft");
            return None;
        }

        let reply_to = match self.draft.selected() {
            Some(id) => match self.find(id) {
                Some(target) => Some(target.snapshot()),
                None => {
                    debug!(%id, "compose skipped: selection no longer resolves");
                    return None;
                }
            },
            None => None,
        };

        let content = if body.is_empty() {
            vec![ATTACHMENTS_ONLY_BODY.to_string()]
        } else {
            vec![body.to_string()]
        };
        let attachments: Vec<Attachment> = self
            .draft
            .staged()
            .iter()
            .map(|f| Attachment {
                name: f.name.clone(),
                size: format::kb_size(f.len),
            })
            .collect();

        let id = MessageId(self.next_id);
        self.next_id += 1;
        let sent_at = format::clock_time(Local::now());
        let message = match reply_to {
            Some(snapshot) => Message::reply(
                id,
                self.author.clone(),
                content,
                sent_at,
                attachments,
                snapshot,
            ),
            None => Message::standard(id, self.author.clone(), content, sent_at, attachments),
        };

        debug!(%id, variant = ?message.variant, attachments = message.attachments.len(), "message sent");
        self.messages.push(message);
        self.draft.clear_selection();
        self.draft.clear_staged();
        self.scroll_requested = true;
        Some(id)
    }

    /// True once per raised scroll-to-latest request. The host calls this
    /// after rendering the appended message, so the jump lands on content
    /// that is actually on screen.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    fn find(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }
}
