//! Chat message types
//!
//! Defines the message structure shared by the store and its rendering host.

use serde::{Deserialize, Serialize};

/// Identifier of a message within one conversation.
///
/// Assigned by the store's counter, strictly increasing in send order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who sent a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
}

impl Author {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Presentation variant of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Standard,
    Highlighted,
    Reply,
}

/// Denormalized copy of the message being replied to, captured at send time.
///
/// Deliberately a snapshot, not a reference: edits to the original message
/// after the reply is sent do not propagate here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplySnapshot {
    pub sender_name: String,
    pub content: String,
}

/// Attachment metadata on a sent message. No bytes, just display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    /// Human-formatted size ("12.3 KB", "1.2 MB").
    pub size: String,
}

/// A single message in the conversation.
///
/// `reply_to` is `Some` exactly when `variant` is [`Variant::Reply`]; the
/// constructors keep the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub author: Author,
    /// Ordered content blocks (paragraphs).
    pub content: Vec<String>,
    /// Display timestamp, already formatted for the UI.
    pub sent_at: String,
    pub variant: Variant,
    pub attachments: Vec<Attachment>,
    pub reply_to: Option<ReplySnapshot>,
}

impl Message {
    pub fn standard(
        id: MessageId,
        author: Author,
        content: Vec<String>,
        sent_at: impl Into<String>,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            id,
            author,
            content,
            sent_at: sent_at.into(),
            variant: Variant::Standard,
            attachments,
            reply_to: None,
        }
    }

    pub fn highlighted(
        id: MessageId,
        author: Author,
        content: Vec<String>,
        sent_at: impl Into<String>,
        attachments: Vec<Attachment>,
    ) -> Self {
        Self {
            variant: Variant::Highlighted,
            ..Self::standard(id, author, content, sent_at, attachments)
        }
    }

    pub fn reply(
        id: MessageId,
        author: Author,
        content: Vec<String>,
        sent_at: impl Into<String>,
        attachments: Vec<Attachment>,
        reply_to: ReplySnapshot,
    ) -> Self {
        Self {
            variant: Variant::Reply,
            reply_to: Some(reply_to),
            ..Self::standard(id, author, content, sent_at, attachments)
        }
    }

    /// Content blocks joined into one line, as shown in reply previews.
    pub fn flattened_content(&self) -> String {
        self.content.join(" ")
    }

    /// Snapshot of this message for use in a reply.
    pub fn snapshot(&self) -> ReplySnapshot {
        ReplySnapshot {
            sender_name: self.author.name.clone(),
            content: self.flattened_content(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_constructor_sets_variant_and_snapshot() {
        let original = Message::standard(
            MessageId(1),
            Author::new("Alice Freeman", "Project Manager"),
            vec!["First".to_string(), "Second".to_string()],
            "9:50 AM",
            vec![],
        );
        let reply = Message::reply(
            MessageId(2),
            Author::new("You", "Developer"),
            vec!["Got it".to_string()],
            "9:51 AM",
            vec![],
            original.snapshot(),
        );

        assert_eq!(reply.variant, Variant::Reply);
        let snap = reply.reply_to.expect("reply carries a snapshot");
        assert_eq!(snap.sender_name, "Alice Freeman");
        assert_eq!(snap.content, "First Second");
    }

    #[test]
    fn test_standard_constructor_has_no_reply() {
        let msg = Message::standard(
            MessageId(1),
            Author::new("Admin", "Admin"),
            vec!["Hello".to_string()],
            "9:46 AM",
            vec![],
        );
        assert_eq!(msg.variant, Variant::Standard);
        assert!(msg.reply_to.is_none());
    }

    #[test]
    fn test_flattened_content_joins_with_single_space() {
        let msg = Message::standard(
            MessageId(1),
            Author::new("Admin", "Admin"),
            vec!["One".to_string(), "Two".to_string(), "Three".to_string()],
            "9:46 AM",
            vec![],
        );
        assert_eq!(msg.flattened_content(), "One Two Three");
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut original = Message::standard(
            MessageId(1),
            Author::new("Admin", "Admin"),
            vec!["Before".to_string()],
            "9:46 AM",
            vec![],
        );
        let snap = original.snapshot();
        original.content[0] = "After".to_string();
        assert_eq!(snap.content, "Before");
    }
}
