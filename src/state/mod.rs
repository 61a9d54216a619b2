//! Conversation state management

pub mod conversation;
pub mod draft;
pub mod message;

pub use conversation::{ConversationStore, ReplyContext};
pub use draft::{Draft, StagedFile, PLACEHOLDER_DEFAULT, PLACEHOLDER_REPLY};
pub use message::{Attachment, Author, Message, MessageId, ReplySnapshot, Variant};
