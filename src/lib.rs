//! Palaver Library
//!
//! Conversation panel state for chat front-ends: an ordered message list
//! with reply threading and attachment staging, owned by a single
//! [`state::ConversationStore`] and mutated only through its operations.
//! Rendering and input capture are collaborators at the crate boundary;
//! `runner` hosts both for the demo binary.

pub mod config;
pub mod format;
pub mod input;
pub mod render;
pub mod runner;
pub mod seed;
pub mod state;
