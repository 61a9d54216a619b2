//! Transcript rendering for the terminal host.
//!
//! All visual derivation lives here, outside the store: the store hands over
//! the ordered list, the selection id, and the placeholder, and this module
//! decides what that looks like.

use nu_ansi_term::{Color, Style};
use unicode_width::UnicodeWidthStr;

use crate::state::{ConversationStore, Message, Variant};

/// Sender name of messages drawn on the "sent" side.
fn is_local(message: &Message, local_name: &str) -> bool {
    message.author.name == local_name
}

fn header_style(message: &Message, local_name: &str) -> Style {
    if is_local(message, local_name) {
        Color::Blue.bold()
    } else if message.variant == Variant::Highlighted {
        Color::Yellow.bold()
    } else {
        Color::Default.bold()
    }
}

/// One message as terminal lines.
fn render_message(message: &Message, selected: bool, local_name: &str) -> String {
    let mut out = String::new();

    let marker = if selected { "▌ " } else { "  " };
    let header = format!("{} · {}", message.author.name, message.author.role);
    out.push_str(&format!(
        "{}{}  {}\n",
        Color::Cyan.paint(marker),
        header_style(message, local_name).paint(header.as_str()),
        Style::new().dimmed().paint(message.sent_at.as_str()),
    ));

    if let Some(snap) = &message.reply_to {
        out.push_str(&format!(
            "{}{}\n",
            marker,
            Style::new()
                .dimmed()
                .italic()
                .paint(format!("↪ {}: {}", snap.sender_name, snap.content)),
        ));
    }

    for block in &message.content {
        out.push_str(&format!("{}{}\n", marker, block));
    }

    if !message.attachments.is_empty() {
        let widest = message
            .attachments
            .iter()
            .map(|a| a.name.width())
            .max()
            .unwrap_or(0);
        for attachment in &message.attachments {
            let pad = " ".repeat(widest - attachment.name.width());
            out.push_str(&format!(
                "{}{}\n",
                marker,
                Color::Green.paint(format!("📎 {}{}  {}", attachment.name, pad, attachment.size)),
            ));
        }
    }

    out
}

/// The full transcript, newest message last.
pub fn transcript(store: &ConversationStore, local_name: &str) -> String {
    let selected = store.selected_id();
    store
        .messages()
        .iter()
        .map(|m| render_message(m, selected == Some(m.id), local_name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The composer strip: reply banner, staged files, prompt, current draft.
pub fn composer(store: &ConversationStore, draft_text: &str) -> String {
    let mut out = String::new();

    let ctx = store.reply_context();
    if !ctx.label.is_empty() {
        out.push_str(&format!(
            "{}\n{}\n",
            Color::Cyan.paint(ctx.label.as_str()),
            Style::new().dimmed().paint(ctx.content.as_str()),
        ));
    }

    for (i, file) in store.staged_files().iter().enumerate() {
        out.push_str(&format!(
            "{}\n",
            Color::Green.paint(format!("[{}] 📎 {} ({} bytes)", i, file.name, file.len)),
        ));
    }

    if draft_text.is_empty() {
        out.push_str(&format!(
            "> {}\n",
            Style::new().dimmed().paint(store.placeholder())
        ));
    } else {
        out.push_str(&format!("> {}\n", draft_text));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::state::{Author, MessageId, StagedFile};

    fn seeded() -> ConversationStore {
        ConversationStore::with_messages(Author::new("You", "Developer"), seed::conversation())
    }

    #[test]
    fn test_transcript_lists_every_message_in_order() {
        let store = seeded();
        let text = transcript(&store, "You");

        let alice = text.find("Alice Freeman").unwrap();
        let thanks = text.find("Perfect, thank you!").unwrap();
        assert!(alice < thanks);
        assert!(text.contains("specification-v1.pdf"));
    }

    #[test]
    fn test_selection_marker_only_on_selected_message() {
        let mut store = seeded();
        store.select_for_reply(MessageId(3));

        let text = transcript(&store, "You");
        assert!(text.contains("▌"));

        store.clear_selection();
        let text = transcript(&store, "You");
        assert!(!text.contains("▌"));
    }

    #[test]
    fn test_composer_shows_placeholder_when_draft_empty() {
        let store = seeded();
        let strip = composer(&store, "");
        assert!(strip.contains("Add a comment or attach a file..."));
    }

    #[test]
    fn test_composer_shows_reply_banner_and_staged_files() {
        let mut store = seeded();
        store.select_for_reply(MessageId(3));
        store.stage_files([StagedFile::new("notes.txt", 2048)]);

        let strip = composer(&store, "");
        assert!(strip.contains("Replying to Alice Freeman"));
        assert!(strip.contains("notes.txt"));
        assert!(strip.contains("Type your reply..."));
    }
}
