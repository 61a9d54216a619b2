//! Seed transcript.
//!
//! Every session starts from this fixed five-message conversation; nothing
//! is persisted between runs.

use crate::state::{Attachment, Author, Message, MessageId, ReplySnapshot};

/// The fixed seed conversation, ids 1 through 5.
pub fn conversation() -> Vec<Message> {
    vec![
        Message::standard(
            MessageId(1),
            Author::new("autoproducts", "autoproducts"),
            vec!["Test".to_string(), "Description".to_string()],
            "October 15, 2025 9:50 AM",
            vec![],
        ),
        Message::highlighted(
            MessageId(2),
            Author::new("Admin", "Admin"),
            vec![
                "Please review the attached specification document for V1.".to_string(),
                "Let me know if you have any questions.".to_string(),
            ],
            "October 15, 2025 9:46 AM",
            vec![Attachment {
                name: "specification-v1.pdf".to_string(),
                size: "1.2 MB".to_string(),
            }],
        ),
        Message::standard(
            MessageId(3),
            Author::new("Alice Freeman", "Project Manager"),
            vec![
                "The initial specs look good. I've added a few notes in the shared document. \
                 Please proceed with the component mockups."
                    .to_string(),
            ],
            "October 15, 2025 9:55 AM",
            vec![],
        ),
        Message::reply(
            MessageId(4),
            Author::new("You", "Developer"),
            vec![
                "Understood. I will start working on the mockups and provide an update by EOD."
                    .to_string(),
            ],
            "October 15, 2025 10:05 AM",
            vec![],
            ReplySnapshot {
                sender_name: "Alice Freeman".to_string(),
                content: "The initial specs look good...".to_string(),
            },
        ),
        Message::standard(
            MessageId(5),
            Author::new("Alice Freeman", "Project Manager"),
            vec!["Perfect, thank you!".to_string()],
            "October 15, 2025 10:07 AM",
            vec![],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Variant;

    #[test]
    fn test_seed_ids_are_one_through_five() {
        let msgs = conversation();
        let ids: Vec<u64> = msgs.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seed_variants_match_transcript() {
        let msgs = conversation();
        assert_eq!(msgs[1].variant, Variant::Highlighted);
        assert_eq!(msgs[3].variant, Variant::Reply);
        assert!(msgs[3].reply_to.is_some());
        assert_eq!(msgs[1].attachments[0].name, "specification-v1.pdf");
    }
}
