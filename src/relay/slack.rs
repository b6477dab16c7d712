use std::fmt::Write;

use crate::relay::{Block, MessageBuilder, SlackMessage, Star, TextObject};

/// Renders the chat message announcing a new star.
pub fn star_notification(star: &Star) -> SlackMessage {
    let mut header = MessageBuilder::new();
    header.emoji("rocket");
    write!(header, " ").unwrap();
    header.bold();
    write!(header, "New GitHub Star!").unwrap();
    header.close_last();
    write!(header, " ").unwrap();
    header.emoji("rocket");

    let footer = {
        let mut footer = MessageBuilder::new();
        write!(footer, "Way to go! ").unwrap();
        footer.emoji("tada");
        footer
    };

    let mut fallback = MessageBuilder::new();
    write!(fallback, "New GitHub star on {} by {}", star.repo, star.user).unwrap();

    SlackMessage {
        text: fallback.text,
        blocks: vec![
            Block::Section {
                text: Some(header.build()),
                fields: Vec::new(),
            },
            Block::Section {
                text: None,
                fields: vec![
                    field("Repository:", &star.repo),
                    field("Starred By:", &star.user),
                ],
            },
            Block::Context {
                elements: vec![footer.build()],
            },
        ],
    }
}

fn field(label: &str, value: &str) -> TextObject {
    let mut message = MessageBuilder::new();
    message.bold();
    write!(message, "{}", label).unwrap();
    message.close_last();
    message.line_break();
    message.code();
    write!(message, "{}", value).unwrap();
    message.build()
}
