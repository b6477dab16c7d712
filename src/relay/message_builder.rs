use std::fmt::Write;

use serde::Serialize;

enum Style {
    Bold,
    Code,
}

impl Style {
    fn marker(&self) -> &'static str {
        match self {
            Self::Bold => "*",
            Self::Code => "`",
        }
    }
}

/// Builds a Slack `mrkdwn` string. Everything written through [`std::fmt::Write`] is escaped, only
/// the builder methods emit formatting.
#[derive(Default)]
pub struct MessageBuilder {
    pub(crate) text: String,
    style_stack: Vec<Style>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn build(mut self) -> TextObject {
        self.close_styles();
        TextObject::Mrkdwn { text: self.text }
    }

    pub fn bold(&mut self) {
        self.open(Style::Bold);
    }

    pub fn code(&mut self) {
        self.open(Style::Code);
    }

    /// Slack emoji shortcode, e.g. `rocket` for :rocket:
    pub fn emoji(&mut self, name: &str) {
        self.text.push(':');
        self.text.push_str(name);
        self.text.push(':');
    }

    pub fn line_break(&mut self) {
        self.text.push('\n');
    }

    /// Panics if called with no style in the stack
    pub fn close_last(&mut self) {
        let style = self.style_stack.pop().expect("cannot be empty");
        self.text.push_str(style.marker());
    }

    pub fn close_styles(&mut self) {
        while !self.style_stack.is_empty() {
            self.close_last();
        }
    }

    fn open(&mut self, style: Style) {
        self.text.push_str(style.marker());
        self.style_stack.push(style);
    }
}

impl std::fmt::Write for MessageBuilder {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        let mut last = 0;
        for (i, c) in s.char_indices() {
            // NOTE: these are the only three characters Slack wants escaped in mrkdwn, see
            // https://api.slack.com/reference/surfaces/formatting#escaping
            let escaped = match c {
                '>' => "&gt;",
                '<' => "&lt;",
                '&' => "&amp;",
                _ => continue,
            };

            self.text.push_str(&s[last..i]);
            self.text.push_str(escaped);
            last = i + 1;
        }

        if last < s.len() {
            self.text.push_str(&s[last..]);
        }

        Ok(())
    }
}

/// Block Kit payload accepted by Slack incoming webhooks.
#[derive(Debug, Serialize)]
pub struct SlackMessage {
    /// Plain fallback, used by Slack for push notifications
    pub text: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<TextObject>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        fields: Vec<TextObject>,
    },
    Context {
        elements: Vec<TextObject>,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
}
