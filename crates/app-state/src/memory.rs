//! Memory chat
//!
//! Every accepted message schedules its own canned reply through a deferred
//! [`MemoryEvent::ReplyDue`] carrying a ticket. Each reply settles only its
//! own ticket and a ticket that is no longer pending is ignored, so a reply
//! can never be appended twice. Replies arrive in send order only because
//! every send waits the same delay.

use std::collections::BTreeSet;
use std::time::Duration;

use app_core::messages::{prepare_outgoing, Message};
use app_core::sample;
use app_platform::HapticFeedback;
use app_ui::{ButtonSize, ButtonVariant, GlassButton, GlassInput};
use chrono::Utc;

use crate::effect::Effect;
use crate::screen::Screen;

/// Delay before the assistant replies
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Visible lines of the chat input
pub const INPUT_LINES: u32 = 4;

/// Events on the memory screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryEvent {
    /// The input text changed
    InputChanged(String),
    /// The send button was pressed
    Send,
    /// A scheduled reply is due
    ReplyDue(u64),
}

/// Chat state
#[derive(Debug, Clone)]
pub struct ChatScreen {
    messages: Vec<Message>,
    input: String,
    pending: BTreeSet<u64>,
    next_ticket: u64,
    next_id: u64,
    reply_delay: Duration,
}

impl ChatScreen {
    /// A conversation holding only the welcome message
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: vec![Message::welcome(Utc::now())],
            input: String::new(),
            pending: BTreeSet::new(),
            next_ticket: 1,
            next_id: 2,
            reply_delay,
        }
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Current input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the assistant is "typing"
    pub fn is_composing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of replies still to come
    pub fn pending_replies(&self) -> usize {
        self.pending.len()
    }

    /// Configured reply delay
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Whether the current input would be accepted
    pub fn can_send(&self) -> bool {
        prepare_outgoing(&self.input).is_some()
    }

    /// The chat input field
    pub fn input_field(&self) -> GlassInput {
        GlassInput::new()
            .with_placeholder(sample::CHAT_PLACEHOLDER)
            .with_value(self.input.clone())
            .multiline(INPUT_LINES)
            .on_change_text("inputChanged")
    }

    /// The send button, disabled while the input is blank
    pub fn send_button(&self) -> GlassButton {
        GlassButton::new("Send", "send")
            .with_variant(ButtonVariant::Primary)
            .with_size(ButtonSize::Sm)
            .disabled(!self.can_send())
    }

    fn next_message_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    fn send(&mut self) -> Vec<Effect<MemoryEvent>> {
        let Some(text) = prepare_outgoing(&self.input) else {
            return Vec::new();
        };

        let id = self.next_message_id();
        self.messages.push(Message::user(id, text, Utc::now()));
        self.input.clear();

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending.insert(ticket);
        tracing::debug!("Message accepted, reply {} scheduled", ticket);

        vec![
            Effect::haptic(HapticFeedback::LIGHT),
            Effect::defer(self.reply_delay, MemoryEvent::ReplyDue(ticket)),
        ]
    }

    fn reply(&mut self, ticket: u64) -> Vec<Effect<MemoryEvent>> {
        if !self.pending.remove(&ticket) {
            tracing::debug!("Ignoring stale reply {}", ticket);
            return Vec::new();
        }
        let id = self.next_message_id();
        self.messages.push(Message::canned_reply(id, Utc::now()));
        Vec::new()
    }
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl Screen for ChatScreen {
    type Event = MemoryEvent;

    fn name(&self) -> &'static str {
        "memory"
    }

    fn reduce(&mut self, event: MemoryEvent) -> Vec<Effect<MemoryEvent>> {
        match event {
            MemoryEvent::InputChanged(text) => {
                self.input = text;
                Vec::new()
            }
            MemoryEvent::Send => self.send(),
            MemoryEvent::ReplyDue(ticket) => self.reply(ticket),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::messages::{CANNED_REPLY, WELCOME_MESSAGE};

    fn type_and_send(chat: &mut ChatScreen, text: &str) -> Vec<Effect<MemoryEvent>> {
        chat.reduce(MemoryEvent::InputChanged(text.to_string()));
        chat.reduce(MemoryEvent::Send)
    }

    #[test]
    fn test_starts_with_welcome() {
        let chat = ChatScreen::default();
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, WELCOME_MESSAGE);
        assert!(!chat.is_composing());
        assert!(chat.send_button().disabled);
        assert_eq!(chat.input_field().display_text(), "Share your thoughts...");
    }

    #[test]
    fn test_send_appends_trimmed_user_message() {
        let mut chat = ChatScreen::default();
        let effects = type_and_send(&mut chat, "  Hello  ");

        assert_eq!(chat.messages().len(), 2);
        let sent = &chat.messages()[1];
        assert!(sent.is_user);
        assert_eq!(sent.text, "Hello");
        assert_eq!(chat.input(), "");
        assert!(chat.is_composing());
        assert_eq!(
            effects,
            vec![
                Effect::Haptic(HapticFeedback::LIGHT),
                Effect::Defer {
                    delay: DEFAULT_REPLY_DELAY,
                    event: MemoryEvent::ReplyDue(1),
                },
            ]
        );
    }

    #[test]
    fn test_blank_input_sends_nothing() {
        let mut chat = ChatScreen::default();
        assert!(type_and_send(&mut chat, "").is_empty());
        assert!(type_and_send(&mut chat, "   \n\t").is_empty());
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_composing());
    }

    #[test]
    fn test_reply_appends_canned_message_once() {
        let mut chat = ChatScreen::default();
        type_and_send(&mut chat, "Hello");
        chat.reduce(MemoryEvent::ReplyDue(1));
        chat.reduce(MemoryEvent::ReplyDue(1));

        assert_eq!(chat.messages().len(), 3);
        let reply = &chat.messages()[2];
        assert!(!reply.is_user);
        assert_eq!(reply.text, CANNED_REPLY);
        assert!(!chat.is_composing());
    }

    #[test]
    fn test_overlapping_sends_each_get_a_reply() {
        let mut chat = ChatScreen::new(Duration::from_millis(100));
        type_and_send(&mut chat, "one");
        type_and_send(&mut chat, "two");
        assert_eq!(chat.pending_replies(), 2);

        chat.reduce(MemoryEvent::ReplyDue(1));
        assert!(chat.is_composing());
        chat.reduce(MemoryEvent::ReplyDue(2));
        assert!(!chat.is_composing());

        let users = chat.messages().iter().filter(|m| m.is_user).count();
        let replies = chat.messages().iter().filter(|m| !m.is_user).count();
        assert_eq!(users, 2);
        assert_eq!(replies, 3);
    }

    #[test]
    fn test_out_of_order_replies_settle_their_own_ticket() {
        let mut chat = ChatScreen::new(Duration::from_millis(100));
        type_and_send(&mut chat, "one");
        type_and_send(&mut chat, "two");

        chat.reduce(MemoryEvent::ReplyDue(2));
        assert_eq!(chat.pending_replies(), 1);
        assert!(chat.is_composing());
        chat.reduce(MemoryEvent::ReplyDue(2));
        assert_eq!(chat.pending_replies(), 1);
        chat.reduce(MemoryEvent::ReplyDue(1));
        assert!(!chat.is_composing());

        let replies = chat.messages().iter().filter(|m| !m.is_user).count();
        assert_eq!(replies, 3);
    }

    #[test]
    fn test_unknown_ticket_is_ignored() {
        let mut chat = ChatScreen::default();
        assert!(chat.reduce(MemoryEvent::ReplyDue(42)).is_empty());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut chat = ChatScreen::default();
        type_and_send(&mut chat, "a");
        chat.reduce(MemoryEvent::ReplyDue(1));
        type_and_send(&mut chat, "b");
        let ids: BTreeSet<&str> = chat.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), chat.messages().len());
    }
}
