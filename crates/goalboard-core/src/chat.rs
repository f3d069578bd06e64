//! Chat Session
//!
//! Append-only message log bound to one goal, with single-flight sends.

use crate::epoch::RequestEpoch;
use crate::models::ChatReply;

pub const CONNECTION_ERROR_TEXT: &str = "Connection error.";
pub const GENERIC_ERROR_TEXT: &str = "Error.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Generation timestamp in milliseconds, unique within a session.
    pub id: u64,
    pub sender: Sender,
    pub text: String,
}

/// A chat request the caller must issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSend {
    pub epoch: u64,
    pub goal_id: u32,
    pub message: String,
}

/// How a chat request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The server answered; the body carries `reply` or `error`.
    Answered(ChatReply),
    /// No usable response (transport failure or malformed body).
    Failed,
}

impl ChatOutcome {
    fn into_text(self) -> String {
        match self {
            ChatOutcome::Answered(ChatReply { reply: Some(reply), .. }) if !reply.is_empty() => reply,
            ChatOutcome::Answered(ChatReply { error: Some(error), .. }) if !error.is_empty() => error,
            ChatOutcome::Answered(_) => GENERIC_ERROR_TEXT.to_string(),
            ChatOutcome::Failed => CONNECTION_ERROR_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    goal_id: Option<u32>,
    messages: Vec<ChatMessage>,
    input: String,
    in_flight: bool,
    last_id: u64,
    epoch: RequestEpoch,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goal_id(&self) -> Option<u32> {
        self.goal_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn can_send(&self) -> bool {
        self.goal_id.is_some() && !self.in_flight && !self.input.trim().is_empty()
    }

    /// Start a fresh session for `goal_id`.
    pub fn open(&mut self, goal_id: u32) {
        self.reset();
        self.goal_id = Some(goal_id);
    }

    pub fn close(&mut self) {
        self.reset();
        self.goal_id = None;
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Append the user's message and hand back the request to issue.
    /// Returns `None` for blank input, a closed panel, or while a reply is pending.
    pub fn begin_send(&mut self, now_ms: u64) -> Option<ChatSend> {
        if !self.can_send() {
            return None;
        }
        let goal_id = self.goal_id?;
        let message = std::mem::take(&mut self.input);
        self.push(Sender::User, message.clone(), now_ms);
        self.in_flight = true;
        Some(ChatSend {
            epoch: self.epoch.latest(),
            goal_id,
            message,
        })
    }

    /// Record the result of a send. Returns false if the session moved on since.
    pub fn finish(&mut self, epoch: u64, outcome: ChatOutcome, now_ms: u64) -> bool {
        if !self.epoch.is_current(epoch) {
            log::debug!("[Chat] Dropping reply for closed session epoch={}", epoch);
            return false;
        }
        self.push(Sender::Assistant, outcome.into_text(), now_ms);
        self.in_flight = false;
        true
    }

    fn reset(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.in_flight = false;
        self.epoch.issue();
    }

    fn push(&mut self, sender: Sender, text: String, now_ms: u64) {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.messages.push(ChatMessage { id, sender, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str) -> ChatOutcome {
        ChatOutcome::Answered(ChatReply { reply: Some(text.to_string()), error: None })
    }

    fn open_session() -> ChatSession {
        let mut session = ChatSession::new();
        session.open(7);
        session
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut session = open_session();
        session.set_input("   \n");
        assert_eq!(session.begin_send(1_000), None);
        assert!(session.messages().is_empty());
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_send_and_reply() {
        let mut session = open_session();
        session.set_input("How do I start?");
        let send = session.begin_send(1_000).unwrap();

        assert_eq!(send.goal_id, 7);
        assert_eq!(send.message, "How do I start?");
        assert_eq!(session.input(), "");
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].sender, Sender::User);

        assert!(session.finish(send.epoch, reply("Start small."), 1_000));
        let last = session.messages().last().unwrap();
        assert_eq!(last.sender, Sender::Assistant);
        assert_eq!(last.text, "Start small.");
        assert!(last.id > session.messages()[0].id);
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_single_flight() {
        let mut session = open_session();
        session.set_input("first");
        let send = session.begin_send(10).unwrap();
        session.set_input("second");
        assert!(session.begin_send(11).is_none());
        assert_eq!(session.messages().len(), 1);

        session.finish(send.epoch, reply("ok"), 12);
        assert!(session.begin_send(13).is_some());
    }

    #[test]
    fn test_error_placeholders() {
        let mut session = open_session();

        session.set_input("a");
        let send = session.begin_send(1).unwrap();
        session.finish(send.epoch, ChatOutcome::Failed, 2);
        assert_eq!(session.messages().last().unwrap().text, CONNECTION_ERROR_TEXT);

        session.set_input("b");
        let send = session.begin_send(3).unwrap();
        let answered = ChatOutcome::Answered(ChatReply { reply: None, error: Some("Missing data".into()) });
        session.finish(send.epoch, answered, 4);
        assert_eq!(session.messages().last().unwrap().text, "Missing data");

        session.set_input("c");
        let send = session.begin_send(5).unwrap();
        session.finish(send.epoch, ChatOutcome::Answered(ChatReply::default()), 6);
        assert_eq!(session.messages().last().unwrap().text, GENERIC_ERROR_TEXT);
    }

    #[test]
    fn test_empty_reply_falls_back_to_error_text() {
        let mut session = open_session();

        session.set_input("a");
        let send = session.begin_send(1).unwrap();
        let answered = ChatOutcome::Answered(ChatReply {
            reply: Some(String::new()),
            error: Some("AI failed".into()),
        });
        session.finish(send.epoch, answered, 2);
        assert_eq!(session.messages().last().unwrap().text, "AI failed");

        session.set_input("b");
        let send = session.begin_send(3).unwrap();
        let answered = ChatOutcome::Answered(ChatReply {
            reply: Some(String::new()),
            error: Some(String::new()),
        });
        session.finish(send.epoch, answered, 4);
        assert_eq!(session.messages().last().unwrap().text, GENERIC_ERROR_TEXT);
    }

    #[test]
    fn test_reply_after_close_discarded() {
        let mut session = open_session();
        session.set_input("hello");
        let send = session.begin_send(1).unwrap();

        session.close();
        session.open(8);
        assert!(!session.finish(send.epoch, reply("late"), 2));
        assert!(session.messages().is_empty());
        assert!(!session.is_in_flight());
    }

    #[test]
    fn test_closed_panel_cannot_send() {
        let mut session = ChatSession::new();
        session.set_input("hi");
        assert!(session.begin_send(1).is_none());
    }
}
