//! Chat Endpoint

use goalboard_core::chat::ChatOutcome;
use goalboard_core::models::ChatRequest;
use goalboard_core::schema;

use super::ApiClient;

impl ApiClient {
    /// Ask the assistant about a goal. Never retried.
    pub async fn send_chat(&self, goal_id: u32, message: &str) -> ChatOutcome {
        let request = ChatRequest { goal_id, message: message.to_string() };
        let result = self
            .post_json("/api/chat", &request)
            .await
            .and_then(|(status, body)| schema::decode_chat_reply(status, &body));
        match result {
            Ok(reply) => ChatOutcome::Answered(reply),
            Err(err) => {
                log::error!("[Chat] Request for goal {} failed: {}", goal_id, err);
                ChatOutcome::Failed
            }
        }
    }
}
