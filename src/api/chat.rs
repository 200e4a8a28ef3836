//! Chat Endpoint

use serde::Serialize;

use super::client::ApiClient;
use super::error::ApiResult;
use super::transport::Transport;
use crate::models::ChatReply;

#[derive(Serialize)]
struct ChatArgs<'a> {
    query: &'a str,
}

impl<T: Transport> ApiClient<T> {
    pub async fn ask(&self, query: &str) -> ApiResult<String> {
        let reply: ChatReply = self.post_json("/api/ai-chat", &ChatArgs { query }).await?;
        Ok(reply.reply)
    }
}
