use clai_core::{BoxError, Completer, Completion, TokenUsage, Turn};
use openai_chat::{ChatClient, ChatMessage};

/// Bridges the core's `Completer` contract to the chat-completions client.
pub struct OpenAiCompleter {
    client: ChatClient,
}

impl OpenAiCompleter {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

impl Completer for OpenAiCompleter {
    fn complete(&self, model: &str, turns: &[Turn]) -> Result<Completion, BoxError> {
        let messages: Vec<ChatMessage> = turns
            .iter()
            .map(|t| ChatMessage::new(t.role.as_str(), t.content.as_str()))
            .collect();
        let reply = self.client.complete(model, &messages)?;
        Ok(Completion {
            reply: reply.content,
            usage: TokenUsage {
                total: reply.usage.total_tokens,
                prompt: reply.usage.prompt_tokens,
                completion: reply.usage.completion_tokens,
            },
        })
    }
}
