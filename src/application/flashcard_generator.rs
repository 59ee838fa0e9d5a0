// src/application/flashcard_generator.rs
use crate::domain::{ChatMessage, ChatRequest, DomainError};
use crate::util::text::strip_html_comments;
use tracing::{debug, instrument};

/// Instructions on tone, language and variety, sent as the second system message
pub const ADDITIONAL_PROMPT: &str = "Additional information on the task: Use the same language as used in the note. Do NOT always start the questions with What. Do not repeat questions. Do not rephrase questions already generated. You can also ask the user to describe something or detail a given concept. You can even write flashcards asking to fill a missing word or phrase.";

/// Chat-completion backend used by the generator
pub trait CompletionClient {
    /// Send one request and return the first choice's message content.
    ///
    /// `Ok(None)` means the API answered but carried no content.
    fn complete(&self, request: &ChatRequest) -> Result<Option<String>, DomainError>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for &C {
    fn complete(&self, request: &ChatRequest) -> Result<Option<String>, DomainError> {
        (**self).complete(request)
    }
}

/// Format instructions with the separator embedded verbatim
pub fn base_prompt(separator: &str) -> String {
    format!(
        "I'll provide you with a note. At the end of the note are some flashcards. \
         Identify which are the most important concepts within the note and generate new original flashcard \
         in the format \"question {sep} answer\". Strictly use {sep} to separate a question from its answer. \
         Separate flashcards with a single newline. An example is \"What is chemical formula of water {sep} H2O\". \
         Do not use any prefix text, start generating right away. \
         Try to make them as atomic as possible, but still challenging and rich of information. \
         DO NOT REPEAT OR REPHRASE FLASHCARDS.",
        sep = separator
    )
}

/// Two system messages followed by the note with HTML comments removed
pub fn build_messages(text: &str, separator: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(base_prompt(separator)),
        ChatMessage::system(ADDITIONAL_PROMPT),
        ChatMessage::user(strip_html_comments(text)),
    ]
}

pub struct FlashcardGenerator<C: CompletionClient> {
    client: C,
}

impl<C: CompletionClient> FlashcardGenerator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Ask the model for flashcards covering `text`.
    ///
    /// Exactly one request is made. Transport and API errors are returned as
    /// they come from the client; a missing or blank answer becomes
    /// [`DomainError::NoResponse`].
    #[instrument(level = "debug", skip(self, text, api_key), fields(chars = text.len()))]
    pub fn generate(
        &self,
        text: &str,
        api_key: &str,
        model: &str,
        separator: &str,
    ) -> Result<String, DomainError> {
        let request = ChatRequest {
            api_key: api_key.to_string(),
            model: model.to_string(),
            messages: build_messages(text, separator),
        };

        match self.client.complete(&request)? {
            Some(content) if !content.trim().is_empty() => {
                debug!(chars = content.len(), "Received completion");
                Ok(content)
            }
            _ => Err(DomainError::NoResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SEPARATOR;
    use crate::domain::Role;
    use crate::util::testing::MockCompletionClient;

    #[test]
    fn given_separator_when_building_prompt_then_embeds_it_everywhere() {
        let prompt = base_prompt("||");

        assert!(prompt.contains("\"question || answer\""));
        assert!(prompt.contains("Strictly use || to separate"));
        assert!(prompt.contains("water || H2O"));
        assert!(!prompt.contains("::"));
    }

    #[test]
    fn given_note_when_building_messages_then_orders_system_before_user() {
        let messages = build_messages("Photosynthesis", DEFAULT_SEPARATOR);

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::System);
        assert_eq!(messages[1].content, ADDITIONAL_PROMPT);
        assert_eq!(messages[2].role, Role::User);
        assert_eq!(messages[2].content, "Photosynthesis");
    }

    #[test]
    fn given_hidden_comment_line_when_generating_then_model_never_sees_it() {
        // Arrange
        let client = MockCompletionClient::builder()
            .with_response("Q::A")
            .build();
        let generator = FlashcardGenerator::new(client);

        // Act
        generator
            .generate("# Note\n<!--hidden-->\nBody", "sk-test", "gpt-4", "::")
            .expect("Generation should succeed");

        // Assert
        let requests = generator.client().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages[2].content, "# Note\nBody");
    }

    #[test]
    fn given_credentials_when_generating_then_passes_key_and_model() {
        let client = MockCompletionClient::builder()
            .with_response("Q::A")
            .build();
        let generator = FlashcardGenerator::new(client);

        generator
            .generate("text", "sk-test", "gpt-3.5-turbo", "::")
            .expect("Generation should succeed");

        let requests = generator.client().requests();
        assert_eq!(requests[0].api_key, "sk-test");
        assert_eq!(requests[0].model, "gpt-3.5-turbo");
    }

    #[test]
    fn given_content_when_generating_then_returns_raw_response() {
        let client = MockCompletionClient::builder()
            .with_response("Q1::A1\nQ2::A2\n")
            .build();
        let generator = FlashcardGenerator::new(client);

        let result = generator.generate("text", "sk-test", "gpt-4", "::");

        assert_eq!(result.expect("Generation should succeed"), "Q1::A1\nQ2::A2\n");
    }

    #[test]
    fn given_no_content_when_generating_then_returns_no_response() {
        let client = MockCompletionClient::builder().with_no_content().build();
        let generator = FlashcardGenerator::new(client);

        let result = generator.generate("text", "sk-test", "gpt-4", "::");

        assert!(matches!(result, Err(DomainError::NoResponse)));
    }

    #[test]
    fn given_whitespace_content_when_generating_then_returns_no_response() {
        let client = MockCompletionClient::builder()
            .with_response("  \n\t ")
            .build();
        let generator = FlashcardGenerator::new(client);

        let result = generator.generate("text", "sk-test", "gpt-4", "::");

        assert!(matches!(result, Err(DomainError::NoResponse)));
    }

    #[test]
    fn given_client_error_when_generating_then_propagates_without_retry() {
        let client = MockCompletionClient::builder()
            .with_error("401 Unauthorized")
            .with_response("never reached")
            .build();
        let generator = FlashcardGenerator::new(client);

        let result = generator.generate("text", "sk-bad", "gpt-4", "::");

        match result.expect_err("Should return error") {
            DomainError::Api(msg) => assert_eq!(msg, "401 Unauthorized"),
            other => panic!("Expected Api error, got {:?}", other),
        }
        assert_eq!(generator.client().requests().len(), 1);
    }
}
