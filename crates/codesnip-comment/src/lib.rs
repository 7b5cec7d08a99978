mod client;
mod template;

pub use client::CommentServiceClient;
pub use template::CommentTemplate;

/// Remote text-transformation interface: raw extracted code in, commented
/// code out.
#[async_trait::async_trait]
pub trait CodeAnnotator: Send + Sync {
    async fn annotate(&self, instruction: &str, code: &str) -> Result<String, CommentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("comment service error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("comment service disabled")]
    Disabled,
}

/// Annotate `code` using the provided client and template.
pub async fn comment_code(
    client: &CommentServiceClient,
    template: &CommentTemplate,
    code: &str,
) -> Result<String, CommentError> {
    let instruction = template.format_instruction();
    client.annotate(&instruction, code).await
}
