use anyhow::Result;
use async_trait::async_trait;

pub mod openai;

/// A single prompt -> text exchange with a hosted model.
///
/// `Ok(None)` means the service answered but produced no usable text.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Option<String>>;
}
