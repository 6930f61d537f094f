use std::future::Future;

use crate::error::ModelError;

/// A text-generation model behind a fallible, possibly slow remote call.
///
/// Implementations own any timeout or retry policy; callers treat a returned
/// error as final for the current run.
pub trait ModelInvoker {
    fn model_id(&self) -> &str;

    /// Deployment region, when the service has one.
    fn region(&self) -> Option<&str> {
        None
    }

    /// Whether the client holds what it needs to reach the service.
    fn is_available(&self) -> bool {
        true
    }

    fn invoke(
        &self,
        prompt: &str,
        max_output_tokens: u32,
    ) -> impl Future<Output = Result<String, ModelError>> + Send;
}

impl<T: ModelInvoker + Send + Sync> ModelInvoker for &T {
    fn model_id(&self) -> &str {
        (**self).model_id()
    }

    fn region(&self) -> Option<&str> {
        (**self).region()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    async fn invoke(&self, prompt: &str, max_output_tokens: u32) -> Result<String, ModelError> {
        (**self).invoke(prompt, max_output_tokens).await
    }
}
