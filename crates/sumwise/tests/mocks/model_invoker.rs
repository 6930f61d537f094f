use std::sync::{Arc, Mutex};
use sumwise::{ModelError, ModelInvoker};

#[derive(Debug, Clone, PartialEq)]
pub struct ModelCall {
    pub prompt: String,
    pub max_output_tokens: u32,
    pub output: Option<String>,
}

/// Replies `summary {n}` to the n-th call (1-based).
#[derive(Clone)]
pub struct MockModelInvoker {
    pub calls: Arc<Mutex<Vec<ModelCall>>>,
    pub fail_with: Option<String>,
    /// Fail only this call; every call fails when `None` and `fail_with` is set.
    pub fail_on: Option<usize>,
}

impl MockModelInvoker {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
            fail_on: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new()
        }
    }

    pub fn failing_on(call: usize, msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            fail_on: Some(call),
            ..Self::new()
        }
    }
}

impl ModelInvoker for MockModelInvoker {
    fn model_id(&self) -> &str {
        "mock-model"
    }

    async fn invoke(&self, prompt: &str, max_output_tokens: u32) -> Result<String, ModelError> {
        let mut calls = self.calls.lock().unwrap();
        let n = calls.len() + 1;

        let fails = match (&self.fail_with, self.fail_on) {
            (Some(_), Some(at)) => at == n,
            (Some(_), None) => true,
            (None, _) => false,
        };
        let output = (!fails).then(|| format!("summary {n}"));

        calls.push(ModelCall {
            prompt: prompt.to_string(),
            max_output_tokens,
            output: output.clone(),
        });

        match output {
            Some(output) => Ok(output),
            None => Err(ModelError::Api {
                status: 503,
                message: self.fail_with.clone().unwrap_or_default(),
            }),
        }
    }
}
