use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, EncodedImage};
use crate::ports::{ImageClient, ImageRequest};

/// Records requests and answers with a fixed payload, failing for chosen prompts.
#[derive(Clone)]
pub struct FakeImageClient {
    pub requests: Arc<Mutex<Vec<ImageRequest>>>,
    pub payload: String,
    pub failures: HashMap<String, String>,
}

impl FakeImageClient {
    /// Client answering every request with `payload` (base64).
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(vec![])),
            payload: payload.into(),
            failures: HashMap::new(),
        }
    }

    /// Fail any request whose prompt equals `prompt`.
    pub fn failing_on(mut self, prompt: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(prompt.into(), message.into());
        self
    }

    pub fn get_requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.get_requests().into_iter().map(|request| request.prompt).collect()
    }
}

impl ImageClient for FakeImageClient {
    fn generate(&self, request: &ImageRequest) -> Result<EncodedImage, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(message) = self.failures.get(&request.prompt) {
            return Err(AppError::ImageApi { message: message.clone(), status: Some(500) });
        }
        Ok(EncodedImage::new(self.payload.clone()))
    }
}
