//! Shared test doubles for the completion service.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use dilemma::ai::CompletionService;
use dilemma::errors::DilemmaError;
use dilemma::prompt::FRAMEWORKS;

pub enum Behavior {
    /// Every completion returns this text.
    Fixed(String),
    /// Returns `"<framework>-analysis"` for whichever framework the prompt names.
    FrameworkEcho,
    /// The second completion fails; the others succeed.
    FailOnSecond,
    /// Every completion fails with an upstream body made of these bytes.
    FailWithBytes(Vec<u8>),
}

pub struct StubCompletions {
    behavior: Behavior,
    calls: Mutex<Vec<(String, String)>>,
    models: Result<usize, u16>,
}

impl StubCompletions {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
            models: Ok(3),
        }
    }

    pub fn rejecting_credentials(status: u16) -> Self {
        Self {
            behavior: Behavior::Fixed(String::new()),
            calls: Mutex::new(Vec::new()),
            models: Err(status),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletions {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DilemmaError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((system.to_string(), user.to_string()));
            calls.len() - 1
        };

        match &self.behavior {
            Behavior::Fixed(text) => Ok(text.clone()),
            Behavior::FrameworkEcho => FRAMEWORKS
                .iter()
                .find(|f| user.contains(*f))
                .map(|f| format!("{f}-analysis"))
                .ok_or_else(|| DilemmaError::Completion("no framework in prompt".to_string())),
            Behavior::FailOnSecond if index == 1 => Err(DilemmaError::Upstream {
                status: 503,
                body: "service overloaded".to_string(),
            }),
            Behavior::FailOnSecond => Ok("fine".to_string()),
            Behavior::FailWithBytes(raw) => Err(DilemmaError::upstream(502, raw)),
        }
    }

    async fn list_models(&self) -> Result<usize, DilemmaError> {
        self.models
            .map_err(|status| DilemmaError::upstream(status, b"{\"error\":\"invalid api key\"}"))
    }
}
