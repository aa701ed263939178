//! Scripted `TextGenerator` double for tests.
//!
//! Rules are matched against the prompt text in insertion order; the first
//! rule whose needle appears in the prompt decides the outcome. Unmatched
//! prompts fall through to the default script.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{GenerationRequest, LlmError, TextGenerator};

#[derive(Debug, Clone)]
pub enum Script {
    Reply(String),
    Fail,
    Panic,
    Delayed(Duration, Box<Script>),
}

impl Script {
    pub fn reply(text: impl Into<String>) -> Self {
        Script::Reply(text.into())
    }

    pub fn delayed(delay: Duration, then: Script) -> Self {
        Script::Delayed(delay, Box::new(then))
    }
}

pub struct ScriptedGenerator {
    rules: Vec<(String, Script)>,
    default: Script,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(default: Script) -> Self {
        Self {
            rules: Vec::new(),
            default,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn on(mut self, needle: &str, script: Script) -> Self {
        self.rules.push((needle.to_string(), script));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn script_for(&self, prompt: &str) -> Script {
        self.rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, script)| script.clone())
            .unwrap_or_else(|| self.default.clone())
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut script = self.script_for(request.prompt);
        loop {
            match script {
                Script::Reply(text) => return Ok(text),
                Script::Fail => {
                    return Err(LlmError::Api {
                        status: 503,
                        message: "scripted failure".to_string(),
                    })
                }
                Script::Panic => panic!("scripted panic"),
                Script::Delayed(delay, then) => {
                    tokio::time::sleep(delay).await;
                    script = *then;
                }
            }
        }
    }
}
