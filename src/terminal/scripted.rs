//! In-memory terminal fed from a fixed list of inputs

use super::Terminal;
use crate::game::Message;
use anyhow::Result;
use std::collections::VecDeque;

/// Terminal that replays canned input and records everything shown
#[derive(Debug, Default, Clone)]
pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Lines rendered so far
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts shown so far, in order
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Inputs not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn render_line(&mut self, message: &Message) -> Result<()> {
        self.output.push(message.text.clone());
        Ok(())
    }

    fn request_input(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front())
    }
}
