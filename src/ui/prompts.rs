use anyhow::Result;
use dialoguer::Input;

/// Collects free-form answers from the operator before a command touches the
/// platform. One question, one raw answer: no trimming beyond what the
/// terminal does, no validation, no re-prompting. An empty answer is passed
/// through unchanged.
pub trait Prompter {
    fn prompt(&self, question: &str) -> Result<String>;
}

/// Terminal-backed prompter. Each call opens the input channel, reads a
/// single line and releases it again.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn prompt(&self, question: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}
