pub mod prompts;
pub mod report;
