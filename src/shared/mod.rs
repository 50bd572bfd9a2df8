pub mod markdown;
pub mod prompts;
