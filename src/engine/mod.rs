pub mod engine;
pub mod protocol;

pub mod followup;
pub mod gemini_client;
pub mod prompt_builder;
pub mod response_parser;
