//! Language model backends.

mod openai;

pub use openai::OpenAiClient;
