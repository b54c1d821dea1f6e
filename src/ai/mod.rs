pub mod client;
pub mod extract;
pub mod openai;

pub use client::{ChatMessage, CompletionClient, CompletionRequest, ContentPart, ImageUrl, Role};
