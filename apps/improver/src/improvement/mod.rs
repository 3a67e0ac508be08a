// CV improvement: prompt templates, prompt building, job-context validation,
// the general/specific pipeline and its HTTP handlers.
// All LLM calls go through llm_client::CompletionGateway.

pub mod builder;
pub mod handlers;
pub mod job_context;
pub mod pipeline;
pub mod prompts;

pub use builder::{PromptBuilder, TemplateVariant};
pub use job_context::JobContextError;
