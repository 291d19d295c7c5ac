// PMP experience pipeline: validate → render prompt → generate → respond.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod validation;
