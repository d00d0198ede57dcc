// AI-powered enhancement: expert prefix from the LLM, fluency polish, fixed suffix.
// All LLM calls go through llm_client, never as direct HTTP calls here.

pub mod handlers;
pub mod optimizer;
pub mod prompts;
