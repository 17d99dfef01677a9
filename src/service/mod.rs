//! Service integrations for external APIs and collaborators.
//!
//! This module contains implementations for the services carewise delegates to:
//! - LLM advice generation (e.g., OpenAI)
//! - Report rendering (e.g., Markdown)
//!
//! Each service module defines both a generic trait and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod llm;
pub mod report;
