//! Core components, types, and utilities for carewise.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The system prompt for the advice generator.
//! - Common types and result handling.

pub mod config;
pub mod prompts;
pub mod types;
