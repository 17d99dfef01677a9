//! Request handling for carewise.
//!
//! This module coordinates a single advice exchange:
//! - Validating the incoming symptom description
//! - Calling the advice generator and the triage classifier
//! - Rendering the optional report

pub mod advice;
