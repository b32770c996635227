//! Integration tests for Driftwood
//!
//! These tests exercise the decision engine the way the acquisition
//! pipeline does: profiles built or deserialized as the settings subsystem
//! would supply them, evaluated against held state and candidate lists.

#[path = "integration/cutoff_policy.rs"]
mod cutoff_policy;

#[path = "integration/candidate_selection.rs"]
mod candidate_selection;

#[path = "integration/profile_validation.rs"]
mod profile_validation;
