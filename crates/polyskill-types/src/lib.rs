//! Shared domain types for Polyskill.
//!
//! This crate contains the value objects exchanged between the dialog
//! engine and its collaborators: Utterance, Reply, DialogState,
//! TranslationRequest, ReputationTally, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod dialog;
pub mod error;
pub mod geo;
pub mod reputation;
pub mod reply;
pub mod translation;
pub mod utterance;
