//! Dialog logic and collaborator trait definitions for Polyskill.
//!
//! This crate defines the "ports" (collaborator traits) that the
//! infrastructure layer implements. It depends only on `polyskill-types`
//! -- never on `polyskill-infra` or any HTTP crate.

pub mod dialog;
pub mod geo;
pub mod scan;
pub mod translate;
