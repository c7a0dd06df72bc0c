//! # sq-core
//!
//! Core types, content catalog, and ID generation for SciQuest.
//!
//! This crate provides the foundational types shared across all SciQuest crates:
//! - Entity structs for stories, quizzes, panels, and child profiles
//! - The closed [`enums::Topic`] enum and its default-topic fallback
//! - The static content catalog (story units and quiz units per topic)
//! - Story ID generation and reserved identifiers
//! - Cross-cutting error types

pub mod avatar;
pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
