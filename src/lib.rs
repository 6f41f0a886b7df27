//! Statistical natural-language identification for short text samples.
//!
//! The pipeline inspects the Unicode script composition of a sample and, for
//! scripts shared by multiple languages, compares trigram-frequency rankings
//! against precomputed per-language reference models. The binary (`main.rs`)
//! and integration tests (`tests/`) both import from this crate root.

pub mod blocks;
pub mod config;
pub mod error;
pub mod guesser;
pub mod model;
pub mod normalize;
pub mod profile;
pub mod repository;
pub mod router;
pub mod scorer;
