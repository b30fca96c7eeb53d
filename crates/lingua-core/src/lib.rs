//! # lingua-core
//!
//! Core types, traits, configuration, resolution, and error handling for Lingua.

pub mod config;
pub mod env;
pub mod error;
pub mod resolve;
pub mod traits;
pub mod tree;
pub mod types;
pub mod validate;

pub use config::shellexpand;
