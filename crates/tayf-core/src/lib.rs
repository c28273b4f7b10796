//! # tayf-core
//!
//! Core types, traits, text resolver, configuration, and error handling for
//! the TAYF site.

pub mod config;
pub mod error;
pub mod fallback;
pub mod i18n;
pub mod record;
pub mod traits;
