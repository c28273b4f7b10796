//! # tayf-feeds
//!
//! Live data for the launches section: HTTP clients for the upcoming-launch
//! and astronomy-picture services, the per-widget fetch state machines, and
//! the responsive card layout policy.

pub mod apod;
mod http;
pub mod launches;
pub mod layout;
pub mod viewport;
pub mod widget;
