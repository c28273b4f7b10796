use crate::{
    error::TayfError,
    record::{ApodRecord, LaunchPage},
};
use async_trait::async_trait;

/// Upcoming-launches source.
///
/// The HTTP client implements this; widgets only see the trait so tests can
/// hand them canned or failing sources.
#[async_trait]
pub trait LaunchFeed: Send + Sync {
    /// Human-readable source name.
    fn name(&self) -> &str;

    /// Fetch one page of upcoming launches.
    async fn upcoming(&self) -> Result<LaunchPage, TayfError>;
}

/// Astronomy-picture-of-the-day source.
#[async_trait]
pub trait ApodFeed: Send + Sync {
    /// Human-readable source name.
    fn name(&self) -> &str;

    /// Fetch today's picture record.
    async fn today(&self) -> Result<ApodRecord, TayfError>;
}

/// Live viewport width measurement.
///
/// Injected into the launches widget so layout policy can be driven by fixed
/// widths in tests and by request parameters in the server.
pub trait Viewport: Send + Sync {
    /// Current width in CSS pixels.
    fn width(&self) -> u32;

    /// Whether the width changed since the last call to `resized`.
    fn resized(&mut self) -> bool {
        false
    }
}

/// A viewport that never resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub u32);

impl Viewport for FixedViewport {
    fn width(&self) -> u32 {
        self.0
    }
}
