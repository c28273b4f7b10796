//! Viewport width shared through resize notifications.

use tayf_core::traits::Viewport;
use tokio::sync::watch;

/// Source of resize notifications, one per page surface.
#[derive(Debug)]
pub struct ViewportWatch {
    tx: watch::Sender<u32>,
}

impl ViewportWatch {
    pub fn new(width: u32) -> Self {
        let (tx, _rx) = watch::channel(width);
        Self { tx }
    }

    /// Publish a new width to every listener.
    pub fn resize(&self, width: u32) {
        self.tx.send_replace(width);
    }

    /// Attach a listener. It detaches when dropped.
    pub fn subscribe(&self) -> WatchViewport {
        WatchViewport {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Listener side of a `ViewportWatch`.
#[derive(Debug)]
pub struct WatchViewport {
    rx: watch::Receiver<u32>,
}

impl Viewport for WatchViewport {
    fn width(&self) -> u32 {
        *self.rx.borrow()
    }

    fn resized(&mut self) -> bool {
        let changed = self.rx.has_changed().unwrap_or(false);
        if changed {
            let _ = self.rx.borrow_and_update();
        }
        changed
    }
}
