//! Render invalidation broadcast.
//!
//! Fired after every surface mutation so renderers know to repaint. The
//! signal carries no payload and is delivered synchronously to every
//! listener in subscription order.

use std::fmt;

/// Handle returned by [`RenderInvalidation::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Synchronous fan-out of "surface updated" notifications.
#[derive(Default)]
pub struct RenderInvalidation {
    listeners: Vec<(SubscriptionId, Box<dyn FnMut()>)>,
    next_id: u64,
    emitted: u64,
}

impl fmt::Debug for RenderInvalidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderInvalidation")
            .field("listeners", &self.listeners.len())
            .field("emitted", &self.emitted)
            .finish()
    }
}

impl RenderInvalidation {
    /// Creates a signal with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener invoked on every [`signal`](Self::signal).
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Notifies every listener. Having zero listeners is fine.
    pub fn signal(&mut self) {
        self.emitted += 1;
        for (_, listener) in &mut self.listeners {
            listener();
        }
    }

    /// Number of signals emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}
