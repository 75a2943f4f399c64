//! Scoped subscription to global input events.
//!
//! Key and mouse events reach the plugin only while it is subscribed to them.
//! [`KeyListener`] ties that subscription to a value: installing it
//! subscribes, dropping it unsubscribes, so the listener lives exactly as
//! long as the component that owns it and is never registered twice.
//!
//! The host calls go through [`EventSource`], which the plugin implements
//! over the Zellij shim and tests implement with a recorder.

/// Input event kinds the listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenedEvent {
    /// Key presses.
    Key,
    /// Pointer presses.
    Mouse,
}

/// Host-side event subscription.
pub trait EventSource {
    /// Starts delivering `events` to the plugin.
    fn subscribe(&mut self, events: &[ListenedEvent]);

    /// Stops delivering `events` to the plugin.
    fn unsubscribe(&mut self, events: &[ListenedEvent]);
}

const LISTENED: [ListenedEvent; 2] = [ListenedEvent::Key, ListenedEvent::Mouse];

/// Global key and pointer listener, subscribed for its whole lifetime.
#[derive(Debug)]
pub struct KeyListener<S: EventSource> {
    source: S,
}

impl<S: EventSource> KeyListener<S> {
    /// Subscribes to key and mouse events through `source`.
    pub fn install(mut source: S) -> Self {
        source.subscribe(&LISTENED);
        tracing::debug!(events = ?LISTENED, "global listener installed");
        Self { source }
    }

    /// Event kinds this listener holds.
    #[must_use]
    pub const fn events(&self) -> &'static [ListenedEvent] {
        &LISTENED
    }
}

impl<S: EventSource> Drop for KeyListener<S> {
    fn drop(&mut self) {
        self.source.unsubscribe(&LISTENED);
        tracing::debug!("global listener removed");
    }
}
