//! Session storage backed by a Dioxus signal.

use dioxus::prelude::*;
use dreamview_core::{Session, SessionCell};

/// A [`Signal`] holding the [`Session`], so every controller transition
/// re-renders the components that read it.
///
/// Controller reads use `peek` semantics and never subscribe the
/// calling scope.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalSession(Signal<Session>);

impl SignalSession {
    /// Wrap an existing signal.
    #[must_use]
    pub const fn new(signal: Signal<Session>) -> Self {
        Self(signal)
    }

    /// The underlying signal, for components that render from it.
    #[must_use]
    pub const fn signal(self) -> Signal<Session> {
        self.0
    }
}

impl SessionCell for SignalSession {
    fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.0.with_peek(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut signal = self.0;
        signal.with_mut(f)
    }
}
