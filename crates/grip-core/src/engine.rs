//! The window manipulation engine.
//!
//! Owns the current [`Mode`], at most one mouse-move [`Subscription`],
//! and the per-gesture [`Session`]. Mode changes rebuild the
//! subscription; each mouse-move tick resolves the target window once
//! per gesture and applies the mode's transform using the pointer delta
//! since the previous tick.

use crate::Subscription;
use crate::desktop::Desktop;
use crate::element::Element;
use crate::geometry::{Delta, Point};
use crate::mode::Mode;

/// State that lives only while a gesture is in progress.
///
/// Created when the mode leaves [`Mode::None`], dropped when it
/// returns there. Switching between drag and resize keeps it.
#[derive(Debug)]
struct Session<E> {
    /// Window resolved on the first successful tick. Sticky for the
    /// rest of the gesture.
    target: Option<E>,
    /// Pointer sample from the previous successful tick.
    last_pointer: Option<Point>,
}

impl<E> Session<E> {
    fn new() -> Self {
        Self {
            target: None,
            last_pointer: None,
        }
    }
}

/// Moves or resizes the window under the cursor while a mode is held.
pub struct Engine<D: Desktop> {
    desktop: D,
    mode: Mode,
    subscription: Option<Subscription>,
    session: Option<Session<D::Element>>,
}

impl<D: Desktop> Engine<D> {
    /// Creates an idle engine (mode [`Mode::None`], no subscription).
    pub fn new(desktop: D) -> Self {
        Self {
            desktop,
            mode: Mode::None,
            subscription: None,
            session: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn desktop(&self) -> &D {
        &self.desktop
    }

    /// Returns whether a mouse-move subscription is currently held.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Switches to `mode`.
    ///
    /// Setting the current mode again does nothing. Otherwise the old
    /// subscription is dropped before a new one is installed, so at most
    /// one is ever alive. Returns `true` if the mode changed.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if mode == self.mode {
            return false;
        }

        crate::log_info!("Mode: {} -> {}", self.mode, mode);

        // Teardown first, then rebuild.
        self.subscription = None;
        self.mode = mode;

        if mode.is_active() {
            self.subscription = Some(self.desktop.subscribe_mouse_moves());
            if self.session.is_none() {
                self.session = Some(Session::new());
            }
        } else {
            self.session = None;
        }

        true
    }

    /// Handles one mouse-move notification.
    ///
    /// The event payload is not used; the pointer is re-sampled. Every
    /// accessibility failure degrades to a no-op for this tick, and the
    /// next tick retries naturally.
    pub fn on_mouse_moved(&mut self) {
        let transform: fn(&D::Element, Delta) = match self.mode {
            Mode::Resize => resize_window::<D::Element>,
            Mode::Drag => move_window::<D::Element>,
            // A tick queued before the subscription was dropped.
            Mode::None => return,
        };
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let current = self.desktop.pointer_position();

        if session.target.is_none() {
            session.target = self
                .desktop
                .element_at(current)
                .and_then(|element| element.ancestor_window());
            if let Some(window) = &session.target {
                crate::log_debug!(
                    "Target window resolved at ({}, {}) pid={:?}",
                    current.x,
                    current.y,
                    window.pid()
                );
            }
        }

        let Some(window) = session.target.as_ref() else {
            // No window: the next successful tick needs a fresh baseline.
            session.last_pointer = None;
            return;
        };

        if let Some(pid) = window.pid()
            && pid != self.desktop.current_pid()
        {
            self.desktop.activate_process(pid);
        }

        window.bring_to_front();

        if let Some(previous) = session.last_pointer {
            transform(window, previous.delta_to(current));
        }

        session.last_pointer = Some(current);
    }
}

/// Grows or shrinks the window so its bottom-right corner follows the
/// pointer.
fn resize_window<E: Element>(window: &E, delta: Delta) {
    let Some(size) = window.size() else {
        return;
    };
    window.set_size(size.follow(delta));
}

/// Moves the window so it follows the pointer.
fn move_window<E: Element>(window: &E, delta: Delta) {
    if let Some(position) = window.position() {
        window.set_position(position.follow(delta));
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
