//! Inspection helpers behind `grip debug`.

use std::fmt;

use grip_core::{GripResult, Mode, ModifierSet, Point, Size};

/// What `grip debug hit-test` reports about the pointer location.
#[derive(Debug, Clone, Default)]
pub struct HitTest {
    pub pointer: Point,
    /// Role of the deepest element under the pointer.
    pub element_role: Option<String>,
    /// The window that owns that element, if any.
    pub window: Option<WindowInfo>,
}

/// Snapshot of a window's accessibility attributes.
#[derive(Debug, Clone, Default)]
pub struct WindowInfo {
    pub title: Option<String>,
    pub pid: Option<i32>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub is_main: bool,
}

/// One line of `grip debug events` output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugEvent {
    /// The held modifiers changed.
    Modifiers { held: ModifierSet, mode: Mode },
    /// The pointer moved during an active gesture.
    MouseMoved(Point),
}

impl fmt::Display for DebugEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modifiers { held, mode } => {
                write!(f, "modifiers {:<16} -> {mode}", held.to_string())
            }
            Self::MouseMoved(p) => write!(f, "mouse     ({:.0}, {:.0})", p.x, p.y),
        }
    }
}

/// Hit-tests the current pointer location the same way the daemon does
/// when a gesture starts.
#[cfg(target_os = "macos")]
pub fn hit_test() -> GripResult<HitTest> {
    use grip_core::Element;

    use crate::element::AxElement;

    let system_wide =
        AxElement::system_wide().ok_or("could not create the system-wide AX element")?;
    let pointer = crate::mouse::current_position();

    let Some(element) = system_wide.element_at(pointer) else {
        return Ok(HitTest {
            pointer,
            ..HitTest::default()
        });
    };

    let window = element.ancestor_window().map(|w| WindowInfo {
        title: w.title(),
        pid: w.pid(),
        position: w.position(),
        size: w.size(),
        is_main: w.is_main(),
    });

    Ok(HitTest {
        pointer,
        element_role: element.role(),
        window,
    })
}

#[cfg(not(target_os = "macos"))]
pub fn hit_test() -> GripResult<HitTest> {
    Err(crate::UNSUPPORTED.into())
}

#[cfg(target_os = "macos")]
pub use watch::EventWatch;

#[cfg(target_os = "macos")]
mod watch {
    use std::sync::mpsc;

    use grip_core::modifier::classify;
    use grip_core::{GestureConfig, GripResult, ModifierFeed, Point, Subscription};

    use super::DebugEvent;
    use crate::event_tap::{EventTap, MouseGate};

    /// Live stream of modifier changes and, while a gesture mode is
    /// held, mouse moves.
    pub struct EventWatch {
        events: mpsc::Receiver<DebugEvent>,
        gate: MouseGate,
        mouse: Option<Subscription>,
        _modifiers: Subscription,
        _tap: EventTap,
    }

    impl EventWatch {
        pub fn start(gestures: GestureConfig) -> GripResult<Self> {
            let (tx, events) = mpsc::channel();

            let mouse_tx = tx.clone();
            let tap = EventTap::start(move |p: Point| {
                let _ = mouse_tx.send(DebugEvent::MouseMoved(p));
            })?;

            let modifiers = tap.subscribe_modifiers(Box::new(move |held| {
                let mode = classify(held, &gestures);
                let _ = tx.send(DebugEvent::Modifiers { held, mode });
            }));

            Ok(Self {
                events,
                gate: tap.mouse_gate(),
                mouse: None,
                _modifiers: modifiers,
                _tap: tap,
            })
        }

        /// Blocks until the next event arrives.
        ///
        /// Returns `None` once the tap thread has gone away.
        pub fn next_event(&mut self) -> Option<DebugEvent> {
            let event = self.events.recv().ok()?;
            if let DebugEvent::Modifiers { mode, .. } = event {
                if !mode.is_active() {
                    self.mouse = None;
                } else if self.mouse.is_none() {
                    self.mouse = Some(self.gate.subscribe());
                }
            }
            Some(event)
        }
    }
}
