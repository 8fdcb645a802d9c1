//! Global input observation through a listen-only Quartz event tap.
//!
//! The tap runs on its own thread with its own run loop. It delivers
//! modifier changes to every registered [`ModifierHandler`] and forwards
//! mouse moves only while at least one [`MouseGate`] subscription is
//! alive.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

use core_foundation::runloop::{CFRunLoop, kCFRunLoopCommonModes, kCFRunLoopDefaultMode};
use core_graphics::event::{
    CGEvent, CGEventTap, CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement,
    CGEventTapProxy, CGEventType,
};
use grip_core::{GripResult, ModifierFeed, ModifierHandler, ModifierSet, Point, Subscription};

use crate::flags;

/// How long one run-loop slice lasts before the stop flag is checked.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, ModifierHandler)>,
}

impl Registry {
    fn dispatch(&mut self, held: ModifierSet) {
        for (_, handler) in &mut self.handlers {
            handler(held);
        }
    }
}

/// Handle to the running event tap thread.
///
/// Dropping the handle stops the tap and joins its thread.
pub struct EventTap {
    registry: Arc<Mutex<Registry>>,
    mouse_listeners: Arc<AtomicUsize>,
    stop: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl EventTap {
    /// Installs the tap and starts its run loop.
    ///
    /// `on_mouse_moved` runs on the tap thread with the event location,
    /// but only while mouse moves are subscribed. Fails when the tap
    /// cannot be created, which usually means accessibility access has
    /// not been granted.
    pub fn start(on_mouse_moved: impl Fn(Point) + Send + 'static) -> GripResult<Self> {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let mouse_listeners = Arc::new(AtomicUsize::new(0));
        let stop = Arc::new(AtomicBool::new(false));
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();

        let thread = {
            let registry = registry.clone();
            let mouse_listeners = mouse_listeners.clone();
            let stop = stop.clone();
            thread::spawn(move || {
                run_tap(registry, mouse_listeners, stop, on_mouse_moved, ready_tx);
            })
        };

        ready_rx
            .recv()
            .map_err(|_| -> Box<dyn std::error::Error> {
                "event tap thread exited unexpectedly".into()
            })?
            .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

        Ok(Self {
            registry,
            mouse_listeners,
            stop,
            thread: Some(thread),
        })
    }

    /// Returns a gate that switches mouse-move delivery on while any of
    /// its subscriptions are alive.
    pub fn mouse_gate(&self) -> MouseGate {
        MouseGate {
            listeners: self.mouse_listeners.clone(),
        }
    }

    /// Signals the tap to stop and waits for the thread to finish.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for EventTap {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl ModifierFeed for EventTap {
    fn subscribe_modifiers(&self, handler: ModifierHandler) -> Subscription {
        let id = match self.registry.lock() {
            Ok(mut registry) => {
                let id = registry.next_id;
                registry.next_id += 1;
                registry.handlers.push((id, handler));
                id
            }
            Err(_) => return Subscription::new(|| {}),
        };

        let registry = self.registry.clone();
        Subscription::new(move || {
            if let Ok(mut registry) = registry.lock() {
                registry.handlers.retain(|(h, _)| *h != id);
            }
        })
    }
}

/// Reference-counted switch for mouse-move delivery.
#[derive(Clone)]
pub struct MouseGate {
    listeners: Arc<AtomicUsize>,
}

impl MouseGate {
    /// Enables delivery until the returned token is dropped.
    pub fn subscribe(&self) -> Subscription {
        self.listeners.fetch_add(1, Ordering::SeqCst);
        let listeners = self.listeners.clone();
        Subscription::new(move || {
            listeners.fetch_sub(1, Ordering::SeqCst);
        })
    }

    /// Returns whether any subscription is alive.
    pub fn is_open(&self) -> bool {
        self.listeners.load(Ordering::SeqCst) > 0
    }
}

/// Body of the tap thread.
fn run_tap(
    registry: Arc<Mutex<Registry>>,
    mouse_listeners: Arc<AtomicUsize>,
    stop: Arc<AtomicBool>,
    on_mouse_moved: impl Fn(Point),
    ready_tx: mpsc::Sender<Result<(), String>>,
) {
    // Set from the callback when macOS disables the tap; re-enabled from
    // the run loop, which owns the tap.
    let disabled = AtomicBool::new(false);

    let callback = |_proxy: CGEventTapProxy,
                    event_type: CGEventType,
                    event: &CGEvent|
     -> Option<CGEvent> {
        match event_type {
            CGEventType::FlagsChanged => {
                let held = flags::from_cg_flags(event.get_flags());
                if let Ok(mut registry) = registry.lock() {
                    registry.dispatch(held);
                }
            }
            CGEventType::MouseMoved => {
                if mouse_listeners.load(Ordering::SeqCst) > 0 {
                    let location = event.location();
                    on_mouse_moved(Point::new(location.x, location.y));
                }
            }
            CGEventType::TapDisabledByTimeout | CGEventType::TapDisabledByUserInput => {
                disabled.store(true, Ordering::Relaxed);
            }
            _ => {}
        }
        None
    };

    let tap = match CGEventTap::new(
        CGEventTapLocation::Session,
        CGEventTapPlacement::HeadInsertEventTap,
        CGEventTapOptions::ListenOnly,
        vec![CGEventType::FlagsChanged, CGEventType::MouseMoved],
        callback,
    ) {
        Ok(tap) => tap,
        Err(()) => {
            let _ = ready_tx.send(Err(
                "failed to create event tap (is accessibility access granted?)".into(),
            ));
            return;
        }
    };

    let source = match tap.mach_port.create_runloop_source(0) {
        Ok(source) => source,
        Err(()) => {
            let _ = ready_tx.send(Err("failed to create run loop source".into()));
            return;
        }
    };

    // SAFETY: the mode constants are immutable framework statics.
    unsafe {
        CFRunLoop::get_current().add_source(&source, kCFRunLoopCommonModes);
    }
    tap.enable();
    let _ = ready_tx.send(Ok(()));
    grip_core::log_debug!("Event tap installed");

    while !stop.load(Ordering::Relaxed) {
        // SAFETY: see above.
        CFRunLoop::run_in_mode(unsafe { kCFRunLoopDefaultMode }, POLL_INTERVAL, false);
        if disabled.swap(false, Ordering::Relaxed) {
            grip_core::log_warn!("Event tap was disabled by the system, re-enabling");
            tap.enable();
        }
    }

    grip_core::log_debug!("Event tap stopped");
}
