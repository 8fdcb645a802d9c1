pub mod config;
pub mod desktop;
pub mod element;
pub mod engine;
pub mod geometry;
pub mod ipc;
pub mod log;
pub mod mode;
pub mod modifier;
pub mod observer;
pub mod pid;
pub mod subscription;

#[cfg(test)]
mod testing;

pub use config::{Config, GestureConfig};
pub use desktop::Desktop;
pub use element::Element;
pub use engine::Engine;
pub use geometry::{Delta, Point, Size};
pub use ipc::{Command, Response};
pub use mode::Mode;
pub use modifier::{Modifier, ModifierSet};
pub use observer::{ModifierFeed, ModifierHandler, ModifierObserver};
pub use subscription::Subscription;

/// A boxed error type for fallible operations outside the gesture path
/// (config IO, PID file, IPC, event-tap setup).
///
/// The gesture path itself never errors: accessibility failures show up
/// as `None` or silent no-ops.
pub type GripResult<T> = Result<T, Box<dyn std::error::Error>>;
