//! macOS platform layer for Grip.
//!
//! Accessibility, Quartz and AppKit live here; everything the gesture
//! logic needs is reached through the `grip-core` traits. Modules that
//! touch no framework compile on every Unix host.

/// Login item registration via a LaunchAgent plist.
pub mod autostart;

/// Daemon main loop.
pub mod daemon;

/// Inspection helpers for `grip debug`.
pub mod debug;

/// IPC via a Unix domain socket.
pub mod ipc;

/// Accessibility trust check.
pub mod permission;

/// Process utilities (alive check, terminate).
pub mod process;

#[cfg(target_os = "macos")]
mod app;
#[cfg(target_os = "macos")]
pub mod desktop;
#[cfg(target_os = "macos")]
pub mod element;
#[cfg(target_os = "macos")]
pub mod event_tap;
#[cfg(target_os = "macos")]
mod ffi;
/// `CGEventFlags` to modifier set translation.
#[cfg(target_os = "macos")]
pub mod flags;
#[cfg(target_os = "macos")]
mod mouse;

#[cfg(target_os = "macos")]
pub use desktop::MacDesktop;
#[cfg(target_os = "macos")]
pub use element::AxElement;

#[cfg(not(target_os = "macos"))]
const UNSUPPORTED: &str = "grip only runs on macOS";
