use objc2_app_kit::{NSApplicationActivationOptions, NSRunningApplication};

/// Brings the application owning `pid` to the foreground.
///
/// Does nothing if no running application has that identifier.
#[allow(unused_unsafe)]
pub fn activate(pid: i32) {
    // SAFETY: plain AppKit lookup; the returned object is retained.
    let Some(app) = (unsafe { NSRunningApplication::runningApplicationWithProcessIdentifier(pid) })
    else {
        grip_core::log_debug!("No running application for pid {pid}");
        return;
    };
    #[allow(deprecated)]
    let activated = unsafe {
        app.activateWithOptions(NSApplicationActivationOptions::ActivateIgnoringOtherApps)
    };
    if !activated {
        grip_core::log_debug!("Activation of pid {pid} was refused");
    }
}
