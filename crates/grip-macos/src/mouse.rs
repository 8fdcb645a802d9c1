use core_graphics::event::CGEvent;
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use grip_core::Point;

/// Returns the global cursor location in top-left-origin screen
/// coordinates.
///
/// Falls back to the origin if Quartz cannot create a sample event.
pub fn current_position() -> Point {
    let sample = CGEventSource::new(CGEventSourceStateID::CombinedSessionState)
        .and_then(CGEvent::new);
    match sample {
        Ok(event) => {
            let location = event.location();
            Point::new(location.x, location.y)
        }
        Err(()) => {
            grip_core::log_warn!("Could not sample the pointer location");
            Point::default()
        }
    }
}
