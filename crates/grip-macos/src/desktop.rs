use grip_core::{Desktop, GripResult, Point, Subscription};

use crate::element::AxElement;
use crate::event_tap::MouseGate;
use crate::{app, mouse};

/// The macOS [`Desktop`]: accessibility hit-testing, Quartz pointer
/// sampling, AppKit activation, and mouse moves from the event tap.
pub struct MacDesktop {
    system_wide: AxElement,
    mouse: MouseGate,
}

impl MacDesktop {
    /// Creates the desktop on top of a running event tap's mouse gate.
    pub fn new(mouse: MouseGate) -> GripResult<Self> {
        let system_wide =
            AxElement::system_wide().ok_or("could not create the system-wide AX element")?;
        Ok(Self { system_wide, mouse })
    }
}

impl Desktop for MacDesktop {
    type Element = AxElement;

    fn element_at(&self, point: Point) -> Option<AxElement> {
        self.system_wide.element_at(point)
    }

    fn pointer_position(&self) -> Point {
        mouse::current_position()
    }

    fn activate_process(&self, pid: i32) {
        app::activate(pid);
    }

    fn subscribe_mouse_moves(&self) -> Subscription {
        self.mouse.subscribe()
    }
}
