use crate::Subscription;
use crate::element::Element;
use crate::geometry::Point;

/// The system-wide services the gesture engine needs from a platform.
pub trait Desktop {
    /// The platform's element handle type.
    type Element: Element;

    /// Hit-tests the UI tree at an absolute screen coordinate and
    /// returns the deepest element there.
    fn element_at(&self, point: Point) -> Option<Self::Element>;

    /// Returns the current global cursor location.
    fn pointer_position(&self) -> Point;

    /// Returns the identifier of the running process.
    fn current_pid(&self) -> i32 {
        std::process::id() as i32
    }

    /// Asks the OS to bring the application owning `pid` to the
    /// foreground. Fire-and-forget.
    fn activate_process(&self, pid: i32);

    /// Starts delivering mouse-move notifications until the returned
    /// token is dropped.
    fn subscribe_mouse_moves(&self) -> Subscription;
}
