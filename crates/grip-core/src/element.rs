use crate::geometry::{Point, Size};

/// Upper bound on parent hops when searching for an ancestor window.
///
/// Accessibility trees are finite, but a misbehaving application can
/// report a cyclic parent chain.
pub const MAX_ANCESTOR_DEPTH: usize = 64;

/// Platform-agnostic handle to an on-screen UI element.
///
/// Each platform crate (e.g. `grip-macos`) provides its own
/// implementation. Every accessor is best-effort: a destroyed element or
/// an exited owner process shows up as `None` or as a silent no-op,
/// never as a panic. Handles are cheap to create and carry no cache.
pub trait Element: Clone {
    /// Role string the platform uses for top-level windows.
    const WINDOW_ROLE: &'static str = "AXWindow";

    /// Returns the on-screen origin of the element.
    fn position(&self) -> Option<Point>;

    /// Moves the element's origin.
    fn set_position(&self, position: Point);

    /// Returns the element's width and height.
    fn size(&self) -> Option<Size>;

    /// Resizes the element.
    fn set_size(&self, size: Size);

    /// Returns the accessibility role (e.g. `"AXWindow"`, `"AXButton"`).
    fn role(&self) -> Option<String>;

    /// Returns the parent element.
    fn parent(&self) -> Option<Self>;

    /// Returns the process identifier of the owning application.
    fn pid(&self) -> Option<i32>;

    /// Makes this the main window of its application, unless it
    /// already is.
    fn bring_to_front(&self);

    /// Walks up the parent chain until an element with the window role
    /// is found.
    ///
    /// Returns `self` when it is already a window, and `None` when the
    /// chain ends first. At most [`MAX_ANCESTOR_DEPTH`] parents are
    /// fetched.
    fn ancestor_window(&self) -> Option<Self> {
        let mut element = self.clone();
        let mut hops = 0;
        loop {
            if element.role().as_deref() == Some(Self::WINDOW_ROLE) {
                return Some(element);
            }
            if hops == MAX_ANCESTOR_DEPTH {
                return None;
            }
            element = element.parent()?;
            hops += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDesktop;

    /// Builds a window with a chain of `hops` groups below it and returns
    /// `(window_id, leaf_id)`.
    fn nested_window(desktop: &FakeDesktop, hops: usize) -> (usize, usize) {
        let mut world = desktop.world.borrow_mut();
        let window = world.add_element("AXWindow", None);
        let leaf = (0..hops).fold(window, |parent, _| {
            world.add_element("AXGroup", Some(parent))
        });
        (window, leaf)
    }

    #[test]
    fn window_returns_itself() {
        // Arrange
        let desktop = FakeDesktop::new();
        let (window, _) = nested_window(&desktop, 0);

        // Act
        let found = desktop.element(window).ancestor_window();

        // Assert
        assert_eq!(found.map(|w| w.id), Some(window));
        assert_eq!(desktop.world.borrow().parent_lookups, 0);
    }

    #[test]
    fn child_control_finds_its_window() {
        // Arrange
        let desktop = FakeDesktop::new();
        let (window, leaf) = nested_window(&desktop, 3);

        // Act
        let found = desktop.element(leaf).ancestor_window();

        // Assert
        assert_eq!(found.map(|w| w.id), Some(window));
        assert_eq!(desktop.world.borrow().parent_lookups, 3);
    }

    #[test]
    fn chain_without_window_is_none() {
        // Arrange
        let desktop = FakeDesktop::new();
        let orphan = desktop.world.borrow_mut().add_orphan();

        // Act / Assert
        assert!(desktop.element(orphan).ancestor_window().is_none());
    }

    #[test]
    fn cyclic_parents_terminate() {
        // Arrange
        let desktop = FakeDesktop::new();
        let (first, second) = {
            let mut world = desktop.world.borrow_mut();
            let first = world.add_element("AXGroup", None);
            let second = world.add_element("AXGroup", Some(first));
            world.nodes[first].parent = Some(second);
            (first, second)
        };

        // Act
        let found = desktop.element(second).ancestor_window();

        // Assert
        assert!(found.is_none());
        assert_eq!(desktop.world.borrow().parent_lookups, MAX_ANCESTOR_DEPTH);
        assert_eq!(desktop.node(first).parent, Some(second));
    }

    #[test]
    fn window_at_max_depth_is_found() {
        // Arrange
        let desktop = FakeDesktop::new();
        let (window, leaf) = nested_window(&desktop, MAX_ANCESTOR_DEPTH);

        // Act
        let found = desktop.element(leaf).ancestor_window();

        // Assert
        assert_eq!(found.map(|w| w.id), Some(window));
        assert_eq!(desktop.world.borrow().parent_lookups, MAX_ANCESTOR_DEPTH);
    }

    #[test]
    fn window_beyond_max_depth_is_not_fetched() {
        // Arrange
        let desktop = FakeDesktop::new();
        let (_, leaf) = nested_window(&desktop, MAX_ANCESTOR_DEPTH + 1);

        // Act
        let found = desktop.element(leaf).ancestor_window();

        // Assert
        assert!(found.is_none());
        assert_eq!(desktop.world.borrow().parent_lookups, MAX_ANCESTOR_DEPTH);
    }
}
