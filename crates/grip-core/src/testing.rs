//! In-memory desktop used by the engine and observer tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Subscription;
use crate::desktop::Desktop;
use crate::element::Element;
use crate::geometry::{Point, Size};

pub(crate) const OWN_PID: i32 = 1;

#[derive(Debug)]
pub(crate) struct Node {
    pub role: Option<String>,
    pub parent: Option<usize>,
    pub pid: Option<i32>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub main: bool,
    pub front_requests: usize,
}

#[derive(Debug, Default)]
pub(crate) struct World {
    pub nodes: Vec<Node>,
    pub pointer: Point,
    /// Node returned by the next hit-test, if any.
    pub hit: Option<usize>,
    pub hit_tests: usize,
    pub active_subscriptions: usize,
    pub total_subscriptions: usize,
    pub activations: Vec<i32>,
    pub parent_lookups: usize,
}

impl World {
    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Adds a window with one child control and returns
    /// `(window_id, child_id)`.
    pub fn add_window(&mut self, pid: i32, position: Point, size: Size) -> (usize, usize) {
        let window = self.push(Node {
            role: Some("AXWindow".into()),
            parent: None,
            pid: Some(pid),
            position: Some(position),
            size: Some(size),
            main: false,
            front_requests: 0,
        });
        let child = self.push(Node {
            role: Some("AXButton".into()),
            parent: Some(window),
            pid: Some(pid),
            position: None,
            size: None,
            main: false,
            front_requests: 0,
        });
        (window, child)
    }

    /// Adds a bare element with the given role under `parent`.
    pub fn add_element(&mut self, role: &str, parent: Option<usize>) -> usize {
        self.push(Node {
            role: Some(role.into()),
            parent,
            pid: Some(OWN_PID + 100),
            position: None,
            size: None,
            main: false,
            front_requests: 0,
        })
    }

    /// Adds an element that has no window ancestor.
    pub fn add_orphan(&mut self) -> usize {
        self.add_element("AXMenuBar", None)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FakeElement {
    pub id: usize,
    world: Rc<RefCell<World>>,
}

impl Element for FakeElement {
    fn position(&self) -> Option<Point> {
        self.world.borrow().nodes[self.id].position
    }

    fn set_position(&self, position: Point) {
        self.world.borrow_mut().nodes[self.id].position = Some(position);
    }

    fn size(&self) -> Option<Size> {
        self.world.borrow().nodes[self.id].size
    }

    fn set_size(&self, size: Size) {
        self.world.borrow_mut().nodes[self.id].size = Some(size);
    }

    fn role(&self) -> Option<String> {
        self.world.borrow().nodes[self.id].role.clone()
    }

    fn parent(&self) -> Option<Self> {
        let parent = {
            let mut world = self.world.borrow_mut();
            world.parent_lookups += 1;
            world.nodes[self.id].parent?
        };
        Some(Self {
            id: parent,
            world: self.world.clone(),
        })
    }

    fn pid(&self) -> Option<i32> {
        self.world.borrow().nodes[self.id].pid
    }

    fn bring_to_front(&self) {
        let mut world = self.world.borrow_mut();
        let node = &mut world.nodes[self.id];
        if !node.main {
            node.main = true;
            node.front_requests += 1;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeDesktop {
    pub world: Rc<RefCell<World>>,
}

impl FakeDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_pointer(&self, x: f64, y: f64) {
        self.world.borrow_mut().pointer = Point::new(x, y);
    }

    pub fn element(&self, id: usize) -> FakeElement {
        FakeElement {
            id,
            world: self.world.clone(),
        }
    }

    pub fn node(&self, id: usize) -> std::cell::Ref<'_, Node> {
        std::cell::Ref::map(self.world.borrow(), |w| &w.nodes[id])
    }
}

impl Desktop for FakeDesktop {
    type Element = FakeElement;

    fn element_at(&self, _point: Point) -> Option<FakeElement> {
        let mut world = self.world.borrow_mut();
        world.hit_tests += 1;
        let id = world.hit?;
        Some(FakeElement {
            id,
            world: self.world.clone(),
        })
    }

    fn pointer_position(&self) -> Point {
        self.world.borrow().pointer
    }

    fn current_pid(&self) -> i32 {
        OWN_PID
    }

    fn activate_process(&self, pid: i32) {
        self.world.borrow_mut().activations.push(pid);
    }

    fn subscribe_mouse_moves(&self) -> Subscription {
        {
            let mut world = self.world.borrow_mut();
            world.active_subscriptions += 1;
            world.total_subscriptions += 1;
        }
        let world = self.world.clone();
        Subscription::new(move || world.borrow_mut().active_subscriptions -= 1)
    }
}
