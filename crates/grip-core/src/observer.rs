use crate::Subscription;
use crate::config::GestureConfig;
use crate::mode::Mode;
use crate::modifier::{ModifierSet, classify};

/// Handler invoked with the full set of held modifiers on every change.
pub type ModifierHandler = Box<dyn FnMut(ModifierSet) + Send>;

/// A global, cross-application feed of modifier-key changes.
pub trait ModifierFeed {
    /// Registers `handler` until the returned token is dropped.
    ///
    /// The handler runs synchronously on whatever thread delivers the
    /// notification.
    fn subscribe_modifiers(&self, handler: ModifierHandler) -> Subscription;
}

/// Turns modifier-key changes into [`Mode`] notifications.
///
/// Holds nothing but its feed subscription; dropping the observer stops
/// observation.
#[derive(Debug)]
pub struct ModifierObserver {
    _subscription: Subscription,
}

impl ModifierObserver {
    /// Subscribes to `feed` and calls `on_mode` with the classified mode
    /// for every notification, including repeats of the same mode.
    pub fn start_observing<F>(
        feed: &F,
        gestures: GestureConfig,
        mut on_mode: impl FnMut(Mode) + Send + 'static,
    ) -> Self
    where
        F: ModifierFeed + ?Sized,
    {
        let subscription = feed.subscribe_modifiers(Box::new(move |held| {
            on_mode(classify(held, &gestures));
        }));
        Self {
            _subscription: subscription,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::engine::Engine;
    use crate::geometry::{Point, Size};
    use crate::testing::FakeDesktop;

    /// Feed that keeps the registered handler so tests can push events.
    #[derive(Default, Clone)]
    struct FakeFeed {
        handler: Rc<RefCell<Option<ModifierHandler>>>,
    }

    impl FakeFeed {
        fn emit(&self, held: ModifierSet) {
            if let Some(handler) = self.handler.borrow_mut().as_mut() {
                handler(held);
            }
        }

        fn is_subscribed(&self) -> bool {
            self.handler.borrow().is_some()
        }
    }

    impl ModifierFeed for FakeFeed {
        fn subscribe_modifiers(&self, handler: ModifierHandler) -> Subscription {
            *self.handler.borrow_mut() = Some(handler);
            let slot = self.handler.clone();
            Subscription::new(move || {
                slot.borrow_mut().take();
            })
        }
    }

    fn recording_observer(feed: &FakeFeed) -> (ModifierObserver, Arc<Mutex<Vec<Mode>>>) {
        let modes = Arc::new(Mutex::new(Vec::new()));
        let sink = modes.clone();
        let observer =
            ModifierObserver::start_observing(feed, GestureConfig::default(), move |mode| {
                sink.lock().unwrap().push(mode);
            });
        (observer, modes)
    }

    #[test]
    fn forwards_classified_modes() {
        // Arrange
        let feed = FakeFeed::default();
        let (_observer, modes) = recording_observer(&feed);

        // Act
        feed.emit(ModifierSet::CONTROL);
        feed.emit(ModifierSet::CONTROL | ModifierSet::COMMAND);
        feed.emit(ModifierSet::CONTROL | ModifierSet::COMMAND | ModifierSet::OPTION);
        feed.emit(ModifierSet::empty());

        // Assert
        assert_eq!(
            *modes.lock().unwrap(),
            vec![Mode::None, Mode::Drag, Mode::Resize, Mode::None]
        );
    }

    #[test]
    fn dropping_observer_unsubscribes() {
        // Arrange
        let feed = FakeFeed::default();
        let (observer, modes) = recording_observer(&feed);
        assert!(feed.is_subscribed());

        // Act
        drop(observer);
        feed.emit(ModifierSet::CONTROL | ModifierSet::COMMAND);

        // Assert
        assert!(!feed.is_subscribed());
        assert!(modes.lock().unwrap().is_empty());
    }

    #[test]
    fn drag_gesture_end_to_end() {
        // Arrange
        let desktop = FakeDesktop::new();
        let (window, child) = desktop.world.borrow_mut().add_window(
            42,
            Point::new(500.0, 300.0),
            Size::new(400.0, 300.0),
        );
        desktop.world.borrow_mut().hit = Some(child);
        let engine = Rc::new(RefCell::new(Engine::new(desktop.clone())));

        // The observer callback must be Send, so modes are queued and
        // drained on this thread, the way the daemon loop does it.
        let feed = FakeFeed::default();
        let (_observer, modes) = recording_observer(&feed);
        let pump = || {
            for mode in modes.lock().unwrap().drain(..) {
                engine.borrow_mut().set_mode(mode);
            }
        };
        let move_to = |x: f64, y: f64| {
            desktop.move_pointer(x, y);
            engine.borrow_mut().on_mouse_moved();
        };

        // Act / Assert: ctrl+cmd enters drag with one subscription.
        feed.emit(ModifierSet::CONTROL | ModifierSet::COMMAND);
        pump();
        assert_eq!(engine.borrow().mode(), Mode::Drag);
        assert_eq!(desktop.world.borrow().active_subscriptions, 1);

        // First tick resolves the target without moving it.
        move_to(300.0, 300.0);
        assert_eq!(
            desktop.node(window).position,
            Some(Point::new(500.0, 300.0))
        );

        // Second tick applies delta (10, 5).
        move_to(290.0, 295.0);
        assert_eq!(
            desktop.node(window).position,
            Some(Point::new(490.0, 295.0))
        );

        // Releasing the keys ends the gesture.
        feed.emit(ModifierSet::empty());
        pump();
        assert_eq!(engine.borrow().mode(), Mode::None);
        assert!(!engine.borrow().is_subscribed());
        assert_eq!(desktop.world.borrow().active_subscriptions, 0);
    }
}
