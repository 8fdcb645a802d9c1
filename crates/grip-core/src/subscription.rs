/// A live registration with an event feed.
///
/// Dropping the token (or calling [`Subscription::cancel`]) stops
/// delivery. Feeds hand these out from their `subscribe` calls; the
/// holder decides how long delivery lasts.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a token that runs `cancel` exactly once when dropped.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Cancels delivery now.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("live", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn drop_cancels_once() {
        // Arrange
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let token = Subscription::new(move || counter.set(counter.get() + 1));

        // Act
        drop(token);

        // Assert
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn explicit_cancel_does_not_run_twice() {
        // Arrange
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let token = Subscription::new(move || counter.set(counter.get() + 1));

        // Act
        token.cancel();

        // Assert
        assert_eq!(count.get(), 1);
    }
}
